//! # Command Layer
//!
//! Each operation the console offers is a plain function here, taking a
//! [`DataStore`](crate::store::DataStore) and already-resolved ids, and returning
//! a [`CmdResult`]. The interactive flows (`crate::flows`) gather the inputs;
//! commands do the work.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr or terminal concerns
//! - **User interaction**: No prompts; the flow layer asks, commands act
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries an optional [`Listing`] (rows for a table), the number
//! of rows a mutation touched, and leveled [`CmdMessage`]s. Blocked deletes
//! are not errors: they come back as a warning message with `affected_rows == 0`.
//!
//! ## Command Modules
//!
//! - [`view`]: listings, filtered and unfiltered
//! - [`create`]: inserts
//! - [`update`]: employee field updates
//! - [`delete`]: removals, gated by [`guard`]
//! - [`guard`]: reference checks run before destructive operations

use crate::model::{Department, EmployeeDetail, RoleDetail};

pub mod create;
pub mod delete;
pub mod guard;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Rows to render as a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Employees(Vec<EmployeeDetail>),
    Roles(Vec<RoleDetail>),
    Departments(Vec<Department>),
}

impl Listing {
    pub fn len(&self) -> usize {
        match self {
            Listing::Employees(rows) => rows.len(),
            Listing::Roles(rows) => rows.len(),
            Listing::Departments(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub listing: Option<Listing>,
    pub affected_rows: u64,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_affected_rows(mut self, rows: u64) -> Self {
        self.affected_rows = rows;
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
