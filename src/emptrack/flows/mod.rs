//! # Interactive Flows
//!
//! One function per menu action. A flow fetches its selection pools through
//! [`TrackerApi`](crate::api::TrackerApi), asks the operator through a
//! [`Prompter`](crate::prompt::Prompter), then runs a single command.
//!
//! Flows return the command's [`CmdResult`] and leave rendering to the caller.
//! The only exception is a flow that has something to say before it continues
//! into another one (the department-move reminder), which shows that message
//! itself.
//!
//! An empty selection pool is not an error: the flow returns an info message
//! and the menu comes back.

use crate::commands::{CmdMessage, CmdResult};

pub mod add;
pub mod delete;
pub mod update;
pub mod view;

pub(crate) fn nothing_to_choose(what: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(format!(
        "There are no {} to choose from.",
        what
    )))
}
