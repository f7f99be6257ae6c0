//! # Emptrack Architecture
//!
//! Emptrack is an interactive console for keeping track of a company's
//! departments, roles and employees in a MySQL database. The core is a library;
//! the terminal client is a thin layer on top.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, logging, config, connection, terminal prompter    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Menu + Flows (menu.rs, flows/*.rs)                         │
//! │  - Session loop and one interactive flow per action         │
//! │  - Talks to the operator only through the Prompter trait    │
//! │  - Resolves picked labels to ids (lookup.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Inserts, updates, listings, guarded deletes              │
//! │  - Returns CmdResult, no I/O                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - MySqlStore (production), InMemoryStore (testing)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal in Core
//!
//! Everything below `cli/` takes Rust arguments and returns Rust types. Flows
//! ask questions through [`prompt::Prompter`], so the whole session loop runs
//! in tests against [`store::memory::InMemoryStore`] and a scripted prompter.
//!
//! ## Failure Model
//!
//! A failed query aborts the current flow only: the menu logs it, shows it,
//! and comes back. Blocked deletes are warnings, not errors. The session ends
//! on interrupt, end of input, or a fatal error (see [`error::TrackerError::is_fatal`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One function per operation
//! - [`flows`]: Interactive flows, one per menu action
//! - [`menu`]: The menu actions and session loop
//! - [`lookup`]: Label to id resolution for pickers
//! - [`prompt`]: The prompter trait and field validators
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Rows and inputs (`Department`, `Role`, `Employee`, ...)
//! - [`config`]: Connection settings
//! - [`error`]: Error types
//! - `cli`: Flags, logging and the terminal prompter for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod flows;
pub mod lookup;
pub mod menu;
pub mod model;
pub mod prompt;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
