//! CLI command handlers for `campus`.
//!
//! Each subcommand lives in its own submodule.

pub mod backup;
pub mod config;
pub mod import;
pub mod shell;
