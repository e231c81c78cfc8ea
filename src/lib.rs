//! Campus records library
//!
//! Tracks students, courses and enrollments for one institution, enforces the
//! enrollment rules and derives GPA and transcripts. The `campus` binary is a
//! thin menu and subcommand layer over this crate.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
