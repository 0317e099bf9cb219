//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod status;

pub use status::{run_status, run_status_with};
