//! roadstatus - TfL road status client library
//!
//! This library provides the core functionality for querying the TfL road
//! status API and turning the response into a typed result.
//!
//! # Modules
//!
//! - [`api`]: HTTP transport abstraction
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models
//! - [`error`]: Error types
//! - [`services`]: Business logic services

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};

use clap::error::ErrorKind;
use clap::Parser;

use std::ffi::OsString;

/// Run the CLI with the given arguments and return the process exit code
///
/// The exit code travels back through normal control flow; `main` performs
/// the only actual process termination. Usage errors return 1 before any
/// network I/O happens; errors escaping the command handler are caught
/// here, reported, and also return 1.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not usage errors.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            return code;
        }
    };

    report(commands::run_status(&cli.road_id))
}

/// Map a command outcome to the process exit code
///
/// This is the single catch-all boundary: any error escaping the command
/// handler is reported here and becomes exit code 1.
fn report(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("An error occurred: {}", err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_without_arguments_is_a_usage_error() {
        assert_eq!(run(["roadstatus"]), 1);
    }

    #[test]
    fn test_run_with_extra_arguments_is_a_usage_error() {
        assert_eq!(run(["roadstatus", "A2", "A3"]), 1);
    }

    #[test]
    fn test_run_help_exits_zero() {
        assert_eq!(run(["roadstatus", "--help"]), 0);
    }

    #[test]
    fn test_successful_outcome_keeps_its_exit_code() {
        assert_eq!(report(Ok(0)), 0);
        assert_eq!(report(Ok(1)), 1);
    }

    #[test]
    fn test_network_failure_is_reported_with_exit_one() {
        let transport = mock::MockTransport::with_network_failure("connection refused");
        let result = commands::run_status_with(
            "A2",
            config::Config::default(),
            transport,
            &mut Vec::<u8>::new(),
        );
        assert_eq!(report(result), 1);
    }
}
