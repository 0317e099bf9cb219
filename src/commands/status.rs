//! Status command implementation
//!
//! Looks up the status of a single road and prints it.

use crate::api::{HttpTransport, UreqTransport};
use crate::cli::output::print_road_status;
use crate::config::Config;
use crate::error::Result;
use crate::services::RoadStatusService;

use std::io::{self, Write};

/// Execute the road status lookup and return the process exit code
pub fn run_status(road_id: &str) -> Result<i32> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_status_with(road_id, Config::load(), UreqTransport::new(), &mut handle)
}

/// Run the lookup against an arbitrary transport and writer
pub fn run_status_with<T: HttpTransport, W: Write>(
    road_id: &str,
    config: Config,
    transport: T,
    out: &mut W,
) -> Result<i32> {
    let service = RoadStatusService::new(config, transport);
    let status = service.fetch(road_id)?;
    print_road_status(&status, out)?;
    Ok(status.exit_code)
}
