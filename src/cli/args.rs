//! CLI argument definitions using clap derive

use clap::Parser;

/// Road status lookup tool
///
/// Queries the TfL road status API for a single road and prints its
/// current status.
#[derive(Parser, Debug)]
#[command(name = "roadstatus")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "roadstatus <road_id>")]
pub struct Cli {
    /// Road identifier to query (e.g. A2)
    #[arg(value_name = "road_id")]
    pub road_id: String,
}
