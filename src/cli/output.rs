//! Output formatting
//!
//! Renders a [`RoadStatus`] to any writer, so the formatting is testable
//! without capturing the process stdout.

use crate::domain::RoadStatus;

use std::io::{self, Write};

/// Write the human-readable rendering of a road status result
///
/// Success prints the three-line status block; failure prints the error
/// message alone. Absent fields render as empty strings here, at the
/// output boundary only.
pub fn print_road_status<W: Write>(status: &RoadStatus, out: &mut W) -> io::Result<()> {
    if status.is_success() {
        writeln!(
            out,
            "The status of the {} is as follows:",
            status.display_name.as_deref().unwrap_or("")
        )?;
        writeln!(
            out,
            "    Road Status is {}",
            status.status_severity.as_deref().unwrap_or("")
        )?;
        writeln!(
            out,
            "    Road Status Description is {}",
            status.status_severity_description.as_deref().unwrap_or("")
        )?;
    } else {
        writeln!(out, "{}", status.error_message.as_deref().unwrap_or(""))?;
    }

    Ok(())
}
