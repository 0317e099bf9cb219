//! Domain models for roadstatus
//!
//! The single entity here is [`RoadStatus`], the typed outcome of one
//! road status query. It is created once per invocation by the service
//! layer and consumed once by the CLI renderer.

use serde::Serialize;

/// Outcome of a single road status query
///
/// Exactly one of the two sides is populated: the success fields
/// (`display_name`, `status_severity`, `status_severity_description`)
/// or `error_message`. `exit_code` is 0 iff the success side holds.
/// Absent fields are `None`, never empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadStatus {
    /// Canonical name of the road (success only)
    pub display_name: Option<String>,
    /// Short status code, e.g. "Good" (success only)
    pub status_severity: Option<String>,
    /// Longer human-readable description (success only)
    pub status_severity_description: Option<String>,
    /// User-facing message (failure only)
    pub error_message: Option<String>,
    /// 0 on success, non-zero on any failure
    pub exit_code: i32,
}

impl RoadStatus {
    /// Create a success result from the (possibly absent) API fields
    pub fn success(
        display_name: Option<String>,
        status_severity: Option<String>,
        status_severity_description: Option<String>,
    ) -> Self {
        Self {
            display_name,
            status_severity,
            status_severity_description,
            error_message: None,
            exit_code: 0,
        }
    }

    /// Create a failure result carrying a user-facing message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            display_name: None,
            status_severity: None,
            status_severity_description: None,
            error_message: Some(message.into()),
            exit_code: 1,
        }
    }

    /// Whether this result is the success side
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
