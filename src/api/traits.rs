//! Trait definitions for the HTTP transport
//!
//! This trait abstracts the HTTP round trip to enable testing with mocks.

use crate::error::ApiError;

/// The slice of an HTTP response the client needs: status code and body
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl ApiResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for issuing HTTP GET requests
///
/// Non-2xx statuses are returned as plain [`ApiResponse`]s so the caller
/// can branch on them; `Err` is reserved for requests that never completed.
pub trait HttpTransport {
    /// Perform a GET request and return status and body
    fn get(&self, url: &str) -> Result<ApiResponse, ApiError>;
}
