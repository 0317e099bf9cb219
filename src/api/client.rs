//! Real HTTP transport backed by ureq

use crate::api::traits::{ApiResponse, HttpTransport};
use crate::error::ApiError;

use ureq::tls::{TlsConfig, TlsProvider};
use ureq::Agent;

/// Production transport wrapping a blocking [`ureq::Agent`]
///
/// The agent is configured to hand non-2xx statuses back as responses
/// rather than errors, since the service layer branches on the status
/// code itself. Timeouts are the library defaults; nothing is retried.
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Create a transport with default settings
    pub fn new() -> Self {
        // ureq never selects the TLS provider from compiled features; it
        // must be named explicitly or https requests panic at dispatch.
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .tls_config(
                TlsConfig::builder()
                    .provider(TlsProvider::NativeTls)
                    .build(),
            )
            .build();
        Self {
            agent: config.into(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, url: &str) -> Result<ApiResponse, ApiError> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        log::debug!("received {} ({} bytes)", status, body.len());

        Ok(ApiResponse { status, body })
    }
}
