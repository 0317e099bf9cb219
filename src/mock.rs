//! Mock implementations for testing
//!
//! Provides a mock HTTP transport for unit testing without a network.

use crate::api::{ApiResponse, HttpTransport};
use crate::error::ApiError;

use std::sync::Mutex;

/// Mock transport returning a canned response or failure
///
/// Records every requested URL so tests can assert on request construction.
#[derive(Debug)]
pub struct MockTransport {
    status: u16,
    body: String,
    failure: Option<String>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Create a mock that answers every request with `status` and `body`
    pub fn with_response(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that fails every request with a network error
    pub fn with_network_failure(message: &str) -> Self {
        Self {
            status: 0,
            body: String::new(),
            failure: Some(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for MockTransport {
    fn get(&self, url: &str) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(url.to_string());

        match &self.failure {
            Some(message) => Err(ApiError::Network(message.clone())),
            None => Ok(ApiResponse {
                status: self.status,
                body: self.body.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_returns_canned_response() {
        let mock = MockTransport::with_response(200, "[]");
        let response = mock.get("http://example.test/Road/A2").unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "[]");
    }

    #[test]
    fn test_mock_records_requests() {
        let mock = MockTransport::with_response(200, "[]");
        mock.get("http://example.test/one").unwrap();
        mock.get("http://example.test/two").unwrap();
        assert_eq!(
            mock.requests(),
            vec!["http://example.test/one", "http://example.test/two"]
        );
    }

    #[test]
    fn test_mock_network_failure() {
        let mock = MockTransport::with_network_failure("dns failure");
        let result = mock.get("http://example.test/Road/A2");
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
