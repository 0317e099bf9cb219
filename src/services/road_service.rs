//! Road status query service
//!
//! Builds the request URL, issues the GET through the transport, and
//! translates the HTTP response into a [`RoadStatus`].

use crate::api::HttpTransport;
use crate::config::Config;
use crate::domain::RoadStatus;
use crate::error::ApiError;

use serde::Deserialize;

/// One road entry as the API returns it inside the response array
///
/// Every key is optional; an absent key leaves the field `None`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoadEntry {
    display_name: Option<String>,
    status_severity: Option<String>,
    status_severity_description: Option<String>,
}

/// Service for querying the status of a single road
pub struct RoadStatusService<T: HttpTransport> {
    config: Config,
    transport: T,
}

impl<T: HttpTransport> RoadStatusService<T> {
    /// Create a new service from configuration and a transport
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Query the status of `road_id`
    ///
    /// Recoverable outcomes (found, not found, unexpected status) come back
    /// as `Ok(RoadStatus)`; transport and parse failures come back as `Err`
    /// for the CLI boundary to report.
    pub fn fetch(&self, road_id: &str) -> Result<RoadStatus, ApiError> {
        log::debug!("querying road status for {}", road_id);

        let url = self.request_url(road_id);
        let response = self.transport.get(&url)?;

        if response.is_success() {
            parse_road_status(&response.body)
        } else if response.status == 404 {
            // The API's own message field is intentionally ignored here.
            Ok(RoadStatus::failure(format!(
                "{} is not a valid road",
                road_id
            )))
        } else {
            Ok(RoadStatus::failure(format!(
                "Unexpected error: {}",
                response.status
            )))
        }
    }

    fn request_url(&self, road_id: &str) -> String {
        let api = &self.config.api;
        format!(
            "{}/Road/{}?app_id={}&app_key={}",
            api.base_url.trim_end_matches('/'),
            road_id,
            api.app_id,
            api.app_key
        )
    }
}

fn parse_road_status(body: &str) -> Result<RoadStatus, ApiError> {
    let mut roads: Vec<RoadEntry> = serde_json::from_str(body)?;

    if roads.is_empty() {
        return Err(ApiError::MalformedResponse(
            "response array is empty".to_string(),
        ));
    }
    let road = roads.remove(0);

    Ok(RoadStatus::success(
        road.display_name,
        road.status_severity,
        road.status_severity_description,
    ))
}
