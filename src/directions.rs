//! Google Directions HTTP adapter.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::RouteError;
use crate::geo::Coordinate;
use crate::mode::TravelMode;
use crate::traits::DirectionsProvider;

/// Path of the JSON directions endpoint below `base_url`.
pub const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

#[derive(Clone, Deserialize)]
pub struct DirectionsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DirectionsConfig {
    /// Default endpoint with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Checks that the endpoint and key are set and the timeout is non-zero.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.base_url.trim().is_empty() {
            return Err(RouteError::Config("base_url must not be empty".to_string()));
        }
        if self.api_key.trim().is_empty() {
            return Err(RouteError::Config("api_key must not be empty".to_string()));
        }
        if self.timeout_secs == Some(0) {
            return Err(RouteError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Full URL of the directions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), DIRECTIONS_PATH)
    }
}

/// One origin/destination/mode query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionsRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub mode: TravelMode,
}

impl DirectionsRequest {
    pub fn new(origin: Coordinate, destination: Coordinate, mode: TravelMode) -> Self {
        Self {
            origin,
            destination,
            mode,
        }
    }

    /// Query parameters in the order the endpoint documents them.
    pub fn query_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("origin", self.origin.to_query_value()),
            ("destination", self.destination.to_query_value()),
            ("mode", self.mode.provider_mode().to_string()),
        ];
        if let Some(transit_mode) = self.mode.transit_mode() {
            pairs.push(("transit_mode", transit_mode.to_string()));
        }
        pairs.push(("key", api_key.to_string()));
        pairs
    }
}

/// Directions response document. Only the fields the fetcher reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
    #[serde(default)]
    pub overview_polyline: Option<EncodedPolyline>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub distance: Option<TextValue>,
}

/// Human readable text plus the raw value in meters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextValue {
    pub text: String,
    #[serde(default)]
    pub value: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

/// Blocking HTTP client for the directions endpoint.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    config: DirectionsConfig,
    client: reqwest::blocking::Client,
}

impl DirectionsClient {
    /// Validates `config` and builds the HTTP client.
    pub fn new(config: DirectionsConfig) -> Result<Self, RouteError> {
        config.validate()?;

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }
}

impl DirectionsProvider for DirectionsClient {
    fn directions(&self, request: &DirectionsRequest) -> Result<DirectionsResponse, RouteError> {
        debug!(
            origin = %request.origin.to_query_value(),
            destination = %request.destination.to_query_value(),
            mode = request.mode.provider_mode(),
            "requesting directions"
        );

        let response = self
            .client
            .get(self.config.endpoint())
            .query(&request.query_pairs(&self.config.api_key))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteError::Status(status.as_u16()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
