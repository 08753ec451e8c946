//! Road-routing HTTP client.
//!
//! Queries an OSRM-style routing endpoint for a single driving route.
//! The car slot of a search has no multi-modal decomposition upstream, so
//! this client is all the CAR pipeline needs besides the conversion in
//! [`super::convert`].

use serde::Deserialize;

use crate::domain::Coord;

use super::error::OsrmError;

/// Default base URL: the public OSRM demo router.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Response from `GET /route/v1/driving/...`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    /// "Ok" when a route was found.
    pub code: String,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<RouteDto>,
}

/// One driving route.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    /// Total distance in meters.
    pub distance: f64,

    /// Total expected duration in seconds.
    pub duration: f64,

    /// Full route path as an encoded polyline.
    pub geometry: String,
}

/// Configuration for the road-routing client.
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OsrmConfig {
    /// Create a config with the default endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Road-routing API client.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OsrmConfig) -> Result<Self, OsrmError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Request the best driving route between two coordinates.
    pub async fn route(&self, from: Coord, to: Coord) -> Result<RouteDto, OsrmError> {
        // OSRM takes lon,lat pairs, the reverse of the planner's order.
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url,
            from.lon(),
            from.lat(),
            to.lon(),
            to.lat(),
        );

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "full")])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OsrmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let decoded: RouteResponse = serde_json::from_str(&body).map_err(|e| OsrmError::Json {
            message: e.to_string(),
        })?;

        if decoded.code != "Ok" {
            return Err(OsrmError::NoRoute { code: decoded.code });
        }

        decoded
            .routes
            .into_iter()
            .next()
            .ok_or(OsrmError::NoRoute {
                code: "empty routes".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = OsrmConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_base_url() {
        let config = OsrmConfig::new().with_base_url("http://localhost:5000");
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn client_creation() {
        assert!(OsrmClient::new(OsrmConfig::new()).is_ok());
    }

    #[test]
    fn response_deserializes() {
        let json = r#"{
            "code": "Ok",
            "routes": [
                { "distance": 3214.5, "duration": 481.2, "geometry": "_p~iF~ps|U" }
            ]
        }"#;

        let response: RouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, "Ok");
        assert_eq!(response.routes[0].distance, 3214.5);
    }

    #[test]
    fn error_response_deserializes_without_routes() {
        let json = r#"{ "code": "NoRoute", "message": "Impossible route" }"#;

        let response: RouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, "NoRoute");
        assert!(response.routes.is_empty());
    }
}
