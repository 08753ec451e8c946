//! Journey-planner HTTP client.
//!
//! Issues one `/plan` request per mode against an OpenTripPlanner-style
//! endpoint and decodes the response into the typed DTOs of
//! [`super::types`]. One search fans out four of these calls concurrently,
//! so the client caps its own concurrency with a semaphore.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::{Coord, Mode};

use super::error::OtpError;
use super::types::PlanResponse;

/// Default base URL: the Grenoble metro area journey planner.
const DEFAULT_BASE_URL: &str = "https://data.mobilites-m.fr/api/routers/default";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Configuration for the journey-planner client.
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Base URL for the API (defaults to the Grenoble planner)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OtpConfig {
    /// Create a config with the default endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Journey-planner API client.
#[derive(Debug, Clone)]
pub struct OtpClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl OtpClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OtpConfig) -> Result<Self, OtpError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Request a plan for one mode between two coordinates.
    ///
    /// The `numItineraries` hint is 1 for WALK and 2 for everything else:
    /// for short multi-modal queries the planner tends to put a walking
    /// alternative first, and asking for two candidates lets the conversion
    /// step's index-1 tie-break recover the requested mode.
    pub async fn plan(
        &self,
        from: Coord,
        to: Coord,
        mode: Mode,
    ) -> Result<PlanResponse, OtpError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| OtpError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/plan", self.base_url);

        let num_itineraries: u8 = match mode {
            Mode::Walk => 1,
            _ => 2,
        };

        let response = self
            .http
            .get(&url)
            .query(&[
                ("fromPlace", from.to_string()),
                ("toPlace", to.to_string()),
                ("mode", mode.as_str().to_string()),
                ("numItineraries", num_itineraries.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OtpError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| OtpError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
