//! The per-mode acquisition pipeline seam.
//!
//! One provider call covers a whole pipeline: issue the mode's network
//! request and decode the response into an itinerary tree. The trait
//! abstraction allows the aggregator to be tested with mock pipelines.

use std::future::Future;

use crate::domain::{Coord, Itinerary, Mode};
use crate::osrm::{self, OsrmClient, OsrmError};
use crate::otp::{self, OtpClient, OtpError, ParseError};

/// Error from one mode's acquisition pipeline.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The journey-planner call failed
    #[error("planner: {0}")]
    Otp(#[from] OtpError),

    /// The road-routing call failed
    #[error("road routing: {0}")]
    Osrm(#[from] OsrmError),

    /// The planner answered but the response was unusable
    #[error("parse: {0}")]
    Parse(#[from] ParseError),
}

/// Runs one mode's acquisition pipeline.
pub trait PlanProvider: Clone + Send + Sync + 'static {
    /// Fetch and decode the itinerary for one mode.
    fn fetch(
        &self,
        origin: Coord,
        destination: Coord,
        mode: Mode,
    ) -> impl Future<Output = Result<Itinerary, FetchError>> + Send;
}

/// The production pipeline: OSRM for CAR, the journey planner for the rest.
#[derive(Debug, Clone)]
pub struct TripPlanner {
    otp: OtpClient,
    road: OsrmClient,
}

impl TripPlanner {
    /// Create a provider over the two upstream clients.
    pub fn new(otp: OtpClient, road: OsrmClient) -> Self {
        Self { otp, road }
    }
}

impl PlanProvider for TripPlanner {
    async fn fetch(
        &self,
        origin: Coord,
        destination: Coord,
        mode: Mode,
    ) -> Result<Itinerary, FetchError> {
        match mode {
            Mode::Car => {
                let route = self.road.route(origin, destination).await?;
                Ok(osrm::convert_route(&route, origin, destination))
            }
            _ => {
                let response = self.otp.plan(origin, destination, mode).await?;
                Ok(otp::convert_plan(&response, mode, origin, destination)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osrm::OsrmConfig;
    use crate::otp::OtpConfig;

    #[test]
    fn provider_creation() {
        let otp = OtpClient::new(OtpConfig::new()).unwrap();
        let road = OsrmClient::new(OsrmConfig::new()).unwrap();
        let _provider = TripPlanner::new(otp, road);
    }

    #[test]
    fn fetch_error_display() {
        let err = FetchError::Parse(ParseError::MissingPlan);
        assert_eq!(err.to_string(), "parse: response carries no plan");
    }
}
