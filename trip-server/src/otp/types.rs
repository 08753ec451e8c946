//! Journey-planner API response DTOs.
//!
//! These types map directly to the OpenTripPlanner `/plan` JSON response.
//! Fields the conversion step must validate itself are `Option` so that a
//! missing field surfaces as a typed parse error for that mode instead of
//! a blanket deserialization failure.

use serde::Deserialize;

/// Response from `GET /plan`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanResponse {
    /// The computed plan. Absent when the planner could not answer at all.
    pub plan: Option<Plan>,
}

/// The plan body: candidate itineraries for one origin/destination/mode.
#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    /// Candidate itineraries, best-first as the planner sees it.
    pub itineraries: Option<Vec<ApiItinerary>>,
}

/// One candidate itinerary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiItinerary {
    /// Total trip duration in seconds.
    pub duration: i64,

    /// Total walking distance in meters.
    pub walk_distance: f64,

    /// Ordered legs of the trip.
    #[serde(default)]
    pub legs: Vec<ApiLeg>,
}

/// One leg of a candidate itinerary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLeg {
    /// Transport tag for this leg (WALK, TRAM, BUS, ...).
    pub mode: Option<String>,

    /// Departure time, milliseconds since the Unix epoch.
    pub start_time: Option<i64>,

    /// Arrival time, milliseconds since the Unix epoch.
    pub end_time: Option<i64>,

    /// The leg's path.
    pub leg_geometry: Option<ApiLegGeometry>,
}

/// Encoded geometry of a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLegGeometry {
    /// Encoded-polyline path.
    pub points: Option<String>,
}
