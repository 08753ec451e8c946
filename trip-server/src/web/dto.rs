//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, Mode};
use crate::lines::{TransitLine, line_color};
use crate::metrics;
use crate::search::ResultSet;

/// Request to start a search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text destination query
    pub query: String,
}

/// Status acknowledgement for lifecycle endpoints.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// What the aggregator is doing now
    pub status: &'static str,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One itinerary (trip root or leg) in a response.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Transport tag (WALK, TRAM, ...)
    pub mode: String,

    /// Duration in seconds, if resolved
    pub duration_secs: Option<u64>,

    /// Human-readable duration, if resolved
    pub duration_label: Option<String>,

    /// Distance in meters, if resolved
    pub distance_meters: Option<u64>,

    /// Estimated CO2 in grams; absent for unknown leg modes
    pub co2_grams: Option<f32>,

    /// Stroke color for drawing
    pub color: &'static str,

    /// Stroke width in points
    pub width: f32,

    /// Whether to draw the path dashed
    pub dashed: bool,

    /// Path as `[lat, lon]` pairs
    pub geometry: Vec<[f64; 2]>,

    /// Child legs, in travel order
    pub legs: Vec<ItineraryResult>,
}

impl ItineraryResult {
    /// Convert an itinerary tree, recursively.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let style = itinerary.mode.line_style();

        Self {
            mode: itinerary.mode.as_str().to_string(),
            duration_secs: itinerary.duration_secs,
            duration_label: metrics::duration_label(itinerary),
            distance_meters: itinerary.distance_meters,
            co2_grams: metrics::co2_grams(itinerary).ok(),
            color: style.color,
            width: style.width,
            dashed: style.dashed,
            geometry: itinerary
                .geometry
                .iter()
                .map(|c| [c.lat(), c.lon()])
                .collect(),
            legs: itinerary.legs.iter().map(Self::from_itinerary).collect(),
        }
    }
}

/// The four-slot result set as served to consumers.
#[derive(Debug, Serialize)]
pub struct ResultSetResponse {
    /// When this snapshot was taken (RFC 3339).
    pub generated_at: String,

    /// True once all four modes have settled
    pub ready: bool,

    pub walk: Option<ItineraryResult>,
    pub tram: Option<ItineraryResult>,
    pub bus: Option<ItineraryResult>,
    pub car: Option<ItineraryResult>,
}

impl ResultSetResponse {
    /// Snapshot a result set.
    pub fn from_results(results: &ResultSet) -> Self {
        let slot = |mode| results.get(mode).map(|it| ItineraryResult::from_itinerary(it));

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            ready: results.ready(),
            walk: slot(Mode::Walk),
            tram: slot(Mode::Tram),
            bus: slot(Mode::Bus),
            car: slot(Mode::Car),
        }
    }
}

/// One static transit line.
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// Line name, e.g. "A"
    pub name: String,

    /// Display color for the line
    pub color: &'static str,

    /// Trace as `[lat, lon]` pairs
    pub coords: Vec<[f64; 2]>,
}

impl LineResult {
    /// Convert a loaded transit line.
    pub fn from_line(line: &TransitLine) -> Self {
        Self {
            name: line.name.clone(),
            color: line_color(&line.name),
            coords: line.coords.iter().map(|c| [c.lat(), c.lon()]).collect(),
        }
    }
}

/// Response for the transit-lines endpoint.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}
