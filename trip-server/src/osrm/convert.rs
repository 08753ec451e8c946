//! Conversion from a road route to a single-leg itinerary tree.

use tracing::warn;

use crate::domain::{Coord, Itinerary};
use crate::polyline;

use super::client::RouteDto;

/// Build the CAR trip root from a road route.
///
/// The route's totals are truncated to whole units; an undecodable route
/// geometry degrades to an empty path, keeping the trip selectable.
pub fn convert_route(route: &RouteDto, origin: Coord, destination: Coord) -> Itinerary {
    let geometry = match polyline::decode(&route.geometry) {
        Ok(geometry) => geometry,
        Err(e) => {
            warn!(error = %e, "route geometry undecodable, keeping route without a path");
            Vec::new()
        }
    };

    Itinerary::road_trip(
        origin,
        destination,
        route.duration.max(0.0) as u64,
        route.distance.max(0.0) as u64,
        geometry,
    )
}
