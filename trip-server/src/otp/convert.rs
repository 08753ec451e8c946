//! Conversion from plan-response DTOs to the itinerary tree.
//!
//! This is where a raw `/plan` response becomes a validated trip root with
//! ordered leg children. Conversion is per-mode: any error here leaves that
//! mode's result slot empty and touches nothing else.

use tracing::warn;

use crate::domain::{Coord, Itinerary, LegMode, Mode};
use crate::polyline;

use super::error::ParseError;
use super::types::{ApiItinerary, ApiLeg, PlanResponse};

/// Convert one plan response into the itinerary tree for a requested mode.
///
/// Candidate selection reproduces the upstream planner's observed behavior
/// exactly: a WALK request takes candidate 0; any other mode takes
/// candidate 1 when at least two candidates exist, else candidate 0. The
/// planner often ranks a plain walking alternative first even when a
/// transit mode was requested, and the second candidate is then the one
/// actually using the requested mode. Asymmetric, but load-bearing.
pub fn convert_plan(
    response: &PlanResponse,
    mode: Mode,
    origin: Coord,
    destination: Coord,
) -> Result<Itinerary, ParseError> {
    let plan = response.plan.as_ref().ok_or(ParseError::MissingPlan)?;
    let candidates = plan.itineraries.as_deref().ok_or(ParseError::MissingPlan)?;

    if candidates.is_empty() {
        return Err(ParseError::EmptyItineraries);
    }

    let candidate = select_candidate(candidates, mode);

    let mut legs = Vec::with_capacity(candidate.legs.len());
    let mut cursor = origin;
    for leg in &candidate.legs {
        legs.push(convert_leg(leg, &mut cursor)?);
    }

    Ok(Itinerary::trip(
        origin,
        destination,
        mode,
        candidate.duration.max(0) as u64,
        candidate.walk_distance.max(0.0) as u64,
        legs,
    ))
}

/// Pick the candidate itinerary for the requested mode.
fn select_candidate(candidates: &[ApiItinerary], mode: Mode) -> &ApiItinerary {
    if mode == Mode::Walk {
        &candidates[0]
    } else {
        candidates.get(1).unwrap_or(&candidates[0])
    }
}

/// Convert a single leg, threading endpoint positions through `cursor`.
///
/// Leg endpoints come from the decoded path when there is one; a leg whose
/// geometry is missing or undecodable sits at the cursor with zero extent.
fn convert_leg(leg: &ApiLeg, cursor: &mut Coord) -> Result<Itinerary, ParseError> {
    let mode = leg
        .mode
        .as_deref()
        .ok_or(ParseError::MalformedLeg("missing mode"))?;
    let start_time = leg
        .start_time
        .ok_or(ParseError::MalformedLeg("missing startTime"))?;
    let end_time = leg
        .end_time
        .ok_or(ParseError::MalformedLeg("missing endTime"))?;

    if end_time < start_time {
        return Err(ParseError::MalformedLeg("leg ends before it starts"));
    }

    // Source times are milliseconds since epoch; truncate to whole seconds.
    let duration_secs = ((end_time - start_time) / 1000) as u64;

    let points = leg
        .leg_geometry
        .as_ref()
        .and_then(|g| g.points.as_deref())
        .ok_or(ParseError::MalformedLeg("missing leg geometry"))?;

    // An undecodable path degrades to "no renderable path"; the leg keeps
    // its timing and stays in the trip.
    let geometry = match polyline::decode(points) {
        Ok(geometry) => geometry,
        Err(e) => {
            warn!(mode, error = %e, "leg geometry undecodable, keeping leg without a path");
            Vec::new()
        }
    };

    let origin = geometry.first().copied().unwrap_or(*cursor);
    let destination = geometry.last().copied().unwrap_or(origin);
    *cursor = destination;

    Ok(Itinerary::leg(
        origin,
        destination,
        LegMode::parse(mode),
        duration_secs,
        geometry,
    ))
}
