//! Itinerary tree types.
//!
//! An `Itinerary` node represents either a complete trip (a *trip root*,
//! whose `legs` hold the ordered per-leg children) or one leg of a trip
//! (a leaf with its own geometry and timing). The same shape is used for
//! both so consumers can walk any node uniformly.

use super::{Coord, LegMode, Mode};

/// One trip or one leg of a trip.
///
/// # Invariants
///
/// - `legs` is ordered in travel order; downstream rendering and duration
///   summation rely on it.
/// - A root's `mode` is the *requested* mode for its result slot, which is
///   not necessarily the mode of every child (a TRAM request typically
///   decomposes into WALK-TRAM-WALK legs).
/// - A root's own `geometry` is left empty; consumers draw the legs.
///   The CAR trip is the exception: it has no decomposition upstream, so
///   its single leg carries the route geometry and the root holds that leg
///   as its sole child, keeping mode handling uniform across all four slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// Where this trip or leg starts.
    pub origin: Coord,
    /// Where this trip or leg ends.
    pub destination: Coord,
    /// How this trip was requested, or how this leg is traversed.
    pub mode: LegMode,
    /// Total duration in whole seconds; `None` until resolved.
    pub duration_secs: Option<u64>,
    /// Total distance in whole meters; `None` until resolved.
    pub distance_meters: Option<u64>,
    /// The path of this leg. Empty for trip roots and for legs whose
    /// geometry could not be decoded.
    pub geometry: Vec<Coord>,
    /// Ordered child legs; empty for a leaf leg.
    pub legs: Vec<Itinerary>,
}

impl Itinerary {
    /// Construct a resolved trip root from its ordered legs.
    pub fn trip(
        origin: Coord,
        destination: Coord,
        mode: Mode,
        duration_secs: u64,
        distance_meters: u64,
        legs: Vec<Itinerary>,
    ) -> Self {
        Itinerary {
            origin,
            destination,
            mode: mode.into(),
            duration_secs: Some(duration_secs),
            distance_meters: Some(distance_meters),
            geometry: Vec::new(),
            legs,
        }
    }

    /// Construct a leaf leg.
    pub fn leg(
        origin: Coord,
        destination: Coord,
        mode: LegMode,
        duration_secs: u64,
        geometry: Vec<Coord>,
    ) -> Self {
        Itinerary {
            origin,
            destination,
            mode,
            duration_secs: Some(duration_secs),
            distance_meters: None,
            geometry,
            legs: Vec::new(),
        }
    }

    /// Construct a single-leg trip from a road route.
    ///
    /// The root carries the route totals and its one leg carries the
    /// geometry, so a car trip walks the same way as a multi-leg one.
    pub fn road_trip(
        origin: Coord,
        destination: Coord,
        duration_secs: u64,
        distance_meters: u64,
        geometry: Vec<Coord>,
    ) -> Self {
        let leg = Itinerary::leg(origin, destination, LegMode::Car, duration_secs, geometry);
        Itinerary {
            origin,
            destination,
            mode: LegMode::Car,
            duration_secs: Some(duration_secs),
            distance_meters: Some(distance_meters),
            geometry: Vec::new(),
            legs: vec![leg],
        }
    }

    /// Returns true if this node is a trip root (has child legs).
    pub fn is_root(&self) -> bool {
        !self.legs.is_empty()
    }

    /// Number of child legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Sum of the child legs' durations, in seconds.
    ///
    /// For a multi-leg trip this can differ from `duration_secs`, which is
    /// the planner's own total and includes waiting time between legs.
    pub fn legs_duration_secs(&self) -> u64 {
        self.legs
            .iter()
            .map(|leg| leg.duration_secs.unwrap_or(0))
            .sum()
    }
}
