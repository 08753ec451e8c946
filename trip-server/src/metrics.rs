//! Derived trip metrics: CO2 estimation and duration formatting.

use crate::domain::{Itinerary, LegMode};

/// Error returned when no emission factor exists for a mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no emission factor for mode {0}")]
pub struct UnknownMode(pub String);

/// Emission factor in grams of CO2 per kilometer for a known mode.
fn emission_factor(mode: &LegMode) -> Result<f32, UnknownMode> {
    match mode {
        LegMode::Walk => Ok(0.0),
        LegMode::Tram => Ok(4.28),
        LegMode::Bus => Ok(113.0),
        LegMode::Car => Ok(220.0),
        LegMode::Other(tag) => Err(UnknownMode(tag.clone())),
    }
}

/// Estimated CO2 emission for a trip, in grams.
///
/// Linear in the trip's distance: factor (g/km) times kilometers. A trip
/// whose distance is still unset counts as zero distance.
pub fn co2_grams(itinerary: &Itinerary) -> Result<f32, UnknownMode> {
    let factor = emission_factor(&itinerary.mode)?;
    let meters = itinerary.distance_meters.unwrap_or(0);
    Ok(factor * meters as f32 / 1000.0)
}

/// Human-readable duration, `"{m}min {s}s"`.
///
/// Returns `None` while the trip's duration is unset; callers must guard.
pub fn duration_label(itinerary: &Itinerary) -> Option<String> {
    itinerary
        .duration_secs
        .map(|secs| format!("{}min {}s", secs / 60, secs % 60))
}
