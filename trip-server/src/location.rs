//! Current-position source.
//!
//! Device geolocation is a collaborator: something that can report the
//! latest known coordinate, or nothing at all. A search that cannot get a
//! position is abandoned before any state changes, so the trait stays
//! deliberately small.

use crate::domain::Coord;

/// Supplies the latest known position, if there is one.
pub trait PositionSource: Send + Sync {
    /// The current coordinate, or `None` when no position is available.
    fn current(&self) -> Option<Coord>;
}

/// A position source pinned to one coordinate.
///
/// Server deployments have no device to ask; they search from a configured
/// origin instead.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(Coord);

impl FixedPosition {
    /// Pin the position to the given coordinate.
    pub fn new(coord: Coord) -> Self {
        Self(coord)
    }
}

impl PositionSource for FixedPosition {
    fn current(&self) -> Option<Coord> {
        Some(self.0)
    }
}
