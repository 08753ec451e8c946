//! The four-slot result set.

use std::sync::Arc;

use crate::domain::{Itinerary, Mode};

/// State of one mode's result slot.
#[derive(Debug, Clone, Default)]
pub enum Slot {
    /// The mode's pipeline has not settled yet.
    #[default]
    Pending,
    /// The pipeline settled without an itinerary.
    Failed,
    /// The pipeline settled with an itinerary.
    Resolved(Arc<Itinerary>),
}

impl Slot {
    /// Returns true once this slot has settled, with or without a result.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Slot::Pending)
    }
}

/// Results of one search: one slot per mode, in `Mode::ALL` order.
///
/// Owned by the aggregator; consumers get cloned snapshots. `ready` flips
/// true only once all four slots have settled for the current search.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    slots: [Slot; 4],
    ready: bool,
}

impl ResultSet {
    /// A fresh result set: nothing settled, not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolved itinerary for a mode, if that slot has one.
    pub fn get(&self, mode: Mode) -> Option<&Arc<Itinerary>> {
        match &self.slots[mode.index()] {
            Slot::Resolved(itinerary) => Some(itinerary),
            _ => None,
        }
    }

    /// The raw slot for a mode.
    pub fn slot(&self, mode: Mode) -> &Slot {
        &self.slots[mode.index()]
    }

    /// True once every mode has settled for the current search.
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Number of slots holding an itinerary.
    pub fn resolved_count(&self) -> usize {
        Mode::ALL.iter().filter(|m| self.get(**m).is_some()).count()
    }

    /// Settle one mode's slot. Marks the set ready when it was the last.
    pub(crate) fn settle(&mut self, mode: Mode, outcome: Option<Arc<Itinerary>>) {
        self.slots[mode.index()] = match outcome {
            Some(itinerary) => Slot::Resolved(itinerary),
            None => Slot::Failed,
        };
        self.ready = self.slots.iter().all(Slot::is_settled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coord;

    fn itinerary(mode: Mode) -> Arc<Itinerary> {
        let origin = Coord::new(45.0, 5.0).unwrap();
        let destination = Coord::new(45.1, 5.1).unwrap();
        Arc::new(Itinerary::trip(origin, destination, mode, 60, 100, vec![]))
    }

    #[test]
    fn fresh_set_is_pending() {
        let results = ResultSet::new();

        assert!(!results.ready());
        for mode in Mode::ALL {
            assert!(results.get(mode).is_none());
            assert!(!results.slot(mode).is_settled());
        }
    }

    #[test]
    fn ready_only_after_all_four_settle() {
        let mut results = ResultSet::new();

        results.settle(Mode::Walk, Some(itinerary(Mode::Walk)));
        results.settle(Mode::Tram, None);
        results.settle(Mode::Bus, Some(itinerary(Mode::Bus)));
        assert!(!results.ready());

        results.settle(Mode::Car, Some(itinerary(Mode::Car)));
        assert!(results.ready());
    }

    #[test]
    fn failed_slot_settles_without_result() {
        let mut results = ResultSet::new();
        results.settle(Mode::Tram, None);

        assert!(results.slot(Mode::Tram).is_settled());
        assert!(results.get(Mode::Tram).is_none());
        assert_eq!(results.resolved_count(), 0);
    }

    #[test]
    fn three_of_four_is_a_normal_ready_state() {
        let mut results = ResultSet::new();
        for mode in [Mode::Walk, Mode::Bus, Mode::Car] {
            results.settle(mode, Some(itinerary(mode)));
        }
        results.settle(Mode::Tram, None);

        assert!(results.ready());
        assert_eq!(results.resolved_count(), 3);
        assert!(results.get(Mode::Tram).is_none());
        assert!(results.get(Mode::Bus).is_some());
    }
}
