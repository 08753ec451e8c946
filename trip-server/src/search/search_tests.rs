//! Aggregator lifecycle tests over a mock pipeline provider.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Coord, Itinerary, LegMode, Mode};
use crate::location::PositionSource;
use crate::otp::ParseError;
use crate::places::Gazetteer;

use super::provider::{FetchError, PlanProvider};
use super::{SearchConfig, SearchError, TripSearch};

/// A pipeline provider with programmable outcomes.
#[derive(Clone, Default)]
struct MockProvider {
    /// Added latency before every outcome.
    delay: Option<Duration>,
    /// Modes whose pipeline fails.
    failing: Vec<Mode>,
    /// Trip duration reported by successful pipelines.
    duration_secs: u64,
}

impl PlanProvider for MockProvider {
    async fn fetch(
        &self,
        origin: Coord,
        destination: Coord,
        mode: Mode,
    ) -> Result<Itinerary, FetchError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.contains(&mode) {
            return Err(FetchError::Parse(ParseError::EmptyItineraries));
        }

        let leg = Itinerary::leg(
            origin,
            destination,
            mode.into(),
            self.duration_secs,
            vec![origin, destination],
        );
        Ok(Itinerary::trip(
            origin,
            destination,
            mode,
            self.duration_secs,
            1_000,
            vec![leg],
        ))
    }
}

/// A position source with no fix.
struct NoFix;

impl PositionSource for NoFix {
    fn current(&self) -> Option<Coord> {
        None
    }
}

fn coord(lat: f64, lon: f64) -> Coord {
    Coord::new(lat, lon).unwrap()
}

fn origin() -> Coord {
    coord(45.1935, 5.7684)
}

fn destination() -> Coord {
    coord(45.1990, 5.7200)
}

fn gazetteer() -> Arc<Gazetteer> {
    let mut places = Gazetteer::new();
    places.add("Gare de Grenoble", destination());
    places.add("Gare routière", coord(45.1920, 5.7150));
    Arc::new(places)
}

fn fixed_position() -> Arc<crate::location::FixedPosition> {
    Arc::new(crate::location::FixedPosition::new(origin()))
}

fn make_search(provider: MockProvider) -> TripSearch<MockProvider> {
    TripSearch::new(provider, gazetteer(), fixed_position(), SearchConfig::default())
}

async fn wait_until_ready(search: &TripSearch<MockProvider>) {
    for _ in 0..200 {
        if search.ready().await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("search never became ready");
}

#[tokio::test]
async fn all_four_modes_resolve() {
    let search = make_search(MockProvider {
        duration_secs: 600,
        ..Default::default()
    });

    search.begin(origin(), destination()).await;
    wait_until_ready(&search).await;

    let results = search.results().await;
    assert_eq!(results.resolved_count(), 4);
    for mode in Mode::ALL {
        let trip = results.get(mode).expect("slot resolved");
        assert_eq!(trip.duration_secs, Some(600));
        assert_eq!(trip.destination, destination());
    }
}

#[tokio::test]
async fn failing_mode_leaves_slot_absent() {
    // TRAM's pipeline fails; the other three land normally.
    let search = make_search(MockProvider {
        failing: vec![Mode::Tram],
        duration_secs: 300,
        ..Default::default()
    });

    search.begin(origin(), destination()).await;
    wait_until_ready(&search).await;

    let results = search.results().await;
    assert!(results.ready());
    assert!(results.get(Mode::Tram).is_none());
    assert!(results.slot(Mode::Tram).is_settled());
    assert!(results.get(Mode::Walk).is_some());
    assert!(results.get(Mode::Bus).is_some());
    assert!(results.get(Mode::Car).is_some());
}

#[tokio::test]
async fn reset_before_resolution_drops_stale_outcomes() {
    let search = make_search(MockProvider {
        delay: Some(Duration::from_millis(100)),
        duration_secs: 600,
        ..Default::default()
    });

    search.begin(origin(), destination()).await;
    search.reset().await;

    // Give the superseded pipelines ample time to finish and be dropped.
    tokio::time::sleep(Duration::from_millis(400)).await;

    let results = search.results().await;
    assert!(!results.ready());
    for mode in Mode::ALL {
        assert!(results.get(mode).is_none());
        assert!(!results.slot(mode).is_settled());
    }
}

#[tokio::test]
async fn newer_search_supersedes_older() {
    let search = make_search(MockProvider {
        delay: Some(Duration::from_millis(50)),
        duration_secs: 600,
        ..Default::default()
    });

    let other_destination = coord(45.1585, 5.7324);
    search.begin(origin(), destination()).await;
    search.begin(origin(), other_destination).await;
    wait_until_ready(&search).await;

    // Nothing from the first search may leak into the fresh result set.
    tokio::time::sleep(Duration::from_millis(200)).await;
    let results = search.results().await;
    assert_eq!(results.resolved_count(), 4);
    for mode in Mode::ALL {
        assert_eq!(results.get(mode).unwrap().destination, other_destination);
    }
}

#[tokio::test]
async fn pipelines_time_out_and_settle_failed() {
    let provider = MockProvider {
        delay: Some(Duration::from_millis(300)),
        duration_secs: 600,
        ..Default::default()
    };
    let search = TripSearch::new(
        provider,
        gazetteer(),
        fixed_position(),
        SearchConfig::default().with_mode_timeout(Duration::from_millis(30)),
    );

    search.begin(origin(), destination()).await;
    wait_until_ready(&search).await;

    let results = search.results().await;
    assert!(results.ready());
    assert_eq!(results.resolved_count(), 0);
    for mode in Mode::ALL {
        assert!(results.slot(mode).is_settled());
    }
}

#[tokio::test]
async fn text_search_resolves_first_candidate() {
    let search = make_search(MockProvider {
        duration_secs: 600,
        ..Default::default()
    });

    search.search("gare").await.unwrap();
    wait_until_ready(&search).await;

    let results = search.results().await;
    let walk = results.get(Mode::Walk).expect("walk resolved");

    // "Gare de Grenoble" is registered first, so it wins over the bus station.
    assert_eq!(walk.destination, destination());
    assert_eq!(walk.origin, origin());
    assert_eq!(walk.mode, LegMode::Walk);
    assert_eq!(walk.duration_secs, Some(600));
    assert_eq!(walk.leg_count(), 1);
}

#[tokio::test]
async fn search_without_position_is_abandoned() {
    let search = TripSearch::new(
        MockProvider::default(),
        gazetteer(),
        Arc::new(NoFix),
        SearchConfig::default(),
    );

    let result = search.search("gare").await;
    assert_eq!(result.unwrap_err(), SearchError::PositionUnavailable);

    // No state change: still idle.
    let results = search.results().await;
    assert!(!results.ready());
    for mode in Mode::ALL {
        assert!(!results.slot(mode).is_settled());
    }
}

#[tokio::test]
async fn search_with_no_match_is_an_error() {
    let search = TripSearch::new(
        MockProvider::default(),
        Arc::new(Gazetteer::new()),
        fixed_position(),
        SearchConfig::default(),
    );

    let result = search.search("piscine").await;
    assert_eq!(
        result.unwrap_err(),
        SearchError::NoDestination("piscine".into())
    );
    assert!(!search.ready().await);
}

#[tokio::test]
async fn reset_from_ready_returns_to_idle() {
    let search = make_search(MockProvider {
        duration_secs: 120,
        ..Default::default()
    });

    search.begin(origin(), destination()).await;
    wait_until_ready(&search).await;

    search.reset().await;

    let results = search.results().await;
    assert!(!results.ready());
    assert_eq!(results.resolved_count(), 0);
}
