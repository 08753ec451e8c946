//! The itinerary aggregator.
//!
//! One search fans out four acquisition pipelines, one per mode, and
//! settles their outcomes into the four-slot [`ResultSet`]. Slot writes go
//! through a channel to a single collector task per search, so the result
//! set has exactly one writer at a time. Every in-flight pipeline is
//! tagged with the generation of the search that started it; a reset or a
//! newer search bumps the generation, and anything arriving with a stale
//! tag is dropped instead of written.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{RwLock, mpsc};
use tracing::{debug, warn};

use crate::domain::{Coord, Itinerary, Mode};
use crate::location::PositionSource;
use crate::places::PlaceSearch;

use super::config::SearchConfig;
use super::provider::PlanProvider;
use super::results::ResultSet;

/// Error from starting a search.
///
/// Per-mode pipeline failures never appear here; they settle their slot as
/// failed and the search carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// No current position to search from
    #[error("current position unavailable")]
    PositionUnavailable,

    /// The query matched no known place
    #[error("no place matches \"{0}\"")]
    NoDestination(String),
}

/// Outcome of one mode's pipeline, tagged with its search generation.
struct SlotOutcome {
    generation: u64,
    mode: Mode,
    itinerary: Option<Arc<Itinerary>>,
}

/// State shared between the aggregator handle and its collector tasks.
struct SharedState {
    /// Monotonically increasing search generation. Bumped under the
    /// results write lock, checked under it before every slot write.
    generation: AtomicU64,
    results: RwLock<ResultSet>,
}

/// Plans trips across all four modes and owns the result set.
pub struct TripSearch<P: PlanProvider> {
    provider: P,
    places: Arc<dyn PlaceSearch>,
    position: Arc<dyn PositionSource>,
    config: SearchConfig,
    state: Arc<SharedState>,
}

impl<P: PlanProvider> TripSearch<P> {
    /// Create an aggregator over a pipeline provider and its collaborators.
    pub fn new(
        provider: P,
        places: Arc<dyn PlaceSearch>,
        position: Arc<dyn PositionSource>,
        config: SearchConfig,
    ) -> Self {
        Self {
            provider,
            places,
            position,
            config,
            state: Arc::new(SharedState {
                generation: AtomicU64::new(0),
                results: RwLock::new(ResultSet::new()),
            }),
        }
    }

    /// Search for trips from the current position to a queried destination.
    ///
    /// Resolves the query through the place-search collaborator and takes
    /// the first candidate. Without a current position the search is
    /// abandoned before any state changes.
    pub async fn search(&self, query: &str) -> Result<(), SearchError> {
        let Some(origin) = self.position.current() else {
            warn!(query, "abandoning search, current position unavailable");
            return Err(SearchError::PositionUnavailable);
        };

        let destination = self
            .places
            .find(query)
            .into_iter()
            .next()
            .ok_or_else(|| SearchError::NoDestination(query.to_string()))?;

        debug!(query, destination = %destination.coord, "destination resolved");
        self.begin(origin, destination.coord).await;
        Ok(())
    }

    /// Start a search between two known coordinates.
    ///
    /// Clears the previous results, then fans out the four mode pipelines.
    /// Completion is observed through [`TripSearch::ready`]; failures
    /// settle their slot and are otherwise invisible here.
    pub async fn begin(&self, origin: Coord, destination: Coord) {
        let generation = {
            let mut results = self.state.results.write().await;
            *results = ResultSet::new();
            self.state.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        debug!(generation, %origin, %destination, "trip search started");

        let (tx, rx) = mpsc::channel::<SlotOutcome>(Mode::ALL.len());

        for mode in Mode::ALL {
            let provider = self.provider.clone();
            let timeout = self.config.mode_timeout;
            let tx = tx.clone();

            tokio::spawn(async move {
                let outcome =
                    match tokio::time::timeout(timeout, provider.fetch(origin, destination, mode))
                        .await
                    {
                        Ok(Ok(itinerary)) => Some(Arc::new(itinerary)),
                        Ok(Err(e)) => {
                            warn!(%mode, error = %e, "itinerary pipeline failed");
                            None
                        }
                        Err(_) => {
                            warn!(%mode, ?timeout, "itinerary pipeline timed out");
                            None
                        }
                    };

                // The collector may already be gone if the search was
                // superseded; that outcome is stale anyway.
                let _ = tx
                    .send(SlotOutcome {
                        generation,
                        mode,
                        itinerary: outcome,
                    })
                    .await;
            });
        }

        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            Self::collect(state, rx).await;
        });
    }

    /// Drop back to idle: nothing settled, not ready.
    ///
    /// Outcomes still in flight from the superseded search carry a stale
    /// generation and will be discarded when they land.
    pub async fn reset(&self) {
        let mut results = self.state.results.write().await;
        self.state.generation.fetch_add(1, Ordering::SeqCst);
        *results = ResultSet::new();
        debug!("trip search reset");
    }

    /// A snapshot of the current results.
    pub async fn results(&self) -> ResultSet {
        self.state.results.read().await.clone()
    }

    /// True once every mode of the current search has settled.
    pub async fn ready(&self) -> bool {
        self.state.results.read().await.ready()
    }

    /// Sole writer of the result set: settles outcomes as they arrive,
    /// dropping anything from a superseded generation.
    async fn collect(state: Arc<SharedState>, mut rx: mpsc::Receiver<SlotOutcome>) {
        while let Some(outcome) = rx.recv().await {
            let mut results = state.results.write().await;

            if state.generation.load(Ordering::SeqCst) != outcome.generation {
                debug!(
                    generation = outcome.generation,
                    mode = %outcome.mode,
                    "dropping stale pipeline outcome"
                );
                return;
            }

            results.settle(outcome.mode, outcome.itinerary);

            if results.ready() {
                debug!(
                    generation = outcome.generation,
                    resolved = results.resolved_count(),
                    "results ready"
                );
            }
        }
    }
}
