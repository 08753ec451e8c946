//! Application state for the web layer.

use std::sync::Arc;

use crate::lines::TransitLine;
use crate::search::{TripPlanner, TripSearch};

/// Shared application state.
///
/// Contains the aggregator and the static assets needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// The trip search aggregator
    pub search: Arc<TripSearch<TripPlanner>>,

    /// Loaded transit-line traces
    pub lines: Arc<Vec<TransitLine>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(search: TripSearch<TripPlanner>, lines: Vec<TransitLine>) -> Self {
        Self {
            search: Arc::new(search),
            lines: Arc::new(lines),
        }
    }
}
