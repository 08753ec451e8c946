//! Web layer: JSON API over the trip search aggregator.

mod dto;
mod routes;
mod state;

pub use dto::{ItineraryResult, LinesResponse, ResultSetResponse, SearchRequest, StatusResponse};
pub use routes::create_router;
pub use state::AppState;
