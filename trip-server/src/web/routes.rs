//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::warn;

use crate::search::SearchError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search", post(start_search))
        .route("/reset", post(reset))
        .route("/results", get(results))
        .route("/lines", get(lines))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Start a search for the queried destination.
///
/// Accepted searches settle in the background; poll `/results` for the
/// outcome. Per-mode failures never surface here.
async fn start_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.search.search(&req.query).await.map_err(AppError::from)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(StatusResponse {
            status: "searching",
        }),
    ))
}

/// Drop back to idle, discarding any in-flight search.
async fn reset(State(state): State<AppState>) -> Json<StatusResponse> {
    state.search.reset().await;
    Json(StatusResponse { status: "idle" })
}

/// Snapshot of the current result set.
async fn results(State(state): State<AppState>) -> Json<ResultSetResponse> {
    let results = state.search.results().await;
    Json(ResultSetResponse::from_results(&results))
}

/// The static transit-line traces.
async fn lines(State(state): State<AppState>) -> Json<LinesResponse> {
    Json(LinesResponse {
        lines: state.lines.iter().map(LineResult::from_line).collect(),
    })
}

/// Application-level error responses.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Conflict { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::PositionUnavailable => AppError::Conflict {
                message: e.to_string(),
            },
            SearchError::NoDestination(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
