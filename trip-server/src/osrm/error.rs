//! Road-routing client error types.

/// Errors from the road-routing API client.
#[derive(Debug, thiserror::Error)]
pub enum OsrmError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The router answered but found no route
    #[error("no route found: {code}")]
    NoRoute { code: String },
}
