//! Journey-planner client and parse error types.

use std::fmt;

/// Errors from the journey-planner HTTP client.
#[derive(Debug)]
pub enum OtpError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },
}

impl fmt::Display for OtpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OtpError::Http(e) => write!(f, "HTTP error: {e}"),
            OtpError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            OtpError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
        }
    }
}

impl std::error::Error for OtpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OtpError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OtpError {
    fn from(err: reqwest::Error) -> Self {
        OtpError::Http(err)
    }
}

/// Errors from turning a plan response into an itinerary tree.
///
/// Each of these is contained to the slot of the mode being parsed; the
/// other modes' pipelines proceed independently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The response has no `plan.itineraries` field at all
    #[error("response carries no plan")]
    MissingPlan,

    /// The candidate list is present but empty
    #[error("plan has no itineraries")]
    EmptyItineraries,

    /// A leg is missing required timing or geometry fields
    #[error("malformed leg: {0}")]
    MalformedLeg(&'static str),
}
