//! OpenTripPlanner integration: HTTP client, response DTOs, and the
//! conversion step that turns raw plan responses into itinerary trees.

mod client;
mod convert;
mod error;
mod types;

pub use client::{OtpClient, OtpConfig};
pub use convert::convert_plan;
pub use error::{OtpError, ParseError};
pub use types::{ApiItinerary, ApiLeg, ApiLegGeometry, Plan, PlanResponse};
