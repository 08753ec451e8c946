//! Road-routing integration for the CAR mode: OSRM HTTP client and the
//! conversion to a single-leg itinerary.

mod client;
mod convert;
mod error;

pub use client::{OsrmClient, OsrmConfig, RouteDto, RouteResponse};
pub use convert::convert_route;
pub use error::OsrmError;
