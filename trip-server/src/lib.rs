//! Multi-modal trip planning server.
//!
//! Answers: "how do I get from here to a searched destination, and what
//! does each way cost in time and CO2?" One search fans out to the journey
//! planner for WALK/TRAM/BUS and to road routing for CAR, then settles the
//! four outcomes into a comparable result set.

pub mod domain;
pub mod lines;
pub mod location;
pub mod metrics;
pub mod osrm;
pub mod otp;
pub mod places;
pub mod polyline;
pub mod search;
pub mod web;
