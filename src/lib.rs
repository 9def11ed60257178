//! carpool-match core
//!
//! Decides whether two independently planned routes overlap enough to share
//! a ride. Coordinates are (longitude, latitude) throughout.

pub mod error;
pub mod coordinate;
pub mod haversine;
pub mod polyline;
pub mod resample;
pub mod overlap;
pub mod matcher;
pub mod traits;
pub mod waypoint;
pub mod osrm;
pub mod google;
pub mod straight_line;
pub mod config;
pub mod service;

pub use coordinate::Coordinate;
pub use error::MatchError;
pub use matcher::{match_routes, MatchConfig, MatchOutcome};
pub use polyline::Polyline;
