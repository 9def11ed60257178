//! Error type shared by the matching core and the provider adapters.

use std::fmt;

#[derive(Debug)]
pub enum MatchError {
    /// A coordinate with a NaN or infinite component.
    InvalidCoordinate { lng: f64, lat: f64 },
    /// Resample interval that is not a positive finite number of meters.
    InvalidInterval(f64),
    /// Proximity radius that is negative or not finite.
    InvalidRadius(f64),
    /// Suitability threshold outside 0..=100 percent.
    InvalidThreshold(f64),
    MalformedPolyline(String),
    /// A route with no points where at least one is required.
    EmptyRoute,
    InvalidWaypoint(String),
    /// Opaque failure from a route provider.
    RouteFetchFailed(String),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidCoordinate { lng, lat } => {
                write!(f, "invalid coordinate (lng {}, lat {})", lng, lat)
            }
            MatchError::InvalidInterval(value) => {
                write!(f, "resample interval must be positive, got {}", value)
            }
            MatchError::InvalidRadius(value) => {
                write!(f, "proximity radius must be non-negative, got {}", value)
            }
            MatchError::InvalidThreshold(value) => {
                write!(f, "suitability threshold must be within 0..=100, got {}", value)
            }
            MatchError::MalformedPolyline(reason) => write!(f, "malformed polyline: {}", reason),
            MatchError::EmptyRoute => write!(f, "route has no points"),
            MatchError::InvalidWaypoint(reason) => write!(f, "invalid waypoint: {}", reason),
            MatchError::RouteFetchFailed(reason) => {
                write!(f, "failed to fetch route: {}", reason)
            }
        }
    }
}

impl std::error::Error for MatchError {}

impl From<reqwest::Error> for MatchError {
    fn from(err: reqwest::Error) -> Self {
        MatchError::RouteFetchFailed(err.to_string())
    }
}
