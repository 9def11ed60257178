//! Origin and destination descriptions accepted by route providers.

use std::fmt;
use std::str::FromStr;

use crate::coordinate::Coordinate;
use crate::error::MatchError;

/// Where a route starts or ends.
///
/// User input spells coordinates latitude first (`"36.17,-115.14"`), the way
/// map apps copy them; parsing converts to the crate's longitude-first
/// [`Coordinate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Waypoint {
    Coordinate(Coordinate),
    /// Free-text address, resolved by the provider.
    Address(String),
}

impl Waypoint {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Waypoint::Coordinate(coord) => Some(*coord),
            Waypoint::Address(_) => None,
        }
    }
}

impl FromStr for Waypoint {
    type Err = MatchError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MatchError::InvalidWaypoint("empty location".to_string()));
        }

        let parsed = trimmed.split_once(',').and_then(|(lat, lng)| {
            let lat = lat.trim().parse::<f64>().ok()?;
            let lng = lng.trim().parse::<f64>().ok()?;
            Some((lat, lng))
        });

        match parsed {
            Some((lat, lng)) => {
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                    return Err(MatchError::InvalidWaypoint(format!(
                        "coordinate out of range: {}",
                        trimmed
                    )));
                }
                Ok(Waypoint::Coordinate(Coordinate::new(lng, lat)))
            }
            None => Ok(Waypoint::Address(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Waypoint {
    /// Latitude-first, matching the input format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waypoint::Coordinate(coord) => write!(f, "{:.6},{:.6}", coord.lat, coord.lng),
            Waypoint::Address(address) => f.write_str(address),
        }
    }
}
