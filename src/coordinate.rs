//! Longitude-first coordinate type.
//!
//! Every coordinate inside the crate is (longitude, latitude). Providers that
//! speak (latitude, longitude) convert at their own boundary.

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// A WGS-84 position in decimal degrees.
///
/// Serializes as a GeoJSON-style `[lng, lat]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }

    /// Fails with `InvalidCoordinate` when either component is NaN or infinite.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(MatchError::InvalidCoordinate {
                lng: self.lng,
                lat: self.lat,
            })
        }
    }

    /// Linear interpolation in (lng, lat) space.
    pub fn lerp(&self, to: &Coordinate, fraction: f64) -> Coordinate {
        Coordinate {
            lng: self.lng + (to.lng - self.lng) * fraction,
            lat: self.lat + (to.lat - self.lat) * fraction,
        }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lng, coord.lat]
    }
}

/// Validates every coordinate of a route.
pub fn validate_all(points: &[Coordinate]) -> Result<(), MatchError> {
    points.iter().try_for_each(Coordinate::validate)
}
