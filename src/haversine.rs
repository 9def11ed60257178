//! Great-circle distance between coordinates.
//!
//! Uses the haversine formula on a spherical Earth. Accurate to a few meters
//! at carpool scale, which is all the overlap check needs.

use crate::coordinate::Coordinate;
use crate::error::MatchError;

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance in meters, rejecting non-finite coordinates.
pub fn distance(a: &Coordinate, b: &Coordinate) -> Result<f64, MatchError> {
    a.validate()?;
    b.validate()?;
    Ok(haversine_m(a, b))
}

/// Haversine distance in meters for coordinates already known to be finite.
pub fn haversine_m(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points.
    let c = 2.0 * a.min(1.0).sqrt().asin();

    EARTH_RADIUS_M * c
}
