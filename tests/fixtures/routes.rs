//! Synthetic routes with known geometry.

use carpool_match::haversine::EARTH_RADIUS_M;
use carpool_match::{Coordinate, Polyline};

/// Somewhere on Las Vegas Blvd.
pub const ORIGIN: Coordinate = Coordinate::new(-115.15, 36.1);

/// Moves `origin` by meters on a local flat approximation.
pub fn offset(origin: Coordinate, north_m: f64, east_m: f64) -> Coordinate {
    let lat = origin.lat + (north_m / EARTH_RADIUS_M).to_degrees();
    let lng =
        origin.lng + (east_m / (EARTH_RADIUS_M * origin.lat.to_radians().cos())).to_degrees();
    Coordinate::new(lng, lat)
}

/// A route due north from `origin`, with `segments` equal segments.
pub fn straight_north(origin: Coordinate, length_m: f64, segments: usize) -> Polyline {
    let step = length_m / segments as f64;
    Polyline::new(
        (0..=segments)
            .map(|i| offset(origin, step * i as f64, 0.0))
            .collect(),
    )
}

/// A route built from `(north_m, east_m)` legs, each relative to the
/// previous vertex.
pub fn walk(origin: Coordinate, legs: &[(f64, f64)]) -> Polyline {
    let mut points = vec![origin];
    let mut current = origin;
    for &(north_m, east_m) in legs {
        current = offset(current, north_m, east_m);
        points.push(current);
    }
    Polyline::new(points)
}

/// Formats a coordinate the way clients send it: `"lat,lng"`.
pub fn lat_lng(coord: Coordinate) -> String {
    format!("{:.6},{:.6}", coord.lat, coord.lng)
}
