//! Route geometries and the Google encoded polyline format.
//!
//! [`Polyline`] holds decoded coordinates. Encoding and decoding happen at
//! the provider boundary; the matching core only ever sees coordinates in
//! (longitude, latitude) order, even though the wire format stores latitude
//! first.

use serde::{Deserialize, Serialize};

use crate::coordinate::{validate_all, Coordinate};
use crate::error::MatchError;
use crate::haversine::haversine_m;

/// Precision used by Google Directions (`1e-5` degrees).
pub const GOOGLE_PRECISION: u32 = 5;

/// Precision used by OSRM's `polyline6` geometries (`1e-6` degrees).
pub const POLYLINE6_PRECISION: u32 = 6;

/// A route geometry as an ordered sequence of decoded coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from (longitude, latitude) points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Coordinate> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Coordinate> {
        self.points.last()
    }

    /// Total path length in meters, summed segment by segment.
    pub fn length_m(&self) -> Result<f64, MatchError> {
        validate_all(&self.points)?;
        Ok(self
            .points
            .windows(2)
            .map(|pair| haversine_m(&pair[0], &pair[1]))
            .sum())
    }
}

impl From<Vec<Coordinate>> for Polyline {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

/// Decodes a Google encoded polyline at the standard 1e-5 precision.
pub fn decode(encoded: &str) -> Result<Polyline, MatchError> {
    decode_with_precision(encoded, GOOGLE_PRECISION)
}

/// Decodes an encoded polyline whose values are scaled by `10^precision`.
///
/// The wire format interleaves latitude then longitude deltas; the output is
/// longitude-first.
pub fn decode_with_precision(encoded: &str, precision: u32) -> Result<Polyline, MatchError> {
    let factor = 10f64.powi(precision as i32);
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut points = Vec::new();

    while index < bytes.len() {
        let start = index;
        lat = accumulate(lat, next_value(bytes, &mut index)?, start)?;
        if index >= bytes.len() {
            return Err(MatchError::MalformedPolyline(format!(
                "latitude without longitude at byte {}",
                index
            )));
        }
        lng = accumulate(lng, next_value(bytes, &mut index)?, start)?;

        let point = Coordinate::new(lng as f64 / factor, lat as f64 / factor);
        if point.lat.abs() > 90.0 || point.lng.abs() > 180.0 {
            return Err(MatchError::MalformedPolyline(format!(
                "point at byte {} is out of range: ({}, {})",
                start, point.lng, point.lat
            )));
        }
        points.push(point);
    }

    Ok(Polyline::new(points))
}

fn accumulate(total: i64, delta: i64, start: usize) -> Result<i64, MatchError> {
    total.checked_add(delta).ok_or_else(|| {
        MatchError::MalformedPolyline(format!("coordinate overflows at byte {}", start))
    })
}

fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, MatchError> {
    let mut result: i64 = 0;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(MatchError::MalformedPolyline(format!(
                "truncated value at byte {}",
                index
            )));
        };
        if !(63..=126).contains(&byte) {
            return Err(MatchError::MalformedPolyline(format!(
                "unexpected character {:?} at byte {}",
                byte as char, index
            )));
        }
        if shift >= 60 {
            return Err(MatchError::MalformedPolyline(format!(
                "value overflows at byte {}",
                index
            )));
        }
        *index += 1;

        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    // zig-zag
    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Encodes (longitude, latitude) points at the given precision.
pub fn encode(points: &[Coordinate], precision: u32) -> Result<String, MatchError> {
    validate_all(points)?;
    let factor = 10f64.powi(precision as i32);
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = (point.lat * factor).round() as i64;
        let lng = (point.lng * factor).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    Ok(out)
}

fn encode_value(value: i64, out: &mut String) {
    let mut bits = (if value < 0 { !(value << 1) } else { value << 1 }) as u64;
    while bits >= 0x20 {
        out.push(char::from((0x20 | (bits & 0x1f)) as u8 + 63));
        bits >>= 5;
    }
    out.push(char::from(bits as u8 + 63));
}
