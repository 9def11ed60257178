//! Spatial overlap between two resampled routes.

use rayon::prelude::*;
use serde::Serialize;

use crate::coordinate::{validate_all, Coordinate};
use crate::error::MatchError;
use crate::haversine::haversine_m;

/// A candidate point that matched, with its nearest reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapPoint {
    pub candidate: Coordinate,
    pub reference: Coordinate,
    pub distance_m: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlapResult {
    /// Share of candidate points with a reference point in range, 0..=100.
    pub percentage: f64,
    pub matched: usize,
    pub total: usize,
    /// First matching candidate point in iteration order.
    pub first_match: Option<OverlapPoint>,
    /// Last matching candidate point in iteration order.
    pub last_match: Option<OverlapPoint>,
}

/// Measures how much of `candidate` runs within `radius_m` of `reference`.
///
/// The percentage is relative to the candidate's point count, so swapping the
/// arguments generally gives a different answer.
pub fn overlap(
    reference: &[Coordinate],
    candidate: &[Coordinate],
    radius_m: f64,
) -> Result<OverlapResult, MatchError> {
    if !radius_m.is_finite() || radius_m < 0.0 {
        return Err(MatchError::InvalidRadius(radius_m));
    }
    if candidate.is_empty() {
        return Err(MatchError::EmptyRoute);
    }
    validate_all(reference)?;
    validate_all(candidate)?;

    // Order-preserving, so first/last below follow candidate order.
    let nearest: Vec<Option<OverlapPoint>> = candidate
        .par_iter()
        .map(|point| nearest_within(point, reference, radius_m))
        .collect();

    let mut matched = 0;
    let mut first_match = None;
    let mut last_match = None;
    for hit in nearest.into_iter().flatten() {
        matched += 1;
        if first_match.is_none() {
            first_match = Some(hit);
        }
        last_match = Some(hit);
    }

    let total = candidate.len();
    Ok(OverlapResult {
        percentage: 100.0 * matched as f64 / total as f64,
        matched,
        total,
        first_match,
        last_match,
    })
}

fn nearest_within(
    point: &Coordinate,
    reference: &[Coordinate],
    radius_m: f64,
) -> Option<OverlapPoint> {
    reference
        .iter()
        .map(|other| (other, haversine_m(point, other)))
        .filter(|(_, dist)| *dist <= radius_m)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(other, dist)| OverlapPoint {
            candidate: *point,
            reference: *other,
            distance_m: dist,
        })
}
