//! Carpool suitability check for a pair of routes.

use tracing::{debug, info};

use crate::coordinate::validate_all;
use crate::error::MatchError;
use crate::overlap::{overlap, OverlapResult};
use crate::polyline::Polyline;
use crate::resample::resample;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// Spacing between resampled points, in meters.
    pub resample_interval_m: f64,
    /// Maximum distance for two points to count as matching, in meters.
    pub proximity_radius_m: f64,
    /// Overlap percentage at or above which the routes are suitable.
    pub suitability_threshold_pct: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            resample_interval_m: 50.0,
            proximity_radius_m: 100.0,
            suitability_threshold_pct: 70.0,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.resample_interval_m.is_finite() || self.resample_interval_m <= 0.0 {
            return Err(MatchError::InvalidInterval(self.resample_interval_m));
        }
        if !self.proximity_radius_m.is_finite() || self.proximity_radius_m < 0.0 {
            return Err(MatchError::InvalidRadius(self.proximity_radius_m));
        }
        if !(0.0..=100.0).contains(&self.suitability_threshold_pct) {
            return Err(MatchError::InvalidThreshold(self.suitability_threshold_pct));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// Share of route B's resampled points lying near route A.
    pub percentage: f64,
    pub is_suitable: bool,
    pub points_a: Polyline,
    pub points_b: Polyline,
    pub overlap: OverlapResult,
}

/// Resamples both routes and scores route B against route A.
///
/// Route A is the reference, route B the candidate: the percentage answers
/// "how much of B's trip runs along A".
pub fn match_routes(
    route_a: &Polyline,
    route_b: &Polyline,
    config: &MatchConfig,
) -> Result<MatchOutcome, MatchError> {
    config.validate()?;
    if route_a.is_empty() || route_b.is_empty() {
        return Err(MatchError::EmptyRoute);
    }
    validate_all(route_a.points())?;
    validate_all(route_b.points())?;

    let points_a = resample(route_a, config.resample_interval_m)?;
    let points_b = resample(route_b, config.resample_interval_m)?;
    debug!(
        source_a = route_a.len(),
        source_b = route_b.len(),
        resampled_a = points_a.len(),
        resampled_b = points_b.len(),
        "resampled routes"
    );

    let overlap = overlap(
        points_a.points(),
        points_b.points(),
        config.proximity_radius_m,
    )?;
    let is_suitable = overlap.percentage >= config.suitability_threshold_pct;
    info!(
        percentage = overlap.percentage,
        is_suitable, "computed route match"
    );

    Ok(MatchOutcome {
        percentage: overlap.percentage,
        is_suitable,
        points_a,
        points_b,
        overlap,
    })
}
