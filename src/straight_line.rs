//! Straight-line route provider (fallback when no routing service is
//! reachable).
//!
//! Connects origin and destination directly. Ignores roads, so overlap scores
//! are rough, but it needs no network and is deterministic.

use crate::error::MatchError;
use crate::haversine::distance;
use crate::polyline::Polyline;
use crate::traits::{FetchedRoute, RouteProvider};
use crate::waypoint::Waypoint;

#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLineProvider;

impl RouteProvider for StraightLineProvider {
    fn fetch(&self, origin: &Waypoint, destination: &Waypoint) -> Result<FetchedRoute, MatchError> {
        let (Some(from), Some(to)) = (origin.coordinate(), destination.coordinate()) else {
            return Err(MatchError::RouteFetchFailed(
                "straight-line routing cannot geocode addresses".to_string(),
            ));
        };

        Ok(FetchedRoute {
            geometry: Polyline::new(vec![from, to]),
            distance_m: distance(&from, &to)?,
        })
    }
}
