//! Route provider capability.
//!
//! The matcher never talks to a routing service directly. Each service is an
//! adapter implementing [`RouteProvider`]; the service layer picks one from
//! configuration.

use crate::error::MatchError;
use crate::polyline::Polyline;
use crate::waypoint::Waypoint;

/// A route as returned by a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedRoute {
    /// Route geometry, longitude-first.
    pub geometry: Polyline,
    /// Overall route length reported by the provider, in meters.
    pub distance_m: f64,
}

/// Resolves an origin/destination pair into a route geometry.
///
/// Implementations convert provider-specific coordinate order at their own
/// boundary and report every failure (no route, unknown location, rate
/// limiting, transport errors) as `MatchError::RouteFetchFailed`.
pub trait RouteProvider: Send + Sync {
    fn fetch(&self, origin: &Waypoint, destination: &Waypoint) -> Result<FetchedRoute, MatchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Osrm,
    Google,
    /// Offline fallback, no network access.
    StraightLine,
}
