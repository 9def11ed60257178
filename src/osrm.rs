//! OSRM HTTP adapter for route geometries.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::coordinate::Coordinate;
use crate::error::MatchError;
use crate::polyline::Polyline;
use crate::traits::{FetchedRoute, RouteProvider};
use crate::waypoint::Waypoint;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, MatchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, origin: Coordinate, destination: Coordinate) -> String {
        // OSRM takes lng,lat pairs, same as the crate's order.
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            origin.lng,
            origin.lat,
            destination.lng,
            destination.lat
        )
    }
}

impl RouteProvider for OsrmClient {
    fn fetch(&self, origin: &Waypoint, destination: &Waypoint) -> Result<FetchedRoute, MatchError> {
        let (Some(from), Some(to)) = (origin.coordinate(), destination.coordinate()) else {
            return Err(MatchError::RouteFetchFailed(
                "OSRM requires \"lat,lng\" coordinates, not addresses".to_string(),
            ));
        };

        let url = self.route_url(from, to);
        debug!(%url, "requesting OSRM route");

        let response = self.client.get(&url).send().map_err(|err| {
            warn!(error = %err, "OSRM request failed");
            MatchError::from(err)
        })?;
        // OSRM reports NoRoute/InvalidQuery as 400 with a JSON body, so the
        // body is read before looking at the status.
        let status = response.status();
        let body = response.json::<OsrmRouteResponse>().map_err(|err| {
            warn!(%status, error = %err, "unreadable OSRM response");
            MatchError::RouteFetchFailed(format!("OSRM responded {}: {}", status, err))
        })?;

        if body.code != "Ok" {
            let message = body.message.unwrap_or_default();
            warn!(code = %body.code, %message, "OSRM returned an error");
            return Err(MatchError::RouteFetchFailed(format!(
                "OSRM {}: {}",
                body.code, message
            )));
        }

        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| MatchError::RouteFetchFailed("OSRM returned no routes".to_string()))?;
        if route.geometry.coordinates.is_empty() {
            return Err(MatchError::RouteFetchFailed(
                "OSRM returned an empty geometry".to_string(),
            ));
        }

        Ok(FetchedRoute {
            geometry: Polyline::new(route.geometry.coordinates),
            distance_m: route.distance,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    distance: f64,
}

/// GeoJSON LineString; coordinates are already `[lng, lat]`.
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<Coordinate>,
}
