//! Google Directions adapter.
//!
//! Directions returns the route as an encoded polyline (latitude first on
//! the wire); decoding yields longitude-first coordinates.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::MatchError;
use crate::polyline::decode;
use crate::traits::{FetchedRoute, RouteProvider};
use crate::waypoint::Waypoint;

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl GoogleConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://maps.googleapis.com".to_string(),
            api_key: api_key.into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoogleDirectionsClient {
    config: GoogleConfig,
    client: reqwest::blocking::Client,
}

impl GoogleDirectionsClient {
    pub fn new(config: GoogleConfig) -> Result<Self, MatchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RouteProvider for GoogleDirectionsClient {
    fn fetch(&self, origin: &Waypoint, destination: &Waypoint) -> Result<FetchedRoute, MatchError> {
        let url = format!(
            "{}/maps/api/directions/json",
            self.config.base_url.trim_end_matches('/')
        );
        let origin = origin.to_string();
        let destination = destination.to_string();
        debug!(%url, %origin, %destination, "requesting Google directions");

        let body = self
            .client
            .get(&url)
            .query(&[
                ("origin", origin.as_str()),
                ("destination", destination.as_str()),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<DirectionsResponse>())
            .map_err(|err| {
                // reqwest errors carry the URL, which includes the API key.
                let err = err.without_url();
                warn!(error = %err, "Google directions request failed");
                MatchError::from(err)
            })?;

        if body.status != "OK" {
            let message = body.error_message.unwrap_or_default();
            warn!(status = %body.status, %message, "Google directions returned an error");
            return Err(MatchError::RouteFetchFailed(format!(
                "Google directions {}: {}",
                body.status, message
            )));
        }

        let route = body.routes.into_iter().next().ok_or_else(|| {
            MatchError::RouteFetchFailed("Google directions returned no routes".to_string())
        })?;

        let geometry = decode(&route.overview_polyline.points)
            .map_err(|err| MatchError::RouteFetchFailed(err.to_string()))?;
        if geometry.is_empty() {
            return Err(MatchError::RouteFetchFailed(
                "Google directions returned an empty polyline".to_string(),
            ));
        }
        let distance_m = route.legs.iter().map(|leg| leg.distance.value).sum();

        Ok(FetchedRoute {
            geometry,
            distance_m,
        })
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    overview_polyline: EncodedPolyline,
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Deserialize)]
struct EncodedPolyline {
    points: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    distance: TextValue,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    value: f64,
}
