//! HTTP surface: `POST /match-routes` and `GET /health`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::MatchError;
use crate::matcher::{match_routes, MatchConfig};
use crate::overlap::OverlapPoint;
use crate::polyline::Polyline;
use crate::traits::RouteProvider;
use crate::waypoint::Waypoint;

pub struct AppState {
    pub provider: Arc<dyn RouteProvider>,
    pub matching: MatchConfig,
}

/// Origins and destinations as `"lat,lng"` pairs or addresses.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRoutesRequest {
    pub origin1: String,
    pub destination1: String,
    pub origin2: String,
    pub destination2: String,
}

/// Coordinates in every field are `[lng, lat]` arrays.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRoutesResponse {
    pub match_percentage: f64,
    pub is_suitable: bool,
    pub route1: Polyline,
    pub route2: Polyline,
    pub route1_distance_m: f64,
    pub route2_distance_m: f64,
    pub points1: Polyline,
    pub points2: Polyline,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_overlap_point: Option<OverlapPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_overlap_point: Option<OverlapPoint>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl From<MatchError> for ApiError {
    fn from(err: MatchError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => {
                error!(%message, "match request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/match-routes", post(match_routes_handler))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn match_routes_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MatchRoutesRequest>, JsonRejection>,
) -> Result<Json<MatchRoutesResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    // Providers block on HTTP.
    let response = tokio::task::spawn_blocking(move || {
        run_match(state.provider.as_ref(), &state.matching, &request)
    })
    .await
    .map_err(|err| ApiError::Internal(format!("match task failed: {}", err)))??;

    Ok(Json(response))
}

/// Fetches both routes and scores route 2 against route 1.
pub fn run_match(
    provider: &dyn RouteProvider,
    config: &MatchConfig,
    request: &MatchRoutesRequest,
) -> Result<MatchRoutesResponse, MatchError> {
    let origin1: Waypoint = request.origin1.parse()?;
    let destination1: Waypoint = request.destination1.parse()?;
    let origin2: Waypoint = request.origin2.parse()?;
    let destination2: Waypoint = request.destination2.parse()?;

    let route1 = provider.fetch(&origin1, &destination1)?;
    let route2 = provider.fetch(&origin2, &destination2)?;

    let outcome = match_routes(&route1.geometry, &route2.geometry, config)?;

    Ok(MatchRoutesResponse {
        match_percentage: outcome.percentage,
        is_suitable: outcome.is_suitable,
        route1: route1.geometry,
        route2: route2.geometry,
        route1_distance_m: route1.distance_m,
        route2_distance_m: route2.distance_m,
        points1: outcome.points_a,
        points2: outcome.points_b,
        first_overlap_point: outcome.overlap.first_match,
        last_overlap_point: outcome.overlap.last_match,
    })
}
