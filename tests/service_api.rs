//! HTTP service tests against the router, using the offline provider.

mod fixtures;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use carpool_match::service::{router, AppState};
use carpool_match::straight_line::StraightLineProvider;
use carpool_match::MatchConfig;

use fixtures::{lat_lng, offset, ORIGIN};

fn app() -> Router {
    router(Arc::new(AppState {
        provider: Arc::new(StraightLineProvider),
        matching: MatchConfig::default(),
    }))
}

async fn post_json(app: Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/match-routes")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn commute(east_offset_m: f64) -> String {
    let start2 = offset(ORIGIN, 0.0, east_offset_m);
    json!({
        "origin1": lat_lng(ORIGIN),
        "destination1": lat_lng(offset(ORIGIN, 1100.0, 0.0)),
        "origin2": lat_lng(start2),
        "destination2": lat_lng(offset(start2, 1100.0, 0.0)),
    })
    .to_string()
}

#[tokio::test]
async fn health_check_responds_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn nearby_commutes_are_suitable() {
    let (status, body) = post_json(app(), commute(5.0)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchPercentage"], json!(100.0));
    assert_eq!(body["isSuitable"], json!(true));
    assert_eq!(body["route1"].as_array().unwrap().len(), 2);
    assert!(body["points1"].as_array().unwrap().len() >= 23);
    assert!(body["points2"].as_array().unwrap().len() >= 23);
    assert!(body["route1DistanceM"].as_f64().unwrap() > 1099.0);
    assert!(body["firstOverlapPoint"]["candidate"].is_array());
    assert!(body["lastOverlapPoint"]["distanceM"].as_f64().unwrap() < 10.0);
}

#[tokio::test]
async fn coordinates_are_longitude_first() {
    let (_, body) = post_json(app(), commute(5.0)).await;

    let first = body["route1"][0].as_array().unwrap();
    assert!((first[0].as_f64().unwrap() - ORIGIN.lng).abs() < 1e-6);
    assert!((first[1].as_f64().unwrap() - ORIGIN.lat).abs() < 1e-6);
}

#[tokio::test]
async fn distant_commutes_are_not_suitable() {
    let (status, body) = post_json(app(), commute(500.0)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchPercentage"], json!(0.0));
    assert_eq!(body["isSuitable"], json!(false));
    assert!(body.get("firstOverlapPoint").is_none());
}

#[tokio::test]
async fn provider_failure_is_internal_error() {
    let body = json!({
        "origin1": "Bellagio, Las Vegas",
        "destination1": "36.11,-115.17",
        "origin2": "36.10,-115.17",
        "destination2": "36.11,-115.17",
    })
    .to_string();
    let (status, body) = post_json(app(), body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("failed to fetch route"),
        "unexpected error {}",
        body["error"]
    );
}

#[tokio::test]
async fn invalid_waypoint_is_internal_error() {
    let body = json!({
        "origin1": "",
        "destination1": "36.11,-115.17",
        "origin2": "36.10,-115.17",
        "destination2": "36.11,-115.17",
    })
    .to_string();
    let (status, body) = post_json(app(), body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("invalid waypoint"));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (status, body) = post_json(app(), r#"{"origin1": "36.1,-115.1"}"#.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
