//! Integration tests for the JSON API feature.

#![cfg(feature = "api")]

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use windmill_sim::api::{AppState, router};
use windmill_sim::config::ScenarioConfig;

fn build_api_state(preset: &str) -> Arc<AppState> {
    let cfg = ScenarioConfig::from_preset(preset).unwrap_or_default();
    Arc::new(AppState { base: cfg.input })
}

async fn get(state: Arc<AppState>, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = router(state).oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn evaluate_uses_base_scenario() {
    let (status, json) = get(build_api_state("gale"), "/evaluate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["input"]["wind_speed"], 22.0);
    assert_eq!(json["conclusion"], "HIGH_POWER");
    assert_eq!(json["warnings"][0]["kind"], "high_wind_speed");
}

#[tokio::test]
async fn query_overrides_base_scenario() {
    let (status, json) = get(build_api_state("gale"), "/evaluate?wind_speed=10").await;
    assert_eq!(status, StatusCode::OK);
    let watts = json["power_output_watts"].as_f64().unwrap();
    assert!((watts - common::DEFAULT_POWER_W).abs() < 0.01);
    // rotor_rpm still comes from the gale preset
    assert_eq!(json["input"]["rotor_rpm"], 240.0);
}

#[tokio::test]
async fn runtime_hours_does_not_change_output() {
    let state = build_api_state("default");
    let (_, a) = get(state.clone(), "/evaluate?runtime_hours=0").await;
    let (_, b) = get(state, "/evaluate?runtime_hours=5000").await;
    assert_eq!(a["power_output_watts"], b["power_output_watts"]);
    assert_eq!(a["efficiency_rating"], b["efficiency_rating"]);
    assert_eq!(a["warnings"], b["warnings"]);
}

#[tokio::test]
async fn sweeps_endpoint_labels() {
    let (status, json) = get(build_api_state("default"), "/sweeps").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["power_vs_wind_speed"]["x_label"], "Wind Speed (m/s)");
    assert_eq!(json["power_vs_wind_speed"]["y_label"], "Power Output (kW)");
    assert_eq!(json["efficiency_vs_blade_angle"]["y_label"], "Efficiency Rating");
}

#[tokio::test]
async fn invalid_query_returns_400() {
    let (status, json) = get(
        build_api_state("default"),
        "/evaluate?generator_efficiency=20&temperature=-5",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("generator_efficiency"));
    assert!(error.contains("temperature"));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let req = Request::builder()
        .uri("/telemetry")
        .body(Body::empty())
        .unwrap();
    let resp = router(build_api_state("default")).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
