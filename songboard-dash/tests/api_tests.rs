//! Integration tests for songboard-dash API endpoints
//!
//! Tests cover:
//! - Health endpoint
//! - Control state reads and partial updates (clamping, dropping, errors)
//! - Word cloud corpus + color artifact
//! - Genre legend artifact
//! - Correlation matrix artifact (including degenerate subsets)
//! - Scatter dataset artifact
//! - Refresh fan-out reported for control changes

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

use songboard_common::Dataset;
use songboard_dash::{build_router, AppState};

/// Fixture: four rows, three genres, one whitespace-padded artist name.
const FIXTURE_CSV: &str = "\
title,artist,top genre,year,bpm,nrgy,dnce
Hey,Alpha,pop,2010,120,80,70
Ho,  Beta   Ray  ,rock,2012,96,60,50
Go,Gamma,dance pop,2015,128,90,85
Yo,Alpha,pop,2017,118,75,65
";

/// Test helper: build the app over the in-memory fixture table
fn setup_app() -> axum::Router {
    let dataset = Dataset::from_reader(FIXTURE_CSV.as_bytes()).expect("fixture should load");
    let state = AppState::new(Arc::new(dataset));
    build_router(state)
}

/// Test helper: create GET request
fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: create POST request with a JSON body
fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();

    let response = app.oneshot(test_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "songboard-dash");
    assert!(body["version"].is_string());
}

// =============================================================================
// Control State Tests
// =============================================================================

#[tokio::test]
async fn test_controls_defaults_and_options() {
    let app = setup_app();

    let response = app.oneshot(test_request("/api/controls")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;

    // Defaults: full year range, all genres, first two feature columns
    assert_eq!(body["state"]["year_range"], json!([2010, 2017]));
    assert_eq!(
        body["state"]["genres"].as_array().unwrap().len(),
        3,
        "all genres selected by default"
    );
    assert_eq!(body["state"]["x_column"], "bpm");
    assert_eq!(body["state"]["y_column"], "nrgy");

    // Options are dataset facts
    assert_eq!(body["options"]["year_bounds"], json!([2010, 2017]));
    assert_eq!(body["options"]["genres"], json!(["pop", "rock", "dance pop"]));
    assert_eq!(body["options"]["columns"], json!(["bpm", "nrgy", "dnce"]));
}

#[tokio::test]
async fn test_year_update_clamps_and_fans_out_to_everything() {
    let app = setup_app();

    let request = json_request("/api/controls", json!({ "year_range": [1900, 2100] }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["state"]["year_range"], json!([2010, 2017]));
    assert_eq!(
        body["refresh"],
        json!(["wordcloud", "legend", "heatmap", "scatter"])
    );
}

#[tokio::test]
async fn test_genre_update_drops_unknowns_and_fans_out_to_wordcloud() {
    let app = setup_app();

    let request = json_request(
        "/api/controls",
        json!({ "genres": ["pop", "zydeco"] }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["state"]["genres"], json!(["pop"]));
    assert_eq!(body["refresh"], json!(["wordcloud", "legend"]));
}

#[tokio::test]
async fn test_axis_update_fans_out_to_scatter_only() {
    let app = setup_app();

    let request = json_request("/api/controls", json!({ "y_column": "dnce" }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["state"]["y_column"], "dnce");
    assert_eq!(body["refresh"], json!(["scatter"]));
}

#[tokio::test]
async fn test_unknown_column_is_rejected() {
    let app = setup_app();

    let request = json_request("/api/controls", json!({ "x_column": "loudness" }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("Unknown column"));
}

#[tokio::test]
async fn test_update_persists_for_later_reads() {
    let app = setup_app();

    let request = json_request("/api/controls", json!({ "year_range": [2012, 2015] }));
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(test_request("/api/controls")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["state"]["year_range"], json!([2012, 2015]));
}

// =============================================================================
// Word Cloud Artifact Tests
// =============================================================================

#[tokio::test]
async fn test_wordcloud_corpus_is_normalized_and_ordered() {
    let app = setup_app();

    let response = app.oneshot(test_request("/api/wordcloud")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["corpus"], "Alpha Beta Ray Gamma Alpha");

    // Single-word artists resolve through the registry; tokens of the
    // multi-word name fall back to the sentinel.
    assert_eq!(body["colors"]["Alpha"], "MediumPurple");
    assert_eq!(body["colors"]["Gamma"], "LightGreen");
    assert_eq!(body["colors"]["Beta"], "black");
    assert_eq!(body["colors"]["Ray"], "black");
}

#[tokio::test]
async fn test_wordcloud_respects_filters() {
    let app = setup_app();

    let request = json_request(
        "/api/controls",
        json!({ "year_range": [2010, 2012], "genres": ["pop"] }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(test_request("/api/wordcloud")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["corpus"], "Alpha");
}

#[tokio::test]
async fn test_wordcloud_empty_selection_yields_empty_artifact() {
    let app = setup_app();

    let request = json_request("/api/controls", json!({ "genres": [] }));
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(test_request("/api/wordcloud")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["corpus"], "");
    assert!(body["colors"].as_object().unwrap().is_empty());
}

// =============================================================================
// Legend Artifact Tests
// =============================================================================

#[tokio::test]
async fn test_legend_is_registry_order_and_filter_invariant() {
    let app = setup_app();

    let response = app.clone().oneshot(test_request("/api/legend")).await.unwrap();
    let before = extract_json(response.into_body()).await;

    let entries = before["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 49);
    assert_eq!(entries[0]["genre"], "neo mellow");
    assert_eq!(entries[0]["color"], "PaleVioletRed");

    // Any filter change leaves the legend untouched
    let request = json_request("/api/controls", json!({ "genres": ["rock"] }));
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(test_request("/api/legend")).await.unwrap();
    let after = extract_json(response.into_body()).await;
    assert_eq!(before, after);
}

// =============================================================================
// Correlation Artifact Tests
// =============================================================================

#[tokio::test]
async fn test_correlation_axes_and_symmetry() {
    let app = setup_app();

    let response = app.oneshot(test_request("/api/correlation")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["columns"], json!(["bpm", "nrgy", "dnce"]));

    let matrix = body["matrix"].as_array().unwrap();
    assert_eq!(matrix.len(), 3);
    for i in 0..3 {
        assert_eq!(matrix[i][i], json!(1.0));
        for j in 0..3 {
            assert_eq!(matrix[i][j], matrix[j][i]);
        }
    }
}

#[tokio::test]
async fn test_correlation_empty_subset_serializes_as_nulls() {
    let app = setup_app();

    // No rows have year 2011
    let request = json_request("/api/controls", json!({ "year_range": [2011, 2011] }));
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(test_request("/api/correlation")).await.unwrap();
    let body = extract_json(response.into_body()).await;

    for row in body["matrix"].as_array().unwrap() {
        for cell in row.as_array().unwrap() {
            assert!(cell.is_null(), "NaN cells should reach the wire as null");
        }
    }
}

// =============================================================================
// Scatter Artifact Tests
// =============================================================================

#[tokio::test]
async fn test_scatter_matches_filtered_rows_exactly() {
    let app = setup_app();

    let response = app.oneshot(test_request("/api/scatter")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["x_column"], "bpm");
    assert_eq!(body["y_column"], "nrgy");

    let points = body["points"].as_array().unwrap();
    assert_eq!(points.len(), 4);
    let titles: Vec<&str> = points.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Hey", "Ho", "Go", "Yo"]);
    assert_eq!(points[0]["x"], json!(120.0));
    assert_eq!(points[0]["artist"], "Alpha");
    assert_eq!(points[0]["year"], 2010);
}

#[tokio::test]
async fn test_scatter_follows_year_and_axis_changes() {
    let app = setup_app();

    let request = json_request(
        "/api/controls",
        json!({ "year_range": [2012, 2015], "y_column": "dnce" }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(test_request("/api/scatter")).await.unwrap();
    let body = extract_json(response.into_body()).await;

    assert_eq!(body["y_column"], "dnce");
    let points = body["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["title"], "Ho");
    assert_eq!(points[1]["title"], "Go");
}

// =============================================================================
// UI Serving Tests
// =============================================================================

#[tokio::test]
async fn test_index_and_app_js_are_served() {
    let app = setup_app();

    let response = app.clone().oneshot(test_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(test_request("/static/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/javascript"
    );
}
