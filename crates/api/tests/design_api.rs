//! HTTP-level integration tests for the design endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json, post_raw};
use serde_json::json;
use sqlx::PgPool;

fn sample_components() -> serde_json::Value {
    json!([
        {
            "id": "solar-1",
            "type": "solar",
            "x": 100.0,
            "y": 50.5,
            "connections": ["battery-1"],
            "specs": { "power": 400, "efficiency": 0.21 }
        },
        {
            "id": "battery-1",
            "type": "battery",
            "x": 300,
            "y": 50,
            "connections": [],
            "specs": { "capacity": 5000, "maxChargePower": 2000 }
        },
        {
            "id": "load-1",
            "type": "load",
            "x": 500,
            "y": 50,
            "connections": ["battery-1", "inverter-9"],
            "specs": { "power": 500, "phase": "single" }
        }
    ])
}

// ---------------------------------------------------------------------------
// Test: POST + GET roundtrip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_get_design(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/designs",
        json!({ "name": "Off-grid cabin", "components": sample_components() }),
    )
    .await;
    assert_eq!(create_resp.status(), StatusCode::CREATED);

    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["name"], "Off-grid cabin");
    assert!(created["created_at"].is_string());
    assert_eq!(created["components"].as_array().unwrap().len(), 3);
    assert_eq!(created["components"][0]["type"], "solar");
    assert_eq!(created["components"][2]["specs"]["phase"], "single");

    let app = build_test_app(pool);
    let get_resp = get(app, &format!("/api/designs/{id}")).await;
    assert_eq!(get_resp.status(), StatusCode::OK);

    let fetched = body_json(get_resp).await;
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_no_components(pool: PgPool) {
    let app = build_test_app(pool);
    let resp = post_json(app, "/api/designs", json!({ "name": "Home", "components": [] })).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created = body_json(resp).await;
    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["components"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_keeps_supplied_timestamp(pool: PgPool) {
    let app = build_test_app(pool);
    let resp = post_json(
        app,
        "/api/designs",
        json!({ "name": "Backdated", "components": [], "created_at": "2023-01-02T03:04:05Z" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created = body_json(resp).await;
    let created_at = created["created_at"].as_str().unwrap();
    assert!(created_at.starts_with("2023-01-02T03:04:05"), "got {created_at}");
}

// ---------------------------------------------------------------------------
// Test: validation failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_empty_name_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let resp = post_json(app, "/api/designs", json!({ "name": "", "components": [] })).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = body_json(resp).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Nothing was persisted.
    let app = build_test_app(pool);
    let list = body_json(get(app, "/api/designs").await).await;
    assert_eq!(list, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_malformed_components_is_rejected(pool: PgPool) {
    let payloads = [
        json!({ "name": "No components" }),
        json!({ "name": "Bad x", "components": [
            { "id": "a", "type": "solar", "x": "left", "y": 0, "connections": [], "specs": {} }
        ]}),
        json!({ "name": "Bad spec", "components": [
            { "id": "a", "type": "solar", "x": 0, "y": 0, "connections": [], "specs": { "on": true } }
        ]}),
        json!({ "name": "Bad connections", "components": [
            { "id": "a", "type": "solar", "x": 0, "y": 0, "connections": "b", "specs": {} }
        ]}),
        json!({ "name": "Duplicate ids", "components": [
            { "id": "a", "type": "solar", "x": 0, "y": 0, "connections": [], "specs": {} },
            { "id": "a", "type": "load", "x": 1, "y": 1, "connections": [], "specs": {} }
        ]}),
    ];

    for payload in payloads {
        let app = build_test_app(pool.clone());
        let resp = post_json(app, "/api/designs", payload.clone()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {payload}");

        let json = body_json(resp).await;
        assert_eq!(json["code"], "VALIDATION_ERROR", "payload: {payload}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_invalid_json_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let resp = post_raw(app, "/api/designs", "{ not json".to_string()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: listing and lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_designs_newest_first(pool: PgPool) {
    for (name, ts) in [
        ("t1", "2024-03-01T10:00:00Z"),
        ("t2", "2024-03-02T10:00:00Z"),
        ("t3", "2024-03-03T10:00:00Z"),
    ] {
        let app = build_test_app(pool.clone());
        let resp = post_json(
            app,
            "/api/designs",
            json!({ "name": name, "components": [], "created_at": ts }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let app = build_test_app(pool);
    let resp = get(app, "/api/designs").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["t3", "t2", "t1"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_design_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let resp = get(app, "/api/designs/424242").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json = body_json(resp).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Design with id 424242 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_design_with_non_integer_id_is_client_error(pool: PgPool) {
    let app = build_test_app(pool);
    let resp = get(app, "/api/designs/abc").await;
    assert!(resp.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Test: power summary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_power_summary(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/designs",
            json!({ "name": "Summary", "components": sample_components() }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let resp = get(app, &format!("/api/designs/{id}/power-summary")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["total_generation"], 400.0);
    assert_eq!(json["total_consumption"], 500.0);
    assert_eq!(json["storage_capacity"], 5000.0);
    assert_eq!(json["net_power"], -100.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_power_summary_for_missing_design_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let resp = get(app, "/api/designs/7/power-summary").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
