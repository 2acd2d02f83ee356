//! HTTP-level integration tests for project endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{assert_error_code, body_json, build_test_app, get, post_json, put_json};
use sqlx::PgPool;

use planforge_db::models::project::CreateProject;
use planforge_db::repositories::ProjectRepo;

async fn setup_project(pool: &PgPool, suffix: &str) -> i64 {
    ProjectRepo::create(
        pool,
        &CreateProject {
            title: format!("API_P_{suffix}"),
            idea_text: Some("an idea".to_string()),
            is_premium: None,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/projects creates a project
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({ "title": "Coffee truck", "idea_text": "mobile espresso" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Coffee truck");
    assert_eq!(json["data"]["current_version"], 0);
    assert_eq!(json["data"]["is_premium"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_empty_title_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({ "title": "   " }),
    )
    .await;
    assert_error_code(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/projects/{id} returns project with live output
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_project_with_output(pool: PgPool) {
    let project_id = setup_project(&pool, "get").await;
    let app = build_test_app(pool);

    // No output generated yet.
    let response = get(app.clone(), &format!("/api/v1/projects/{project_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["project"]["id"], project_id);
    assert!(json["data"]["output"].is_null());

    // Deliver output, then it appears in the detail view.
    let deliver = put_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/output"),
        serde_json::json!({ "pitch": "we sell coffee", "swot": { "strengths": ["taste"] } }),
    )
    .await;
    assert_eq!(deliver.status(), StatusCode::OK);

    let response = get(app, &format!("/api/v1/projects/{project_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["output"]["pitch"], "we sell coffee");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_project_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/projects/424242").await;
    assert_error_code(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

// ---------------------------------------------------------------------------
// Test: PUT /api/v1/projects/{id} updates fields and records a version
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_records_version(pool: PgPool) {
    let project_id = setup_project(&pool, "upd").await;
    let app = build_test_app(pool);

    let response = put_json(
        app,
        &format!("/api/v1/projects/{project_id}"),
        serde_json::json!({ "title": "Renamed", "is_premium": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["project"]["title"], "Renamed");
    assert_eq!(json["data"]["project"]["is_premium"], true);
    assert_eq!(json["data"]["version"]["version_number"], 1);
    assert_eq!(json["data"]["version"]["title"], "Renamed");
    // The returned project must already point at the version just recorded.
    assert_eq!(
        json["data"]["project"]["current_version"],
        json["data"]["version"]["version_number"]
    );
}

// ---------------------------------------------------------------------------
// Test: PUT /api/v1/projects/{id}/output records a version with snapshot
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_put_output_records_version(pool: PgPool) {
    let project_id = setup_project(&pool, "out").await;
    let app = build_test_app(pool);

    let response = put_json(
        app,
        &format!("/api/v1/projects/{project_id}/output"),
        serde_json::json!({ "market_analysis": "large", "pitch": "buy us" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["output"]["market_analysis"], "large");
    assert_eq!(json["data"]["version"]["version_number"], 1);
    assert_eq!(
        json["data"]["version"]["output_snapshot"]["pitch"],
        "buy us"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_put_output_missing_project_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/projects/424242/output",
        serde_json::json!({ "pitch": "nope" }),
    )
    .await;
    assert_error_code(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}
