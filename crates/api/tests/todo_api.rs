//! Integration tests for the `/todos` surface.
//!
//! The full lifecycle scenario runs once per storage backend; both
//! profiles must be indistinguishable over HTTP.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

use doable_db::StoreBackend;

// ---------------------------------------------------------------------------
// Lifecycle scenario (create -> list -> get -> update -> delete)
// ---------------------------------------------------------------------------

async fn run_lifecycle_scenario(app: Router) {
    // Create.
    let response = post_json(
        app.clone(),
        "/todos",
        json!({"title": "Buy milk", "description": "2%"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["title"], "Buy milk");
    assert_eq!(created["description"], "2%");
    assert_eq!(created["completed"], false);
    assert!(created["created_at"].is_string());
    let id = created["id"].as_i64().expect("id should be a number");

    // The list includes the new record.
    let response = get(app.clone(), "/todos").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert!(list
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["id"].as_i64() == Some(id)));

    // Fetching by id returns the record as created.
    let response = get(app.clone(), &format!("/todos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    // Update replaces all mutable fields.
    let response = put_json(
        app.clone(),
        &format!("/todos/{id}"),
        json!({"title": "Buy oat milk", "description": null, "completed": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["title"], "Buy oat milk");
    assert_eq!(updated["description"], serde_json::Value::Null);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["created_at"], created["created_at"]);

    // Delete.
    let response = delete(app.clone(), &format!("/todos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The record is gone from the list and returns 404 by id.
    let response = get(app.clone(), "/todos").await;
    let list = body_json(response).await;
    assert!(!list
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["id"].as_i64() == Some(id)));

    let response = get(app, &format!("/todos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn lifecycle_scenario_on_sql_backend(pool: PgPool) {
    let app = common::build_test_app_with(pool, StoreBackend::Sql);
    run_lifecycle_scenario(app).await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn lifecycle_scenario_on_orm_backend(pool: PgPool) {
    let app = common::build_test_app_with(pool, StoreBackend::Orm);
    run_lifecycle_scenario(app).await;
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_with_empty_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/todos", json!({"title": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "title must not be empty");
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_with_whitespace_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/todos", json!({"title": "   "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_with_missing_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/todos", json!({"description": "no title here"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_with_empty_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/todos", json!({"title": "Buy milk"})).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json(
        app,
        &format!("/todos/{id}"),
        json!({"title": "", "description": null, "completed": false}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Missing records
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn get_missing_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/todos/4242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Todo with id 4242 not found");
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_missing_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = put_json(
        app,
        "/todos/4242",
        json!({"title": "anything", "description": null, "completed": true}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_missing_id_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Delete is idempotent: an absent id is not an error.
    let response = delete(app, "/todos/4242").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Malformed requests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn non_numeric_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/todos/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn empty_list_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/todos").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
