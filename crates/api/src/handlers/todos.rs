//! Handlers for the to-do collection.
//!
//! Each handler makes exactly one call into the [`TodoService`] and
//! serializes the result; no business logic lives here.
//!
//! [`TodoService`]: doable_core::service::TodoService

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use doable_core::todo::{NewTodo, UpdateTodo};
use doable_core::types::DbId;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /todos
///
/// List every to-do currently in the store.
pub async fn list_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let todos = state.todos.list().await?;

    Ok(Json(todos))
}

/// POST /todos
///
/// Create a to-do. The store assigns `id` and `created_at`;
/// `completed` starts false. Empty titles are rejected with 400.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<NewTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.create(input).await?;

    tracing::info!(id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.get(id).await?;

    Ok(Json(todo))
}

/// PUT /todos/{id}
///
/// Replace `title`, `description`, and `completed` in one write.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.update(id, input).await?;

    tracing::info!(id, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /todos/{id}
///
/// Idempotent: deleting an id that is already gone still returns 204.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.todos.delete(id).await?;

    tracing::info!(id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
