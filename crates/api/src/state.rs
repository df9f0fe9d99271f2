use std::sync::Arc;

use doable_core::service::TodoService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: doable_db::DbPool,
    /// The to-do service bound to the configured storage adapter.
    pub todos: TodoService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
