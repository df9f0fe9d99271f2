//! PostgreSQL persistence for doable.
//!
//! Two interchangeable [`TodoStore`](doable_core::store::TodoStore)
//! adapters live here: [`SqlTodoStore`] runs raw parameterized SQL via
//! sqlx, [`OrmTodoStore`] drives the same table through sea-orm entity
//! operations. A deployment picks one via [`StoreBackend`].

use sqlx::postgres::PgPoolOptions;

pub mod entity;
pub mod orm_store;
pub mod sql_store;

mod backend;

pub use backend::StoreBackend;
pub use orm_store::OrmTodoStore;
pub use sql_store::SqlTodoStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Cheap connectivity probe used at startup and by the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply any pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
