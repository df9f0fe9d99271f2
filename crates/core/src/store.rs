//! The storage adapter seam.
//!
//! The service talks to persistence exclusively through [`TodoStore`],
//! so the ORM and raw-SQL deployment profiles are interchangeable.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::todo::{NewTodo, Todo, UpdateTodo};
use crate::types::DbId;

/// Operation contract every storage adapter satisfies.
///
/// Each method performs exactly one store round trip. Adapters rely on
/// the database's own statement atomicity; no locks are held here and
/// no operation spans multiple statements.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All records, ordered by `id`.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Insert a new record. The store assigns `id` and `created_at`
    /// and defaults `completed` to false.
    async fn insert(&self, input: &NewTodo) -> Result<Todo, StoreError>;

    /// Fetch a record by id, or `None` if absent.
    async fn find(&self, id: DbId) -> Result<Option<Todo>, StoreError>;

    /// Replace `title`, `description`, and `completed` in one atomic
    /// write. Returns `None` if no such record exists.
    async fn update(&self, id: DbId, input: &UpdateTodo) -> Result<Option<Todo>, StoreError>;

    /// Remove a record. Returns whether a row was actually deleted.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
}
