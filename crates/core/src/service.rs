//! To-do operations shared by every deployment profile.

use std::sync::Arc;

use crate::error::CoreError;
use crate::store::TodoStore;
use crate::todo::{self, NewTodo, Todo, UpdateTodo};
use crate::types::DbId;

/// The to-do service: field validation plus a single store round trip
/// per operation. Storage is abstracted behind [`TodoStore`] so the
/// ORM and raw-SQL profiles share this code unchanged.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// All records currently in the store. No pagination, no filtering.
    pub async fn list(&self) -> Result<Vec<Todo>, CoreError> {
        Ok(self.store.list().await?)
    }

    /// Validate and insert a new record, returning it as created.
    pub async fn create(&self, input: NewTodo) -> Result<Todo, CoreError> {
        todo::validate_title(&input.title)?;
        Ok(self.store.insert(&input).await?)
    }

    /// Fetch a record by id.
    pub async fn get(&self, id: DbId) -> Result<Todo, CoreError> {
        self.store
            .find(id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Todo", id })
    }

    /// Replace all mutable fields of a record in one write. `id` and
    /// `created_at` are never touched.
    pub async fn update(&self, id: DbId, input: UpdateTodo) -> Result<Todo, CoreError> {
        todo::validate_title(&input.title)?;
        self.store
            .update(id, &input)
            .await?
            .ok_or(CoreError::NotFound { entity: "Todo", id })
    }

    /// Remove a record. Deleting an id that no longer exists is not an
    /// error: the end state is the same either way.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let deleted = self.store.delete(id).await?;
        if !deleted {
            tracing::debug!(id, "Delete targeted a missing todo");
        }
        Ok(())
    }
}
