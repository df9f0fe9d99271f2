//! Local mirror of the server's to-do collection.

use doable_core::todo::{NewTodo, Todo, UpdateTodo};
use doable_core::types::DbId;

use crate::api::{ClientError, TodoApi};

/// Holds the collection as of the last successful fetch.
///
/// Every mutation re-fetches the full list instead of patching local
/// state, so the cache never drifts from the store. On failure the
/// cache is left untouched and the error is returned to the caller.
pub struct TodoViewModel {
    api: TodoApi,
    todos: Vec<Todo>,
}

impl TodoViewModel {
    pub fn new(api: TodoApi) -> Self {
        Self {
            api,
            todos: Vec::new(),
        }
    }

    /// The collection as of the last successful fetch.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Replace the cache with the server's current collection.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.todos = self.api.list().await?;
        Ok(())
    }

    /// Create a to-do, then re-fetch. Empty titles are rejected before
    /// any request is made.
    pub async fn add(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), ClientError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ClientError::Validation(
                "title must not be empty".to_string(),
            ));
        }

        let input = NewTodo { title, description };
        if let Err(err) = self.api.create(&input).await {
            tracing::warn!(error = %err, "Create failed");
            return Err(err);
        }

        self.refresh().await
    }

    /// Set the completion flag of a cached item, then re-fetch. The
    /// other fields are resent unchanged since the server replaces all
    /// mutable fields together.
    pub async fn set_completed(&mut self, id: DbId, completed: bool) -> Result<(), ClientError> {
        let Some(current) = self.todos.iter().find(|t| t.id == id) else {
            return Err(ClientError::Validation(format!(
                "no cached todo with id {id}"
            )));
        };

        let input = UpdateTodo {
            title: current.title.clone(),
            description: current.description.clone(),
            completed,
        };
        if let Err(err) = self.api.update(id, &input).await {
            tracing::warn!(error = %err, "Update failed");
            return Err(err);
        }

        self.refresh().await
    }

    /// Delete a to-do, then re-fetch.
    pub async fn remove(&mut self, id: DbId) -> Result<(), ClientError> {
        if let Err(err) = self.api.delete(id).await {
            tracing::warn!(error = %err, "Delete failed");
            return Err(err);
        }

        self.refresh().await
    }
}
