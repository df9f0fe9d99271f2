//! The to-do entity, its request DTOs, and field validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// A single to-do record as stored and served over the wire.
///
/// `id` and `created_at` are assigned by the store at creation and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: Timestamp,
}

/// Payload for creating a to-do. `description` may be omitted.
///
/// `title` defaults to empty when absent so a missing title surfaces
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for updating a to-do. All mutable fields are replaced
/// together; there is no partial patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
}

/// Validate a to-do title: it must contain at least one
/// non-whitespace character.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}
