//! Raw-SQL storage adapter.
//!
//! One parameterized statement per operation: a shared column list,
//! `query_as` with positional binds, and `RETURNING` so every write
//! round-trips the affected row in the same statement.

use async_trait::async_trait;
use sqlx::PgPool;

use doable_core::error::StoreError;
use doable_core::store::TodoStore;
use doable_core::todo::{NewTodo, Todo, UpdateTodo};
use doable_core::types::{DbId, Timestamp};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed, created_at";

/// A row from the `todos` table.
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: DbId,
    title: String,
    description: Option<String>,
    completed: bool,
    created_at: Timestamp,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            created_at: row.created_at,
        }
    }
}

/// [`TodoStore`] adapter executing raw SQL against PostgreSQL.
#[derive(Clone)]
pub struct SqlTodoStore {
    pool: PgPool,
}

impl SqlTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for SqlTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id");
        let rows = sqlx::query_as::<_, TodoRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::new)?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn insert(&self, input: &NewTodo) -> Result<Todo, StoreError> {
        let query =
            format!("INSERT INTO todos (title, description) VALUES ($1, $2) RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, TodoRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::new)?;
        Ok(row.into())
    }

    async fn find(&self, id: DbId) -> Result<Option<Todo>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        let row = sqlx::query_as::<_, TodoRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::new)?;
        Ok(row.map(Todo::from))
    }

    async fn update(&self, id: DbId, input: &UpdateTodo) -> Result<Option<Todo>, StoreError> {
        let query = format!(
            "UPDATE todos SET title = $2, description = $3, completed = $4 \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TodoRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.completed)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::new)?;
        Ok(row.map(Todo::from))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::new)?;
        Ok(result.rows_affected() > 0)
    }
}
