//! ORM storage adapter.
//!
//! Drives the same `todos` table through sea-orm entity operations.
//! Updates go through an `ActiveModel` with an `Unchanged` primary key
//! so the write stays a single statement.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    SqlxPostgresConnector,
};

use doable_core::error::StoreError;
use doable_core::store::TodoStore;
use doable_core::todo::{NewTodo, Todo, UpdateTodo};
use doable_core::types::DbId;

use crate::entity::todo::{self, Entity as Todos};

impl From<todo::Model> for Todo {
    fn from(model: todo::Model) -> Self {
        Todo {
            id: model.id,
            title: model.title,
            description: model.description,
            completed: model.completed,
            created_at: model.created_at,
        }
    }
}

/// [`TodoStore`] adapter backed by sea-orm.
#[derive(Clone)]
pub struct OrmTodoStore {
    conn: DatabaseConnection,
}

impl OrmTodoStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Wrap an existing sqlx pool. Lets the ORM profile share pool
    /// configuration with the SQL profile, and lets tests drive both
    /// adapters against one database.
    pub fn from_pool(pool: sqlx::PgPool) -> Self {
        Self {
            conn: SqlxPostgresConnector::from_sqlx_postgres_pool(pool),
        }
    }
}

#[async_trait]
impl TodoStore for OrmTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let models = Todos::find()
            .order_by_asc(todo::Column::Id)
            .all(&self.conn)
            .await
            .map_err(StoreError::new)?;
        Ok(models.into_iter().map(Todo::from).collect())
    }

    async fn insert(&self, input: &NewTodo) -> Result<Todo, StoreError> {
        let model = todo::ActiveModel {
            title: ActiveValue::Set(input.title.clone()),
            description: ActiveValue::Set(input.description.clone()),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
        .map_err(StoreError::new)?;
        Ok(model.into())
    }

    async fn find(&self, id: DbId) -> Result<Option<Todo>, StoreError> {
        let model = Todos::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(StoreError::new)?;
        Ok(model.map(Todo::from))
    }

    async fn update(&self, id: DbId, input: &UpdateTodo) -> Result<Option<Todo>, StoreError> {
        let active = todo::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(input.title.clone()),
            description: ActiveValue::Set(input.description.clone()),
            completed: ActiveValue::Set(input.completed),
            created_at: ActiveValue::NotSet,
        };
        match active.update(&self.conn).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(StoreError::new(err)),
        }
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = Todos::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(StoreError::new)?;
        Ok(result.rows_affected > 0)
    }
}
