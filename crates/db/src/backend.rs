use std::sync::Arc;

use doable_core::store::TodoStore;

use crate::{DbPool, OrmTodoStore, SqlTodoStore};

/// Which storage adapter a deployment runs.
///
/// Both adapters satisfy the same [`TodoStore`] contract against the
/// same table; the choice is purely a deployment profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Raw parameterized SQL via sqlx.
    Sql,
    /// sea-orm entity operations.
    Orm,
}

impl StoreBackend {
    /// Parse a backend name as supplied via configuration.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "sql" => Some(Self::Sql),
            "orm" => Some(Self::Orm),
            _ => None,
        }
    }

    /// Build the selected adapter on top of an existing pool.
    pub fn into_store(self, pool: DbPool) -> Arc<dyn TodoStore> {
        match self {
            Self::Sql => Arc::new(SqlTodoStore::new(pool)),
            Self::Orm => Arc::new(OrmTodoStore::from_pool(pool)),
        }
    }
}
