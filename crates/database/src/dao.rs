use crate::error::DbError;
use async_trait::async_trait;

/// Persistence operations for one entity type.
///
/// `T` is the value a caller hands over to be stored; `Record` is the row
/// shape handed back when reading. Implementations are free to choose the
/// storage, which keeps callers (the HTTP layer, the CLI) independent of SQL.
#[async_trait]
pub trait Dao<T>: Send + Sync
where
    T: Sync,
{
    type Record: Send;

    /// Persists one new row built from `entity`. Every call inserts, so
    /// identical values produce distinct rows.
    async fn create(&self, entity: &T) -> Result<(), DbError>;

    /// Returns every stored row, in whatever order the store yields them.
    async fn find_all(&self) -> Result<Vec<Self::Record>, DbError>;
}
