//! Bookmark persistence gateway: a thin translation of five operations into SQL.

use crate::error::AppError;
use crate::model::{Bookmark, BookmarkPatch, NewBookmark};
use crate::sql::{delete, insert, select_all, select_by_id, update, QueryBuf};
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPool};
use sqlx::query::{Query, QueryAs};
use sqlx::Postgres;

/// Data access for the bookmarks table. No business validation happens here;
/// inputs are assumed well formed. Any backend failure is an `AppError::Db`
/// or `AppError::Storage`.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Bookmark>, AppError>;

    /// Insert and return the stored record with its assigned id.
    async fn create(&self, new: &NewBookmark) -> Result<Bookmark, AppError>;

    /// `Ok(None)` when no row has this id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, AppError>;

    /// Rows affected (0 or 1).
    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<u64, AppError>;

    /// Rows affected (0 or 1).
    async fn delete(&self, id: i64) -> Result<u64, AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgBookmarkStore {
    pool: PgPool,
    schema: String,
}

impl PgBookmarkStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgBookmarkStore {
            pool,
            schema: schema.into(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn bind_as(q: &QueryBuf) -> QueryAs<'_, Postgres, Bookmark, PgArguments> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Bookmark>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query
    }

    fn bind(q: &QueryBuf) -> Query<'_, Postgres, PgArguments> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query
    }
}

#[async_trait]
impl BookmarkStore for PgBookmarkStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, AppError> {
        let q = select_all(&self.schema);
        Ok(Self::bind_as(&q).fetch_all(&self.pool).await?)
    }

    async fn create(&self, new: &NewBookmark) -> Result<Bookmark, AppError> {
        let q = insert(&self.schema, new);
        Ok(Self::bind_as(&q).fetch_one(&self.pool).await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, AppError> {
        let q = select_by_id(&self.schema, id);
        Ok(Self::bind_as(&q).fetch_optional(&self.pool).await?)
    }

    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<u64, AppError> {
        let Some(q) = update(&self.schema, id, patch) else {
            return Ok(0);
        };
        let done = Self::bind(&q).execute(&self.pool).await?;
        Ok(done.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let q = delete(&self.schema, id);
        let done = Self::bind(&q).execute(&self.pool).await?;
        Ok(done.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
