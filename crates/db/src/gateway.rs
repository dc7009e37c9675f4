//! Deadline-bounded access to the relational store.
//!
//! Every statement the service runs goes through a [`Gateway`], which owns
//! the connection pool and applies a fixed per-call deadline. The gateway
//! holds no business logic; repositories build the statements and interpret
//! the rows.

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs, QueryScalar};
use sqlx::{FromRow, PgPool, Postgres};
use tokio::time::timeout;

use crate::DbId;

/// Failure modes of a single store call.
///
/// Zero rows on a keyed read is not an error and never appears here;
/// it surfaces as `Ok(None)` from [`Gateway::query_one`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The call did not complete within the gateway deadline. The in-flight
    /// operation is abandoned; it is never retried.
    #[error("store call exceeded the {}s deadline", .0.as_secs())]
    Timeout(Duration),

    /// Any other failure reported by the store.
    #[error("store backend failure: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Explicitly constructed store handle: pool plus per-call deadline.
///
/// Built once at startup and passed into the repository layer; there is no
/// global connection handle.
#[derive(Clone)]
pub struct Gateway {
    pool: PgPool,
    deadline: Duration,
}

impl Gateway {
    pub fn new(pool: PgPool, deadline: Duration) -> Self {
        Self { pool, deadline }
    }

    /// Run a keyed read expecting at most one row. Zero rows is `Ok(None)`.
    pub async fn query_one<'q, T>(
        &self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> Result<Option<T>, StoreError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        self.bounded(query.fetch_optional(&self.pool)).await
    }

    /// Run a read returning any number of rows. An empty result is success.
    pub async fn query_many<'q, T>(
        &self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> Result<Vec<T>, StoreError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        self.bounded(query.fetch_all(&self.pool)).await
    }

    /// Run a write statement, returning the number of rows affected.
    pub async fn exec<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Result<u64, StoreError> {
        let result = self.bounded(query.execute(&self.pool)).await?;
        Ok(result.rows_affected())
    }

    /// Run an INSERT carrying a `RETURNING id` clause, yielding the
    /// store-generated key.
    pub async fn insert_returning_id<'q>(
        &self,
        query: QueryScalar<'q, Postgres, DbId, PgArguments>,
    ) -> Result<DbId, StoreError> {
        self.bounded(query.fetch_one(&self.pool)).await
    }

    async fn bounded<T>(
        &self,
        op: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, StoreError> {
        match timeout(self.deadline, op).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StoreError::Timeout(self.deadline)),
        }
    }
}
