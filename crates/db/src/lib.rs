pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Returns true when `err` wraps a unique-index violation from the store.
///
/// Daily-log uniqueness (and the members email constraint) is enforced by the
/// database rather than an application-level pre-check, so conflicting inserts
/// surface here and get mapped to a conflict response by the handler.
pub fn is_unique_violation(err: &eyre::Report) -> bool {
    matches!(
        err.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(db_err))
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}
