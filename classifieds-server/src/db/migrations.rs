//! Database bootstrap for the advertisements table

use sqlx::PgPool;

/// Run idempotent schema bootstrap.
///
/// `creation_time` is set by the store at insert and never touched again.
/// The UNIQUE constraint on `title` both enforces the uniqueness invariant
/// and provides the index for title lookups.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS advertisements (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL,
            owner TEXT NOT NULL,
            creation_time TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
