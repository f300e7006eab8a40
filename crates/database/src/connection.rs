use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::migrate::Migrator;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// The embedded schema migrations for the `Etudiant` table.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Establishes a connection pool to the PostgreSQL database.
///
/// The URL comes from `settings.url`, or from `DATABASE_URL` when none is
/// configured. The pool is opened once and can be shared by every consumer
/// of the database.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let database_url = settings.resolve_url()?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout())
        .connect(&database_url)
        .await?;

    tracing::info!(
        max_connections = settings.max_connections,
        "Connected to the database."
    );
    Ok(pool)
}

/// A utility function to run database migrations automatically.
///
/// Called at startup so the `Etudiant` table exists before the first query.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied.");
    Ok(())
}
