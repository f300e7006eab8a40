use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load settings for database connection: {0}")]
    ConnectionConfigError(String),

    /// Any failure raised by the driver or the database itself: lost
    /// connections, SQL errors and constraint violations alike.
    #[error("Database operation failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

impl From<configuration::error::ConfigError> for DbError {
    fn from(e: configuration::error::ConfigError) -> Self {
        DbError::ConnectionConfigError(e.to_string())
    }
}
