use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, DatabaseSettings, LoggingSettings, ServerSettings};

/// Prefix for environment overrides, e.g. `ETUDIANTS__SERVER__PORT=8080`.
const ENV_PREFIX: &str = "ETUDIANTS";

/// Loads the application configuration from the `config.toml` file.
///
/// The file is optional: every setting has a default, so a bare environment
/// (or nothing at all) is a valid configuration. Environment variables
/// prefixed with `ETUDIANTS__` are layered on top of the file.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml").required(false))
        .add_source(environment())
        .build()?;

    finish(builder)
}

/// Loads the configuration from an explicit file path. Unlike [`load_config`],
/// the file must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    load_file_with_environment(path, None)
}

/// `vars` replaces the process environment when given.
fn load_file_with_environment(
    path: &Path,
    vars: Option<config::Map<String, String>>,
) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(environment().source(vars))
        .build()?;

    finish(builder)
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn finish(builder: config::Config) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(
        host = %config.server.host,
        port = config.server.port,
        max_connections = config.database.max_connections,
        "Configuration loaded."
    );
    Ok(config)
}
