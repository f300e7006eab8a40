use crate::error::ConfigError;
use crate::settings::LoggingSettings;
use std::env;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "etudiants.log";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `settings.level`. When a log directory is
/// configured, events are mirrored to a daily-rolling file; the returned guard
/// must be held for as long as file output is wanted.
pub fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>, ConfigError> {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(&settings.level, rust_log.as_deref())?;

    let stdout_layer = fmt::layer().with_target(false).compact();

    match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().with_ansi(false).with_writer(writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(file_layer)
                .try_init()
                .map_err(|e| ConfigError::SubscriberAlreadySet(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .try_init()
                .map_err(|e| ConfigError::SubscriberAlreadySet(e.to_string()))?;
            Ok(None)
        }
    }
}

/// Picks the filter directives: a parsable `rust_log` wins, otherwise the
/// configured level must parse.
fn env_filter(level: &str, rust_log: Option<&str>) -> Result<EnvFilter, ConfigError> {
    if let Some(filter) = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return Ok(filter);
    }

    EnvFilter::try_new(level)
        .map_err(|e| ConfigError::ValidationError(format!("logging.level `{level}`: {e}")))
}
