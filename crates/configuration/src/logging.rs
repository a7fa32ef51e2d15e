use crate::error::ConfigError;
use crate::settings::{LogFormat, LoggingSettings};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "healthcare-api.log";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. When a log directory is
/// configured, the returned guard must be held for the life of the process so the
/// non-blocking file writer is flushed on exit.
pub fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    let console = match settings.format {
        LogFormat::Pretty => fmt::layer().boxed(),
        LogFormat::Json => fmt::layer().json().boxed(),
    };

    let (file, guard) = match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    Ok(guard)
}
