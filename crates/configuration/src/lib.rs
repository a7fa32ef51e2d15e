use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DatabaseSettings, LogFormat, LoggingSettings, ServerSettings, Settings};

/// Loads the application settings.
///
/// This function is the primary entry point for this crate. Built-in defaults are
/// layered under an optional TOML file (`config.toml` in the working directory, or
/// the explicit `path`), which is in turn overridden by the process environment.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    Settings::load(path, |key| std::env::var(key).ok())
}
