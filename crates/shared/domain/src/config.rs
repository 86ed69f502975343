use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration for the native shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Desktop window settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging settings applied to the global subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files; file logging is off when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
    /// Extra env-filter directives, e.g. `pcat_catalog=debug`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: crate::constants::HEADING.to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, directory: None, json: false, filter: None }
    }
}
