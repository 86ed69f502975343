//! # Logger
//!
//! Centralized `tracing` setup for the catalog apps: console output, optional rolling
//! file output with non-blocking I/O, and environment-based filtering.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"pcat_catalog=debug"`), in addition to `RUST_LOG`.
//! * Use [`Logger::from_config`] to apply a [`LoggingConfig`] section loaded from disk.
//!
//! ## Example
//!
//! ```rust
//! # use pcat_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use pcat_domain::config::LoggingConfig;
use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct Settings {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// A builder for configuring and initializing the global tracing subscriber.
///
/// File-only options (`rotation`, `max_files`, `json`) become available after [`Self::path`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    settings: Settings,
    name: N,
    file_state: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Sets the name of the logger, used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { name: WithName(name.into()), settings: self.settings, file_state: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Configures maximum number of log files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Configures the log file rotation strategy.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    /// Writes file records as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.settings.json = true;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `pcat_catalog=debug`).
    ///
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Sets the directory for rolling log files.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut settings = self.settings;
        settings.path = Some(path.into());
        LoggerBuilder { settings, name: self.name, file_state: PhantomData }
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's [`WorkerGuard`]; keep it alive for
    /// the lifetime of the program so buffered records are flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate(&self.settings, &self.name.0)?;

        let env_filter = build_env_filter(&self.settings)?;
        let mut layers = Vec::new();

        if self.settings.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match self.settings.path {
            Some(path) => {
                fs::create_dir_all(&path).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create path: {}", path.display()).into()),
                })?;

                let file_appender = RollingFileAppender::builder()
                    .rotation(self.settings.rotation)
                    .filename_prefix(&self.name.0)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.settings.max_files)
                    .build(path)?;

                let (writer, guard) = tracing_appender::non_blocking(file_appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);

                layers.push(if self.settings.json {
                    file_layer.json().boxed()
                } else {
                    file_layer.boxed()
                });
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// Holds the background file writer guard, if any. Drop it only on shutdown.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: NoName, file_state: PhantomData }
    }

    /// Initializes logging from a [`LoggingConfig`] section.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level or filter and any
    /// error [`LoggerBuilder::init`] can return.
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = parse_level(&config.level)?;
        let mut builder = Self::builder().name(name).console(config.console).level(level);
        if let Some(filter) = &config.filter {
            builder = builder.env_filter(filter.clone());
        }

        match &config.directory {
            Some(dir) => {
                let file = builder.path(dir);
                if config.json { file.json().init() } else { file.init() }
            }
            None => builder.init(),
        }
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse::<LevelFilter>().map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid log level '{level}': {e}").into(),
        context: None,
    })
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    settings.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
