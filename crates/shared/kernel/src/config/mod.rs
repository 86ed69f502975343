use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Base name of the configuration file when no path is given.
pub const DEFAULT_CONFIG: &str = "catalog";
/// Prefix of environment overrides (e.g. `PCAT__WINDOW__TITLE`).
pub const ENV_PREFIX: &str = "PCAT";

/// Custom error type for config loading.
#[pcat_derive::pcat_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration by layering environment overrides on top of an optional file.
///
/// 1. **Base File**: `path` (format inferred from the extension, or searched for
///    `.toml`/`.json` when there is none). Defaults to [`DEFAULT_CONFIG`]. A missing file
///    is not an error: every section of the catalog config has defaults.
/// 2. **Environment Overrides**: variables prefixed with `PCAT__`, nested with double
///    underscores (`PCAT__LOGGING__LEVEL` maps to `logging.level`). Numeric and boolean
///    values are parsed, so `PCAT__WINDOW__WIDTH=640` fills an `f64` field.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file exists but cannot be parsed, or if the
/// merged values do not match the structure of `T`.
///
/// # Example
/// ```rust,no_run
/// use pcat_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     title: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    if !config_exists(&effective_path) {
        warn!("Config {} not found, using defaults", effective_path.display());
    }

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

fn config_exists(path: &Path) -> bool {
    if path.extension().is_some() {
        return path.is_file();
    }
    ["toml", "json"].iter().any(|ext| path.with_extension(ext).is_file())
}
