//! Config resolution and loading.
//!
//! Resolution precedence (highest to lowest):
//! 1. Explicit file path (`ConfigSource::File`), resolved against `cwd`
//! 2. `{cwd}/{name}.config.{ext}` (`ConfigSource::Name`)
//! 3. `cwd` defaults to the process working directory

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

use crate::constants::CONFIG_STEM;
use crate::loader::{LoaderError, ModuleLoader};
use crate::options::{ConfigSource, LoadOptions, ResolvedConfig};

/// Errors during config resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to resolve current directory: {source}")]
    CurrentDir { source: std::io::Error },
}

/// Failure while importing an existing config file. Contained, never
/// surfaced to the caller.
#[derive(Error, Debug)]
enum LoadFailure {
    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error("config value does not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Resolve and load a `{name}.config.{ext}` file.
///
/// Resolves the file path from `options`, probes its existence, and if
/// present evaluates it with `loader`, deserializing the result into `T`.
///
/// A missing file either fails with [`ConfigError::NotFound`] (the
/// default) or, with `throw_on_not_found(false)`, yields `T::default()`
/// and an empty `config_file` path. A file that exists but fails to load
/// (unreadable, unparseable, wrong shape) never fails the call: the error
/// is logged and the call yields `T::default()` alongside the resolved
/// path. Callers that care must compare against the default sentinel.
pub async fn load_config<T>(
    loader: &dyn ModuleLoader,
    options: LoadOptions,
) -> Result<ResolvedConfig<T>, ConfigError>
where
    T: DeserializeOwned + Default,
{
    let path = resolve_config_path(&options, loader.extension())?;

    // Existence probe only; the file may still vanish before the import,
    // in which case the read error is contained below like any other.
    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        if options.throw_on_not_found {
            return Err(ConfigError::NotFound { path });
        }
        return Ok(ResolvedConfig {
            config: T::default(),
            config_file: PathBuf::new(),
        });
    }

    let config = match import_config::<T>(loader, &path).await {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            error!("failed to load config file: {}", path.display());
            T::default()
        }
    };

    Ok(ResolvedConfig {
        config,
        config_file: path,
    })
}

/// Evaluate the file and deserialize its value into `T`.
async fn import_config<T>(loader: &dyn ModuleLoader, path: &Path) -> Result<T, LoadFailure>
where
    T: DeserializeOwned,
{
    let value = loader.import_default(path).await?;
    Ok(serde_json::from_value(value)?)
}

/// Compute the absolute path of the config file from the options.
fn resolve_config_path(options: &LoadOptions, extension: &str) -> Result<PathBuf, ConfigError> {
    let cwd = match &options.cwd {
        Some(dir) => dir.clone(),
        None => current_dir()?,
    };

    let path = match &options.source {
        ConfigSource::File(file) => cwd.join(file),
        ConfigSource::Name(name) => cwd.join(format!("{name}.{CONFIG_STEM}.{extension}")),
    };

    // A relative cwd leaves the joined path relative; anchor it so the
    // returned config_file is always absolute.
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(current_dir()?.join(path))
    }
}

fn current_dir() -> Result<PathBuf, ConfigError> {
    std::env::current_dir().map_err(|e| ConfigError::CurrentDir { source: e })
}
