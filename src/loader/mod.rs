//! ModuleLoader trait and the built-in file-format loaders.
//!
//! The resolution logic in [`crate::load`] never touches file contents
//! itself; it delegates to a `ModuleLoader`, so unit tests can substitute
//! a fake and downstream tools can plug in their own evaluator.

mod json;
mod toml;

pub use json::JsonLoader;
pub use toml::TomlLoader;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a module loader.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: ::toml::de::Error,
    },
}

/// Capability that evaluates a config file and yields its primary value.
///
/// Each loader supports exactly one file extension; name-based resolution
/// appends it to form `{name}.config.{ext}`. Implementations must not
/// cache: every call re-reads the file so that repeated loads observe
/// current contents (live-reload workflows depend on this).
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    /// File extension this loader evaluates, without the leading dot.
    fn extension(&self) -> &'static str;

    /// Evaluate the file at `path` and return its configuration value as
    /// an untyped tree.
    async fn import_default(&self, path: &Path) -> Result<serde_json::Value, LoaderError>;
}
