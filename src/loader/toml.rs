//! TOML config loader (`{name}.config.toml`).

use std::path::Path;

use async_trait::async_trait;

use super::{LoaderError, ModuleLoader};

/// Loads `*.config.toml` files with the toml crate.
///
/// The parsed document is handed back as a `serde_json::Value` tree so the
/// core stays format-agnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlLoader;

#[async_trait]
impl ModuleLoader for TomlLoader {
    fn extension(&self) -> &'static str {
        "toml"
    }

    async fn import_default(&self, path: &Path) -> Result<serde_json::Value, LoaderError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoaderError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
        toml::from_str(&content).map_err(|e| LoaderError::ParseToml {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
