//! JSON config loader (`{name}.config.json`).

use std::path::Path;

use async_trait::async_trait;

use super::{LoaderError, ModuleLoader};

/// Loads `*.config.json` files with serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLoader;

#[async_trait]
impl ModuleLoader for JsonLoader {
    fn extension(&self) -> &'static str {
        "json"
    }

    async fn import_default(&self, path: &Path) -> Result<serde_json::Value, LoaderError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoaderError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&content).map_err(|e| LoaderError::ParseJson {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn imports_json_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lib.config.json");
        std::fs::write(&path, r#"{ "features": {} }"#).unwrap();

        let value = JsonLoader.import_default(&path).await.unwrap();
        assert_eq!(value, serde_json::json!({ "features": {} }));
    }

    #[tokio::test]
    async fn invalid_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.config.json");
        std::fs::write(&path, "{ not valid").unwrap();

        let err = JsonLoader.import_default(&path).await.unwrap_err();
        assert!(matches!(err, LoaderError::ParseJson { .. }));
        assert!(err.to_string().contains("bad.config.json"));
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.config.json");

        let err = JsonLoader.import_default(&path).await.unwrap_err();
        assert!(matches!(err, LoaderError::Read { .. }));
    }

    #[tokio::test]
    async fn rereads_file_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("live.config.json");
        std::fs::write(&path, r#"{ "port": 1 }"#).unwrap();
        let first = JsonLoader.import_default(&path).await.unwrap();

        std::fs::write(&path, r#"{ "port": 2 }"#).unwrap();
        let second = JsonLoader.import_default(&path).await.unwrap();

        assert_eq!(first["port"], 1);
        assert_eq!(second["port"], 2);
    }
}
