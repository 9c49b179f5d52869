//! Call options and the resolved result type.

use std::path::PathBuf;

/// Default config shape: an untyped structural mapping.
///
/// Used when the caller does not declare a concrete config type.
pub type UserInputConfig = serde_json::Map<String, serde_json::Value>;

/// Where the config file comes from.
///
/// Exactly one of the two is supplied; "neither" and "both" are not
/// representable, so an explicit file can never be shadowed by a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Resolve `{name}.config.{ext}` under `cwd`, where `{ext}` is the
    /// extension of the loader in use.
    Name(String),
    /// Explicit config file path. Relative paths are resolved against
    /// `cwd`; absolute paths are used as-is.
    File(PathBuf),
}

/// Options for [`load_config`](crate::load_config).
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// How to locate the config file.
    pub source: ConfigSource,
    /// Directory to resolve the config file from. Defaults to the process
    /// working directory.
    pub cwd: Option<PathBuf>,
    /// Whether a missing config file is an error (`true`, the default) or
    /// yields an empty config.
    pub throw_on_not_found: bool,
}

impl LoadOptions {
    /// Options that resolve `{name}.config.{ext}` under `cwd`.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            source: ConfigSource::Name(name.into()),
            cwd: None,
            throw_on_not_found: true,
        }
    }

    /// Options that load an explicit config file path.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ConfigSource::File(path.into()),
            cwd: None,
            throw_on_not_found: true,
        }
    }

    /// Set the directory to resolve from.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Control the not-found policy.
    pub fn throw_on_not_found(mut self, throw: bool) -> Self {
        self.throw_on_not_found = throw;
        self
    }
}

/// A loaded configuration plus the path it was resolved from.
///
/// `config_file` is empty when a missing file was tolerated via
/// [`LoadOptions::throw_on_not_found`]`(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig<T = UserInputConfig> {
    pub config: T,
    pub config_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_options_default_to_strict_not_found() {
        let options = LoadOptions::name("lib");
        assert_eq!(options.source, ConfigSource::Name("lib".to_string()));
        assert!(options.cwd.is_none());
        assert!(options.throw_on_not_found);
    }

    #[test]
    fn builder_methods_chain() {
        let options = LoadOptions::file("custom.toml")
            .cwd("/tmp/project")
            .throw_on_not_found(false);
        assert_eq!(
            options.source,
            ConfigSource::File(PathBuf::from("custom.toml"))
        );
        assert_eq!(options.cwd, Some(PathBuf::from("/tmp/project")));
        assert!(!options.throw_on_not_found);
    }
}
