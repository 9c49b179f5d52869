//! confload — resolve and load `{name}.config.*` files (library crate).
//!
//! Developer tools often support an optional per-project config module:
//! the tool looks for `{name}.config.{ext}` in the project directory and,
//! if present, evaluates it to obtain a typed configuration value. This
//! crate implements that convention as a single async operation,
//! [`load_config`], with the file-evaluation step injected as a
//! [`ModuleLoader`] capability so the resolution logic stays independent
//! of any concrete file format.
//!
//! ```no_run
//! use confload::{load_config, JsonLoader, LoadOptions};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct LibConfig {
//!     #[serde(default)]
//!     features: serde_json::Map<String, serde_json::Value>,
//! }
//!
//! # async fn run() -> Result<(), confload::ConfigError> {
//! // Loads `./lib.config.json` if present.
//! let resolved = load_config::<LibConfig>(&JsonLoader, LoadOptions::name("lib")).await?;
//! println!("loaded {:?} from {}", resolved.config, resolved.config_file.display());
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod load;
pub mod loader;
pub mod options;

pub use load::{load_config, ConfigError};
pub use loader::{JsonLoader, LoaderError, ModuleLoader, TomlLoader};
pub use options::{ConfigSource, LoadOptions, ResolvedConfig, UserInputConfig};
