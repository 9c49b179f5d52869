//! Crate-wide constants.

/// Fixed infix of the config-file naming convention: `{name}.config.{ext}`.
pub const CONFIG_STEM: &str = "config";
