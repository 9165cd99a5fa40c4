//! Shared configuration loader for the svx toolchain.
//!
//! `defaults/svx.default.toml` is embedded into every binary so the
//! documented defaults and the runtime behavior stay in sync. Applications
//! layer an optional user file on top of those defaults via [`Loader`]
//! before deserializing into [`SvxConfig`].

use std::collections::BTreeMap;
use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;

use svx_format::style::FormatStyle;

const DEFAULT_TOML: &str = include_str!("../defaults/svx.default.toml");

/// Top-level configuration consumed by svx applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SvxConfig {
    pub format: FormatStyle,
    pub lint: LintConfig,
}

/// Which rules run and their `key=value,...` configuration strings.
#[derive(Debug, Clone, Deserialize)]
pub struct LintConfig {
    pub rules: Vec<String>,
    #[serde(default)]
    pub configurations: BTreeMap<String, String>,
}

impl LintConfig {
    /// Configuration string for a rule; empty means defaults.
    pub fn configuration_for(&self, rule: &str) -> &str {
        self.configurations
            .get(rule)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Loader { builder }
    }

    /// Adds a user configuration file over the defaults.
    pub fn with_user_file(mut self, path: &Path) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml));
        self
    }

    pub fn load(self) -> Result<SvxConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Loader::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svx_format::style::AlignmentPolicy;

    #[test]
    fn embedded_defaults_load() {
        let config = Loader::new().load().expect("defaults are valid");
        assert_eq!(config.format.column_limit, 100);
        assert_eq!(config.format.wrap_spaces, 4);
        assert_eq!(
            config.format.case_items_alignment,
            AlignmentPolicy::Infer
        );
        assert!(config
            .lint
            .rules
            .iter()
            .any(|rule| rule == "undersized-binary-literal"));
        assert_eq!(config.lint.configuration_for("no-such-rule"), "");
    }
}
