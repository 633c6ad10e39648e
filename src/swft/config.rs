//! Configuration loading
//!
//! `defaults/swft.default.toml` is embedded so the documented defaults and the runtime
//! behavior cannot drift apart. Callers layer their own files and single key overrides on
//! top with [Loader] before deserializing into [SwftConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/swft.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct SwftConfig {
    pub parser: ParserConfig,
    pub codegen: CodegenConfig,
    pub output: OutputConfig,
}

/// Grammar and parse settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub start_rule: String,
    pub rewrite_left_recursion: bool,
}

/// Knobs of the python emitter.
#[derive(Debug, Clone, Deserialize)]
pub struct CodegenConfig {
    pub indent_width: usize,
    pub check_declarations: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent_width: crate::swft::codegen::DEFAULT_INDENT_WIDTH,
            check_declarations: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `codegen.indent_width`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<SwftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
