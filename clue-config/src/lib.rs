//! Shared configuration loader for the Clue toolchain.
//!
//! `defaults/clue.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ClueConfig`].

use clue_parser::clue::formats::{Format, FormatError, RenderOptions};
use clue_parser::ParserConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/clue.default.toml");

/// Top-level configuration consumed by Clue applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ClueConfig {
    pub parser: ParserSection,
    pub output: OutputSection,
}

impl ClueConfig {
    /// Renderer settings derived from both sections
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            parser: self.parser.clone().into(),
            treeviz_label_width: self.output.treeviz_label_width,
        }
    }
}

/// Mirrors [`ParserConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserSection {
    pub max_nesting_depth: usize,
    pub trace: bool,
}

impl From<ParserSection> for ParserConfig {
    fn from(section: ParserSection) -> Self {
        ParserConfig::default()
            .with_max_nesting_depth(section.max_nesting_depth)
            .with_trace(section.trace)
    }
}

/// Output selection for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputSection {
    pub format: String,
    pub treeviz_label_width: usize,
}

impl OutputSection {
    pub fn format(&self) -> Result<Format, FormatError> {
        self.format.parse()
    }
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<ClueConfig, ConfigError> {
        let config: ClueConfig = self.builder.build()?.try_deserialize()?;
        validate(&config)?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(config: &ClueConfig) -> Result<(), ConfigError> {
    if config.parser.max_nesting_depth == 0 {
        return Err(ConfigError::Message(
            "parser.max_nesting_depth must be at least 1".to_string(),
        ));
    }
    if config.parser.max_nesting_depth > ParserConfig::MAX_NESTING_DEPTH_LIMIT {
        return Err(ConfigError::Message(format!(
            "parser.max_nesting_depth must be at most {}",
            ParserConfig::MAX_NESTING_DEPTH_LIMIT
        )));
    }
    if let Err(err) = config.output.format() {
        return Err(ConfigError::Message(format!("output.format: {}", err)));
    }
    Ok(())
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ClueConfig, ConfigError> {
    Loader::new().build()
}
