//! Configuration loading
//!
//! `defaults/keysheet.default.toml` is embedded into the binary so the documented defaults
//! and runtime behavior stay in sync. Callers layer user files and single-key overrides on
//! top of those defaults via [`Loader`] before deserializing into [`KeysheetConfig`].

use crate::parsing::MismatchPolicy;
use crate::render::RenderOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/keysheet.default.toml");

/// Name of the optional per-directory configuration file
pub const LOCAL_CONFIG_FILE: &str = "keysheet.toml";

/// Everything a cheatsheet run needs
#[derive(Debug, Clone, Deserialize)]
pub struct KeysheetConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub layers: Vec<String>,
    pub mismatch: MismatchPolicy,
    pub render: RenderOptions,
}

/// Values given on the command line. Each one present replaces the configured key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Empty keeps the configured layer list
    pub layers: Vec<String>,
}

/// Layers `keysheet.toml`, an explicit config file and CLI flags over the built-in defaults.
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

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply command-line flags on top of every file source.
    pub fn with_cli_overrides(mut self, overrides: &CliOverrides) -> Result<Self, ConfigError> {
        if let Some(input) = &overrides.input {
            self = self.set_override("input", input.to_string_lossy().into_owned())?;
        }
        if let Some(output) = &overrides.output {
            self = self.set_override("output", output.to_string_lossy().into_owned())?;
        }
        if !overrides.layers.is_empty() {
            self = self.set_override("layers", overrides.layers.clone())?;
        }
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<KeysheetConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<KeysheetConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.input, PathBuf::from("kenkyo.kbd"));
        assert_eq!(config.output, PathBuf::from("docs/kenkyo_layers.html"));
        assert_eq!(config.layers, vec!["main", "extend", "fumbol"]);
        assert_eq!(config.mismatch, MismatchPolicy::Warn);
        assert_eq!(config.render, RenderOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("mismatch", "pad")
            .unwrap()
            .set_override("layers", vec!["nav".to_string()])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.mismatch, MismatchPolicy::Pad);
        assert_eq!(config.layers, vec!["nav"]);
    }

    #[test]
    fn cli_overrides_win_over_files() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "input = \"from_file.kbd\"\noutput = \"file.html\"\nlayers = [\"main\"]"
        )
        .unwrap();

        let overrides = CliOverrides {
            output: Some(PathBuf::from("cli/out.html")),
            layers: vec!["nav".to_string(), "main".to_string()],
            ..CliOverrides::default()
        };
        let config = Loader::new()
            .with_file(file.path())
            .with_cli_overrides(&overrides)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.input, PathBuf::from("from_file.kbd"));
        assert_eq!(config.output, PathBuf::from("cli/out.html"));
        assert_eq!(config.layers, vec!["nav", "main"]);
    }

    #[test]
    fn empty_cli_overrides_keep_defaults() {
        let config = Loader::new()
            .with_cli_overrides(&CliOverrides::default())
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.input, PathBuf::from("kenkyo.kbd"));
        assert_eq!(config.layers, vec!["main", "extend", "fumbol"]);
    }

    #[test]
    fn layers_files_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "output = \"out/sheet.html\"\n[render]\ntitle = \"Mine\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.output, PathBuf::from("out/sheet.html"));
        assert_eq!(config.render.title, "Mine");
        assert_eq!(config.render.row_indents, vec![0, 18, 26, 40, 0, 0]);
        assert_eq!(config.input, PathBuf::from("kenkyo.kbd"));
    }

    #[test]
    fn optional_file_may_be_absent() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/keysheet.toml")
            .build()
            .unwrap();
        assert_eq!(config.mismatch, MismatchPolicy::Warn);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new()
            .with_file("/nonexistent/keysheet.toml")
            .build()
            .is_err());
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(Loader::new()
            .set_override("mismatch", "ignore")
            .unwrap()
            .build()
            .is_err());
    }
}
