//! End-to-end run: read the kanata file, resolve the cheatsheet, write HTML
//!
//! Paths and options come in through [`KeysheetConfig`]; nothing here reads globals.

use crate::config::KeysheetConfig;
use crate::error::CheatsheetError;
use crate::parsing::Keymap;
use crate::render::{html, Cheatsheet};
use std::fs;
use std::path::{Path, PathBuf};

/// Output flavor for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "html" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

pub struct Pipeline {
    config: KeysheetConfig,
}

impl Pipeline {
    pub fn new(config: KeysheetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeysheetConfig {
        &self.config
    }

    /// Parse `source` and resolve every configured layer
    pub fn build_cheatsheet(&self, source: &str) -> Result<Cheatsheet, CheatsheetError> {
        let keymap = Keymap::parse(source, &self.config.layers, self.config.mismatch)?;
        tracing::debug!(
            rows = keymap.layout.row_sizes().len(),
            keys = keymap.layout.total_keys(),
            layers = keymap.layers.len(),
            aliases = keymap.aliases.len(),
            "parsed keymap"
        );
        Ok(Cheatsheet::build(&keymap))
    }

    /// Render `source` in the requested format
    pub fn render(&self, source: &str, format: OutputFormat) -> Result<String, CheatsheetError> {
        let sheet = self.build_cheatsheet(source)?;
        match format {
            OutputFormat::Html => Ok(html::render_document(&sheet, &self.config.render)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&sheet)?),
        }
    }

    /// Read the configured input file
    pub fn load(&self) -> Result<String, CheatsheetError> {
        fs::read_to_string(&self.config.input)
            .map_err(|e| CheatsheetError::io(&self.config.input, e))
    }

    /// Read the input, render HTML and write it to the configured output.
    /// Returns the path written.
    pub fn run(&self) -> Result<PathBuf, CheatsheetError> {
        let source = self.load()?;
        let html = self.render(&source, OutputFormat::Html)?;
        write_output(&self.config.output, &html)?;
        Ok(self.config.output.clone())
    }
}

/// Write `contents`, creating parent directories and replacing any existing file
fn write_output(path: &Path, contents: &str) -> Result<(), CheatsheetError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CheatsheetError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| CheatsheetError::io(path, e))
}
