//! Error types for block parsing and cheatsheet generation

use std::fmt;
use std::path::PathBuf;

/// Structural failures while reading blocks out of a kanata file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The header (e.g. `(defsrc`) does not occur in the text
    BlockNotFound(String),
    /// End of text was reached before the block's parentheses balanced
    UnclosedBlock { header: String, start: usize },
    /// A layer's token count differs from the physical layout and the policy is `fail`
    RowSizeMismatch {
        layer: String,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BlockNotFound(header) => write!(f, "Block not found: {}", header),
            ParseError::UnclosedBlock { header, start } => {
                write!(f, "Unclosed block for {} (opened at byte {})", header, start)
            }
            ParseError::RowSizeMismatch {
                layer,
                expected,
                actual,
            } => write!(
                f,
                "Layer '{}' has {} keys but the physical layout has {}",
                layer, actual, expected
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Anything that can abort a cheatsheet run
#[derive(Debug)]
pub enum CheatsheetError {
    Parse(ParseError),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Config(config::ConfigError),
    Serialize(serde_json::Error),
}

impl CheatsheetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheatsheetError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for CheatsheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheatsheetError::Parse(err) => write!(f, "Parsing failed: {}", err),
            CheatsheetError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            CheatsheetError::Config(err) => write!(f, "Configuration error: {}", err),
            CheatsheetError::Serialize(err) => write!(f, "Serialization failed: {}", err),
        }
    }
}

impl std::error::Error for CheatsheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheatsheetError::Parse(err) => Some(err),
            CheatsheetError::Io { source, .. } => Some(source),
            CheatsheetError::Config(err) => Some(err),
            CheatsheetError::Serialize(err) => Some(err),
        }
    }
}

impl From<ParseError> for CheatsheetError {
    fn from(err: ParseError) -> Self {
        CheatsheetError::Parse(err)
    }
}

impl From<config::ConfigError> for CheatsheetError {
    fn from(err: config::ConfigError) -> Self {
        CheatsheetError::Config(err)
    }
}

impl From<serde_json::Error> for CheatsheetError {
    fn from(err: serde_json::Error) -> Self {
        CheatsheetError::Serialize(err)
    }
}
