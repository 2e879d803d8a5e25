//! Row geometry: the physical layout and chunking of layer tokens into rows

use super::tokens::tokenize_lines;
use serde::Deserialize;

/// Placeholder token meaning "inherit from the layer below"
pub const TRANSPARENT: &str = "_";

/// Row/column geometry read from `(defsrc ...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalLayout<'a> {
    rows: Vec<Vec<&'a str>>,
}

impl<'a> PhysicalLayout<'a> {
    /// One row per non-empty line
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            rows: tokenize_lines(lines),
        }
    }

    /// Token count of each row
    pub fn row_sizes(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    pub fn total_keys(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn rows(&self) -> &[Vec<&'a str>] {
        &self.rows
    }

    /// Physical key under the given logical position
    pub fn key_at(&self, row: usize, col: usize) -> Option<&'a str> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

/// Partition `tokens` into consecutive rows of the given sizes.
///
/// Short input yields truncated or empty trailing rows; excess tokens are dropped.
pub fn chunk_rows<'a>(tokens: &[&'a str], row_sizes: &[usize]) -> Vec<Vec<&'a str>> {
    let mut rows = Vec::with_capacity(row_sizes.len());
    let mut idx = 0;
    for &size in row_sizes {
        let start = idx.min(tokens.len());
        let end = (idx + size).min(tokens.len());
        rows.push(tokens[start..end].to_vec());
        idx += size;
    }
    rows
}

/// How a layer's token count compares with the physical layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFit {
    Exact,
    /// Fewer tokens than physical keys
    Short { missing: usize },
    /// More tokens than physical keys
    Long { excess: usize },
}

impl RowFit {
    pub fn of(actual: usize, expected: usize) -> Self {
        if actual < expected {
            RowFit::Short {
                missing: expected - actual,
            }
        } else if actual > expected {
            RowFit::Long {
                excess: actual - expected,
            }
        } else {
            RowFit::Exact
        }
    }
}

/// What to do when a layer does not have exactly one token per physical key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchPolicy {
    /// Truncate or drop, and log a warning
    #[default]
    Warn,
    /// Fill missing keys with the transparent placeholder, and log a warning
    Pad,
    /// Abort the run
    Fail,
}

/// Pad `tokens` with transparent placeholders up to `expected`
pub fn pad_tokens<'a>(tokens: &mut Vec<&'a str>, expected: usize) {
    if tokens.len() < expected {
        tokens.resize(expected, TRANSPARENT);
    }
}
