//! Extraction of the physical layout, layers and aliases from a kanata file
//!
//! The parse is deliberately shallow: only the structure needed to draw a cheatsheet is read.
//!
//!     blocks   - balanced-paren block location
//!     tokens   - comment stripping and whitespace tokenization
//!     rows     - physical geometry and row chunking
//!     aliases  - `(defalias ...)` name/expression table

pub mod aliases;
pub mod blocks;
pub mod rows;
pub mod tokens;

pub use aliases::{Alias, AliasTable};
pub use blocks::{find_all_blocks, find_block, Block};
pub use rows::{chunk_rows, MismatchPolicy, PhysicalLayout, RowFit, TRANSPARENT};
pub use tokens::{strip_comment, tokenize};

use crate::error::ParseError;

pub const LAYOUT_HEADER: &str = "(defsrc";

/// Header of a named layer block
pub fn layer_header(name: &str) -> String {
    format!("(deflayer {}", name)
}

/// A logical layer chunked to the physical rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer<'a> {
    pub name: String,
    pub rows: Vec<Vec<&'a str>>,
}

/// Everything read from one kanata file
#[derive(Debug, Clone)]
pub struct Keymap<'a> {
    pub layout: PhysicalLayout<'a>,
    /// Layers in the requested order; absent layers are omitted
    pub layers: Vec<Layer<'a>>,
    pub aliases: AliasTable,
}

impl<'a> Keymap<'a> {
    /// Read the layout, the named layers and all aliases.
    ///
    /// A missing or unclosed `(defsrc` is fatal, as is any unclosed block. Missing layers are
    /// skipped.
    pub fn parse(
        source: &'a str,
        layer_names: &[String],
        policy: MismatchPolicy,
    ) -> Result<Self, ParseError> {
        let layout_block = find_block(source, LAYOUT_HEADER, 0)?;
        let layout = PhysicalLayout::from_lines(layout_block.content_lines());

        let mut layers = Vec::with_capacity(layer_names.len());
        for name in layer_names {
            let block = match find_block(source, &layer_header(name), 0) {
                Ok(block) => block,
                Err(ParseError::BlockNotFound(header)) => {
                    tracing::debug!(%header, "layer not present, skipping");
                    continue;
                }
                Err(err) => return Err(err),
            };
            let tokens = tokenize(block.content_lines());
            layers.push(Layer {
                name: name.clone(),
                rows: fit_layer(name, tokens, &layout, policy)?,
            });
        }

        let aliases = AliasTable::from_source(source)?;

        Ok(Keymap {
            layout,
            layers,
            aliases,
        })
    }
}

/// Chunk a layer's tokens, applying the mismatch policy
fn fit_layer<'a>(
    name: &str,
    mut tokens: Vec<&'a str>,
    layout: &PhysicalLayout<'_>,
    policy: MismatchPolicy,
) -> Result<Vec<Vec<&'a str>>, ParseError> {
    let expected = layout.total_keys();
    let actual = tokens.len();

    match (RowFit::of(actual, expected), policy) {
        (RowFit::Exact, _) => {}
        (_, MismatchPolicy::Fail) => {
            return Err(ParseError::RowSizeMismatch {
                layer: name.to_string(),
                expected,
                actual,
            });
        }
        (RowFit::Short { missing }, MismatchPolicy::Pad) => {
            tracing::warn!(
                layer = name,
                expected,
                actual,
                "layer is short by {} keys, padding with transparent keys",
                missing
            );
            rows::pad_tokens(&mut tokens, expected);
        }
        (RowFit::Short { missing }, MismatchPolicy::Warn) => {
            tracing::warn!(
                layer = name,
                expected,
                actual,
                "layer is short by {} keys, trailing rows are truncated",
                missing
            );
        }
        (RowFit::Long { excess }, _) => {
            tracing::warn!(
                layer = name,
                expected,
                actual,
                "layer has {} extra keys, they are dropped",
                excess
            );
        }
    }

    Ok(chunk_rows(&tokens, &layout.row_sizes()))
}
