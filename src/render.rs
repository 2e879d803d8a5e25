//! Cheatsheet model and HTML output
//!
//! A [`Cheatsheet`] is the fully resolved drawing: every key already carries its label and
//! classes. It is built once from a [`Keymap`] and then serialized, either to HTML by
//! [`html::render_document`] or to JSON for inspection.

pub mod html;
pub mod stylesheet;

use crate::labels::{AliasDescriptions, KeyLabeler, RenderedKey};
use crate::parsing::Keymap;
use serde::{Deserialize, Serialize};

/// Presentation knobs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderOptions {
    /// Document `<title>`
    pub title: String,
    /// Left offset in pixels per row index, modelling a staggered keyboard. Rows past the
    /// end of the list are not offset.
    pub row_indents: Vec<u32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Keyboard layers".to_string(),
            row_indents: vec![0, 18, 26, 40, 0, 0],
        }
    }
}

impl RenderOptions {
    pub fn row_indent(&self, row: usize) -> u32 {
        self.row_indents.get(row).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLayer {
    pub name: String,
    pub rows: Vec<Vec<RenderedKey>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cheatsheet {
    pub layers: Vec<RenderedLayer>,
}

impl Cheatsheet {
    /// Resolve every key of every layer
    pub fn build(keymap: &Keymap<'_>) -> Self {
        let descriptions = AliasDescriptions::from_table(&keymap.aliases);
        let labeler = KeyLabeler::new(&descriptions);

        let layers = keymap
            .layers
            .iter()
            .map(|layer| RenderedLayer {
                name: layer.name.clone(),
                rows: layer
                    .rows
                    .iter()
                    .enumerate()
                    .map(|(r, row)| {
                        row.iter()
                            .enumerate()
                            .map(|(c, token)| labeler.render(token, keymap.layout.key_at(r, c)))
                            .collect()
                    })
                    .collect(),
            })
            .collect();

        Cheatsheet { layers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::MismatchPolicy;

    #[test]
    fn test_build_resolves_labels_and_widths() {
        let source = "\
(defsrc
  tab q
  caps a
)
(defalias nav (layer-switch nav))
(deflayer main
  @nav q
  _ spc
)
";
        let keymap = Keymap::parse(source, &["main".to_string()], MismatchPolicy::Warn).unwrap();
        let sheet = Cheatsheet::build(&keymap);

        let rows = &sheet.layers[0].rows;
        assert_eq!(rows[0][0].label, "→Nav");
        assert_eq!(rows[0][0].classes, vec!["key", "w15"]);
        assert_eq!(rows[0][1].label, "Q");
        assert_eq!(rows[1][0].classes, vec!["key", "w175", "trans"]);
        assert_eq!(rows[1][1].label, "␣");
        assert_eq!(rows[1][1].classes, vec!["key", "wide2"]);
    }

    #[test]
    fn test_row_indent_defaults_to_zero_past_the_list() {
        let options = RenderOptions::default();
        assert_eq!(options.row_indent(1), 18);
        assert_eq!(options.row_indent(42), 0);
    }
}
