//! Alias table built from every `(defalias ...)` block
//!
//! Each block body is flattened first (comments stripped, lines joined with spaces) so an
//! expression may span several lines or share the header line. The flattened body is then
//! read as alternating `name expression` forms, where an expression is a single atom or a
//! single balanced parenthesized group kept verbatim.

use super::blocks::find_all_blocks;
use super::tokens::strip_comment;
use crate::error::ParseError;
use std::collections::HashMap;

pub const ALIAS_HEADER: &str = "(defalias";

/// One `name expression` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub expression: String,
}

/// Alias name to raw expression, in first-definition order. Redefinitions replace the
/// expression in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<Alias>,
    index: HashMap<String, usize>,
}

impl AliasTable {
    /// Collect aliases from every alias block in `text`
    pub fn from_source(text: &str) -> Result<Self, ParseError> {
        let mut table = AliasTable::default();
        for block in find_all_blocks(text, ALIAS_HEADER)? {
            let flat = flatten(block.body());
            for alias in split_pairs(&flat) {
                table.insert(alias);
            }
        }
        Ok(table)
    }

    pub fn insert(&mut self, alias: Alias) {
        match self.index.get(&alias.name) {
            Some(&pos) => self.entries[pos] = alias,
            None => {
                self.index.insert(alias.name.clone(), self.entries.len());
                self.entries.push(alias);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&pos| self.entries[pos].expression.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip comments per line and join the lines with single spaces
fn flatten(body: &str) -> String {
    body.lines()
        .map(|line| strip_comment(line).trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Top-level forms of a flattened body: atoms and balanced groups
fn split_forms(flat: &str) -> Vec<&str> {
    let bytes = flat.as_bytes();
    let mut forms = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_whitespace() || c == b')' {
            i += 1;
            continue;
        }
        let start = i;
        if c == b'(' {
            let mut depth = 0usize;
            while i < bytes.len() {
                match bytes[i] {
                    b'(' => depth += 1,
                    b')' => {
                        depth -= 1;
                        if depth == 0 {
                            i += 1;
                            break;
                        }
                    }
                    b'"' => {
                        i += 1;
                        while i < bytes.len() && bytes[i] != b'"' {
                            i += 1;
                        }
                    }
                    _ => {}
                }
                i += 1;
            }
        } else {
            while i < bytes.len()
                && !bytes[i].is_ascii_whitespace()
                && bytes[i] != b'('
                && bytes[i] != b')'
            {
                i += 1;
            }
        }
        forms.push(&flat[start..i.min(bytes.len())]);
    }
    forms
}

/// Pair forms as `name expression`. A name must be an atom; anything else is skipped.
fn split_pairs(flat: &str) -> Vec<Alias> {
    let mut aliases = Vec::new();
    let mut forms = split_forms(flat).into_iter();

    while let Some(name) = forms.next() {
        if name.starts_with('(') {
            tracing::trace!(form = name, "skipping alias entry without a name");
            continue;
        }
        match forms.next() {
            Some(expression) => aliases.push(Alias {
                name: name.to_string(),
                expression: expression.to_string(),
            }),
            None => tracing::trace!(name, "skipping alias without an expression"),
        }
    }
    aliases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commented_out_alias_block_is_ignored() {
        let table = AliasTable::from_source(";; (defalias old (layer-switch nav))\n(defsrc a)\n")
            .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_single_line_block() {
        let table = AliasTable::from_source("(defalias foo (t! charmod a lctl))").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("foo"), Some("(t! charmod a lctl)"));
    }

    #[test]
    fn test_multi_line_expression_is_flattened() {
        let src = "\
(defalias
  ;; home row mods
  a (tap-hold 200 200
       a lmet) ;; meta
  nav (layer-switch nav)
)";
        let table = AliasTable::from_source(src).unwrap();
        let names: Vec<_> = table.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "nav"]);
        assert_eq!(table.get("a"), Some("(tap-hold 200 200 a lmet)"));
    }

    #[test]
    fn test_multiple_blocks_and_last_definition_wins() {
        let src = "(defalias x 1 y 2)\n(defsrc a)\n(defalias x (layer-switch nav))\n";
        let table = AliasTable::from_source(src).unwrap();
        let names: Vec<_> = table.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(table.get("x"), Some("(layer-switch nav)"));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let table = AliasTable::from_source("(defalias (stray) ok a dangling)").unwrap();
        assert_eq!(table.get("ok"), Some("a"));
        assert_eq!(table.get("dangling"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_no_alias_blocks() {
        let table = AliasTable::from_source("(defsrc a b)").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_split_forms() {
        assert_eq!(
            split_forms("a (b (c d)) e\"f (g \")\" h"),
            vec!["a", "(b (c d))", "e\"f", "(g \")\" h"]
        );
    }
}
