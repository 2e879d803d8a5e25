//! Token to display label and style classes

use super::describe::AliasDescriptions;
use super::glyphs::{self, WIDE_CLASS};
use crate::parsing::TRANSPARENT;
use serde::Serialize;

pub const KEY_CLASS: &str = "key";
pub const TRANS_CLASS: &str = "trans";

/// One key as it will be drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedKey {
    /// Raw token from the layer block
    pub token: String,
    pub label: String,
    pub classes: Vec<&'static str>,
}

/// Maps layer tokens to labels, resolving aliases through `descriptions`
#[derive(Debug, Clone, Copy)]
pub struct KeyLabeler<'d> {
    descriptions: &'d AliasDescriptions,
}

impl<'d> KeyLabeler<'d> {
    pub fn new(descriptions: &'d AliasDescriptions) -> Self {
        Self { descriptions }
    }

    /// Display label for a token. The transparent placeholder has an empty label.
    pub fn label(&self, token: &str) -> String {
        if token == TRANSPARENT {
            return String::new();
        }
        if let Some(alias) = token.strip_prefix('@') {
            return self.descriptions.label_for(alias);
        }
        if let Some(g) = glyphs::glyph(token) {
            return g.to_string();
        }
        if glyphs::is_function_key(token) {
            return token.to_uppercase();
        }
        glyphs::upper_if_letter(token)
    }

    /// Label and classes for `token`, sized by the physical key at the same position
    pub fn render(&self, token: &str, physical: Option<&str>) -> RenderedKey {
        let mut classes = vec![KEY_CLASS];
        if let Some(width) = width_class(token, physical) {
            classes.push(width);
        }
        if token == TRANSPARENT {
            classes.push(TRANS_CLASS);
        }
        RenderedKey {
            token: token.to_string(),
            label: self.label(token),
            classes,
        }
    }
}

/// Width comes from the physical key; a logical space is always wide.
pub fn width_class(token: &str, physical: Option<&str>) -> Option<&'static str> {
    if glyphs::is_space(token) {
        return Some(WIDE_CLASS);
    }
    physical.and_then(glyphs::width_class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::AliasTable;

    fn descriptions(source: &str) -> AliasDescriptions {
        AliasDescriptions::from_table(&AliasTable::from_source(source).unwrap())
    }

    #[test]
    fn test_plain_tokens() {
        let d = AliasDescriptions::default();
        let labeler = KeyLabeler::new(&d);
        assert_eq!(labeler.label("bspc"), "⌫");
        assert_eq!(labeler.label("f11"), "F11");
        assert_eq!(labeler.label("q"), "Q");
        assert_eq!(labeler.label("1"), "1");
        assert_eq!(labeler.label("prnt"), "prnt");
    }

    #[test]
    fn test_alias_tokens() {
        let d = descriptions("(defalias nav (layer-switch nav) cpy C-c)");
        let labeler = KeyLabeler::new(&d);
        assert_eq!(labeler.label("@nav"), "→Nav");
        assert_eq!(labeler.label("@cpy"), "CPY");
        assert_eq!(labeler.label("@undefined"), "UNDEFINED");
    }

    #[test]
    fn test_transparent_is_empty_and_faded_regardless_of_aliases() {
        let d = descriptions("(defalias _ (layer-switch nav))");
        let key = KeyLabeler::new(&d).render("_", Some("tab"));
        assert_eq!(key.label, "");
        assert!(key.classes.contains(&TRANS_CLASS));
    }

    #[test]
    fn test_width_follows_physical_key() {
        let d = AliasDescriptions::default();
        let key = KeyLabeler::new(&d).render("@esc", Some("caps"));
        assert_eq!(key.classes, vec!["key", "w175"]);
        let key = KeyLabeler::new(&d).render("a", Some("a"));
        assert_eq!(key.classes, vec!["key"]);
    }

    #[test]
    fn test_logical_space_overrides_physical_width() {
        assert_eq!(width_class("@spc", Some("lalt")), Some(WIDE_CLASS));
        assert_eq!(width_class("space", None), Some(WIDE_CLASS));
        assert_eq!(width_class("a", Some("spc")), Some(WIDE_CLASS));
        assert_eq!(width_class("a", None), None);
    }
}
