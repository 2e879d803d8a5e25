//! Short display labels for alias expressions
//!
//! Rules are tried in declaration order and the first match decides the label:
//! 1. char_mod            `(t! charmod a lctl)`                          -> `A⌃`
//! 2. space_layer_switch  `(... spc ... (layer-switch nav) ...)`         -> `␣→Nav`
//! 3. hold_layer          `(tap-hold 200 200 a (layer-while-held nav))`  -> `A→Nav`
//! 4. chord               `(chord main j)`                               -> `J`
//! 5. layer_switch        `(layer-switch nav)`                           -> `→Nav`
//! 6. virtual_shift       `... press-virtualkey vk-shift ...`            -> `⇧press`
//!
//! Anything else falls back to the uppercased alias name.

use super::glyphs::{capitalize, glyph, glyph_or_upper, ARROW, SHIFT_GLYPH, SPACE_GLYPH};
use crate::parsing::AliasTable;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

type Formatter = fn(&Captures) -> String;

/// A compiled description rule
struct DescriptionRule {
    name: &'static str,
    pattern: Regex,
    label: Formatter,
}

fn rule(name: &'static str, pattern: &str, label: Formatter) -> DescriptionRule {
    DescriptionRule {
        name,
        pattern: Regex::new(pattern).unwrap(),
        label,
    }
}

/// Rules in evaluation order
static RULES: Lazy<Vec<DescriptionRule>> = Lazy::new(|| {
    vec![
        rule(
            "char_mod",
            r"^\(\s*t!\s+charmod\s+(?P<key>[^\s()]+)\s+(?P<mod>[^\s()]+)\s*\)$",
            char_mod,
        ),
        rule(
            "space_layer_switch",
            r"(?:^|[\s(])(?:spc|space)(?:[\s)]|$).*\(\s*layer-switch\s+(?P<layer>[^\s()]+)\s*\)",
            space_layer_switch,
        ),
        rule(
            "hold_layer",
            r"^\(\s*tap-hold[\w-]*\s+\d+\s+\d+\s+(?P<key>[^\s()]+)\s+\(\s*layer-while-held\s+(?P<layer>[^\s()]+)\s*\)",
            hold_layer,
        ),
        rule(
            "chord",
            r"^\(\s*chord\s+[^\s()]+\s+(?P<key>[^\s()]+)\s*\)$",
            chord,
        ),
        rule(
            "layer_switch",
            r"^\(\s*layer-switch\s+(?P<layer>[^\s()]+)\s*\)$",
            layer_switch,
        ),
        rule(
            "virtual_shift",
            r"press-virtualkey\s+vk-shift|on-press-fakekey\s+vk-shift\s+press",
            virtual_shift,
        ),
    ]
});

fn char_mod(caps: &Captures) -> String {
    let modifier = &caps["mod"];
    format!(
        "{}{}",
        glyph_or_upper(&caps["key"]),
        glyph(modifier).unwrap_or(modifier)
    )
}

fn space_layer_switch(caps: &Captures) -> String {
    format!("{}{}{}", SPACE_GLYPH, ARROW, capitalize(&caps["layer"]))
}

fn hold_layer(caps: &Captures) -> String {
    format!(
        "{}{}{}",
        glyph_or_upper(&caps["key"]),
        ARROW,
        capitalize(&caps["layer"])
    )
}

fn chord(caps: &Captures) -> String {
    glyph_or_upper(&caps["key"])
}

fn layer_switch(caps: &Captures) -> String {
    format!("{}{}", ARROW, capitalize(&caps["layer"]))
}

fn virtual_shift(_caps: &Captures) -> String {
    format!("{}press", SHIFT_GLYPH)
}

/// Label for one alias; falls back to the uppercased name
pub fn describe(name: &str, expression: &str) -> String {
    let expression = expression.trim();
    for rule in RULES.iter() {
        if let Some(caps) = rule.pattern.captures(expression) {
            tracing::trace!(alias = name, rule = rule.name, "matched description rule");
            return (rule.label)(&caps);
        }
    }
    name.to_uppercase()
}

/// Alias name to display label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasDescriptions {
    labels: HashMap<String, String>,
}

impl AliasDescriptions {
    pub fn from_table(table: &AliasTable) -> Self {
        let labels = table
            .iter()
            .map(|alias| (alias.name.clone(), describe(&alias.name, &alias.expression)))
            .collect();
        Self { labels }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }

    /// Label for `name`, or its uppercased form when undefined
    pub fn label_for(&self, name: &str) -> String {
        self.get(name)
            .map(str::to_string)
            .unwrap_or_else(|| name.to_uppercase())
    }
}
