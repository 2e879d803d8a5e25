//! Static key-name tables

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

pub const ARROW: &str = "→";
pub const SPACE_GLYPH: &str = "␣";
pub const SHIFT_GLYPH: &str = "⇧";

/// Width class forced on any logical space key
pub const WIDE_CLASS: &str = "wide2";

/// kanata key names that read better as a glyph or short word
static KEY_GLYPHS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("esc", "⎋"),
        ("bspc", "⌫"),
        ("del", "⌦"),
        ("ret", "⏎"),
        ("enter", "⏎"),
        ("tab", "⇥"),
        ("caps", "⇪"),
        ("spc", SPACE_GLYPH),
        ("space", SPACE_GLYPH),
        ("pp", "⏯"),
        ("vold", "🔉"),
        ("volu", "🔊"),
        ("mute", "🔇"),
        ("lmet", "⌘"),
        ("rmet", "⌘"),
        ("lalt", "⌥"),
        ("ralt", "⌥"),
        ("lsft", SHIFT_GLYPH),
        ("rsft", SHIFT_GLYPH),
        ("lctl", "⌃"),
        ("rctl", "⌃"),
        ("rght", "→"),
        ("left", "←"),
        ("up", "↑"),
        ("down", "↓"),
        ("pgup", "Pg↑"),
        ("pgdn", "Pg↓"),
        ("home", "Home"),
        ("end", "End"),
        ("ins", "Ins"),
        ("lsgt", "<>"),
        ("bsl", "\\"),
        ("slash", "/"),
        ("dash", "-"),
        ("min", "-"),
        ("eql", "="),
        ("btick", "`"),
        ("grv", "`"),
        ("lbrk", "["),
        ("rbrk", "]"),
        ("scln", ";"),
        ("apos", "'"),
        ("comma", ","),
        ("comm", ","),
        ("dot", "."),
    ])
});

/// Physical keys that are drawn wider than a standard key
static WIDTH_CLASSES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("tab", "w15"),
        ("bsl", "w15"),
        ("caps", "w175"),
        ("ret", "w225"),
        ("bspc", "w2"),
        ("lsft", "w225"),
        ("rsft", "w275"),
        ("lctl", "w125"),
        ("lmet", "w125"),
        ("lalt", "w125"),
        ("ralt", "w125"),
        ("rmet", "w125"),
        ("rctl", "w125"),
        ("spc", WIDE_CLASS),
    ])
});

static FUNCTION_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^f\d{1,2}$").unwrap());

pub fn glyph(name: &str) -> Option<&'static str> {
    KEY_GLYPHS.get(name).copied()
}

pub fn width_class(physical: &str) -> Option<&'static str> {
    WIDTH_CLASSES.get(physical).copied()
}

pub fn is_function_key(name: &str) -> bool {
    FUNCTION_KEY.is_match(name)
}

/// `spc`/`space`, with or without the alias marker
pub fn is_space(token: &str) -> bool {
    matches!(token.strip_prefix('@').unwrap_or(token), "spc" | "space")
}

/// Glyph if known, uppercase for a single letter, otherwise the name itself
pub fn glyph_or_upper(name: &str) -> String {
    if let Some(g) = glyph(name) {
        return g.to_string();
    }
    upper_if_letter(name)
}

pub(crate) fn upper_if_letter(name: &str) -> String {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => c.to_uppercase().collect(),
        _ => name.to_string(),
    }
}

/// First character uppercase, the rest lowercase
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
