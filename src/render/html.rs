//! HTML serialization of a [`Cheatsheet`]
//!
//! Plain string assembly: one `.layer` container per layer, one `.row` per physical row,
//! one `.key` per token. The stylesheet is embedded so the output is a single file.

use super::stylesheet::STYLESHEET;
use super::{Cheatsheet, RenderOptions, RenderedLayer};
use crate::labels::RenderedKey;

/// Complete HTML document
pub fn render_document(sheet: &Cheatsheet, options: &RenderOptions) -> String {
    let mut parts = vec![
        "<!DOCTYPE html>".to_string(),
        format!(
            "<html><head><meta charset='utf-8'><title>{}</title><style>",
            escape(&options.title)
        ),
        STYLESHEET.to_string(),
        "</style></head><body>".to_string(),
        "<div class='wrap'>".to_string(),
    ];
    for layer in &sheet.layers {
        parts.push(render_layer(layer, options));
    }
    parts.push("</div></body></html>".to_string());
    let mut html = parts.join("\n");
    html.push('\n');
    html
}

/// One layer container
pub fn render_layer(layer: &RenderedLayer, options: &RenderOptions) -> String {
    let mut html = vec![format!(
        r#"<div class="layer"><div class="layer-name">{}</div>"#,
        escape(&layer.name)
    )];
    for (index, row) in layer.rows.iter().enumerate() {
        match options.row_indent(index) {
            0 => html.push(r#"<div class="row">"#.to_string()),
            indent => html.push(format!(
                r#"<div class="row" style="margin-left:{}px">"#,
                indent
            )),
        }
        html.extend(row.iter().map(render_key));
        html.push("</div>".to_string());
    }
    html.push("</div>".to_string());
    html.join("\n")
}

fn render_key(key: &RenderedKey) -> String {
    format!(
        r#"<div class="{}" title="{}">{}</div>"#,
        key.classes.join(" "),
        escape(&key.token),
        escape(&key.label)
    )
}

/// Escape text for element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
