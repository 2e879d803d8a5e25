//! Balanced-parenthesis block extraction
//!
//! kanata files are a flat sequence of top-level forms: `(defsrc ...)`, `(deflayer main ...)`,
//! `(defalias ...)` and so on. We never build a syntax tree for them. A block is located by
//! its header text and closed by tracking nesting depth from the header's opening paren.
//!
//! `;;` comments and double-quoted strings are skipped while scanning so parentheses inside
//! them do not affect the depth count.

use crate::error::ParseError;

/// Marker that starts a line comment
pub const COMMENT_MARKER: &str = ";;";

/// A block located in the source text. All slices borrow from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    source: &'a str,
    /// The header as it appears in the source, e.g. `(deflayer main`
    pub header: &'a str,
    /// Byte offset of the header's opening paren
    pub start: usize,
    /// Byte offset one past the closing paren
    pub end: usize,
}

impl<'a> Block<'a> {
    /// Full block text, header through closing paren
    pub fn text(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    /// Everything after the header and before the closing paren.
    /// Empty when the header itself closes the block.
    pub fn body(&self) -> &'a str {
        let close = self.end - 1;
        &self.source[(self.start + self.header.len()).min(close)..close]
    }

    /// Lines strictly between the header line and the closing-paren line.
    ///
    /// A block written on one or two lines has no interior lines.
    pub fn interior_lines(&self) -> Vec<&'a str> {
        let lines: Vec<&'a str> = self.text().lines().collect();
        if lines.len() <= 2 {
            return Vec::new();
        }
        lines[1..lines.len() - 1].to_vec()
    }

    /// Lines of the body, including anything written after the header or before the
    /// closing paren on their own lines.
    pub fn content_lines(&self) -> Vec<&'a str> {
        self.body().lines().collect()
    }
}

/// Find the first block opened by `header` at or after byte offset `from`.
pub fn find_block<'a>(text: &'a str, header: &str, from: usize) -> Result<Block<'a>, ParseError> {
    let start = find_header(text, header, from)
        .ok_or_else(|| ParseError::BlockNotFound(header.to_string()))?;
    let end = scan_to_close(text, start).ok_or_else(|| ParseError::UnclosedBlock {
        header: header.to_string(),
        start,
    })?;

    Ok(Block {
        source: text,
        header: &text[start..start + header.len()],
        start,
        end,
    })
}

/// Every block opened by `header`, in source order.
///
/// An unclosed block aborts the enumeration; running out of matches ends it.
pub fn find_all_blocks<'a>(text: &'a str, header: &str) -> Result<Vec<Block<'a>>, ParseError> {
    let mut blocks = Vec::new();
    let mut from = 0;
    loop {
        match find_block(text, header, from) {
            Ok(block) => {
                from = block.end;
                blocks.push(block);
            }
            Err(ParseError::BlockNotFound(_)) => return Ok(blocks),
            Err(err) => return Err(err),
        }
    }
}

/// Locate `header` where it is followed by whitespace, a paren or end of text, and is not
/// inside a `;;` comment.
fn find_header(text: &str, header: &str, from: usize) -> Option<usize> {
    let haystack = text.get(from..)?;
    haystack.match_indices(header).find_map(|(offset, _)| {
        let pos = from + offset;
        if is_commented(text, pos) {
            return None;
        }
        let after = haystack[offset + header.len()..].chars().next();
        match after {
            None => Some(pos),
            Some(c) if c.is_whitespace() || c == '(' || c == ')' => Some(pos),
            Some(_) => None,
        }
    })
}

/// Whether a `;;` precedes `pos` on its line
fn is_commented(text: &str, pos: usize) -> bool {
    let line_start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    text[line_start..pos].contains(COMMENT_MARKER)
}

/// Scan from `start` until nesting returns to zero; returns the offset past the closing paren.
fn scan_to_close(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth: i64 = 0;
    let mut opened = false;
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b';' if bytes.get(i + 1) == Some(&b';') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
                continue;
            }
            b'"' => {
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    i += 1;
                }
            }
            b'(' => {
                depth += 1;
                opened = true;
            }
            b')' => {
                depth -= 1;
                if opened && depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
