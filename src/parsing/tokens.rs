//! Whitespace tokenization of block lines

use super::blocks::COMMENT_MARKER;

/// Drop everything from the first `;;` onward
pub fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT_MARKER)
        .map_or(line, |(code, _comment)| code)
}

/// Flat token sequence across all lines, comments removed.
///
/// Symbols such as `]` or `'` are ordinary tokens; nothing is normalized.
pub fn tokenize<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .flat_map(|line| strip_comment(line).split_whitespace())
        .collect()
}

/// Tokens grouped by source line, skipping lines that are empty after comment removal.
pub fn tokenize_lines<'a, I>(lines: I) -> Vec<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| strip_comment(line).split_whitespace().collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect()
}
