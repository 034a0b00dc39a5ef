//! Whitespace classification for expressions
//!
//! Blank detection and token trimming share one whitespace set: Unicode
//! `White_Space` plus the ASCII information separators U+001C..=U+001F.

/// True if `ch` counts as whitespace in an expression
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Strip leading and trailing whitespace
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// True for the empty string and whitespace-only text
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}
