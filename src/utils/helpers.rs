//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use unicode_normalization::UnicodeNormalization;

/// Fold a name for case- and diacritics-insensitive comparison
///
/// Decomposes to NFD, lowercases and drops combining marks, so precomposed
/// and decomposed spellings fold alike: `ё` becomes `е`, `й` becomes `и`,
/// `é` becomes `e`.
pub fn fold_name(text: &str) -> String {
    text.trim()
        .nfd()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Compare two names ignoring case and diacritics
pub fn names_match(left: &str, right: &str) -> bool {
    fold_name(left) == fold_name(right)
}

fn is_combining_mark(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF | 0xFE20..=0xFE2F)
}

/// Parse a building code in the inclusive range `1..=max`
///
/// Only plain digits are accepted: no sign, whitespace or leading zero.
pub fn parse_code_in_range(text: &str, max: u8) -> Option<u8> {
    if text.starts_with('0') || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let code: u8 = text.parse().ok()?;
    (1..=max).contains(&code).then_some(code)
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
