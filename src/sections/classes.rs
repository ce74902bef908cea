//! Character classes - per-character predicates used by the scorer.

use std::collections::HashSet;

/// Characters counted as symbols. Anything else that is not a letter or an
/// ASCII digit belongs to no class.
pub const SYMBOLS: &[char] = &[
    '!', '=', '?', '"', '\'', '#', '%', '$', '§', '/', '\\', '(', ')', '[', ']', '{', '}', '+',
    '-', '.', ',', ';', ':', '_', '<', '>', '*', '`', '´', '^', '~', '|',
];

/// Any character with the Unicode `Uppercase` property. Covers uppercase
/// letters of every script, plus a few uppercase non-letters such as Roman
/// numerals (`Ⅻ`) and circled letters (`Ⓐ`).
pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// Any character with the Unicode `Lowercase` property, letters of every
/// script included.
pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

/// ASCII decimal digit only.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(&c)
}

/// Number of distinct characters of `text` matching `class`.
///
/// Repeats collapse by exact character value, so `"!!!"` counts once while
/// `"!?"` counts twice.
pub fn unique_count(text: &str, class: fn(char) -> bool) -> usize {
    text.chars().filter(|&c| class(c)).collect::<HashSet<char>>().len()
}

/// Total (non-unique) number of characters of `text` matching `class`.
pub fn count(text: &str, class: fn(char) -> bool) -> usize {
    text.chars().filter(|&c| class(c)).count()
}
