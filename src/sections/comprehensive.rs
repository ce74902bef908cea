//! Comprehensive section - the Comprehensive8 heuristic.
//!
//! Scores length, the variety of uppercase letters, digits and symbols, and
//! whether the whole text is a known weak word.

use super::classes::{count, is_digit, is_lower, is_symbol, is_upper, unique_count};
use super::dictionary::dictionary_bonus;
use crate::wordlist::WordList;

const POINTS_PER_CHAR: i64 = 4;
const LOWERCASE_PENALTY: i64 = 17;

/// Points for `n` distinct characters of one class: 17 for the first, 8 for
/// the second, 4 for the third. Further distinct characters add nothing.
pub fn unq_points(n: usize) -> i64 {
    let mut points = 0;
    if n >= 1 {
        points += 17;
    }
    if n >= 2 {
        points += 8;
    }
    if n >= 3 {
        points += 4;
    }
    points
}

/// Lowercase letters must be present but must not be the only thing present.
fn lowercase_penalty(text: &str) -> i64 {
    let lower = count(text, is_lower);
    if lower == 0 || lower == text.chars().count() {
        return LOWERCASE_PENALTY;
    }
    0
}

/// Comprehensive8 score of `text`. No floor is applied, so short dictionary
/// words come out negative.
pub fn calc_comp8<W: WordList + ?Sized>(text: &str, words: &W) -> i64 {
    let mut score = text.chars().count() as i64 * POINTS_PER_CHAR;

    for class in [is_upper, is_digit, is_symbol] {
        score += unq_points(unique_count(text, class));
    }

    score -= lowercase_penalty(text);
    score += dictionary_bonus(text, words);
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::SharedWordList;
    use std::collections::HashSet;

    fn words() -> HashSet<String> {
        ["password", "a", "letmein"]
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    #[test]
    fn test_unq_points_staircase() {
        assert_eq!(unq_points(0), 0);
        assert_eq!(unq_points(1), 17);
        assert_eq!(unq_points(2), 25);
        assert_eq!(unq_points(3), 29);
        assert_eq!(unq_points(4), 29);
        assert_eq!(unq_points(50), 29);
    }

    #[test]
    fn test_comp8_all_lowercase_not_in_list() {
        let empty: HashSet<String> = HashSet::new();
        assert_eq!(calc_comp8("abcdefg", &empty), 28);
        for word in ["x", "zebra", "averylongphrasewithoutanything"] {
            assert_eq!(calc_comp8(word, &empty), word.chars().count() as i64 * 4);
        }
    }

    #[test]
    fn test_comp8_dictionary_word_goes_negative() {
        assert_eq!(calc_comp8("a", &words()), 4 - 17);
        assert_eq!(calc_comp8("password", &words()), 32 - 17);
    }

    #[test]
    fn test_comp8_dictionary_match_is_case_insensitive() {
        // 8*4 + two distinct uppercase (25), no penalty, no novelty bonus.
        assert_eq!(calc_comp8("PassWord", &words()), 32 + 25);
        assert_eq!(calc_comp8("PassWord", &HashSet::<String>::new()), 32 + 25 + 17);
    }

    #[test]
    fn test_comp8_no_lowercase_is_penalised() {
        // 6*4 + uppercase(3 distinct) + digits(3 distinct) - 17 + 17
        assert_eq!(calc_comp8("ABC123", &HashSet::<String>::new()), 24 + 29 + 29);
    }

    #[test]
    fn test_comp8_mixed_fixture() {
        // "Abc123!@": 8*4 + upper(1)=17 + digit(3)=29 + symbol(1, '@' unlisted)=17 + novelty 17
        assert_eq!(calc_comp8("Abc123!@", &words()), 32 + 17 + 29 + 17 + 17);
    }

    #[test]
    fn test_comp8_repeated_symbols_count_once() {
        let empty = HashSet::<String>::new();
        let once = calc_comp8("ab!!!!", &empty);
        let spread = calc_comp8("ab!?.,", &empty);
        assert_eq!(once, 24 + 17 + 17);
        assert_eq!(spread, 24 + 29 + 17);
    }

    #[test]
    fn test_comp8_unclassified_chars_count_for_length_only() {
        // '中' is none of the four classes: 3*4 - 17 (no lowercase) + 17
        assert_eq!(calc_comp8("中文字", &HashSet::<String>::new()), 12);
    }

    #[test]
    fn test_comp8_unloaded_list_grants_bonus() {
        let list = SharedWordList::new();
        assert_eq!(calc_comp8("letmein", &list), 28);
    }
}
