//! Dictionary section - rewards text absent from the weak word list.

use crate::wordlist::WordList;

pub const NOVELTY_BONUS: i64 = 17;

/// Returns the novelty bonus for `text`.
///
/// The whole text is lowercased and looked up as a single word. An unloaded
/// list finds nothing, so the bonus is granted.
pub fn dictionary_bonus<W: WordList + ?Sized>(text: &str, words: &W) -> i64 {
    if words.contains(&text.to_lowercase()) {
        return 0;
    }
    NOVELTY_BONUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::SharedWordList;
    use std::collections::HashSet;

    fn words() -> HashSet<String> {
        ["password", "123456", "qwerty"]
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    #[test]
    fn test_dictionary_bonus_common_word() {
        assert_eq!(dictionary_bonus("password", &words()), 0);
        assert_eq!(dictionary_bonus("PassWord", &words()), 0);
    }

    #[test]
    fn test_dictionary_bonus_whole_text_only() {
        assert_eq!(dictionary_bonus("password1", &words()), NOVELTY_BONUS);
        assert_eq!(dictionary_bonus("CorrectHorseBatteryStaple!123", &words()), NOVELTY_BONUS);
    }

    #[test]
    fn test_dictionary_bonus_unloaded_list() {
        let list = SharedWordList::new();
        assert_eq!(dictionary_bonus("password", &list), NOVELTY_BONUS);
    }
}
