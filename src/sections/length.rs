//! Length section - the Basic16 heuristic.

const SHORT_PREFIX: i64 = 7;
const SHORT_POINTS: i64 = 4;
const LONG_POINTS: i64 = 8;

/// Scores `text` by length alone: 4 points for each of the first 7
/// characters, 8 for every character after that. 16 characters reach 100.
pub fn calc_basic16(text: &str) -> i64 {
    let len = text.chars().count() as i64;
    len.min(SHORT_PREFIX) * SHORT_POINTS + (len - SHORT_PREFIX).max(0) * LONG_POINTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic16_short() {
        assert_eq!(calc_basic16(""), 0);
        assert_eq!(calc_basic16("a"), 4);
        assert_eq!(calc_basic16("1234567"), 28);
    }

    #[test]
    fn test_basic16_past_seventh_char() {
        assert_eq!(calc_basic16("12345678"), 36);
        assert_eq!(calc_basic16("abcdefghijklmnop"), 100);
    }

    #[test]
    fn test_basic16_counts_chars_not_bytes() {
        assert_eq!(calc_basic16("ééé"), 12);
    }

    #[test]
    fn test_basic16_monotonic() {
        let mut prev = 0;
        for n in 0..40 {
            let score = calc_basic16(&"x".repeat(n));
            assert!(score >= prev);
            prev = score;
        }
    }

    #[test]
    fn test_basic16_ignores_character_classes() {
        assert_eq!(calc_basic16("aaaaaaaa"), calc_basic16("A1!zQ9#~"));
    }
}
