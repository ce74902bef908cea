//! Password strength evaluator - combines the heuristics and labels the result.

use secrecy::{ExposeSecret, SecretString};

use crate::meaning::{score_meaning, Strength};
use crate::sections::{calc_basic16, calc_comp8};
use crate::wordlist::WordList;

/// Score and strength of one analyzed password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisResult {
    pub score: i64,
    pub strength: Option<Strength>,
}

impl AnalysisResult {
    /// Label of the strength, `""` for empty input.
    pub fn meaning(&self) -> &'static str {
        score_meaning(self.score).0
    }

    /// `#RRGGBB` color of the strength, `""` for empty input.
    pub fn color(&self) -> &'static str {
        score_meaning(self.score).1
    }
}

/// Combined score: the better of Basic16 and Comprehensive8, or 0 when
/// there is no text.
pub fn calc_score<W: WordList + ?Sized>(text: Option<&str>, words: &W) -> i64 {
    match text {
        None | Some("") => 0,
        Some(text) => calc_basic16(text).max(calc_comp8(text, words)),
    }
}

/// Scores `password` against `words` and labels the result.
///
/// # Arguments
/// * `password` - The password to analyze, `None` when nothing was entered
/// * `words` - Known weak words; an unloaded list is treated as empty
pub fn analyze<W: WordList + ?Sized>(
    password: Option<&SecretString>,
    words: &W,
) -> AnalysisResult {
    let score = calc_score(password.map(|p| p.expose_secret()), words);
    let strength = Strength::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!("password analyzed: score={} strength={:?}", score, strength);

    AnalysisResult { score, strength }
}

/// Scorer bound to one word list.
#[derive(Debug, Clone)]
pub struct StrengthScorer<W> {
    words: W,
}

impl<W: WordList> StrengthScorer<W> {
    pub fn new(words: W) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &W {
        &self.words
    }

    pub fn calc_comp8(&self, text: &str) -> i64 {
        calc_comp8(text, &self.words)
    }

    pub fn calc_score(&self, text: Option<&str>) -> i64 {
        calc_score(text, &self.words)
    }

    pub fn analyze(&self, password: Option<&SecretString>) -> AnalysisResult {
        analyze(password, &self.words)
    }
}
