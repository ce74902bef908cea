//! Score to label mapping.

use std::fmt;

/// Human-readable strength of a scored password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Dreadful,
    Bad,
    Poor,
    Fair,
    Good,
    Great,
    Excellent,
    Fantastic,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Dreadful => "Dreadful",
            Strength::Bad => "Bad",
            Strength::Poor => "Poor",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Great => "Great",
            Strength::Excellent => "Excellent",
            Strength::Fantastic => "Fantastic",
        }
    }

    /// Display color as `#RRGGBB`, red through green.
    pub fn color(self) -> &'static str {
        match self {
            Strength::Dreadful => "#FF0000",
            Strength::Bad => "#FF6600",
            Strength::Poor => "#FF9900",
            Strength::Fair => "#FFCC00",
            Strength::Good => "#FFFF00",
            Strength::Great => "#CCFF00",
            Strength::Excellent => "#99FF00",
            Strength::Fantastic => "#00FF00",
        }
    }

    /// Looks `score` up in [`SCORE_BANDS`]. Scores of 0 or below have no
    /// strength.
    pub fn from_score(score: i64) -> Option<Strength> {
        SCORE_BANDS
            .iter()
            .find(|band| band.contains(score))
            .map(|band| band.strength)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An integer range `(lower_exclusive, upper_inclusive]` mapped to a strength.
/// `upper_inclusive: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub lower_exclusive: i64,
    pub upper_inclusive: Option<i64>,
    pub strength: Strength,
}

impl ScoreBand {
    const fn new(lower_exclusive: i64, upper_inclusive: Option<i64>, strength: Strength) -> Self {
        Self {
            lower_exclusive,
            upper_inclusive,
            strength,
        }
    }

    pub fn contains(&self, score: i64) -> bool {
        score > self.lower_exclusive && self.upper_inclusive.is_none_or(|upper| score <= upper)
    }
}

/// Contiguous bands covering every positive score, in ascending order.
pub const SCORE_BANDS: [ScoreBand; 8] = [
    ScoreBand::new(0, Some(16), Strength::Dreadful),
    ScoreBand::new(16, Some(33), Strength::Bad),
    ScoreBand::new(33, Some(50), Strength::Poor),
    ScoreBand::new(50, Some(67), Strength::Fair),
    ScoreBand::new(67, Some(84), Strength::Good),
    ScoreBand::new(84, Some(99), Strength::Great),
    ScoreBand::new(99, Some(115), Strength::Excellent),
    ScoreBand::new(115, None, Strength::Fantastic),
];

/// Maps `score` to `(label, color)`; `("", "")` when no band applies.
pub fn score_meaning(score: i64) -> (&'static str, &'static str) {
    match Strength::from_score(score) {
        Some(strength) => (strength.label(), strength.color()),
        None => ("", ""),
    }
}
