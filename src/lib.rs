//! Password strength meter library
//!
//! Scores a password with two independent heuristics and keeps the better
//! one:
//!
//! - **Basic16**: length only, 16 characters score 100.
//! - **Comprehensive8**: length, variety of uppercase letters, digits and
//!   symbols, and a check of the whole text against a list of known weak
//!   words.
//!
//! The score is then mapped to a label and a `#RRGGBB` color.
//!
//! # Features
//!
//! - `async` (default): Enables async word list loading with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: word list document (default: `./assets/wordlist.json`)
//! - `PWD_WORDLIST_CACHE`: cache file for the loaded word list
//! - `PWD_WORDLIST_MAX_AGE_SECS`: how long the cache stays fresh
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{SharedWordList, StrengthScorer, WordListLoader};
//! use secrecy::SecretString;
//!
//! let words = SharedWordList::new();
//!
//! // Scoring works before the list is loaded; loading only affects the
//! // dictionary bonus.
//! if let Err(e) = WordListLoader::from_env().and_then(|l| l.load_into(&words)) {
//!     eprintln!("word list unavailable: {e}");
//! }
//!
//! let scorer = StrengthScorer::new(words);
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = scorer.analyze(Some(&password));
//!
//! println!("Score: {}", result.score);
//! println!("Strength: {} ({})", result.meaning(), result.color());
//! ```

// Internal modules
mod evaluator;
mod loader;
mod meaning;
mod sections;
mod wordlist;

// Public API
pub use evaluator::{analyze, calc_score, AnalysisResult, StrengthScorer};
pub use loader::{
    LoadOrigin, LoadOutcome, WordListConfig, WordListLoader, ENV_WORDLIST_CACHE,
    ENV_WORDLIST_MAX_AGE, ENV_WORDLIST_PATH,
};
pub use meaning::{score_meaning, ScoreBand, Strength, SCORE_BANDS};
pub use sections::classes::{is_digit, is_lower, is_symbol, is_upper, SYMBOLS};
pub use sections::{calc_basic16, calc_comp8, unq_points};
pub use wordlist::{parse_wordlist_json, SharedWordList, WordList, WordListError};
