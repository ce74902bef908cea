//! Word list management module
//!
//! Holds the set of known weak words the scorer checks against, and parses
//! the JSON document the list is distributed in.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse word list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Word list is empty")]
    Empty,
    #[error("Invalid word list configuration: {0}")]
    InvalidConfig(String),
    #[error("Word list loading cancelled")]
    Cancelled,
    #[error("Word list loading task failed: {0}")]
    Join(String),
}

/// Lookup of known weak words.
///
/// Callers lowercase the candidate before asking; implementations compare
/// exactly.
pub trait WordList {
    fn contains(&self, lowercased: &str) -> bool;
}

impl WordList for HashSet<String> {
    fn contains(&self, lowercased: &str) -> bool {
        HashSet::contains(self, lowercased)
    }
}

impl<T: WordList + ?Sized> WordList for &T {
    fn contains(&self, lowercased: &str) -> bool {
        (**self).contains(lowercased)
    }
}

/// A word list that may still be loading.
///
/// Clones share the same backing set. Until a set is published with
/// [`SharedWordList::replace`] or [`SharedWordList::publish_once`] every
/// lookup answers `false`.
#[derive(Clone, Default)]
pub struct SharedWordList {
    inner: Arc<RwLock<Option<HashSet<String>>>>,
}

impl SharedWordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an already loaded list.
    pub fn from_set(words: HashSet<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(words))),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.read().map(|g| g.is_some()).unwrap_or(false)
    }

    /// Number of loaded words, `None` while unloaded.
    pub fn loaded_len(&self) -> Option<usize> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.as_ref().map(|s| s.len()))
    }

    /// Publishes a freshly loaded set, returning its size.
    pub fn replace(&self, words: HashSet<String>) -> usize {
        let count = words.len();
        match self.inner.write() {
            Ok(mut guard) => *guard = Some(words),
            Err(poisoned) => *poisoned.into_inner() = Some(words),
        }
        count
    }

    /// Publishes `words` only if nothing is loaded yet. The check and the
    /// write happen under one write lock, so concurrent first loads publish
    /// exactly once.
    ///
    /// Returns `Ok(count)` when published, `Err(existing_count)` when the
    /// list was already loaded and `words` was discarded.
    pub fn publish_once(&self, words: HashSet<String>) -> Result<usize, usize> {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(existing) = guard.as_ref() {
            return Err(existing.len());
        }
        let count = words.len();
        *guard = Some(words);
        Ok(count)
    }

    /// Drops the loaded set, going back to the unloaded state.
    pub fn clear(&self) {
        match self.inner.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }

    /// Returns a cloned copy of the loaded set.
    pub fn snapshot(&self) -> Option<HashSet<String>> {
        self.inner.read().ok().and_then(|g| g.clone())
    }
}

impl WordList for SharedWordList {
    fn contains(&self, lowercased: &str) -> bool {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.as_ref().map(|set| set.contains(lowercased)))
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for SharedWordList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedWordList")
            .field("loaded", &self.loaded_len())
            .finish()
    }
}

#[derive(Deserialize)]
struct WordListDocument {
    wordlist: Vec<String>,
}

/// Parses a `{"wordlist": [...]}` document into a lowercase set.
///
/// # Errors
///
/// Returns error if:
/// - The document is not valid JSON or lacks the `wordlist` array
/// - No non-blank entry remains
pub fn parse_wordlist_json(json: &str) -> Result<HashSet<String>, WordListError> {
    let doc: WordListDocument = serde_json::from_str(json)?;
    normalize(doc.wordlist)
}

pub(crate) fn normalize(words: Vec<String>) -> Result<HashSet<String>, WordListError> {
    let set: HashSet<String> = words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();

    if set.is_empty() {
        return Err(WordListError::Empty);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_unloaded_list_finds_nothing() {
        let list = SharedWordList::new();
        assert!(!list.is_loaded());
        assert_eq!(list.loaded_len(), None);
        assert!(!list.contains("password"));
    }

    #[test]
    fn test_replace_publishes_to_clones() {
        let list = SharedWordList::new();
        let handle = list.clone();

        let count = list.replace(set(&["password", "qwerty"]));
        assert_eq!(count, 2);
        assert!(handle.is_loaded());
        assert!(handle.contains("qwerty"));
        assert!(!handle.contains("QWERTY"));
    }

    #[test]
    fn test_publish_once_keeps_first_set() {
        let list = SharedWordList::new();

        assert_eq!(list.publish_once(set(&["first", "one"])), Ok(2));
        assert_eq!(list.publish_once(set(&["second"])), Err(2));
        assert!(list.contains("first"));
        assert!(!list.contains("second"));
        assert_eq!(list.loaded_len(), Some(2));
    }

    #[test]
    fn test_publish_once_concurrent_first_loads() {
        let list = SharedWordList::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let list = list.clone();
                std::thread::spawn(move || list.publish_once(set(&[format!("word{i}").as_str()])))
            })
            .collect();
        let published = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .filter(|r| r.is_ok())
            .count();

        assert_eq!(published, 1);
        assert_eq!(list.loaded_len(), Some(1));
    }

    #[test]
    fn test_clear_returns_to_unloaded() {
        let list = SharedWordList::from_set(set(&["admin"]));
        assert!(list.contains("admin"));
        list.clear();
        assert!(!list.contains("admin"));
        assert!(list.snapshot().is_none());
    }

    #[test]
    fn test_hashset_is_a_word_list() {
        let words = set(&["letmein"]);
        assert!(WordList::contains(&words, "letmein"));
        assert!(!WordList::contains(&&words, "letmeout"));
    }

    #[test]
    fn test_parse_wordlist_json_lowercases_and_trims() {
        let words = parse_wordlist_json(r#"{"wordlist": ["Password", " qwerty ", "", "admin"]}"#)
            .expect("valid document");
        assert_eq!(words, set(&["password", "qwerty", "admin"]));
    }

    #[test]
    fn test_parse_wordlist_json_empty() {
        let result = parse_wordlist_json(r#"{"wordlist": ["  "]}"#);
        assert!(matches!(result, Err(WordListError::Empty)));
    }

    #[test]
    fn test_parse_wordlist_json_missing_field() {
        let result = parse_wordlist_json(r#"{"words": ["a"]}"#);
        assert!(matches!(result, Err(WordListError::Parse(_))));
    }

    #[test]
    fn test_debug_does_not_dump_words() {
        let list = SharedWordList::from_set(set(&["hunter2"]));
        let dbg = format!("{list:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("Some(1)"));
    }
}
