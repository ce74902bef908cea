//! Word list loading
//!
//! Reads the word list document once, keeps a timestamped copy in an
//! optional cache file, and falls back to a stale cache when the source is
//! unavailable. Until a load succeeds the target list stays unloaded and the
//! scorer keeps working without it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::wordlist::{normalize, parse_wordlist_json, SharedWordList, WordListError};

pub const ENV_WORDLIST_PATH: &str = "PWD_WORDLIST_PATH";
pub const ENV_WORDLIST_CACHE: &str = "PWD_WORDLIST_CACHE";
pub const ENV_WORDLIST_MAX_AGE: &str = "PWD_WORDLIST_MAX_AGE_SECS";

const DEFAULT_SOURCE: &str = "./assets/wordlist.json";
const DEFAULT_MAX_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Where the word list comes from and how long a cached copy stays valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListConfig {
    pub source: PathBuf,
    pub cache_path: Option<PathBuf>,
    pub max_age: Duration,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            cache_path: None,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl WordListConfig {
    /// Builds a configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_WORDLIST_PATH`: word list document (default: `./assets/wordlist.json`)
    /// - `PWD_WORDLIST_CACHE`: cache file, caching is off when unset
    /// - `PWD_WORDLIST_MAX_AGE_SECS`: cache lifetime in seconds (default: 7 days)
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the max age is not a whole number of seconds.
    pub fn from_env() -> Result<Self, WordListError> {
        let source = std::env::var(ENV_WORDLIST_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOURCE));
        let cache_path = std::env::var(ENV_WORDLIST_CACHE).ok().map(PathBuf::from);
        let max_age = match std::env::var(ENV_WORDLIST_MAX_AGE) {
            Ok(raw) => raw.trim().parse().map(Duration::from_secs).map_err(|_| {
                WordListError::InvalidConfig(format!(
                    "{ENV_WORDLIST_MAX_AGE}={raw:?} is not a number of seconds"
                ))
            })?,
            Err(_) => DEFAULT_MAX_AGE,
        };

        Ok(Self {
            source,
            cache_path,
            max_age,
        })
    }
}

/// Where a loaded word list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// The target was already loaded; nothing was read.
    AlreadyLoaded,
    Cache,
    Source,
    /// The source failed and an expired cache entry was used instead.
    StaleCache,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    pub origin: LoadOrigin,
    pub count: usize,
}

#[derive(Serialize, Deserialize)]
struct CacheEntry {
    saved_at: u64,
    wordlist: Vec<String>,
}

impl CacheEntry {
    fn is_fresh(&self, max_age: Duration) -> bool {
        now_secs().saturating_sub(self.saved_at) < max_age.as_secs()
    }
}

struct Fetched {
    words: HashSet<String>,
    origin: LoadOrigin,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[derive(Debug, Clone, Default)]
pub struct WordListLoader {
    config: WordListConfig,
}

impl WordListLoader {
    pub fn new(config: WordListConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Result<Self, WordListError> {
        WordListConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &WordListConfig {
        &self.config
    }

    /// Loads the word list into `target` unless it is already loaded.
    ///
    /// # Errors
    ///
    /// Returns the source error when neither the source nor any cache entry
    /// could be used. `target` is left untouched in that case.
    pub fn load_into(&self, target: &SharedWordList) -> Result<LoadOutcome, WordListError> {
        if let Some(count) = target.loaded_len() {
            return Ok(LoadOutcome {
                origin: LoadOrigin::AlreadyLoaded,
                count,
            });
        }

        let fetched = self.fetch()?;
        Ok(publish(fetched, target))
    }

    /// Async variant of [`WordListLoader::load_into`]. The blocking read runs
    /// on tokio's blocking pool; a cancelled load never publishes.
    #[cfg(feature = "async")]
    pub async fn load_async(
        &self,
        target: SharedWordList,
        token: CancellationToken,
    ) -> Result<LoadOutcome, WordListError> {
        if token.is_cancelled() {
            return Err(WordListError::Cancelled);
        }
        if let Some(count) = target.loaded_len() {
            return Ok(LoadOutcome {
                origin: LoadOrigin::AlreadyLoaded,
                count,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::info!("word list loading is about to start...");

        let loader = self.clone();
        let fetched = tokio::task::spawn_blocking(move || loader.fetch())
            .await
            .map_err(|e| WordListError::Join(e.to_string()))??;

        publish_unless_cancelled(fetched, &target, &token)
    }

    fn fetch(&self) -> Result<Fetched, WordListError> {
        let stale = match self.read_cache() {
            Some(entry) if entry.is_fresh(self.config.max_age) => match normalize(entry.wordlist) {
                Ok(words) => {
                    #[cfg(feature = "tracing")]
                    tracing::info!("Word list loaded from cache: {} words", words.len());
                    return Ok(Fetched {
                        words,
                        origin: LoadOrigin::Cache,
                    });
                }
                Err(_) => None,
            },
            other => other,
        };

        match read_source(&self.config.source) {
            Ok(words) => {
                #[cfg(feature = "tracing")]
                tracing::info!(
                    "Word list loaded: {} words from {:?}",
                    words.len(),
                    self.config.source
                );
                self.write_cache(&words);
                Ok(Fetched {
                    words,
                    origin: LoadOrigin::Source,
                })
            }
            Err(err) => {
                if let Some(words) = stale.and_then(|entry| normalize(entry.wordlist).ok()) {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Word list source unavailable ({}), using stale cache", err);
                    return Ok(Fetched {
                        words,
                        origin: LoadOrigin::StaleCache,
                    });
                }
                #[cfg(feature = "tracing")]
                tracing::error!("Word list loading FAILED: {}", err);
                Err(err)
            }
        }
    }

    fn read_cache(&self) -> Option<CacheEntry> {
        let path = self.config.cache_path.as_ref()?;
        let content = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(entry) => Some(entry),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Ignoring unreadable word list cache {:?}: {}", path, e);
                #[cfg(not(feature = "tracing"))]
                let _ = &e;
                None
            }
        }
    }

    fn write_cache(&self, words: &HashSet<String>) {
        let Some(path) = self.config.cache_path.as_ref() else {
            return;
        };

        let mut wordlist: Vec<String> = words.iter().cloned().collect();
        wordlist.sort();
        let entry = CacheEntry {
            saved_at: now_secs(),
            wordlist,
        };

        let result = serde_json::to_string(&entry)
            .map_err(WordListError::from)
            .and_then(|json| std::fs::write(path, json).map_err(WordListError::from));
        if let Err(e) = result {
            #[cfg(feature = "tracing")]
            tracing::warn!("Failed to write word list cache {:?}: {}", path, e);
            #[cfg(not(feature = "tracing"))]
            let _ = &e;
        }
    }
}

/// Publishes into `target` unless a concurrent load got there first, in
/// which case the fetched words are dropped.
fn publish(fetched: Fetched, target: &SharedWordList) -> LoadOutcome {
    match target.publish_once(fetched.words) {
        Ok(count) => LoadOutcome {
            origin: fetched.origin,
            count,
        },
        Err(count) => LoadOutcome {
            origin: LoadOrigin::AlreadyLoaded,
            count,
        },
    }
}

#[cfg(feature = "async")]
fn publish_unless_cancelled(
    fetched: Fetched,
    target: &SharedWordList,
    token: &CancellationToken,
) -> Result<LoadOutcome, WordListError> {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!(
            "word list loading cancelled, discarding {} words",
            fetched.words.len()
        );
        return Err(WordListError::Cancelled);
    }
    Ok(publish(fetched, target))
}

fn read_source(path: &Path) -> Result<HashSet<String>, WordListError> {
    if !path.exists() {
        return Err(WordListError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_wordlist_json(&content)
}
