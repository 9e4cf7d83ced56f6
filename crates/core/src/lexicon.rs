//! Stop word and sentiment word lists.
//!
//! A [`Lexicon`] is built once at startup and handed to the
//! [`MetricsEngine`](crate::MetricsEngine); it never changes afterwards.
//! Positive and negative sets have every stop word removed at construction,
//! so a word is never both ignored and scored.
//!
//! # Example
//!
//! ```rust
//! use textgauge_core::Lexicon;
//!
//! let lexicon = Lexicon::new(["the", "good"], ["good", "great"], ["bad"]);
//! assert!(lexicon.is_stop_word("the"));
//! assert!(!lexicon.is_positive("good"));
//! assert!(lexicon.is_positive("great"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Result, TextGaugeError};

/// Locations of the word lists on disk.
#[derive(Debug, Clone)]
pub struct LexiconPaths {
    /// Directory whose files are all stop word lists.
    pub stop_words_dir: PathBuf,
    /// Positive sentiment word list.
    pub positive_words: PathBuf,
    /// Negative sentiment word list.
    pub negative_words: PathBuf,
}

impl Default for LexiconPaths {
    fn default() -> Self {
        Self {
            stop_words_dir: PathBuf::from("StopWords"),
            positive_words: PathBuf::from("MasterDictionary/positive-words.txt"),
            negative_words: PathBuf::from("MasterDictionary/negative-words.txt"),
        }
    }
}

/// Immutable stop word, positive and negative word sets.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    positive_words: HashSet<String>,
    negative_words: HashSet<String>,
}

impl Lexicon {
    /// Builds a lexicon from in-memory word lists.
    ///
    /// Stop words are subtracted from both sentiment sets.
    pub fn new<S, P, N>(stop_words: S, positive_words: P, negative_words: N) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let stop_words: HashSet<String> = stop_words.into_iter().map(Into::<String>::into).collect();
        let positive_words = positive_words
            .into_iter()
            .map(Into::<String>::into)
            .filter(|w| !stop_words.contains(w))
            .collect();
        let negative_words = negative_words
            .into_iter()
            .map(Into::<String>::into)
            .filter(|w| !stop_words.contains(w))
            .collect();

        Self { stop_words, positive_words, negative_words }
    }

    /// Loads the word lists described by `paths`.
    ///
    /// Every regular file in the stop word directory is read and unioned.
    /// Lists are split on whitespace; anything that is not valid UTF-8 is
    /// replaced rather than rejected, since the common distributions of these
    /// lists are Latin-1.
    ///
    /// # Errors
    ///
    /// Returns [`TextGaugeError::LexiconError`] if the directory or either
    /// sentiment file cannot be read.
    pub fn load(paths: &LexiconPaths) -> Result<Self> {
        let stop_words = load_stop_words(&paths.stop_words_dir)?;
        let positive_words = read_word_list(&paths.positive_words)?;
        let negative_words = read_word_list(&paths.negative_words)?;

        let lexicon = Self::new(stop_words, positive_words, negative_words);
        debug!(
            stop_words = lexicon.stop_words.len(),
            positive_words = lexicon.positive_words.len(),
            negative_words = lexicon.negative_words.len(),
            "lexicon loaded"
        );

        Ok(lexicon)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive_words.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative_words.contains(word)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    pub fn positive_count(&self) -> usize {
        self.positive_words.len()
    }

    pub fn negative_count(&self) -> usize {
        self.negative_words.len()
    }
}

fn lexicon_error(path: &Path, reason: impl ToString) -> TextGaugeError {
    TextGaugeError::LexiconError { path: path.to_path_buf(), reason: reason.to_string() }
}

/// Union of the words in every file under `dir`
fn load_stop_words(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| lexicon_error(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| lexicon_error(dir, e))?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut words = Vec::new();
    for file in &files {
        words.extend(read_word_list(file)?);
    }

    debug!(files = files.len(), dir = %dir.display(), "read stop word lists");
    Ok(words)
}

fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| lexicon_error(path, e))?;
    let contents = String::from_utf8_lossy(&bytes);

    Ok(contents.split_whitespace().map(str::to_string).collect())
}
