//! Readability and sentiment metrics for a single article.
//!
//! [`MetricsEngine::compute`] is a pure function of the article text and the
//! engine's [`Lexicon`]: it never fails, never caches, and returns the same
//! [`Metrics`] for the same input.
//!
//! # Example
//!
//! ```rust
//! use textgauge_core::{Lexicon, MetricsEngine};
//!
//! let lexicon = Lexicon::new(["i", "we", "this", "that"], ["love"], ["hate"]);
//! let engine = MetricsEngine::new(lexicon);
//! let metrics = engine.compute("I love this. We hate that.");
//!
//! assert_eq!(metrics.word_count, 2);
//! assert_eq!(metrics.personal_pronouns, 2);
//! assert!(metrics.polarity_score.abs() < 1e-9);
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::syllables::count_syllables;
use crate::tokenize::{sentences, words};
use crate::Lexicon;

/// Smoothing term for the polarity and subjectivity denominators.
pub const EPSILON: f64 = 0.000001;

/// Syllable count above which a word is complex.
const COMPLEX_WORD_SYLLABLES: usize = 2;

/// Weight applied to the Gunning fog sum.
const FOG_WEIGHT: f64 = 0.4;

/// Matched against the raw text, not the cleaned tokens.
static PERSONAL_PRONOUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(I|we|my|ours|us)\b").unwrap());

/// Names of the reported metrics, in report column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    PositiveScore,
    NegativeScore,
    PolarityScore,
    SubjectivityScore,
    AvgSentenceLength,
    PercentageComplexWords,
    FogIndex,
    AvgWordsPerSentence,
    ComplexWordCount,
    WordCount,
    SyllablesPerWord,
    PersonalPronouns,
    AvgWordLength,
}

impl MetricName {
    /// All metric names in report column order.
    pub const ALL: [MetricName; 13] = [
        MetricName::PositiveScore,
        MetricName::NegativeScore,
        MetricName::PolarityScore,
        MetricName::SubjectivityScore,
        MetricName::AvgSentenceLength,
        MetricName::PercentageComplexWords,
        MetricName::FogIndex,
        MetricName::AvgWordsPerSentence,
        MetricName::ComplexWordCount,
        MetricName::WordCount,
        MetricName::SyllablesPerWord,
        MetricName::PersonalPronouns,
        MetricName::AvgWordLength,
    ];

    /// The column header used in reports.
    pub fn label(self) -> &'static str {
        match self {
            MetricName::PositiveScore => "Positive Score",
            MetricName::NegativeScore => "Negative Score",
            MetricName::PolarityScore => "Polarity Score",
            MetricName::SubjectivityScore => "Subjectivity Score",
            MetricName::AvgSentenceLength => "Avg Sentence Length",
            MetricName::PercentageComplexWords => "Percentage of Complex Words",
            MetricName::FogIndex => "Fog Index",
            MetricName::AvgWordsPerSentence => "Avg Number of Words Per Sentence",
            MetricName::ComplexWordCount => "Complex Word Count",
            MetricName::WordCount => "Word Count",
            MetricName::SyllablesPerWord => "Syllable per Word",
            MetricName::PersonalPronouns => "Personal Pronouns",
            MetricName::AvgWordLength => "Avg Word Length",
        }
    }

    /// True for whole-number counts, false for ratios and scores.
    pub fn is_count(self) -> bool {
        matches!(
            self,
            MetricName::PositiveScore
                | MetricName::NegativeScore
                | MetricName::ComplexWordCount
                | MetricName::WordCount
                | MetricName::PersonalPronouns
        )
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metrics computed for one article.
///
/// `avg_sentence_length` and `avg_words_per_sentence` always hold the same
/// value; existing report consumers read both columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    #[serde(rename = "Positive Score")]
    pub positive_score: usize,
    #[serde(rename = "Negative Score")]
    pub negative_score: usize,
    #[serde(rename = "Polarity Score")]
    pub polarity_score: f64,
    #[serde(rename = "Subjectivity Score")]
    pub subjectivity_score: f64,
    #[serde(rename = "Avg Sentence Length")]
    pub avg_sentence_length: f64,
    /// Ratio of complex words to all words (0..=1, not scaled to 100).
    #[serde(rename = "Percentage of Complex Words")]
    pub percentage_complex_words: f64,
    #[serde(rename = "Fog Index")]
    pub fog_index: f64,
    #[serde(rename = "Avg Number of Words Per Sentence")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "Complex Word Count")]
    pub complex_word_count: usize,
    #[serde(rename = "Word Count")]
    pub word_count: usize,
    #[serde(rename = "Syllable per Word")]
    pub syllables_per_word: f64,
    #[serde(rename = "Personal Pronouns")]
    pub personal_pronouns: usize,
    #[serde(rename = "Avg Word Length")]
    pub avg_word_length: f64,
    /// Number of sentences found; diagnostic only, not a report column.
    #[serde(skip)]
    pub sentence_count: usize,
}

impl Metrics {
    /// Looks up a metric by name, widening counts to `f64`.
    pub fn value(&self, name: MetricName) -> f64 {
        match name {
            MetricName::PositiveScore => self.positive_score as f64,
            MetricName::NegativeScore => self.negative_score as f64,
            MetricName::PolarityScore => self.polarity_score,
            MetricName::SubjectivityScore => self.subjectivity_score,
            MetricName::AvgSentenceLength => self.avg_sentence_length,
            MetricName::PercentageComplexWords => self.percentage_complex_words,
            MetricName::FogIndex => self.fog_index,
            MetricName::AvgWordsPerSentence => self.avg_words_per_sentence,
            MetricName::ComplexWordCount => self.complex_word_count as f64,
            MetricName::WordCount => self.word_count as f64,
            MetricName::SyllablesPerWord => self.syllables_per_word,
            MetricName::PersonalPronouns => self.personal_pronouns as f64,
            MetricName::AvgWordLength => self.avg_word_length,
        }
    }

    /// All metrics as `(name, value)` pairs in report column order.
    pub fn entries(&self) -> impl Iterator<Item = (MetricName, f64)> + '_ {
        MetricName::ALL.into_iter().map(|name| (name, self.value(name)))
    }
}

/// Computes [`Metrics`] against a fixed [`Lexicon`].
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    lexicon: Lexicon,
}

impl MetricsEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Computes every metric for `text`.
    ///
    /// Blank text is not an error: all ratios fall back to zero. Callers that
    /// want to treat blank articles as missing should check before calling.
    pub fn compute(&self, text: &str) -> Metrics {
        let words = words(text, &self.lexicon);
        let word_count = words.len();
        let sentence_count = sentences(text).len();

        let positive_score = words.iter().filter(|w| self.lexicon.is_positive(w)).count();
        let negative_score = words.iter().filter(|w| self.lexicon.is_negative(w)).count();
        let charged = (positive_score + negative_score) as f64;
        let polarity_score = (positive_score as f64 - negative_score as f64) / (charged + EPSILON);
        let subjectivity_score = charged / (word_count as f64 + EPSILON);

        let avg_sentence_length = ratio(word_count as f64, sentence_count);

        // Tokens are never empty, so every word has a syllable count.
        let syllables: Vec<usize> = words.iter().filter_map(|w| count_syllables(w)).collect();
        let complex_word_count = syllables.iter().filter(|&&s| s > COMPLEX_WORD_SYLLABLES).count();
        let percentage_complex_words = ratio(complex_word_count as f64, word_count);
        let fog_index = FOG_WEIGHT * (avg_sentence_length + percentage_complex_words);
        let syllables_per_word = ratio(syllables.iter().sum::<usize>() as f64, word_count);

        let personal_pronouns = PERSONAL_PRONOUNS.find_iter(text).count();

        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        let avg_word_length = ratio(total_chars as f64, word_count);

        Metrics {
            positive_score,
            negative_score,
            polarity_score,
            subjectivity_score,
            avg_sentence_length,
            percentage_complex_words,
            fog_index,
            avg_words_per_sentence: avg_sentence_length,
            complex_word_count,
            word_count,
            syllables_per_word,
            personal_pronouns,
            avg_word_length,
            sentence_count,
        }
    }
}

fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator > 0 { numerator / denominator as f64 } else { 0.0 }
}
