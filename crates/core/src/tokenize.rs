//! Sentence and word segmentation.
//!
//! Sentences end only at terminal punctuation followed by whitespace, so a
//! line break alone never closes a sentence and common abbreviations such as
//! `Mr.` do not split one. Word tokens follow Penn Treebank conventions:
//! clitics (`'s`, `n't`, `'re`, ...) are split off and dropped, hyphenated or
//! period-joined runs stay whole and are then rejected as non-alphanumeric.

use std::sync::LazyLock;

use regex::Regex;

use crate::Lexicon;

/// Terminal punctuation, optional closing quotes or brackets, then whitespace.
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[.!?]+["'”’)\]]*\s+"#).unwrap());

/// Word runs, keeping internal hyphens, periods and apostrophes.
static WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+(?:[-.'’]\w+)*").unwrap());

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "corp", "e.g", "i.e",
    "u.s", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Suffixes split off a word run, longest first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'d", "'m"];

/// Splits text into sentences.
///
/// Segments are trimmed and blank ones dropped, so blank text yields no
/// sentences at all. Text without terminal punctuation is one sentence.
///
/// # Example
///
/// ```rust
/// use textgauge_core::tokenize::sentences;
///
/// assert_eq!(sentences("I love this. We hate that.").len(), 2);
/// assert_eq!(sentences("Headline\nMr. Smith spoke. He left.").len(), 2);
/// assert!(sentences("  \n ").is_empty());
/// ```
pub fn sentences(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut start = 0;

    for end in SENTENCE_END.find_iter(text) {
        if end.as_str().starts_with('.') && ends_with_abbreviation(&text[start..end.start()]) {
            continue;
        }
        push_sentence(&mut found, &text[start..end.end()]);
        start = end.end();
    }
    push_sentence(&mut found, &text[start..]);

    found
}

fn push_sentence<'a>(found: &mut Vec<&'a str>, segment: &'a str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        found.push(segment);
    }
}

/// True when the last word before a period is an abbreviation or an initial.
fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(last) = segment.split_whitespace().next_back() else {
        return false;
    };
    let last = last.trim_start_matches(|c: char| !c.is_alphanumeric()).to_lowercase();

    let mut chars = last.chars();
    let initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());

    initial || ABBREVIATIONS.contains(&last.as_str())
}

/// Splits text into cleaned word tokens.
///
/// Possessives and contractions keep their base word (`company's` gives
/// `company`, `isn't` gives `is`). Punctuation, hyphenated words and stop
/// words never appear in the output.
///
/// # Example
///
/// ```rust
/// use textgauge_core::{Lexicon, tokenize::words};
///
/// let lexicon = Lexicon::new(["i", "this"], ["love"], Vec::<String>::new());
/// assert_eq!(words("I love this!", &lexicon), vec!["love"]);
/// assert_eq!(words("The company's well-known", &Lexicon::default()), vec!["the", "company"]);
/// ```
pub fn words(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let text = text.to_lowercase().replace('’', "'");

    WORD_RUN
        .find_iter(&text)
        .map(|run| strip_clitics(run.as_str()))
        .filter(|token| is_alphanumeric(token))
        .filter(|token| !lexicon.is_stop_word(token))
        .map(str::to_string)
        .collect()
}

fn strip_clitics(mut run: &str) -> &str {
    while let Some(base) = CLITICS.iter().find_map(|clitic| run.strip_suffix(clitic)) {
        if base.is_empty() {
            break;
        }
        run = base;
    }
    run
}

fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
