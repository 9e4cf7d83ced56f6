//! Vowel-group syllable estimate.
//!
//! This is a heuristic, not a dictionary lookup. The counts feed the complex
//! word, fog index and syllables-per-word metrics, so changing the rules
//! changes reported numbers.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Estimates the number of syllables in a single word.
///
/// Counts the starts of vowel groups (`a e i o u`), subtracts one for a
/// trailing `es` or `ed`, and never returns less than one. Returns `None`
/// for an empty word.
///
/// # Example
///
/// ```rust
/// use textgauge_core::count_syllables;
///
/// assert_eq!(count_syllables("beautiful"), Some(3));
/// assert_eq!(count_syllables("likes"), Some(1));
/// assert_eq!(count_syllables(""), None);
/// ```
pub fn count_syllables(word: &str) -> Option<usize> {
    let word = word.to_lowercase();
    let mut chars = word.chars();
    let first = chars.next()?;

    let mut count = usize::from(is_vowel(first));
    let mut prev = first;
    for c in chars {
        if is_vowel(c) && !is_vowel(prev) {
            count += 1;
        }
        prev = c;
    }

    if word.ends_with("es") || word.ends_with("ed") {
        count = count.saturating_sub(1);
    }

    Some(count.max(1))
}
