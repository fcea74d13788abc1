//! N-gram extraction, frequency counts and the index of coincidence.
//!
//! Whitespace is removed before any windowing, so positions returned by
//! [`find_repeated_ngrams`] are character offsets into the stripped text.
//! Nothing else is normalised: case and punctuation are significant.

use std::collections::HashMap;

use crate::error::CipherError;

/// Default shortest repeat searched by [`RepeatWindow`].
pub const DEFAULT_MIN_REPEAT: usize = 3;

/// Default longest repeat searched by [`RepeatWindow`].
pub const DEFAULT_MAX_REPEAT: usize = 5;

fn strip_whitespace(text: &str) -> Vec<char> {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Splits `text` into n-grams of `n` characters.
///
/// # Parameters
/// - `text`: input; whitespace is removed first.
/// - `n`: window size.
/// - `overlapping`: step by one character when `true`, by `n` otherwise.
///   A trailing fragment shorter than `n` is dropped.
///
/// # Errors
/// Returns [`CipherError::InvalidNgramSize`] when `n` is zero.
///
/// # Examples
///
/// ```
/// use classicrypt::generate_ngrams;
///
/// assert_eq!(generate_ngrams("ab cd", 2, true).unwrap(), ["ab", "bc", "cd"]);
/// assert_eq!(generate_ngrams("abcde", 2, false).unwrap(), ["ab", "cd"]);
/// ```
pub fn generate_ngrams(text: &str, n: usize, overlapping: bool) -> Result<Vec<String>, CipherError> {
    if n == 0 {
        return Err(CipherError::InvalidNgramSize);
    }
    let chars = strip_whitespace(text);
    if chars.len() < n {
        return Ok(Vec::new());
    }
    let step = if overlapping { 1 } else { n };
    Ok((0..=chars.len() - n)
        .step_by(step)
        .map(|i| chars[i..i + n].iter().collect())
        .collect())
}

/// Counts overlapping n-grams of size `n`.
///
/// # Errors
/// Returns [`CipherError::InvalidNgramSize`] when `n` is zero.
pub fn ngram_frequency(text: &str, n: usize) -> Result<HashMap<String, usize>, CipherError> {
    let mut counts = HashMap::new();
    for gram in generate_ngrams(text, n, true)? {
        *counts.entry(gram).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Orders a frequency map by count, highest first. Equal counts are ordered
/// by ascending n-gram text.
pub fn sort_by_frequency(counts: &HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut sorted: Vec<(String, usize)> = counts
        .iter()
        .map(|(gram, &count)| (gram.clone(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

/// Index of coincidence of the letters in `text`.
///
/// Only ASCII letters count, case-folded. Returns `Σ f(f-1) / (N(N-1))`
/// over the 26 letter counts, or `0.0` when fewer than two letters remain.
///
/// # Examples
///
/// ```
/// use classicrypt::calculate_ic;
///
/// assert_eq!(calculate_ic("aaAA"), 1.0);
/// assert_eq!(calculate_ic("A"), 0.0);
/// ```
pub fn calculate_ic(text: &str) -> f64 {
    let mut counts = [0u64; 26];
    let mut total = 0u64;
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        counts[(c.to_ascii_uppercase() as u8 - b'A') as usize] += 1;
        total += 1;
    }
    if total <= 1 {
        return 0.0;
    }
    let coincidences: u64 = counts.iter().map(|&f| f * f.saturating_sub(1)).sum();
    coincidences as f64 / (total * (total - 1)) as f64
}

/// Every n-gram with `min_len <= n <= max_len` that occurs at least twice,
/// mapped to its start offsets in ascending order.
///
/// # Errors
/// Returns [`CipherError::InvalidNgramSize`] when `min_len` is zero. A window
/// with `min_len > max_len` is empty and yields an empty map.
///
/// # Examples
///
/// ```
/// use classicrypt::find_repeated_ngrams;
///
/// let repeats = find_repeated_ngrams("THE CAT THE HAT", 3, 3).unwrap();
/// assert_eq!(repeats["THE"], vec![0, 6]);
/// assert!(!repeats.contains_key("HAT"));
/// ```
pub fn find_repeated_ngrams(
    text: &str,
    min_len: usize,
    max_len: usize,
) -> Result<HashMap<String, Vec<usize>>, CipherError> {
    if min_len == 0 {
        return Err(CipherError::InvalidNgramSize);
    }
    let chars = strip_whitespace(text);
    let mut repeated = HashMap::new();
    for n in min_len..=max_len.min(chars.len()) {
        let mut seen: HashMap<String, Vec<usize>> = HashMap::new();
        for i in 0..=chars.len() - n {
            seen.entry(chars[i..i + n].iter().collect())
                .or_default()
                .push(i);
        }
        repeated.extend(seen.into_iter().filter(|(_, starts)| starts.len() > 1));
    }
    Ok(repeated)
}

/// Length window for repeated n-gram search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatWindow {
    /// Shortest n-gram length searched.
    pub min_len: usize,
    /// Longest n-gram length searched, inclusive.
    pub max_len: usize,
}

impl Default for RepeatWindow {
    fn default() -> Self {
        RepeatWindow {
            min_len: DEFAULT_MIN_REPEAT,
            max_len: DEFAULT_MAX_REPEAT,
        }
    }
}

impl RepeatWindow {
    /// Window covering lengths `min_len..=max_len`.
    pub fn new(min_len: usize, max_len: usize) -> Self {
        RepeatWindow { min_len, max_len }
    }

    /// Runs [`find_repeated_ngrams`] over this window.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidNgramSize`] when `min_len` is zero.
    pub fn find_in(&self, text: &str) -> Result<HashMap<String, Vec<usize>>, CipherError> {
        find_repeated_ngrams(text, self.min_len, self.max_len)
    }
}
