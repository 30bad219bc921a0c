//! Token and sentence helpers shared by corroboration and contradiction checks.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Sentence terminators: punctuation followed by whitespace or end of text,
/// or a line break. Decimal points ("40.5") do not split.
static SENTENCE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?;]+(?:\s+|$)|\n+").unwrap());

/// Canonical form of a source id: trimmed and lower-cased, Unicode aware.
/// Every source comparison goes through this key.
pub fn source_key(source_id: &str) -> String {
    source_id.trim().to_lowercase()
}

/// Lower-cased word set, keeping only words longer than two characters.
pub fn token_set(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > 2)
        .map(|w| w.to_lowercase())
        .collect()
}

/// Jaccard similarity |A ∩ B| / |A ∪ B| of two token sets. Empty sets give 0.0.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Token-set Jaccard similarity of two texts.
pub fn similarity(a: &str, b: &str) -> f64 {
    jaccard(&token_set(a), &token_set(b))
}

/// Split text into trimmed, non-empty sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_dropped() {
        let tokens = token_set("We are an ok Firm");
        assert!(tokens.contains("are"));
        assert!(tokens.contains("firm"));
        assert!(!tokens.contains("we"));
        assert!(!tokens.contains("ok"));
    }

    #[test]
    fn identical_texts_are_fully_similar() {
        assert_eq!(similarity("The debt was paid", "the DEBT was paid"), 1.0);
    }

    #[test]
    fn empty_texts_are_not_similar() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("a b", "c d"), 0.0);
    }

    #[test]
    fn decimals_do_not_split_sentences() {
        let s = sentences("We offer 40.5% off. We deny liability!\nDone");
        assert_eq!(s, vec!["We offer 40.5% off", "We deny liability", "Done"]);
    }
}
