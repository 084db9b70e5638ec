//! Similarity scoring between an answer sentence and a source passage.
//!
//! The score is Jaccard overlap of lowercase word tokens plus a per-key-term
//! substring bonus, clamped to 1.0. Tokens are whitespace-delimited with
//! punctuation attached — the bonus is what rewards exact terms regardless of
//! surrounding punctuation.

use std::collections::HashSet;

use crate::config::CitationConfig;

/// Common words excluded from key term extraction. Everything here is longer
/// than the key-term length cutoff, so the filter has to be explicit.
const STOP_WORDS: [&str; 20] = [
    "this", "that", "with", "from", "they", "have", "been", "will", "would", "could", "should",
    "their", "there", "where", "which", "about", "after", "before", "because", "through",
];

/// Score how well `sentence` is supported by `source`, in `[0.0, 1.0]`.
///
/// Returns 0.0 when either side has no usable tokens, so empty or
/// whitespace-only source passages never match anything.
pub fn calculate_similarity(sentence: &str, source: &str, config: &CitationConfig) -> f64 {
    let sentence_tokens = tokenize(sentence, config.min_token_chars);
    let source_tokens = tokenize(source, config.min_token_chars);
    if sentence_tokens.is_empty() || source_tokens.is_empty() {
        return 0.0;
    }

    let intersection = sentence_tokens.intersection(&source_tokens).count();
    let union = sentence_tokens.union(&source_tokens).count();
    let jaccard = intersection as f64 / union as f64;

    let sentence_lower = sentence.to_lowercase();
    let hits = key_terms(source, config)
        .iter()
        .filter(|term| sentence_lower.contains(term.as_str()))
        .count();
    let bonus = hits as f64 * config.key_term_bonus;

    (jaccard + bonus).min(1.0)
}

/// Lowercase word tokens of `text`, deduplicated, with tokens of `min_chars`
/// characters or fewer discarded.
fn tokenize(text: &str, min_chars: usize) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > min_chars)
        .map(|token| token.to_string())
        .collect()
}

/// Extract up to `max_key_terms` content words from a source passage:
/// lowercase tokens longer than the length cutoff that are not stop words,
/// in order of first appearance.
pub(crate) fn key_terms(source: &str, config: &CitationConfig) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for token in source.to_lowercase().split_whitespace() {
        if token.chars().count() <= config.min_key_term_chars {
            continue;
        }
        if STOP_WORDS.contains(&token) {
            continue;
        }
        if terms.iter().any(|t| t == token) {
            continue;
        }
        terms.push(token.to_string());
        if terms.len() == config.max_key_terms {
            break;
        }
    }
    terms
}
