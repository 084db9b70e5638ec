//! Best-sentence selection for each source.
//!
//! Each source is scored against every sentence of the answer; the adjusted
//! score is similarity weighted by the source's relevance. A source keeps its
//! single best sentence only when the adjusted score strictly clears the
//! confidence threshold — finding nothing is a normal outcome, not an error.

use tracing::debug;

use crate::citation::segment::split_sentences;
use crate::citation::similarity::calculate_similarity;
use crate::citation::types::{Match, Source};
use crate::config::CitationConfig;

/// Find, for each source, the sentence of `content` that best supports it.
///
/// Sources are processed in input order; the returned matches are sorted
/// ascending by `start`, which is the order citations will be inserted in
/// (citation numbers may therefore appear out of numeric sequence in the
/// annotated text — that is intended, the number always identifies the
/// source, not the insertion order).
///
/// By default each source searches the whole text independently and two
/// sources may cite the same sentence. With
/// [`CitationConfig::advance_floor`] set, each source only considers
/// sentences starting at or after the previous match's end.
pub fn find_citation_positions(
    content: &str,
    sources: &[Source],
    config: &CitationConfig,
) -> Vec<Match> {
    if content.is_empty() || sources.is_empty() {
        return Vec::new();
    }

    let sentences = split_sentences(content, config.min_sentence_chars);
    debug!(
        sources = sources.len(),
        sentences = sentences.len(),
        "matching sources against answer sentences"
    );

    let mut matches: Vec<Match> = Vec::new();
    let mut floor = 0;

    for (source_index, source) in sources.iter().enumerate() {
        let relevance = relevance_or_default(source.relevance, config.default_relevance);

        // First strict improvement wins, so the earliest sentence is kept on
        // score ties.
        let mut best: Option<(usize, f64)> = None;
        for (i, sentence) in sentences.iter().enumerate() {
            if config.advance_floor && sentence.start < floor {
                continue;
            }
            let score = calculate_similarity(sentence.text, &source.content, config) * relevance;
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((i, score));
            }
        }

        match best {
            Some((i, score)) if score > config.min_confidence => {
                let sentence = sentences[i];
                debug!(source_index, score, start = sentence.start, "source matched");
                matches.push(Match {
                    source_index,
                    start: sentence.start,
                    end: sentence.end,
                    confidence: score,
                    matched_text: sentence.text.to_string(),
                });
                if config.advance_floor {
                    floor = sentence.end;
                }
            }
            _ => debug!(source_index, "no sentence cleared the confidence threshold"),
        }
    }

    // Left-to-right insertion order. Stable, so equal starts keep source order.
    matches.sort_by_key(|m| m.start);
    matches
}

/// A relevance of zero, negative, or NaN means the caller didn't supply one.
fn relevance_or_default(relevance: f64, default: f64) -> f64 {
    if relevance.is_finite() && relevance > 0.0 {
        relevance
    } else {
        default
    }
}
