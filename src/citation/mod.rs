//! The citation engine: sentence segmentation, similarity scoring, best-match
//! selection, marker insertion, and marker parsing.
//!
//! [`find_citation_positions`] and [`insert_citations`] are the two public
//! operations; [`annotate`] composes them. All of them are pure functions of
//! their arguments.

pub mod insert;
pub mod markers;
pub mod matcher;
pub mod segment;
pub mod similarity;
pub mod types;

pub use insert::insert_citations;
pub use markers::{citation_numbers, parse_markers, resolve_marker, MarkerSegment};
pub use matcher::find_citation_positions;
pub use similarity::calculate_similarity;
pub use types::{AnswerPayload, Match, Source};

use crate::config::CitationConfig;

/// An answer with citation markers spliced in, plus the matches that
/// produced them.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Annotated {
    pub text: String,
    pub matches: Vec<Match>,
}

/// Run the full pipeline: find each source's best sentence, then insert
/// `[n]` markers. Degenerate input (empty answer, empty sources, nothing
/// matching) yields the answer text unchanged with no matches.
pub fn annotate(content: &str, sources: &[Source], config: &CitationConfig) -> Annotated {
    let matches = find_citation_positions(content, sources, config);
    let text = insert_citations(content, &matches, config);
    Annotated { text, matches }
}

/// [`annotate`] for the backend's `{answer, sources}` envelope.
pub fn annotate_answer(payload: &AnswerPayload, config: &CitationConfig) -> Annotated {
    annotate(&payload.answer, &payload.sources, config)
}
