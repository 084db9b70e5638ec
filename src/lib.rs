//! Citation grounding for AI memory assistants.
//!
//! Neurocite takes model-generated answer text plus the ordered list of
//! retrieved source passages that informed it, figures out which sentence of
//! the answer each source best supports, and splices bracketed citation
//! markers (`[1]`, `[2]`, ...) into the text. A source's citation number is
//! its 1-based position in the caller-supplied list.
//!
//! The pipeline is two pure, synchronous steps:
//!
//! 1. [`citation::find_citation_positions`] — score every (source, sentence)
//!    pair and keep each source's best sentence, if it clears the confidence
//!    threshold.
//! 2. [`citation::insert_citations`] — splice `[n]` markers into the answer,
//!    preferring to land immediately after sentence-ending punctuation.
//!
//! Both steps are composed by [`citation::annotate`]. Neither performs I/O,
//! holds state across calls, or mutates its inputs, so they can be invoked
//! concurrently without coordination.
//!
//! # Modules
//!
//! - [`config`] — Tunable matching thresholds, loadable from TOML files and
//!   environment variables
//! - [`citation`] — Sentence segmentation, similarity scoring, match
//!   selection, marker insertion, and marker parsing

pub mod citation;
pub mod config;
