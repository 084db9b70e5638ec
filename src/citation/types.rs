//! Core citation type definitions.
//!
//! Defines [`Source`] (a retrieved passage as the backend returns it),
//! [`Match`] (the engine's association between a source and a sentence span),
//! and [`AnswerPayload`] (the `{answer, sources}` envelope from the chat
//! endpoint).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A retrieved source passage, eligible for a citation number equal to its
/// 1-based position in the caller-supplied list.
///
/// Only `content` and `relevance` participate in matching; the remaining
/// fields are carried through so a backend payload round-trips without loss.
/// Missing fields deserialize to empty/zero values and simply fail to match —
/// a malformed source is never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub id: String,
    /// The passage text matched against answer sentences.
    #[serde(default)]
    pub content: String,
    /// Caller-supplied prior weight in `[0.0, 1.0]`. Zero, negative, or
    /// non-finite values are treated as unset.
    #[serde(default)]
    pub relevance: f64,
    /// Origin category, e.g. `"summary"` or `"stored_conversation"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Human-readable origin label.
    #[serde(default)]
    pub source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Source {
    /// Build a source from passage text and a relevance weight. Convenient
    /// for callers that only care about the matching fields.
    pub fn new(content: impl Into<String>, relevance: f64) -> Self {
        Self {
            id: String::new(),
            content: content.into(),
            relevance,
            kind: String::new(),
            source_name: String::new(),
            timestamp: None,
        }
    }
}

/// The engine's computed association between one source and the sentence of
/// the answer that best supports it.
///
/// `start` and `end` are byte offsets into the original answer text, always
/// on character boundaries, with `matched_text == &content[start..end]`.
/// `confidence` is the relevance-adjusted similarity score and always lies
/// strictly above the configured threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// 0-based index into the input source list. Citation number is
    /// `source_index + 1`.
    pub source_index: usize,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
    pub matched_text: String,
}

/// The `{answer, sources}` envelope returned by the assistant's chat
/// endpoint — the full input to the citation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerPayload {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl AnswerPayload {
    /// Decode a chat response body. Unknown fields are ignored.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("failed to decode answer payload JSON")
    }
}
