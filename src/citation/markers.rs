//! Parsing of `[n]` citation markers out of annotated text.
//!
//! The rendering layer splits annotated answers into plain text and citation
//! segments, then maps each marker number back to its source. Out-of-range
//! numbers resolve to nothing and render as plain text — this module never
//! fails on malformed input.

use crate::citation::types::Source;

/// One piece of an annotated answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSegment<'a> {
    /// A run of plain text, possibly empty markers or stray brackets.
    Text(&'a str),
    /// A well-formed `[n]` marker. `number` is the 1-based citation number;
    /// `raw` is the marker text including brackets.
    Citation { number: usize, raw: &'a str },
}

/// Split annotated text into alternating text and citation segments.
///
/// A citation segment is exactly `[` + one or more ASCII digits + `]`.
/// Anything else (unclosed brackets, `[]`, `[12x]`, numbers too large for
/// `usize`) stays inside the surrounding text segment.
pub fn parse_markers(text: &str) -> Vec<MarkerSegment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'[' {
            i += 1;
            continue;
        }
        let digits_start = i + 1;
        let mut j = digits_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let is_marker = j > digits_start && j < bytes.len() && bytes[j] == b']';
        if !is_marker {
            i += 1;
            continue;
        }
        match text[digits_start..j].parse::<usize>() {
            Ok(number) => {
                if text_start < i {
                    segments.push(MarkerSegment::Text(&text[text_start..i]));
                }
                segments.push(MarkerSegment::Citation {
                    number,
                    raw: &text[i..j + 1],
                });
                i = j + 1;
                text_start = i;
            }
            // Overflowing digit runs stay plain text.
            Err(_) => i = j + 1,
        }
    }

    if text_start < text.len() {
        segments.push(MarkerSegment::Text(&text[text_start..]));
    }
    segments
}

/// All citation numbers appearing in annotated text, in text order.
/// Duplicates are kept.
pub fn citation_numbers(text: &str) -> Vec<usize> {
    parse_markers(text)
        .iter()
        .filter_map(|segment| match segment {
            MarkerSegment::Citation { number, .. } => Some(*number),
            MarkerSegment::Text(_) => None,
        })
        .collect()
}

/// Resolve a 1-based citation number to its source. `None` for zero or
/// out-of-range numbers — the renderer shows those markers as plain text.
pub fn resolve_marker(number: usize, sources: &[Source]) -> Option<&Source> {
    number.checked_sub(1).and_then(|index| sources.get(index))
}
