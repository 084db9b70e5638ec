//! Citation marker insertion.
//!
//! Splices `[n]` markers into the answer text at match end positions,
//! nudging each insertion point to sit immediately after nearby
//! sentence-ending punctuation. Insertion proceeds from the end of the string
//! toward the beginning so earlier byte offsets stay valid as the string
//! grows.

use crate::citation::types::Match;
use crate::config::CitationConfig;

/// Insert a `[source_index + 1]` marker for every match. Returns `content`
/// unchanged when `matches` is empty.
///
/// The inserter does not validate `source_index` — markers referencing a
/// source that doesn't exist are the rendering layer's problem. Positions
/// are clamped to the string and snapped to character boundaries so
/// caller-supplied offsets cannot cause a panic.
pub fn insert_citations(content: &str, matches: &[Match], config: &CitationConfig) -> String {
    if matches.is_empty() {
        return content.to_string();
    }

    let mut ordered: Vec<&Match> = matches.iter().collect();
    ordered.sort_by(|a, b| b.end.cmp(&a.end));

    let mut annotated = content.to_string();
    for m in ordered {
        let marker = format!("[{}]", m.source_index + 1);
        let mut pos = m.end.min(annotated.len());
        while !annotated.is_char_boundary(pos) {
            pos -= 1;
        }
        let pos = insertion_point(&annotated, pos, config.punctuation_window);
        annotated.insert_str(pos, &marker);
    }

    annotated
}

/// Prefer to insert right after sentence-ending punctuation: look `window`
/// characters to each side of `pos` and, if the first terminal punctuation
/// character found ends within `window` characters of `pos`, move there.
fn insertion_point(text: &str, pos: usize, window: usize) -> usize {
    let lo = back_by_chars(text, pos, window);
    let hi = forward_by_chars(text, pos, window);

    for (i, c) in text[lo..hi].char_indices() {
        if matches!(c, '.' | '!' | '?') {
            let after = lo + i + c.len_utf8();
            if char_distance(text, after, pos) <= window {
                return after;
            }
            // Only the first terminal character in the window is considered.
            break;
        }
    }
    pos
}

/// Byte offset `n` characters before `pos`, clamped to the string start.
fn back_by_chars(text: &str, pos: usize, n: usize) -> usize {
    text[..pos]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(pos, |(i, _)| i)
}

/// Byte offset `n` characters after `pos`, clamped to the string end.
fn forward_by_chars(text: &str, pos: usize, n: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(i, _)| pos + i)
}

fn char_distance(text: &str, a: usize, b: usize) -> usize {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    text[lo..hi].chars().count()
}
