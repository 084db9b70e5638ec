//! Sentence segmentation over answer text.
//!
//! An explicit scanner rather than a regex: a sentence boundary is a run of
//! terminal punctuation (`.`, `!`, `?`) followed by any whitespace, and any
//! trailing text after the last boundary is emitted as a final sentence.
//! Keeping the scanner explicit keeps the offset bookkeeping honest — every
//! span it produces is a byte range on character boundaries in the original
//! string.

/// A sentence span of the answer text.
///
/// `text` is the trimmed sentence and `start`/`end` are its byte offsets in
/// the original string, so `text == &content[start..end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split `content` into sentences, dropping fragments whose trimmed text is
/// `min_chars` characters or fewer. Short fragments still advance the
/// boundary cursor — they are discarded, not merged into a neighbor.
pub fn split_sentences(content: &str, min_chars: usize) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut region_start = 0;
    let mut iter = content.char_indices().peekable();

    while let Some((_, c)) = iter.next() {
        if !is_terminal(c) {
            continue;
        }
        // Consume the rest of the punctuation run, then trailing whitespace.
        while matches!(iter.peek(), Some(&(_, p)) if is_terminal(p)) {
            iter.next();
        }
        while matches!(iter.peek(), Some(&(_, w)) if w.is_whitespace()) {
            iter.next();
        }
        let region_end = iter.peek().map_or(content.len(), |&(j, _)| j);
        push_trimmed(content, region_start, region_end, min_chars, &mut sentences);
        region_start = region_end;
    }

    // Trailing text without terminal punctuation still counts as a sentence.
    if region_start < content.len() {
        push_trimmed(content, region_start, content.len(), min_chars, &mut sentences);
    }

    sentences
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn push_trimmed<'a>(
    content: &'a str,
    start: usize,
    end: usize,
    min_chars: usize,
    out: &mut Vec<Sentence<'a>>,
) {
    let region = &content[start..end];
    let trimmed = region.trim();
    if trimmed.chars().count() <= min_chars {
        return;
    }
    let leading = region.len() - region.trim_start().len();
    let trim_start = start + leading;
    out.push(Sentence {
        text: trimmed,
        start: trim_start,
        end: trim_start + trimmed.len(),
    });
}
