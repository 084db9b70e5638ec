mod helpers;

use helpers::config;
use neurocite::citation::{insert_citations, Match};

fn match_at(source_index: usize, start: usize, end: usize) -> Match {
    Match {
        source_index,
        start,
        end,
        confidence: 0.8,
        matched_text: String::new(),
    }
}

#[test]
fn no_matches_returns_content_verbatim() {
    for content in ["", "Plain answer with no citations."] {
        assert_eq!(insert_citations(content, &[], &config()), content);
    }
}

#[test]
fn synthetic_offsets_grow_by_exactly_two_markers() {
    // No punctuation anywhere near the boundaries, so insertion happens
    // exactly at each end offset.
    let content = "w".repeat(250);
    let matches = vec![match_at(0, 50, 80), match_at(1, 150, 180)];
    let annotated = insert_citations(&content, &matches, &config());

    assert!(annotated.contains("[1]"));
    assert!(annotated.contains("[2]"));
    assert_eq!(annotated.len(), content.len() + 6);
}

#[test]
fn every_match_yields_its_marker() {
    let content = "First source sentence sits here. Second source sentence sits here. \
                   Third source sentence sits here.";
    let matches = vec![
        match_at(0, 0, 32),
        match_at(1, 33, 67),
        match_at(2, 68, content.len()),
    ];
    let annotated = insert_citations(content, &matches, &config());
    for number in 1..=3 {
        assert!(
            annotated.contains(&format!("[{number}]")),
            "missing marker [{number}] in {annotated:?}"
        );
    }
}

#[test]
fn output_never_shrinks() {
    let content = "Some answer text long enough to carry a citation or two in it.";
    let annotated = insert_citations(content, &[match_at(0, 0, 30)], &config());
    assert!(annotated.len() >= content.len() + 3);
}

#[test]
fn markers_prefer_sentence_boundaries() {
    let content = "Models analyze patient data. Providers adopt them quickly.";
    let first_period = content.find('.').unwrap();
    // End offset lands mid-word shortly after the period; the marker should
    // snap back to just after the punctuation.
    let annotated = insert_citations(content, &[match_at(0, 0, first_period + 5)], &config());
    assert!(annotated.starts_with("Models analyze patient data.[1]"));
}

#[test]
fn unvalidated_source_index_still_renders() {
    // The inserter does not bounds-check source indexes; [7] lands in the
    // text and the rendering layer decides what to do with it.
    let content = "An answer with exactly one sentence in it.";
    let annotated = insert_citations(content, &[match_at(6, 0, content.len())], &config());
    assert!(annotated.contains("[7]"));
}
