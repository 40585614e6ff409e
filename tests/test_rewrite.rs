//! Integration tests for the line rewrite rules

use retag::pipeline::{rewrite_line, ReplacementMap};

fn map_of(rules: &[(&str, &str)]) -> ReplacementMap {
    let mut map = ReplacementMap::new();
    for (original, replacement) in rules {
        map.insert(*original, *replacement);
    }
    map
}

#[test]
fn test_whole_line_match_returns_replacement_verbatim() {
    let map = map_of(&[("OLD_NAME", "NEW_NAME")]);
    assert_eq!(rewrite_line("OLD_NAME", &map), "NEW_NAME");
}

#[test]
fn test_whole_line_match_ignores_surrounding_whitespace() {
    let map = map_of(&[("OLD_NAME", "NEW_NAME")]);
    // The surrounding whitespace is discarded, not preserved
    assert_eq!(rewrite_line("  OLD_NAME  ", &map), "NEW_NAME");
}

#[test]
fn test_whole_line_match_beats_substring_rules() {
    let map = map_of(&[("TITLE", "HEADER"), ("TITLE BLOCK", "NAME PLATE")]);
    // "TITLE BLOCK" matches a whole-line rule, so the "TITLE" substring
    // rule never runs against it
    assert_eq!(rewrite_line("TITLE BLOCK", &map), "NAME PLATE");
}

#[test]
fn test_substring_replaces_all_occurrences() {
    let map = map_of(&[("OLD", "NEW")]);
    assert_eq!(rewrite_line("xOLDyOLDz", &map), "xNEWyNEWz");
}

#[test]
fn test_substring_rules_cascade_in_order() {
    let map = map_of(&[("A", "B"), ("B", "C")]);
    // The first rule's output feeds the second rule
    assert_eq!(rewrite_line("A A", &map), "C C");
}

#[test]
fn test_substring_rules_are_order_sensitive() {
    let reversed = map_of(&[("B", "C"), ("A", "B")]);
    assert_eq!(rewrite_line("A A", &reversed), "B B");
}

#[test]
fn test_unmatched_line_passes_through() {
    let map = map_of(&[("OLD", "NEW")]);
    assert_eq!(rewrite_line("untouched text", &map), "untouched text");
}

#[test]
fn test_blank_line_passes_through() {
    let map = map_of(&[("OLD", "NEW")]);
    assert_eq!(rewrite_line("", &map), "");
}

#[test]
fn test_empty_map_is_identity() {
    let map = ReplacementMap::new();
    assert_eq!(rewrite_line("TEXT OLD_NAME HERE", &map), "TEXT OLD_NAME HERE");
}

#[test]
fn test_replacement_containing_original_does_not_loop() {
    let map = map_of(&[("REV", "REV A")]);
    // str::replace scans left to right over the original text only
    assert_eq!(rewrite_line("SEE REV", &map), "SEE REV A");
}
