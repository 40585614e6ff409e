//! Line rewriter: the single decision point of the whole pipeline.

use crate::pipeline::mapping::ReplacementMap;

/// Rewrite one line of drawing text against the mapping.
///
/// Evaluated in this priority order:
///
/// 1. Whole-line match: if the trimmed line exactly equals a key, the entire
///    line becomes that key's value. Surrounding whitespace is discarded, not
///    preserved.
/// 2. Substring fallback: every entry is applied in map order as a literal
///    replace-all over the unstripped line. Replacements accumulate, so text
///    produced by an earlier entry is visible to later entries. Cascading is
///    intentional; callers order the map accordingly.
///
/// A line matching nothing is returned unchanged, whitespace intact. Pure and
/// total: no side effects, never fails.
pub fn rewrite_line(line: &str, map: &ReplacementMap) -> String {
    if let Some(replacement) = map.get(line.trim()) {
        return replacement.to_string();
    }

    let mut rewritten = line.to_string();
    for (original, replacement) in map.iter() {
        if rewritten.contains(original) {
            rewritten = rewritten.replace(original, replacement);
        }
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(pairs: &[(&str, &str)]) -> ReplacementMap {
        let mut map = ReplacementMap::new();
        for (original, replacement) in pairs {
            map.insert(*original, *replacement);
        }
        map
    }

    #[test]
    fn test_whole_line_match_discards_whitespace() {
        let map = map_of(&[("OLD_NAME", "NEW_NAME")]);
        assert_eq!(rewrite_line("  OLD_NAME  ", &map), "NEW_NAME");
    }

    #[test]
    fn test_whole_line_takes_priority_over_substring() {
        // Rule 1 returns the value verbatim; the fallback never runs on it.
        let map = map_of(&[("OLD", "TEXT OLD")]);
        assert_eq!(rewrite_line("OLD", &map), "TEXT OLD");
    }

    #[test]
    fn test_substring_replaces_all_occurrences() {
        let map = map_of(&[("AB", "x")]);
        assert_eq!(rewrite_line("AB one AB two AB", &map), "x one x two x");
    }

    #[test]
    fn test_cascading_replacement() {
        // A -> B, then the rescan finds the freshly written B.
        let map = map_of(&[("A", "B"), ("B", "C")]);
        assert_eq!(rewrite_line("A A", &map), "C C");
    }

    #[test]
    fn test_order_sensitivity() {
        let map = map_of(&[("B", "C"), ("A", "B")]);
        assert_eq!(rewrite_line("A A", &map), "B B");
    }

    #[test]
    fn test_no_match_passes_through_unchanged() {
        let map = map_of(&[("OLD", "NEW")]);
        assert_eq!(rewrite_line("  untouched line  ", &map), "  untouched line  ");
    }

    #[test]
    fn test_blank_line_passes_through() {
        let map = map_of(&[("OLD", "NEW")]);
        assert_eq!(rewrite_line("", &map), "");
        assert_eq!(rewrite_line("   ", &map), "   ");
    }

    #[test]
    fn test_empty_map_is_identity() {
        let map = ReplacementMap::new();
        assert_eq!(rewrite_line("anything at all", &map), "anything at all");
    }
}
