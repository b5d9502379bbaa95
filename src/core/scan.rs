//! Positional marker scanning over raw page text.
//!
//! These primitives pull substrings out of a document by locating literal
//! marker strings in sequence. All searches are case-sensitive, first-match,
//! left-to-right; a missing marker yields an empty string, never an error.

/// Returns the trimmed remainder of `text` after the first occurrence of
/// `marker`, or `""` if the marker is absent.
pub fn section_after<'a>(text: &'a str, marker: &str) -> &'a str {
    match text.find(marker) {
        Some(pos) => text[pos + marker.len()..].trim(),
        None => "",
    }
}

/// Returns the trimmed text strictly between the first occurrence of `start`
/// and the first occurrence of `end` after it. The `end` search begins at the
/// byte immediately following the matched `start`, not at the beginning of
/// `text`. Adjacent markers yield an empty string, which is valid.
pub fn between<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let Some(start_pos) = text.find(start) else {
        return "";
    };
    let content_start = start_pos + start.len();
    match text[content_start..].find(end) {
        Some(rel) => text[content_start..content_start + rel].trim(),
        None => "",
    }
}

/// [`between`], scoped to the first occurrence of `context`. The scope starts
/// at the context marker rather than after it, so a start marker that shares
/// trailing characters with the context can still match.
pub fn between_after_context<'a>(
    text: &'a str,
    context: &str,
    start: &str,
    end: &str,
) -> &'a str {
    match text.find(context) {
        Some(pos) => between(&text[pos..], start, end),
        None => "",
    }
}

/// [`between`], scoped to just past the first occurrence of `second` that
/// follows the end of the first occurrence of `first`.
pub fn between_after_two_contexts<'a>(
    text: &'a str,
    first: &str,
    second: &str,
    start: &str,
    end: &str,
) -> &'a str {
    let Some(first_pos) = text.find(first) else {
        return "";
    };
    let search_from = first_pos + first.len();
    match text[search_from..].find(second) {
        Some(rel) => between(&text[search_from + rel + second.len()..], start, end),
        None => "",
    }
}

/// One extraction rule: up to two context markers that narrow the scope plus
/// a mandatory start/end marker pair. Context markers are never part of the
/// extracted result.
#[derive(Debug, Clone, Copy)]
pub enum MarkerSpec {
    Between {
        start: &'static str,
        end: &'static str,
    },
    AfterContext {
        context: &'static str,
        start: &'static str,
        end: &'static str,
    },
    AfterTwoContexts {
        first: &'static str,
        second: &'static str,
        start: &'static str,
        end: &'static str,
    },
}

impl MarkerSpec {
    pub fn extract<'a>(&self, text: &'a str) -> &'a str {
        match *self {
            MarkerSpec::Between { start, end } => between(text, start, end),
            MarkerSpec::AfterContext {
                context,
                start,
                end,
            } => between_after_context(text, context, start, end),
            MarkerSpec::AfterTwoContexts {
                first,
                second,
                start,
                end,
            } => between_after_two_contexts(text, first, second, start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_extracts_first_match() {
        assert_eq!(between("A<<X>>B", "<<", ">>"), "X");
        assert_eq!(between("A<<X>>B<<Y>>C", "<<", ">>"), "X");
    }

    #[test]
    fn test_between_missing_start_marker() {
        assert_eq!(between("no markers here", "<<", ">>"), "");
    }

    #[test]
    fn test_between_end_marker_only_before_start() {
        // The end search begins after the matched start, so an earlier end
        // marker must not count.
        assert_eq!(between(">>A<<B", "<<", ">>"), "");
    }

    #[test]
    fn test_between_adjacent_markers_yield_empty() {
        assert_eq!(between("a<<>>b", "<<", ">>"), "");
    }

    #[test]
    fn test_between_trims_whitespace() {
        assert_eq!(between("[  padded value\n]", "[", "]"), "padded value");
    }

    #[test]
    fn test_section_after() {
        assert_eq!(section_after("foo id=\"x\" bar", "id=\"x\""), "bar");
        assert_eq!(section_after("foo bar", "id=\"x\""), "");
    }

    #[test]
    fn test_between_after_context_scope_includes_context() {
        // "opens at" overlaps the trailing characters of the context marker;
        // the scope starts at the context, not after it.
        let text = "intro Call opens at 9:00< rest";
        assert_eq!(
            between_after_context(text, "Call opens", "opens at", "<"),
            "9:00"
        );
    }

    #[test]
    fn test_between_after_context_missing_context() {
        assert_eq!(between_after_context("a<b>c</b>", "ctx", "<b>", "</b>"), "");
    }

    #[test]
    fn test_between_after_context_skips_earlier_matches() {
        let text = "<b>first</b> label <b>second</b>";
        assert_eq!(
            between_after_context(text, "label", "<b>", "</b>"),
            "second"
        );
    }

    #[test]
    fn test_between_after_two_contexts() {
        let text = "first <x>0</x> second <x>1</x>";
        assert_eq!(
            between_after_two_contexts(text, "first", "second", "<x>", "</x>"),
            "1"
        );
    }

    #[test]
    fn test_between_after_two_contexts_requires_order() {
        // The second context occurs only before the first; result is empty.
        let text = "second first <x>1</x>";
        assert_eq!(
            between_after_two_contexts(text, "first", "second", "<x>", "</x>"),
            ""
        );
    }

    #[test]
    fn test_between_after_two_contexts_missing_markers() {
        let text = "first second <x>1</x>";
        assert_eq!(
            between_after_two_contexts(text, "absent", "second", "<x>", "</x>"),
            ""
        );
        assert_eq!(
            between_after_two_contexts(text, "first", "absent", "<x>", "</x>"),
            ""
        );
    }

    #[test]
    fn test_marker_spec_dispatch() {
        let text = "ctx <b>value</b>";
        let spec = MarkerSpec::AfterContext {
            context: "ctx",
            start: "<b>",
            end: "</b>",
        };
        assert_eq!(spec.extract(text), "value");

        let spec = MarkerSpec::Between {
            start: "<b>",
            end: "</b>",
        };
        assert_eq!(spec.extract(text), "value");
    }
}
