use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMatch<'a> {
    pub option: &'a str,
    /// Byte ranges of `option` that matched the query.
    pub highlights: Vec<Range<usize>>,
}

impl<'a> OptionMatch<'a> {
    /// Splits the option into `(text, highlighted)` runs for rendering.
    pub fn parts(&self) -> Vec<(&'a str, bool)> {
        let mut parts = Vec::new();
        let mut cursor = 0;
        for r in &self.highlights {
            if r.start > cursor {
                parts.push((&self.option[cursor..r.start], false));
            }
            parts.push((&self.option[r.clone()], true));
            cursor = r.end;
        }
        if cursor < self.option.len() {
            parts.push((&self.option[cursor..], false));
        }
        parts
    }
}

/// Highlight ranges for `query` in `option`. Each whitespace-separated query
/// word marks its first case-insensitive occurrence that starts a word of
/// `option`; matches inside a word are not highlighted.
pub fn match_ranges(option: &str, query: &str) -> Vec<Range<usize>> {
    // ASCII lowercasing keeps byte offsets aligned with the option text.
    let haystack = option.to_ascii_lowercase();
    let bytes = haystack.as_bytes();

    let mut ranges: Vec<Range<usize>> = Vec::new();
    for word in query.split_whitespace() {
        let needle = word.to_ascii_lowercase();
        let hit = haystack.match_indices(needle.as_str()).find(|&(start, _)| {
            let at_word_start = start == 0 || bytes[start - 1].is_ascii_whitespace();
            let end = start + needle.len();
            at_word_start && !ranges.iter().any(|r| start < r.end && r.start < end)
        });
        if let Some((start, _)) = hit {
            ranges.push(start..start + needle.len());
        }
    }

    ranges.sort_by_key(|r| r.start);
    ranges
}

/// Options containing `query` anywhere, case-insensitively, with word-start
/// highlights for rendering.
pub fn filter_options<'a>(options: &[&'a str], query: &str) -> Vec<OptionMatch<'a>> {
    let needle = query.trim().to_ascii_lowercase();

    options
        .iter()
        .filter(|option| option.to_ascii_lowercase().contains(&needle))
        .map(|&option| OptionMatch {
            option,
            highlights: match_ranges(option, query),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::settings::ITEMS_FOR_QUEST;

    #[test]
    fn empty_query_keeps_everything() {
        let all = filter_options(&ITEMS_FOR_QUEST, "  ");
        assert_eq!(all.len(), ITEMS_FOR_QUEST.len());
        assert!(all.iter().all(|m| m.highlights.is_empty()));
    }

    #[test]
    fn query_filters_case_insensitively() {
        let hits = filter_options(&ITEMS_FOR_QUEST, "FEATHER");
        let names: Vec<&str> = hits.iter().map(|m| m.option).collect();
        assert_eq!(names, vec!["Satin Feather", "Zephyr Feather"]);
        assert_eq!(hits[0].highlights, vec![6..13]);
    }

    #[test]
    fn parts_split_around_highlights() {
        let hits = filter_options(&["Flying Sprout"], "sprout");
        assert_eq!(hits[0].parts(), vec![("Flying ", false), ("Sprout", true)]);

        let two_words = OptionMatch {
            option: "Satin Feather",
            highlights: match_ranges("Satin Feather", "fea sa"),
        };
        assert_eq!(
            two_words.parts(),
            vec![("Sa", true), ("tin ", false), ("Fea", true), ("ther", false)]
        );
    }

    #[test]
    fn mid_word_match_filters_but_is_not_highlighted() {
        let hits = filter_options(&ITEMS_FOR_QUEST, "eather");
        let names: Vec<&str> = hits.iter().map(|m| m.option).collect();
        assert_eq!(names, vec!["Satin Feather", "Zephyr Feather"]);
        assert!(hits.iter().all(|m| m.highlights.is_empty()));
        assert_eq!(hits[0].parts(), vec![("Satin Feather", false)]);
    }

    #[test]
    fn no_match_drops_option() {
        assert!(filter_options(&ITEMS_FOR_QUEST, "zeus").is_empty());
    }
}
