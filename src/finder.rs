//! Multi-term, accent- and case-insensitive substring search.

use crate::{
    normalizer::{NormalizeError, Normalizer},
    offsets::OffsetText,
    range::MatchRange,
    unicode::{char_bounds, split_terms},
};
use memchr::memmem;
use std::sync::LazyLock;
use tracing::trace;

static DEFAULT_FINDER: LazyLock<RangeFinder> = LazyLock::new(RangeFinder::default);

/// Every occurrence of every whitespace-separated term of `search_terms` in
/// `text`, as character ranges into [`normalize(text)`](crate::normalize),
/// sorted by start.
///
/// Overlapping occurrences are all reported (`"aa"` in `"aaa"` gives
/// `[0, 2)` and `[1, 3)`), nothing is merged, and degenerate input (empty
/// text, blank terms) simply yields no ranges.
///
/// ```
/// let ranges = matchlight::find_match_ranges("A", "âáàä");
/// let spans: Vec<_> = ranges.iter().map(|r| r.as_range()).collect();
/// assert_eq!(spans, [0..1, 1..2, 2..3, 3..4]);
/// ```
pub fn find_match_ranges(search_terms: &str, text: &str) -> Vec<MatchRange> {
    DEFAULT_FINDER.find(search_terms, text)
}

/// Finds match ranges with a configurable [`Normalizer`].
#[derive(Debug, Default)]
pub struct RangeFinder {
    normalizer: Normalizer,
}

impl RangeFinder {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalized terms, in input order, duplicates kept.
    pub fn terms(&self, search_terms: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(search_terms);
        split_terms(&normalized).map(str::to_owned).collect()
    }

    /// Ranges into the normalized `text`.
    pub fn find(&self, search_terms: &str, text: &str) -> Vec<MatchRange> {
        let normalized = self.normalizer.normalize(text);
        self.find_in_normalized(search_terms, &normalized)
    }

    /// Ranges into `text` itself, mapped back through the normalization
    /// offsets so they can be painted on the label the user sees.
    pub fn find_in_original(
        &self,
        search_terms: &str,
        text: &str,
    ) -> Result<Vec<MatchRange>, NormalizeError> {
        let offsets = self.normalizer.normalize_with_offsets(text)?;
        Ok(self.map_to_original(search_terms, &offsets))
    }

    /// Callers must have checked that the normalizer tracks offsets.
    pub(crate) fn find_in_original_unchecked(
        &self,
        search_terms: &str,
        text: &str,
    ) -> Vec<MatchRange> {
        let offsets = self.normalizer.offsets_unchecked(text);
        self.map_to_original(search_terms, &offsets)
    }

    fn map_to_original(&self, search_terms: &str, offsets: &OffsetText) -> Vec<MatchRange> {
        self.find_in_normalized(search_terms, offsets.as_str())
            .into_iter()
            .filter_map(|r| offsets.to_original(r))
            .collect()
    }

    fn find_in_normalized(&self, search_terms: &str, haystack: &str) -> Vec<MatchRange> {
        if haystack.is_empty() {
            return Vec::new();
        }
        let normalized_terms = self.normalizer.normalize(search_terms);
        let terms: Vec<&str> = split_terms(&normalized_terms).collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let bounds = char_bounds(haystack);
        let mut ranges = Vec::new();
        for term in &terms {
            scan_overlapping(haystack, term, &bounds, &mut ranges);
        }
        // stable: equal starts keep term order
        ranges.sort_by_key(MatchRange::start);

        trace!(
            terms = terms.len(),
            matches = ranges.len(),
            "found match ranges"
        );
        ranges
    }
}

/// Push every occurrence of `term` in `haystack`, overlapping ones included.
/// After a hit the search resumes one character later.
fn scan_overlapping(haystack: &str, term: &str, bounds: &[usize], out: &mut Vec<MatchRange>) {
    let finder = memmem::Finder::new(term.as_bytes());
    let term_chars = term.chars().count();
    let bytes = haystack.as_bytes();

    let mut from = 0;
    while let Some(found) = finder.find(&bytes[from..]) {
        let at = from + found;
        // a match of valid UTF-8 always starts on a char boundary
        let start = bounds.partition_point(|&b| b < at);
        out.push(MatchRange::spanning(start, term_chars));
        from = at + haystack[at..].chars().next().map_or(1, char::len_utf8);
    }
}
