//! Splitting a label into plain and highlighted pieces, the way autocomplete
//! suggestions bold the part the user typed.

use crate::{
    finder::RangeFinder,
    normalizer::NormalizeError,
    range::MatchRange,
    unicode::char_bounds,
};
use std::sync::LazyLock;
use thiserror::Error;

static DEFAULT_HIGHLIGHTER: LazyLock<Highlighter> = LazyLock::new(Highlighter::default);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    #[error("range {range} exceeds text of {len} characters")]
    OutOfBounds { range: MatchRange, len: usize },
}

/// A borrowed piece of the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

impl<'a> Segment<'a> {
    const fn plain(text: &'a str) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }

    const fn marked(text: &'a str) -> Self {
        Self {
            text,
            highlighted: true,
        }
    }
}

/// Sort and merge ranges that overlap or touch.
pub fn merge_ranges(ranges: &[MatchRange]) -> Vec<MatchRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<MatchRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start() <= last.end() => {
                if range.end() > last.end() {
                    // start < end holds: last.start <= range.start < range.end
                    *last = MatchRange::spanning(last.start(), range.end() - last.start());
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Split `text` at the given character ranges (merged first).
pub fn segments<'a>(
    text: &'a str,
    ranges: &[MatchRange],
) -> Result<Vec<Segment<'a>>, HighlightError> {
    let bounds = char_bounds(text);
    let len = bounds.len() - 1;
    if let Some(&range) = ranges.iter().find(|r| r.end() > len) {
        return Err(HighlightError::OutOfBounds { range, len });
    }
    Ok(split(text, &bounds, &merge_ranges(ranges)))
}

/// `merged` must be sorted, disjoint and within `bounds`.
fn split<'a>(text: &'a str, bounds: &[usize], merged: &[MatchRange]) -> Vec<Segment<'a>> {
    let len = bounds.len() - 1;
    let mut out = Vec::with_capacity(merged.len() * 2 + 1);
    let mut cursor = 0;
    for range in merged {
        if range.start() > cursor {
            out.push(Segment::plain(&text[bounds[cursor]..bounds[range.start()]]));
        }
        out.push(Segment::marked(&text[bounds[range.start()]..bounds[range.end()]]));
        cursor = range.end();
    }
    if cursor < len {
        out.push(Segment::plain(&text[bounds[cursor]..]));
    }
    out
}

/// Finds terms in a label and splits it for display.
///
/// Always works on the original label's characters, whatever the
/// normalization did to their count.
#[derive(Debug, Default)]
pub struct Highlighter {
    finder: RangeFinder,
}

impl Highlighter {
    /// Fails when the finder's normalizer cannot track offsets.
    pub fn new(finder: RangeFinder) -> Result<Self, NormalizeError> {
        finder.normalizer().normalize_with_offsets("")?;
        Ok(Self { finder })
    }

    /// Merged ranges of `label` characters to highlight.
    pub fn ranges(&self, search_terms: &str, label: &str) -> Vec<MatchRange> {
        merge_ranges(&self.finder.find_in_original_unchecked(search_terms, label))
    }

    pub fn highlight<'a>(&self, search_terms: &str, label: &'a str) -> Vec<Segment<'a>> {
        let merged = self.ranges(search_terms, label);
        split(label, &char_bounds(label), &merged)
    }

    /// Wrap every highlighted piece in `open` / `close`.
    pub fn render(&self, search_terms: &str, label: &str, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(label.len() + 16);
        for segment in self.highlight(search_terms, label) {
            if segment.highlighted {
                out.push_str(open);
                out.push_str(segment.text);
                out.push_str(close);
            } else {
                out.push_str(segment.text);
            }
        }
        out
    }
}

/// [`Highlighter::highlight`] with the default search normalization.
pub fn highlight<'a>(search_terms: &str, label: &'a str) -> Vec<Segment<'a>> {
    DEFAULT_HIGHLIGHTER.highlight(search_terms, label)
}

/// [`Highlighter::render`] with the default search normalization.
pub fn render(search_terms: &str, label: &str, open: &str, close: &str) -> String {
    DEFAULT_HIGHLIGHTER.render(search_terms, label, open, close)
}
