//! Accent- and case-insensitive match ranges for autocomplete highlighting.
//!
//! ```
//! use matchlight::{find_match_ranges, normalize};
//!
//! assert_eq!(normalize("Pâtissière"), "patissiere");
//!
//! let ranges = find_match_ranges("pat ière", "Pâtissière");
//! let spans: Vec<_> = ranges.iter().map(|r| r.as_range()).collect();
//! assert_eq!(spans, [0..3, 6..10]);
//! ```

pub mod error;
pub mod finder;
pub mod highlight;
pub mod normalizer;
pub mod offsets;
pub mod pipeline;
pub mod range;
pub mod stage;
pub mod unicode;

#[cfg(test)]
mod testing;

use std::{borrow::Cow, sync::LazyLock};

pub use error::{MatchlightError, Result};
pub use finder::{RangeFinder, find_match_ranges};
pub use highlight::{
    HighlightError, Highlighter, Segment, highlight, merge_ranges, render, segments,
};
pub use normalizer::{NormalizeError, Normalizer, NormalizerBuilder, preset};
pub use offsets::OffsetText;
pub use range::{MatchRange, RangeError};
pub use stage::lower_case::LowerCase;
pub use stage::normalization::{NFC, NFKC, NfcStage, NfkcStage};
pub use stage::remove_diacritics::RemoveDiacritics;

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(preset::search);

/// Strip diacritics (NFD, then drop every combining mark) and lower-case.
///
/// Total over all strings; borrows `input` when it is already normalized.
///
/// ```
/// assert_eq!(matchlight::normalize("AaBbCc"), "aabbcc");
/// assert_eq!(matchlight::normalize("àéïôü"), "aeiou");
/// ```
pub fn normalize(input: &str) -> Cow<'_, str> {
    DEFAULT_NORMALIZER.normalize(input)
}

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
