//! src/stage/remove_diacritics.rs
//!
//! Removes diacritical marks using NFD (Canonical Decomposition).

use crate::stage::{CharBuf, CharMapper, Stage, apply_char_mapper};
use std::borrow::Cow;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Removes every combining mark (General Category `M`: Mn, Mc, Me) after
/// canonical decomposition, for all scripts.
///
/// # Normalization Form
///
/// Each character is decomposed with **NFD** and its marks are dropped:
/// - Precomposed characters lose their accents: `é` → `e`, `ǖ` → `u`
/// - Standalone combining marks disappear: `e\u{301}` → `e`
/// - **Ligatures preserved**: `ﬁ` remains `ﬁ` (that is compatibility, not canonical)
/// - **Hangul decomposed**: `한` becomes its three conjoining jamo, none of
///   which is a mark, so `하` matches the start of `한`
/// - Letters with a built-in stroke have no decomposition: `ø`, `ł`, `đ` stay
///
/// The mapping never looks at neighbouring characters, so the stage is a
/// [`CharMapper`] and supports offset tracking.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveDiacritics;

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return false;
        }
        text.chars().any(|c| !self.is_identity(c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.is_ascii() {
            return text;
        }
        apply_char_mapper(self, text)
    }

    #[inline]
    fn as_char_mapper(&self) -> Option<&dyn CharMapper> {
        Some(self)
    }
}

impl CharMapper for RemoveDiacritics {
    #[inline]
    fn map_into(&self, c: char, out: &mut CharBuf) {
        if c.is_ascii() {
            out.push(c);
            return;
        }
        if is_combining_mark(c) {
            return;
        }
        out.extend(std::iter::once(c).nfd().filter(|&d| !is_combining_mark(d)));
    }

    #[inline]
    fn is_identity(&self, c: char) -> bool {
        if c.is_ascii() {
            return true;
        }
        let mut buf = CharBuf::new();
        self.map_into(c, &mut buf);
        buf.as_slice() == [c]
    }
}

// ============================================================================
// Tests
// ============================================================================
