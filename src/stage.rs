//! Core normalization stage abstraction.
//!
//! Every stage can transform a whole string through [`Stage::apply`], which
//! takes and returns a `Cow<str>` so that already-clean text is never copied.
//!
//! Stages that work one character at a time additionally expose a
//! [`CharMapper`] through [`Stage::as_char_mapper`]. The mapper is what lets
//! [`Normalizer::normalize_with_offsets`](crate::Normalizer::normalize_with_offsets)
//! remember which original character produced every output character.
//!
//! Stages that cannot be expressed per character (NFKC, which composes across
//! character boundaries) return `None` and only take part in whole-string
//! normalization.

pub mod lower_case;
pub mod normalization;
pub mod remove_diacritics;

use smallvec::SmallVec;
use std::borrow::Cow;

/// Output buffer for a single mapped character. Four slots cover every
/// mapping shipped with the crate without touching the heap.
pub type CharBuf = SmallVec<[char; 4]>;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for logging and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    ///
    /// Must be accurate: `false` means `apply` would return its input unchanged.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Returns the input untouched (and
    /// borrowed, if it was borrowed) when nothing changes.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;

    /// Return `self` as a [`CharMapper`] **iff** this stage maps every input
    /// character independently of its neighbours.
    #[inline]
    fn as_char_mapper(&self) -> Option<&dyn CharMapper> {
        None
    }
}

/// Per-character form of a stage.
pub trait CharMapper: Send + Sync {
    /// Push the normalized form of `c` onto `out`.
    /// Pushing nothing removes the character.
    fn map_into(&self, c: char, out: &mut CharBuf);

    /// `true` when `map_into` would emit exactly `c`.
    #[inline]
    fn is_identity(&self, c: char) -> bool {
        let mut buf = CharBuf::new();
        self.map_into(c, &mut buf);
        buf.as_slice() == [c]
    }
}

/// Run `mapper` over every character of `text`, borrowing when nothing
/// changes. Shared by the stages whose `apply` is their char mapping.
pub(crate) fn apply_char_mapper<'a, M: CharMapper + ?Sized>(
    mapper: &M,
    text: Cow<'a, str>,
) -> Cow<'a, str> {
    let Some(first) = text.char_indices().find(|&(_, c)| !mapper.is_identity(c)) else {
        return text;
    };

    let (split, _) = first;
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..split]);
    let mut buf = CharBuf::new();
    for c in text[split..].chars() {
        buf.clear();
        mapper.map_into(c, &mut buf);
        out.extend(buf.iter());
    }
    Cow::Owned(out)
}
