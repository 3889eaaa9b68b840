//! Normalized text that remembers where every character came from.
//!
//! Highlighting consumers compute ranges on the normalized label and paint
//! them on the original one. That only works when normalization keeps a 1:1
//! character correspondence, which holds for precomposed Latin letters but
//! not for decomposed input (`e\u{301}` becomes one `e`), standalone marks,
//! or Hangul syllables (one syllable becomes two or three jamo).
//! [`OffsetText`] keeps the correspondence explicitly instead.

use crate::pipeline::map_through;
use crate::range::MatchRange;
use crate::stage::{CharBuf, CharMapper};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetText {
    text: String,
    /// `origins[i]` is the index of the original character that produced
    /// normalized character `i`. Non-decreasing.
    origins: Vec<usize>,
    original_len: usize,
}

impl OffsetText {
    pub(crate) fn build(input: &str, mappers: &[&dyn CharMapper]) -> Self {
        let mut text = String::with_capacity(input.len());
        let mut origins = Vec::with_capacity(input.len());
        let mut out = CharBuf::new();
        let mut scratch = CharBuf::new();
        let mut original_len = 0;

        for (idx, c) in input.chars().enumerate() {
            original_len = idx + 1;
            map_through(mappers, c, &mut out, &mut scratch);
            for &n in out.iter() {
                text.push(n);
                origins.push(idx);
            }
        }

        Self {
            text,
            origins,
            original_len,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Length of the normalized text, in characters.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.origins.len()
    }

    /// Length of the original text, in characters.
    #[inline]
    pub fn original_len_chars(&self) -> usize {
        self.original_len
    }

    /// Index of the original character behind normalized character `index`.
    #[inline]
    pub fn origin(&self, index: usize) -> Option<usize> {
        self.origins.get(index).copied()
    }

    /// Range of original characters that produced `range` of the normalized
    /// text, extended over characters dropped right after it (combining
    /// marks), so a base letter is never split from its accents.
    /// `None` when `range` is out of bounds.
    pub fn to_original(&self, range: MatchRange) -> Option<MatchRange> {
        let start = self.origin(range.start())?;
        let last = self.origin(range.end() - 1)?;
        let next = self.origin(range.end()).unwrap_or(self.original_len);
        MatchRange::new(start, next.max(last + 1)).ok()
    }

    /// `true` when normalized character `i` came from original character `i`
    /// for every `i`, so ranges can be applied to either string unchanged.
    pub fn is_length_preserving(&self) -> bool {
        self.origins.len() == self.original_len
            && self.origins.iter().enumerate().all(|(i, &o)| i == o)
    }
}

impl AsRef<str> for OffsetText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
