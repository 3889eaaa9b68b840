use crate::{LowerCase, NFKC, RemoveDiacritics, normalizer::Normalizer};

/// Accent- and case-insensitive matching. What [`normalize`](crate::normalize)
/// and [`find_match_ranges`](crate::find_match_ranges) use.
pub fn search() -> Normalizer {
    Normalizer::builder()
        .add_stage(RemoveDiacritics)
        .add_stage(LowerCase)
        .build()
}

/// [`search`], plus compatibility folding of ligatures, full-width forms and
/// superscripts (`ﬁ` → `fi`). Cannot track offsets.
pub fn compatibility_search() -> Normalizer {
    Normalizer::builder()
        .add_stage(NFKC)
        .add_stage(RemoveDiacritics)
        .add_stage(LowerCase)
        .build()
}

/// Case-insensitive but accent-sensitive: `cote` does not match `côté`.
pub fn case_only() -> Normalizer {
    Normalizer::builder().add_stage(LowerCase).build()
}
