use crate::stage::Stage;
use std::{borrow::Cow, sync::LazyLock};

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);
static ICU4X_NFKC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfkc);

/// Unicode Normalization Form C (Canonical Composition)
#[derive(Debug, Default, Clone, Copy)]
pub struct NfcStage;

/// Unicode Normalization Form KC (Compatibility Composition).
///
/// Folds ligatures, full-width forms and superscripts (`ﬁ` → `fi`,
/// `Ｒ` → `R`, `m²` → `m2`). Composition crosses character boundaries, so
/// this stage has no [`CharMapper`](crate::stage::CharMapper) and cannot be
/// used with offset tracking.
#[derive(Debug, Default, Clone, Copy)]
pub struct NfkcStage;

pub const NFC: NfcStage = NfcStage;
pub const NFKC: NfkcStage = NfkcStage;

macro_rules! impl_normalization_stage {
    ($stage:ty, $name:literal, $norm:ident) => {
        impl Stage for $stage {
            fn name(&self) -> &'static str {
                $name
            }

            #[inline(always)]
            fn needs_apply(&self, text: &str) -> bool {
                !$norm.is_normalized(text)
            }

            #[inline(always)]
            fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
                if $norm.is_normalized(text.as_ref()) {
                    return text;
                }
                Cow::Owned($norm.normalize(text.as_ref()).into_owned())
            }
        }
    };
}

impl_normalization_stage!(NfcStage, "nfc", ICU4X_NFC);
impl_normalization_stage!(NfkcStage, "nfkc", ICU4X_NFKC);
