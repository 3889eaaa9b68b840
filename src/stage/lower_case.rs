use crate::stage::{CharBuf, CharMapper, Stage, apply_char_mapper};
use std::borrow::Cow;

/// Unicode lowercase mapping, one character at a time.
///
/// Uses [`char::to_lowercase`], which is context-free: a final `Σ` becomes
/// `σ`, never `ς`. A few mappings expand (`İ` → `i̇`), so when combined with
/// [`RemoveDiacritics`](crate::RemoveDiacritics) it runs second.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(|c| !self.is_identity(c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.is_ascii() {
            if !text.bytes().any(|b| b.is_ascii_uppercase()) {
                return text;
            }
            let mut owned = text.into_owned();
            owned.make_ascii_lowercase();
            return Cow::Owned(owned);
        }
        apply_char_mapper(self, text)
    }

    #[inline]
    fn as_char_mapper(&self) -> Option<&dyn CharMapper> {
        Some(self)
    }
}

impl CharMapper for LowerCase {
    #[inline(always)]
    fn map_into(&self, c: char, out: &mut CharBuf) {
        if c.is_ascii() {
            out.push(c.to_ascii_lowercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }

    #[inline(always)]
    fn is_identity(&self, c: char) -> bool {
        if c.is_ascii() {
            return !c.is_ascii_uppercase();
        }
        let mut lower = c.to_lowercase();
        lower.next() == Some(c) && lower.next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;
    use crate::testing::stage_contract::StageTestConfig;

    impl StageTestConfig for LowerCase {
        fn samples() -> &'static [&'static str] {
            &["AaBbCc", "ÉCOLE", "Straße", "ΣΟΦΙΑ", "İstanbul", ""]
        }

        fn should_pass_through() -> &'static [&'static str] {
            &["hello", "déjà vu", "ß", "日本語", "123 !@#", ""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[("AaBbCc", "aabbcc"), ("ÉCOLE", "école"), ("ẞ", "ß")]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(LowerCase);
    }

    #[test]
    fn ascii_fast_path_allocates_once() {
        let result = LowerCase.apply(Cow::Borrowed("HELLO WORLD"));
        assert!(matches!(result, Cow::Owned(_)));
        assert_eq!(result, "hello world");
    }

    #[test]
    fn zero_copy_when_already_lower() {
        let input = "already lower";
        let result = LowerCase.apply(Cow::Borrowed(input));
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn keeps_accents() {
        assert_eq!(LowerCase.apply(Cow::Borrowed("ÀÂÄ")), "àâä");
    }

    #[test]
    fn sigma_is_context_free() {
        assert_eq!(LowerCase.apply(Cow::Borrowed("ΟΔΟΣ")), "οδοσ");
    }

    #[test]
    fn dotted_capital_i_expands() {
        let mut buf = CharBuf::new();
        LowerCase.map_into('İ', &mut buf);
        assert_eq!(buf.as_slice(), ['i', '\u{0307}']);
    }
}
