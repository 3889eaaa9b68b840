use crate::stage::{CharBuf, Stage};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must come back unchanged and borrowed.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `char_mapper_equivalent_to_apply` → the per-character path produces the same text as `apply`
/// 3. `stage_is_idempotent` → applying twice yields the same result as once
/// 4. `needs_apply_is_accurate` → correctly predicts whether `apply` would change text
/// 5. `handles_empty_string_and_ascii` → graceful on edge cases
/// 6. `no_panic_on_mixed_scripts` → survives mixed real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::char_mapper_equivalent_to_apply($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

const MIXED: &str = "AbCdEfGhIjKlMnOpQrStUvWxYz ÀÉÎÖÜñç 123!@# テスト 한국어 ﬁ";

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);

        if stage.needs_apply(&text) {
            let old_ptr = text.as_ref() as *const str;
            text = stage.apply(text);
            assert_ne!(old_ptr, text.as_ref() as *const str);
        } else {
            assert_eq!(input as *const str, text.as_ref() as *const str);
        }

        // Second pass must never allocate again
        let old_ptr = text.as_ref() as *const str;
        if stage.needs_apply(&text) {
            text = stage.apply(text);
        }
        assert_eq!(
            old_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on second pass of `{}` (input: `{input}`)",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let text = stage.apply(Cow::Borrowed(pass_through));
        assert_eq!(text.as_ref(), pass_through);
        assert!(
            matches!(text, Cow::Borrowed(s) if std::ptr::eq(s, pass_through)),
            "zero-copy violated on pass-through sample of `{}` (input: `{pass_through}`)",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        let text = stage.apply(Cow::Borrowed(input));
        assert_eq!(text.as_ref(), expected, "stage `{}`", stage.name());
    }
}

pub fn char_mapper_equivalent_to_apply<S: StageTestConfig>(stage: S) {
    let Some(mapper) = stage.as_char_mapper() else {
        return;
    };
    for &input in S::samples().iter().chain([MIXED].iter()) {
        let via_apply = stage.apply(Cow::Borrowed(input));
        let mut via_mapper = String::new();
        let mut buf = CharBuf::new();
        for c in input.chars() {
            buf.clear();
            mapper.map_into(c, &mut buf);
            via_mapper.extend(buf.iter());
        }
        assert_eq!(
            via_apply.as_ref(),
            via_mapper,
            "char mapper ≠ apply() for `{}` on `{input}`",
            stage.name()
        );
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for &input in S::samples().iter().chain([MIXED].iter()) {
        let once = stage.apply(Cow::Borrowed(input));
        let twice = stage.apply(once.clone());
        assert_eq!(
            once,
            twice,
            "apply() of `{}` not idempotent on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for &sample in S::samples() {
        check_accuracy(&stage, sample);
    }
    for &clean in &["", "hello", "world123", " !@#"] {
        check_accuracy(&stage, clean);
    }
    check_accuracy(&stage, MIXED);
}

fn check_accuracy<S: Stage>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input);
    let output = stage.apply(Cow::Owned(input.to_owned()));
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: S) {
    let empty: &str = "";
    assert_eq!(stage.apply(Cow::Borrowed(empty)).as_ref(), "");

    let ascii = "hello world 123 !@#";
    assert_eq!(stage.apply(Cow::Borrowed(ascii)).as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 русский Türkçe العربية 简体中文 e\u{0301}\u{0301}",
    ));
}
