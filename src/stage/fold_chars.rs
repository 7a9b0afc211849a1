//! Character-variant folding: Alef, Yeh and Teh Marbuta.
//!
//! Informal Arabic writing uses these variants interchangeably; folding
//! them collapses spelling variation that carries no dialectal meaning.
//! Runs after noise removal so foreign content is deleted whole rather
//! than half-folded.

use crate::{
    stage::{Stage, map_chars},
    unicode::{ALEF, HEH, TEH_MARBUTA, YEH, is_alef_variant, is_yeh_variant},
};
use std::borrow::Cow;

/// Folds hamza/madda/wasla Alef forms and standalone hamza to plain Alef.
pub struct FoldAlef;

impl Stage for FoldAlef {
    fn name(&self) -> &'static str {
        "fold_alef"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(is_alef_variant)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        map_chars(text, |c| if is_alef_variant(c) { ALEF } else { c })
    }
}

/// Folds Alef Maksura (ى) and hamza-on-Yeh (ئ) to plain Yeh (ي).
pub struct FoldYeh;

impl Stage for FoldYeh {
    fn name(&self) -> &'static str {
        "fold_yeh"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(is_yeh_variant)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        map_chars(text, |c| if is_yeh_variant(c) { YEH } else { c })
    }
}

/// Folds Teh Marbuta (ة) to Heh (ه), the common Sudanese rendering.
pub struct FoldTeh;

impl Stage for FoldTeh {
    fn name(&self) -> &'static str {
        "fold_teh"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        text.contains(TEH_MARBUTA)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        map_chars(text, |c| if c == TEH_MARBUTA { HEH } else { c })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alef_variants_fold_to_plain_alef() {
        let out = FoldAlef.apply(Cow::Borrowed("أحمد إلى آخر ٱسم ءال"));
        assert_eq!(out, "احمد الى اخر اسم اال");
    }

    #[test]
    fn yeh_variants_fold() {
        assert_eq!(FoldYeh.apply(Cow::Borrowed("على شئ")), "علي شي");
        assert_eq!(FoldYeh.apply(Cow::Borrowed("مستشفى")), "مستشفي");
    }

    #[test]
    fn teh_marbuta_to_heh() {
        assert_eq!(FoldTeh.apply(Cow::Borrowed("مدرسة كبيرة")), "مدرسه كبيره");
    }

    #[test]
    fn folded_text_is_zero_copy() {
        for stage in [&FoldAlef as &dyn Stage, &FoldYeh, &FoldTeh] {
            let input = "سلام نظيف";
            assert!(!stage.needs_apply(input), "{}", stage.name());
            assert!(matches!(stage.apply(Cow::Borrowed(input)), Cow::Borrowed(_)));
        }
    }

    #[test]
    fn folds_are_idempotent() {
        for stage in [&FoldAlef as &dyn Stage, &FoldYeh, &FoldTeh] {
            let once = stage.apply(Cow::Borrowed("أمة على ٱلهدى"));
            let twice = stage.apply(once.clone());
            assert_eq!(once, twice, "{}", stage.name());
        }
    }
}
