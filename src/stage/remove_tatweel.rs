//! Tatweel (kashida) removal.
//!
//! Tatweel is purely decorative, whether stretched inside a word
//! (`مـــرحبا`) or strung into separator lines (`ـــــــــ`). Stripping
//! every occurrence covers both.

use crate::{
    stage::{Stage, remove_chars},
    unicode::TATWEEL,
};
use std::borrow::Cow;

pub struct RemoveTatweel;

impl Stage for RemoveTatweel {
    fn name(&self) -> &'static str {
        "remove_tatweel"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        text.contains(TATWEEL)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        remove_chars(text, |c| c == TATWEEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_word_kashida_removed() {
        assert_eq!(RemoveTatweel.apply(Cow::Borrowed("مـــرحبا")), "مرحبا");
    }

    #[test]
    fn decorative_lines_removed() {
        assert_eq!(
            RemoveTatweel.apply(Cow::Borrowed("قسم ـــــــــ قسم")),
            "قسم  قسم"
        );
    }

    #[test]
    fn clean_text_zero_copy() {
        let input = "مرحبا";
        assert!(!RemoveTatweel.needs_apply(input));
        assert!(matches!(
            RemoveTatweel.apply(Cow::Borrowed(input)),
            Cow::Borrowed(_)
        ));
    }
}
