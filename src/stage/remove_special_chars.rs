//! Special-character removal.
//!
//! Drops everything outside the keep policy: Arabic script, ASCII
//! alphanumerics and punctuation, whitespace. This is the destructive
//! catch-all for emoji, dingbats and stray symbols; Arabic punctuation
//! (`،` `؛` `؟`) is carved out behind its own preserve flag since a
//! config that skips punctuation normalization would otherwise lose it.

use crate::{
    stage::{Stage, remove_chars},
    unicode::is_special_char,
};
use std::borrow::Cow;

pub struct RemoveSpecialChars {
    preserve_arabic_punct: bool,
}

impl RemoveSpecialChars {
    pub fn new(preserve_arabic_punct: bool) -> Self {
        Self { preserve_arabic_punct }
    }
}

impl Stage for RemoveSpecialChars {
    fn name(&self) -> &'static str {
        "remove_special_chars"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        // no ASCII fast path: the keep policy rejects ASCII control
        // characters too
        text.chars()
            .any(|c| is_special_char(c, self.preserve_arabic_punct))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        remove_chars(text, |c| is_special_char(c, self.preserve_arabic_punct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_and_symbols_dropped() {
        let stage = RemoveSpecialChars::new(false);
        assert_eq!(
            stage.apply(Cow::Borrowed("أنا من السودان 🇸🇩 وأحب بلدي ♥")),
            "أنا من السودان  وأحب بلدي "
        );
    }

    #[test]
    fn arabic_punct_follows_the_flag() {
        let dropping = RemoveSpecialChars::new(false);
        assert_eq!(dropping.apply(Cow::Borrowed("شنو؟")), "شنو");

        let preserving = RemoveSpecialChars::new(true);
        assert_eq!(preserving.apply(Cow::Borrowed("شنو؟")), "شنو؟");
    }

    #[test]
    fn control_chars_dropped_even_in_pure_ascii() {
        let stage = RemoveSpecialChars::new(false);
        assert!(stage.needs_apply("abc\u{7}def"));
        assert_eq!(stage.apply(Cow::Borrowed("abc\u{7}def")), "abcdef");
        // same verdict with Arabic text around it
        assert_eq!(stage.apply(Cow::Borrowed("abc\u{7}def س")), "abcdef س");
    }

    #[test]
    fn diacritics_and_ascii_survive() {
        let stage = RemoveSpecialChars::new(false);
        let input = "مَرحبا hello 123 !?";
        assert!(!stage.needs_apply(input));
        assert!(matches!(stage.apply(Cow::Borrowed(input)), Cow::Borrowed(_)));
    }
}
