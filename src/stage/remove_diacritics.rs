//! Tashkeel removal.

use crate::{
    stage::{Stage, remove_chars},
    unicode::{SHADDA, is_tashkeel},
};
use std::borrow::Cow;

/// Strips the fifteen Arabic combining marks (Fathatan through
/// Superscript Alef). With `keep_shadda` the gemination mark survives,
/// which some corpora want because it is lexically significant.
pub struct RemoveDiacritics {
    keep_shadda: bool,
}

impl RemoveDiacritics {
    pub fn new(keep_shadda: bool) -> Self {
        Self { keep_shadda }
    }

    #[inline(always)]
    fn drops(&self, c: char) -> bool {
        is_tashkeel(c) && !(self.keep_shadda && c == SHADDA)
    }
}

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(|c| self.drops(c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        remove_chars(text, |c| self.drops(c))
    }
}
