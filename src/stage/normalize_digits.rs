//! Arabic-Indic digit conversion: `١٢٣` → `123`, `۴۵` → `45`.

use crate::{
    stage::{Stage, map_chars},
    unicode::western_digit,
};
use std::borrow::Cow;

pub struct NormalizeDigits;

impl Stage for NormalizeDigits {
    fn name(&self) -> &'static str {
        "normalize_digits"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(|c| western_digit(c).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        map_chars(text, |c| western_digit(c).unwrap_or(c))
    }
}
