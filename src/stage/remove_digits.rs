//! Digit removal across Western, Arabic-Indic and Extended Arabic-Indic
//! ranges. Runs after digit conversion, so enabling both gives uniform
//! removal regardless of the original script.

use crate::{
    stage::{Stage, remove_chars},
    unicode::is_any_digit,
};
use std::borrow::Cow;

pub struct RemoveDigits;

impl Stage for RemoveDigits {
    fn name(&self) -> &'static str {
        "remove_digits"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(is_any_digit)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        remove_chars(text, is_any_digit)
    }
}
