//! Punctuation normalization to ASCII equivalents.

use crate::{stage::Stage, unicode::normalize_punctuation_char};
use std::borrow::Cow;

/// Replaces Arabic and typographic punctuation with ASCII per the fixed
/// substitution table: `؟`→`?`, `،`→`,`, `؛`→`;`, guillemets and curly
/// quotes→straight quotes, dashes→`-`, `…`→`...`.
///
/// Idempotent because every target symbol is outside the source set. The
/// ellipsis expands, so this is not a one-to-one character map.
pub struct NormalizePunctuation;

impl Stage for NormalizePunctuation {
    fn name(&self) -> &'static str {
        "normalize_punctuation"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(|c| normalize_punctuation_char(c).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let first = match text
            .char_indices()
            .find(|&(_, c)| normalize_punctuation_char(c).is_some())
        {
            Some((i, _)) => i,
            None => return text,
        };

        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..first]);
        for c in text[first..].chars() {
            match normalize_punctuation_char(c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}
