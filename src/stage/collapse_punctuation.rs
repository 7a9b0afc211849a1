//! Repeated-punctuation collapsing: `!!!` → `!`.
//!
//! Runs after punctuation normalization so the run detection targets the
//! canonical ASCII set. Note `؟؟` therefore collapses as `??` → `?`.

use crate::{stage::Stage, unicode::is_collapsible_punct};
use std::borrow::Cow;

pub struct CollapsePunctuation;

impl Stage for CollapsePunctuation {
    fn name(&self) -> &'static str {
        "collapse_punctuation"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        let mut prev = '\0';
        for c in text.chars() {
            if c == prev && is_collapsible_punct(c) {
                return true;
            }
            prev = c;
        }
        false
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut prev = '\0';
        for c in text.chars() {
            if c == prev && is_collapsible_punct(c) {
                continue;
            }
            out.push(c);
            prev = c;
        }
        Cow::Owned(out)
    }
}
