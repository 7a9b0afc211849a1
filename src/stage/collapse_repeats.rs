//! Repeated-character collapsing: `كتيييييير` → `كتيير` (max 2).
//!
//! Applies to any character, not just letters, and is idempotent by
//! construction: output runs never exceed the cap, so a second pass
//! changes nothing.

use crate::stage::Stage;
use std::borrow::Cow;

pub struct CollapseRepeats {
    max_repeat: usize,
}

impl CollapseRepeats {
    /// `max_repeat` is clamped to at least 1; a cap of 0 would delete
    /// every character.
    pub fn new(max_repeat: usize) -> Self {
        Self {
            max_repeat: max_repeat.max(1),
        }
    }
}

impl Stage for CollapseRepeats {
    fn name(&self) -> &'static str {
        "collapse_repeats"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        let mut prev = None;
        let mut run = 0usize;
        for c in text.chars() {
            if Some(c) == prev {
                run += 1;
                if run > self.max_repeat {
                    return true;
                }
            } else {
                prev = Some(c);
                run = 1;
            }
        }
        false
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut prev = None;
        let mut run = 0usize;
        for c in text.chars() {
            if Some(c) == prev {
                run += 1;
            } else {
                prev = Some(c);
                run = 1;
            }
            if run <= self.max_repeat {
                out.push(c);
            }
        }
        Cow::Owned(out)
    }
}
