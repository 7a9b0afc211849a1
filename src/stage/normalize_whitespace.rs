//! Whitespace collapsing: any run of Unicode whitespace becomes one
//! ASCII space. Edge trimming happens once at the end of the pipeline,
//! not here.

use crate::stage::Stage;
use std::borrow::Cow;

pub struct NormalizeWhitespace;

impl Stage for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        "normalize_whitespace"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        let mut prev_ws = false;
        for c in text.chars() {
            let is_ws = c.is_whitespace();
            if is_ws && (prev_ws || c != ' ') {
                return true;
            }
            prev_ws = is_ws;
        }
        false
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut prev_ws = false;
        for c in text.chars() {
            if c.is_whitespace() {
                if !prev_ws {
                    out.push(' ');
                }
                prev_ws = true;
            } else {
                out.push(c);
                prev_ws = false;
            }
        }
        Cow::Owned(out)
    }
}
