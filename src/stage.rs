//! Core transform-step abstraction.
//!
//! A stage is a pure `str -> str` transform. Each one precompiles whatever
//! pattern it needs at construction and carries no per-call mutable state,
//! so a built pipeline is safe to share across threads.
//!
//! `needs_apply` is a cheap pre-scan: returning `false` skips the stage
//! entirely and lets a borrowed `Cow` flow through untouched. `apply` must
//! be correct regardless of what `needs_apply` said.
//!
//! Every stage here is total over well-formed text — there is no error
//! channel. Individually each is idempotent; repetition collapsing is
//! idempotent by construction and punctuation normalization because its
//! target symbols are disjoint from its sources.

pub mod collapse_punctuation;
pub mod collapse_repeats;
pub mod fold_chars;
pub mod normalize_digits;
pub mod normalize_punctuation;
pub mod normalize_whitespace;
pub mod remove_diacritics;
pub mod remove_digits;
pub mod remove_special_chars;
pub mod remove_tatweel;
pub mod remove_timestamps;
pub mod strip_html;
pub mod strip_pattern;
pub mod unicode_form;

use std::borrow::Cow;

/// A single normalization step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logging and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

/// Filter characters out of `text`, borrowing when nothing matches.
///
/// Shared by the removal stages (diacritics, tatweel, digits, special
/// characters): scan for the first hit, then copy the remainder skipping
/// matches.
pub(crate) fn remove_chars<'a, F: Fn(char) -> bool>(text: Cow<'a, str>, drop: F) -> Cow<'a, str> {
    match text.char_indices().find(|&(_, c)| drop(c)) {
        None => text,
        Some((first, _)) => {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..first]);
            out.extend(text[first..].chars().filter(|&c| !drop(c)));
            Cow::Owned(out)
        }
    }
}

/// Map characters one-for-one, borrowing when nothing changes.
///
/// Shared by the fold stages (Alef, Yeh, Teh, digit conversion).
pub(crate) fn map_chars<'a, F: Fn(char) -> char>(text: Cow<'a, str>, map: F) -> Cow<'a, str> {
    if text.chars().all(|c| map(c) == c) {
        return text;
    }
    Cow::Owned(text.chars().map(map).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_chars_borrows_on_no_match() {
        let input = Cow::Borrowed("abc");
        let out = remove_chars(input, |c| c == 'x');
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "abc");
    }

    #[test]
    fn remove_chars_preserves_prefix() {
        let out = remove_chars(Cow::Borrowed("abxcx"), |c| c == 'x');
        assert_eq!(out, "abc");
    }

    #[test]
    fn map_chars_borrows_when_identity() {
        let input = Cow::Borrowed("سلام");
        let out = map_chars(input, |c| c);
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
