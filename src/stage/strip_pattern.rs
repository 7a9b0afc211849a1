//! Pattern-based noise removal: URLs, emails, mentions, hashtags, Latin
//! letters. One stage type, one precompiled regex per instance.
//!
//! These run before any character folding so that non-Arabic content is
//! deleted whole instead of being partially folded first.

use crate::stage::Stage;
use memchr::memchr;
use regex::Regex;
use std::borrow::Cow;

/// Deletes every match of a precompiled pattern.
///
/// An optional single-byte probe lets `needs_apply` skip the regex
/// machinery entirely when the byte cannot occur in a match (`@` for
/// mentions and emails, `#` for hashtags, `:` for URLs).
pub struct StripPattern {
    name: &'static str,
    re: Regex,
    probe: Option<u8>,
}

impl StripPattern {
    fn new(name: &'static str, pattern: &str, probe: Option<u8>) -> Self {
        let re = Regex::new(pattern).expect("static pattern is valid");
        Self { name, re, probe }
    }

    /// `http://` / `https://` plus the original's URL character class,
    /// greedy to the longest match.
    pub fn urls() -> Self {
        Self::new(
            "remove_urls",
            r"https?://(?:[a-zA-Z0-9$-_@.&+!*(),]|%[0-9a-fA-F]{2})+",
            Some(b':'),
        )
    }

    pub fn emails() -> Self {
        Self::new("remove_emails", r"\S+@\S+\.\S+", Some(b'@'))
    }

    pub fn mentions() -> Self {
        Self::new("remove_mentions", r"@\w+", Some(b'@'))
    }

    pub fn hashtags() -> Self {
        Self::new("remove_hashtags", r"#\w+", Some(b'#'))
    }

    /// Latin letters only; digits and punctuation stay.
    pub fn latin_letters() -> Self {
        Self::new("remove_latin", r"[a-zA-Z]+", None)
    }
}

impl Stage for StripPattern {
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        if let Some(b) = self.probe
            && memchr(b, text.as_bytes()).is_none()
        {
            return false;
        }
        self.re.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => self.re.replace_all(s, ""),
            Cow::Owned(s) => match self.re.replace_all(&s, "") {
                Cow::Borrowed(_) => Cow::Owned(s),
                Cow::Owned(replaced) => Cow::Owned(replaced),
            },
        }
    }
}
