//! Stage assembly and the left-to-right fold.
//!
//! The stage order is fixed and deliberate; stages are not commutative.
//! Noise removal (URLs, mentions, timestamps) precedes character folding
//! so foreign content is deleted whole instead of half-folded; punctuation
//! normalization precedes repeated-punctuation collapsing so runs are
//! detected on the canonical symbols; digit conversion precedes digit
//! removal so enabling both strips numerals uniformly across scripts.

use crate::{
    config::NormalizeConfig,
    stage::{
        Stage, collapse_punctuation::CollapsePunctuation, collapse_repeats::CollapseRepeats,
        fold_chars::{FoldAlef, FoldTeh, FoldYeh},
        normalize_digits::NormalizeDigits, normalize_punctuation::NormalizePunctuation,
        normalize_whitespace::NormalizeWhitespace, remove_diacritics::RemoveDiacritics,
        remove_digits::RemoveDigits, remove_special_chars::RemoveSpecialChars,
        remove_tatweel::RemoveTatweel, remove_timestamps::RemoveTimestamps,
        strip_html::StripHtml, strip_pattern::StripPattern, unicode_form::UnicodeNormalize,
    },
};
use std::borrow::Cow;
use tracing::trace;

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    min_length: usize,
    max_length: Option<usize>,
}

impl Pipeline {
    /// Assembles the enabled stages in the fixed order. Patterns compile
    /// here, once; the built pipeline is immutable and `Send + Sync`.
    pub fn from_config(config: &NormalizeConfig) -> Self {
        let mut stages: Vec<Box<dyn Stage>> = Vec::new();

        stages.push(Box::new(UnicodeNormalize::new(config.unicode_form)));
        if config.remove_html_tags {
            stages.push(Box::new(StripHtml));
        }
        if config.remove_urls {
            stages.push(Box::new(StripPattern::urls()));
        }
        if config.remove_emails {
            stages.push(Box::new(StripPattern::emails()));
        }
        if config.remove_mentions {
            stages.push(Box::new(StripPattern::mentions()));
        }
        if config.remove_hashtags {
            stages.push(Box::new(StripPattern::hashtags()));
        }
        if config.remove_latin_chars {
            stages.push(Box::new(StripPattern::latin_letters()));
        }
        if config.remove_timestamps {
            stages.push(Box::new(RemoveTimestamps::new()));
        }
        if config.remove_diacritics {
            stages.push(Box::new(RemoveDiacritics::new(config.keep_shadda)));
        }
        if config.remove_tatweel {
            stages.push(Box::new(RemoveTatweel));
        }
        if config.normalize_alef {
            stages.push(Box::new(FoldAlef));
        }
        if config.normalize_yeh {
            stages.push(Box::new(FoldYeh));
        }
        if config.normalize_teh {
            stages.push(Box::new(FoldTeh));
        }
        if config.normalize_punctuation {
            stages.push(Box::new(NormalizePunctuation));
        }
        if config.remove_repeated_punctuation {
            stages.push(Box::new(CollapsePunctuation));
        }
        if config.remove_special_chars {
            stages.push(Box::new(RemoveSpecialChars::new(
                config.preserve_arabic_punctuation,
            )));
        }
        if config.normalize_numbers {
            stages.push(Box::new(NormalizeDigits));
        }
        if config.remove_numbers {
            stages.push(Box::new(RemoveDigits));
        }
        if config.remove_repeated_chars {
            stages.push(Box::new(CollapseRepeats::new(config.max_char_repeat)));
        }
        if config.normalize_whitespace {
            stages.push(Box::new(NormalizeWhitespace));
        }

        Self {
            stages,
            min_length: config.min_length,
            max_length: config.max_length,
        }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Folds `text` through the enabled stages, then applies the length
    /// policy and a final trim.
    ///
    /// Blank input short-circuits to `""` before any stage runs. Outputs
    /// shorter than `min_length` are rejected to `""`; outputs longer
    /// than `max_length` are truncated to at most that many chars.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.trim().is_empty() {
            return Cow::Borrowed("");
        }

        let mut current = Cow::Borrowed(text);
        for stage in &self.stages {
            if !stage.needs_apply(&current) {
                continue;
            }
            current = stage.apply(current);
            trace!(stage = stage.name(), len = current.len(), "stage applied");
        }

        // The length policy sees trimmed text and counts chars, matching
        // the original's code-point semantics
        current = trim_cow(current);
        let char_count = current.chars().count();
        if char_count < self.min_length {
            return Cow::Borrowed("");
        }
        if let Some(max) = self.max_length
            && char_count > max
        {
            let cut = current
                .char_indices()
                .nth(max)
                .map(|(i, _)| i)
                .unwrap_or(current.len());
            current = match current {
                Cow::Borrowed(s) => Cow::Borrowed(&s[..cut]),
                Cow::Owned(mut s) => {
                    s.truncate(cut);
                    Cow::Owned(s)
                }
            };
            // a cut can land just past a word, leaving a trailing space
            current = trim_cow(current);
        }

        current
    }
}

fn trim_cow(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => {
            let trimmed = s.trim();
            if trimmed.len() == s.len() {
                Cow::Owned(s)
            } else {
                Cow::Owned(trimmed.to_string())
            }
        }
    }
}
