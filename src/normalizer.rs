//! The front type. Construction compiles the stage set once; after that
//! `normalize` is cheap to call in a loop and the normalizer can be
//! shared across threads.

use crate::{config::NormalizeConfig, pipeline::Pipeline};
use serde::Serialize;
use std::borrow::Cow;

pub struct Normalizer {
    config: NormalizeConfig,
    pipeline: Pipeline,
}

/// Before/after measurements for a single text, for corpus reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizeStats {
    pub original_chars: usize,
    pub normalized_chars: usize,
    pub original_words: usize,
    pub normalized_words: usize,
    pub removed_chars: usize,
    /// Fraction of chars removed, `1 - normalized_chars / original_chars`;
    /// `0.0` for empty input.
    pub compression_ratio: f64,
}

impl NormalizeStats {
    /// Measures the reduction from `original` to its already-normalized
    /// form. Chars are Unicode scalar values; words are
    /// whitespace-separated tokens.
    pub fn measure(original: &str, normalized: &str) -> Self {
        let original_chars = original.chars().count();
        let normalized_chars = normalized.chars().count();
        Self {
            original_chars,
            normalized_chars,
            original_words: original.split_whitespace().count(),
            normalized_words: normalized.split_whitespace().count(),
            removed_chars: original_chars.saturating_sub(normalized_chars),
            compression_ratio: if original_chars == 0 {
                0.0
            } else {
                1.0 - normalized_chars as f64 / original_chars as f64
            },
        }
    }
}

impl Normalizer {
    pub fn new(config: NormalizeConfig) -> Self {
        let pipeline = Pipeline::from_config(&config);
        Self { config, pipeline }
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Runs the full pipeline over `text`. Returns `Cow::Borrowed` when
    /// no stage changed anything.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pipeline.normalize(text)
    }

    /// Normalizes `text` and measures the reduction.
    pub fn stats(&self, text: &str) -> NormalizeStats {
        NormalizeStats::measure(text, &self.normalize(text))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizeConfig::default())
    }
}
