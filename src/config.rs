//! Pipeline configuration.
//!
//! `NormalizeConfig` is pure data: a flat set of toggles and scalars that
//! selects which stages run. It is read-only once handed to a
//! [`Normalizer`](crate::Normalizer); the pipeline never mutates it.

use std::str::FromStr;

/// Target Unicode normalization form for the first pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnicodeForm {
    Nfc,
    Nfd,
    #[default]
    Nfkc,
    Nfkd,
}

impl FromStr for UnicodeForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nfc" => Ok(Self::Nfc),
            "nfd" => Ok(Self::Nfd),
            "nfkc" => Ok(Self::Nfkc),
            "nfkd" => Ok(Self::Nfkd),
            other => Err(format!("unknown unicode form `{other}` (expected nfc, nfd, nfkc or nfkd)")),
        }
    }
}

/// Options for the normalization pipeline.
///
/// `Default` is the meaningful baseline: diacritics removed, character
/// variants folded, punctuation normalized, URLs/emails/mentions/timestamps
/// removed, hashtags kept, repetition capped at 2.
///
/// No combination is rejected. `normalize_numbers` together with
/// `remove_numbers` is honored in that fixed order, so the net effect is
/// plain digit removal — almost certainly not what you want from the
/// pair, but deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Unicode normalization form applied before everything else.
    pub unicode_form: UnicodeForm,

    /// Strip tashkeel marks.
    pub remove_diacritics: bool,
    /// Exempt Shadda from diacritic removal.
    pub keep_shadda: bool,

    /// Fold Alef variants to plain Alef (ا).
    pub normalize_alef: bool,
    /// Fold Alef Maksura / hamza-on-Yeh to plain Yeh (ي).
    pub normalize_yeh: bool,
    /// Fold Teh Marbuta (ة) to Heh (ه).
    pub normalize_teh: bool,

    /// Replace Arabic/typographic punctuation with ASCII equivalents.
    pub normalize_punctuation: bool,
    /// Collapse runs of `!?.,:;` to a single mark.
    pub remove_repeated_punctuation: bool,

    /// Collapse all whitespace runs to a single space.
    pub normalize_whitespace: bool,

    /// Convert Arabic-Indic and Extended Arabic-Indic digits to Western.
    pub normalize_numbers: bool,
    /// Remove all digits (any script). Runs after `normalize_numbers`.
    pub remove_numbers: bool,

    pub remove_urls: bool,
    pub remove_emails: bool,
    pub remove_mentions: bool,
    /// Hashtags are kept by default.
    pub remove_hashtags: bool,
    /// Remove Latin letters A–Z/a–z; digits and punctuation untouched.
    pub remove_latin_chars: bool,
    /// Remove bracketed/bare times, dates, ISO datetimes and epoch-like
    /// integers.
    pub remove_timestamps: bool,

    /// Strip HTML/XML tags and decode entities.
    pub remove_html_tags: bool,
    /// Strip tatweel/kashida, including decorative lines made of it.
    pub remove_tatweel: bool,
    /// Drop characters outside the keep policy (Arabic script, ASCII,
    /// whitespace); see [`crate::unicode::is_special_char`].
    pub remove_special_chars: bool,
    /// Keep `،` `؛` `؟` when removing special characters.
    pub preserve_arabic_punctuation: bool,

    /// Outputs shorter than this (in chars) are rejected to `""`.
    pub min_length: usize,
    /// Outputs longer than this (in chars) are truncated, no word-boundary
    /// awareness.
    pub max_length: Option<usize>,

    /// Collapse any character repeated more than `max_char_repeat` times.
    pub remove_repeated_chars: bool,
    /// Maximum allowed consecutive repetition; must be ≥ 1.
    pub max_char_repeat: usize,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            unicode_form: UnicodeForm::Nfkc,
            remove_diacritics: true,
            keep_shadda: false,
            normalize_alef: true,
            normalize_yeh: true,
            normalize_teh: true,
            normalize_punctuation: true,
            remove_repeated_punctuation: true,
            normalize_whitespace: true,
            normalize_numbers: false,
            remove_numbers: false,
            remove_urls: true,
            remove_emails: true,
            remove_mentions: true,
            remove_hashtags: false,
            remove_latin_chars: false,
            remove_timestamps: true,
            remove_html_tags: false,
            remove_tatweel: false,
            remove_special_chars: false,
            preserve_arabic_punctuation: false,
            min_length: 0,
            max_length: None,
            remove_repeated_chars: true,
            max_char_repeat: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_baseline() {
        let cfg = NormalizeConfig::default();
        assert_eq!(cfg.unicode_form, UnicodeForm::Nfkc);
        assert!(cfg.remove_diacritics);
        assert!(!cfg.keep_shadda);
        assert!(!cfg.remove_hashtags);
        assert!(cfg.remove_urls && cfg.remove_emails && cfg.remove_mentions);
        assert!(cfg.remove_timestamps);
        assert!(!cfg.normalize_numbers && !cfg.remove_numbers);
        assert_eq!(cfg.max_char_repeat, 2);
        assert_eq!(cfg.min_length, 0);
        assert_eq!(cfg.max_length, None);
    }

    #[test]
    fn unicode_form_parses_case_insensitively() {
        assert_eq!("NFKC".parse::<UnicodeForm>().unwrap(), UnicodeForm::Nfkc);
        assert_eq!("nfd".parse::<UnicodeForm>().unwrap(), UnicodeForm::Nfd);
        assert!("nfx".parse::<UnicodeForm>().is_err());
    }
}
