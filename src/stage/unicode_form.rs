//! Unicode canonicalization, always the first pipeline step.

use crate::{config::UnicodeForm, stage::Stage};
use icu_normalizer::{
    ComposingNormalizer, ComposingNormalizerBorrowed, DecomposingNormalizer,
    DecomposingNormalizerBorrowed,
};
use std::{borrow::Cow, sync::LazyLock};

static NFC: LazyLock<ComposingNormalizerBorrowed> = LazyLock::new(ComposingNormalizer::new_nfc);
static NFKC: LazyLock<ComposingNormalizerBorrowed> = LazyLock::new(ComposingNormalizer::new_nfkc);
static NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizer::new_nfd);
static NFKD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizer::new_nfkd);

/// Normalizes text to the configured Unicode form. NFKC is the pipeline
/// default: it composes canonically and folds compatibility characters
/// (Arabic presentation forms, full-width ASCII) into their plain
/// counterparts, which later stages rely on.
pub struct UnicodeNormalize {
    form: UnicodeForm,
}

impl UnicodeNormalize {
    pub fn new(form: UnicodeForm) -> Self {
        Self { form }
    }
}

impl Stage for UnicodeNormalize {
    fn name(&self) -> &'static str {
        match self.form {
            UnicodeForm::Nfc => "nfc",
            UnicodeForm::Nfd => "nfd",
            UnicodeForm::Nfkc => "nfkc",
            UnicodeForm::Nfkd => "nfkd",
        }
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        match self.form {
            UnicodeForm::Nfc => !NFC.is_normalized(text),
            UnicodeForm::Nfd => !NFD.is_normalized(text),
            UnicodeForm::Nfkc => !NFKC.is_normalized(text),
            UnicodeForm::Nfkd => !NFKD.is_normalized(text),
        }
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let normalized = match self.form {
            UnicodeForm::Nfc => NFC.normalize(&text),
            UnicodeForm::Nfd => NFD.normalize(&text),
            UnicodeForm::Nfkc => NFKC.normalize(&text),
            UnicodeForm::Nfkd => NFKD.normalize(&text),
        };
        Cow::Owned(normalized.into_owned())
    }
}
