//! Static character data for Arabic normalization.
//!
//! Everything here is process-wide constant data: fold tables, diacritic
//! sets, digit maps and the punctuation substitution table. Safe to share
//! across any number of pipeline instances.

/// Shadda (gemination mark), U+0651. Optionally exempt from diacritic
/// removal via `NormalizeConfig::keep_shadda`.
pub const SHADDA: char = '\u{0651}';

/// Tatweel / kashida (decorative elongation), U+0640.
pub const TATWEEL: char = '\u{0640}';

/// Arabic diacritics (tashkeel): Fathatan (U+064B) through Mark Noon
/// Ghunna (U+0658), plus Superscript Alef (U+0670).
#[inline(always)]
pub const fn is_tashkeel(c: char) -> bool {
    matches!(c as u32, 0x064B..=0x0658 | 0x0670)
}

/// Alef variants folded to plain Alef (ا): hamza forms, madda forms,
/// wasla and the standalone hamza.
#[inline(always)]
pub const fn is_alef_variant(c: char) -> bool {
    matches!(
        c,
        '\u{0623}' | // Alef with hamza above (أ)
        '\u{0625}' | // Alef with hamza below (إ)
        '\u{0622}' | // Alef with madda (آ)
        '\u{0671}' | // Alef wasla (ٱ)
        '\u{0672}' | // Alef with wavy hamza above (ٲ)
        '\u{0673}' | // Alef with wavy hamza below (ٳ)
        '\u{0621}'   // Standalone hamza (ء)
    )
}

pub const ALEF: char = '\u{0627}';

/// Yeh variants folded to plain Yeh (ي): Alef Maksura and hamza-on-Yeh.
#[inline(always)]
pub const fn is_yeh_variant(c: char) -> bool {
    matches!(c, '\u{0649}' | '\u{0626}')
}

pub const YEH: char = '\u{064A}';

pub const TEH_MARBUTA: char = '\u{0629}';
pub const HEH: char = '\u{0647}';

/// Arabic-Indic (U+0660–U+0669) and Extended Arabic-Indic (U+06F0–U+06F9)
/// digits mapped to their Western equivalents.
#[inline(always)]
pub const fn western_digit(c: char) -> Option<char> {
    let cp = c as u32;
    match cp {
        0x0660..=0x0669 => char::from_u32(cp - 0x0660 + '0' as u32),
        0x06F0..=0x06F9 => char::from_u32(cp - 0x06F0 + '0' as u32),
        _ => None,
    }
}

/// Any digit the `remove_numbers` step strips: Western, Arabic-Indic or
/// Extended Arabic-Indic.
#[inline(always)]
pub const fn is_any_digit(c: char) -> bool {
    matches!(c as u32, 0x0030..=0x0039 | 0x0660..=0x0669 | 0x06F0..=0x06F9)
}

/// Punctuation substitution table. Returns the ASCII replacement, or
/// `None` for characters outside the table. The ellipsis expands to
/// three characters, hence `&str` values.
///
/// Targets are disjoint from sources, so the substitution is idempotent.
#[inline(always)]
pub fn normalize_punctuation_char(c: char) -> Option<&'static str> {
    match c {
        '\u{061F}' => Some("?"), // Arabic question mark ؟
        '\u{060C}' => Some(","), // Arabic comma ،
        '\u{061B}' => Some(";"), // Arabic semicolon ؛
        '‹' => Some("<"),
        '›' => Some(">"),
        '«' | '»' | '“' | '”' => Some("\""),
        '‘' | '’' => Some("'"),
        '–' | '—' => Some("-"),
        '…' => Some("..."),
        _ => None,
    }
}

/// Marks subject to repeated-punctuation collapsing (post-normalization
/// canonical set).
#[inline(always)]
pub const fn is_collapsible_punct(c: char) -> bool {
    matches!(c, '!' | '?' | '.' | ',' | ':' | ';')
}

/// Arabic punctuation proper: comma, semicolon, question mark. Carved out
/// of the script blocks so the special-character policy can treat it
/// separately.
#[inline(always)]
pub const fn is_arabic_punctuation(c: char) -> bool {
    matches!(c, '\u{060C}' | '\u{061B}' | '\u{061F}')
}

/// Arabic script blocks: core block plus Supplement and Extended-A.
/// Presentation forms are excluded on purpose — NFKC (the default form)
/// folds them into the core block before any later stage sees them.
#[inline(always)]
pub const fn is_arabic_script(c: char) -> bool {
    matches!(c as u32, 0x0600..=0x06FF | 0x0750..=0x077F | 0x08A0..=0x08FF)
}

/// Keep policy for special-character removal: whitespace, ASCII
/// alphanumerics and punctuation, and Arabic script. Arabic punctuation
/// is only kept when `preserve_arabic_punct` is set; everything else in
/// its block (letters, diacritics, digits) always survives. ASCII
/// control characters fall outside the policy and are removed.
#[inline(always)]
pub fn is_special_char(c: char, preserve_arabic_punct: bool) -> bool {
    if c.is_whitespace() || c.is_ascii_alphanumeric() || c.is_ascii_punctuation() {
        return false;
    }
    if is_arabic_punctuation(c) {
        return !preserve_arabic_punct;
    }
    !is_arabic_script(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tashkeel_set_is_the_fifteen_marks() {
        let marks: Vec<char> = (0x064B..=0x0658u32)
            .chain(std::iter::once(0x0670))
            .map(|cp| char::from_u32(cp).unwrap())
            .collect();
        assert_eq!(marks.len(), 15);
        for m in marks {
            assert!(is_tashkeel(m), "missed U+{:04X}", m as u32);
        }
        assert!(is_tashkeel(SHADDA));
        assert!(!is_tashkeel('ا'));
        assert!(!is_tashkeel('\u{0659}')); // Zwarakay is out of scope
    }

    #[test]
    fn alef_and_yeh_folds() {
        for v in ['أ', 'إ', 'آ', 'ٱ', 'ٲ', 'ٳ', 'ء'] {
            assert!(is_alef_variant(v), "missed {v}");
        }
        assert!(!is_alef_variant(ALEF));
        assert!(is_yeh_variant('ى'));
        assert!(is_yeh_variant('ئ'));
        assert!(!is_yeh_variant(YEH));
    }

    #[test]
    fn digit_maps_cover_both_ranges() {
        assert_eq!(western_digit('٠'), Some('0'));
        assert_eq!(western_digit('٩'), Some('9'));
        assert_eq!(western_digit('۰'), Some('0'));
        assert_eq!(western_digit('۴'), Some('4'));
        assert_eq!(western_digit('5'), None);
        assert!(is_any_digit('7'));
        assert!(is_any_digit('٣'));
        assert!(is_any_digit('۶'));
        assert!(!is_any_digit('ب'));
    }

    #[test]
    fn punctuation_table_is_idempotent() {
        let sources = [
            '؟', '،', '؛', '‹', '›', '«', '»', '“', '”', '‘', '’', '–', '—', '…',
        ];
        for c in sources {
            let replacement = normalize_punctuation_char(c).unwrap();
            for r in replacement.chars() {
                assert!(
                    normalize_punctuation_char(r).is_none(),
                    "target {r} of {c} is itself a source"
                );
            }
        }
        assert_eq!(normalize_punctuation_char('…'), Some("..."));
        assert_eq!(normalize_punctuation_char('a'), None);
        assert_eq!(normalize_punctuation_char('?'), None);
    }

    #[test]
    fn special_char_policy() {
        // Arabic letters and tashkeel always survive
        assert!(!is_special_char('س', false));
        assert!(!is_special_char(SHADDA, false));
        // ASCII survives
        assert!(!is_special_char('x', false));
        assert!(!is_special_char('!', false));
        assert!(!is_special_char(' ', false));
        // ASCII controls, emoji and symbols do not
        assert!(is_special_char('\u{7}', false));
        assert!(is_special_char('🇸', false));
        assert!(is_special_char('☭', false));
        assert!(is_special_char('«', false));
        // Arabic punctuation flips with the preserve flag
        assert!(is_special_char('؟', false));
        assert!(!is_special_char('؟', true));
    }
}
