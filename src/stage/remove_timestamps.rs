//! Timestamp removal in every format the corpus shows: subtitle-style
//! bracketed times, bare clock times, slash/dash/dot dates, ISO-8601
//! datetimes and bare Unix-epoch-sized integers.

use crate::stage::Stage;
use regex::Regex;
use std::borrow::Cow;

pub struct RemoveTimestamps {
    patterns: Vec<Regex>,
}

impl RemoveTimestamps {
    pub fn new() -> Self {
        // ISO datetimes run before the bare date/time patterns so a
        // full `2023-12-25T10:30:00` is always removed as one unit.
        let sources = [
            // [0:09:43.329], [00:09:43]
            r"\[\d{1,2}:\d{2}:\d{2}(?:\.\d+)?\]",
            // 2023-12-25T10:30:00.123Z, 2023-12-25T10:30:00+02:00
            r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?",
            // 10:30, 10:30:45, 10:30 PM
            r"\b\d{1,2}:\d{2}(?::\d{2})?(?:\s*[AaPp][Mm])?\b",
            // 25/12/2023, 25-12-2023, 2023.12.25
            r"\b\d{1,4}[-/.]\d{1,2}[-/.]\d{1,4}\b",
            // Unix timestamps, seconds or milliseconds
            r"\b\d{10,13}\b",
        ];
        let patterns = sources
            .iter()
            .map(|p| Regex::new(p).expect("static pattern is valid"))
            .collect();
        Self { patterns }
    }
}

impl Default for RemoveTimestamps {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for RemoveTimestamps {
    fn name(&self) -> &'static str {
        "remove_timestamps"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        // `\d` is Unicode-aware, so the pre-scan has to admit any
        // decimal digit, not just ASCII
        text.chars().any(char::is_numeric) && self.patterns.iter().any(|re| re.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut current = text;
        for re in &self.patterns {
            current = match current {
                Cow::Borrowed(s) => re.replace_all(s, ""),
                Cow::Owned(s) => match re.replace_all(&s, "") {
                    Cow::Borrowed(_) => Cow::Owned(s),
                    Cow::Owned(replaced) => Cow::Owned(replaced),
                },
            };
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        RemoveTimestamps::new()
            .apply(Cow::Borrowed(input))
            .into_owned()
    }

    #[test]
    fn bracketed_subtitle_times() {
        assert_eq!(run("[00:09:43.329] مرحبا"), " مرحبا");
        assert_eq!(run("[0:09:43] نص"), " نص");
    }

    #[test]
    fn bare_clock_times() {
        assert_eq!(run("الساعة 10:30 صباحا"), "الساعة  صباحا");
        assert_eq!(run("at 10:30:45 PM sharp"), "at  sharp");
    }

    #[test]
    fn date_formats() {
        assert_eq!(run("يوم 25/12/2023 كان"), "يوم  كان");
        assert_eq!(run("25-12-2023"), "");
        assert_eq!(run("2023.12.25"), "");
    }

    #[test]
    fn iso_datetimes_removed_whole() {
        assert_eq!(run("قبل 2023-12-25T10:30:00Z وبعد"), "قبل  وبعد");
        assert_eq!(run("2023-12-25T10:30:00.123+02:00"), "");
    }

    #[test]
    fn epoch_integers() {
        assert_eq!(run("id 1703500200 end"), "id  end");
        assert_eq!(run("ms 1703500200123 end"), "ms  end");
        // 9 digits is below the heuristic
        assert_eq!(run("رقم 123456789"), "رقم 123456789");
    }

    #[test]
    fn arabic_indic_clock_times_match_too() {
        let stage = RemoveTimestamps::new();
        assert!(stage.needs_apply("الساعة ١٠:٣٠"));
        assert_eq!(run("الساعة ١٠:٣٠ مساء"), "الساعة  مساء");
    }

    #[test]
    fn clean_text_is_zero_copy() {
        let stage = RemoveTimestamps::new();
        let input = "لا أرقام هنا أبدا";
        assert!(!stage.needs_apply(input));
        assert!(matches!(stage.apply(Cow::Borrowed(input)), Cow::Borrowed(_)));
    }
}
