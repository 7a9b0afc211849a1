//! HTML/XML tag stripping and entity decoding.
//!
//! Scraped corpora arrive with markup residue; this removes `<...>` tags
//! and `<!-- ... -->` comments and decodes entities (`&amp;` → `&`),
//! keeping only visible text. Full document parsing (script/style
//! content, CDATA) is out of scope for plain-text corpus files.

use crate::stage::Stage;
use memchr::memchr;
use std::borrow::Cow;

/// Fast pre-scan: without `<` there are no tags.
#[inline(always)]
fn contains_tag(text: &str) -> bool {
    memchr(b'<', text.as_bytes()).is_some()
}

/// Fast pre-scan: without `&` there are no entities.
#[inline(always)]
fn contains_entities(text: &str) -> bool {
    memchr(b'&', text.as_bytes()).is_some()
}

pub struct StripHtml;

enum ParseState {
    Text,
    Tag,
    Comment,
}

fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = ParseState::Text;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            ParseState::Text => {
                if c == '<' {
                    // Comments need their own state so `>` inside one
                    // does not end it early
                    let mut lookahead = chars.clone();
                    if lookahead.next() == Some('!')
                        && lookahead.next() == Some('-')
                        && lookahead.next() == Some('-')
                    {
                        chars.next();
                        chars.next();
                        chars.next();
                        state = ParseState::Comment;
                    } else {
                        state = ParseState::Tag;
                    }
                } else {
                    out.push(c);
                }
            }
            ParseState::Tag => {
                if c == '>' {
                    state = ParseState::Text;
                }
            }
            ParseState::Comment => {
                if c == '-' && chars.peek() == Some(&'-') {
                    let mut lookahead = chars.clone();
                    lookahead.next();
                    if lookahead.next() == Some('>') {
                        chars.next();
                        chars.next();
                        state = ParseState::Text;
                    }
                }
            }
        }
    }
    out
}

impl Stage for StripHtml {
    fn name(&self) -> &'static str {
        "strip_html"
    }

    fn needs_apply(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        if contains_tag(text) {
            return true;
        }
        if contains_entities(text) {
            let mut decoded = String::with_capacity(text.len());
            html_escape::decode_html_entities_to_string(text, &mut decoded);
            return decoded != text;
        }
        false
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let has_tags = contains_tag(&text);
        let has_entities = contains_entities(&text);
        if !has_tags && !has_entities {
            return text;
        }

        // Decode entities first: `&lt;b&gt;` must not become a live tag,
        // so tags are stripped from the decoded text afterwards
        let decoded = if has_entities {
            let mut buf = String::with_capacity(text.len());
            html_escape::decode_html_entities_to_string(&text, &mut buf);
            if buf == text.as_ref() { text } else { Cow::Owned(buf) }
        } else {
            text
        };

        if !contains_tag(&decoded) {
            return decoded;
        }
        Cow::Owned(strip_tags(&decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_removed_text_kept() {
        let out = StripHtml.apply(Cow::Borrowed("<p>مرحبا <b>بالعالم</b></p>"));
        assert_eq!(out, "مرحبا بالعالم");
    }

    #[test]
    fn comments_with_inner_gt() {
        let out = StripHtml.apply(Cow::Borrowed("قبل <!-- x > y --> بعد"));
        assert_eq!(out, "قبل  بعد");
    }

    #[test]
    fn entities_decoded() {
        assert_eq!(
            StripHtml.apply(Cow::Borrowed("فول &amp; عدس")),
            "فول & عدس"
        );
    }

    #[test]
    fn encoded_tags_do_not_survive() {
        // &lt;b&gt; decodes to <b>, which must then be stripped
        assert_eq!(StripHtml.apply(Cow::Borrowed("&lt;b&gt;نص&lt;/b&gt;")), "نص");
    }

    #[test]
    fn plain_text_zero_copy() {
        let input = "نص بلا وسوم";
        assert!(!StripHtml.needs_apply(input));
        assert!(matches!(StripHtml.apply(Cow::Borrowed(input)), Cow::Borrowed(_)));
    }

    #[test]
    fn attributes_with_gt_in_quotes_are_best_effort() {
        // Simple scanner: first `>` closes the tag
        assert_eq!(StripHtml.apply(Cow::Borrowed("<img alt=\"a\">ب")), "ب");
    }
}
