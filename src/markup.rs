/*! Markup stripping and hyperlink extraction.

WikiExtractor (when run with `--links`) keeps hyperlinks as escaped HTML inside the paragraph text:

```text
제임스 얼 카터 주니어(, &lt;a href="1924%EB%85%84"&gt;1924년&lt;/a&gt; ...
```

From such a paragraph we derive three aligned outputs:

- the cleaned plain text ([clean_markup]),
- the link targets, percent-decoded or not ([extract_links]),
- the anchor spans, which are the visible text of each link ([extract_anchors]).

Anchor spans and link targets are positionally aligned: the n-th anchor is the text of the n-th link.
!*/
use std::borrow::Cow;

use lazy_static::lazy_static;
use percent_encoding::percent_decode_str;
use regex::Regex;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"<.*?>").unwrap();
    static ref HREF: Regex = Regex::new(r#"<a href="([^"]*)"#).unwrap();
    static ref ANCHOR: Regex = Regex::new(r"<a\s[^>]*>(.*?)</a>").unwrap();
}

/// Replace `&lt;` and `&gt;` with `<` and `>`.
///
/// No other entity is touched.
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains("&lt;") && !text.contains("&gt;") {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("&lt;", "<").replace("&gt;", ">"))
}

/// Unescape then remove anything that looks like a tag.
pub fn clean_markup(text: &str) -> String {
    let unescaped = unescape(text);
    TAG.replace_all(&unescaped, "").into_owned()
}

/// Get link targets (`href` values of anchor tags), in order of appearance.
///
/// When `decode` is set, targets are percent-decoded. Invalid UTF-8 sequences
/// are replaced by U+FFFD and `+` is kept as is.
pub fn extract_links(text: &str, decode: bool) -> Vec<String> {
    let unescaped = unescape(text);
    HREF.captures_iter(&unescaped)
        .map(|cap| {
            let raw = &cap[1];
            if decode {
                percent_decode(raw)
            } else {
                raw.to_string()
            }
        })
        .collect()
}

/// Get the visible text of each anchor, in order of appearance.
///
/// Tags nested inside an anchor are stripped, so that each span
/// is a substring of [clean_markup]'s output.
pub fn extract_anchors(text: &str) -> Vec<String> {
    let unescaped = unescape(text);
    ANCHOR
        .captures_iter(&unescaped)
        .map(|cap| TAG.replace_all(&cap[1], "").into_owned())
        .collect()
}

/// Paragraphs of an article are separated by `\n`.
///
/// Empty paragraphs are kept, filtering is up to the caller.
pub fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

fn percent_decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // James Earl Carter Jr., first paragraph of the kowiki article.
    const CARTER: &str = r#"제임스 얼 카터 주니어(, &lt;a href="1924%EB%85%84"&gt;1924년&lt;/a&gt; &lt;a href="10%EC%9B%94%201%EC%9D%BC"&gt;10월 1일&lt;/a&gt; ~ )는 &lt;a href="%EB%AF%BC%EC%A3%BC%EB%8B%B9%20%28%EB%AF%B8%EA%B5%AD%29"&gt;민주당&lt;/a&gt; 출신 &lt;a href="%EB%AF%B8%EA%B5%AD"&gt;미국&lt;/a&gt; 39대 대통령 (&lt;a href="1977%EB%85%84"&gt;1977년&lt;/a&gt; ~ &lt;a href="1981%EB%85%84"&gt;1981년&lt;/a&gt;)이다."#;

    #[test]
    fn carter_clean_text() {
        assert_eq!(
            clean_markup(CARTER),
            "제임스 얼 카터 주니어(, 1924년 10월 1일 ~ )는 민주당 출신 미국 39대 대통령 (1977년 ~ 1981년)이다."
        );
    }

    #[test]
    fn carter_raw_links() {
        let expected = vec![
            "1924%EB%85%84",
            "10%EC%9B%94%201%EC%9D%BC",
            "%EB%AF%BC%EC%A3%BC%EB%8B%B9%20%28%EB%AF%B8%EA%B5%AD%29",
            "%EB%AF%B8%EA%B5%AD",
            "1977%EB%85%84",
            "1981%EB%85%84",
        ];
        assert_eq!(extract_links(CARTER, false), expected);
    }

    #[test]
    fn carter_decoded_links() {
        let expected = vec!["1924년", "10월 1일", "민주당 (미국)", "미국", "1977년", "1981년"];
        assert_eq!(extract_links(CARTER, true), expected);
    }

    #[test]
    fn carter_anchors() {
        let expected = vec!["1924년", "10월 1일", "민주당", "미국", "1977년", "1981년"];
        assert_eq!(extract_anchors(CARTER), expected);
    }

    #[test]
    fn anchors_are_substrings_of_clean_text() {
        let clean = clean_markup(CARTER);
        for anchor in extract_anchors(CARTER) {
            assert!(clean.contains(&anchor), "{} not in clean text", anchor);
        }
    }

    #[test]
    fn unescape_only_lt_gt() {
        assert_eq!(unescape("a &lt;b&gt; &amp; c"), "a <b> &amp; c");
        assert!(matches!(unescape("no markup"), Cow::Borrowed(_)));
    }

    #[test]
    fn clean_is_non_greedy() {
        assert_eq!(clean_markup("<b>bold</b> and <i>it</i>"), "bold and it");
    }

    #[test]
    fn unescaped_anchor_form() {
        let text = r#"see <a href="Foo%20bar">foo</a>."#;
        assert_eq!(extract_links(text, true), vec!["Foo bar"]);
        assert_eq!(extract_anchors(text), vec!["foo"]);
        assert_eq!(clean_markup(text), "see foo.");
    }

    #[test]
    fn nested_tags_in_anchor() {
        let text = r#"&lt;a href="X"&gt;&lt;b&gt;bold&lt;/b&gt; link&lt;/a&gt;"#;
        assert_eq!(extract_anchors(text), vec!["bold link"]);
    }

    #[test]
    fn plus_is_not_space() {
        assert_eq!(extract_links(r#"<a href="a+b%20c%2B">"#, true), vec!["a+b c+"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(extract_links(r#"<a href="%FF">"#, true), vec!["\u{FFFD}"]);
    }

    #[test]
    fn split() {
        let paragraphs: Vec<&str> = split_paragraphs("title\n\nfirst\nsecond").collect();
        assert_eq!(paragraphs, vec!["title", "", "first", "second"]);
    }
}
