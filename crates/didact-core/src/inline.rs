//! Inline formatting: the markdown-like span syntax inside paragraph text
//! and list items.
//!
//! Authored text supports four span kinds: `**bold**`, `*italic*`,
//! `` `code` `` and `[label](url)`. Instead of substituting markup into the
//! string (the injection-prone approach this design replaces), the text is
//! parsed into a small typed [`Span`] tree which the renderer turns into
//! escaped elements.
//!
//! The passes run in a fixed order — bold, then italic, then code, then
//! links. The order is load-bearing: a double-asterisk span must be claimed
//! by the bold pass before the italic pass sees it, otherwise `**x**` would
//! decompose into two broken single-asterisk matches. Later passes apply
//! inside bold/italic content (so `**bold *and* text**` nests), but code
//! span content is terminal: nothing formats inside a code span, its text
//! renders literally.
//!
//! Delimiter matching follows the original substitution rules: a span needs
//! at least one character of content, claims the nearest closing delimiter,
//! and never crosses a line break. Unmatched delimiters stay literal text.

use memchr::{memchr, memmem};

/// One parsed inline span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Literal text.
    Text(String),
    /// `**bold**` content; may contain nested italic/code/link spans.
    Strong(Vec<Span>),
    /// `*italic*` content; may contain nested code/link spans.
    Emphasis(Vec<Span>),
    /// `` `code` `` content, rendered literally with no further formatting.
    Code(String),
    /// `[label](url)` anchor. The href is sanitized at render time; the
    /// label is plain text.
    Link {
        /// Anchor text.
        label: String,
        /// Target as authored, unsanitized.
        href: String,
    },
}

/// Parse inline formatting into a span sequence.
///
/// Total: any input produces a valid span list, and input with no markup
/// round-trips as a single [`Span::Text`].
#[must_use]
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    for piece in split_delimited(text, "**") {
        match piece {
            Piece::Wrapped(inner) => spans.push(Span::Strong(italic_pass(inner))),
            Piece::Plain(plain) => spans.extend(italic_pass(plain)),
        }
    }
    spans
}

fn italic_pass(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    for piece in split_delimited(text, "*") {
        match piece {
            Piece::Wrapped(inner) => spans.push(Span::Emphasis(code_pass(inner))),
            Piece::Plain(plain) => spans.extend(code_pass(plain)),
        }
    }
    spans
}

fn code_pass(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    for piece in split_delimited(text, "`") {
        match piece {
            Piece::Wrapped(inner) => spans.push(Span::Code(inner.to_string())),
            Piece::Plain(plain) => spans.extend(link_pass(plain)),
        }
    }
    spans
}

fn link_pass(text: &str) -> Vec<Span> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut cursor = 0;
    let mut search = 0;

    while let Some(rel) = memchr(b'[', &bytes[search..]) {
        let open = search + rel;
        // Label needs at least one character before the "](" separator.
        let Some(mid) = bytes
            .get(open + 2..)
            .and_then(|hay| memmem::find(hay, b"]("))
            .map(|rel| open + 2 + rel)
        else {
            search = open + 1;
            continue;
        };
        let href_start = mid + 2;
        let Some(close) = bytes
            .get(href_start + 1..)
            .and_then(|hay| memchr(b')', hay))
            .map(|rel| href_start + 1 + rel)
        else {
            search = open + 1;
            continue;
        };

        let label = &text[open + 1..mid];
        let href = &text[href_start..close];
        if label.contains('\n') || href.contains('\n') {
            search = open + 1;
            continue;
        }

        if open > cursor {
            spans.push(Span::Text(text[cursor..open].to_string()));
        }
        spans.push(Span::Link {
            label: label.to_string(),
            href: href.to_string(),
        });
        cursor = close + 1;
        search = cursor;
    }

    if cursor < text.len() {
        spans.push(Span::Text(text[cursor..].to_string()));
    }
    spans
}

enum Piece<'a> {
    Plain(&'a str),
    Wrapped(&'a str),
}

/// Split `text` on non-greedy `delim`-delimited pairs.
///
/// A pair needs at least one content character and may not span a line
/// break; an opener with no eligible closer is literal text.
fn split_delimited<'a>(text: &'a str, delim: &str) -> Vec<Piece<'a>> {
    let bytes = text.as_bytes();
    let d = delim.as_bytes();
    let mut pieces = Vec::new();
    let mut cursor = 0;
    let mut search = 0;

    while let Some(rel) = memmem::find(&bytes[search..], d) {
        let open = search + rel;
        let content_start = open + d.len();
        let Some(close) = bytes
            .get(content_start + 1..)
            .and_then(|hay| memmem::find(hay, d))
            .map(|rel| content_start + 1 + rel)
        else {
            search = open + 1;
            continue;
        };

        let content = &text[content_start..close];
        if content.contains('\n') {
            search = open + 1;
            continue;
        }

        if open > cursor {
            pieces.push(Piece::Plain(&text[cursor..open]));
        }
        pieces.push(Piece::Wrapped(content));
        cursor = close + d.len();
        search = cursor;
    }

    if cursor < text.len() {
        pieces.push(Piece::Plain(&text[cursor..]));
    }
    pieces
}

/// Validate a link target against the allowed scheme set.
///
/// Absolute URLs must be `http`, `https` or `mailto`; site-relative targets
/// pass through. Anything else (`javascript:`, `data:`, malformed input)
/// is rejected and the renderer degrades the link to its label text.
#[must_use]
pub fn sanitize_href(href: &str) -> Option<&str> {
    match url::Url::parse(href) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https" | "mailto").then_some(href)
        },
        Err(url::ParseError::RelativeUrlWithoutBase) => Some(href),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    #[test]
    fn plain_text_is_a_single_span() {
        assert_eq!(parse_inline("no markup here"), vec![text("no markup here")]);
    }

    #[test]
    fn bold_resolves_before_italic() {
        // A lone italic pass would chew through the double asterisks and
        // produce mismatched emphasis; the bold pass must claim them first.
        let spans = parse_inline("**bold *and* text**");
        assert_eq!(
            spans,
            vec![Span::Strong(vec![
                text("bold "),
                Span::Emphasis(vec![text("and")]),
                text(" text"),
            ])]
        );
    }

    #[test]
    fn all_four_span_kinds() {
        let spans = parse_inline("see **docs**, *maybe* run `cargo test` or [ask](https://example.com)");
        assert_eq!(
            spans,
            vec![
                text("see "),
                Span::Strong(vec![text("docs")]),
                text(", "),
                Span::Emphasis(vec![text("maybe")]),
                text(" run "),
                Span::Code("cargo test".to_string()),
                text(" or "),
                Span::Link {
                    label: "ask".to_string(),
                    href: "https://example.com".to_string(),
                },
            ]
        );
    }

    #[test]
    fn code_content_is_terminal() {
        let spans = parse_inline("`**not bold** [not](link)`");
        assert_eq!(
            spans,
            vec![Span::Code("**not bold** [not](link)".to_string())]
        );
    }

    #[test]
    fn unmatched_delimiters_stay_literal() {
        assert_eq!(parse_inline("2 * 3 = 6"), vec![text("2 * 3 = 6")]);
        assert_eq!(parse_inline("a ** b"), vec![text("a ** b")]);
        assert_eq!(parse_inline("[label only"), vec![text("[label only")]);
        assert_eq!(parse_inline("[label] (spaced)"), vec![text("[label] (spaced)")]);
    }

    #[test]
    fn spans_do_not_cross_line_breaks() {
        assert_eq!(
            parse_inline("**first\nsecond**"),
            vec![text("**first\nsecond**")]
        );
    }

    #[test]
    fn link_href_claims_first_closing_paren() {
        let spans = parse_inline("[label](https://example.com/a) (aside)");
        assert_eq!(
            spans,
            vec![
                Span::Link {
                    label: "label".to_string(),
                    href: "https://example.com/a".to_string(),
                },
                text(" (aside)"),
            ]
        );
    }

    #[test]
    fn sanitize_allows_web_schemes_and_relative() {
        assert_eq!(sanitize_href("https://example.com"), Some("https://example.com"));
        assert_eq!(sanitize_href("http://localhost:3000/x"), Some("http://localhost:3000/x"));
        assert_eq!(sanitize_href("mailto:hi@example.com"), Some("mailto:hi@example.com"));
        assert_eq!(sanitize_href("/tutorials/rust"), Some("/tutorials/rust"));
        assert_eq!(sanitize_href("#setup"), Some("#setup"));
    }

    #[test]
    fn sanitize_rejects_script_schemes() {
        assert_eq!(sanitize_href("javascript:alert(1)"), None);
        assert_eq!(sanitize_href("JavaScript:alert(1)"), None);
        assert_eq!(sanitize_href("data:text/html,<b>x</b>"), None);
    }

    proptest! {
        #[test]
        fn markup_free_text_round_trips(s in "[^*`\\[\\]()]*") {
            let spans = parse_inline(&s);
            if s.is_empty() {
                prop_assert!(spans.is_empty());
            } else {
                prop_assert_eq!(spans, vec![Span::Text(s)]);
            }
        }

        #[test]
        fn parsing_is_total(s in ".*") {
            let _ = parse_inline(&s);
        }
    }
}
