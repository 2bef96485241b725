//! The block renderer: structured content in, renderable nodes out.
//!
//! Rendering is total over the known block set and preserves input order —
//! one node per renderable block. Two kinds of input produce no node
//! instead of an error: blocks of a type this frontend does not recognize
//! (forward compatibility with newer backends), and image blocks whose URL
//! is missing or not on the configured host allow-list. In both cases the
//! rest of the document still renders.

use tracing::warn;

use crate::anchor::anchor_id;
use crate::html::{Element, Node};
use crate::inline::{Span, parse_inline, sanitize_href};
use crate::types::{ContentBlock, StructuredContent};

/// Host allow-list applied to image block URLs.
///
/// Mirrors the deployment's remote-image configuration: site-relative URLs
/// always pass, absolute URLs must match an allowed host. Patterns are
/// either exact hosts (`localhost`) or wildcard subdomain patterns
/// (`*.supabase.co`).
#[derive(Debug, Clone, Default)]
pub struct ImagePolicy {
    hosts: Option<Vec<String>>,
}

impl ImagePolicy {
    /// Accept images from any host.
    #[must_use]
    pub const fn allow_all() -> Self {
        Self { hosts: None }
    }

    /// Accept images only from the given host patterns.
    #[must_use]
    pub fn allow_hosts(hosts: Vec<String>) -> Self {
        Self { hosts: Some(hosts) }
    }

    /// Whether an image URL may be rendered under this policy.
    #[must_use]
    pub fn allows(&self, url: &str) -> bool {
        let Some(patterns) = &self.hosts else {
            return true;
        };
        match url::Url::parse(url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    return false;
                }
                let Some(host) = parsed.host_str() else {
                    return false;
                };
                patterns.iter().any(|pattern| {
                    pattern.strip_prefix("*.").map_or_else(
                        || pattern == host,
                        |suffix| {
                            host.strip_suffix(suffix)
                                .is_some_and(|head| head.ends_with('.'))
                        },
                    )
                })
            },
            // Site-relative path, served from the frontend's own origin.
            Err(url::ParseError::RelativeUrlWithoutBase) => true,
            Err(_) => false,
        }
    }
}

/// Render a document body to nodes, accepting images from any host.
#[must_use]
pub fn render_blocks(content: &StructuredContent) -> Vec<Node> {
    render_blocks_with(content, &ImagePolicy::allow_all())
}

/// Render a document body to nodes under the given image policy.
#[must_use]
pub fn render_blocks_with(content: &StructuredContent, images: &ImagePolicy) -> Vec<Node> {
    content
        .iter()
        .filter_map(|block| render_block(block, images))
        .collect()
}

fn render_block(block: &ContentBlock, images: &ImagePolicy) -> Option<Node> {
    match block {
        ContentBlock::Heading { level, content } => Some(render_heading(*level, content)),
        ContentBlock::Paragraph { content } => Some(
            Element::new("p")
                .class("text-base leading-relaxed mb-4")
                .children(spans_to_nodes(&parse_inline(content)))
                .into(),
        ),
        ContentBlock::Image { url, alt, caption } => render_image(url, alt, caption.as_deref(), images),
        ContentBlock::Code {
            content,
            language,
            filename,
        } => Some(render_code(content, language.as_deref(), filename.as_deref())),
        ContentBlock::List { ordered, items } => Some(render_list(*ordered, items)),
        ContentBlock::Table { headers, rows } => Some(render_table(headers, rows)),
        ContentBlock::Unknown => None,
    }
}

fn render_heading(level: u8, content: &str) -> Node {
    let level = level.clamp(1, 6);
    let (tag, class) = match level {
        1 => ("h1", "font-bold scroll-mt-24 text-4xl mb-6 mt-8"),
        2 => ("h2", "font-bold scroll-mt-24 text-3xl mb-5 mt-7 pb-2 border-b-2 border-accent"),
        3 => ("h3", "font-bold scroll-mt-24 text-2xl mb-4 mt-6"),
        4 => ("h4", "font-bold scroll-mt-24 text-xl mb-3 mt-5"),
        5 => ("h5", "font-bold scroll-mt-24 text-lg mb-3 mt-4"),
        _ => ("h6", "font-bold scroll-mt-24 text-base mb-2 mt-4"),
    };

    let mut el = Element::new(tag).class(class);
    let id = anchor_id(content);
    if !id.is_empty() {
        el = el.attr("id", id);
    }
    el.text(content).into()
}

fn render_image(
    url: &str,
    alt: &str,
    caption: Option<&str>,
    images: &ImagePolicy,
) -> Option<Node> {
    if url.is_empty() {
        warn!("skipping image block with no url");
        return None;
    }
    if !images.allows(url) {
        warn!(url, "skipping image from disallowed host");
        return None;
    }

    let mut figure = Element::new("figure").class("my-8 flex flex-col items-center").child(
        Element::new("div")
            .class("relative max-w-xl w-full rounded-lg overflow-hidden border border-gray-200 shadow-sm")
            .child(
                Element::new("img")
                    .class("w-full h-auto object-contain")
                    .attr("src", url)
                    .attr("alt", alt)
                    .attr("loading", "lazy"),
            ),
    );
    if let Some(caption) = caption {
        figure = figure.child(
            Element::new("figcaption")
                .class("text-sm text-gray-600 text-center mt-3 italic max-w-2xl")
                .text(caption),
        );
    }
    Some(figure.into())
}

fn render_code(content: &str, language: Option<&str>, filename: Option<&str>) -> Node {
    let language = language.unwrap_or("text");
    let mut wrapper = Element::new("div").class("my-6");

    if let Some(filename) = filename {
        wrapper = wrapper.child(
            Element::new("div")
                .class("bg-gray-800 text-gray-300 px-4 py-2 rounded-t-lg text-sm font-mono flex items-center gap-2")
                .text(filename),
        );
    }

    // The filename bar owns the top corners when present.
    let pre_class = if filename.is_some() {
        "rounded-b-lg overflow-x-auto"
    } else {
        "rounded-lg overflow-x-auto"
    };

    wrapper
        .child(
            Element::new("pre").class(pre_class).child(
                Element::new("code")
                    .class(format!("language-{language}"))
                    .text(content),
            ),
        )
        .into()
}

fn render_list(ordered: bool, items: &[String]) -> Node {
    let (tag, class) = if ordered {
        ("ol", "list-decimal list-inside space-y-2 mb-4 ml-4")
    } else {
        ("ul", "list-disc list-inside space-y-2 mb-4 ml-4")
    };

    Element::new(tag)
        .class(class)
        .children(items.iter().map(|item| {
            Element::new("li")
                .class("leading-relaxed")
                .children(spans_to_nodes(&parse_inline(item)))
                .into()
        }))
        .into()
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> Node {
    let head_row = Element::new("tr").children(headers.iter().map(|header| {
        Element::new("th")
            .class("border border-gray-300 px-4 py-2 text-left font-semibold")
            .text(header)
            .into()
    }));

    // Cell text is literal data: no inline formatting, and rows render
    // whatever cells they have regardless of the header count.
    let body = Element::new("tbody").children(rows.iter().enumerate().map(|(i, row)| {
        let zebra = if i % 2 == 0 { "bg-white" } else { "bg-gray-50" };
        Element::new("tr")
            .class(zebra)
            .children(row.iter().map(|cell| {
                Element::new("td")
                    .class("border border-gray-300 px-4 py-2")
                    .text(cell)
                    .into()
            }))
            .into()
    }));

    Element::new("div")
        .class("my-6 overflow-x-auto")
        .child(
            Element::new("table")
                .class("min-w-full border-collapse border border-gray-300")
                .child(Element::new("thead").class("bg-gray-100").child(head_row))
                .child(body),
        )
        .into()
}

/// Convert parsed inline spans to nodes.
///
/// Link targets go through [`sanitize_href`]; a rejected target renders the
/// label as plain text instead of an anchor.
#[must_use]
pub fn spans_to_nodes(spans: &[Span]) -> Vec<Node> {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(text) => Node::text(text.clone()),
            Span::Strong(inner) => Element::new("strong").children(spans_to_nodes(inner)).into(),
            Span::Emphasis(inner) => Element::new("em").children(spans_to_nodes(inner)).into(),
            Span::Code(code) => Element::new("code").class("inline-code").text(code.clone()).into(),
            Span::Link { label, href } => match sanitize_href(href) {
                Some(href) => Element::new("a")
                    .attr("href", href)
                    .class("text-accent hover:text-accent-dark underline")
                    .text(label.clone())
                    .into(),
                None => {
                    warn!(%href, "dropping link with disallowed scheme");
                    Node::text(label.clone())
                },
            },
        })
        .collect()
}
