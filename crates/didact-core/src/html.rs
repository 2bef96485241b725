//! Safe HTML construction.
//!
//! Every piece of markup this crate produces is built as a tree of
//! [`Node`]s and serialized by a writer that entity-escapes all text and
//! attribute values. There is no raw-string insertion path, so authored
//! content (paragraph text, link labels, code listings) can never smuggle
//! markup into the output.

use std::fmt::Write as _;

/// A renderable markup node: an element or an escaped text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Character data; escaped on write.
    Text(String),
}

impl Node {
    /// Build a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Serialize this node (and its subtree) to an HTML string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Text(text) => {
                out.push_str(&html_escape::encode_text(text));
            },
            Self::Element(el) => el.write_to(out),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An HTML element under construction.
///
/// ```rust
/// use didact_core::html::{Element, Node};
///
/// let para = Element::new("p")
///     .class("text-base leading-relaxed mb-4")
///     .child(Node::text("a < b"));
/// assert_eq!(
///     Node::from(para).to_html(),
///     r#"<p class="text-base leading-relaxed mb-4">a &lt; b</p>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "meta", "link", "input"];

impl Element {
    /// Start building an element with the given tag name.
    ///
    /// Tag names are static by construction — they come from the renderer's
    /// fixed vocabulary, never from input data.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute. Values are escaped on write.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Shorthand for the ubiquitous `class` attribute.
    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append every node from an iterator.
    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Append an escaped text child.
    #[must_use]
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::Text(value.into()))
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(
                out,
                " {name}=\"{}\"",
                html_escape::encode_double_quoted_attribute(value)
            );
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_to(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Serialize a sequence of sibling nodes.
#[must_use]
pub fn render_fragment(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_to(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_entity_escaped() {
        let node = Node::text("<script>alert('x')</script>");
        assert_eq!(
            node.to_html(),
            "&lt;script&gt;alert('x')&lt;/script&gt;"
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let el = Element::new("a").attr("href", "/a?b=1&c=\"2\"");
        let html = Node::from(el).to_html();
        assert!(html.contains("&amp;"));
        assert!(html.contains("&quot;"));
        assert!(!html.contains("=\"2\"\""));
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let el = Element::new("img").attr("src", "/a.png").attr("alt", "a");
        let html = Node::from(el).to_html();
        assert_eq!(html, r#"<img src="/a.png" alt="a">"#);
    }

    #[test]
    fn nested_children_serialize_in_order() {
        let el = Element::new("ul")
            .child(Element::new("li").text("one"))
            .child(Element::new("li").text("two"));
        assert_eq!(
            Node::from(el).to_html(),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }
}
