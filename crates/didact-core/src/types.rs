//! Core data types: the structured-content block model and the document
//! collections served by the content API.
//!
//! The block model mirrors the backend's schema one-to-one. Deserialization
//! is deliberately lenient: unknown block types collapse into
//! [`ContentBlock::Unknown`] (rendered as nothing), and per-block string
//! fields default to empty rather than failing the whole document, so one
//! degenerate block never takes a page down.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One typed unit of document content.
///
/// Tagged on the wire by a lowercase `type` field
/// (`heading | paragraph | image | code | list | table`). Order within a
/// document is significant and preserved end-to-end: document order is
/// render order is outline order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Section heading, levels 1-6.
    Heading {
        /// Heading depth; values outside 1-6 are clamped at render time.
        #[serde(default = "default_heading_level")]
        level: u8,
        /// Heading text; also the source of the derived anchor id.
        #[serde(default)]
        content: String,
    },
    /// Body text; may contain inline markup (`**bold**`, `*italic*`,
    /// `` `code` ``, `[label](url)`).
    Paragraph {
        /// Raw paragraph text.
        #[serde(default)]
        content: String,
    },
    /// Illustration with required alt text and an optional caption.
    Image {
        /// Image location. An empty or missing URL makes the block
        /// unrenderable; it is skipped rather than failing the document.
        #[serde(default)]
        url: String,
        /// Accessible alternative text.
        #[serde(default)]
        alt: String,
        /// Caption shown under the image when present.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// Source listing with optional language tag and filename label.
    Code {
        /// Listing body; may be empty.
        #[serde(default)]
        content: String,
        /// Highlighting language; display falls back to `"text"`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        /// Filename shown in a label bar above the listing.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
    },
    /// Ordered or unordered list; items carry inline markup.
    List {
        /// Numbered when true, bulleted otherwise.
        #[serde(default)]
        ordered: bool,
        /// Item texts, in order. May be empty.
        #[serde(default)]
        items: Vec<String>,
    },
    /// Literal tabular data. Cell text is rendered verbatim, and a row's
    /// cell count need not match the header count.
    Table {
        /// Header cells, in order.
        #[serde(default)]
        headers: Vec<String>,
        /// Body rows, each an ordered run of cells.
        #[serde(default)]
        rows: Vec<Vec<String>>,
    },
    /// Any block type this frontend does not recognize. Skipped at render
    /// time so newer backend block kinds degrade gracefully.
    #[serde(other)]
    Unknown,
}

const fn default_heading_level() -> u8 {
    1
}

/// A document body: the ordered block sequence.
pub type StructuredContent = Vec<ContentBlock>;

/// A tutorial document, as served by `/api/tutorials`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    /// Backend document id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug within the category.
    pub slug: String,
    /// Short teaser shown in listings.
    #[serde(default)]
    pub summary: String,
    /// Document body.
    #[serde(default)]
    pub content: StructuredContent,
    /// Position within the category's course sequence.
    #[serde(default)]
    pub order: u32,
    /// Estimated reading time in minutes, when the backend provides one.
    #[serde(default)]
    pub reading_time: Option<u32>,
    /// Unpublished documents are filtered server-side; kept for fidelity.
    #[serde(default)]
    pub is_published: bool,
    /// Owning category (populated at fetch depth 1).
    pub category: Category,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A blog post, as served by `/api/blogs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Backend document id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Short teaser shown in listings.
    #[serde(default)]
    pub summary: String,
    /// Document body.
    #[serde(default)]
    pub content: StructuredContent,
    /// Unpublished documents are filtered server-side; kept for fidelity.
    #[serde(default)]
    pub is_published: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A tutorial category, as served by `/api/categories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend document id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Optional blurb shown on the category card.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Which collection a search hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// Hit in the tutorials collection.
    Tutorial,
    /// Hit in the blogs collection.
    Blog,
}

/// One hit from the `/api/search` passthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Source collection of the hit.
    #[serde(rename = "type")]
    pub kind: ResultKind,
    /// Backend document id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Short teaser shown in the results list.
    #[serde(default)]
    pub summary: String,
    /// Owning category, present for tutorial hits.
    #[serde(default)]
    pub category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_tags_round_trip() {
        let json = r#"[
            {"type":"heading","level":2,"content":"Setup"},
            {"type":"paragraph","content":"Install **it**."},
            {"type":"image","url":"/a.png","alt":"a"},
            {"type":"code","content":"fn main() {}","language":"rust","filename":"main.rs"},
            {"type":"list","ordered":true,"items":["one","two"]},
            {"type":"table","headers":["k","v"],"rows":[["a","1"]]}
        ]"#;
        let content: StructuredContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.len(), 6);
        assert!(matches!(
            content[0],
            ContentBlock::Heading { level: 2, .. }
        ));
        assert!(matches!(content[5], ContentBlock::Table { .. }));
    }

    #[test]
    fn unknown_block_type_deserializes_to_unknown() {
        let json = r#"[
            {"type":"paragraph","content":"before"},
            {"type":"callout","tone":"info","content":"future block kind"},
            {"type":"paragraph","content":"after"}
        ]"#;
        let content: StructuredContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.len(), 3);
        assert_eq!(content[1], ContentBlock::Unknown);
    }

    #[test]
    fn missing_optional_fields_are_tolerated() {
        let json = r#"{"type":"image","alt":"diagram"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        match block {
            ContentBlock::Image { url, alt, caption } => {
                assert!(url.is_empty());
                assert_eq!(alt, "diagram");
                assert!(caption.is_none());
            },
            other => panic!("expected image block, got {other:?}"),
        }

        let json = r#"{"type":"code","content":""}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert!(matches!(
            block,
            ContentBlock::Code {
                language: None,
                filename: None,
                ..
            }
        ));
    }

    #[test]
    fn empty_content_array_is_valid() {
        let content: StructuredContent = serde_json::from_str("[]").unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn search_result_kind_uses_type_field() {
        let json = r#"{"type":"blog","id":"1","title":"T","slug":"t","summary":""}"#;
        let hit: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(hit.kind, ResultKind::Blog);
        assert!(hit.category.is_none());
    }
}
