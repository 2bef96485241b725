//! Outline extraction: the navigable section list derived from a document's
//! headings.
//!
//! Only heading blocks of level 2 or 3 become sections — level 1 is the
//! page title and levels 4-6 are too fine-grained to navigate by. Section
//! ids use the same derivation as the rendered heading anchors, which is
//! what makes outline links land on their headings.

use serde::Serialize;

use crate::anchor::anchor_id;
use crate::types::{ContentBlock, StructuredContent};

/// Levels that participate in the outline.
const NAVIGABLE_LEVELS: [u8; 2] = [2, 3];

/// One outline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Anchor id of the rendered heading this entry links to.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Heading level, 2 or 3.
    pub level: u8,
}

/// The derived outline of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outline {
    /// Sections in document order.
    pub sections: Vec<Section>,
}

impl Outline {
    /// Scan a document once and collect its navigable sections, in
    /// document order.
    #[must_use]
    pub fn extract(content: &StructuredContent) -> Self {
        let sections = content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Heading { level, content }
                    if NAVIGABLE_LEVELS.contains(level) =>
                {
                    Some(Section {
                        id: anchor_id(content),
                        title: content.clone(),
                        level: *level,
                    })
                },
                _ => None,
            })
            .collect();
        Self { sections }
    }

    /// Whether the outline is worth showing. A document with fewer than two
    /// sections has no useful outline and the navigation UI is suppressed
    /// entirely.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.sections.len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, content: &str) -> ContentBlock {
        ContentBlock::Heading {
            level,
            content: content.to_string(),
        }
    }

    #[test]
    fn only_levels_two_and_three_are_included() {
        let content = vec![
            heading(1, "Page Title"),
            heading(2, "Setup"),
            ContentBlock::Paragraph {
                content: "text".to_string(),
            },
            heading(3, "Install"),
            heading(4, "Fine Print"),
            heading(2, "Usage"),
        ];
        let outline = Outline::extract(&content);
        let ids: Vec<&str> = outline.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["setup", "install", "usage"]);
        assert_eq!(outline.sections[1].level, 3);
    }

    #[test]
    fn document_order_is_preserved() {
        let content = vec![heading(3, "Z Last First"), heading(2, "A First Last")];
        let outline = Outline::extract(&content);
        assert_eq!(outline.sections[0].title, "Z Last First");
        assert_eq!(outline.sections[1].title, "A First Last");
    }

    #[test]
    fn no_headings_means_empty_outline() {
        let content = vec![ContentBlock::Paragraph {
            content: "just text".to_string(),
        }];
        let outline = Outline::extract(&content);
        assert!(outline.sections.is_empty());
        assert!(!outline.is_navigable());
    }

    #[test]
    fn single_section_is_not_navigable() {
        let outline = Outline::extract(&vec![heading(2, "Only")]);
        assert!(!outline.is_navigable());
        let outline = Outline::extract(&vec![heading(2, "One"), heading(3, "Two")]);
        assert!(outline.is_navigable());
    }

    #[test]
    fn section_ids_match_rendered_anchor_ids() {
        // The cross-component invariant: outline targets and heading ids
        // come from the same derivation.
        let content = vec![heading(2, "Getting Started: Part 1!"), heading(2, "Done")];
        let outline = Outline::extract(&content);
        assert_eq!(outline.sections[0].id, anchor_id("Getting Started: Part 1!"));
    }
}
