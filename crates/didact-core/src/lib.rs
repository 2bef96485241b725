//! # didact-core
//!
//! Core functionality for didact - a content-presentation frontend for a
//! tutorials-and-blog site.
//!
//! This crate fetches structured documents (tutorials, blog posts,
//! categories) from a remote content API and turns them into render-ready
//! HTML, together with the navigation state a reading view needs: a derived
//! outline and a scroll-position-driven active section.
//!
//! ## Architecture
//!
//! The crate is organized around a one-directional flow:
//!
//! - **Client**: typed, one-shot HTTP calls against the content API
//! - **Types**: the tagged block model and document collections
//! - **Renderer**: blocks to escaped HTML nodes, order-preserving and total
//! - **Outline & Scroll**: the section list derived from headings, and the
//!   frame-coalesced active-section tracker that drives the section nav
//!
//! ## Quick Start
//!
//! ```rust
//! use didact_core::{Outline, render_blocks};
//! use didact_core::types::ContentBlock;
//!
//! let content = vec![
//!     ContentBlock::Heading { level: 2, content: "Setup".into() },
//!     ContentBlock::Paragraph { content: "Run **cargo build** first.".into() },
//! ];
//!
//! let nodes = render_blocks(&content);
//! assert_eq!(nodes.len(), 2);
//!
//! let outline = Outline::extract(&content);
//! assert_eq!(outline.sections[0].id, "setup");
//! ```
//!
//! ## Leniency
//!
//! The backend evolves independently of this frontend, so the document
//! pipeline degrades instead of failing: unknown block types deserialize to
//! a placeholder and render as nothing, and a block missing a load-bearing
//! field (an image without a URL) is skipped rather than taking the page
//! down. Fetch failures surface as [`Error`] values the page layer maps to
//! not-found or error pages.

/// Anchor id derivation shared by the renderer and the outline
pub mod anchor;
/// Typed HTTP client for the content API
pub mod client;
/// Site configuration loading and environment overrides
pub mod config;
/// Error types and result aliases
pub mod error;
/// Safe HTML element construction
pub mod html;
/// Inline span parsing for paragraph and list-item markup
pub mod inline;
/// Outline extraction from heading blocks
pub mod outline;
/// Block-to-node rendering
pub mod render;
/// Scroll-driven active-section tracking and side-nav pinning
pub mod scroll;
/// Core data types and structures
pub mod types;

// Re-export commonly used types
pub use anchor::anchor_id;
pub use client::{ContentClient, MIN_SEARCH_QUERY_CHARS};
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use html::{Element, Node, render_fragment};
pub use inline::{Span, parse_inline, sanitize_href};
pub use outline::{Outline, Section};
pub use render::{ImagePolicy, render_blocks, render_blocks_with};
pub use scroll::{AnchorPositions, ScrollTracker, SideNavPin, TRIGGER_RATIO, Viewport};
pub use types::*;
