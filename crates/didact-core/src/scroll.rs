//! Scroll-driven view state: the active outline section and the side-nav
//! pinning mode.
//!
//! The browser delivers scroll and footer-intersection events; everything
//! else — trigger-line math, last-section-at-or-above selection, per-frame
//! coalescing — is plain state kept here, out of the view layer. A tracker
//! is created when its view mounts and dropped when the view unmounts;
//! dropping it is the unsubscription, there are no global listeners to
//! leak.

use std::collections::HashMap;

use crate::outline::Section;

/// How far down the viewport the trigger line sits.
///
/// A section becomes active slightly before its heading reaches the top of
/// the viewport, which tracks where the reader's eyes actually are.
pub const TRIGGER_RATIO: f64 = 0.3;

/// A scroll position paired with the viewport height, as reported by the
/// embedding view on each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Distance scrolled from the top of the document, in pixels.
    pub scroll_offset: f64,
    /// Visible height, in pixels.
    pub height: f64,
}

impl Viewport {
    /// The document-space line that decides which section is active.
    #[must_use]
    pub fn trigger_line(&self) -> f64 {
        self.height.mul_add(TRIGGER_RATIO, self.scroll_offset)
    }
}

/// Source of rendered anchor offsets, supplied by the embedding view.
///
/// `None` means the anchor element is not currently in the rendered tree;
/// the tracker treats it as infinitely far down and never selects it.
pub trait AnchorPositions {
    /// Vertical offset of the anchor with the given id from the top of the
    /// document, if the anchor is currently rendered.
    fn offset_of(&self, id: &str) -> Option<f64>;
}

impl AnchorPositions for HashMap<String, f64> {
    fn offset_of(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

/// Continuously reconciles scroll position against section anchors.
///
/// Owns the derived `active_section_id` state; the navigation UI only ever
/// reads it. Scroll events arrive at arbitrary rates, so updates are
/// coalesced to one recomputation per display frame: the view calls
/// [`request_update`](Self::request_update) from its scroll handler and
/// [`on_frame`](Self::on_frame) from the frame callback it schedules when
/// that returns `true`.
#[derive(Debug)]
pub struct ScrollTracker {
    sections: Vec<Section>,
    active: Option<String>,
    frame_pending: bool,
}

impl ScrollTracker {
    /// Create a tracker over the document's sections.
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            active: None,
            frame_pending: false,
        }
    }

    /// The id of the section currently considered in view.
    #[must_use]
    pub fn active_section_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Note that the scroll position changed.
    ///
    /// Returns `true` when the caller should schedule a frame callback for
    /// [`on_frame`](Self::on_frame). Further calls before that frame runs
    /// return `false`, collapsing any burst of scroll events into a single
    /// recomputation.
    pub fn request_update(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Recompute the active section for the current frame.
    ///
    /// Clears the pending flag and returns the (possibly unchanged) active
    /// section id.
    pub fn on_frame(
        &mut self,
        viewport: Viewport,
        positions: &impl AnchorPositions,
    ) -> Option<&str> {
        self.frame_pending = false;
        self.active = self.compute_active(viewport, positions);
        self.active_section_id()
    }

    /// Where to scroll so the given section's heading sits at the top of
    /// the viewport, for click-to-navigate jumps. The tracker re-derives
    /// active state from the resulting position on the next frame.
    pub fn scroll_target(&self, id: &str, positions: &impl AnchorPositions) -> Option<f64> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .and_then(|section| positions.offset_of(&section.id))
    }

    /// The active section is the last one, in document order, whose anchor
    /// sits at or above the trigger line. When none qualify yet, the first
    /// section is active by default.
    fn compute_active(
        &self,
        viewport: Viewport,
        positions: &impl AnchorPositions,
    ) -> Option<String> {
        let trigger = viewport.trigger_line();
        let mut active = self.sections.first().map(|section| section.id.clone());

        for section in &self.sections {
            let top = positions
                .offset_of(&section.id)
                .unwrap_or(f64::INFINITY);
            if top <= trigger {
                active = Some(section.id.clone());
            } else {
                break;
            }
        }

        active
    }
}

/// Positioning mode of the course-contents side panel.
///
/// The panel stays pinned to the viewport while the reader scrolls the
/// document, and drops into document flow the moment the page footer
/// scrolls into view so the two never overlap. The footer observation is
/// binary — visible or not, no partial-intersection thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideNavPin {
    /// Pinned to the viewport (footer off-screen).
    Fixed,
    /// Anchored to the document near the footer.
    DocumentRelative,
}

impl SideNavPin {
    /// Pick the pinning mode for the current footer visibility.
    #[must_use]
    pub const fn for_footer(footer_visible: bool) -> Self {
        if footer_visible {
            Self::DocumentRelative
        } else {
            Self::Fixed
        }
    }
}
