//! Scroll-position tracking for the navigation bar.
//!
//! The page is one column of sections; the nav highlights whichever
//! section the visitor is currently reading. The rules here are mirrored
//! verbatim into the generated page script, so tests against this module
//! pin the behavior shipped to the browser.

use std::collections::HashMap;

use crate::domain::Section;
use crate::obs;

/// How far below the viewport top the probe line sits, in CSS pixels.
///
/// Highlighting switches a little before a section's top edge reaches the
/// top of the window, which reads as "the section I'm looking at" instead
/// of "the section that already scrolled past".
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// Height of the fixed header, in CSS pixels. Scroll targets subtract it
/// so headings land below the bar instead of underneath it.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Measured geometry of one rendered section: offset from the document
/// top, and its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    /// Whether a probe line at `y` falls inside this section.
    ///
    /// The interval is half-open: the top edge is inside, the bottom edge
    /// belongs to whatever comes next.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Geometry for the sections actually present on the page.
///
/// Sections missing from the layout are skipped by the scan, so a page
/// rendered without, say, an education section still tracks correctly.
#[derive(Debug, Clone, Default)]
pub struct SectionLayout {
    entries: HashMap<Section, SectionGeometry>,
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, section: Section, top: f64, height: f64) {
        self.entries.insert(section, SectionGeometry { top, height });
    }

    pub fn get(&self, section: Section) -> Option<SectionGeometry> {
        self.entries.get(&section).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scroll destination for a nav jump to `section`, or `None` when the
    /// section is absent from this layout.
    pub fn scroll_target(&self, section: Section) -> Option<f64> {
        self.get(section).map(|g| scroll_target(g.top))
    }
}

/// Resolve which section a scroll position lands in.
///
/// The probe line sits [`SCROLL_LOOKAHEAD_PX`] below the scroll offset.
/// Sections are scanned in [`Section::ALL`] order and the first hit wins,
/// so if measured geometries ever overlap, the earlier section takes the
/// contested band. Returns `None` when the probe falls in a gap.
pub fn active_section(scroll_y: f64, layout: &SectionLayout) -> Option<Section> {
    let probe = scroll_y + SCROLL_LOOKAHEAD_PX;
    Section::ALL
        .iter()
        .copied()
        .find(|section| layout.get(*section).is_some_and(|g| g.contains(probe)))
}

/// The document offset to scroll to when a nav link for `section_top` is
/// activated: the section's top minus the fixed header, floored at zero.
pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - HEADER_OFFSET_PX).max(0.0)
}

/// Stateful wrapper over [`active_section`] that remembers the last match.
///
/// When the probe falls in a gap the previous selection is retained, so
/// the nav never flickers to "nothing" between sections.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    current: Section,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    /// A fresh tracker starts on the hero section, matching the initial
    /// page load before any scroll event fires.
    pub fn new() -> Self {
        Self {
            current: Section::Home,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Feed one scroll observation and return the (possibly updated)
    /// highlighted section.
    pub fn observe(&mut self, scroll_y: f64, layout: &SectionLayout) -> Section {
        if let Some(section) = active_section(scroll_y, layout) {
            if section != self.current {
                obs::emit_section_changed(self.current, section, scroll_y);
            }
            self.current = section;
        }
        self.current
    }
}
