//! Scroll progress through an anchored window.

use crate::foundation::core::Bounds;

/// Which scroll window a region's progress is measured over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchors {
    /// From the region top reaching the viewport top to the region bottom reaching it.
    ///
    /// Tracks the region scrolling through itself, as a full-height hero does.
    Hero,
    /// From the region top entering at the viewport bottom to its bottom leaving at the top.
    ///
    /// Tracks the whole window during which any part of the region is visible.
    #[default]
    Ambient,
}

/// Resolved scroll offsets at which progress is 0 and 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorRange {
    /// Scroll offset where progress is 0.
    pub start: f64,
    /// Scroll offset where progress is 1.
    pub end: f64,
}

impl AnchorRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Resolve anchors against live geometry.
    ///
    /// A region without positive height resolves to an empty range, so its progress is 0 under
    /// either anchor kind.
    pub fn resolve(anchors: Anchors, bounds: Bounds, viewport_height: f64) -> Self {
        if bounds.height.is_nan() || bounds.height <= 0.0 {
            return Self::new(bounds.top, bounds.top);
        }
        match anchors {
            Anchors::Hero => Self::new(bounds.top, bounds.bottom()),
            Anchors::Ambient => Self::new(bounds.top - viewport_height, bounds.bottom()),
        }
    }

    /// Progress of `offset` through this range, clamped to `[0, 1]`.
    ///
    /// An empty, inverted or non-finite range yields 0.
    pub fn progress(self, offset: f64) -> f64 {
        let span = self.end - self.start;
        if !span.is_finite() || span <= 0.0 || !offset.is_finite() {
            return 0.0;
        }
        ((offset - self.start) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/progress.rs"]
mod tests;
