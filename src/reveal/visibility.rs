//! Viewport intersection tests with an inset margin.

use crate::foundation::core::Bounds;

/// The part of the document currently considered "in view" for reveal purposes.
///
/// The viewport is inset by `margin` on its top and bottom edges, so an element must travel
/// `margin` pixels past the edge before it counts as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealWindow {
    top: f64,
    bottom: f64,
}

impl RevealWindow {
    pub fn new(scroll_offset: f64, viewport_height: f64, margin: f64) -> Self {
        let top = scroll_offset + margin;
        let bottom = scroll_offset + viewport_height - margin;
        Self { top, bottom }
    }

    /// `true` if the window has positive height after the inset.
    pub fn is_open(self) -> bool {
        self.bottom > self.top
    }

    /// Fraction of `bounds` that lies inside the window.
    ///
    /// Zero-height elements count as fully visible while their position is inside the window.
    pub fn intersection_ratio(self, bounds: Bounds) -> f64 {
        if !self.is_open() {
            return 0.0;
        }
        if bounds.height <= 0.0 {
            return if bounds.top >= self.top && bounds.top <= self.bottom {
                1.0
            } else {
                0.0
            };
        }
        let overlap = bounds.bottom().min(self.bottom) - bounds.top.max(self.top);
        (overlap / bounds.height).clamp(0.0, 1.0)
    }

    /// Visibility test against a minimum ratio. A threshold of 0 means "any overlap".
    pub fn is_visible(self, bounds: Bounds, threshold: f64) -> bool {
        let ratio = self.intersection_ratio(bounds);
        if threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= threshold
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/visibility.rs"]
mod tests;
