use crate::foundation::error::{ScrollFxError, ScrollFxResult};

pub use kurbo::Vec2;

/// Identifier of a page region (section) registered with the engine.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct RegionId(pub String);

impl RegionId {
    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an element observed for entrance animations.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Document-space vertical geometry of a region or element, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Distance from the document top to the element top.
    pub top: f64,
    /// Element height.
    pub height: f64,
}

impl Bounds {
    /// Create bounds from a top offset and a height.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Document offset of the bottom edge.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Validate that both fields are finite and the height is not negative.
    pub fn validate(self) -> ScrollFxResult<()> {
        if !self.top.is_finite() || !self.height.is_finite() {
            return Err(ScrollFxError::validation("Bounds must be finite"));
        }
        if self.height < 0.0 {
            return Err(ScrollFxError::validation("Bounds height must be >= 0"));
        }
        Ok(())
    }
}

/// Unit attached to an animated length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Unit {
    /// CSS pixels.
    #[default]
    Px,
    /// Percentage of the animated element's own size.
    Percent,
}

/// A scalar paired with its unit, e.g. `-5%` or `40px`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Length {
    /// Magnitude.
    pub value: f64,
    /// Unit of `value`.
    pub unit: Unit,
}

impl Length {
    /// Pixel length.
    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    /// Percentage length.
    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.unit {
            Unit::Px => write!(f, "{}px", self.value),
            Unit::Percent => write!(f, "{}%", self.value),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
