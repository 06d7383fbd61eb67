use crate::animation::ease::Lerp;
use crate::foundation::core::{Length, Unit};
use crate::foundation::error::{ScrollFxError, ScrollFxResult};
use crate::parallax::progress::Anchors;

/// Visual property a parallax rule drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallaxProperty {
    /// Vertical translation of the layer.
    OffsetY,
    /// Layer opacity.
    Opacity,
}

/// Linear mapping from scroll progress to one property value.
///
/// Progress outside `input` clamps to the nearest output endpoint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxRule {
    /// Driven property.
    pub property: ParallaxProperty,
    /// Scroll window the progress is measured over.
    #[serde(default)]
    pub anchors: Anchors,
    /// Progress sub-range mapped onto `output`.
    #[serde(default = "full_range")]
    pub input: [f64; 2],
    /// Values at `input[0]` and `input[1]`.
    pub output: [f64; 2],
    /// Unit of the output values. Ignored for opacity.
    #[serde(default)]
    pub unit: Unit,
}

fn full_range() -> [f64; 2] {
    [0.0, 1.0]
}

impl ParallaxRule {
    /// Vertical offset rule, e.g. `5%` → `-5%`.
    ///
    /// Both endpoints must use the same unit; there is no way to interpolate `40px` toward `-5%`
    /// without the layer height.
    pub fn offset(anchors: Anchors, from: Length, to: Length) -> ScrollFxResult<Self> {
        if from.unit != to.unit {
            return Err(ScrollFxError::validation(format!(
                "ParallaxRule offset endpoints mix units ({from} → {to})"
            )));
        }
        Ok(Self {
            property: ParallaxProperty::OffsetY,
            anchors,
            input: full_range(),
            output: [from.value, to.value],
            unit: to.unit,
        })
    }

    /// Opacity rule over the full progress range.
    pub fn opacity(anchors: Anchors, from: f64, to: f64) -> Self {
        Self {
            property: ParallaxProperty::Opacity,
            anchors,
            input: full_range(),
            output: [from, to],
            unit: Unit::Px,
        }
    }

    /// Restrict the rule to a progress sub-range.
    pub fn over(mut self, start: f64, end: f64) -> Self {
        self.input = [start, end];
        self
    }

    /// Validate the rule's ranges.
    pub fn validate(&self) -> ScrollFxResult<()> {
        let [i0, i1] = self.input;
        let unit_range = 0.0..=1.0;
        if !unit_range.contains(&i0) || !unit_range.contains(&i1) {
            return Err(ScrollFxError::validation(
                "ParallaxRule input range must lie within [0, 1]",
            ));
        }
        if i0 >= i1 {
            return Err(ScrollFxError::validation(
                "ParallaxRule input range must be increasing",
            ));
        }
        if !self.output.iter().all(|v| v.is_finite()) {
            return Err(ScrollFxError::validation(
                "ParallaxRule output values must be finite",
            ));
        }
        Ok(())
    }

    /// Map scroll progress to the rule's output value.
    pub fn apply(&self, progress: f64) -> f64 {
        let [i0, i1] = self.input;
        let span = i1 - i0;
        let t = if span > 0.0 {
            ((progress - i0) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        <f64 as Lerp>::lerp(&self.output[0], &self.output[1], t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/rule.rs"]
mod tests;
