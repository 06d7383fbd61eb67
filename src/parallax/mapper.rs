use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::foundation::core::{Length, RegionId, Unit};
use crate::foundation::error::ScrollFxResult;
use crate::parallax::progress::AnchorRange;
use crate::parallax::rule::{ParallaxProperty, ParallaxRule};
use crate::scroll::regions::RegionRegistry;

/// Per-region parallax output consumed by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RegionTransform {
    /// Vertical layer offset.
    pub offset: Length,
    /// Layer opacity.
    pub opacity: f64,
}

impl Default for RegionTransform {
    fn default() -> Self {
        Self {
            offset: Length::default(),
            opacity: 1.0,
        }
    }
}

type RuleList = SmallVec<[ParallaxRule; 2]>;

/// Maps scroll offset to per-region transforms.
///
/// Holds only immutable rules; every output is recomputed from the current offset and live
/// geometry, so calling it twice with the same inputs gives the same answer.
#[derive(Debug, Default)]
pub struct ParallaxMapper {
    rules: BTreeMap<RegionId, RuleList>,
}

impl ParallaxMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a rule to a region. Rules for the same property are applied in insertion order,
    /// so the last one wins.
    pub fn add_rule(&mut self, region: RegionId, rule: ParallaxRule) -> ScrollFxResult<()> {
        rule.validate()?;
        self.rules.entry(region).or_default().push(rule);
        Ok(())
    }

    pub fn rules(&self, region: &RegionId) -> &[ParallaxRule] {
        self.rules.get(region).map(|r| r.as_slice()).unwrap_or(&[])
    }

    /// Progress of one rule for a region, or `None` when the region is not registered.
    pub fn progress(
        &self,
        regions: &RegionRegistry,
        region: &RegionId,
        rule: &ParallaxRule,
        offset: f64,
        viewport_height: f64,
    ) -> Option<f64> {
        let bounds = regions.bounds(region)?;
        Some(AnchorRange::resolve(rule.anchors, bounds, viewport_height).progress(offset))
    }

    /// Transform for one region, or `None` when it has no rules or is not registered.
    pub fn transform(
        &self,
        regions: &RegionRegistry,
        region: &RegionId,
        offset: f64,
        viewport_height: f64,
    ) -> Option<RegionTransform> {
        let rules = self.rules.get(region)?;
        let bounds = regions.bounds(region)?;

        let mut out = RegionTransform::default();
        for rule in rules {
            let progress =
                AnchorRange::resolve(rule.anchors, bounds, viewport_height).progress(offset);
            let value = rule.apply(progress);
            match rule.property {
                ParallaxProperty::OffsetY => {
                    out.offset = Length {
                        value,
                        unit: rule.unit,
                    }
                }
                ParallaxProperty::Opacity => out.opacity = value.clamp(0.0, 1.0),
            }
        }
        Some(out)
    }

    /// Transforms for every region that has rules and is currently registered.
    pub fn transforms(
        &self,
        regions: &RegionRegistry,
        offset: f64,
        viewport_height: f64,
    ) -> Vec<(RegionId, RegionTransform)> {
        self.rules
            .keys()
            .filter_map(|id| {
                self.transform(regions, id, offset, viewport_height)
                    .map(|t| (id.clone(), t))
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }
}

impl RegionTransform {
    /// Offset in pixels given the height of the transformed layer.
    pub fn offset_px(&self, layer_height: f64) -> f64 {
        match self.offset.unit {
            Unit::Px => self.offset.value,
            Unit::Percent => self.offset.value / 100.0 * layer_height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/mapper.rs"]
mod tests;
