use std::collections::BTreeMap;

use crate::foundation::core::{Bounds, RegionId};

/// Live geometry query for a region. Called on every read because layout can shift at any time.
pub type BoundsProvider = Box<dyn Fn() -> Bounds>;

/// A page section whose geometry the engine tracks.
pub struct TrackedRegion {
    /// Region identifier.
    pub id: RegionId,
    bounds: BoundsProvider,
}

impl TrackedRegion {
    pub fn new(id: impl Into<RegionId>, bounds: impl Fn() -> Bounds + 'static) -> Self {
        Self {
            id: id.into(),
            bounds: Box::new(bounds),
        }
    }

    /// Query the current geometry.
    pub fn bounds(&self) -> Bounds {
        (self.bounds)()
    }
}

impl std::fmt::Debug for TrackedRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackedRegion")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Registry of tracked regions, shared by parallax and navigation.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    regions: BTreeMap<RegionId, TrackedRegion>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region, replacing any previous registration with the same id.
    pub fn insert(&mut self, region: TrackedRegion) -> Option<TrackedRegion> {
        self.regions.insert(region.id.clone(), region)
    }

    pub fn remove(&mut self, id: &RegionId) -> Option<TrackedRegion> {
        self.regions.remove(id)
    }

    pub fn contains(&self, id: &RegionId) -> bool {
        self.regions.contains_key(id)
    }

    /// Live bounds of `id`, or `None` when it is not registered (yet).
    ///
    /// Non-finite geometry is treated as unavailable.
    pub fn bounds(&self, id: &RegionId) -> Option<Bounds> {
        let raw = self.regions.get(id)?.bounds();
        // Negative heights clamp to an empty region.
        let height = if raw.height < 0.0 { 0.0 } else { raw.height };
        let bounds = Bounds::new(raw.top, height);
        match bounds.validate() {
            Ok(()) => Some(bounds),
            Err(err) => {
                tracing::trace!(region = %id, %err, "region geometry unavailable");
                None
            }
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &RegionId> {
        self.regions.keys()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/regions.rs"]
mod tests;
