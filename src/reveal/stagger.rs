use std::time::Duration;

/// Per-index delay schedule for a group of entrances revealed together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    /// Delay applied to every member.
    #[serde(default)]
    pub base: Duration,
    /// Additional delay per index.
    pub step: Duration,
}

impl Stagger {
    pub fn new(step: Duration) -> Self {
        Self {
            base: Duration::ZERO,
            step,
        }
    }

    pub fn with_base(mut self, base: Duration) -> Self {
        self.base = base;
        self
    }

    /// Delay of member `index`: `base + index * step`, computed directly from the index.
    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base.saturating_add(self.step.saturating_mul(index))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/stagger.rs"]
mod tests;
