use std::time::Duration;

use crate::animation::ease::Ease;
use crate::animation::spring::Spring;
use crate::animation::transition::Transition;
use crate::foundation::error::{ScrollFxError, ScrollFxResult};
use crate::particles::field::FieldSpec;

/// How navigation scrolls are carried out.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScrollMode {
    /// One `scroll_to(.., Smooth)` call; the host animates.
    #[default]
    Native,
    /// The engine animates the offset itself and writes it each tick.
    Animated {
        /// Scroll duration in milliseconds.
        duration_ms: u64,
        /// Easing curve.
        #[serde(default)]
        ease: Ease,
    },
}

/// Engine tuning. Every field has a default matching the reference landing page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ambient particle field shape.
    pub particles: FieldSpec,
    /// Particle tick interval in milliseconds.
    pub particle_tick_ms: u64,
    /// Most particle ticks applied for one `tick` call after a stall.
    pub max_catch_up_ticks: u32,
    /// Seed for particle generation. `None` draws one from the clock at mount.
    pub seed: Option<u64>,
    /// Fixed header height subtracted from navigation targets, in pixels.
    pub header_offset: f64,
    /// Viewport inset for entrance triggers, in pixels.
    pub reveal_margin: f64,
    /// Minimum visible fraction for entrance triggers; 0 means any overlap.
    pub reveal_threshold: f64,
    /// Default per-index stagger step in milliseconds.
    pub stagger_step_ms: u64,
    /// Navigation scroll strategy.
    pub scroll: ScrollMode,
    /// Menu overlay slide transition.
    pub menu_transition: Transition,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            particles: FieldSpec::default(),
            particle_tick_ms: 50,
            max_catch_up_ticks: 4,
            seed: None,
            header_offset: 80.0,
            reveal_margin: 100.0,
            reveal_threshold: 0.0,
            stagger_step_ms: 200,
            scroll: ScrollMode::Native,
            menu_transition: Transition::Spring(Spring::new(300.0, 30.0)),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> ScrollFxResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> ScrollFxResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ScrollFxResult<()> {
        self.particles.validate()?;
        if self.particle_tick_ms == 0 {
            return Err(ScrollFxError::config("particle_tick_ms must be > 0"));
        }
        if self.max_catch_up_ticks == 0 {
            return Err(ScrollFxError::config("max_catch_up_ticks must be > 0"));
        }
        if !self.header_offset.is_finite() || self.header_offset < 0.0 {
            return Err(ScrollFxError::config(
                "header_offset must be finite and >= 0",
            ));
        }
        if !self.reveal_margin.is_finite() {
            return Err(ScrollFxError::config("reveal_margin must be finite"));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ScrollFxError::config("reveal_threshold must be in [0, 1]"));
        }
        self.menu_transition
            .validate()
            .map_err(|e| ScrollFxError::config(format!("menu_transition: {e}")))?;
        Ok(())
    }

    pub fn particle_tick(&self) -> Duration {
        Duration::from_millis(self.particle_tick_ms)
    }

    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
