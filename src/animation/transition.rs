use std::time::Duration;

use crate::animation::ease::{Ease, Lerp};
use crate::animation::spring::Spring;
use crate::foundation::core::{Unit, Vec2};
use crate::foundation::error::{ScrollFxError, ScrollFxResult};

/// Timing curve of a one-shot transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transition {
    /// Fixed-duration tween through an easing curve.
    Tween {
        /// Duration in milliseconds.
        duration_ms: u64,
        /// Easing curve.
        #[serde(default)]
        ease: Ease,
    },
    /// Physical spring; its duration is whatever the spring needs to settle.
    Spring(Spring),
}

impl Default for Transition {
    fn default() -> Self {
        Self::tween(Duration::from_millis(800), Ease::default())
    }
}

/// Coarse classification of a transition's timing curve, for renderers that map it to their own
/// animation primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EasingClass {
    /// Curve-driven tween.
    Tween(Ease),
    /// Physics-driven spring.
    Spring,
}

impl Transition {
    /// Tween transition.
    pub fn tween(duration: Duration, ease: Ease) -> Self {
        Self::Tween {
            duration_ms: duration.as_millis() as u64,
            ease,
        }
    }

    /// Check timing parameters.
    pub fn validate(&self) -> ScrollFxResult<()> {
        match self {
            Self::Tween { .. } => Ok(()),
            Self::Spring(spring) => {
                if spring.is_valid() {
                    Ok(())
                } else {
                    Err(ScrollFxError::validation(
                        "spring stiffness and mass must be > 0 and damping >= 0",
                    ))
                }
            }
        }
    }

    pub fn easing_class(&self) -> EasingClass {
        match self {
            Self::Tween { ease, .. } => EasingClass::Tween(*ease),
            Self::Spring(_) => EasingClass::Spring,
        }
    }

    /// Nominal duration: the tween length, or the spring's settle time.
    pub fn duration(&self) -> Duration {
        match self {
            Self::Tween { duration_ms, .. } => Duration::from_millis(*duration_ms),
            Self::Spring(spring) => spring.settle_time(),
        }
    }

    /// Interpolation factor after `elapsed` of active time.
    ///
    /// Tweens stay in `[0, 1]`; springs may overshoot before coming to rest at exactly 1.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        match self {
            Self::Tween { duration_ms, ease } => {
                if *duration_ms == 0 {
                    return 1.0;
                }
                let t = elapsed.as_secs_f64() / Duration::from_millis(*duration_ms).as_secs_f64();
                ease.apply(t)
            }
            Self::Spring(spring) => {
                if elapsed >= spring.settle_time() {
                    1.0
                } else {
                    spring.position(elapsed.as_secs_f64())
                }
            }
        }
    }
}

/// Renderable visual properties of an animated element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation.
    pub translate: Vec2,
    /// Unit of `translate`.
    #[serde(default)]
    pub unit: Unit,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::identity()
    }
}

impl VisualState {
    /// Fully visible, untransformed.
    pub fn identity() -> Self {
        Self {
            opacity: 1.0,
            translate: Vec2::ZERO,
            unit: Unit::Px,
            scale: 1.0,
        }
    }

    /// Hidden and shifted down by `dy` pixels, the usual reveal start.
    pub fn hidden_below(dy: f64) -> Self {
        Self {
            opacity: 0.0,
            translate: Vec2::new(0.0, dy),
            ..Self::identity()
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_translate(mut self, translate: Vec2, unit: Unit) -> Self {
        self.translate = translate;
        self.unit = unit;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            // Overshoot is meaningful for position and scale, never for opacity.
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t).clamp(0.0, 1.0),
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            unit: b.unit,
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
        }
    }
}

/// Everything a renderer needs to play one transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationDescriptor {
    /// State before the transition starts.
    pub from: VisualState,
    /// State at rest.
    pub to: VisualState,
    /// Timing curve.
    pub transition: Transition,
    /// Delay before the transition begins.
    #[serde(default)]
    pub delay: Duration,
}

impl AnimationDescriptor {
    pub fn new(from: VisualState, to: VisualState, transition: Transition) -> Self {
        Self {
            from,
            to,
            transition,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay plus transition duration.
    pub fn total_duration(&self) -> Duration {
        self.delay + self.transition.duration()
    }

    /// Visual state `elapsed` after the animation was started (delay included).
    pub fn sample(&self, elapsed: Duration) -> VisualState {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return self.from;
        };
        if active >= self.transition.duration() {
            return self.to;
        }
        VisualState::lerp(&self.from, &self.to, self.transition.progress(active))
    }

    /// `true` once the transition has come to rest.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }

    /// The same transition played backwards.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..*self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
