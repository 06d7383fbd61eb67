use std::time::Duration;

use crate::animation::ease::{Ease, Lerp};
use crate::foundation::error::{ScrollFxError, ScrollFxResult};

/// One keyframe, positioned as a fraction of the loop period.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Position within the period, in `[0, 1]`.
    pub at: f64,
    /// Value at `at`.
    pub value: T,
    /// Easing applied toward the next keyframe.
    #[serde(default)]
    pub ease: Ease,
}

/// Looping strategy of a [`LoopTrack`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoopMode {
    /// Wrap at the period boundary.
    #[default]
    Repeat,
    /// Bounce forward/backward across the period.
    PingPong,
}

/// Keyframed value that repeats forever, sampled by time since mount.
///
/// Used for purely decorative motion that is neither scroll- nor visibility-driven, such as a
/// bouncing scroll hint.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoopTrack<T> {
    /// Keyframes sorted by `at`.
    pub keys: Vec<Keyframe<T>>,
    /// Length of one cycle in milliseconds.
    pub period_ms: u64,
    /// Loop mapping.
    #[serde(default)]
    pub mode: LoopMode,
}

impl<T> LoopTrack<T>
where
    T: Lerp + Clone,
{
    /// Build a repeating track with evenly spaced keyframes.
    pub fn evenly_spaced(values: Vec<T>, period: Duration, ease: Ease) -> ScrollFxResult<Self> {
        let n = values.len();
        if n == 0 {
            return Err(ScrollFxError::validation("LoopTrack needs at least one key"));
        }
        let keys = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Keyframe {
                at: if n == 1 { 0.0 } else { i as f64 / (n - 1) as f64 },
                value,
                ease,
            })
            .collect();
        let track = Self {
            keys,
            period_ms: period.as_millis() as u64,
            mode: LoopMode::Repeat,
        };
        track.validate()?;
        Ok(track)
    }

    /// Validate key ordering and period.
    pub fn validate(&self) -> ScrollFxResult<()> {
        if self.keys.is_empty() {
            return Err(ScrollFxError::validation("LoopTrack needs at least one key"));
        }
        if self.period_ms == 0 {
            return Err(ScrollFxError::validation("LoopTrack period must be > 0"));
        }
        if self.keys.iter().any(|k| !(0.0..=1.0).contains(&k.at)) {
            return Err(ScrollFxError::validation(
                "LoopTrack key positions must be in [0, 1]",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(ScrollFxError::validation(
                "LoopTrack keys must be sorted by position",
            ));
        }
        Ok(())
    }

    /// Sample the track `elapsed` after it started.
    pub fn sample(&self, elapsed: Duration) -> T {
        let period = self.period_ms.max(1) as f64;
        let ms = elapsed.as_secs_f64() * 1000.0;
        let phase = match self.mode {
            LoopMode::Repeat => (ms % period) / period,
            LoopMode::PingPong => {
                let pos = ms % (2.0 * period);
                if pos < period {
                    pos / period
                } else {
                    (2.0 * period - pos) / period
                }
            }
        };
        self.sample_phase(phase)
    }

    fn sample_phase(&self, phase: f64) -> T {
        let idx = self.keys.partition_point(|k| k.at <= phase);
        if idx == 0 {
            return self.keys[0].value.clone();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value.clone();
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at - a.at;
        if span <= 0.0 {
            return a.value.clone();
        }
        let t = a.ease.apply((phase - a.at) / span);
        T::lerp(&a.value, &b.value, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
