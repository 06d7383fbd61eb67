use std::time::Duration;

use crate::animation::ease::{Ease, Lerp};

/// Engine-driven smooth scroll toward a target offset.
///
/// Starting a new scroll replaces the one in flight, continuing from wherever the viewport
/// currently is, so two commands never fight over the offset.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    duration: Duration,
    ease: Ease,
    active: Option<ActiveScroll>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveScroll {
    from: f64,
    to: f64,
    started: Duration,
}

impl SmoothScroll {
    pub fn new(duration: Duration, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            active: None,
        }
    }

    /// Begin scrolling from `from` to `to` at time `now`.
    pub fn start(&mut self, from: f64, to: f64, now: Duration) {
        if self.active.is_some() {
            tracing::debug!(to, "smooth scroll interrupted by a new target");
        }
        self.active = Some(ActiveScroll {
            from,
            to,
            started: now,
        });
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn target(&self) -> Option<f64> {
        self.active.map(|a| a.to)
    }

    /// Offset the viewport should show at `now`, or `None` when idle.
    ///
    /// The final sample lands exactly on the target and ends the scroll.
    pub fn sample(&mut self, now: Duration) -> Option<f64> {
        let active = self.active?;
        let elapsed = now.saturating_sub(active.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            self.active = None;
            return Some(active.to);
        }
        let t = self
            .ease
            .apply(elapsed.as_secs_f64() / self.duration.as_secs_f64());
        Some(<f64 as Lerp>::lerp(&active.from, &active.to, t))
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
