//! Analytic damped-harmonic-oscillator springs.
//!
//! A spring moving from 0 to 1 satisfies `m·x'' + c·x' + k·(x - 1) = 0` with `x(0) = 0` and
//! `x'(0) = 0`. The closed form is evaluated directly from elapsed time, so sampling is a pure
//! function of `t` and never accumulates integration error.

use std::time::Duration;

/// Displacement below which a spring counts as settled.
const REST_DELTA: f64 = 0.001;

/// Spring parameters in the physical form used by motion libraries.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Stiffness `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass `m`.
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

impl Spring {
    /// Spring with unit mass.
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Stiffness and mass must be positive, damping non-negative.
    pub fn is_valid(&self) -> bool {
        self.stiffness.is_finite()
            && self.damping.is_finite()
            && self.mass.is_finite()
            && self.stiffness > 0.0
            && self.mass > 0.0
            && self.damping >= 0.0
    }

    /// Damping ratio `ζ = c / (2·√(k·m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Natural angular frequency `ω₀ = √(k/m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Normalized position at `t` seconds. Starts at 0, rests at 1, may overshoot when underdamped.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if (zeta - 1.0).abs() < 1e-9 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else {
            let s = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - s);
            let r2 = -w0 * (zeta + s);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Envelope of the displacement `|x(t) - 1|`, which bounds every later sample.
    fn envelope(&self, t: f64) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        if zeta < 1.0 {
            let sq = (1.0 - zeta * zeta).sqrt();
            (-zeta * w0 * t).exp() / sq
        } else {
            (1.0 - self.position(t)).abs()
        }
    }

    /// Time after which the spring stays within the rest threshold of its target.
    pub fn settle_time(&self) -> Duration {
        // Coarse forward search; springs used for UI settle within a few seconds.
        let step = 1.0 / 240.0;
        let mut t = 0.0;
        while t < 30.0 {
            if self.envelope(t) < REST_DELTA {
                return Duration::from_secs_f64(t);
            }
            t += step;
        }
        Duration::from_secs(30)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
