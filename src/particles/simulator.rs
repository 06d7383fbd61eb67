use std::time::Duration;

use crate::foundation::clock::IntervalTimer;
use crate::particles::field::{FieldSpec, Particle, ParticleSnapshot, wrap_y};

/// Ambient particle field advanced on a fixed interval, independent of scroll.
///
/// The simulator is the sole owner of the particle set. Each particle's next position depends only
/// on its own previous one; nothing else in the engine accumulates state over time.
#[derive(Clone, Debug)]
pub struct ParticleSimulator {
    particles: Vec<Particle>,
    timer: IntervalTimer,
    max_catch_up: u32,
    ticks: u64,
}

impl ParticleSimulator {
    /// Generate a fresh field from `spec` and `seed`.
    pub fn new(spec: &FieldSpec, seed: u64, interval: Duration, max_catch_up: u32) -> Self {
        Self::from_particles(spec.generate(seed), interval, max_catch_up)
    }

    /// Adopt an explicit particle set. Initial `y` values are wrapped into the field.
    pub fn from_particles(particles: Vec<Particle>, interval: Duration, max_catch_up: u32) -> Self {
        let particles = particles
            .into_iter()
            .map(|p| Particle {
                y: wrap_y(p.y),
                ..p
            })
            .collect();
        Self {
            particles,
            timer: IntervalTimer::new(interval),
            max_catch_up: max_catch_up.max(1),
            ticks: 0,
        }
    }

    /// Arm the tick interval.
    pub fn start(&mut self, now: Duration) {
        self.timer.start(now);
    }

    /// Run every tick that came due by `now`. Returns the number of ticks applied.
    pub fn advance(&mut self, now: Duration) -> u32 {
        let fires = self.timer.poll(now, self.max_catch_up);
        for _ in 0..fires {
            self.step();
        }
        fires
    }

    /// Apply one tick: move each particle down by its speed, wrapping at the bottom edge.
    pub fn step(&mut self) {
        if self.timer.is_cancelled() {
            return;
        }
        for p in &mut self.particles {
            p.y = wrap_y(p.y + p.speed);
        }
        self.ticks += 1;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Render snapshot of the current field.
    pub fn snapshot(&self) -> Vec<ParticleSnapshot> {
        self.particles.iter().map(Particle::snapshot).collect()
    }

    /// Total ticks applied since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Stop ticking and drop the particle set.
    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.particles.clear();
    }

    pub fn is_cancelled(&self) -> bool {
        self.timer.is_cancelled()
    }

    /// `true` between [`start`](Self::start) and [`cancel`](Self::cancel).
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/simulator.rs"]
mod tests;
