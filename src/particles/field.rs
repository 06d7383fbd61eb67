use crate::foundation::error::{ScrollFxError, ScrollFxResult};
use crate::foundation::rng::Rng64;

/// Upper bound (exclusive) of particle coordinates, in percent of the viewport.
pub const FIELD_EXTENT: f64 = 100.0;

/// One ambient particle. Coordinates are percentages of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    /// Horizontal position in `[0, 100)`.
    pub x: f64,
    /// Vertical position in `[0, 100)`.
    pub y: f64,
    /// Diameter in pixels.
    pub size: f64,
    /// Vertical advance per tick, in percent.
    pub speed: f64,
}

/// What the renderer draws for one particle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParticleSnapshot {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Particle {
    pub fn snapshot(&self) -> ParticleSnapshot {
        ParticleSnapshot {
            x: self.x,
            y: self.y,
            size: self.size,
        }
    }
}

/// Half-open sampling range `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(self, v: f64) -> bool {
        (self.min <= v && v < self.max) || (self.min == self.max && v == self.min)
    }

    fn validate(self, what: &str) -> ScrollFxResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ScrollFxError::config(format!(
                "particle {what} range must be finite with min <= max"
            )));
        }
        Ok(())
    }
}

/// Shape of a generated particle field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FieldSpec {
    /// Number of particles.
    pub count: usize,
    /// Diameter range in pixels.
    pub size: SampleRange,
    /// Per-tick vertical advance range in percent.
    pub speed: SampleRange,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            count: 50,
            size: SampleRange::new(1.0, 3.0),
            speed: SampleRange::new(0.1, 0.6),
        }
    }
}

impl FieldSpec {
    pub fn validate(&self) -> ScrollFxResult<()> {
        self.size.validate("size")?;
        self.speed.validate("speed")?;
        if self.size.min <= 0.0 {
            return Err(ScrollFxError::config("particle size must be > 0"));
        }
        if self.speed.min < 0.0 {
            return Err(ScrollFxError::config("particle speed must be >= 0"));
        }
        Ok(())
    }

    /// Generate `count` particles uniformly over the field.
    pub fn generate(&self, seed: u64) -> Vec<Particle> {
        let mut rng = Rng64::new(seed);
        (0..self.count)
            .map(|_| Particle {
                x: rng.next_in(0.0, FIELD_EXTENT),
                y: rng.next_in(0.0, FIELD_EXTENT),
                size: rng.next_in(self.size.min, self.size.max),
                speed: rng.next_in(self.speed.min, self.speed.max),
            })
            .collect()
    }
}

/// Wrap a vertical coordinate into `[0, 100)`.
pub fn wrap_y(y: f64) -> f64 {
    let wrapped = y.rem_euclid(FIELD_EXTENT);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if wrapped >= FIELD_EXTENT { 0.0 } else { wrapped }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/field.rs"]
mod tests;
