use thiserror::Error;

/// Knobs for a heart field. `Default` reproduces the stock page.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub big_count: usize,
    pub small_count: usize,
    /// Probability that pressing a heart pops it instead of grabbing it.
    pub pop_chance: f32,
    /// How long a grabbed heart keeps clinging to the pointer.
    pub stick_ms: f64,
    /// Multiplier turning pointer px/ms into px/tick when a heart is thrown.
    pub throw_gain: f32,
    /// Upper bound on the backing-store pixel ratio of the canvas.
    pub max_device_pixel_ratio: f64,
    /// Optional cap on live pop particles; oldest are dropped first.
    pub max_particles: Option<usize>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            big_count: 7,
            small_count: 15,
            pop_chance: 0.45,
            stick_ms: 500.0,
            throw_gain: 16.0,
            max_device_pixel_ratio: 1.0,
            max_particles: None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("heart field needs at least one heart")]
    NoHearts,
    #[error("pop chance {0} is outside [0, 1]")]
    PopChance(f32),
    #[error("stick duration must be positive, got {0} ms")]
    StickDuration(f64),
    #[error("throw gain must be positive and finite, got {0}")]
    ThrowGain(f32),
    #[error("device pixel ratio cap must be positive, got {0}")]
    PixelRatio(f64),
    #[error("particle cap must be at least 1")]
    ParticleCap,
}

impl FieldConfig {
    pub fn total_hearts(&self) -> usize {
        self.big_count + self.small_count
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_hearts() == 0 {
            return Err(ConfigError::NoHearts);
        }
        if !(0.0..=1.0).contains(&self.pop_chance) {
            return Err(ConfigError::PopChance(self.pop_chance));
        }
        if !(self.stick_ms > 0.0 && self.stick_ms.is_finite()) {
            return Err(ConfigError::StickDuration(self.stick_ms));
        }
        if !(self.throw_gain > 0.0 && self.throw_gain.is_finite()) {
            return Err(ConfigError::ThrowGain(self.throw_gain));
        }
        if !(self.max_device_pixel_ratio > 0.0 && self.max_device_pixel_ratio.is_finite()) {
            return Err(ConfigError::PixelRatio(self.max_device_pixel_ratio));
        }
        if self.max_particles == Some(0) {
            return Err(ConfigError::ParticleCap);
        }
        Ok(())
    }
}
