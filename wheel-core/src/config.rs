use serde::{Deserialize, Serialize};

use crate::constants::{
    DECAY_PER_FRAME, MAX_ENTRIES, MAX_INITIAL_VELOCITY, MAX_NAME_LEN, MAX_STEP_SECS,
    MIN_INITIAL_VELOCITY, MIN_SPIN_ENTRIES, REFERENCE_FRAME_SECS, REST_VELOCITY,
};
use crate::error::WheelError;
use crate::rng::RandomSource;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub capacity: usize,
    pub max_name_len: usize,
    pub spin: SpinTuning,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_ENTRIES,
            max_name_len: MAX_NAME_LEN,
            spin: SpinTuning::default(),
        }
    }
}

impl WheelConfig {
    pub fn validate(&self) -> Result<(), WheelError> {
        if self.capacity < MIN_SPIN_ENTRIES {
            return Err(WheelError::InvalidConfig { field: "capacity" });
        }
        if self.max_name_len == 0 {
            return Err(WheelError::InvalidConfig {
                field: "max_name_len",
            });
        }
        self.spin.validate()
    }
}

/// Deceleration model.
///
/// Velocity decays by `decay_per_frame` every `reference_frame_secs` of real
/// time, continuously: `v(t) = v0 * decay_per_frame^(t / reference_frame_secs)`.
/// That makes the motion a pure function of elapsed time, whatever the host's
/// frame rate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinTuning {
    pub min_initial_velocity: f64,
    pub max_initial_velocity: f64,
    pub decay_per_frame: f64,
    pub reference_frame_secs: f64,
    pub rest_velocity: f64,
    pub max_step_secs: f64,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            min_initial_velocity: MIN_INITIAL_VELOCITY,
            max_initial_velocity: MAX_INITIAL_VELOCITY,
            decay_per_frame: DECAY_PER_FRAME,
            reference_frame_secs: REFERENCE_FRAME_SECS,
            rest_velocity: REST_VELOCITY,
            max_step_secs: MAX_STEP_SECS,
        }
    }
}

impl SpinTuning {
    pub fn validate(&self) -> Result<(), WheelError> {
        let positive = |value: f64| value.is_finite() && value > 0.0;

        if !(self.decay_per_frame > 0.0 && self.decay_per_frame < 1.0) {
            return Err(WheelError::InvalidConfig {
                field: "spin.decay_per_frame",
            });
        }
        if !positive(self.reference_frame_secs) {
            return Err(WheelError::InvalidConfig {
                field: "spin.reference_frame_secs",
            });
        }
        if !positive(self.rest_velocity) {
            return Err(WheelError::InvalidConfig {
                field: "spin.rest_velocity",
            });
        }
        if !positive(self.max_step_secs) {
            return Err(WheelError::InvalidConfig {
                field: "spin.max_step_secs",
            });
        }
        if !positive(self.min_initial_velocity)
            || !self.max_initial_velocity.is_finite()
            || self.max_initial_velocity < self.min_initial_velocity
        {
            return Err(WheelError::InvalidConfig {
                field: "spin.initial_velocity",
            });
        }
        Ok(())
    }

    /// Continuous decay rate `k` in 1/s, so that `v(t) = v0 * e^(-k t)`.
    pub fn decay_rate(&self) -> f64 {
        -self.decay_per_frame.ln() / self.reference_frame_secs
    }

    /// Uniform draw from `[min_initial_velocity, max_initial_velocity)`.
    pub fn draw_velocity<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        let span = self.max_initial_velocity - self.min_initial_velocity;
        self.min_initial_velocity + rng.next_unit() * span
    }

    /// Seconds until a spin launched at `initial_velocity` comes to rest.
    pub fn settle_time(&self, initial_velocity: f64) -> f64 {
        if initial_velocity <= self.rest_velocity {
            return 0.0;
        }
        (initial_velocity / self.rest_velocity).ln() / self.decay_rate()
    }

    /// Radians travelled between launch and rest.
    pub fn settle_distance(&self, initial_velocity: f64) -> f64 {
        if initial_velocity <= self.rest_velocity {
            return 0.0;
        }
        (initial_velocity - self.rest_velocity) / self.decay_rate()
    }
}
