//! Deceleration integrator.
//!
//! Each step applies the exact integral of `v(t) = v0 * e^(-k t)` over the
//! step's elapsed time, so the same total time yields the same rotation no
//! matter how the host slices it into frames. The step that crosses the rest
//! velocity is cut at the crossing, which makes the resting angle
//! `start + (v0 - rest) / k` for every frame schedule.

use crate::config::SpinTuning;
use crate::resolver::resolve_winner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinPhase {
    AtRest,
    Decelerating,
}

/// What one `advance` call produced. `settled` is true only on the step that
/// brought the wheel to rest, and `winner_index` is only set on that step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepResult {
    pub rotation: f64,
    pub velocity: f64,
    pub settled: bool,
    pub winner_index: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct Spin {
    rotation: f64,
    velocity: f64,
    phase: SpinPhase,
    entry_count: usize,
    decay_rate: f64,
    rest_velocity: f64,
    max_step_secs: f64,
    elapsed: f64,
    steps: u32,
}

impl Spin {
    /// Launches from `rotation` at `initial_velocity` rad/s over a wheel of
    /// `entry_count` sectors. `tuning` is expected to be validated.
    pub fn start(
        rotation: f64,
        initial_velocity: f64,
        entry_count: usize,
        tuning: &SpinTuning,
    ) -> Self {
        let velocity = if initial_velocity.is_finite() {
            initial_velocity.max(0.0)
        } else {
            0.0
        };
        Self {
            rotation: if rotation.is_finite() { rotation } else { 0.0 },
            velocity,
            phase: SpinPhase::Decelerating,
            entry_count,
            decay_rate: tuning.decay_rate(),
            rest_velocity: tuning.rest_velocity,
            max_step_secs: tuning.max_step_secs,
            elapsed: 0.0,
            steps: 0,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SpinPhase::Decelerating
    }

    /// Simulated seconds consumed so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of `advance` calls that moved the wheel.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn advance(&mut self, dt: f64) -> StepResult {
        if self.phase == SpinPhase::AtRest {
            return self.result(false, None);
        }

        let dt = self.clamp_step(dt);
        self.steps += 1;
        let k = self.decay_rate;

        let time_to_rest = if self.velocity <= self.rest_velocity {
            0.0
        } else {
            (self.velocity / self.rest_velocity).ln() / k
        };

        if dt >= time_to_rest {
            self.rotation += (self.velocity - self.rest_velocity).max(0.0) / k;
            self.elapsed += time_to_rest;
            self.velocity = 0.0;
            self.phase = SpinPhase::AtRest;

            let winner = resolve_winner(self.rotation, self.entry_count);
            tracing::debug!(
                rotation = self.rotation,
                elapsed = self.elapsed,
                steps = self.steps,
                winner = ?winner,
                "spin settled"
            );
            return self.result(true, winner);
        }

        let factor = (-k * dt).exp();
        self.rotation += self.velocity * (1.0 - factor) / k;
        self.velocity *= factor;
        self.elapsed += dt;
        self.result(false, None)
    }

    /// Stops the spin without resolving a winner. Returns false if it had
    /// already come to rest.
    pub fn cancel(&mut self) -> bool {
        if self.phase == SpinPhase::AtRest {
            return false;
        }
        self.phase = SpinPhase::AtRest;
        self.velocity = 0.0;
        tracing::debug!(rotation = self.rotation, "spin cancelled");
        true
    }

    fn clamp_step(&self, dt: f64) -> f64 {
        if dt.is_nan() || dt <= 0.0 {
            if dt != 0.0 {
                tracing::warn!(dt, "ignoring non-positive frame delta");
            }
            return 0.0;
        }
        if dt > self.max_step_secs {
            tracing::warn!(
                dt,
                max = self.max_step_secs,
                "clamping oversized frame delta"
            );
            return self.max_step_secs;
        }
        dt
    }

    fn result(&self, settled: bool, winner_index: Option<usize>) -> StepResult {
        StepResult {
            rotation: self.rotation,
            velocity: self.velocity,
            settled,
            winner_index,
        }
    }
}
