//! Defaults for the wheel. `WheelConfig::default()` is built from these.

use core::f64::consts::{FRAC_PI_2, TAU};

// Registry
pub const MAX_ENTRIES: usize = 12;
pub const MAX_NAME_LEN: usize = 20; // characters, after trimming
pub const MIN_SPIN_ENTRIES: usize = 2;

// Spin, radians and seconds
pub const MIN_INITIAL_VELOCITY: f64 = 20.0;
pub const MAX_INITIAL_VELOCITY: f64 = 35.0;
pub const DECAY_PER_FRAME: f64 = 0.99;
pub const REFERENCE_FRAME_SECS: f64 = 1.0 / 60.0;
pub const REST_VELOCITY: f64 = 0.01;
// Longest single step the integrator accepts. A backgrounded host can hand us
// minutes; anything past this is treated as this.
pub const MAX_STEP_SECS: f64 = 60.0;

// Geometry. Canvas convention: angles grow clockwise, 0 points right.
pub const FULL_TURN: f64 = TAU;
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

pub const PALETTE: [&str; 12] = [
    "#7c3aed", "#f59e0b", "#ec4899", "#10b981", "#3b82f6", "#ef4444", "#8b5cf6", "#14b8a6",
    "#f97316", "#06b6d4", "#e11d48", "#84cc16",
];
