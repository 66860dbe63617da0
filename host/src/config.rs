use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use elimination_wheel_core::{SpinTuning, WheelConfig};

pub const DEFAULT_STATE_PATH: &str = "wheel-state.json";
pub const DEFAULT_FPS: u32 = 60;
// Two minutes of frames. A default spin rests after roughly 13.5 s.
pub const DEFAULT_MAX_FRAMES: u32 = 2 * 60 * 60;

#[derive(Debug, Clone)]
pub struct HostConfig {
    pub state_path: PathBuf,
    pub fps: u32,
    pub max_frames: u32,
    pub wheel: WheelConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            fps: DEFAULT_FPS,
            max_frames: DEFAULT_MAX_FRAMES,
            wheel: WheelConfig::default(),
        }
    }
}

impl HostConfig {
    /// Wheel settings come from `config_file` (JSON) when given, then
    /// `WHEEL_*` variables override individual fields.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut wheel = match config_file {
            Some(path) => {
                let raw = fs::read(path)
                    .with_context(|| format!("failed to read config: {}", path.display()))?;
                serde_json::from_slice::<WheelConfig>(&raw)
                    .with_context(|| format!("invalid config json: {}", path.display()))?
            }
            None => WheelConfig::default(),
        };

        wheel.capacity = read_env_usize("WHEEL_CAPACITY", wheel.capacity);
        wheel.max_name_len = read_env_usize("WHEEL_MAX_NAME_LEN", wheel.max_name_len);
        wheel
            .validate()
            .map_err(|err| anyhow!("wheel config rejected: {err}"))?;

        let fps = read_env_u32("WHEEL_FPS", DEFAULT_FPS);
        let mut max_frames = read_env_u32("WHEEL_MAX_FRAMES", DEFAULT_MAX_FRAMES);

        // The frame budget must cover the slowest possible spin.
        let needed = frame_budget(&wheel.spin, fps);
        if max_frames < needed {
            tracing::warn!(
                "WHEEL_MAX_FRAMES ({}) is shorter than the longest spin ({} frames). Using {}.",
                max_frames,
                needed,
                needed
            );
            max_frames = needed;
        }

        let state_path = env::var("WHEEL_STATE_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_PATH));

        Ok(Self {
            state_path,
            fps,
            max_frames,
            wheel,
        })
    }

    pub fn frame_secs(&self) -> f64 {
        1.0 / f64::from(self.fps.max(1))
    }
}

/// Frames needed for the fastest draw to come to rest at `fps`, plus one.
/// Saturates at `u32::MAX`.
pub(crate) fn frame_budget(spin: &SpinTuning, fps: u32) -> u32 {
    let longest = spin.settle_time(spin.max_initial_velocity);
    let frames = (longest * f64::from(fps)).ceil();
    if !frames.is_finite() || frames >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    (frames.max(0.0) as u32).saturating_add(1)
}

pub(crate) fn read_env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

pub(crate) fn read_env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}
