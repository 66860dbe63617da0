use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};
use elimination_wheel_core::{RandomSource, Session, SessionSnapshot, WheelConfig};
use serde::{Deserialize, Serialize};

/// On-disk form of a session between CLI invocations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateFile {
    #[serde(flatten)]
    pub session: SessionSnapshot,
    #[serde(default)]
    pub rotation: f64,
}

impl StateFile {
    pub fn capture<R: RandomSource>(session: &Session<R>) -> Self {
        Self {
            session: session.snapshot(),
            rotation: session.rotation(),
        }
    }

    pub fn open<R: RandomSource>(&self, config: &WheelConfig, rng: R) -> Result<Session<R>> {
        let session = Session::restore(config.clone(), &self.session, rng)
            .map_err(|err| anyhow!("saved state rejected: {err}"))?;
        Ok(session.with_rotation(self.rotation))
    }
}

/// A missing file is an empty wheel.
pub fn load_state(path: &Path) -> Result<StateFile> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no state file, starting empty");
        return Ok(StateFile::default());
    }
    let raw =
        fs::read(path).with_context(|| format!("failed to read state: {}", path.display()))?;
    serde_json::from_slice(&raw)
        .with_context(|| format!("invalid state json: {}", path.display()))
}

/// Writes through a sibling temp file so a crash never leaves half a state.
pub fn save_state(path: &Path, state: &StateFile) -> Result<()> {
    let json = serde_json::to_vec_pretty(state).context("failed to serialize state json")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)
        .with_context(|| format!("failed writing state: {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed replacing state: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        active = state.session.entries.len(),
        eliminated = state.session.eliminated.len(),
        "state saved"
    );
    Ok(())
}
