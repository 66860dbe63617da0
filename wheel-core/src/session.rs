use serde::Serialize;

use crate::config::WheelConfig;
use crate::constants::MIN_SPIN_ENTRIES;
use crate::error::{Action, TransitionCode, WheelError};
use crate::palette::{Color, ColorAssignment};
use crate::registry::EntryRegistry;
use crate::rng::RandomSource;
use crate::snapshot::SessionSnapshot;
use crate::spin::{Spin, StepResult};


#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum GamePhase {
    Idle,
    Spinning,
    /// `candidate` was picked by the wheel but is still active until the
    /// elimination is confirmed.
    AwaitingConfirmation { candidate: String },
    /// The last two-entry spin picked `eliminated`; `winner` is the other one.
    WinnerAnnounced { winner: String, eliminated: String },
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Spinning => "spinning",
            Self::AwaitingConfirmation { .. } => "awaiting_confirmation",
            Self::WinnerAnnounced { .. } => "winner_announced",
        }
    }
}

/// One elimination game. Owns the registry, the colour assignment, the wheel
/// angle and the spin in flight; every state change goes through here.
pub struct Session<R> {
    config: WheelConfig,
    registry: EntryRegistry,
    colors: ColorAssignment,
    rng: R,
    phase: GamePhase,
    rotation: f64,
    spin: Option<Spin>,
    spin_entries: Vec<String>,
}

impl<R: RandomSource> Session<R> {
    pub fn new(config: WheelConfig, rng: R) -> Result<Self, WheelError> {
        config.validate()?;
        Ok(Self {
            registry: EntryRegistry::new(&config),
            colors: ColorAssignment::new(),
            config,
            rng,
            phase: GamePhase::Idle,
            rotation: 0.0,
            spin: None,
            spin_entries: Vec::new(),
        })
    }

    /// Rebuilds an idle session from persisted entries. Active names are
    /// re-validated and given colours in order.
    pub fn restore(
        config: WheelConfig,
        snapshot: &SessionSnapshot,
        rng: R,
    ) -> Result<Self, WheelError> {
        let mut session = Self::new(config, rng)?;
        session
            .registry
            .restore(&snapshot.entries, &snapshot.eliminated)?;
        for name in &snapshot.entries {
            session.colors.color_for(name.trim());
        }
        tracing::debug!(
            active = session.registry.len(),
            eliminated = session.registry.eliminated().len(),
            "session restored"
        );
        Ok(session)
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        if rotation.is_finite() {
            self.rotation = rotation;
        }
        self
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            entries: self.registry.active().to_vec(),
            eliminated: self.registry.eliminated().to_vec(),
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn active(&self) -> &[String] {
        self.registry.active()
    }

    pub fn eliminated(&self) -> &[String] {
        self.registry.eliminated()
    }

    pub fn spin(&self) -> Option<&Spin> {
        self.spin.as_ref()
    }

    pub fn colors(&self) -> &ColorAssignment {
        &self.colors
    }

    pub fn color_for(&mut self, name: &str) -> Color {
        self.colors.color_for(name)
    }

    pub fn can_spin(&self) -> bool {
        self.phase == GamePhase::Idle && self.registry.len() >= MIN_SPIN_ENTRIES
    }

    /// How many more entries are needed before the wheel can spin.
    pub fn entries_needed(&self) -> usize {
        MIN_SPIN_ENTRIES.saturating_sub(self.registry.len())
    }

    pub fn can_reset(&self) -> bool {
        self.phase != GamePhase::Spinning && !self.registry.eliminated().is_empty()
    }

    pub fn add(&mut self, name: &str) -> Result<usize, WheelError> {
        self.require_idle(Action::Add)?;
        let index = self.registry.add(name)?;
        tracing::debug!(index, active = self.registry.len(), "entry added");
        Ok(index)
    }

    pub fn remove(&mut self, index: usize) -> Result<String, WheelError> {
        self.require_idle(Action::Remove)?;
        let name = self.registry.remove(index)?;
        tracing::debug!(index, name = %name, "entry removed");
        Ok(name)
    }

    /// Clears active and eliminated entries. Colours and the wheel angle are
    /// kept so a replay with the same names looks the same.
    pub fn reset(&mut self) -> Result<(), WheelError> {
        if self.phase == GamePhase::Spinning {
            return Err(self.refuse(Action::Reset, TransitionCode::WrongPhase));
        }
        if self.registry.eliminated().is_empty() {
            return Err(self.refuse(Action::Reset, TransitionCode::NothingToReset));
        }
        self.registry.reset();
        self.phase = GamePhase::Idle;
        tracing::info!("game reset");
        Ok(())
    }

    /// Launches the wheel and returns the drawn velocity in rad/s.
    pub fn start_spin(&mut self) -> Result<f64, WheelError> {
        self.require_idle(Action::StartSpin)?;
        if self.registry.len() < MIN_SPIN_ENTRIES {
            return Err(self.refuse(Action::StartSpin, TransitionCode::NotEnoughEntries));
        }

        let velocity = self.config.spin.draw_velocity(&mut self.rng);
        self.spin_entries = self.registry.active().to_vec();
        self.spin = Some(Spin::start(
            self.rotation,
            velocity,
            self.spin_entries.len(),
            &self.config.spin,
        ));
        self.phase = GamePhase::Spinning;
        tracing::debug!(
            velocity,
            rotation = self.rotation,
            entries = self.spin_entries.len(),
            "spin started"
        );
        Ok(velocity)
    }

    /// Host frame callback. Outside a spin this reports the resting wheel.
    pub fn advance(&mut self, dt: f64) -> StepResult {
        let Some(spin) = self.spin.as_mut() else {
            return StepResult {
                rotation: self.rotation,
                velocity: 0.0,
                settled: false,
                winner_index: None,
            };
        };

        let step = spin.advance(dt);
        self.rotation = step.rotation;
        if step.settled {
            self.spin = None;
            self.settle(step.winner_index);
        }
        step
    }

    /// Host teardown. The spin stops where it is and no winner is produced.
    pub fn cancel_spin(&mut self) -> bool {
        let Some(mut spin) = self.spin.take() else {
            return false;
        };
        spin.cancel();
        self.rotation = spin.rotation();
        self.spin_entries.clear();
        self.phase = GamePhase::Idle;
        tracing::info!(rotation = self.rotation, "spin cancelled by host");
        true
    }

    /// Acknowledges the pending elimination and returns the eliminated name.
    pub fn confirm_elimination(&mut self) -> Result<String, WheelError> {
        let GamePhase::AwaitingConfirmation { candidate } = &self.phase else {
            return Err(self.refuse(Action::ConfirmElimination, TransitionCode::WrongPhase));
        };
        let candidate = candidate.clone();
        if !self.registry.eliminate(&candidate) {
            tracing::warn!(name = %candidate, "confirmed candidate no longer active");
        }
        self.phase = GamePhase::Idle;
        tracing::info!(
            name = %candidate,
            remaining = self.registry.len(),
            "entry eliminated"
        );
        Ok(candidate)
    }

    fn settle(&mut self, winner_index: Option<usize>) {
        let entries = std::mem::take(&mut self.spin_entries);
        let Some(picked) = winner_index.and_then(|index| entries.get(index)).cloned() else {
            tracing::warn!(?winner_index, "spin settled without a sector");
            self.phase = GamePhase::Idle;
            return;
        };

        if entries.len() == MIN_SPIN_ENTRIES {
            let winner = entries
                .iter()
                .find(|entry| **entry != picked)
                .cloned()
                .unwrap_or_default();
            self.registry.eliminate(&picked);
            tracing::info!(winner = %winner, eliminated = %picked, "winner announced");
            self.phase = GamePhase::WinnerAnnounced {
                winner,
                eliminated: picked,
            };
        } else {
            tracing::info!(candidate = %picked, "awaiting elimination confirmation");
            self.phase = GamePhase::AwaitingConfirmation { candidate: picked };
        }
    }

    fn require_idle(&self, action: Action) -> Result<(), WheelError> {
        if self.phase == GamePhase::Idle {
            Ok(())
        } else {
            Err(self.refuse(action, TransitionCode::WrongPhase))
        }
    }

    fn refuse(&self, action: Action, code: TransitionCode) -> WheelError {
        WheelError::InvalidTransition {
            action,
            phase: self.phase.name(),
            code,
        }
    }
}
