use anyhow::{anyhow, bail, Result};
use elimination_wheel_core::{GamePhase, RandomSource, Session, WheelConfig};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpinOutcome {
    Eliminated { name: String, remaining: usize },
    Winner { winner: String, eliminated: String },
}

#[derive(Clone, Debug, Serialize)]
pub struct SpinReport {
    pub initial_velocity: f64,
    pub frames: u32,
    pub settle_rotation: f64,
    pub outcome: SpinOutcome,
}

#[derive(Clone, Debug, Serialize)]
pub struct GameReport {
    pub entries: Vec<String>,
    pub rounds: Vec<SpinReport>,
    pub winner: String,
}

/// Drives one spin with a fixed frame delta, the way a display loop would,
/// then acknowledges the elimination. A spin that outlives `max_frames` is
/// cancelled and reported as an error.
pub fn run_spin<R: RandomSource>(
    session: &mut Session<R>,
    frame_secs: f64,
    max_frames: u32,
) -> Result<SpinReport> {
    let initial_velocity = session
        .start_spin()
        .map_err(|err| anyhow!("cannot spin: {err}"))?;

    let mut frames = 0u32;
    let settled = loop {
        if frames >= max_frames {
            session.cancel_spin();
            bail!("spin did not settle within {max_frames} frames");
        }
        frames += 1;
        let step = session.advance(frame_secs);
        if step.settled {
            break step;
        }
    };

    let outcome = match session.phase().clone() {
        GamePhase::AwaitingConfirmation { .. } => {
            let name = session
                .confirm_elimination()
                .map_err(|err| anyhow!("cannot confirm elimination: {err}"))?;
            SpinOutcome::Eliminated {
                name,
                remaining: session.active().len(),
            }
        }
        GamePhase::WinnerAnnounced { winner, eliminated } => {
            SpinOutcome::Winner { winner, eliminated }
        }
        other => bail!("spin settled into unexpected phase: {}", other.name()),
    };

    tracing::info!(
        frames,
        velocity = initial_velocity,
        rotation = settled.rotation,
        "spin finished"
    );

    Ok(SpinReport {
        initial_velocity,
        frames,
        settle_rotation: settled.rotation,
        outcome,
    })
}

/// Plays a fresh game to its winner.
pub fn play_game<R: RandomSource>(
    names: &[String],
    config: WheelConfig,
    rng: R,
    frame_secs: f64,
    max_frames: u32,
) -> Result<GameReport> {
    let mut session = Session::new(config, rng).map_err(|err| anyhow!("{err}"))?;
    for name in names {
        session
            .add(name)
            .map_err(|err| anyhow!("cannot add '{name}': {err}"))?;
    }
    if !session.can_spin() {
        bail!(
            "need {} more entr{} to play",
            session.entries_needed(),
            if session.entries_needed() == 1 { "y" } else { "ies" }
        );
    }

    let entries = session.active().to_vec();
    let mut rounds = Vec::with_capacity(entries.len());
    loop {
        let report = run_spin(&mut session, frame_secs, max_frames)?;
        let winner = match &report.outcome {
            SpinOutcome::Winner { winner, .. } => Some(winner.clone()),
            SpinOutcome::Eliminated { .. } => None,
        };
        rounds.push(report);
        if let Some(winner) = winner {
            return Ok(GameReport {
                entries,
                rounds,
                winner,
            });
        }
    }
}
