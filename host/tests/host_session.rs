use anyhow::Result;
use elimination_wheel_core::{GamePhase, SeededRng, Session, WheelConfig};
use wheel_host::{load_state, play_game, run_spin, save_state, SpinOutcome, StateFile};

const FRAME: f64 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 7_200;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

#[test]
fn missing_state_file_is_an_empty_wheel() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let state = load_state(&dir.path().join("absent.json"))?;
    assert_eq!(state, StateFile::default());
    Ok(())
}

#[test]
fn state_survives_a_save_and_reload() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("wheel.json");

    let mut session = Session::new(WheelConfig::default(), SeededRng::new(9))?;
    for name in ["Ada", "Grace", "Linus", "Ken"] {
        session.add(name)?;
    }
    run_spin(&mut session, FRAME, MAX_FRAMES)?;
    save_state(&path, &StateFile::capture(&session))?;

    let reloaded = load_state(&path)?;
    assert_eq!(reloaded.session, session.snapshot());
    assert_eq!(reloaded.rotation, session.rotation());

    let reopened = reloaded.open(&WheelConfig::default(), SeededRng::new(9))?;
    assert_eq!(reopened.active(), session.active());
    assert_eq!(reopened.eliminated(), session.eliminated());
    assert_eq!(reopened.rotation(), session.rotation());
    Ok(())
}

#[test]
fn state_file_uses_flat_entry_lists() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("wheel.json");
    std::fs::write(
        &path,
        r#"{"entries": ["A", "B"], "eliminated": ["C"], "rotation": 1.5}"#,
    )?;

    let state = load_state(&path)?;
    assert_eq!(state.session.entries, ["A", "B"]);
    assert_eq!(state.session.eliminated, ["C"]);
    assert_eq!(state.rotation, 1.5);
    Ok(())
}

#[test]
fn corrupt_state_is_reported() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("wheel.json");
    std::fs::write(&path, b"not json")?;
    let err = load_state(&path).unwrap_err();
    assert!(err.to_string().contains("invalid state json"));
    Ok(())
}

#[test]
fn invalid_saved_entries_are_rejected_on_open() {
    let state = StateFile {
        session: elimination_wheel_core::SessionSnapshot {
            entries: names(&["Ada", "ada"]),
            eliminated: Vec::new(),
        },
        rotation: 0.0,
    };
    let err = state
        .open(&WheelConfig::default(), SeededRng::new(1))
        .err()
        .expect("duplicate entries must be rejected");
    assert!(err.to_string().contains("DUPLICATE_NAME"));
}

#[test]
fn spin_on_three_confirms_one_elimination() -> Result<()> {
    let mut session = Session::new(WheelConfig::default(), SeededRng::new(77))?;
    for name in ["A", "B", "C"] {
        session.add(name)?;
    }
    let report = run_spin(&mut session, FRAME, MAX_FRAMES)?;
    let SpinOutcome::Eliminated { name, remaining } = report.outcome else {
        panic!("three entries must not produce a winner");
    };
    assert_eq!(remaining, 2);
    assert_eq!(session.eliminated(), [name]);
    assert_eq!(session.phase(), &GamePhase::Idle);
    assert!(report.frames > 0);
    Ok(())
}

#[test]
fn frame_budget_overrun_cancels_the_spin() -> Result<()> {
    let mut session = Session::new(WheelConfig::default(), SeededRng::new(5))?;
    for name in ["A", "B", "C"] {
        session.add(name)?;
    }
    let err = run_spin(&mut session, FRAME, 10).unwrap_err();
    assert!(err.to_string().contains("did not settle"));
    assert_eq!(session.phase(), &GamePhase::Idle);
    assert!(session.eliminated().is_empty());
    Ok(())
}

#[test]
fn play_game_runs_to_a_single_winner() -> Result<()> {
    let entries = names(&["Ada", "Grace", "Linus", "Ken", "Barbara"]);
    let report = play_game(
        &entries,
        WheelConfig::default(),
        SeededRng::new(0xFEED),
        FRAME,
        MAX_FRAMES,
    )?;

    assert_eq!(report.rounds.len(), entries.len() - 1);
    assert!(entries.contains(&report.winner));
    assert!(matches!(
        report.rounds.last().map(|round| &round.outcome),
        Some(SpinOutcome::Winner { .. })
    ));

    let again = play_game(
        &entries,
        WheelConfig::default(),
        SeededRng::new(0xFEED),
        FRAME,
        MAX_FRAMES,
    )?;
    assert_eq!(again.winner, report.winner);

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["rounds"][0]["outcome"]["kind"], "eliminated");
    Ok(())
}

#[test]
fn play_game_needs_two_entries() {
    let err = play_game(
        &names(&["Solo"]),
        WheelConfig::default(),
        SeededRng::new(1),
        FRAME,
        MAX_FRAMES,
    )
    .unwrap_err();
    assert!(err.to_string().contains("need 1 more entry"));
}
