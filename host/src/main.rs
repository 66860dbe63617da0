use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use elimination_wheel_core::{EntropySource, RandomSource, SeededRng};
use wheel_host::{
    describe_wheel, format_wheel, load_state, play_game, run_spin, save_state, HostConfig,
    SpinOutcome, StateFile,
};

#[derive(Parser, Debug)]
#[command(name = "wheel")]
#[command(about = "Elimination wheel: spin until one entry is left")]
struct Cli {
    /// Wheel config JSON (capacity, name length, spin tuning)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// State file, overrides WHEEL_STATE_PATH
    #[arg(long, global = true)]
    state: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add an entry to the wheel
    Add { name: String },
    /// Remove the entry at a position (see `show`)
    Remove { index: usize },
    /// Print sectors, colours and the entry under the pointer
    Show,
    /// Spin once and apply the result
    Spin {
        /// Deterministic xorshift seed; OS randomness when omitted
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Clear entries and eliminations
    Reset,
    /// Play a whole game with the given names without touching the state file
    Play {
        names: Vec<String>,
        #[arg(long)]
        seed: Option<u32>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn random_source(seed: Option<u32>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRng::new(seed)),
        None => Box::new(EntropySource),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = HostConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.state {
        config.state_path = path;
    }

    match cli.command {
        Commands::Play { names, seed, json } => {
            let report = play_game(
                &names,
                config.wheel.clone(),
                random_source(seed),
                config.frame_secs(),
                config.max_frames,
            )?;
            if json {
                let out = serde_json::to_string_pretty(&report)
                    .context("failed to serialize game report")?;
                println!("{out}");
            } else {
                for (round, spin) in report.rounds.iter().enumerate() {
                    if let SpinOutcome::Eliminated { name, .. } = &spin.outcome {
                        println!("Round {}: {name} eliminated", round + 1);
                    }
                }
                println!("Winner: {}", report.winner);
            }
            Ok(())
        }
        command => run_stateful(command, &config),
    }
}

fn run_stateful(command: Commands, config: &HostConfig) -> Result<()> {
    let state = load_state(&config.state_path)?;
    let seed = match &command {
        Commands::Spin { seed } => *seed,
        _ => None,
    };
    let mut session = state.open(&config.wheel, random_source(seed))?;

    match command {
        Commands::Add { name } => {
            session
                .add(&name)
                .map_err(|err| anyhow!("cannot add '{name}': {err}"))?;
            println!(
                "{} / {} entries",
                session.active().len(),
                session.config().capacity
            );
        }
        Commands::Remove { index } => {
            let name = session.remove(index).map_err(|err| {
                if err.is_index() {
                    anyhow!("cannot remove: {err} (run `wheel show` for positions)")
                } else {
                    anyhow!("cannot remove: {err}")
                }
            })?;
            println!("Removed {name}");
        }
        Commands::Show => {
            let views = describe_wheel(&mut session);
            print!("{}", format_wheel(&views, session.eliminated()));
            let needed = session.entries_needed();
            if needed > 0 {
                println!(
                    "Add {needed} more entr{} to spin",
                    if needed == 1 { "y" } else { "ies" }
                );
            }
            return Ok(());
        }
        Commands::Spin { .. } => {
            let report = run_spin(&mut session, config.frame_secs(), config.max_frames)?;
            match report.outcome {
                SpinOutcome::Eliminated { name, remaining } => {
                    println!("{name} has been eliminated ({remaining} left)");
                }
                SpinOutcome::Winner { winner, .. } => {
                    println!("{winner} is the winner!");
                }
            }
        }
        Commands::Reset => {
            session
                .reset()
                .map_err(|err| anyhow!("cannot reset: {err}"))?;
            println!("Game reset");
        }
        Commands::Play { .. } => bail!("play does not use the state file"),
    }

    save_state(&config.state_path, &StateFile::capture(&session))
}
