//! Host side of the elimination wheel: frame loop, state file, text
//! rendering and configuration for the `wheel` binary.

pub mod config;
pub mod render;
pub mod runner;
pub mod store;

pub use config::HostConfig;
pub use render::{describe_wheel, format_wheel, SectorView};
pub use runner::{play_game, run_spin, GameReport, SpinOutcome, SpinReport};
pub use store::{load_state, save_state, StateFile};
