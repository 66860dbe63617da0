//! Elimination wheel engine.
//!
//! Entries are added to a registry, the wheel is spun with a frame-rate
//! independent deceleration model, and the sector under the fixed pointer is
//! eliminated until one entry remains. Rendering, forms and persistence
//! encoding are left to the host; this crate exposes the state they read.

pub mod config;
pub mod constants;
pub mod error;
pub mod palette;
pub mod registry;
pub mod resolver;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod spin;

pub use config::{SpinTuning, WheelConfig};
pub use error::{Action, TransitionCode, ValidationCode, WheelError};
pub use palette::{Color, ColorAssignment};
pub use registry::EntryRegistry;
pub use resolver::{pointer_sector, resolve_winner, sector_layout, Sector};
pub use rng::{RandomSource, SeededRng};
pub use session::{GamePhase, Session};
pub use snapshot::SessionSnapshot;
pub use spin::{Spin, SpinPhase, StepResult};

#[cfg(feature = "entropy")]
pub use rng::EntropySource;
