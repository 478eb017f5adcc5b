#![forbid(unsafe_code)]

//! Step-trace model and playback cursor for algorithm visualizations (headless).
//!
//! Design goals:
//! - traces are immutable once produced; the player only moves a cursor
//! - deterministic, testable outputs (no wall-clock reads; callers supply time)
//! - runtime-agnostic APIs (no executor, no timers)

pub mod config;
pub mod error;
pub mod geom;
pub mod player;
pub mod step;
pub mod vars;

pub use config::{LayoutConfig, LayoutKind};
pub use error::{Error, Result};
pub use player::Player;
pub use step::{Step, Trace};
pub use vars::VariableBag;
