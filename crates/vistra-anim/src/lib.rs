//! Transition orchestration for visualization elements.
//!
//! Every on-screen element (node, edge, matrix cell) carries a stable
//! identity. When a step changes where an element should be or how emphasized
//! it should look, the [`Orchestrator`] starts a tween from the element's
//! *currently displayed* value toward the new target. A retarget while a
//! tween is in flight cancels and replaces it — the most recent target always
//! wins, nothing queues.
//!
//! The crate is runtime-agnostic: it never sleeps, spawns, or reads a clock.
//! Callers pass monotonic time in seconds to every method, which keeps the
//! same code usable under a frame loop, a test harness, or offline rendering.

#![forbid(unsafe_code)]

mod orchestrator;
mod tween;

pub use orchestrator::{ElementId, Orchestrator};
pub use tween::{EMPHASIS_DURATION, POSITION_DURATION, Tween, Visual, ease_out_cubic};
