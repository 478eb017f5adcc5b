//! Per-identity tween bookkeeping across step transitions.

use crate::tween::{EMPHASIS_DURATION, POSITION_DURATION, Tween, Visual};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

/// Stable identity of an animated element. Nodes and matrix cells are
/// identified by what they are, edges by their endpoint pair, so an element
/// that merely moves between steps keeps its tween history.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    Node(String),
    Edge(String, String),
    Cell(usize, usize),
}

impl ElementId {
    pub fn node(id: impl Into<String>) -> Self {
        Self::Node(id.into())
    }

    pub fn edge(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Edge(from.into(), to.into())
    }
}

enum Track {
    Settled(Visual),
    Moving(Tween),
}

impl Track {
    fn sample(&self, now: f64) -> Visual {
        match self {
            Track::Settled(v) => *v,
            Track::Moving(t) => t.sample(now),
        }
    }

    fn target(&self) -> Visual {
        match self {
            Track::Settled(v) => *v,
            Track::Moving(t) => t.target(),
        }
    }
}

/// Owns one track per element identity. All state lives here; dropping the
/// orchestrator (or calling [`clear`](Orchestrator::clear)) forgets every
/// position, so a rebuilt scene starts from scratch with no continuity.
#[derive(Default)]
pub struct Orchestrator {
    tracks: FxHashMap<ElementId, Track>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points an element at a new target.
    ///
    /// An unknown identity appears directly at the target, untweened. A known
    /// identity whose target already matches keeps whatever it was doing.
    /// Otherwise a fresh tween starts from the *currently displayed* value —
    /// cancelling any in-flight tween, so rapid stepping chases the latest
    /// target instead of queueing intermediate ones. Pure emphasis changes
    /// (no movement) use the shorter duration.
    pub fn retarget(&mut self, id: ElementId, target: Visual, now: f64) {
        let Some(track) = self.tracks.get(&id) else {
            self.tracks.insert(id, Track::Settled(target));
            return;
        };
        if track.target() == target {
            return;
        }

        let current = track.sample(now);
        let duration = if current.position() == target.position() {
            EMPHASIS_DURATION
        } else {
            POSITION_DURATION
        };
        trace!(?id, ?duration, "retargeting element");
        self.tracks
            .insert(id, Track::Moving(Tween::new(current, target, now, duration)));
    }

    /// The displayed value of an element at `now`, or `None` for an identity
    /// the orchestrator has never seen (or has since dropped).
    pub fn sample(&self, id: &ElementId, now: f64) -> Option<Visual> {
        self.tracks.get(id).map(|track| track.sample(now))
    }

    /// Folds finished tweens into settled state. Returns `true` while any
    /// tween is still in flight, so a frame loop knows whether to keep
    /// redrawing.
    pub fn advance(&mut self, now: f64) -> bool {
        let mut animating = false;
        for track in self.tracks.values_mut() {
            if let Track::Moving(tween) = track {
                if tween.is_finished(now) {
                    *track = Track::Settled(tween.target());
                } else {
                    animating = true;
                }
            }
        }
        animating
    }

    /// Drops every identity not present in `live`, cancelling its tween.
    /// Called after each step so elements removed from the scene stop
    /// consuming state and cannot reappear mid-flight.
    pub fn sync<'a>(&mut self, live: impl IntoIterator<Item = &'a ElementId>) {
        let keep: FxHashSet<&ElementId> = live.into_iter().collect();
        self.tracks.retain(|id, _| keep.contains(id));
    }

    pub fn is_idle(&self, now: f64) -> bool {
        self.tracks.values().all(|track| match track {
            Track::Settled(_) => true,
            Track::Moving(tween) => tween.is_finished(now),
        })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}
