//! Playback cursor over a trace.
//!
//! The player never reads a wall clock. Autoplay is driven by an external
//! per-frame scheduler calling [`Player::tick`] with monotonic seconds; this
//! keeps the crate executor-free and playback fully deterministic in tests.

use crate::step::{Step, Trace};

const MIN_SPEED: f64 = 0.25;
const MAX_SPEED: f64 = 4.0;
const DEFAULT_SPEED: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Player {
    trace: Trace,
    current: usize,
    playing: bool,
    speed: f64,
    last_advance: Option<f64>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Trace::default())
    }
}

impl Player {
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            current: 0,
            playing: false,
            speed: DEFAULT_SPEED,
            last_advance: None,
        }
    }

    /// Replaces the trace wholesale. Autoplay is stopped *before* the swap so
    /// a pending tick can never advance a now-invalid index.
    pub fn set_trace(&mut self, trace: Trace) {
        self.pause();
        self.trace = trace;
        self.current = 0;
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// An empty trace leaves the player in a disabled state: every operation
    /// is a no-op and [`Player::current_step`] is `None`.
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.trace.get(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn at_end(&self) -> bool {
        Some(self.current) == self.trace.last_index()
    }

    /// Advances one step; a no-op at the last index (and auto-pauses there).
    pub fn next(&mut self) {
        match self.trace.last_index() {
            Some(last) if self.current < last => self.current += 1,
            _ => self.pause(),
        }
        if self.at_end() {
            self.pause();
        }
    }

    /// Retreats one step; a no-op at index 0.
    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn jump_to(&mut self, index: isize) {
        let last = self.trace.last_index().unwrap_or(0) as isize;
        self.current = index.clamp(0, last) as usize;
    }

    pub fn play(&mut self, speed: f64) {
        if self.is_empty() || self.at_end() {
            return;
        }
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self.playing = true;
        self.last_advance = None;
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.last_advance = None;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play(self.speed);
        }
    }

    pub fn reset(&mut self) {
        self.jump_to(0);
        self.pause();
    }

    /// Autoplay driver. `now` is monotonic seconds from the caller's clock;
    /// one step is taken each time `1/speed` seconds have elapsed. Reaching
    /// the last step auto-pauses.
    pub fn tick(&mut self, now: f64) {
        if !self.playing {
            return;
        }
        let Some(started) = self.last_advance else {
            self.last_advance = Some(now);
            return;
        };
        let interval = 1.0 / self.speed;
        if now - started >= interval {
            self.next();
            self.last_advance = Some(now);
        }
    }
}
