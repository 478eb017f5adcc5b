//! A single in-flight transition between two visual states.

/// Seconds a position change takes to play out.
pub const POSITION_DURATION: f64 = 0.3;
/// Seconds an emphasis-only change (scale, no movement) takes to play out.
pub const EMPHASIS_DURATION: f64 = 0.15;

/// Cubic ease-out: fast start, gentle landing. Input is clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// The displayed state of one element: its center and an emphasis scale
/// (`1.0` is resting size, current/highlighted elements scale up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Visual {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, scale: 1.0 }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn lerp(&self, other: &Visual, t: f64) -> Visual {
        Visual {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

impl Default for Visual {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

/// A tween from one visual state to another over a fixed wall-clock window.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: Visual,
    to: Visual,
    start: f64,
    duration: f64,
}

impl Tween {
    pub fn new(from: Visual, to: Visual, start: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    pub fn target(&self) -> Visual {
        self.to
    }

    /// The displayed value at `now`. Clamped: before the window it is the
    /// starting state, after it the target. A non-positive duration snaps.
    pub fn sample(&self, now: f64) -> Visual {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (now - self.start) / self.duration;
        self.from.lerp(&self.to, ease_out_cubic(t))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.start >= self.duration
    }
}
