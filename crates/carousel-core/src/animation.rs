//! Frame-driven animation primitives.
//!
//! Every animation in the slider is a [`Tween`] (or a [`KeyframeTrack`] for
//! the pause glyph) advanced by the host's frame ticks. Stopping an animation
//! is dropping it: the animated value stays where it was and nothing else
//! runs.

use std::time::Duration;

// =============================================================================
// Easing
// =============================================================================

/// jQuery's `swing`: cosine ease in and out over a normalized time value
/// (0.0 to 1.0). Both tweens and keyframe segments use it.
fn swing(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    0.5 - (t * std::f64::consts::PI).cos() / 2.0
}

// =============================================================================
// Tween
// =============================================================================

/// An eased transition of one value over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration
    pub duration: Duration,
    /// Elapsed time
    pub elapsed: Duration,
}

impl Tween {
    /// Create a new tween with swing easing.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        }
    }

    /// Get current value. Exactly `to` once complete.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let eased = swing(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether the tween has reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by one frame.
    pub fn update(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }
}

// =============================================================================
// KeyframeTrack
// =============================================================================

/// A keyframe in a track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Time of this keyframe (0.0 to 1.0 normalized)
    pub time: f64,
    /// Value at this keyframe
    pub value: f64,
}

impl Keyframe {
    /// Create new keyframe.
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self {
            time: time.clamp(0.0, 1.0),
            value,
        }
    }
}

/// Piecewise animation through several keyframes.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack {
    keyframes: Vec<Keyframe>,
    /// Total duration
    pub duration: Duration,
    /// Current elapsed time
    pub elapsed: Duration,
}

impl KeyframeTrack {
    /// Create new empty track.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            keyframes: Vec::new(),
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Add a keyframe, keeping the track sorted by time.
    #[must_use]
    pub fn keyframe(mut self, keyframe: Keyframe) -> Self {
        let at = self
            .keyframes
            .partition_point(|existing| existing.time <= keyframe.time);
        self.keyframes.insert(at, keyframe);
        self
    }

    /// Value at the current time.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let first = self.keyframes.first()?;
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };
        if t <= first.time {
            return Some(first.value);
        }

        for pair in self.keyframes.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if t <= next.time {
                let span = next.time - prev.time;
                let local = if span > 0.0 { (t - prev.time) / span } else { 1.0 };
                let eased = swing(local);
                return Some((next.value - prev.value).mul_add(eased, prev.value));
            }
        }
        self.keyframes.last().map(|kf| kf.value)
    }

    /// Advance by one frame.
    pub fn update(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Whether the track has played through.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

// =============================================================================
// Tests - TDD Style
// =============================================================================
