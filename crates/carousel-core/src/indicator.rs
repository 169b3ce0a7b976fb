//! The transient play/pause glyph.

use crate::animation::{Keyframe, KeyframeTrack};
use crate::surface::{Glyph, IndicatorStyle};
use std::time::Duration;

/// Fade-in time, and again fade-out time, of the glyph.
pub const INDICATOR_FADE: Duration = Duration::from_millis(600);

/// A glyph that fades in, fades out, and is then removed.
#[derive(Debug, Clone, PartialEq)]
pub struct PauseIndicator {
    glyph: Glyph,
    track: KeyframeTrack,
}

impl PauseIndicator {
    /// Start a new glyph animation.
    #[must_use]
    pub fn new(glyph: Glyph) -> Self {
        let track = KeyframeTrack::new(INDICATOR_FADE * 2)
            .keyframe(Keyframe::new(0.0, 0.0))
            .keyframe(Keyframe::new(0.5, 1.0))
            .keyframe(Keyframe::new(1.0, 0.0));
        Self { glyph, track }
    }

    /// Which glyph.
    #[must_use]
    pub const fn glyph(&self) -> Glyph {
        self.glyph
    }

    /// Advance by one frame.
    pub fn update(&mut self, dt: Duration) {
        self.track.update(dt);
    }

    /// Whether the glyph has faded out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.track.is_complete()
    }

    /// Current presentation.
    #[must_use]
    pub fn style(&self) -> IndicatorStyle {
        IndicatorStyle {
            glyph: self.glyph,
            opacity: self.track.value().unwrap_or(0.0),
        }
    }
}
