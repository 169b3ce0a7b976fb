//! Input events for the slider.

use crate::ring::Direction;
use serde::{Deserialize, Serialize};

/// User and host input delivered to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    /// Right arrow clicked
    Next,
    /// Left arrow clicked
    Previous,
    /// Slider body clicked
    TogglePause,
    /// Window resized
    Resize {
        /// New container width in pixels
        width: f64,
    },
}

impl SliderEvent {
    /// Navigation direction for arrow events.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match self {
            Self::Next => Some(Direction::Forward),
            Self::Previous => Some(Direction::Backward),
            Self::TogglePause | Self::Resize { .. } => None,
        }
    }
}
