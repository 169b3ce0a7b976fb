//! Rendering seam between the controller and whatever displays it.

use crate::config::FixedSize;
use crate::panel::{Panel, PanelId, PanelPhase};
use serde::{Deserialize, Serialize};

/// Presentation of one panel for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelStyle {
    /// Displayed at all
    pub visible: bool,
    /// Lifecycle phase
    pub phase: PanelPhase,
    /// Opacity, 0.0 to 1.0
    pub opacity: f64,
    /// Horizontal offset in percent
    pub offset_x: f64,
    /// Vertical offset in percent
    pub offset_y: f64,
}

impl PanelStyle {
    /// Whether the panel should carry the active marker.
    ///
    /// The incoming panel is marked as soon as its transition starts.
    #[must_use]
    pub fn marked_active(&self) -> bool {
        matches!(self.phase, PanelPhase::Active | PanelPhase::Entering)
    }
}

impl From<&Panel> for PanelStyle {
    fn from(panel: &Panel) -> Self {
        Self {
            visible: panel.is_visible(),
            phase: panel.phase(),
            opacity: panel.opacity(),
            offset_x: panel.offset_x(),
            offset_y: panel.offset_y(),
        }
    }
}

/// How the container is sized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContainerSize {
    /// Fixed CSS width and height.
    Fixed(FixedSize),
    /// Height in pixels derived from the container width.
    Responsive {
        /// Height in pixels
        height: f64,
    },
    /// Left to the page's own styling.
    Natural,
}

/// Class of the glyph shown when autoplay resumes.
pub const PLAY_CLASS: &str = "playImg";
/// Class of the glyph shown when autoplay pauses.
pub const PAUSE_CLASS: &str = "pauseImg";

/// Transient play/pause glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    /// Shown when autoplay resumes.
    Play,
    /// Shown when autoplay pauses.
    Pause,
}

impl Glyph {
    /// Class name of the glyph element.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Play => PLAY_CLASS,
            Self::Pause => PAUSE_CLASS,
        }
    }
}

/// A glyph and its current opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorStyle {
    /// Which glyph
    pub glyph: Glyph,
    /// Opacity, 0.0 to 1.0
    pub opacity: f64,
}

/// Anything the controller can paint its state onto.
///
/// One `paint` call emits the complete state: every panel, the container
/// size, the progress bar (when enabled) and the live indicators.
pub trait Surface {
    /// Present one panel.
    fn panel(&mut self, id: PanelId, style: &PanelStyle);

    /// Size the container.
    fn container(&mut self, size: &ContainerSize);

    /// Set the progress bar fill, 0.0 to 1.0.
    fn progress(&mut self, fill: f64);

    /// Replace the set of visible indicators.
    fn indicators(&mut self, indicators: &[IndicatorStyle]);
}
