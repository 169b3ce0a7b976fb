//! A surface that remembers what was painted.

use carousel_core::{ContainerSize, IndicatorStyle, PanelId, PanelStyle, Surface};
use serde::{Deserialize, Serialize};

/// Records the most recent paint of every element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingSurface {
    panels: Vec<Option<PanelStyle>>,
    container: Option<ContainerSize>,
    progress: Option<f64>,
    indicators: Vec<IndicatorStyle>,
    paints: usize,
}

impl RecordingSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Style last painted for a panel.
    #[must_use]
    pub fn panel_style(&self, id: PanelId) -> Option<&PanelStyle> {
        self.panels.get(id.index()).and_then(Option::as_ref)
    }

    /// Panels carrying the active marker.
    #[must_use]
    pub fn marked_active(&self) -> Vec<PanelId> {
        self.painted()
            .filter(|(_, style)| style.marked_active())
            .map(|(id, _)| id)
            .collect()
    }

    /// Panels currently displayed.
    #[must_use]
    pub fn visible(&self) -> Vec<PanelId> {
        self.painted()
            .filter(|(_, style)| style.visible)
            .map(|(id, _)| id)
            .collect()
    }

    /// Last container size.
    #[must_use]
    pub const fn container_size(&self) -> Option<&ContainerSize> {
        self.container.as_ref()
    }

    /// Last progress bar fill, `None` if never painted.
    #[must_use]
    pub const fn last_progress(&self) -> Option<f64> {
        self.progress
    }

    /// Indicators from the last paint.
    #[must_use]
    pub fn last_indicators(&self) -> &[IndicatorStyle] {
        &self.indicators
    }

    /// Number of completed `container` calls, one per paint.
    #[must_use]
    pub const fn paint_count(&self) -> usize {
        self.paints
    }

    fn painted(&self) -> impl Iterator<Item = (PanelId, &PanelStyle)> {
        self.panels
            .iter()
            .enumerate()
            .filter_map(|(index, style)| style.as_ref().map(|style| (PanelId(index), style)))
    }
}

impl Surface for RecordingSurface {
    fn panel(&mut self, id: PanelId, style: &PanelStyle) {
        if self.panels.len() <= id.index() {
            self.panels.resize(id.index() + 1, None);
        }
        self.panels[id.index()] = Some(*style);
    }

    fn container(&mut self, size: &ContainerSize) {
        self.container = Some(size.clone());
        self.paints += 1;
    }

    fn progress(&mut self, fill: f64) {
        self.progress = Some(fill);
    }

    fn indicators(&mut self, indicators: &[IndicatorStyle]) {
        self.indicators = indicators.to_vec();
    }
}
