//! The slide ring: a circular sequence of panels with one logical position.

use crate::error::{Result, SliderError};
use crate::panel::{Panel, PanelId, PanelPhase};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Navigation sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Next panel (+1).
    Forward,
    /// Previous panel (-1).
    Backward,
}

impl Direction {
    /// The numeric sign, `+1` or `-1`.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Ordered, wrap-around panel sequence.
///
/// `active` is the ring's logical position: the panel most recently chosen
/// to be shown. It moves as soon as an advance begins, while the panel's own
/// active flag is only set once its transition settles.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideRing {
    panels: Vec<Panel>,
    active: usize,
}

impl SlideRing {
    /// Build a ring of `count` hidden panels.
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(SliderError::NoPanels);
        }
        Ok(Self {
            panels: (0..count).map(|i| Panel::new(PanelId(i))).collect(),
            active: 0,
        })
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always false; a ring holds at least one panel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Show the first panel, flagged active, and hide the rest.
    pub fn show_first(&mut self) {
        for panel in &mut self.panels {
            panel.stop();
            panel.hide();
            panel.set_phase(PanelPhase::Hidden);
        }
        let first = &mut self.panels[0];
        first.show();
        first.set_phase(PanelPhase::Active);
        self.active = 0;
    }

    /// Logical position of the ring.
    #[must_use]
    pub const fn active_id(&self) -> PanelId {
        PanelId(self.active)
    }

    /// The panel at the ring's logical position.
    #[must_use]
    pub fn current_active(&self) -> &Panel {
        &self.panels[self.active]
    }

    /// The panel that `direction` leads to from the current position.
    #[must_use]
    pub fn compute_next(&self, direction: Direction) -> PanelId {
        let len = self.panels.len();
        let next = match direction {
            Direction::Forward => (self.active + 1) % len,
            Direction::Backward => (self.active + len - 1) % len,
        };
        PanelId(next)
    }

    pub(crate) fn move_to(&mut self, id: PanelId) {
        debug_assert!(id.index() < self.panels.len());
        self.active = id.index();
    }

    /// Look up a panel.
    #[must_use]
    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(id.index())
    }

    /// Mutable access to two distinct panels at once.
    pub(crate) fn pair_mut(&mut self, a: PanelId, b: PanelId) -> Option<(&mut Panel, &mut Panel)> {
        let (a, b) = (a.index(), b.index());
        if a == b || a >= self.panels.len() || b >= self.panels.len() {
            return None;
        }
        if a < b {
            let (head, tail) = self.panels.split_at_mut(b);
            Some((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.panels.split_at_mut(a);
            Some((&mut tail[0], &mut head[b]))
        }
    }

    /// All panels in order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// Panels currently carrying the active flag.
    pub fn flagged_active(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter().filter(|panel| panel.is_active())
    }

    /// Advance every panel's animations by one frame.
    pub fn update(&mut self, dt: Duration) {
        for panel in &mut self.panels {
            panel.update(dt);
        }
    }

    /// Stop every animation on every panel.
    pub fn stop_all(&mut self) {
        for panel in &mut self.panels {
            panel.stop();
        }
    }
}
