//! Panels: the content panes the slider rotates through.

use crate::animation::Tween;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Position of a panel in the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(pub usize);

impl PanelId {
    /// Index into the panel sequence.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}

/// Where a panel is in its show/hide lifecycle.
///
/// `Active` is the slider's "active flag". Outside a transition exactly one
/// panel is `Active` and every other panel is `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelPhase {
    /// Not displayed.
    #[default]
    Hidden,
    /// Displayed and flagged active.
    Active,
    /// Animating in as the incoming panel of a transition.
    Entering,
    /// Animating out as the outgoing panel of a transition.
    Leaving,
}

/// A visual property that can be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Opacity, 0.0 to 1.0.
    Opacity,
    /// Horizontal offset in percent of the container width.
    OffsetX,
    /// Vertical offset in percent of the container height.
    OffsetY,
}

/// What happens when an animation runs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// Leave the panel as the animation left it.
    Keep,
    /// Hide the panel and restore its resting opacity and offsets.
    Hide,
}

#[derive(Debug, Clone, PartialEq)]
struct Animation {
    property: Property,
    tween: Tween,
    settle: Settle,
}

/// One content pane and its animated presentation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    id: PanelId,
    visible: bool,
    phase: PanelPhase,
    opacity: f64,
    offset_x: f64,
    offset_y: f64,
    animations: Vec<Animation>,
}

impl Panel {
    /// Create a hidden panel at rest.
    #[must_use]
    pub const fn new(id: PanelId) -> Self {
        Self {
            id,
            visible: false,
            phase: PanelPhase::Hidden,
            opacity: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            animations: Vec::new(),
        }
    }

    /// Panel identity.
    #[must_use]
    pub const fn id(&self) -> PanelId {
        self.id
    }

    /// Whether the panel is displayed.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Whether the active flag is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == PanelPhase::Active
    }

    /// Current opacity.
    #[must_use]
    pub const fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Current horizontal offset in percent.
    #[must_use]
    pub const fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Current vertical offset in percent.
    #[must_use]
    pub const fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Current value of an animatable property.
    #[must_use]
    pub const fn get(&self, property: Property) -> f64 {
        match property {
            Property::Opacity => self.opacity,
            Property::OffsetX => self.offset_x,
            Property::OffsetY => self.offset_y,
        }
    }

    /// Set a property immediately.
    pub fn set(&mut self, property: Property, value: f64) {
        match property {
            Property::Opacity => self.opacity = value.clamp(0.0, 1.0),
            Property::OffsetX => self.offset_x = value,
            Property::OffsetY => self.offset_y = value,
        }
    }

    pub(crate) fn set_phase(&mut self, phase: PanelPhase) {
        self.phase = phase;
    }

    /// Display the panel without touching its animated properties.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the panel and return it to its resting presentation.
    pub fn hide(&mut self) {
        self.visible = false;
        self.opacity = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Stop every in-flight animation.
    ///
    /// Properties keep their current values and completion actions are
    /// dropped.
    pub fn stop(&mut self) {
        self.animations.clear();
    }

    /// Animate a property from its current value to `to`.
    ///
    /// Replaces any animation already running on the same property.
    pub fn animate(&mut self, property: Property, to: f64, duration: Duration, settle: Settle) {
        self.animations.retain(|anim| anim.property != property);
        let tween = Tween::new(self.get(property), to, duration);
        self.animations.push(Animation {
            property,
            tween,
            settle,
        });
        self.apply_animations();
    }

    /// Fade to full opacity, starting from transparent if hidden.
    pub fn fade_in(&mut self, duration: Duration) {
        if !self.visible {
            self.opacity = 0.0;
            self.visible = true;
        }
        self.animate(Property::Opacity, 1.0, duration, Settle::Keep);
    }

    /// Fade to transparent, then hide.
    pub fn fade_out(&mut self, duration: Duration) {
        self.animate(Property::Opacity, 0.0, duration, Settle::Hide);
    }

    /// Whether any animation is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Advance animations by one frame.
    pub fn update(&mut self, dt: Duration) {
        if self.animations.is_empty() {
            return;
        }
        for anim in &mut self.animations {
            anim.tween.update(dt);
        }
        self.apply_animations();
    }

    fn apply_animations(&mut self) {
        for i in 0..self.animations.len() {
            let (property, value) = {
                let anim = &self.animations[i];
                (anim.property, anim.tween.value())
            };
            self.set(property, value);
        }

        let mut hide = false;
        self.animations.retain(|anim| {
            let done = anim.tween.is_complete();
            hide |= done && anim.settle == Settle::Hide;
            !done
        });
        if hide {
            self.hide();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_new_panel_is_hidden_at_rest() {
        let panel = Panel::new(PanelId(3));
        assert_eq!(panel.id().index(), 3);
        assert!(!panel.is_visible());
        assert_eq!(panel.phase(), PanelPhase::Hidden);
        assert_eq!(panel.opacity(), 1.0);
        assert!(!panel.is_animating());
    }

    #[test]
    fn test_fade_in_from_hidden_starts_transparent() {
        let mut panel = Panel::new(PanelId(0));
        panel.fade_in(ms(300));
        assert!(panel.is_visible());
        assert_eq!(panel.opacity(), 0.0);
        panel.update(ms(150));
        assert!(panel.opacity() > 0.0 && panel.opacity() < 1.0);
        panel.update(ms(150));
        assert_eq!(panel.opacity(), 1.0);
        assert!(!panel.is_animating());
    }

    #[test]
    fn test_fade_out_hides_and_restores_opacity() {
        let mut panel = Panel::new(PanelId(0));
        panel.show();
        panel.fade_out(ms(500));
        panel.update(ms(499));
        assert!(panel.is_visible());
        panel.update(ms(1));
        assert!(!panel.is_visible());
        assert_eq!(panel.opacity(), 1.0);
    }

    #[test]
    fn test_stop_keeps_current_value_and_drops_settle() {
        let mut panel = Panel::new(PanelId(0));
        panel.show();
        panel.fade_out(ms(500));
        panel.update(ms(250));
        let mid = panel.opacity();
        panel.stop();
        panel.update(ms(1000));
        assert_eq!(panel.opacity(), mid);
        assert!(panel.is_visible());
    }

    #[test]
    fn test_animate_replaces_same_property() {
        let mut panel = Panel::new(PanelId(0));
        panel.show();
        panel.animate(Property::OffsetX, -100.0, ms(400), Settle::Hide);
        panel.update(ms(200));
        panel.animate(Property::OffsetX, 0.0, ms(400), Settle::Keep);
        panel.update(ms(400));
        assert_eq!(panel.offset_x(), 0.0);
        assert!(panel.is_visible());
        assert!(!panel.is_animating());
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let mut panel = Panel::new(PanelId(0));
        panel.show();
        panel.animate(Property::OffsetY, 100.0, Duration::ZERO, Settle::Hide);
        assert!(!panel.is_visible());
        assert_eq!(panel.offset_y(), 0.0);
        assert!(!panel.is_animating());
    }

    #[test]
    fn test_set_clamps_opacity() {
        let mut panel = Panel::new(PanelId(0));
        panel.set(Property::Opacity, 2.0);
        assert_eq!(panel.get(Property::Opacity), 1.0);
        panel.set(Property::Opacity, -1.0);
        assert_eq!(panel.get(Property::Opacity), 0.0);
    }
}
