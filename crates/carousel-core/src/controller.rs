//! The slide controller: ring, autoplay, transitions and input in one place.
//!
//! All mutation happens through `&mut self` on the host's event loop. Input
//! arrives as [`SliderEvent`]s, time arrives as [`SlideController::tick`],
//! and the current state is emitted with [`SlideController::paint`].
//!
//! # Examples
//!
//! ```
//! use carousel_core::{Direction, SlideController, SliderOptions};
//! use std::time::Duration;
//!
//! let options = SliderOptions {
//!     autoslide: Some(false),
//!     ..SliderOptions::default()
//! };
//! let mut slider = SlideController::new(3, &options, 960.0).unwrap();
//! slider.advance(Direction::Forward);
//! for _ in 0..40 {
//!     slider.tick(Duration::from_millis(16));
//! }
//! assert!(slider.is_settled());
//! assert_eq!(slider.active_id().index(), 1);
//! ```

use crate::autoplay::AutoplayTimer;
use crate::config::{Configuration, SliderOptions};
use crate::error::Result;
use crate::event::SliderEvent;
use crate::indicator::PauseIndicator;
use crate::panel::{Panel, PanelId, PanelPhase, Property};
use crate::ring::{Direction, SlideRing};
use crate::surface::{ContainerSize, Glyph, IndicatorStyle, PanelStyle, Surface};
use crate::transition::{EffectPicker, Transition};
use std::time::Duration;

/// Seed for the effect picker when the configuration names none.
pub const DEFAULT_SEED: u64 = 42;

/// Mutable slider state, owned by the controller.
#[derive(Debug, Clone)]
pub struct SliderState {
    ring: SlideRing,
    autoplay: AutoplayTimer,
    paused: bool,
    transition: Option<Transition>,
}

impl SliderState {
    /// The panel ring.
    #[must_use]
    pub const fn ring(&self) -> &SlideRing {
        &self.ring
    }

    /// The autoplay timer.
    #[must_use]
    pub const fn autoplay(&self) -> &AutoplayTimer {
        &self.autoplay
    }

    /// Whether autoplay is paused by the user.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// The transition in flight, if any.
    #[must_use]
    pub const fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }
}

/// A carousel over a fixed number of panels.
#[derive(Debug)]
pub struct SlideController {
    config: Configuration,
    state: SliderState,
    picker: EffectPicker,
    container_width: f64,
    indicators: Vec<PauseIndicator>,
    disposed: bool,
}

impl SlideController {
    /// Build a slider from user overrides.
    pub fn new(panel_count: usize, options: &SliderOptions, container_width: f64) -> Result<Self> {
        Self::with_config(
            panel_count,
            Configuration::from_options(options),
            container_width,
        )
    }

    /// Build a slider from a JSON options object.
    pub fn from_json(panel_count: usize, options: &str, container_width: f64) -> Result<Self> {
        Self::with_config(
            panel_count,
            Configuration::from_json(options)?,
            container_width,
        )
    }

    /// Build a slider from a resolved configuration.
    ///
    /// Shows the first panel and, with autoslide on, starts autoplay.
    pub fn with_config(
        panel_count: usize,
        config: Configuration,
        container_width: f64,
    ) -> Result<Self> {
        config.validate()?;
        let mut ring = SlideRing::new(panel_count)?;
        ring.show_first();

        let mut autoplay = AutoplayTimer::new(config.speed, config.progress_bar);
        if config.autoslide {
            autoplay.start();
        }

        let picker = EffectPicker::seeded(config.seed.unwrap_or(DEFAULT_SEED));
        log::debug!(
            "slider created: {} panels, {} effect, autoslide={}, speed={}ms",
            panel_count,
            config.animation_type,
            config.autoslide,
            config.speed.as_millis()
        );

        Ok(Self {
            config,
            state: SliderState {
                ring,
                autoplay,
                paused: false,
                transition: None,
            },
            picker,
            container_width: container_width.max(0.0),
            indicators: Vec::new(),
            disposed: false,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SliderState {
        &self.state
    }

    /// The panel the ring currently points at.
    #[must_use]
    pub const fn active_id(&self) -> PanelId {
        self.state.ring.active_id()
    }

    /// The panel the ring currently points at.
    #[must_use]
    pub fn current_active(&self) -> &Panel {
        self.state.ring.current_active()
    }

    /// Look up a panel.
    #[must_use]
    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.state.ring.get(id)
    }

    /// Number of panels.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.state.ring.len()
    }

    /// Whether autoplay is paused by the user.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// Whether no transition is in flight.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.state.transition.is_none()
    }

    /// Whether [`SlideController::dispose`] has run.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Last known container width.
    #[must_use]
    pub const fn container_width(&self) -> f64 {
        self.container_width
    }

    /// How the container should be sized.
    #[must_use]
    pub fn container_size(&self) -> ContainerSize {
        if let Some(fixed) = &self.config.fixed_size {
            return ContainerSize::Fixed(fixed.clone());
        }
        self.config
            .responsive_height(self.container_width)
            .map_or(ContainerSize::Natural, |height| ContainerSize::Responsive {
                height,
            })
    }

    /// Progress bar fill, `None` without a progress bar.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.state.autoplay.progress()
    }

    /// Live play/pause glyphs.
    #[must_use]
    pub fn indicators(&self) -> Vec<IndicatorStyle> {
        self.indicators.iter().map(PauseIndicator::style).collect()
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Dispatch one input event.
    pub fn handle_event(&mut self, event: &SliderEvent) {
        if self.disposed {
            log::trace!("ignoring {event:?} on disposed slider");
            return;
        }
        match *event {
            SliderEvent::Next => self.on_arrow(Direction::Forward),
            SliderEvent::Previous => self.on_arrow(Direction::Backward),
            SliderEvent::TogglePause => self.toggle_pause(),
            SliderEvent::Resize { width } => self.resize(width),
        }
    }

    fn on_arrow(&mut self, direction: Direction) {
        if self.config.nav {
            self.navigate(direction);
        } else {
            log::trace!("navigation arrows disabled");
        }
    }

    /// User navigation: cancel autoplay, advance, and restart autoplay.
    ///
    /// Navigating while paused resumes autoplay.
    pub fn navigate(&mut self, direction: Direction) {
        if self.disposed {
            return;
        }
        self.state.autoplay.cancel();
        self.advance(direction);
        if self.config.autoslide {
            if self.state.paused {
                log::debug!("navigation resumes autoplay");
                self.state.paused = false;
            }
            self.state.autoplay.start();
        }
    }

    /// Flip between paused and playing. Does nothing without autoslide.
    pub fn toggle_pause(&mut self) {
        if self.state.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Stop autoplay until [`SlideController::resume`].
    pub fn pause(&mut self) {
        if self.disposed || !self.config.autoslide || self.state.paused {
            return;
        }
        self.state.paused = true;
        self.state.autoplay.cancel();
        self.indicators.push(PauseIndicator::new(Glyph::Pause));
        log::debug!("autoplay paused");
    }

    /// Restart autoplay with a full interval.
    pub fn resume(&mut self) {
        if self.disposed || !self.config.autoslide || !self.state.paused {
            return;
        }
        self.state.paused = false;
        self.state.autoplay.start();
        self.indicators.push(PauseIndicator::new(Glyph::Play));
        log::debug!("autoplay resumed");
    }

    /// Record a new container width.
    pub fn resize(&mut self, width: f64) {
        if self.disposed {
            return;
        }
        self.container_width = width.max(0.0);
        log::trace!("container resized to {}px", self.container_width);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Hand the ring over to the neighbouring panel.
    ///
    /// The ring moves at once; the incoming panel is flagged active when its
    /// transition settles. A transition still in flight is cut short first.
    /// Autoplay is left alone.
    pub fn advance(&mut self, direction: Direction) {
        if self.disposed {
            return;
        }
        if self.state.ring.len() < 2 {
            log::trace!("single panel, nothing to advance to");
            return;
        }
        self.supersede_transition();

        let outgoing = self.state.ring.active_id();
        let incoming = self.state.ring.compute_next(direction);
        let effect = self.picker.pick(self.config.animation_type);
        let Some((out, inc)) = self.state.ring.pair_mut(outgoing, incoming) else {
            return;
        };
        out.stop();
        inc.stop();
        effect.apply(out, inc, direction);

        self.state.ring.move_to(incoming);
        self.state.transition = Some(Transition {
            outgoing,
            incoming,
            effect,
            direction,
        });
        log::debug!("{effect} transition {outgoing} -> {incoming}");
        self.finish_transition_if_settled();
    }

    fn supersede_transition(&mut self) {
        let Some(prev) = self.state.transition.take() else {
            return;
        };
        if let Some(out) = self.state.ring.get_mut(prev.outgoing) {
            out.stop();
            out.hide();
            out.set_phase(PanelPhase::Hidden);
        }
        if let Some(inc) = self.state.ring.get_mut(prev.incoming) {
            inc.stop();
        }
        log::trace!(
            "superseded transition {} -> {}",
            prev.outgoing,
            prev.incoming
        );
    }

    fn finish_transition_if_settled(&mut self) {
        let Some(transition) = self.state.transition else {
            return;
        };
        let ring = &self.state.ring;
        let settled = match (ring.get(transition.outgoing), ring.get(transition.incoming)) {
            (Some(out), Some(inc)) => transition.is_settled(out, inc),
            _ => true,
        };
        if !settled {
            return;
        }

        if let Some(out) = self.state.ring.get_mut(transition.outgoing) {
            out.hide();
            out.set_phase(PanelPhase::Hidden);
        }
        if let Some(inc) = self.state.ring.get_mut(transition.incoming) {
            inc.set_phase(PanelPhase::Active);
        }
        self.state.transition = None;
        log::trace!("transition settled on {}", transition.incoming);
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Advance animations and autoplay by one frame.
    pub fn tick(&mut self, dt: Duration) {
        if self.disposed {
            return;
        }
        self.state.ring.update(dt);
        self.finish_transition_if_settled();

        for indicator in &mut self.indicators {
            indicator.update(dt);
        }
        self.indicators.retain(|indicator| !indicator.is_finished());

        if self.state.autoplay.tick(dt) {
            log::debug!("autoplay advancing");
            self.advance(Direction::Forward);
            self.state.autoplay.start();
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Tear down: cancel autoplay, settle and stop all animations, and
    /// ignore every later event and tick.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.state.autoplay.cancel();
        if let Some(transition) = self.state.transition.take() {
            if let Some(out) = self.state.ring.get_mut(transition.outgoing) {
                out.stop();
                out.hide();
                out.set_phase(PanelPhase::Hidden);
            }
            if let Some(inc) = self.state.ring.get_mut(transition.incoming) {
                inc.stop();
                inc.set(Property::Opacity, 1.0);
                inc.set(Property::OffsetX, 0.0);
                inc.set(Property::OffsetY, 0.0);
                inc.show();
                inc.set_phase(PanelPhase::Active);
            }
        }
        self.state.ring.stop_all();
        self.indicators.clear();
        self.disposed = true;
        log::debug!("slider disposed");
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Emit the full presentation state.
    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.container(&self.container_size());
        for panel in self.state.ring.panels() {
            surface.panel(panel.id(), &PanelStyle::from(panel));
        }
        if let Some(fill) = self.state.autoplay.progress() {
            surface.progress(fill);
        }
        surface.indicators(&self.indicators());
    }
}
