//! Test harness for carousel sliders.
//!
//! Time is simulated: every call to [`Harness::tick`] is split into fixed
//! frames, and the slider is painted onto a [`RecordingSurface`] after each.

use carousel_core::{PanelId, Result, SlideController, SliderEvent};
use std::collections::VecDeque;
use std::time::Duration;

use crate::surface::RecordingSurface;

/// Default frame length, roughly 60 frames per second.
pub const FRAME: Duration = Duration::from_millis(16);

/// Upper bound on simulated time spent waiting for a transition to settle.
pub const SETTLE_LIMIT: Duration = Duration::from_secs(10);

/// Drives a [`SlideController`] with simulated input and time.
#[derive(Debug)]
pub struct Harness {
    /// Slider under test
    slider: SlideController,
    /// Pending input
    event_queue: VecDeque<SliderEvent>,
    /// What the last frame painted
    surface: RecordingSurface,
    /// Frame length
    frame: Duration,
    /// Total simulated time
    elapsed: Duration,
}

impl Harness {
    /// Wrap an existing slider and paint its initial state.
    pub fn new(slider: SlideController) -> Self {
        let mut harness = Self {
            slider,
            event_queue: VecDeque::new(),
            surface: RecordingSurface::new(),
            frame: FRAME,
            elapsed: Duration::ZERO,
        };
        harness.repaint();
        harness
    }

    /// Build a slider from JSON options in a 1280px wide container.
    pub fn build(panel_count: usize, options: &str) -> Result<Self> {
        SlideController::from_json(panel_count, options, 1280.0).map(Self::new)
    }

    /// Set the frame length.
    #[must_use]
    pub fn frame(mut self, frame: Duration) -> Self {
        if !frame.is_zero() {
            self.frame = frame;
        }
        self
    }

    // === Event Simulation ===

    /// Click the right arrow.
    pub fn click_next(&mut self) -> &mut Self {
        self.dispatch(SliderEvent::Next)
    }

    /// Click the left arrow.
    pub fn click_previous(&mut self) -> &mut Self {
        self.dispatch(SliderEvent::Previous)
    }

    /// Click a panel, toggling pause.
    pub fn click_body(&mut self) -> &mut Self {
        self.dispatch(SliderEvent::TogglePause)
    }

    /// Resize the container.
    pub fn resize(&mut self, width: f64) -> &mut Self {
        self.dispatch(SliderEvent::Resize { width })
    }

    /// Queue an arbitrary event and process the queue.
    pub fn dispatch(&mut self, event: SliderEvent) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Time ===

    /// Advance simulated time by `ms` milliseconds.
    pub fn tick(&mut self, ms: u64) -> &mut Self {
        self.run_for(Duration::from_millis(ms))
    }

    /// Advance simulated time, in whole frames plus a final partial one.
    pub fn run_for(&mut self, total: Duration) -> &mut Self {
        let mut left = total;
        while !left.is_zero() {
            let step = left.min(self.frame);
            self.step(step);
            left -= step;
        }
        self
    }

    /// Run frames until no transition is in flight.
    ///
    /// # Panics
    ///
    /// Panics if the slider has not settled within [`SETTLE_LIMIT`].
    pub fn settle(&mut self) -> &mut Self {
        let mut waited = Duration::ZERO;
        while !self.slider.is_settled() {
            assert!(
                waited < SETTLE_LIMIT,
                "Slider did not settle within {SETTLE_LIMIT:?}"
            );
            self.step(self.frame);
            waited += self.frame;
        }
        self
    }

    /// Tear the slider down.
    pub fn dispose(&mut self) -> &mut Self {
        self.slider.dispose();
        self.repaint();
        self
    }

    // === Queries ===

    /// The slider under test.
    #[must_use]
    pub const fn slider(&self) -> &SlideController {
        &self.slider
    }

    /// Mutable access for calls the harness does not wrap.
    pub fn slider_mut(&mut self) -> &mut SlideController {
        &mut self.slider
    }

    /// What the last frame painted.
    #[must_use]
    pub const fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    /// Total simulated time.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Index of the ring's active panel.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.slider.active_id().index()
    }

    // === Assertions ===

    /// Assert the ring points at a panel.
    ///
    /// # Panics
    ///
    /// Panics if another panel is active.
    pub fn assert_active(&self, expected: usize) -> &Self {
        let actual = self.active_index();
        assert_eq!(
            actual, expected,
            "Expected panel {expected} to be active but panel {actual} is"
        );
        self
    }

    /// Assert exactly one panel is flagged active and it alone is visible.
    ///
    /// # Panics
    ///
    /// Panics if a transition is in flight or the flags disagree.
    pub fn assert_single_active(&self) -> &Self {
        let expected = vec![self.slider.active_id()];
        let flagged: Vec<PanelId> = self
            .slider
            .state()
            .ring()
            .flagged_active()
            .map(carousel_core::Panel::id)
            .collect();
        assert_eq!(
            flagged, expected,
            "Expected exactly {expected:?} flagged active but found {flagged:?}"
        );
        let visible = self.surface.visible();
        assert_eq!(
            visible, expected,
            "Expected only {expected:?} visible but found {visible:?}"
        );
        self
    }

    /// Assert the number of pending autoplay advances.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_pending(&self, expected: usize) -> &Self {
        let actual = self.slider.state().autoplay().pending_count();
        assert_eq!(
            actual, expected,
            "Expected {expected} pending autoplay advances but found {actual}"
        );
        self
    }

    /// Assert the pause flag.
    ///
    /// # Panics
    ///
    /// Panics if the flag does not match.
    pub fn assert_paused(&self, expected: bool) -> &Self {
        let actual = self.slider.is_paused();
        assert_eq!(actual, expected, "Expected paused={expected} but was {actual}");
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            self.slider.handle_event(&event);
        }
        self.repaint();
    }

    fn step(&mut self, dt: Duration) {
        self.slider.tick(dt);
        self.elapsed += dt;
        self.repaint();
    }

    fn repaint(&mut self) {
        self.slider.paint(&mut self.surface);
    }
}
