//! WASM entry point: `createSlider`.

use super::dom::DomSurface;
use super::error::BrowserError;
use super::logger;
use super::teardown::Teardown;
use carousel_core::{Configuration, SlideController, SliderEvent, SliderOptions};
use log::LevelFilter;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, EventTarget, HtmlElement, Window};

/// Interval between animation frames.
const FRAME_MS: i32 = 16;

/// State shared between the handle and its listener closures.
///
/// The closures registered with the page hold an `Rc` to this state and the
/// teardown list holds the closures, so the slider stays alive for as long as
/// the page can call it. `dispose` breaks the cycle.
struct Shared {
    controller: RefCell<SlideController>,
    surface: RefCell<DomSurface>,
    window: Window,
    last_frame: Cell<f64>,
    teardown: RefCell<Teardown>,
}

impl Shared {
    fn dispatch(&self, event: &SliderEvent) {
        self.controller.borrow_mut().handle_event(event);
        self.paint();
    }

    fn frame(&self) {
        let now = js_sys::Date::now();
        let elapsed_ms = now - self.last_frame.replace(now);
        let dt = Duration::from_secs_f64((elapsed_ms / 1000.0).max(0.0));
        self.controller.borrow_mut().tick(dt);
        self.paint();
    }

    fn paint(&self) {
        let controller = self.controller.borrow();
        let mut surface = self.surface.borrow_mut();
        controller.paint(&mut *surface);
    }

    fn dispose(&self) {
        let teardown = std::mem::take(&mut *self.teardown.borrow_mut());
        teardown.run();
        if self.controller.borrow().is_disposed() {
            return;
        }
        self.controller.borrow_mut().dispose();
        self.paint();
        self.surface.borrow_mut().detach();
    }
}

/// Handle to a live slider.
///
/// The handle is optional: dropping it, or letting JS collect it, leaves the
/// slider running. Only [`Slider::dispose`] tears it down.
#[wasm_bindgen]
pub struct Slider {
    shared: Rc<Shared>,
}

/// Turn the element matching `selector` into a slider.
///
/// The element's direct `div` children become the panels. Options are a
/// JSON object; an empty string uses the defaults. Calling this again on
/// the same element re-initializes it.
#[wasm_bindgen(js_name = createSlider)]
pub fn create_slider(selector: &str, options_json: &str) -> Result<Slider, JsValue> {
    Slider::attach(selector, options_json).map_err(JsValue::from)
}

#[wasm_bindgen]
impl Slider {
    /// Show the next panel, as the right arrow does.
    pub fn next(&self) {
        self.shared.dispatch(&SliderEvent::Next);
    }

    /// Show the previous panel, as the left arrow does.
    pub fn previous(&self) {
        self.shared.dispatch(&SliderEvent::Previous);
    }

    /// Pause or resume autoplay, as clicking a panel does.
    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&self) {
        self.shared.dispatch(&SliderEvent::TogglePause);
    }

    /// Index of the active panel.
    #[wasm_bindgen(js_name = activeIndex)]
    pub fn active_index(&self) -> usize {
        self.shared.controller.borrow().active_id().index()
    }

    /// Whether autoplay is paused.
    #[wasm_bindgen(js_name = isPaused)]
    pub fn is_paused(&self) -> bool {
        self.shared.controller.borrow().is_paused()
    }

    /// Stop timers, remove listeners and injected markup. Idempotent.
    pub fn dispose(&self) {
        self.shared.dispose();
    }
}

impl Slider {
    fn attach(selector: &str, options_json: &str) -> Result<Self, BrowserError> {
        console_error_panic_hook::set_once();
        logger::init(if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });

        let window = window().ok_or_else(|| BrowserError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| BrowserError::Dom("no document".into()))?;
        let container = document
            .query_selector(selector)
            .map_err(|err| BrowserError::Dom(format!("querySelector: {err:?}")))?
            .ok_or_else(|| BrowserError::ContainerNotFound(selector.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BrowserError::Dom(format!("'{selector}' is not an HTML element")))?;

        let mut options = SliderOptions::from_json(options_json)?;
        if options.seed.is_none() {
            options.seed = Some(random_seed());
        }

        let mut surface = DomSurface::attach(document, container)?;
        let controller =
            SlideController::new(surface.panel_count(), &options, surface.container_width())?;
        let config = controller.config().clone();

        let arrows = if config.nav {
            Some(surface.add_nav()?)
        } else {
            None
        };
        if config.progress_bar {
            surface.add_progress_bar()?;
        }
        let panels = surface.panels().to_vec();

        let shared = Rc::new(Shared {
            controller: RefCell::new(controller),
            surface: RefCell::new(surface),
            window,
            last_frame: Cell::new(js_sys::Date::now()),
            teardown: RefCell::new(Teardown::new()),
        });

        let wired = wire(&shared, arrows, panels, &config);
        if let Err(err) = wired {
            shared.dispose();
            return Err(err);
        }
        shared.paint();

        log::info!("slider attached to '{selector}'");
        Ok(Self { shared })
    }
}

fn wire(
    shared: &Rc<Shared>,
    arrows: Option<(HtmlElement, HtmlElement)>,
    panels: Vec<HtmlElement>,
    config: &Configuration,
) -> Result<(), BrowserError> {
    if let Some((left, right)) = arrows {
        listen(shared, left.into(), "click", SliderEvent::Previous)?;
        listen(shared, right.into(), "click", SliderEvent::Next)?;
    }
    if config.autoslide {
        for panel in panels {
            listen(shared, panel.into(), "click", SliderEvent::TogglePause)?;
        }
    }
    if config.fixed_size.is_none() && config.responsive {
        listen_resize(shared)?;
    }
    start_frames(shared)
}

fn listen(
    shared: &Rc<Shared>,
    target: EventTarget,
    kind: &'static str,
    event: SliderEvent,
) -> Result<(), BrowserError> {
    let state = Rc::clone(shared);
    let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| state.dispatch(&event));
    add_listener(shared, target, kind, callback)
}

fn listen_resize(shared: &Rc<Shared>) -> Result<(), BrowserError> {
    let state = Rc::clone(shared);
    let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let width = state.surface.borrow().container_width();
        state.dispatch(&SliderEvent::Resize { width });
    });
    let target: EventTarget = shared.window.clone().into();
    add_listener(shared, target, "resize", callback)
}

fn add_listener(
    shared: &Shared,
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
) -> Result<(), BrowserError> {
    target
        .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
        .map_err(|err| BrowserError::Dom(format!("addEventListener({kind}): {err:?}")))?;
    shared.teardown.borrow_mut().defer(move || {
        if target
            .remove_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not remove {kind} listener");
        }
    });
    Ok(())
}

fn start_frames(shared: &Rc<Shared>) -> Result<(), BrowserError> {
    let state = Rc::clone(shared);
    let callback = Closure::<dyn FnMut()>::new(move || state.frame());
    let handle = shared
        .window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            FRAME_MS,
        )
        .map_err(|err| BrowserError::Dom(format!("setInterval: {err:?}")))?;
    let window = shared.window.clone();
    shared.teardown.borrow_mut().defer(move || {
        window.clear_interval_with_handle(handle);
        drop(callback);
    });
    Ok(())
}

/// Seed for the effect picker when the page gives none.
fn random_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}
