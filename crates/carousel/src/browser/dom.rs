//! Surface painting onto the slider's DOM elements.

use super::error::BrowserError;
use super::style::{
    container_css, indicator_css, panel_css, progress_css, Declaration, ACTIVE_CLASS,
    INJECTED_CLASSES, LEFT_ARROW_CLASS, PROGRESS_CLASS, RIGHT_ARROW_CLASS, SLIDER_CLASS,
};
use carousel_core::{ContainerSize, IndicatorStyle, PanelId, PanelStyle, Surface};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

fn dom_err(context: &str) -> impl Fn(wasm_bindgen::JsValue) -> BrowserError + '_ {
    move |err| BrowserError::Dom(format!("{context}: {err:?}"))
}

fn apply(element: &HtmlElement, declarations: &[Declaration]) {
    let style = element.style();
    for (property, value) in declarations {
        if style.set_property(property, value).is_err() {
            log::warn!("could not set {property}: {value}");
        }
    }
}

/// The container, its panels, and the spans injected into it.
pub struct DomSurface {
    document: Document,
    container: HtmlElement,
    panels: Vec<HtmlElement>,
    left_arrow: Option<HtmlElement>,
    right_arrow: Option<HtmlElement>,
    progress_bar: Option<HtmlElement>,
    glyphs: Vec<HtmlElement>,
}

impl DomSurface {
    /// Take over `container`: mark it, collect its `div` children as
    /// panels, and drop spans left by an earlier initialization.
    pub fn attach(document: Document, container: HtmlElement) -> Result<Self, BrowserError> {
        container
            .class_list()
            .add_1(SLIDER_CLASS)
            .map_err(dom_err("classList.add"))?;

        let children = container.children();
        let mut panels = Vec::new();
        let mut stale = Vec::new();
        for index in 0..children.length() {
            let Some(child) = children.item(index) else {
                continue;
            };
            if child.tag_name().eq_ignore_ascii_case("div") {
                if let Ok(panel) = child.dyn_into::<HtmlElement>() {
                    panels.push(panel);
                }
            } else if INJECTED_CLASSES
                .iter()
                .any(|class| child.class_list().contains(class))
            {
                stale.push(child);
            }
        }
        for child in stale {
            child.remove();
        }

        Ok(Self {
            document,
            container,
            panels,
            left_arrow: None,
            right_arrow: None,
            progress_bar: None,
            glyphs: Vec::new(),
        })
    }

    /// Number of panels found.
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Panel elements, in ring order.
    pub fn panels(&self) -> &[HtmlElement] {
        &self.panels
    }

    /// Current container width in pixels.
    pub fn container_width(&self) -> f64 {
        f64::from(self.container.client_width())
    }

    /// Inject the navigation arrows.
    pub fn add_nav(&mut self) -> Result<(HtmlElement, HtmlElement), BrowserError> {
        let left = self.inject(LEFT_ARROW_CLASS)?;
        let right = self.inject(RIGHT_ARROW_CLASS)?;
        self.left_arrow = Some(left.clone());
        self.right_arrow = Some(right.clone());
        Ok((left, right))
    }

    /// Inject the progress bar.
    pub fn add_progress_bar(&mut self) -> Result<(), BrowserError> {
        let bar = self.inject(PROGRESS_CLASS)?;
        self.progress_bar = Some(bar);
        Ok(())
    }

    /// Remove every injected span.
    pub fn detach(&mut self) {
        let injected = [
            self.left_arrow.take(),
            self.right_arrow.take(),
            self.progress_bar.take(),
        ];
        for element in injected.into_iter().flatten() {
            element.remove();
        }
        for glyph in self.glyphs.drain(..) {
            glyph.remove();
        }
    }

    fn inject(&self, class: &str) -> Result<HtmlElement, BrowserError> {
        let span = self
            .document
            .create_element("span")
            .map_err(dom_err("createElement"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BrowserError::Dom("span is not an HtmlElement".into()))?;
        span.set_class_name(class);
        self.container
            .append_child(&span)
            .map_err(dom_err("appendChild"))?;
        Ok(span)
    }

    fn set_active_class(element: &Element, active: bool) {
        let classes = element.class_list();
        let result = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        if result.is_err() {
            log::warn!("could not toggle {ACTIVE_CLASS}");
        }
    }
}

impl Surface for DomSurface {
    fn panel(&mut self, id: PanelId, style: &PanelStyle) {
        let Some(element) = self.panels.get(id.index()) else {
            return;
        };
        apply(element, &panel_css(style));
        Self::set_active_class(element, style.marked_active());
    }

    fn container(&mut self, size: &ContainerSize) {
        apply(&self.container, &container_css(size));
    }

    fn progress(&mut self, fill: f64) {
        if let Some(bar) = &self.progress_bar {
            apply(bar, &progress_css(fill));
        }
    }

    fn indicators(&mut self, indicators: &[IndicatorStyle]) {
        while self.glyphs.len() > indicators.len() {
            self.glyphs.remove(0).remove();
        }
        while self.glyphs.len() < indicators.len() {
            match self.inject("") {
                Ok(span) => self.glyphs.push(span),
                Err(err) => {
                    log::warn!("{err}");
                    return;
                }
            }
        }
        for (span, indicator) in self.glyphs.iter().zip(indicators) {
            span.set_class_name(indicator.glyph.class_name());
            apply(span, &indicator_css(indicator));
        }
    }
}
