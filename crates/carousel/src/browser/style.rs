//! CSS produced for the slider markup.
//!
//! Everything here is plain data so it can be exercised off the browser;
//! the DOM surface only copies the declarations onto elements.

use carousel_core::{ContainerSize, IndicatorStyle, PanelStyle, PAUSE_CLASS, PLAY_CLASS};

/// Marker class on the container.
pub const SLIDER_CLASS: &str = "sSlider";
/// Class on the panel carrying the active marker.
pub const ACTIVE_CLASS: &str = "activeSlide";
/// Left navigation arrow.
pub const LEFT_ARROW_CLASS: &str = "leftSlide";
/// Right navigation arrow.
pub const RIGHT_ARROW_CLASS: &str = "rightSlide";
/// Progress bar.
pub const PROGRESS_CLASS: &str = "prgBar";

/// Every class the binding injects as a child span.
pub const INJECTED_CLASSES: [&str; 5] = [
    LEFT_ARROW_CLASS,
    RIGHT_ARROW_CLASS,
    PROGRESS_CLASS,
    PAUSE_CLASS,
    PLAY_CLASS,
];

/// A CSS property and its value.
pub type Declaration = (&'static str, String);

/// Format a number the way CSS expects, without a trailing `.0`.
fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

/// Declarations for one panel.
pub fn panel_css(style: &PanelStyle) -> Vec<Declaration> {
    vec![
        (
            "display",
            if style.visible { "block" } else { "none" }.to_string(),
        ),
        ("opacity", number(style.opacity)),
        ("left", percent(style.offset_x)),
        ("top", percent(style.offset_y)),
    ]
}

/// Declarations for the container. Empty when sizing is left to the page.
pub fn container_css(size: &ContainerSize) -> Vec<Declaration> {
    match size {
        ContainerSize::Fixed(fixed) => vec![
            ("width", fixed.width.clone()),
            ("height", fixed.height.clone()),
        ],
        ContainerSize::Responsive { height } => vec![("height", format!("{}px", number(*height)))],
        ContainerSize::Natural => Vec::new(),
    }
}

/// Declarations for the progress bar.
pub fn progress_css(fill: f64) -> Vec<Declaration> {
    vec![("width", percent(fill.clamp(0.0, 1.0) * 100.0))]
}

/// Declarations for a play/pause glyph.
pub fn indicator_css(indicator: &IndicatorStyle) -> Vec<Declaration> {
    vec![
        ("display", "block".to_string()),
        ("opacity", number(indicator.opacity)),
    ]
}
