//! Browser binding for the carousel.
//!
//! The `wasm32` modules attach a [`carousel_core::SlideController`] to a
//! page: they inject the arrows and progress bar, wire click and resize
//! listeners, drive frames from a timer, and paint onto element styles.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;

// Cross-platform modules
pub mod error;
pub mod logger;
pub mod style;
pub mod teardown;

#[cfg(target_arch = "wasm32")]
pub use app::{create_slider, Slider};
#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
pub use error::BrowserError;
pub use logger::ConsoleLogger;
pub use teardown::Teardown;
