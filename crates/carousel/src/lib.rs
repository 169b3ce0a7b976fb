//! Carousel: a slideshow widget for the browser.
//!
//! The headless controller lives in `carousel-core` and is re-exported here;
//! the [`browser`] module binds it to the DOM.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { createSlider } from './carousel.js';
//!
//! async function main() {
//!     await init();
//!     const slider = createSlider('#hero', '{"animationType": "slideH", "speed": 5000}');
//!     // later
//!     slider.dispose();
//! }
//! ```
//!
//! The returned handle may be discarded: the slider keeps running until
//! `dispose()` is called on it, and collecting the handle tears nothing
//! down.

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::needless_pass_by_value,
    unreachable_pub
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub use carousel_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{create_slider, Slider};

pub use browser::BrowserError;
