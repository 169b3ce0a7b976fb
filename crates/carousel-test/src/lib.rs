#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::missing_const_for_fn)]
//! Testing harness for carousel sliders.
//!
//! Drive a slider frame by frame with simulated clicks and resizes, and
//! assert on what it painted:
//!
//! ```
//! use carousel_test::Harness;
//!
//! let mut harness = Harness::build(3, r#"{"speed": 2000}"#).unwrap();
//! harness.tick(2000).settle();
//! harness.assert_active(1).assert_single_active().assert_pending(1);
//! ```

mod harness;
mod surface;

pub use harness::{Harness, FRAME, SETTLE_LIMIT};
pub use surface::RecordingSurface;
