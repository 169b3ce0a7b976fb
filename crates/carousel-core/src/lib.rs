#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
//! Headless core of the carousel widget.
//!
//! This crate holds everything that does not touch a DOM:
//! - The circular panel ring: [`SlideRing`], [`Panel`], [`Direction`]
//! - Autoplay timing with an optional progress bar: [`AutoplayTimer`]
//! - Transition effects and the random picker: [`Effect`], [`EffectPicker`]
//! - The controller tying them to input: [`SlideController`], [`SliderEvent`]
//! - The rendering seam: [`Surface`]
//!
//! Time is never read from a clock. The host drives the controller with
//! [`SlideController::tick`] once per frame and paints it afterwards.

mod animation;
mod autoplay;
mod config;
mod controller;
mod error;
mod event;
mod indicator;
mod panel;
mod ring;
mod surface;
mod transition;

pub use animation::{Keyframe, KeyframeTrack, Tween};
pub use autoplay::{AutoplayTimer, ProgressFill, RepeatingTask};
pub use config::{
    AnimationType, Configuration, Dimension, FixedSize, FixedSizeOption, SliderOptions,
    DEFAULT_SPEED_MS, RESPONSIVE_HEIGHT_RATIO,
};
pub use controller::{SlideController, SliderState, DEFAULT_SEED};
pub use error::{Result, SliderError};
pub use event::SliderEvent;
pub use indicator::{PauseIndicator, INDICATOR_FADE};
pub use panel::{Panel, PanelId, PanelPhase, Property, Settle};
pub use ring::{Direction, SlideRing};
pub use surface::{
    ContainerSize, Glyph, IndicatorStyle, PanelStyle, Surface, PAUSE_CLASS, PLAY_CLASS,
};
pub use transition::{
    Effect, EffectPicker, Transition, FADE_IN, FADE_OUT, SLIDE_HORIZONTAL, SLIDE_VERTICAL,
};
