//! Transition engine: the visual handoff between two panels.

use crate::config::AnimationType;
use crate::panel::{Panel, PanelId, PanelPhase, Property, Settle};
use crate::ring::Direction;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Duration;

/// Outgoing fade duration.
pub const FADE_OUT: Duration = Duration::from_millis(500);
/// Incoming fade duration.
pub const FADE_IN: Duration = Duration::from_millis(300);
/// Horizontal slide duration for both panels.
pub const SLIDE_HORIZONTAL: Duration = Duration::from_millis(400);
/// Vertical slide duration for both panels.
pub const SLIDE_VERTICAL: Duration = Duration::from_millis(500);

/// Offset, in percent, of a panel fully outside the container.
const OFFSCREEN: f64 = 100.0;

/// A concrete transition strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Outgoing fades out while incoming fades in.
    Fade,
    /// Instant swap.
    NoEffect,
    /// Both panels slide along the horizontal axis.
    SlideHorizontal,
    /// Both panels slide along the vertical axis.
    SlideVertical,
}

impl Effect {
    /// Effects `random` chooses from. Instant swaps are not part of it.
    pub const RANDOM_POOL: [Self; 3] = [Self::Fade, Self::SlideHorizontal, Self::SlideVertical];

    /// Start animating `outgoing` out and `incoming` in.
    ///
    /// Both panels must already have had their previous animations stopped.
    /// Phases are set to `Leaving`/`Entering`; the caller flags the incoming
    /// panel active once both have settled.
    pub fn apply(self, outgoing: &mut Panel, incoming: &mut Panel, direction: Direction) {
        outgoing.set_phase(PanelPhase::Leaving);
        incoming.set_phase(PanelPhase::Entering);
        match self {
            Self::Fade => {
                outgoing.fade_out(FADE_OUT);
                incoming.fade_in(FADE_IN);
            }
            Self::NoEffect => {
                outgoing.hide();
                incoming.set(Property::Opacity, 1.0);
                incoming.show();
            }
            Self::SlideHorizontal => {
                slide(outgoing, incoming, direction, Property::OffsetX, SLIDE_HORIZONTAL);
            }
            Self::SlideVertical => {
                slide(outgoing, incoming, direction, Property::OffsetY, SLIDE_VERTICAL);
            }
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fade => "fade",
            Self::NoEffect => "no-effect",
            Self::SlideHorizontal => "slideH",
            Self::SlideVertical => "slideV",
        };
        f.write_str(name)
    }
}

fn slide(
    outgoing: &mut Panel,
    incoming: &mut Panel,
    direction: Direction,
    axis: Property,
    duration: Duration,
) {
    let sign = f64::from(direction.sign());
    outgoing.animate(axis, -sign * OFFSCREEN, duration, Settle::Hide);

    incoming.set(axis, sign * OFFSCREEN);
    incoming.set(Property::Opacity, 1.0);
    incoming.show();
    incoming.animate(axis, 0.0, duration, Settle::Keep);
}

/// Resolves the configured animation type to an effect per transition.
#[derive(Debug, Clone)]
pub struct EffectPicker {
    rng: SmallRng,
}

impl EffectPicker {
    /// Create a picker with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Effect for the next transition. `Random` draws uniformly and
    /// independently each call.
    pub fn pick(&mut self, animation_type: AnimationType) -> Effect {
        match animation_type {
            AnimationType::Fade => Effect::Fade,
            AnimationType::NoEffect => Effect::NoEffect,
            AnimationType::SlideHorizontal => Effect::SlideHorizontal,
            AnimationType::SlideVertical => Effect::SlideVertical,
            AnimationType::Random => {
                Effect::RANDOM_POOL[self.rng.random_range(0..Effect::RANDOM_POOL.len())]
            }
        }
    }
}

/// Record of the handoff currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Panel animating out
    pub outgoing: PanelId,
    /// Panel animating in
    pub incoming: PanelId,
    /// Strategy playing
    pub effect: Effect,
    /// Navigation direction
    pub direction: Direction,
}

impl Transition {
    /// Whether both panels' animations have finished.
    #[must_use]
    pub fn is_settled(&self, outgoing: &Panel, incoming: &Panel) -> bool {
        !outgoing.is_animating() && !incoming.is_animating()
    }
}
