//! Slider configuration.
//!
//! User overrides arrive as [`SliderOptions`] (every field optional, usually
//! parsed from JSON) and are merged onto the documented defaults by
//! [`Configuration::from_options`]. The resulting [`Configuration`] is never
//! mutated after the controller is built.

use crate::error::{Result, SliderError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default autoplay interval.
pub const DEFAULT_SPEED_MS: u64 = 7000;

/// Share of the container width used as its height in responsive mode.
pub const RESPONSIVE_HEIGHT_RATIO: f64 = 0.30;

/// Which transition effect the slider uses.
///
/// Parsed leniently: unknown names fall back to [`AnimationType::Fade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnimationType {
    /// Cross-fade between panels.
    #[default]
    Fade,
    /// Swap panels instantly.
    NoEffect,
    /// Slide along the horizontal axis.
    SlideHorizontal,
    /// Slide along the vertical axis.
    SlideVertical,
    /// Pick fade or one of the slides for each transition.
    Random,
}

impl AnimationType {
    /// Canonical option name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::NoEffect => "no-effect",
            Self::SlideHorizontal => "slideH",
            Self::SlideVertical => "slideV",
            Self::Random => "random",
        }
    }
}

impl From<&str> for AnimationType {
    fn from(name: &str) -> Self {
        match name {
            "no-effect" => Self::NoEffect,
            "slideH" | "slideHorizontal" => Self::SlideHorizontal,
            "slideV" | "slideVertical" => Self::SlideVertical,
            "random" => Self::Random,
            _ => Self::Fade,
        }
    }
}

impl From<String> for AnimationType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<AnimationType> for String {
    fn from(ty: AnimationType) -> Self {
        ty.as_str().to_string()
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CSS length given either as text (`"100%"`, `"300px"`) or as pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Raw CSS length.
    Text(String),
    /// Pixel count.
    Pixels(f64),
}

impl Dimension {
    /// CSS representation, `None` for empty text.
    #[must_use]
    pub fn to_css(&self) -> Option<String> {
        match self {
            Self::Text(text) if text.trim().is_empty() => None,
            Self::Text(text) => Some(text.trim().to_string()),
            Self::Pixels(px) => Some(format!("{px}px")),
        }
    }
}

/// The `fixedSize` option: `false`, or an object with width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixedSizeOption {
    /// `true`/`false`. `true` carries no dimensions and resolves to none.
    Toggle(bool),
    /// Explicit dimensions, either of which may be missing.
    Size {
        /// Container width
        #[serde(default)]
        width: Option<Dimension>,
        /// Container height
        #[serde(default)]
        height: Option<Dimension>,
    },
}

/// Resolved fixed container size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedSize {
    /// CSS width
    pub width: String,
    /// CSS height
    pub height: String,
}

impl FixedSizeOption {
    /// Resolve to a size only when both dimensions are present.
    #[must_use]
    pub fn resolve(&self) -> Option<FixedSize> {
        match self {
            Self::Toggle(_) => None,
            Self::Size { width, height } => {
                let width = width.as_ref().and_then(Dimension::to_css)?;
                let height = height.as_ref().and_then(Dimension::to_css)?;
                Some(FixedSize { width, height })
            }
        }
    }
}

/// User-supplied overrides. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderOptions {
    /// Transition effect
    pub animation_type: Option<AnimationType>,
    /// Advance automatically
    pub autoslide: Option<bool>,
    /// Fixed container size
    pub fixed_size: Option<FixedSizeOption>,
    /// Show navigation arrows
    pub nav: Option<bool>,
    /// Show the autoplay progress bar
    pub progress_bar: Option<bool>,
    /// Derive height from width
    pub responsive: Option<bool>,
    /// Autoplay interval in milliseconds
    pub speed: Option<u64>,
    /// Seed for the random effect picker
    pub seed: Option<u64>,
}

impl SliderOptions {
    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

/// Fully resolved slider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Transition effect
    pub animation_type: AnimationType,
    /// Advance automatically
    pub autoslide: bool,
    /// Fixed container size, if any
    pub fixed_size: Option<FixedSize>,
    /// Show navigation arrows
    pub nav: bool,
    /// Show the autoplay progress bar
    pub progress_bar: bool,
    /// Derive height from width
    pub responsive: bool,
    /// Autoplay interval
    pub speed: Duration,
    /// Seed for the random effect picker
    pub seed: Option<u64>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            animation_type: AnimationType::Fade,
            autoslide: true,
            fixed_size: None,
            nav: true,
            progress_bar: true,
            responsive: true,
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            seed: None,
        }
    }
}

impl Configuration {
    /// Merge overrides onto the defaults.
    #[must_use]
    pub fn from_options(options: &SliderOptions) -> Self {
        let defaults = Self::default();
        Self {
            animation_type: options.animation_type.unwrap_or(defaults.animation_type),
            autoslide: options.autoslide.unwrap_or(defaults.autoslide),
            fixed_size: options
                .fixed_size
                .as_ref()
                .and_then(FixedSizeOption::resolve),
            nav: options.nav.unwrap_or(defaults.nav),
            progress_bar: options.progress_bar.unwrap_or(defaults.progress_bar),
            responsive: options.responsive.unwrap_or(defaults.responsive),
            speed: options
                .speed
                .map_or(defaults.speed, Duration::from_millis),
            seed: options.seed,
        }
    }

    /// Parse and merge overrides from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        SliderOptions::from_json(json).map(|options| Self::from_options(&options))
    }

    /// Reject settings the controller cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.speed.is_zero() {
            return Err(SliderError::InvalidSpeed);
        }
        Ok(())
    }

    /// Height applied to the container for a given width, if managed.
    #[must_use]
    pub fn responsive_height(&self, width: f64) -> Option<f64> {
        (self.fixed_size.is_none() && self.responsive).then(|| width * RESPONSIVE_HEIGHT_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Defaults and merging
    // =========================================================================

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(config.animation_type, AnimationType::Fade);
        assert!(config.autoslide);
        assert!(config.fixed_size.is_none());
        assert!(config.nav);
        assert!(config.progress_bar);
        assert!(config.responsive);
        assert_eq!(config.speed, Duration::from_millis(7000));
    }

    #[test]
    fn test_empty_options_resolve_to_defaults() {
        let config = Configuration::from_options(&SliderOptions::default());
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let options = SliderOptions {
            autoslide: Some(false),
            speed: Some(1500),
            ..SliderOptions::default()
        };
        let config = Configuration::from_options(&options);
        assert!(!config.autoslide);
        assert_eq!(config.speed, Duration::from_millis(1500));
        assert!(config.nav);
        assert!(config.progress_bar);
    }

    #[test]
    fn test_from_json_camel_case_keys() {
        let config = Configuration::from_json(
            r#"{"animationType": "slideV", "progressBar": false, "speed": 900}"#,
        )
        .unwrap();
        assert_eq!(config.animation_type, AnimationType::SlideVertical);
        assert!(!config.progress_bar);
        assert_eq!(config.speed, Duration::from_millis(900));
    }

    #[test]
    fn test_from_json_ignores_unknown_keys() {
        let config = Configuration::from_json(r#"{"colour": "red", "nav": false}"#).unwrap();
        assert!(!config.nav);
    }

    #[test]
    fn test_from_json_blank_is_default() {
        assert_eq!(Configuration::from_json("  ").unwrap(), Configuration::default());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Configuration::from_json("{nav: }").unwrap_err();
        assert!(matches!(err, SliderError::InvalidOptions(_)));
    }

    // =========================================================================
    // Animation type parsing
    // =========================================================================

    #[test]
    fn test_animation_type_names() {
        assert_eq!(AnimationType::from("fade"), AnimationType::Fade);
        assert_eq!(AnimationType::from("no-effect"), AnimationType::NoEffect);
        assert_eq!(AnimationType::from("slideH"), AnimationType::SlideHorizontal);
        assert_eq!(
            AnimationType::from("slideHorizontal"),
            AnimationType::SlideHorizontal
        );
        assert_eq!(AnimationType::from("slideV"), AnimationType::SlideVertical);
        assert_eq!(AnimationType::from("random"), AnimationType::Random);
    }

    #[test]
    fn test_unknown_animation_type_falls_back_to_fade() {
        assert_eq!(AnimationType::from("spin"), AnimationType::Fade);
        let config = Configuration::from_json(r#"{"animationType": "zoom"}"#).unwrap();
        assert_eq!(config.animation_type, AnimationType::Fade);
    }

    #[test]
    fn test_animation_type_serializes_canonical_name() {
        let json = serde_json::to_string(&AnimationType::SlideHorizontal).unwrap();
        assert_eq!(json, r#""slideH""#);
    }

    // =========================================================================
    // Fixed size
    // =========================================================================

    #[test]
    fn test_fixed_size_false() {
        let config = Configuration::from_json(r#"{"fixedSize": false}"#).unwrap();
        assert!(config.fixed_size.is_none());
    }

    #[test]
    fn test_fixed_size_complete() {
        let config =
            Configuration::from_json(r#"{"fixedSize": {"width": "100%", "height": "300px"}}"#)
                .unwrap();
        assert_eq!(
            config.fixed_size,
            Some(FixedSize {
                width: "100%".to_string(),
                height: "300px".to_string(),
            })
        );
    }

    #[test]
    fn test_fixed_size_pixels() {
        let config =
            Configuration::from_json(r#"{"fixedSize": {"width": 800, "height": 240.5}}"#).unwrap();
        let size = config.fixed_size.unwrap();
        assert_eq!(size.width, "800px");
        assert_eq!(size.height, "240.5px");
    }

    #[test]
    fn test_fixed_size_missing_dimension_falls_back() {
        let config = Configuration::from_json(r#"{"fixedSize": {"width": "100%"}}"#).unwrap();
        assert!(config.fixed_size.is_none());

        let config = Configuration::from_json(r#"{"fixedSize": true}"#).unwrap();
        assert!(config.fixed_size.is_none());

        let config =
            Configuration::from_json(r#"{"fixedSize": {"width": "", "height": "20px"}}"#).unwrap();
        assert!(config.fixed_size.is_none());
    }

    // =========================================================================
    // Validation and sizing
    // =========================================================================

    #[test]
    fn test_validate_rejects_zero_speed() {
        let config = Configuration::from_json(r#"{"speed": 0}"#).unwrap();
        assert!(matches!(config.validate(), Err(SliderError::InvalidSpeed)));
        assert!(Configuration::default().validate().is_ok());
    }

    #[test]
    fn test_negative_speed_is_a_parse_error() {
        assert!(Configuration::from_json(r#"{"speed": -5}"#).is_err());
    }

    #[test]
    fn test_responsive_height() {
        let config = Configuration::default();
        assert_eq!(config.responsive_height(1000.0), Some(300.0));

        let config = Configuration {
            responsive: false,
            ..Configuration::default()
        };
        assert_eq!(config.responsive_height(1000.0), None);
    }

    #[test]
    fn test_fixed_size_disables_responsive_height() {
        let config =
            Configuration::from_json(r#"{"fixedSize": {"width": "50%", "height": "10em"}}"#)
                .unwrap();
        assert_eq!(config.responsive_height(1000.0), None);
    }
}
