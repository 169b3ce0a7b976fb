//! End-to-end slider scenarios driven through the test harness.
//!
//! Every scenario clicks and waits the way a visitor would, then checks the
//! painted result rather than the controller internals where it can.

use carousel::{ContainerSize, Direction, Glyph, PanelId, SliderError};
use carousel_test::Harness;

// ============================================================================
// Navigation
// ============================================================================

mod navigation {
    use super::*;

    #[test]
    fn test_fade_three_panels_full_cycle() {
        let mut harness = Harness::build(3, r#"{"animationType": "fade", "speed": 1000}"#).unwrap();
        harness.assert_active(0).assert_single_active();

        harness.click_next().settle();
        harness.assert_active(1).assert_single_active().assert_pending(1);

        harness.click_next().settle();
        harness.click_next().settle();
        harness.assert_active(0).assert_single_active();
    }

    #[test]
    fn test_previous_wraps_backward() {
        let mut harness = Harness::build(4, r#"{"animationType": "slideV"}"#).unwrap();
        harness.click_previous().settle();
        harness.assert_active(3).assert_single_active();
        harness.click_previous().settle();
        harness.assert_active(2).assert_single_active();
    }

    #[test]
    fn test_slide_direction_is_painted() {
        let mut harness = Harness::build(3, r#"{"animationType": "slideH"}"#).unwrap();
        harness.click_next().tick(200);
        let outgoing = harness.surface().panel_style(PanelId(0)).unwrap();
        let incoming = harness.surface().panel_style(PanelId(1)).unwrap();
        assert!(outgoing.offset_x < 0.0);
        assert!(incoming.offset_x > 0.0);

        harness.settle().click_previous().tick(200);
        let incoming = harness.surface().panel_style(PanelId(0)).unwrap();
        assert!(incoming.offset_x < 0.0);
    }

    #[test]
    fn test_rapid_clicks_show_at_most_two_panels() {
        let mut harness = Harness::build(5, r#"{"animationType": "fade"}"#).unwrap();
        for _ in 0..12 {
            harness.click_next().tick(40);
            assert!(harness.surface().visible().len() <= 2);
            assert!(harness.surface().marked_active().len() <= 1);
        }
        harness.settle().assert_active(2).assert_single_active();
    }

    #[test]
    fn test_arrows_ignored_without_nav() {
        let mut harness = Harness::build(3, r#"{"nav": false}"#).unwrap();
        harness.click_next().click_previous();
        harness.assert_active(0);
        assert!(harness.slider().is_settled());

        harness.slider_mut().navigate(Direction::Forward);
        harness.settle().assert_active(1);
    }

    #[test]
    fn test_random_effect_hundred_advances() {
        let mut harness = Harness::build(4, r#"{"animationType": "random", "seed": 99}"#).unwrap();
        for _ in 0..100 {
            harness.click_next().settle();
            harness.assert_single_active();
        }
        harness.assert_active(0);
    }
}

// ============================================================================
// Autoplay
// ============================================================================

mod autoplay {
    use super::*;

    #[test]
    fn test_advances_once_per_interval() {
        let mut harness = Harness::build(3, r#"{"animationType": "slideH", "speed": 500}"#).unwrap();
        harness.tick(499).assert_active(0);
        harness.tick(1).assert_active(1).assert_pending(1);
        harness.settle().assert_single_active();
        assert_eq!(harness.elapsed().as_millis(), 900);

        harness.tick(99).assert_active(1);
        harness.tick(1).assert_active(2);
    }

    #[test]
    fn test_manual_click_restarts_interval() {
        let mut harness = Harness::build(3, r#"{"speed": 1000}"#).unwrap();
        harness.tick(800).click_next().assert_pending(1);
        harness.tick(999).assert_active(1);
        harness.tick(1).assert_active(2).assert_pending(1);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut harness = Harness::build(3, r#"{"speed": 500}"#).unwrap();
        harness.tick(250).click_body();
        harness.assert_paused(true).assert_pending(0);
        assert_eq!(harness.surface().last_progress(), Some(0.0));

        harness.tick(5000).assert_active(0);

        harness.click_body().assert_paused(false).assert_pending(1);
        harness.tick(499).assert_active(0);
        harness.tick(1).assert_active(1);
    }

    #[test]
    fn test_click_body_without_autoslide_does_nothing() {
        let mut harness = Harness::build(3, r#"{"autoslide": false}"#).unwrap();
        harness.click_body().assert_paused(false).assert_pending(0);
        assert!(harness.surface().last_indicators().is_empty());
        harness.tick(20_000).assert_active(0);
    }

    #[test]
    fn test_glyphs_fade_in_and_out() {
        let mut harness = Harness::build(2, "").unwrap();
        harness.click_body().tick(600);
        let glyphs = harness.surface().last_indicators();
        assert_eq!(glyphs.len(), 1);
        assert_eq!(glyphs[0].glyph, Glyph::Pause);
        assert!((glyphs[0].opacity - 1.0).abs() < 1e-9);

        harness.click_body();
        assert_eq!(harness.surface().last_indicators().len(), 2);

        harness.tick(600);
        let glyphs = harness.surface().last_indicators();
        assert_eq!(glyphs.len(), 1);
        assert_eq!(glyphs[0].glyph, Glyph::Play);

        harness.tick(600);
        assert!(harness.surface().last_indicators().is_empty());
    }

    #[test]
    fn test_progress_bar_fills_and_empties() {
        let mut harness = Harness::build(3, r#"{"speed": 1000}"#).unwrap();
        harness.tick(500);
        let fill = harness.surface().last_progress().unwrap();
        assert!((fill - 0.5).abs() < 1e-9);

        harness.tick(500);
        assert_eq!(harness.surface().last_progress(), Some(0.0));
        harness.tick(100);
        assert!(harness.surface().last_progress().unwrap() > 0.0);
    }

    #[test]
    fn test_no_progress_bar() {
        let mut harness = Harness::build(3, r#"{"progressBar": false}"#).unwrap();
        harness.tick(1000);
        assert_eq!(harness.surface().last_progress(), None);
    }
}

// ============================================================================
// Sizing
// ============================================================================

mod sizing {
    use super::*;

    #[test]
    fn test_responsive_height_tracks_width() {
        let mut harness = Harness::build(2, "").unwrap();
        assert_eq!(
            harness.surface().container_size(),
            Some(&ContainerSize::Responsive { height: 384.0 })
        );
        harness.resize(500.0);
        assert_eq!(
            harness.surface().container_size(),
            Some(&ContainerSize::Responsive { height: 150.0 })
        );
    }

    #[test]
    fn test_fixed_size_ignores_resize() {
        let mut harness = Harness::build(
            2,
            r#"{"fixedSize": {"width": "100%", "height": "300px"}}"#,
        )
        .unwrap();
        harness.resize(500.0);
        let Some(ContainerSize::Fixed(size)) = harness.surface().container_size() else {
            panic!("expected a fixed size");
        };
        assert_eq!(size.width, "100%");
        assert_eq!(size.height, "300px");
    }

    #[test]
    fn test_incomplete_fixed_size_falls_back_to_responsive() {
        let harness = Harness::build(2, r#"{"fixedSize": {"width": "100%"}}"#).unwrap();
        assert!(matches!(
            harness.surface().container_size(),
            Some(ContainerSize::Responsive { .. })
        ));
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

mod lifecycle {
    use super::*;

    #[test]
    fn test_dispose_mid_transition() {
        let mut harness = Harness::build(3, r#"{"speed": 500}"#).unwrap();
        harness.tick(500).tick(100).dispose();
        harness.assert_pending(0).assert_active(1).assert_single_active();

        harness.click_next().tick(5000);
        harness.assert_active(1);
        assert!(harness.slider().is_disposed());
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            Harness::build(0, "").unwrap_err(),
            SliderError::NoPanels
        ));
        assert!(matches!(
            Harness::build(3, r#"{"speed": 0}"#).unwrap_err(),
            SliderError::InvalidSpeed
        ));
        assert!(matches!(
            Harness::build(3, r#"{"speed": "fast"}"#).unwrap_err(),
            SliderError::InvalidOptions(_)
        ));
    }

    #[test]
    fn test_single_panel_never_moves() {
        let mut harness = Harness::build(1, r#"{"speed": 100}"#).unwrap();
        harness.click_next().tick(1000);
        harness.assert_active(0).assert_single_active().assert_pending(1);
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Input {
        Next,
        Previous,
        Body,
        Wait(u64),
    }

    fn input() -> impl Strategy<Value = Input> {
        prop_oneof![
            Just(Input::Next),
            Just(Input::Previous),
            Just(Input::Body),
            (1u64..800).prop_map(Input::Wait),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_painted_state_stays_consistent(
            inputs in prop::collection::vec(input(), 1..30),
            kind in prop::sample::select(vec!["fade", "no-effect", "slideH", "slideV", "random"]),
        ) {
            let options = format!(r#"{{"animationType": "{kind}", "speed": 1500}}"#);
            let mut harness = Harness::build(4, &options).unwrap();
            for input in inputs {
                match input {
                    Input::Next => harness.click_next(),
                    Input::Previous => harness.click_previous(),
                    Input::Body => harness.click_body(),
                    Input::Wait(ms) => harness.tick(ms),
                };
                prop_assert!(harness.surface().visible().len() <= 2);
                prop_assert!(harness.surface().marked_active().len() <= 1);
                prop_assert!(harness.slider().state().autoplay().pending_count() <= 1);
            }
            harness.settle();
            harness.assert_single_active();
        }
    }
}
