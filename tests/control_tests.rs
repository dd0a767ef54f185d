//! Integration tests for interactive controls
//!
//! These tests verify that:
//! - Hover follows the pointer and respects the enabled flag
//! - Presses only activate the control under the pointer
//! - The hover bounce rises, falls back and settles at rest
//! - Each screen offers exactly its own controls

use bevy::math::Vec2;

use beat_the_hand::states::{Choice, Intent, MatchState};
use beat_the_hand::ui::panel::is_offered;
use beat_the_hand::ui::{Control, ControlPanel, ControlStyle};

fn play_button() -> Control {
    Control::new(
        100.0,
        100.0,
        200.0,
        60.0,
        "Play Game",
        ControlStyle::Go,
        Intent::StartMatch,
    )
}

/// Labels of the controls the panel currently offers
fn visible_labels(panel: &ControlPanel) -> Vec<&'static str> {
    panel.visible().map(|control| control.label()).collect()
}

// =============================================================================
// Single Control Tests
// =============================================================================

#[test]
fn test_hover_tracks_pointer() {
    let mut control = play_button();
    control.handle_pointer_move(Vec2::new(150.0, 120.0));
    assert!(control.is_hovered());

    control.handle_pointer_move(Vec2::new(50.0, 120.0));
    assert!(!control.is_hovered(), "pointer left the bounds");
}

#[test]
fn test_press_inside_returns_intent() {
    let mut control = play_button();
    assert_eq!(
        control.handle_pointer_down(Vec2::new(200.0, 130.0)),
        Some(Intent::StartMatch)
    );
    assert_eq!(control.handle_pointer_down(Vec2::new(400.0, 130.0)), None);
}

#[test]
fn test_disabled_control_never_activates() {
    let mut control = play_button();
    control.handle_pointer_move(Vec2::new(150.0, 120.0));
    control.set_enabled(false);

    assert!(!control.is_hovered(), "disabling clears hover");
    assert_eq!(control.handle_pointer_down(Vec2::new(150.0, 120.0)), None);
}

#[test]
fn test_hover_bounce_rises_then_settles() {
    let mut control = play_button();
    control.handle_pointer_move(Vec2::new(150.0, 120.0));

    control.advance_animation();
    assert_eq!(control.bounce_offset(), -5.0);

    let mut peak = control.bounce_offset();
    let mut settled = false;
    for _ in 0..100 {
        control.advance_animation();
        peak = peak.min(control.bounce_offset());
        if control.bounce_offset() == 0.0 {
            settled = true;
            break;
        }
    }
    assert!(settled, "bounce should return to rest");
    assert!(peak < -5.0, "bounce keeps rising briefly before gravity wins");
}

#[test]
fn test_bounce_snaps_to_rest_when_unhovered() {
    let mut control = play_button();
    control.handle_pointer_move(Vec2::new(150.0, 120.0));
    control.advance_animation();
    control.advance_animation();
    assert!(control.bounce_offset() < 0.0);

    control.clear_hover();
    control.advance_animation();
    assert_eq!(control.bounce_offset(), 0.0);
}

#[test]
fn test_hand_tile_submits_its_choice() {
    let mut tile = Control::hand(0.0, 0.0, 120.0, Choice::Scissors);
    assert_eq!(tile.label(), "Scissors");
    assert_eq!(tile.style(), ControlStyle::Hand(Choice::Scissors));
    assert_eq!(
        tile.handle_pointer_down(Vec2::new(60.0, 60.0)),
        Some(Intent::Choose(Choice::Scissors))
    );
}

// =============================================================================
// Panel Tests
// =============================================================================

#[test]
fn test_menu_offers_play_and_quit() {
    let mut panel = ControlPanel::standard();
    panel.refresh(MatchState::Menu, false);
    assert_eq!(visible_labels(&panel), vec!["Play Game", "Quit"]);

    assert_eq!(
        panel.pointer_pressed(Vec2::new(250.0, 530.0)),
        Some(Intent::StartMatch)
    );
    assert_eq!(panel.pointer_pressed(Vec2::new(500.0, 530.0)), Some(Intent::Quit));
}

#[test]
fn test_playing_offers_hands_until_choice_is_pending() {
    let mut panel = ControlPanel::standard();
    panel.refresh(MatchState::Playing, false);
    assert_eq!(visible_labels(&panel), vec!["Rock", "Paper", "Scissors"]);
    assert_eq!(
        panel.pointer_pressed(Vec2::new(400.0, 460.0)),
        Some(Intent::Choose(Choice::Paper))
    );

    panel.refresh(MatchState::Playing, true);
    assert!(visible_labels(&panel).is_empty());
    assert_eq!(panel.pointer_pressed(Vec2::new(400.0, 460.0)), None);
}

#[test]
fn test_result_and_match_over_screens() {
    let mut panel = ControlPanel::standard();
    panel.refresh(MatchState::RoundResult, false);
    assert_eq!(visible_labels(&panel), vec!["Play Again", "Main Menu"]);
    assert_eq!(
        panel.pointer_pressed(Vec2::new(400.0, 480.0)),
        Some(Intent::NextRound)
    );

    for state in [MatchState::Victory, MatchState::Defeat] {
        panel.refresh(state, false);
        assert_eq!(visible_labels(&panel), vec!["Next Match", "Main Menu"]);
        assert_eq!(
            panel.pointer_pressed(Vec2::new(400.0, 560.0)),
            Some(Intent::ReturnToMenu)
        );
    }
}

#[test]
fn test_pointer_left_clears_all_hover() {
    let mut panel = ControlPanel::standard();
    panel.refresh(MatchState::Menu, false);
    panel.pointer_moved(Vec2::new(250.0, 530.0));
    assert!(panel.visible().any(|control| control.is_hovered()));

    panel.pointer_left();
    assert!(panel.visible().all(|control| !control.is_hovered()));
}

#[test]
fn test_offered_intents_per_state() {
    assert!(is_offered(Intent::StartMatch, MatchState::Menu, false));
    assert!(!is_offered(Intent::StartMatch, MatchState::Playing, false));
    assert!(!is_offered(Intent::Choose(Choice::Rock), MatchState::RoundResult, false));
    assert!(is_offered(Intent::NextMatch, MatchState::Defeat, false));
    assert!(!is_offered(Intent::ReturnToMenu, MatchState::Menu, false));
    assert!(!is_offered(Intent::Quit, MatchState::Victory, false));
}
