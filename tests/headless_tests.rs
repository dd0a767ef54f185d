//! Integration tests for headless match execution
//!
//! These tests verify that:
//! - Headless configs parse and reject unknown hands
//! - The simulated player drives a controller to a finished match
//! - A headless app runs to completion and exposes its summary
//! - Seeded RNG produces deterministic results

use std::time::Duration;

use beat_the_hand::headless::runner::HeadlessMatchState;
use beat_the_hand::headless::{
    build_headless_app, AutoPlayer, HeadlessMatchConfig, HeadlessPlan, MatchSummary,
    PlayerStrategy, Winner,
};
use beat_the_hand::states::{Choice, MatchController, MatchState, ScriptedChoices};
use beat_the_hand::ConfigError;

/// Helper to create a basic match config. An empty `player` list means a
/// random player.
fn create_config(player: Vec<&str>, computer: Vec<&str>, seed: Option<u64>) -> HeadlessMatchConfig {
    let player_strategy = if player.is_empty() {
        PlayerStrategy::default()
    } else {
        PlayerStrategy::Moves(player.into_iter().map(String::from).collect())
    };
    HeadlessMatchConfig {
        player_strategy,
        computer_moves: computer.into_iter().map(String::from).collect(),
        random_seed: seed,
        max_rounds: 200,
        output_path: None,
    }
}

/// Update the app until the headless summary appears
fn run_to_summary(plan: HeadlessPlan) -> MatchSummary {
    let mut app = build_headless_app(plan);
    app.finish();
    app.cleanup();

    for _ in 0..20_000 {
        app.update();
        if let Some(summary) = app.world().resource::<HeadlessMatchState>().summary.clone() {
            return summary;
        }
    }
    panic!("headless match did not finish");
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_parses_with_defaults() {
    let config: HeadlessMatchConfig =
        serde_json::from_str(r#"{ "player_strategy": ["rock", "Paper"] }"#).unwrap();

    assert_eq!(
        config.player_strategy,
        PlayerStrategy::Moves(vec!["rock".to_string(), "Paper".to_string()])
    );
    assert!(config.computer_moves.is_empty());
    assert_eq!(config.max_rounds, 200);
    assert!(config.random_seed.is_none());

    let plan = config.to_plan().unwrap();
    assert_eq!(plan.player_moves, vec![Choice::Rock, Choice::Paper]);
}

#[test]
fn test_random_player_strategy() {
    let config: HeadlessMatchConfig =
        serde_json::from_str(r#"{ "player_strategy": "Random", "random_seed": 9 }"#).unwrap();
    let plan = config.to_plan().unwrap();
    assert!(plan.player_moves.is_empty(), "Random means no fixed hands");
    assert_eq!(plan.random_seed, Some(9));

    let empty: HeadlessMatchConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.player_strategy, PlayerStrategy::default());
    assert!(empty.to_plan().unwrap().player_moves.is_empty());
}

#[test]
fn test_unknown_strategy_name_is_rejected() {
    let config: HeadlessMatchConfig =
        serde_json::from_str(r#"{ "player_strategy": "Copycat" }"#).unwrap();
    assert!(matches!(
        config.to_plan(),
        Err(ConfigError::Validation { .. })
    ));

    let config: HeadlessMatchConfig =
        serde_json::from_str(r#"{ "player_strategy": [] }"#).unwrap();
    assert!(
        config.validate().is_err(),
        "an empty hand list is not a strategy"
    );
}

#[test]
fn test_unknown_config_field_is_rejected() {
    let result: Result<HeadlessMatchConfig, _> =
        serde_json::from_str(r#"{ "player_moves": ["Rock"] }"#);
    assert!(result.is_err(), "misspelled fields must not be silently dropped");

    let path = std::env::temp_dir().join("beat_the_hand_unknown_field_config.json");
    std::fs::write(&path, r#"{ "player_strategy": ["Rock"], "rounds": 3 }"#).unwrap();
    let loaded = HeadlessMatchConfig::load_from_file(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(loaded, Err(ConfigError::Json { .. })));
}

#[test]
fn test_config_rejects_unknown_hand() {
    let config = create_config(vec!["Rock", "Lizard"], vec![], None);
    match config.to_plan() {
        Err(ConfigError::Validation { message }) => {
            assert!(message.contains("Lizard"), "message should name the bad hand: {}", message)
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_config_rejects_zero_round_cap() {
    let mut config = create_config(vec![], vec![], None);
    config.max_rounds = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Validation { .. })
    ));
}

#[test]
fn test_missing_config_file_is_read_error() {
    let path = std::env::temp_dir().join("beat_the_hand_missing_config.json");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(
        HeadlessMatchConfig::load_from_file(&path),
        Err(ConfigError::Read { .. })
    ));
}

#[test]
fn test_malformed_config_file_is_json_error() {
    let path = std::env::temp_dir().join("beat_the_hand_malformed_config.json");
    std::fs::write(&path, "{ player_strategy: ").unwrap();
    let result = HeadlessMatchConfig::load_from_file(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(ConfigError::Json { .. })));
}

// =============================================================================
// Simulated Player Tests
// =============================================================================

#[test]
fn test_auto_player_wins_scripted_match() {
    let mut controller =
        MatchController::new(Box::new(ScriptedChoices::new([Choice::Scissors])));
    let mut player = AutoPlayer::new(vec![Choice::Rock], None);

    for _ in 0..2_000 {
        if let Some(intent) = player.next_intent(&controller) {
            controller.apply(intent);
        }
        controller.tick(Duration::from_millis(16));
        if controller.state().is_match_over() {
            break;
        }
    }

    assert_eq!(controller.state(), MatchState::Victory);
    let summary = MatchSummary::from_controller(&controller, None);
    assert_eq!(summary.winner, Some(Winner::Player));
    assert_eq!(summary.rounds_played, 5);
    assert_eq!(summary.rounds.len(), 5);
    assert!(summary.match_time_secs >= 5.0, "each round waits a full second");
}

#[test]
fn test_auto_player_waits_during_reveal() {
    let mut controller = MatchController::new(Box::new(ScriptedChoices::new([Choice::Rock])));
    let mut player = AutoPlayer::new(vec![Choice::Paper], None);

    let start = player.next_intent(&controller).unwrap();
    controller.apply(start);
    let choose = player.next_intent(&controller).unwrap();
    controller.apply(choose);

    assert!(controller.is_choice_pending());
    assert!(player.next_intent(&controller).is_none());
}

// =============================================================================
// Headless App Tests
// =============================================================================

#[test]
fn test_headless_app_runs_scripted_match_to_victory() {
    let plan = create_config(vec!["Rock"], vec!["Scissors"], Some(1))
        .to_plan()
        .unwrap();
    let summary = run_to_summary(plan);

    assert_eq!(summary.winner, Some(Winner::Player));
    assert_eq!(summary.score.player, 5);
    assert_eq!(summary.score.computer, 0);
    assert_eq!(summary.random_seed, Some(1));
}

#[test]
fn test_headless_app_stops_at_round_cap() {
    let mut config = create_config(vec!["Paper"], vec!["Paper"], None);
    config.max_rounds = 3;
    let summary = run_to_summary(config.to_plan().unwrap());

    assert_eq!(summary.winner, None);
    assert_eq!(summary.rounds_played, 3);
    assert_eq!(summary.score.draws, 3);
}

#[test]
fn test_seeded_matches_are_deterministic() {
    let plan = create_config(vec![], vec![], Some(42)).to_plan().unwrap();
    let first = run_to_summary(plan.clone());
    let second = run_to_summary(plan);

    assert!(first.winner.is_some());
    assert_eq!(first.winner, second.winner);
    assert_eq!(first.score, second.score);
    assert_eq!(first.rounds, second.rounds);
}

#[test]
fn test_summary_saves_as_json() {
    let plan = create_config(vec!["Scissors"], vec!["Rock"], None)
        .to_plan()
        .unwrap();
    let summary = run_to_summary(plan);
    assert_eq!(summary.winner, Some(Winner::Computer));

    let path = std::env::temp_dir().join("beat_the_hand_summary_test.json");
    summary.save_to(&path).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(written["winner"], "Computer");
    assert_eq!(written["score"]["computer"], 5);
    assert_eq!(written["rounds"].as_array().map(Vec::len), Some(5));
}
