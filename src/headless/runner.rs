//! Headless match execution
//!
//! Plays a full match without any window, audio or rendering. A simulated
//! player feeds intents into the same controller and systems the graphical
//! game uses, on a manual 60 Hz clock so a match finishes in milliseconds.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

use super::config::{HeadlessMatchConfig, HeadlessPlan};
use crate::error::ConfigError;
use crate::states::match_controller::RoundRecord;
use crate::states::{
    Choice, ChoiceSource, GameRng, Intent, IntentEvent, MatchController, MatchState, MatchSystems,
    Score, ScriptedChoices, TICK_RATE_HZ,
};

/// Who took the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    Player,
    Computer,
}

/// Result of a completed headless match
///
/// This struct provides programmatic access to match results for testing and analysis.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    /// `None` when the round cap was hit first
    pub winner: Option<Winner>,
    pub score: Score,
    pub rounds_played: u32,
    pub rounds: Vec<RoundRecord>,
    /// Simulated seconds from start to finish
    pub match_time_secs: f32,
    /// Random seed used (if deterministic mode)
    pub random_seed: Option<u64>,
}

impl MatchSummary {
    pub fn from_controller(controller: &MatchController, random_seed: Option<u64>) -> Self {
        let winner = match controller.state() {
            MatchState::Victory => Some(Winner::Player),
            MatchState::Defeat => Some(Winner::Computer),
            _ => None,
        };
        let score = controller.score();
        Self {
            winner,
            score,
            rounds_played: score.rounds_played(),
            rounds: controller.history().to_vec(),
            match_time_secs: controller.elapsed().as_secs_f32(),
            random_seed,
        }
    }

    /// Write the summary as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Simulated player: cycles a fixed list of hands, or throws at random
pub struct AutoPlayer {
    moves: Vec<Choice>,
    next: usize,
    rng: GameRng,
}

impl AutoPlayer {
    pub fn new(moves: Vec<Choice>, random_seed: Option<u64>) -> Self {
        // Offset so a seeded player never mirrors a seeded computer
        let seed = random_seed.map(|seed| seed.wrapping_add(1));
        Self {
            moves,
            next: 0,
            rng: GameRng::from_optional_seed(seed),
        }
    }

    fn next_choice(&mut self) -> Choice {
        if self.moves.is_empty() {
            return self.rng.next_choice();
        }
        let choice = self.moves[self.next % self.moves.len()];
        self.next += 1;
        choice
    }

    /// What the player does on the current screen. `None` while waiting for
    /// a reveal and once the match is over.
    pub fn next_intent(&mut self, controller: &MatchController) -> Option<Intent> {
        match controller.state() {
            MatchState::Menu => Some(Intent::StartMatch),
            MatchState::Playing if !controller.is_choice_pending() => {
                Some(Intent::Choose(self.next_choice()))
            }
            MatchState::Playing => None,
            MatchState::RoundResult => Some(Intent::NextRound),
            MatchState::Victory | MatchState::Defeat => None,
        }
    }
}

/// Resource to track headless match state
#[derive(Resource)]
pub struct HeadlessMatchState {
    pub player: AutoPlayer,
    pub max_rounds: u32,
    /// Custom output path for the summary
    pub output_path: Option<String>,
    /// Whether the match has completed
    pub match_complete: bool,
    pub random_seed: Option<u64>,
    /// Populated when the match completes
    pub summary: Option<MatchSummary>,
}

/// Plugin for headless match execution
pub struct HeadlessPlugin {
    pub plan: HeadlessPlan,
}

impl Plugin for HeadlessPlugin {
    fn build(&self, app: &mut App) {
        let plan = &self.plan;
        app.add_plugins(crate::states::StatesPlugin {
            random_seed: plan.random_seed,
        });

        if !plan.computer_moves.is_empty() {
            let script: Box<dyn ChoiceSource> =
                Box::new(ScriptedChoices::new(plan.computer_moves.iter().copied()));
            app.insert_resource(MatchController::new(script));
        }

        app.insert_resource(HeadlessMatchState {
            player: AutoPlayer::new(plan.player_moves.clone(), plan.random_seed),
            max_rounds: plan.max_rounds,
            output_path: plan.output_path.clone(),
            match_complete: false,
            random_seed: plan.random_seed,
            summary: None,
        })
        .add_systems(Update, headless_drive.in_set(MatchSystems::Input))
        .add_systems(Update, headless_check_match_end.after(MatchSystems::Apply))
        .add_systems(PostUpdate, headless_exit_on_complete);
    }
}

/// Feed the simulated player's next intent
fn headless_drive(
    mut headless_state: ResMut<HeadlessMatchState>,
    controller: Res<MatchController>,
    mut intents: EventWriter<IntentEvent>,
) {
    if headless_state.match_complete {
        return;
    }
    if let Some(intent) = headless_state.player.next_intent(&controller) {
        intents.send(IntentEvent(intent));
    }
}

/// Check if the match has ended (five wins, or the round cap)
fn headless_check_match_end(
    controller: Res<MatchController>,
    mut headless_state: ResMut<HeadlessMatchState>,
) {
    if headless_state.match_complete {
        return;
    }

    let finished = controller.state().is_match_over();
    let capped = controller.score().rounds_played() >= headless_state.max_rounds;
    if !finished && !capped {
        return;
    }

    if !finished {
        println!(
            "Match stopped after {} rounds without a winner",
            controller.score().rounds_played()
        );
    }

    let summary = MatchSummary::from_controller(&controller, headless_state.random_seed);
    print_summary(&summary);

    if let Some(path) = headless_state.output_path.as_deref() {
        match summary.save_to(Path::new(path)) {
            Ok(()) => println!("Match complete. Summary saved to: {}", path),
            Err(e) => eprintln!("Failed to save match summary: {}", e),
        }
    }

    headless_state.summary = Some(summary);
    headless_state.match_complete = true;
}

fn print_summary(summary: &MatchSummary) {
    let winner = match summary.winner {
        Some(Winner::Player) => "Player",
        Some(Winner::Computer) => "Computer",
        None => "Nobody",
    };
    println!(
        "Winner: {} ({}-{}, {} draws) after {} rounds",
        winner,
        summary.score.player,
        summary.score.computer,
        summary.score.draws,
        summary.rounds_played
    );
    for record in &summary.rounds {
        println!(
            "  Round {:>3}: {:<8} vs {:<8} {:?}",
            record.round,
            record.player.name(),
            record.computer.name(),
            record.outcome
        );
    }
}

/// Exit the app when the match is complete
fn headless_exit_on_complete(
    headless_state: Res<HeadlessMatchState>,
    mut exit: EventWriter<AppExit>,
) {
    if headless_state.match_complete {
        exit.send(AppExit::Success);
    }
}

/// Build the headless app without running it
pub fn build_headless_app(plan: HeadlessPlan) -> App {
    let mut app = App::new();
    app
        // Minimal plugins - no window, no rendering, no audio
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)))
        // Every frame advances exactly one tick of simulated time
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / TICK_RATE_HZ,
        )))
        .add_plugins(HeadlessPlugin { plan });
    app
}

/// Run a headless match with the given configuration
pub fn run_headless_match(config: HeadlessMatchConfig) -> Result<(), ConfigError> {
    let plan = config.to_plan()?;

    println!("Starting headless match simulation...");
    if plan.player_moves.is_empty() {
        println!("  Player: random");
    } else {
        println!("  Player: {:?}", plan.player_moves);
    }
    if plan.computer_moves.is_empty() {
        println!("  Computer: random");
    } else {
        println!("  Computer: {:?}", plan.computer_moves);
    }
    println!("  Max rounds: {}", plan.max_rounds);

    build_headless_app(plan).run();
    Ok(())
}
