//! Game state management
//!
//! Defines the match states, the events that flow in and out of the
//! [`MatchController`], and the plugin that drives it at a fixed tick rate.

use bevy::prelude::*;

pub mod choice;
pub mod match_controller;

pub use choice::{Choice, ChoiceSource, GameRng, RoundOutcome, ScriptedChoices};
pub use match_controller::{Cue, Intent, MatchController, Score, Verdict};

/// Controller ticks per second
pub const TICK_RATE_HZ: f64 = 60.0;

/// The screens of a match. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchState {
    /// Title screen - start a match or quit
    #[default]
    Menu,
    /// Waiting for the player's hand, or for the computer's to be revealed
    Playing,
    /// A round was decided but nobody has reached five wins
    RoundResult,
    /// The player reached five wins
    Victory,
    /// The computer reached five wins
    Defeat,
}

impl MatchState {
    pub fn is_match_over(&self) -> bool {
        matches!(self, MatchState::Victory | MatchState::Defeat)
    }
}

/// A request from a control or key binding
#[derive(Event, Debug, Clone, Copy)]
pub struct IntentEvent(pub Intent);

/// A fire-once cue for audio/visual feedback
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueEvent(pub Cue);

/// Ordering of the per-frame match systems
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchSystems {
    /// Pointer and keyboard handling that writes [`IntentEvent`]s
    Input,
    /// Applies intents and publishes cues
    Apply,
    /// Rendering and audio
    Present,
}

/// Plugin owning the match controller
pub struct StatesPlugin {
    /// Seed for the computer's hands; entropy when `None`
    pub random_seed: Option<u64>,
}

impl Plugin for StatesPlugin {
    fn build(&self, app: &mut App) {
        let rng = GameRng::from_optional_seed(self.random_seed);
        match rng.seed {
            Some(seed) => info!("Using deterministic RNG with seed: {}", seed),
            None => info!("Using non-deterministic RNG (no seed provided)"),
        }

        app.insert_resource(MatchController::new(Box::new(rng)))
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_event::<IntentEvent>()
            .add_event::<CueEvent>()
            .configure_sets(
                Update,
                (MatchSystems::Input, MatchSystems::Apply, MatchSystems::Present).chain(),
            )
            .add_systems(FixedUpdate, tick_match)
            .add_systems(
                Update,
                (apply_intents, emit_cues, exit_on_quit)
                    .chain()
                    .in_set(MatchSystems::Apply),
            );
    }
}

/// Advance the reveal timer by one fixed step
fn tick_match(time: Res<Time>, mut controller: ResMut<MatchController>) {
    controller.tick(time.delta());
}

fn apply_intents(mut intents: EventReader<IntentEvent>, mut controller: ResMut<MatchController>) {
    for IntentEvent(intent) in intents.read() {
        if !controller.apply(*intent) {
            debug!("Ignored {:?} in {:?}", intent, controller.state());
        }
    }
}

/// Publish cues queued by the controller since the last frame
fn emit_cues(mut controller: ResMut<MatchController>, mut cues: EventWriter<CueEvent>) {
    for cue in controller.drain_cues() {
        cues.send(CueEvent(cue));
    }
}

fn exit_on_quit(mut controller: ResMut<MatchController>, mut exit_events: EventWriter<AppExit>) {
    if controller.take_quit_request() {
        info!("Exit button pressed - quitting application");
        exit_events.send(AppExit::Success);
    }
}
