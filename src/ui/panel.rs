//! The fixed set of on-screen controls and which screen offers each one

use bevy::prelude::*;

use super::control::{Control, ControlStyle};
use crate::states::{Choice, Intent, MatchState};

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 60.0;
const HAND_SIZE: f32 = 120.0;
/// Left edge of a centered button
const CENTER_X: f32 = super::WINDOW_WIDTH / 2.0 - BUTTON_WIDTH / 2.0;

/// Whether a control carrying `intent` is shown on the current screen
pub fn is_offered(intent: Intent, state: MatchState, choice_pending: bool) -> bool {
    match intent {
        Intent::StartMatch | Intent::Quit => state == MatchState::Menu,
        Intent::Choose(_) => state == MatchState::Playing && !choice_pending,
        Intent::NextRound => state == MatchState::RoundResult,
        Intent::NextMatch => state.is_match_over(),
        Intent::ReturnToMenu => state == MatchState::RoundResult || state.is_match_over(),
    }
}

/// Every control on the screen. Controls not offered in the current state
/// are disabled and skipped for hit-testing and drawing.
#[derive(Resource, Debug, Clone)]
pub struct ControlPanel {
    controls: Vec<Control>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::standard()
    }
}

impl ControlPanel {
    pub fn standard() -> Self {
        let controls = vec![
            Control::new(
                CENTER_X - 110.0,
                500.0,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                "Play Game",
                ControlStyle::Go,
                Intent::StartMatch,
            ),
            Control::new(
                CENTER_X + 110.0,
                500.0,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                "Quit",
                ControlStyle::Stop,
                Intent::Quit,
            ),
            Control::hand(120.0, 400.0, HAND_SIZE, Choice::Rock),
            Control::hand(340.0, 400.0, HAND_SIZE, Choice::Paper),
            Control::hand(560.0, 400.0, HAND_SIZE, Choice::Scissors),
            Control::new(
                CENTER_X,
                450.0,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                "Play Again",
                ControlStyle::Go,
                Intent::NextRound,
            ),
            Control::new(
                CENTER_X,
                400.0,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                "Next Match",
                ControlStyle::Go,
                Intent::NextMatch,
            ),
            Control::new(
                CENTER_X,
                530.0,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                "Main Menu",
                ControlStyle::Neutral,
                Intent::ReturnToMenu,
            ),
        ];
        Self { controls }
    }

    /// Enable exactly the controls the current screen offers
    pub fn refresh(&mut self, state: MatchState, choice_pending: bool) {
        for control in &mut self.controls {
            control.set_enabled(is_offered(control.intent(), state, choice_pending));
        }
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        for control in &mut self.controls {
            control.handle_pointer_move(position);
        }
    }

    /// Cursor left the window
    pub fn pointer_left(&mut self) {
        for control in &mut self.controls {
            control.clear_hover();
        }
    }

    /// Intent of the first enabled control under the press, if any
    pub fn pointer_pressed(&mut self, position: Vec2) -> Option<Intent> {
        self.controls
            .iter_mut()
            .find_map(|control| control.handle_pointer_down(position))
    }

    pub fn advance_animations(&mut self) {
        for control in &mut self.controls {
            control.advance_animation();
        }
    }

    /// Controls the current screen offers, in draw order
    pub fn visible(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(|control| control.is_enabled())
    }
}
