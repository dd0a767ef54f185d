//! Per-tick screen animations
//!
//! Purely cosmetic; read by the renderer, never by the match controller.

use bevy::prelude::*;

use crate::states::MatchState;

const CHOICE_LIFT_STEP: f32 = 2.0;
const CHOICE_LIFT_MAX: f32 = 20.0;
const OVERLAY_ALPHA_STEP: u8 = 5;
const OVERLAY_ALPHA_MAX: u8 = 180;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenAnimation {
    /// How far revealed hands have risen on the result screen (pixels)
    pub choice_lift: f32,
    /// Darkness of the victory/defeat overlay
    pub overlay_alpha: u8,
}

impl ScreenAnimation {
    /// One tick of animation for the given screen
    pub fn advance(&mut self, state: MatchState) {
        if state == MatchState::RoundResult {
            self.choice_lift = (self.choice_lift + CHOICE_LIFT_STEP).min(CHOICE_LIFT_MAX);
        } else {
            self.choice_lift = 0.0;
        }

        if state.is_match_over() {
            self.overlay_alpha = self
                .overlay_alpha
                .saturating_add(OVERLAY_ALPHA_STEP)
                .min(OVERLAY_ALPHA_MAX);
        } else {
            self.overlay_alpha = 0;
        }
    }
}
