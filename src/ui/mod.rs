//! UI System
//!
//! The presentation layer: controls, input handling, screen animation and
//! egui rendering of whatever state the match controller is in.

use bevy::prelude::*;

pub mod animation;
pub mod control;
pub mod input;
pub mod panel;
pub mod rendering;

pub use animation::ScreenAnimation;
pub use control::{Control, ControlStyle};
pub use panel::ControlPanel;

use crate::states::MatchSystems;

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
pub const WINDOW_TITLE: &str = "Beat the Hand: Rock Paper Scissors";

/// Plugin for UI management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlPanel>()
            .init_resource::<ScreenAnimation>()
            .add_systems(Startup, setup_ui)
            .add_systems(FixedUpdate, input::animate_controls)
            .add_systems(
                Update,
                (input::handle_pointer, input::handle_keyboard).in_set(MatchSystems::Input),
            )
            .add_systems(
                Update,
                (input::refresh_controls, rendering::draw_screen)
                    .chain()
                    .in_set(MatchSystems::Present),
            );
    }
}

fn setup_ui(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("UI system initialized");
}

/// Common colors used throughout the UI
pub mod colors {
    use bevy_egui::egui::Color32;

    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLUE: Color32 = Color32::from_rgb(100, 149, 237);
    pub const DARK_BLUE: Color32 = Color32::from_rgb(25, 25, 112);
    pub const GREEN: Color32 = Color32::from_rgb(0, 200, 0);
    pub const DARK_GREEN: Color32 = Color32::from_rgb(0, 150, 0);
    pub const RED: Color32 = Color32::from_rgb(200, 0, 0);
    pub const DARK_RED: Color32 = Color32::from_rgb(150, 0, 0);
    pub const GOLD: Color32 = Color32::from_rgb(255, 215, 0);
    pub const PURPLE: Color32 = Color32::from_rgb(138, 43, 226);
    pub const ORANGE: Color32 = Color32::from_rgb(255, 165, 0);
    pub const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 30);
    pub const SCOREBOARD: Color32 = Color32::from_rgb(30, 30, 60);
    pub const HAND_TILE: Color32 = Color32::from_rgb(50, 55, 100);
    pub const VICTORY_PANEL: Color32 = Color32::from_rgb(40, 80, 40);
    pub const DEFEAT_PANEL: Color32 = Color32::from_rgb(80, 40, 40);
}

/// Font sizes used throughout the UI
pub mod fonts {
    /// Large title text
    pub const TITLE: f32 = 48.0;
    /// Section headers and result text
    pub const HEADER: f32 = 32.0;
    /// Buttons, scores and labels
    pub const BODY: f32 = 24.0;
    /// Rules blurb and hints
    pub const SMALL: f32 = 18.0;
    /// Hand glyphs on the choice tiles
    pub const GLYPH: f32 = 64.0;
}
