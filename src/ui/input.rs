//! Pointer and keyboard handling
//!
//! Translates raw input into [`IntentEvent`]s. Every activation, by mouse
//! or key, also sends a click cue.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::animation::ScreenAnimation;
use super::panel::{is_offered, ControlPanel};
use crate::keybindings::{GameAction, Keybindings};
use crate::settings::GameSettings;
use crate::states::{Cue, CueEvent, IntentEvent, MatchController};

/// Hover tracking and clicks on the control panel
pub fn handle_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    controller: Res<MatchController>,
    mut panel: ResMut<ControlPanel>,
    mut intents: EventWriter<IntentEvent>,
    mut cues: EventWriter<CueEvent>,
) {
    // Recomputed every frame; the controller may have moved on since the last one
    panel.refresh(controller.state(), controller.is_choice_pending());

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        panel.pointer_left();
        return;
    };

    panel.pointer_moved(cursor);
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(intent) = panel.pointer_pressed(cursor) {
            cues.send(CueEvent(Cue::Click));
            intents.send(IntentEvent(intent));
        }
    }
}

/// Keyboard equivalents for every control, plus the mute toggle
pub fn handle_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    keybindings: Res<Keybindings>,
    controller: Res<MatchController>,
    mut settings: ResMut<GameSettings>,
    mut intents: EventWriter<IntentEvent>,
    mut cues: EventWriter<CueEvent>,
) {
    let state = controller.state();
    let pending = controller.is_choice_pending();

    for action in GameAction::all() {
        if !keybindings.action_just_pressed(action, &keyboard) {
            continue;
        }
        if action == GameAction::ToggleMute {
            settings.sound_enabled = !settings.sound_enabled;
            info!("Sound {}", if settings.sound_enabled { "enabled" } else { "muted" });
            continue;
        }
        let Some(intent) = action.intent(state) else {
            continue;
        };
        if is_offered(intent, state, pending) || action == GameAction::Back {
            cues.send(CueEvent(Cue::Click));
            intents.send(IntentEvent(intent));
        }
    }
}

/// Re-sync the panel after intents were applied, so the frame that locks in
/// a hand no longer draws the hand tiles
pub fn refresh_controls(controller: Res<MatchController>, mut panel: ResMut<ControlPanel>) {
    panel.refresh(controller.state(), controller.is_choice_pending());
}

/// Fixed-tick cosmetic updates
pub fn animate_controls(
    controller: Res<MatchController>,
    mut panel: ResMut<ControlPanel>,
    mut animation: ResMut<ScreenAnimation>,
) {
    panel.advance_animations();
    animation.advance(controller.state());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsPlugin;
    use crate::states::{Choice, MatchState, MatchSystems, Score, StatesPlugin};
    use bevy::ecs::event::Events;
    use std::path::PathBuf;

    fn settings_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "beat-the-hand-input-{}-{}.ron",
            std::process::id(),
            name
        ))
    }

    /// Keyboard, intents and settings wired as in the game, minus the window
    fn keyboard_app(path: PathBuf) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(StatesPlugin {
                random_seed: Some(3),
            })
            .add_plugins(SettingsPlugin {
                settings: GameSettings::default(),
                path,
            })
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ControlPanel>()
            .add_systems(Update, handle_keyboard.in_set(MatchSystems::Input))
            .add_systems(Update, refresh_controls.in_set(MatchSystems::Present));
        app.finish();
        app.cleanup();
        app.update();
        app
    }

    fn tap(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        app.update();
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(key);
        input.clear();
    }

    fn cues_this_frame(app: &App) -> Vec<Cue> {
        app.world()
            .resource::<Events<CueEvent>>()
            .iter_current_update_events()
            .map(|CueEvent(cue)| *cue)
            .collect()
    }

    #[test]
    fn test_back_abandons_pending_round() {
        let path = settings_path("back");
        let mut app = keyboard_app(path.clone());
        {
            let mut controller = app.world_mut().resource_mut::<MatchController>();
            controller.start_match();
            controller.submit_choice(Choice::Rock);
        }

        tap(&mut app, KeyCode::Escape);

        let controller = app.world().resource::<MatchController>();
        assert_eq!(controller.state(), MatchState::Menu);
        assert!(!controller.is_choice_pending());
        assert_eq!(controller.score(), Score::default());
        assert!(cues_this_frame(&app).contains(&Cue::Click));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_mute_key_flips_and_saves_sound_setting() {
        let path = settings_path("mute");
        let _ = std::fs::remove_file(&path);
        let mut app = keyboard_app(path.clone());

        tap(&mut app, KeyCode::KeyM);
        assert!(!app.world().resource::<GameSettings>().sound_enabled);
        let saved = GameSettings::load_from(&path).expect("mute is written to disk");
        assert!(!saved.sound_enabled);
        assert!(cues_this_frame(&app).is_empty(), "muting is not a click");

        tap(&mut app, KeyCode::KeyM);
        assert!(app.world().resource::<GameSettings>().sound_enabled);
        let saved = GameSettings::load_from(&path).expect("unmute is written to disk");
        assert!(saved.sound_enabled);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_hand_tiles_hidden_on_the_frame_a_hand_is_chosen() {
        let path = settings_path("tiles");
        let mut app = keyboard_app(path.clone());
        app.world_mut()
            .resource_mut::<MatchController>()
            .start_match();
        app.update();
        assert_eq!(app.world().resource::<ControlPanel>().visible().count(), 3);

        tap(&mut app, KeyCode::KeyR);

        assert!(app.world().resource::<MatchController>().is_choice_pending());
        assert_eq!(
            app.world().resource::<ControlPanel>().visible().count(),
            0,
            "no hand tiles once the hand is locked in"
        );
        let _ = std::fs::remove_file(&path);
    }
}
