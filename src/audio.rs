//! Cue audio
//!
//! Maps [`CueEvent`]s to one-shot sounds. If any cue sound fails to load,
//! audio is switched off for the rest of the session and the game carries
//! on silently.

use bevy::asset::LoadState;
use bevy::audio::Volume;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::settings::GameSettings;
use crate::states::{Cue, CueEvent, MatchSystems};

const ALL_CUES: [Cue; 6] = [
    Cue::Click,
    Cue::RoundWin,
    Cue::RoundLose,
    Cue::RoundTie,
    Cue::MatchVictory,
    Cue::MatchDefeat,
];

/// Asset path and base volume for a cue
pub fn cue_sound(cue: Cue) -> (&'static str, f32) {
    match cue {
        Cue::Click => ("sounds/click.wav", 0.5),
        Cue::RoundWin => ("sounds/win.wav", 0.4),
        Cue::RoundLose => ("sounds/lose.wav", 0.4),
        Cue::RoundTie => ("sounds/tie.wav", 0.4),
        Cue::MatchVictory => ("sounds/victory.wav", 0.6),
        Cue::MatchDefeat => ("sounds/defeat.wav", 0.6),
    }
}

/// Whether cue events are expected to produce sound
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioCapability {
    pub enabled: bool,
}

/// Loaded cue sounds
#[derive(Resource, Default)]
pub struct CueSounds {
    handles: HashMap<Cue, Handle<AudioSource>>,
}

/// Plugin for cue playback
pub struct CuePlugin {
    /// Start with audio off (`--mute`)
    pub muted: bool,
}

impl Plugin for CuePlugin {
    fn build(&self, app: &mut App) {
        if self.muted {
            info!("Audio disabled from the command line");
        }
        app.insert_resource(AudioCapability {
            enabled: !self.muted,
        })
        .init_resource::<CueSounds>()
        .add_systems(Startup, load_cue_sounds)
        .add_systems(
            Update,
            (watch_cue_loads, play_cues)
                .chain()
                .in_set(MatchSystems::Present),
        );
    }
}

fn load_cue_sounds(
    asset_server: Res<AssetServer>,
    capability: Res<AudioCapability>,
    mut sounds: ResMut<CueSounds>,
) {
    if !capability.enabled {
        return;
    }
    for cue in ALL_CUES {
        let (path, _) = cue_sound(cue);
        sounds.handles.insert(cue, asset_server.load(path));
    }
    info!("Loading {} cue sounds", sounds.handles.len());
}

/// Disable audio as soon as any cue sound fails to load
fn watch_cue_loads(
    asset_server: Res<AssetServer>,
    sounds: Res<CueSounds>,
    mut capability: ResMut<AudioCapability>,
) {
    if !capability.enabled {
        return;
    }
    for (cue, handle) in &sounds.handles {
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
            warn!(
                "Failed to load {:?} sound: {}. Continuing without sound.",
                cue, err
            );
            capability.enabled = false;
            return;
        }
    }
}

fn play_cues(
    mut commands: Commands,
    mut cues: EventReader<CueEvent>,
    sounds: Res<CueSounds>,
    capability: Res<AudioCapability>,
    settings: Res<GameSettings>,
) {
    if !capability.enabled || !settings.sound_enabled {
        cues.clear();
        return;
    }
    for CueEvent(cue) in cues.read() {
        let Some(handle) = sounds.handles.get(cue) else {
            continue;
        };
        let (_, volume) = cue_sound(*cue);
        commands.spawn((
            AudioPlayer::new(handle.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::new(volume * settings.master_volume)),
        ));
    }
}
