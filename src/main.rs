//! Beat the Hand - Rock Paper Scissors
//!
//! Graphical game by default; `--headless <config.json>` plays a simulated
//! match and prints the result.

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_egui::EguiPlugin;

use beat_the_hand::audio::CuePlugin;
use beat_the_hand::cli;
use beat_the_hand::headless::{run_headless_match, HeadlessMatchConfig};
use beat_the_hand::settings::{GameSettings, SettingsPlugin};
use beat_the_hand::states::StatesPlugin;
use beat_the_hand::ui::{UiPlugin, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

fn main() -> AppExit {
    let args = cli::parse_args();

    if let Some(path) = args.headless {
        let result = HeadlessMatchConfig::load_from_file(&path).and_then(|mut config| {
            if let Some(output) = args.output {
                config.output_path = Some(output.to_string_lossy().into_owned());
            }
            if args.seed.is_some() {
                config.random_seed = args.seed;
            }
            run_headless_match(config)
        });
        if let Err(e) = result {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        return AppExit::Success;
    }

    let settings = GameSettings::load();
    let present_mode = if settings.vsync {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    };

    App::new()
        // Bevy default plugins with custom window settings
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.to_string(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                resizable: false,
                present_mode,
                ..default()
            }),
            ..default()
        }))
        // Our game plugins
        .add_plugins((
            EguiPlugin,
            SettingsPlugin {
                settings,
                path: GameSettings::settings_path(),
            },
            StatesPlugin {
                random_seed: args.seed,
            },
            CuePlugin { muted: args.mute },
            UiPlugin,
        ))
        .run()
}
