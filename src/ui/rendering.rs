//! Screen rendering
//!
//! Paints the current match state with egui's painter in window
//! coordinates (origin top-left, 800×600). Nothing here mutates the match.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ SCOREBOARD (First to 5 wins)         │
//! │  YOU: n     COMPUTER: n     DRAWS: n │
//! ├──────────────────────────────────────┤
//! │        per-state content             │
//! │        [controls]                    │
//! └──────────────────────────────────────┘
//! ```

use bevy::prelude::*;
use bevy_egui::egui::{self, pos2, vec2, Align2, Color32, FontId, Painter, Stroke};
use bevy_egui::EguiContexts;

use super::control::{Control, ControlStyle};
use super::{colors, fonts, ControlPanel, ScreenAnimation, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::keybindings::{GameAction, Keybindings};
use crate::settings::GameSettings;
use crate::states::{Choice, MatchController, MatchState, Score};

const CENTER_X: f32 = WINDOW_WIDTH / 2.0;
const HAND_SIZE: f32 = 120.0;
/// Left edges of the revealed hands (player, computer)
const PLAYER_LANE_X: f32 = 200.0;
const COMPUTER_LANE_X: f32 = 480.0;
const REVEAL_ROW_Y: f32 = 300.0;

const MENU_LINES: [&str; 10] = [
    "A strategic battle of hands!",
    "Challenge the computer in the classic game",
    "of Rock-Paper-Scissors with a modern twist.",
    "",
    "Rules:",
    "- Rock crushes Scissors",
    "- Paper covers Rock",
    "- Scissors cut Paper",
    "",
    "First to 5 wins becomes the ultimate champion!",
];

pub fn draw_screen(
    mut contexts: EguiContexts,
    controller: Res<MatchController>,
    panel: Res<ControlPanel>,
    animation: Res<ScreenAnimation>,
    keybindings: Res<Keybindings>,
    settings: Res<GameSettings>,
) {
    let ctx = contexts.ctx_mut();

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(colors::BACKGROUND))
        .show(ctx, |ui| {
            let painter = ui.painter();

            draw_scoreboard(painter, controller.score());

            match controller.state() {
                MatchState::Menu => draw_menu(painter),
                MatchState::Playing => draw_playing(painter, &controller, &keybindings),
                MatchState::RoundResult => {
                    draw_choices(painter, &controller, animation.choice_lift);
                    draw_result_text(painter, &controller);
                }
                MatchState::Victory | MatchState::Defeat => {
                    // Last move stays visible behind the popup
                    draw_playing(painter, &controller, &keybindings);
                    draw_match_over(painter, &controller, animation.overlay_alpha);
                }
            }

            for control in panel.visible() {
                draw_control(painter, control);
            }

            if !settings.sound_enabled {
                painter.text(
                    pos2(WINDOW_WIDTH - 12.0, WINDOW_HEIGHT - 8.0),
                    Align2::RIGHT_BOTTOM,
                    format!(
                        "Sound off ({})",
                        keybindings.primary_key_name(GameAction::ToggleMute)
                    ),
                    font(fonts::SMALL),
                    colors::WHITE,
                );
            }
        });
}

fn font(size: f32) -> FontId {
    FontId::proportional(size)
}

fn rect(x: f32, y: f32, width: f32, height: f32) -> egui::Rect {
    egui::Rect::from_min_size(pos2(x, y), vec2(width, height))
}

fn glyph(choice: Choice) -> &'static str {
    match choice {
        Choice::Rock => "✊",
        Choice::Paper => "✋",
        Choice::Scissors => "✌",
    }
}

fn draw_scoreboard(painter: &Painter, score: Score) {
    let board = rect(20.0, 20.0, 760.0, 80.0);
    painter.rect_filled(board, 15.0, colors::SCOREBOARD);
    painter.rect_stroke(board, 15.0, Stroke::new(3.0, colors::PURPLE));

    painter.text(
        pos2(CENTER_X, 30.0),
        Align2::CENTER_TOP,
        "SCOREBOARD (First to 5 wins)",
        font(fonts::BODY),
        colors::GOLD,
    );
    painter.text(
        pos2(100.0, 60.0),
        Align2::LEFT_TOP,
        format!("YOU: {}", score.player),
        font(fonts::BODY),
        colors::GREEN,
    );
    painter.text(
        pos2(CENTER_X, 60.0),
        Align2::CENTER_TOP,
        format!("COMPUTER: {}", score.computer),
        font(fonts::BODY),
        colors::RED,
    );
    painter.text(
        pos2(WINDOW_WIDTH - 180.0, 60.0),
        Align2::LEFT_TOP,
        format!("DRAWS: {}", score.draws),
        font(fonts::BODY),
        colors::WHITE,
    );
}

fn draw_menu(painter: &Painter) {
    painter.text(
        pos2(CENTER_X, 140.0),
        Align2::CENTER_CENTER,
        "BEAT THE HAND",
        font(fonts::TITLE),
        colors::GOLD,
    );
    painter.text(
        pos2(CENTER_X, 200.0),
        Align2::CENTER_CENTER,
        "Rock Paper Scissors",
        font(fonts::TITLE),
        colors::ORANGE,
    );

    for (i, line) in MENU_LINES.iter().enumerate() {
        painter.text(
            pos2(CENTER_X, 240.0 + i as f32 * 25.0),
            Align2::CENTER_TOP,
            *line,
            font(fonts::SMALL),
            colors::WHITE,
        );
    }
}

fn draw_playing(painter: &Painter, controller: &MatchController, keybindings: &Keybindings) {
    painter.text(
        pos2(CENTER_X, 200.0),
        Align2::CENTER_CENTER,
        "Choose your weapon:",
        font(fonts::HEADER),
        colors::WHITE,
    );

    if !controller.is_choice_pending() {
        painter.text(
            pos2(CENTER_X, 240.0),
            Align2::CENTER_CENTER,
            format!(
                "or press {} / {} / {}",
                keybindings.primary_key_name(GameAction::ChooseRock),
                keybindings.primary_key_name(GameAction::ChoosePaper),
                keybindings.primary_key_name(GameAction::ChooseScissors),
            ),
            font(fonts::SMALL),
            colors::WHITE,
        );
        return;
    }

    if let Some(progress) = controller.reveal_progress() {
        painter.text(
            pos2(CENTER_X, 230.0),
            Align2::CENTER_TOP,
            "Computer is choosing...",
            font(fonts::BODY),
            colors::WHITE,
        );
        let track = rect(CENTER_X - 100.0, 262.0, 200.0, 6.0);
        painter.rect_filled(track, 3.0, colors::SCOREBOARD);
        painter.rect_filled(
            rect(track.min.x, track.min.y, track.width() * progress, track.height()),
            3.0,
            colors::GOLD,
        );
    }

    draw_choices(painter, controller, 0.0);
}

/// Player's hand as soon as it is locked in; computer's only once revealed
fn draw_choices(painter: &Painter, controller: &MatchController, lift: f32) {
    if let Some(choice) = controller.player_choice() {
        draw_revealed_hand(painter, PLAYER_LANE_X, choice, "YOUR CHOICE", colors::GREEN, lift);
    }
    if let Some(choice) = controller.computer_choice() {
        draw_revealed_hand(
            painter,
            COMPUTER_LANE_X,
            choice,
            "COMPUTER'S CHOICE",
            colors::RED,
            lift,
        );
    }
}

fn draw_revealed_hand(
    painter: &Painter,
    x: f32,
    choice: Choice,
    label: &str,
    color: Color32,
    lift: f32,
) {
    let y = REVEAL_ROW_Y - lift;
    let tile = rect(x, y, HAND_SIZE, HAND_SIZE);
    painter.rect_filled(tile, 10.0, colors::HAND_TILE);
    painter.text(
        tile.center(),
        Align2::CENTER_CENTER,
        glyph(choice),
        font(fonts::GLYPH),
        colors::WHITE,
    );
    painter.text(
        pos2(tile.center().x, y - 30.0),
        Align2::CENTER_TOP,
        label,
        font(fonts::BODY),
        color,
    );
}

fn draw_result_text(painter: &Painter, controller: &MatchController) {
    let Some(text) = controller.result_text() else {
        return;
    };
    let color = if text.contains("win") {
        colors::GOLD
    } else {
        colors::WHITE
    };
    painter.text(
        pos2(CENTER_X, 200.0),
        Align2::CENTER_TOP,
        text,
        font(fonts::HEADER),
        color,
    );
}

fn draw_match_over(painter: &Painter, controller: &MatchController, overlay_alpha: u8) {
    let score = controller.score();
    let won = controller.state() == MatchState::Victory;

    painter.rect_filled(
        rect(0.0, 0.0, WINDOW_WIDTH, WINDOW_HEIGHT),
        0.0,
        Color32::from_black_alpha(overlay_alpha),
    );

    let popup = rect(100.0, 150.0, 600.0, 300.0);
    let (fill, border) = if won {
        (colors::VICTORY_PANEL, colors::GOLD)
    } else {
        (colors::DEFEAT_PANEL, colors::RED)
    };
    painter.rect_filled(popup, 20.0, fill);
    painter.rect_stroke(popup, 20.0, Stroke::new(4.0, border));

    if won {
        for i in 0..8 {
            let angle = (i as f32 * 45.0).to_radians();
            let center = pos2(
                CENTER_X + 250.0 * angle.cos(),
                WINDOW_HEIGHT / 2.0 + 150.0 * angle.sin(),
            );
            painter.circle_filled(center, 8.0, colors::GOLD);
        }
    }

    let (title, subtitle, instruction) = if won {
        (
            "ULTIMATE CHAMPION!",
            format!("You won :  {}-{}", score.player, score.computer),
            "First to 5 wins takes the match!",
        )
    } else {
        (
            "MATCH LOST",
            format!("Computer won :  {}-{}", score.computer, score.player),
            "Better luck next time!",
        )
    };

    painter.text(
        pos2(CENTER_X, 180.0),
        Align2::CENTER_TOP,
        title,
        font(fonts::TITLE),
        border,
    );
    painter.text(
        pos2(CENTER_X, 260.0),
        Align2::CENTER_TOP,
        subtitle,
        font(fonts::HEADER),
        colors::WHITE,
    );
    painter.text(
        pos2(CENTER_X, 330.0),
        Align2::CENTER_TOP,
        instruction,
        font(fonts::SMALL),
        colors::WHITE,
    );
}

fn draw_control(painter: &Painter, control: &Control) {
    let bounds = control.bounds();
    let area = egui::Rect::from_min_max(
        pos2(bounds.min.x, bounds.min.y + control.bounce_offset()),
        pos2(bounds.max.x, bounds.max.y + control.bounce_offset()),
    );

    match control.style() {
        ControlStyle::Hand(choice) => {
            painter.rect_filled(area, 10.0, colors::HAND_TILE);
            painter.text(
                area.center(),
                Align2::CENTER_CENTER,
                glyph(choice),
                font(fonts::GLYPH),
                colors::WHITE,
            );
            if control.is_hovered() {
                painter.rect_stroke(area.expand(5.0), 10.0, Stroke::new(3.0, colors::GOLD));
            }
            painter.text(
                pos2(bounds.center().x, bounds.max.y + 10.0),
                Align2::CENTER_TOP,
                control.label().to_uppercase(),
                font(fonts::BODY),
                colors::WHITE,
            );
        }
        style => {
            let (color, hover_color) = match style {
                ControlStyle::Go => (colors::GREEN, colors::DARK_GREEN),
                ControlStyle::Stop => (colors::RED, colors::DARK_RED),
                _ => (colors::BLUE, colors::DARK_BLUE),
            };
            let fill = if control.is_hovered() { hover_color } else { color };
            painter.rect_filled(area, 12.0, fill);
            painter.text(
                area.center(),
                Align2::CENTER_CENTER,
                control.label(),
                font(fonts::BODY),
                colors::WHITE,
            );
        }
    }
}
