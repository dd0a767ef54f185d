//! Interactive controls
//!
//! A [`Control`] is a clickable rectangle with a hover flag and a small
//! vertical bounce. It knows nothing about the match; activation just hands
//! back the [`Intent`] it was built with.

use bevy::math::{Rect, Vec2};

use crate::states::{Choice, Intent};

/// Initial upward speed when a bounce starts (pixels per tick)
const BOUNCE_KICK: f32 = -5.0;
/// Downward acceleration applied every tick
const BOUNCE_GRAVITY: f32 = 0.3;

/// How a control is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStyle {
    /// Green action button (Play Game, Play Again, Next Match)
    Go,
    /// Red button (Quit)
    Stop,
    /// Blue navigation button (Main Menu)
    Neutral,
    /// Large hand tile
    Hand(Choice),
}

#[derive(Debug, Clone)]
pub struct Control {
    bounds: Rect,
    label: &'static str,
    style: ControlStyle,
    intent: Intent,
    enabled: bool,
    hovered: bool,
    /// Vertical offset from rest; negative is up
    offset: f32,
    velocity: f32,
}

impl Control {
    /// Build a control from its top-left corner and size
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        label: &'static str,
        style: ControlStyle,
        intent: Intent,
    ) -> Self {
        Self {
            bounds: Rect::new(x, y, x + width, y + height),
            label,
            style,
            intent,
            enabled: true,
            hovered: false,
            offset: 0.0,
            velocity: 0.0,
        }
    }

    /// Hand tile that submits `choice`
    pub fn hand(x: f32, y: f32, size: f32, choice: Choice) -> Self {
        Self::new(
            x,
            y,
            size,
            size,
            choice.name(),
            ControlStyle::Hand(choice),
            Intent::Choose(choice),
        )
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn style(&self) -> ControlStyle {
        self.style
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn bounce_offset(&self) -> f32 {
        self.offset
    }

    /// Disabled controls never hover or activate
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.hovered = false;
        }
    }

    pub fn clear_hover(&mut self) {
        self.hovered = false;
    }

    pub fn handle_pointer_move(&mut self, position: Vec2) {
        self.hovered = self.enabled && self.bounds.contains(position);
    }

    /// Returns the control's intent when the press lands on a hovered control
    pub fn handle_pointer_down(&mut self, position: Vec2) -> Option<Intent> {
        self.handle_pointer_move(position);
        self.hovered.then_some(self.intent)
    }

    /// Per-tick bounce: kicks upward while hovered, snaps to rest otherwise
    pub fn advance_animation(&mut self) {
        if self.hovered && self.velocity == 0.0 {
            self.velocity = BOUNCE_KICK;
        } else if !self.hovered {
            self.offset = 0.0;
            self.velocity = 0.0;
            return;
        }

        self.offset += self.velocity;
        self.velocity += BOUNCE_GRAVITY;
        if self.offset >= 0.0 {
            self.offset = 0.0;
            self.velocity = 0.0;
        }
    }
}
