//! Keybinding system for remappable controls
//!
//! Every pointer action has a keyboard equivalent. Bindings are stored in
//! `settings.ron` alongside the other preferences.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::states::{Choice, Intent, MatchState};

/// All possible actions that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    ChooseRock,
    ChoosePaper,
    ChooseScissors,
    /// Start match / play again / next match
    Confirm,
    /// Return to menu, or quit from the menu
    Back,
    ToggleMute,
}

impl GameAction {
    pub fn all() -> [GameAction; 6] {
        [
            GameAction::ChooseRock,
            GameAction::ChoosePaper,
            GameAction::ChooseScissors,
            GameAction::Confirm,
            GameAction::Back,
            GameAction::ToggleMute,
        ]
    }

    /// The match intent this action stands for in `state`, if any.
    ///
    /// `ToggleMute` never maps to an intent; it only touches settings.
    pub fn intent(&self, state: MatchState) -> Option<Intent> {
        match (self, state) {
            (GameAction::ChooseRock, MatchState::Playing) => Some(Intent::Choose(Choice::Rock)),
            (GameAction::ChoosePaper, MatchState::Playing) => Some(Intent::Choose(Choice::Paper)),
            (GameAction::ChooseScissors, MatchState::Playing) => {
                Some(Intent::Choose(Choice::Scissors))
            }
            (GameAction::Confirm, MatchState::Menu) => Some(Intent::StartMatch),
            (GameAction::Confirm, MatchState::RoundResult) => Some(Intent::NextRound),
            (GameAction::Confirm, MatchState::Victory | MatchState::Defeat) => {
                Some(Intent::NextMatch)
            }
            (GameAction::Back, MatchState::Menu) => Some(Intent::Quit),
            (GameAction::Back, _) => Some(Intent::ReturnToMenu),
            _ => None,
        }
    }
}

/// Serializable wrapper for KeyCode (stores as string)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SerializableKeyCode(String);

impl From<KeyCode> for SerializableKeyCode {
    fn from(key: KeyCode) -> Self {
        Self(format!("{:?}", key))
    }
}

impl TryFrom<SerializableKeyCode> for KeyCode {
    type Error = String;

    fn try_from(sk: SerializableKeyCode) -> Result<Self, Self::Error> {
        let key = match sk.0.as_str() {
            "Escape" => KeyCode::Escape,
            "Enter" => KeyCode::Enter,
            "NumpadEnter" => KeyCode::NumpadEnter,
            "Space" => KeyCode::Space,
            "Tab" => KeyCode::Tab,
            "Backspace" => KeyCode::Backspace,
            "KeyA" => KeyCode::KeyA,
            "KeyB" => KeyCode::KeyB,
            "KeyC" => KeyCode::KeyC,
            "KeyD" => KeyCode::KeyD,
            "KeyE" => KeyCode::KeyE,
            "KeyF" => KeyCode::KeyF,
            "KeyG" => KeyCode::KeyG,
            "KeyH" => KeyCode::KeyH,
            "KeyI" => KeyCode::KeyI,
            "KeyJ" => KeyCode::KeyJ,
            "KeyK" => KeyCode::KeyK,
            "KeyL" => KeyCode::KeyL,
            "KeyM" => KeyCode::KeyM,
            "KeyN" => KeyCode::KeyN,
            "KeyO" => KeyCode::KeyO,
            "KeyP" => KeyCode::KeyP,
            "KeyQ" => KeyCode::KeyQ,
            "KeyR" => KeyCode::KeyR,
            "KeyS" => KeyCode::KeyS,
            "KeyT" => KeyCode::KeyT,
            "KeyU" => KeyCode::KeyU,
            "KeyV" => KeyCode::KeyV,
            "KeyW" => KeyCode::KeyW,
            "KeyX" => KeyCode::KeyX,
            "KeyY" => KeyCode::KeyY,
            "KeyZ" => KeyCode::KeyZ,
            "Digit0" => KeyCode::Digit0,
            "Digit1" => KeyCode::Digit1,
            "Digit2" => KeyCode::Digit2,
            "Digit3" => KeyCode::Digit3,
            "Digit4" => KeyCode::Digit4,
            "Digit5" => KeyCode::Digit5,
            "Digit6" => KeyCode::Digit6,
            "Digit7" => KeyCode::Digit7,
            "Digit8" => KeyCode::Digit8,
            "Digit9" => KeyCode::Digit9,
            "Numpad0" => KeyCode::Numpad0,
            "Numpad1" => KeyCode::Numpad1,
            "Numpad2" => KeyCode::Numpad2,
            "Numpad3" => KeyCode::Numpad3,
            "Numpad4" => KeyCode::Numpad4,
            "Numpad5" => KeyCode::Numpad5,
            "Numpad6" => KeyCode::Numpad6,
            "Numpad7" => KeyCode::Numpad7,
            "Numpad8" => KeyCode::Numpad8,
            "Numpad9" => KeyCode::Numpad9,
            "NumpadAdd" => KeyCode::NumpadAdd,
            "NumpadSubtract" => KeyCode::NumpadSubtract,
            "NumpadMultiply" => KeyCode::NumpadMultiply,
            "NumpadDivide" => KeyCode::NumpadDivide,
            "F1" => KeyCode::F1,
            "F2" => KeyCode::F2,
            "F3" => KeyCode::F3,
            "F4" => KeyCode::F4,
            "F5" => KeyCode::F5,
            "F6" => KeyCode::F6,
            "F7" => KeyCode::F7,
            "F8" => KeyCode::F8,
            "F9" => KeyCode::F9,
            "F10" => KeyCode::F10,
            "F11" => KeyCode::F11,
            "F12" => KeyCode::F12,
            "Minus" => KeyCode::Minus,
            "Equal" => KeyCode::Equal,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            other => return Err(format!("unsupported key '{}'", other)),
        };
        Ok(key)
    }
}

/// Key binding with primary and optional secondary key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyBinding {
    #[serde(with = "keycode_serde")]
    pub primary: KeyCode,
    #[serde(with = "option_keycode_serde", default)]
    pub secondary: Option<KeyCode>,
}

mod keycode_serde {
    use super::*;
    use serde::{de::Error, Deserializer, Serializer};

    pub fn serialize<S>(key: &KeyCode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let sk: SerializableKeyCode = (*key).into();
        sk.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<KeyCode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let sk = SerializableKeyCode::deserialize(deserializer)?;
        KeyCode::try_from(sk).map_err(D::Error::custom)
    }
}

mod option_keycode_serde {
    use super::*;
    use serde::{de::Error, Deserializer, Serializer};

    pub fn serialize<S>(key: &Option<KeyCode>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match key {
            Some(k) => {
                let sk: SerializableKeyCode = (*k).into();
                serializer.serialize_some(&sk)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<KeyCode>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt_sk: Option<SerializableKeyCode> = Option::deserialize(deserializer)?;
        opt_sk
            .map(KeyCode::try_from)
            .transpose()
            .map_err(D::Error::custom)
    }
}

impl KeyBinding {
    pub fn new(primary: KeyCode) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn with_secondary(primary: KeyCode, secondary: KeyCode) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }
}

/// Complete keybindings configuration
#[derive(Debug, Clone, Resource, Serialize, Deserialize, PartialEq)]
pub struct Keybindings {
    bindings: HashMap<GameAction, KeyBinding>,
}

impl Default for Keybindings {
    fn default() -> Self {
        Self::create_defaults()
    }
}

impl Keybindings {
    /// Create default keybindings
    pub fn create_defaults() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            GameAction::ChooseRock,
            KeyBinding::with_secondary(KeyCode::KeyR, KeyCode::Digit1),
        );
        bindings.insert(
            GameAction::ChoosePaper,
            KeyBinding::with_secondary(KeyCode::KeyP, KeyCode::Digit2),
        );
        bindings.insert(
            GameAction::ChooseScissors,
            KeyBinding::with_secondary(KeyCode::KeyS, KeyCode::Digit3),
        );
        bindings.insert(
            GameAction::Confirm,
            KeyBinding::with_secondary(KeyCode::Enter, KeyCode::Space),
        );
        bindings.insert(GameAction::Back, KeyBinding::new(KeyCode::Escape));
        bindings.insert(GameAction::ToggleMute, KeyBinding::new(KeyCode::KeyM));

        Self { bindings }
    }

    /// Bind any action the loaded file left out to its default keys
    pub fn fill_missing(&mut self) {
        for (action, binding) in Self::create_defaults().bindings {
            self.bindings.entry(action).or_insert(binding);
        }
    }

    /// Get the binding for an action
    pub fn get(&self, action: GameAction) -> Option<&KeyBinding> {
        self.bindings.get(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn action_just_pressed(&self, action: GameAction, keyboard: &ButtonInput<KeyCode>) -> bool {
        self.get(action).is_some_and(|binding| {
            keyboard.just_pressed(binding.primary)
                || binding.secondary.is_some_and(|key| keyboard.just_pressed(key))
        })
    }

    /// Get a human-readable string for a key
    pub fn key_name(key: KeyCode) -> &'static str {
        match key {
            KeyCode::Escape => "ESC",
            KeyCode::Enter => "ENTER",
            KeyCode::NumpadEnter => "NUM ENTER",
            KeyCode::Space => "SPACE",
            KeyCode::Tab => "TAB",
            KeyCode::Backspace => "BACKSPACE",
            KeyCode::KeyA => "A",
            KeyCode::KeyB => "B",
            KeyCode::KeyC => "C",
            KeyCode::KeyD => "D",
            KeyCode::KeyE => "E",
            KeyCode::KeyF => "F",
            KeyCode::KeyG => "G",
            KeyCode::KeyH => "H",
            KeyCode::KeyI => "I",
            KeyCode::KeyJ => "J",
            KeyCode::KeyK => "K",
            KeyCode::KeyL => "L",
            KeyCode::KeyM => "M",
            KeyCode::KeyN => "N",
            KeyCode::KeyO => "O",
            KeyCode::KeyP => "P",
            KeyCode::KeyQ => "Q",
            KeyCode::KeyR => "R",
            KeyCode::KeyS => "S",
            KeyCode::KeyT => "T",
            KeyCode::KeyU => "U",
            KeyCode::KeyV => "V",
            KeyCode::KeyW => "W",
            KeyCode::KeyX => "X",
            KeyCode::KeyY => "Y",
            KeyCode::KeyZ => "Z",
            KeyCode::Digit0 => "0",
            KeyCode::Digit1 => "1",
            KeyCode::Digit2 => "2",
            KeyCode::Digit3 => "3",
            KeyCode::Digit4 => "4",
            KeyCode::Digit5 => "5",
            KeyCode::Digit6 => "6",
            KeyCode::Digit7 => "7",
            KeyCode::Digit8 => "8",
            KeyCode::Digit9 => "9",
            KeyCode::Numpad0 => "NUM0",
            KeyCode::Numpad1 => "NUM1",
            KeyCode::Numpad2 => "NUM2",
            KeyCode::Numpad3 => "NUM3",
            KeyCode::Numpad4 => "NUM4",
            KeyCode::Numpad5 => "NUM5",
            KeyCode::Numpad6 => "NUM6",
            KeyCode::Numpad7 => "NUM7",
            KeyCode::Numpad8 => "NUM8",
            KeyCode::Numpad9 => "NUM9",
            KeyCode::NumpadAdd => "NUM +",
            KeyCode::NumpadSubtract => "NUM -",
            KeyCode::NumpadMultiply => "NUM *",
            KeyCode::NumpadDivide => "NUM /",
            KeyCode::F1 => "F1",
            KeyCode::F2 => "F2",
            KeyCode::F3 => "F3",
            KeyCode::F4 => "F4",
            KeyCode::F5 => "F5",
            KeyCode::F6 => "F6",
            KeyCode::F7 => "F7",
            KeyCode::F8 => "F8",
            KeyCode::F9 => "F9",
            KeyCode::F10 => "F10",
            KeyCode::F11 => "F11",
            KeyCode::F12 => "F12",
            KeyCode::Minus => "-",
            KeyCode::Equal => "=",
            KeyCode::ArrowUp => "↑",
            KeyCode::ArrowDown => "↓",
            KeyCode::ArrowLeft => "←",
            KeyCode::ArrowRight => "→",
            _ => "???",
        }
    }

    /// Primary key name for an action, for on-screen hints
    pub fn primary_key_name(&self, action: GameAction) -> &'static str {
        self.get(action)
            .map_or("Unbound", |binding| Self::key_name(binding.primary))
    }
}
