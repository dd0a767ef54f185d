//! Beat the Hand - Rock Paper Scissors
//!
//! A single-screen Rock-Paper-Scissors game against a random computer
//! opponent, first to five wins.
//!
//! This library exposes the core game modules for testing and reuse.

pub mod audio;
pub mod cli;
pub mod error;
pub mod headless;
pub mod keybindings;
pub mod settings;
pub mod states;
pub mod ui;

// Re-export commonly used types
pub use error::ConfigError;
pub use headless::HeadlessMatchConfig;
pub use states::{Choice, Cue, Intent, MatchController, MatchState, RoundOutcome, Score};
