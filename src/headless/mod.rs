//! Headless mode for automated testing
//!
//! Plays a complete match with no graphical output, suitable for
//! automated testing and reproducing matches from a seed.
//!
//! ## Usage
//!
//! ```bash
//! # Run a headless match
//! cargo run --release -- --headless match_config.json
//! ```
//!
//! ## JSON Configuration
//!
//! ```json
//! {
//!   "player_strategy": ["Rock", "Paper"],
//!   "computer_moves": [],
//!   "random_seed": 42,
//!   "max_rounds": 200,
//!   "output_path": "summary.json"
//! }
//! ```

pub mod config;
pub mod runner;

pub use config::{HeadlessMatchConfig, HeadlessPlan, PlayerStrategy};
pub use runner::{build_headless_app, run_headless_match, AutoPlayer, MatchSummary, Winner};
