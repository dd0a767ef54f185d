//! JSON configuration parsing for headless mode
//!
//! Parses JSON match configurations and turns them into a ready-to-run plan.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::states::Choice;

/// How the simulated player picks its hands.
///
/// In JSON this is either the string `"Random"` or a list of hand names
/// that is cycled in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerStrategy {
    Named(String),
    Moves(Vec<String>),
}

impl Default for PlayerStrategy {
    fn default() -> Self {
        PlayerStrategy::Named("Random".to_string())
    }
}

impl PlayerStrategy {
    /// Hands to cycle; empty means uniformly random
    fn to_moves(&self) -> Result<Vec<Choice>, ConfigError> {
        match self {
            PlayerStrategy::Named(name) if name.trim().eq_ignore_ascii_case("random") => {
                Ok(Vec::new())
            }
            PlayerStrategy::Named(name) => Err(ConfigError::validation(format!(
                "Unknown player_strategy: '{}'. Use \"Random\" or a list of hands",
                name
            ))),
            PlayerStrategy::Moves(names) if names.is_empty() => Err(ConfigError::validation(
                "player_strategy list must name at least one hand",
            )),
            PlayerStrategy::Moves(names) => HeadlessMatchConfig::parse_moves(names),
        }
    }
}

/// Headless match configuration loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadlessMatchConfig {
    /// `"Random"` (the default) or a list of hands cycled in order
    #[serde(default)]
    pub player_strategy: PlayerStrategy,
    /// Hands the computer throws instead of drawing at random.
    /// After the list runs out the last hand repeats.
    #[serde(default)]
    pub computer_moves: Vec<String>,
    /// Random seed for deterministic match reproduction
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Stop after this many rounds even if nobody reached five wins
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
    /// Custom output path for the match summary (optional)
    #[serde(default)]
    pub output_path: Option<String>,
}

fn default_max_rounds() -> u32 {
    200
}

impl Default for HeadlessMatchConfig {
    fn default() -> Self {
        Self {
            player_strategy: PlayerStrategy::default(),
            computer_moves: Vec::new(),
            random_seed: None,
            max_rounds: default_max_rounds(),
            output_path: None,
        }
    }
}

/// Parsed and validated form of [`HeadlessMatchConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessPlan {
    /// Empty when the player throws at random
    pub player_moves: Vec<Choice>,
    pub computer_moves: Vec<Choice>,
    pub random_seed: Option<u64>,
    pub max_rounds: u32,
    pub output_path: Option<String>,
}

impl HeadlessMatchConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: HeadlessMatchConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player_strategy.to_moves()?;
        Self::parse_moves(&self.computer_moves)?;

        if self.max_rounds == 0 {
            return Err(ConfigError::validation("max_rounds must be positive"));
        }

        Ok(())
    }

    fn parse_choice(name: &str) -> Result<Choice, ConfigError> {
        Choice::parse(name).ok_or_else(|| {
            ConfigError::validation(format!(
                "Unknown choice: '{}'. Valid choices: Rock, Paper, Scissors",
                name
            ))
        })
    }

    fn parse_moves(names: &[String]) -> Result<Vec<Choice>, ConfigError> {
        names.iter().map(|name| Self::parse_choice(name)).collect()
    }

    /// Convert to a runnable plan
    pub fn to_plan(&self) -> Result<HeadlessPlan, ConfigError> {
        self.validate()?;
        Ok(HeadlessPlan {
            player_moves: self.player_strategy.to_moves()?,
            computer_moves: Self::parse_moves(&self.computer_moves)?,
            random_seed: self.random_seed,
            max_rounds: self.max_rounds,
            output_path: self.output_path.clone(),
        })
    }
}
