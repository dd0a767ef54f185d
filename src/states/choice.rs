//! Hand choices and round outcomes
//!
//! Defines the three hands, the fixed beats-relation between them, and the
//! sources the computer opponent draws its hand from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One of the three hands a side can throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// Get all choices in display order
    pub fn all() -> [Choice; 3] {
        [Choice::Rock, Choice::Paper, Choice::Scissors]
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    /// The hand this one defeats
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Parse a choice name (case-insensitive)
    pub fn parse(name: &str) -> Option<Choice> {
        Choice::all()
            .into_iter()
            .find(|choice| choice.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Result of a single round, from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerWins,
    ComputerWins,
    Draw,
}

impl RoundOutcome {
    /// Decide a round from both hands
    pub fn decide(player: Choice, computer: Choice) -> Self {
        if player == computer {
            RoundOutcome::Draw
        } else if player.beats() == computer {
            RoundOutcome::PlayerWins
        } else {
            RoundOutcome::ComputerWins
        }
    }
}

/// Where the computer opponent gets its hand from.
///
/// Called exactly once per round, after the player has locked in.
pub trait ChoiceSource: Send + Sync {
    fn next_choice(&mut self) -> Choice;
}

/// Uniform random opponent, optionally seeded for reproducible matches
pub struct GameRng {
    rng: StdRng,
    /// The seed used to initialize this RNG (if deterministic)
    pub seed: Option<u64>,
}

impl GameRng {
    /// Create a new GameRng with a specific seed for deterministic behavior
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a new GameRng with random entropy (non-deterministic)
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ChoiceSource for GameRng {
    fn next_choice(&mut self) -> Choice {
        Choice::all()[self.rng.gen_range(0..3)]
    }
}

/// Plays back a fixed sequence of hands, then repeats the last one.
///
/// Used by tests and scripted headless runs where the computer's hands
/// must be known in advance.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    queue: VecDeque<Choice>,
    last: Option<Choice>,
    drawn: usize,
}

impl ScriptedChoices {
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            queue: choices.into_iter().collect(),
            last: None,
            drawn: 0,
        }
    }

    /// How many hands have been drawn so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl ChoiceSource for ScriptedChoices {
    fn next_choice(&mut self) -> Choice {
        self.drawn += 1;
        let choice = self
            .queue
            .pop_front()
            .or(self.last)
            .unwrap_or(Choice::Rock);
        self.last = Some(choice);
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_relation_is_a_cycle() {
        for choice in Choice::all() {
            assert_ne!(choice, choice.beats(), "{:?} cannot beat itself", choice);
            assert_eq!(
                choice.beats().beats().beats(),
                choice,
                "beats-relation should cycle through all three hands"
            );
        }
    }

    #[test]
    fn test_decide_matches_beats_relation() {
        for player in Choice::all() {
            for computer in Choice::all() {
                let expected = if player == computer {
                    RoundOutcome::Draw
                } else if player.beats() == computer {
                    RoundOutcome::PlayerWins
                } else {
                    RoundOutcome::ComputerWins
                };
                assert_eq!(RoundOutcome::decide(player, computer), expected);
            }
        }
        assert_eq!(
            RoundOutcome::decide(Choice::Paper, Choice::Scissors),
            RoundOutcome::ComputerWins
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Choice::parse("rock"), Some(Choice::Rock));
        assert_eq!(Choice::parse(" SCISSORS "), Some(Choice::Scissors));
        assert_eq!(Choice::parse("lizard"), None);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut a = GameRng::from_seed(7);
        let mut b = GameRng::from_seed(7);
        let left: Vec<Choice> = (0..32).map(|_| a.next_choice()).collect();
        let right: Vec<Choice> = (0..32).map(|_| b.next_choice()).collect();
        assert_eq!(left, right);
        assert_eq!(a.seed, Some(7));
    }

    #[test]
    fn test_rng_draws_every_hand() {
        let mut rng = GameRng::from_seed(1234);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let index = match rng.next_choice() {
                Choice::Rock => 0,
                Choice::Paper => 1,
                Choice::Scissors => 2,
            };
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s), "200 draws should cover all hands");
    }

    #[test]
    fn test_scripted_choices_repeat_last() {
        let mut script = ScriptedChoices::new([Choice::Paper, Choice::Scissors]);
        assert_eq!(script.next_choice(), Choice::Paper);
        assert_eq!(script.next_choice(), Choice::Scissors);
        assert_eq!(script.next_choice(), Choice::Scissors);
        assert_eq!(script.drawn(), 3);
    }
}
