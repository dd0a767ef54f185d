//! Match Controller
//!
//! Owns the match state machine: score, the pending round, the reveal delay
//! and every transition between screens. All transitions are total: an
//! intent that does not apply to the current state is ignored.
//!
//! ## Round lifecycle
//! ```text
//! Playing ──submit_choice──▶ Playing (pending, computer hidden)
//!    ▲                          │ tick ≥ 1000ms → reveal + resolve_round
//!    │ next_round               ▼
//! RoundResult ◀──────── draw / round won / round lost
//!                              │ either side reaches 5
//!                              ▼
//!                       Victory / Defeat ──next_match──▶ Playing
//! ```

use bevy::prelude::*;
use serde::Serialize;
use smallvec::SmallVec;
use std::time::Duration;

use super::choice::{Choice, ChoiceSource, GameRng, RoundOutcome};
use super::MatchState;

/// Wins needed to take the match
pub const WINNING_SCORE: u32 = 5;

/// Delay between the player locking in and the computer's hand being shown
pub const REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Running tally for the current match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
    pub draws: u32,
}

impl Score {
    /// Total rounds resolved this match
    pub fn rounds_played(&self) -> u32 {
        self.player + self.computer + self.draws
    }

    fn reset(&mut self) {
        *self = Score::default();
    }
}

/// Fire-once notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A control was activated
    Click,
    RoundWin,
    RoundLose,
    RoundTie,
    MatchVictory,
    MatchDefeat,
}

/// Requests forwarded from controls and key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    StartMatch,
    Quit,
    Choose(Choice),
    NextRound,
    NextMatch,
    ReturnToMenu,
}

/// How a resolved round read out to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Tie,
    RoundWon,
    RoundLost,
    MatchWon,
    MatchLost,
}

impl Verdict {
    pub fn text(&self) -> &'static str {
        match self {
            Verdict::Tie => "It's a tie!",
            Verdict::RoundWon => "You win this round!",
            Verdict::RoundLost => "Computer wins this round!",
            Verdict::MatchWon => "You won the match!",
            Verdict::MatchLost => "Computer won the match!",
        }
    }

    fn state(&self) -> MatchState {
        match self {
            Verdict::Tie | Verdict::RoundWon | Verdict::RoundLost => MatchState::RoundResult,
            Verdict::MatchWon => MatchState::Victory,
            Verdict::MatchLost => MatchState::Defeat,
        }
    }

    fn cue(&self) -> Cue {
        match self {
            Verdict::Tie => Cue::RoundTie,
            Verdict::RoundWon => Cue::RoundWin,
            Verdict::RoundLost => Cue::RoundLose,
            Verdict::MatchWon => Cue::MatchVictory,
            Verdict::MatchLost => Cue::MatchDefeat,
        }
    }
}

/// Elapsed-time gate started when the player locks in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimer {
    started_at: Duration,
}

impl RevealTimer {
    pub fn start(now: Duration) -> Self {
        Self { started_at: now }
    }

    pub fn is_elapsed(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= REVEAL_DELAY
    }

    /// Fraction of the delay that has passed, clamped to [0, 1]
    pub fn progress(&self, now: Duration) -> f32 {
        let waited = now.saturating_sub(self.started_at).as_secs_f32();
        (waited / REVEAL_DELAY.as_secs_f32()).min(1.0)
    }
}

/// One entry of the per-match round history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    pub round: u32,
    pub player: Choice,
    pub computer: Choice,
    pub outcome: RoundOutcome,
    pub score_after: Score,
}

#[derive(Debug, Clone, Copy)]
struct PendingRound {
    player: Choice,
    computer: Choice,
    timer: RevealTimer,
    /// `None` until the reveal delay has passed
    outcome: Option<RoundOutcome>,
    resolved: bool,
}

/// The match state machine resource
#[derive(Resource)]
pub struct MatchController {
    state: MatchState,
    score: Score,
    round: Option<PendingRound>,
    verdict: Option<Verdict>,
    source: Box<dyn ChoiceSource>,
    /// Accumulated tick time
    clock: Duration,
    cues: SmallVec<[Cue; 4]>,
    /// Set once the entry cue for the current state has been emitted
    entry_cue_fired: bool,
    history: Vec<RoundRecord>,
    quit_requested: bool,
}

impl Default for MatchController {
    fn default() -> Self {
        Self::new(Box::new(GameRng::from_entropy()))
    }
}

impl MatchController {
    pub fn new(source: Box<dyn ChoiceSource>) -> Self {
        Self {
            state: MatchState::Menu,
            score: Score::default(),
            round: None,
            verdict: None,
            source,
            clock: Duration::ZERO,
            cues: SmallVec::new(),
            entry_cue_fired: false,
            history: Vec::new(),
            quit_requested: false,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Player's hand, visible as soon as it is locked in
    pub fn player_choice(&self) -> Option<Choice> {
        self.round.map(|round| round.player)
    }

    /// Computer's hand, hidden until the reveal delay has passed
    pub fn computer_choice(&self) -> Option<Choice> {
        self.round
            .filter(|round| round.outcome.is_some())
            .map(|round| round.computer)
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.round.and_then(|round| round.outcome)
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn result_text(&self) -> Option<&'static str> {
        self.verdict.map(|verdict| verdict.text())
    }

    /// True between `submit_choice` and the end of the round
    pub fn is_choice_pending(&self) -> bool {
        self.round.is_some()
    }

    /// How far along the reveal delay is, if a hand is waiting to be shown
    pub fn reveal_progress(&self) -> Option<f32> {
        self.round
            .filter(|round| round.outcome.is_none())
            .map(|round| round.timer.progress(self.clock))
    }

    /// Rounds resolved in the current match, oldest first
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Total tick time fed to the controller
    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    /// Take all cues emitted since the last call
    pub fn drain_cues(&mut self) -> SmallVec<[Cue; 4]> {
        std::mem::take(&mut self.cues)
    }

    /// Returns true once after a quit intent was accepted
    pub fn take_quit_request(&mut self) -> bool {
        std::mem::take(&mut self.quit_requested)
    }

    /// Dispatch an intent. Returns whether it was accepted.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::StartMatch => self.start_match(),
            Intent::Quit => self.request_quit(),
            Intent::Choose(choice) => self.submit_choice(choice),
            Intent::NextRound => self.next_round(),
            Intent::NextMatch => self.next_match(),
            Intent::ReturnToMenu => self.return_to_menu(),
        }
    }

    /// Menu → Playing with a fresh score
    pub fn start_match(&mut self) -> bool {
        if self.state != MatchState::Menu {
            return false;
        }
        self.reset_match();
        self.enter(MatchState::Playing);
        true
    }

    /// Lock in the player's hand and draw the computer's.
    ///
    /// Ignored outside Playing or while a hand is already pending.
    pub fn submit_choice(&mut self, choice: Choice) -> bool {
        if self.state != MatchState::Playing || self.round.is_some() {
            return false;
        }
        let computer = self.source.next_choice();
        self.round = Some(PendingRound {
            player: choice,
            computer,
            timer: RevealTimer::start(self.clock),
            outcome: None,
            resolved: false,
        });
        debug!("Player locked in {}", choice.name());
        true
    }

    /// Advance the clock. Reveals and resolves the pending round once the
    /// delay has passed; returns true on the tick that revealed it.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.clock += elapsed;
        if self.state != MatchState::Playing {
            return false;
        }
        let now = self.clock;
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        if round.outcome.is_some() || !round.timer.is_elapsed(now) {
            return false;
        }
        let outcome = RoundOutcome::decide(round.player, round.computer);
        round.outcome = Some(outcome);
        info!(
            "Round {}: {} vs {} -> {:?}",
            self.score.rounds_played() + 1,
            round.player.name(),
            round.computer.name(),
            outcome
        );
        self.resolve_round();
        true
    }

    /// Apply the revealed outcome to the score and move to the matching
    /// result screen. Does nothing before the reveal or after it has
    /// already been applied.
    pub fn resolve_round(&mut self) -> bool {
        if self.state != MatchState::Playing {
            return false;
        }
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        let Some(outcome) = round.outcome else {
            return false;
        };
        if round.resolved {
            return false;
        }
        round.resolved = true;
        let (player, computer) = (round.player, round.computer);

        let verdict = match outcome {
            RoundOutcome::Draw => {
                self.score.draws += 1;
                Verdict::Tie
            }
            RoundOutcome::PlayerWins => {
                self.score.player += 1;
                if self.score.player >= WINNING_SCORE {
                    Verdict::MatchWon
                } else {
                    Verdict::RoundWon
                }
            }
            RoundOutcome::ComputerWins => {
                self.score.computer += 1;
                if self.score.computer >= WINNING_SCORE {
                    Verdict::MatchLost
                } else {
                    Verdict::RoundLost
                }
            }
        };

        self.history.push(RoundRecord {
            round: self.score.rounds_played(),
            player,
            computer,
            outcome,
            score_after: self.score,
        });
        self.verdict = Some(verdict);
        self.enter(verdict.state());
        self.fire_entry_cue(verdict.cue());
        true
    }

    /// RoundResult → Playing, keeping the score
    pub fn next_round(&mut self) -> bool {
        if self.state != MatchState::RoundResult {
            return false;
        }
        self.clear_round();
        self.enter(MatchState::Playing);
        true
    }

    /// Victory/Defeat → Playing with a fresh score
    pub fn next_match(&mut self) -> bool {
        if !self.state.is_match_over() {
            return false;
        }
        self.reset_match();
        self.enter(MatchState::Playing);
        true
    }

    /// Back to the menu, abandoning any round in progress
    pub fn return_to_menu(&mut self) -> bool {
        if self.state == MatchState::Menu {
            return false;
        }
        if self.round.is_some_and(|round| !round.resolved) {
            info!("Abandoning unresolved round");
        }
        self.reset_match();
        self.enter(MatchState::Menu);
        true
    }

    /// Only honoured from the menu
    pub fn request_quit(&mut self) -> bool {
        if self.state != MatchState::Menu {
            return false;
        }
        info!("Quit requested from menu");
        self.quit_requested = true;
        true
    }

    fn enter(&mut self, state: MatchState) {
        if self.state != state {
            info!("Match state: {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        self.entry_cue_fired = false;
    }

    fn fire_entry_cue(&mut self, cue: Cue) {
        if self.entry_cue_fired {
            return;
        }
        self.entry_cue_fired = true;
        self.cues.push(cue);
    }

    fn clear_round(&mut self) {
        self.round = None;
        self.verdict = None;
    }

    fn reset_match(&mut self) {
        self.clear_round();
        self.score.reset();
        self.history.clear();
    }
}
