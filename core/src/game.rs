//! The turn engine for an 01-style countdown game.
//!
//! A [`DartsGame`] owns the roster, the current-turn pointer, and the
//! countdown rules. It consumes already-parsed per-dart scores (see
//! [`crate::notation`] for getting those out of raw text) and applies the
//! bust and win rules turn by turn. It does not enforce the double-out
//! checkout rule; extending the bust branch is the place to add that.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Player, Players, Turn};

/// The conventional countdown target.
pub const DEFAULT_STARTING_SCORE: u32 = 501;

/// Where in its lifecycle a game is. Derived from the roster and the scores
/// on every call rather than stored, so it can never drift out of sync.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum Phase {
    /// No players yet; the roster is still being seeded.
    Setup,
    /// At least one player and nobody has checked out.
    InProgress,
    /// Somebody reached exactly zero. Only [`DartsGame::reset`] (or a new
    /// game) leaves this phase.
    Complete,
}

/// State and rules for one darts game.
///
/// The instance is single-writer: mutators take `&mut self`, and the engine
/// never copies state defensively. Callers that share a game across tasks
/// must serialize access themselves.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct DartsGame {
    starting_score: u32,
    players: Players,
    current_player_index: usize,
}

impl DartsGame {
    /// Create a game counting down from `starting_score`. The starting score
    /// is fixed for the life of the instance; pick a new one by constructing
    /// a new game.
    pub fn new(starting_score: u32) -> Result<Self, GameError> {
        if starting_score == 0 {
            return Err(GameError::InvalidStartingScore);
        }
        Ok(Self {
            starting_score,
            players: Players::new(),
            current_player_index: 0,
        })
    }

    pub fn starting_score(&self) -> u32 {
        self.starting_score
    }

    /// The roster in turn order.
    pub fn players(&self) -> &'_ [Player] {
        self.players.as_slice()
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// The player who throws next. `None` only while the roster is empty.
    pub fn current_player(&self) -> Option<&'_ Player> {
        self.players.get(self.current_player_index)
    }

    /// The first player in turn order whose score is exactly zero.
    pub fn winner(&self) -> Option<&'_ Player> {
        self.players.iter().find(|p| p.score == 0)
    }

    pub fn phase(&self) -> Phase {
        if self.players.is_empty() {
            Phase::Setup
        } else if self.winner().is_some() {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }

    /// Add a player with a fresh starting score and empty history. Adding a
    /// name that is already on the roster is ignored with a warning so a
    /// caller's setup flow is never interrupted.
    pub fn add_player(&mut self, name: &str) {
        if !self.players.add(name, self.starting_score) {
            tracing::warn!(name, "player already exists, ignoring");
        }
    }

    /// Record the current player's turn and pass play to the next player.
    ///
    /// `darts` holds the already-parsed score of each dart thrown, at most
    /// three; fewer entries simply contribute less. A turn that would take
    /// the score below zero or leave exactly one is a bust: the score stands,
    /// but the turn is still appended to the player's history and play still
    /// rotates. Rotation also happens on the turn that wins the game, so
    /// callers check [`DartsGame::winner`] rather than whose turn it is.
    ///
    /// With no players, or once a winner exists, the call leaves all state
    /// unchanged.
    pub fn record_turn(&mut self, darts: &[u32]) {
        if self.winner().is_some() {
            return;
        }
        let num_players = self.players.len();
        let player = match self.players.get_mut(self.current_player_index) {
            Some(p) => p,
            None => return,
        };

        let turn_total: u32 = darts.iter().sum();
        match player.score.checked_sub(turn_total) {
            // Below zero or landing on 1 cannot be checked out; the score stands.
            None | Some(1) => {
                tracing::debug!(player = %player.name, turn_total, "bust");
            }
            Some(new_score) => player.score = new_score,
        }
        player.history.push(Turn::from(darts));

        self.current_player_index = (self.current_player_index + 1) % num_players;
    }

    /// Start the same game over: every score back to the starting score,
    /// every history cleared, play back to the first player. The roster is
    /// kept as-is.
    pub fn reset(&mut self) {
        self.players.reset_all(self.starting_score);
        self.current_player_index = 0;
    }
}

impl Default for DartsGame {
    fn default() -> Self {
        Self {
            starting_score: DEFAULT_STARTING_SCORE,
            players: Players::new(),
            current_player_index: 0,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("starting score must be positive")]
    InvalidStartingScore,
}
