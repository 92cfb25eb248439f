//! Shared types for the scoring core.

use serde::{Deserialize, Serialize};

mod players;

pub use players::Players;

/// Information tracked about a player throughout the game.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) score: u32,
    pub(crate) history: Vec<Turn>,
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's remaining score, counting down toward zero.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Every turn this player has completed, in order, busts included.
    pub fn history(&self) -> &'_ [Turn] {
        &self.history
    }
}

/// The per-dart scores of one completed turn: up to three entries, fewer if
/// the player threw fewer darts. Busted turns are recorded like any other.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(transparent)]
pub struct Turn(pub(crate) Vec<u32>);

impl Turn {
    pub fn darts(&self) -> &'_ [u32] {
        &self.0
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl From<&[u32]> for Turn {
    fn from(darts: &[u32]) -> Self {
        Self(darts.to_vec())
    }
}
