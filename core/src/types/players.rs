use serde::{Deserialize, Serialize};

use super::Player;

/// The ordered roster of players in a game. Insertion order is turn order,
/// and the index into the roster is how the engine tracks whose turn it is,
/// so the order never changes after a player is added.
///
/// Mutating methods are crate-private: all writes go through the game engine
/// so that a single owner drives every state change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct Players {
    players: Vec<Player>,
}

impl Players {
    pub fn new() -> Self {
        Self { players: vec![] }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players, in play order.
    pub fn iter(&self) -> impl Iterator<Item = &'_ Player> {
        self.players.iter()
    }

    pub fn as_slice(&self) -> &'_ [Player] {
        &self.players
    }

    pub fn get(&self, index: usize) -> Option<&'_ Player> {
        self.players.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&'_ mut Player> {
        self.players.get_mut(index)
    }

    /// Add a player to the roster (by name) with the given starting score.
    /// Names are unique: adding an existing name leaves the roster unchanged
    /// and returns `false`.
    pub(crate) fn add(&mut self, name: &str, starting_score: u32) -> bool {
        if self.players.iter().any(|p| p.name == name) {
            return false;
        }
        self.players.push(Player {
            name: name.to_string(),
            score: starting_score,
            history: vec![],
        });
        true
    }

    /// Restore every player's score to the starting score and clear every
    /// history. Roster membership and order are untouched.
    pub(crate) fn reset_all(&mut self, starting_score: u32) {
        for p in self.players.iter_mut() {
            p.score = starting_score;
            p.history.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Turn;
    use super::Players;

    #[test]
    pub fn test_add_preserves_order_and_ignores_duplicates() {
        let mut players = Players::new();
        assert!(players.add("alice", 501));
        assert!(players.add("bob", 501));
        assert!(!players.add("alice", 501));

        assert_eq!(players.len(), 2);
        let names: Vec<_> = players.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    pub fn test_reset_all_restores_scores_and_clears_history() {
        let mut players = Players::new();
        players.add("alice", 301);
        players.add("bob", 301);

        {
            let alice = players.get_mut(0).unwrap();
            alice.score = 121;
            alice.history.push(Turn(vec![60, 60, 60]));
        }

        players.reset_all(301);
        for p in players.iter() {
            assert_eq!(p.score(), 301);
            assert!(p.history().is_empty());
        }
    }
}
