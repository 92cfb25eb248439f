//! Core rules for an 01-style darts scorer: throw-notation parsing and the
//! turn-by-turn countdown state machine.
//!
//! Board rendering, settings, and input collection belong to the hosting UI;
//! this crate only owns game state. The expected flow is that the UI gathers
//! up to three notation strings per turn, validates and converts them with
//! [`notation`], and hands the resulting numbers to [`game::DartsGame`].

pub mod game;
pub mod notation;
pub mod types;

pub use game::{DartsGame, GameError, Phase, DEFAULT_STARTING_SCORE};
pub use notation::{parse_score, parse_turn, validate, NotationError, Throw};
pub use types::{Player, Players, Turn};
