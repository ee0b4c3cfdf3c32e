//! Plain-data summary types reported to drivers.

use crate::board::Play;
use crate::card::Card;

/// Where the draw phase took its card from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSource {
    /// Drawn blind from the top of the deck.
    Deck,
    /// Recycled from the top of a discard pile.
    Discard,
}

/// Record of a single completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    /// The seat that took the turn (0 or 1).
    pub seat: usize,
    /// The card played or discarded.
    pub card: Card,
    /// Whether the card went to the expedition or the discard pile.
    pub play: Play,
    /// The card drawn at the end of the turn.
    pub drawn: Card,
    /// Where the drawn card came from.
    pub source: DrawSource,
}

/// Final result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Each player's final score, indexed by seat. Scores can be negative.
    pub scores: [i32; 2],
    /// Total number of turns taken.
    pub turns: u32,
    /// The winning seat, or `None` on a tie.
    pub winner: Option<usize>,
}
