//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur while taking a turn.
///
/// Both variants indicate a programming-logic fault rather than a
/// recoverable condition: the game loop stops before the deck empties, and
/// the play/draw balance keeps hands populated. Neither is ever retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The play phase started with an empty hand.
    #[error("play phase started with an empty hand")]
    EmptyHand,
    /// The deck was empty when a draw was required.
    #[error("no cards left in the deck")]
    EmptyDeck,
}
