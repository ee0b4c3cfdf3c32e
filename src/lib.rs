//! A Lost Cities expedition card game engine.
//!
//! The crate provides a [`Game`] type that runs a full two-player match:
//! shuffling and dealing, alternating play/draw turns, discard recycling,
//! and expedition scoring. Both players pick uniformly among their legal
//! moves, and every random decision flows from a single seeded generator,
//! so games are exactly replayable from a seed.
//!
//! # Example
//!
//! ```
//! use lcrs::Game;
//!
//! let mut game = Game::new(42);
//! let result = game.play().expect("a fresh game runs to completion");
//! assert!(game.deck.is_empty());
//! assert_eq!(result.scores[0], game.players[0].score());
//! ```

pub mod board;
pub mod card;
pub mod deck;
pub mod discard;
pub mod error;
pub mod game;
pub mod player;
pub mod result;

// Re-export main types
pub use board::{Board, Expedition, Play};
pub use card::{Card, Color, DECK_SIZE, HAND_SIZE};
pub use deck::Deck;
pub use discard::Discard;
pub use error::TurnError;
pub use game::Game;
pub use player::Player;
pub use result::{DrawSource, GameResult, TurnRecord};
