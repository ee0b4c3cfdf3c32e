//! The face-down draw pile.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Color, DECK_SIZE};

/// The shared draw pile.
///
/// A full deck holds 60 cards: for each color, three wager cards of value 1
/// plus one card each of values 2 through 10. The pile depletes
/// monotonically and is never refilled; the game ends when it runs out.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the pile, top card last.
    pub cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for color in Color::ALL {
            for value in [1, 1, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10] {
                cards.push(Card::new(color, value));
            }
        }

        Self { cards }
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` if the pile is empty.
    ///
    /// The game loop only runs turns while the pile is non-empty, so a
    /// `None` outside rigged state indicates an engine bug.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
