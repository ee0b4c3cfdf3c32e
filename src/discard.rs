//! The shared per-color discard piles.

use crate::card::{Card, Color};

/// Five per-color discard piles shared by both players.
///
/// Piles grow on discard and shrink from the top on a recycle draw. Both
/// players see and may draw from every pile.
#[derive(Debug, Clone, Default)]
pub struct Discard {
    piles: [Vec<Card>; 5],
}

impl Discard {
    /// Creates five empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the card on top of its color's pile.
    pub fn discard(&mut self, card: Card) {
        self.piles[card.color.index()].push(card);
    }

    /// Removes and returns the top card of the given color's pile.
    ///
    /// Returns `None` if the pile is empty. That is a normal outcome, not
    /// an error; callers fall back to drawing from the deck.
    pub fn draw(&mut self, color: Color) -> Option<Card> {
        self.piles[color.index()].pop()
    }

    /// Returns the number of cards in the given color's pile.
    #[must_use]
    pub fn len(&self, color: Color) -> usize {
        self.piles[color.index()].len()
    }

    /// Returns the total number of discarded cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.piles.iter().map(Vec::len).sum()
    }

    /// Returns each color's discarded values, bottom to top, indexed per
    /// [`Color::ALL`].
    #[must_use]
    pub fn show(&self) -> [Vec<u8>; 5] {
        Color::ALL.map(|color| {
            self.piles[color.index()]
                .iter()
                .map(|card| card.value)
                .collect()
        })
    }
}
