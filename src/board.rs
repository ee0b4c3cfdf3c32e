//! Expedition stacks and the per-player board.

use crate::card::{Card, Color};

/// Point cost of opening an expedition.
const EXPEDITION_COST: i32 = 20;

/// Where a card may legally go during the play phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Play {
    /// Play the card onto its color's expedition.
    Expedition,
    /// Put the card on its color's discard pile.
    Discard,
}

/// One color's played-card sequence on a board.
///
/// Cards are append-only; once played they are never removed or reordered.
/// The stack itself performs no legality check — [`Board::valid_plays`] is
/// what keeps values non-decreasing.
#[derive(Debug, Clone, Default)]
pub struct Expedition {
    cards: Vec<Card>,
}

impl Expedition {
    /// Creates an empty expedition.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the highest value played, or 0 if the expedition is empty.
    ///
    /// Computed as a true maximum rather than the last card's value, so a
    /// stray ordering violation cannot corrupt the legality check.
    #[must_use]
    pub fn max_value(&self) -> u8 {
        self.cards.iter().map(|card| card.value).max().unwrap_or(0)
    }

    /// Scores the expedition.
    ///
    /// An empty expedition scores 0. Otherwise each wager card raises the
    /// score multiplier by one, and the remaining card values are summed
    /// against the 20-point cost of opening the expedition:
    /// `(total - wagers - 20) * (1 + wagers)`.
    #[must_use]
    pub fn score(&self) -> i32 {
        if self.cards.is_empty() {
            return 0;
        }

        let wagers = self.cards.iter().filter(|card| card.is_wager()).count() as i32;
        let total: i32 = self.cards.iter().map(|card| i32::from(card.value)).sum();

        (total - wagers - EXPEDITION_COST) * (1 + wagers)
    }

    /// Appends a card. Legality is the caller's responsibility.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in play order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the played values in play order.
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        self.cards.iter().map(|card| card.value).collect()
    }

    /// Returns the number of cards played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the expedition is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// One player's five expeditions, one per color.
#[derive(Debug, Clone, Default)]
pub struct Board {
    expeditions: [Expedition; 5],
}

impl Board {
    /// Creates a board with five empty expeditions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the expedition for the given color.
    #[must_use]
    pub fn expedition(&self, color: Color) -> &Expedition {
        &self.expeditions[color.index()]
    }

    /// Returns the highest value played on the given color, or 0.
    #[must_use]
    pub fn max_value(&self, color: Color) -> u8 {
        self.expedition(color).max_value()
    }

    /// Appends the card to its color's expedition without checking legality.
    ///
    /// Call [`Board::valid_plays`] first.
    pub fn play(&mut self, card: Card) {
        self.expeditions[card.color.index()].add_card(card);
    }

    /// Returns the legal plays for the card against the current board.
    ///
    /// Discarding is always legal. Playing to the expedition is legal iff
    /// the card's value is at least the expedition's current maximum, which
    /// preserves the non-decreasing invariant (equal values are fine: the
    /// three wager cards of a color may stack).
    #[must_use]
    pub fn valid_plays(&self, card: Card) -> Vec<Play> {
        let mut plays = vec![Play::Discard];
        if card.value >= self.max_value(card.color) {
            plays.push(Play::Expedition);
        }
        plays
    }

    /// Sums the scores of all five expeditions.
    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.expeditions.iter().map(Expedition::score).sum()
    }

    /// Returns the total number of cards played on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.expeditions.iter().map(Expedition::len).sum()
    }

    /// Returns each color's played values, indexed per [`Color::ALL`].
    #[must_use]
    pub fn show(&self) -> [Vec<u8>; 5] {
        Color::ALL.map(|color| self.expedition(color).values())
    }
}
