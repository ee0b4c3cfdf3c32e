//! Player state and the play/draw turn state machine.

use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Play};
use crate::card::{Card, Color};
use crate::deck::Deck;
use crate::discard::Discard;
use crate::error::TurnError;
use crate::result::{DrawSource, TurnRecord};

/// One player's hand and board.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Cards currently held.
    pub hand: Vec<Card>,
    /// The player's five expeditions.
    pub board: Board,
}

impl Player {
    /// Creates a player with an empty hand and board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the top card of the deck into the hand.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::EmptyDeck`] if the deck is empty.
    pub fn draw_from_deck(&mut self, deck: &mut Deck) -> Result<(), TurnError> {
        let card = deck.draw().ok_or(TurnError::EmptyDeck)?;
        self.hand.push(card);
        Ok(())
    }

    /// Takes a full turn: play or discard one card, then draw one card.
    ///
    /// All choices are uniform over the legal options. The seat field of
    /// the returned record is filled in by the caller's [`Game`].
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::EmptyHand`] if the hand is empty at the start
    /// of the play phase, or [`TurnError::EmptyDeck`] if a deck draw is
    /// required with no cards left. Both are engine faults, not in-game
    /// outcomes.
    ///
    /// [`Game`]: crate::game::Game
    pub fn take_turn(
        &mut self,
        deck: &mut Deck,
        discard: &mut Discard,
        rng: &mut ChaCha8Rng,
    ) -> Result<TurnRecord, TurnError> {
        let (card, play) = self.play_phase(discard, rng)?;
        let (drawn, source) = self.draw_phase(deck, discard, card.color, rng)?;

        Ok(TurnRecord {
            seat: 0,
            card,
            play,
            drawn,
            source,
        })
    }

    /// Play phase: pick one held card uniformly, then one of its legal
    /// plays uniformly, and apply that single mutation.
    fn play_phase(
        &mut self,
        discard: &mut Discard,
        rng: &mut ChaCha8Rng,
    ) -> Result<(Card, Play), TurnError> {
        if self.hand.is_empty() {
            return Err(TurnError::EmptyHand);
        }

        // Legality snapshot for the whole hand before anything mutates.
        let legal: Vec<Vec<Play>> = self
            .hand
            .iter()
            .map(|&card| self.board.valid_plays(card))
            .collect();

        let index = rng.random_range(0..self.hand.len());
        let plays = &legal[index];
        let play = plays[rng.random_range(0..plays.len())];

        let card = self.hand.remove(index);
        match play {
            Play::Expedition => self.board.play(card),
            Play::Discard => discard.discard(card),
        }

        Ok((card, play))
    }

    /// Draw phase: pick a color uniformly, then a source uniformly from
    /// that color's candidates.
    ///
    /// The deck is always a candidate; the color's discard pile only when
    /// it holds a card and the color was not the one just played, so the
    /// card put down this turn cannot come straight back.
    fn draw_phase(
        &mut self,
        deck: &mut Deck,
        discard: &mut Discard,
        last_played: Color,
        rng: &mut ChaCha8Rng,
    ) -> Result<(Card, DrawSource), TurnError> {
        let color = Color::ALL[rng.random_range(0..Color::ALL.len())];

        let mut sources = vec![DrawSource::Deck];
        if discard.len(color) > 0 && color != last_played {
            sources.push(DrawSource::Discard);
        }
        let source = sources[rng.random_range(0..sources.len())];

        if source == DrawSource::Discard {
            if let Some(card) = discard.draw(color) {
                self.hand.push(card);
                return Ok((card, DrawSource::Discard));
            }
            // The eligibility check saw a card and the turn is synchronous,
            // so this branch is unreachable in practice; recover anyway.
            debug!("{color} discard pile emptied before draw, falling back to deck");
        }

        let card = deck.draw().ok_or(TurnError::EmptyDeck)?;
        self.hand.push(card);
        Ok((card, DrawSource::Deck))
    }

    /// Returns the total score of the player's board.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.board.total_score()
    }

    /// Returns the held cards as `(color, value)` pairs.
    #[must_use]
    pub fn show_hand(&self) -> Vec<(Color, u8)> {
        self.hand.iter().map(|card| (card.color, card.value)).collect()
    }
}
