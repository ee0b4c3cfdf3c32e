//! Game orchestration: deal, alternating turns, final scoring.

use core::cmp::Ordering;

use log::trace;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::HAND_SIZE;
use crate::deck::Deck;
use crate::discard::Discard;
use crate::error::TurnError;
use crate::player::Player;
use crate::result::{GameResult, TurnRecord};

/// A full two-player game.
///
/// Construction shuffles the deck and deals eight cards to each player,
/// alternating one card at a time. Turns then alternate, seat 0 first,
/// until the deck runs out. Every random decision — the shuffle and the
/// three uniform choices per turn — draws from a single generator seeded
/// at construction, so a seed fully determines the game.
#[derive(Debug, Clone)]
pub struct Game {
    /// The draw pile.
    pub deck: Deck,
    /// The shared discard piles.
    pub discard: Discard,
    /// Both players, seat 0 first.
    pub players: [Player; 2],
    /// Turns taken so far.
    turns: u32,
    /// Random number generator driving every decision.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game from a seed, shuffles the deck, and deals.
    ///
    /// # Example
    ///
    /// ```
    /// use lcrs::{Game, HAND_SIZE};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.players[0].hand.len(), HAND_SIZE);
    /// assert_eq!(game.deck.remaining(), 44);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        // Alternate one card per player for eight rounds. A full deck holds
        // 60 cards, so these draws cannot come up empty.
        let mut players = [Player::new(), Player::new()];
        for _ in 0..HAND_SIZE {
            for player in &mut players {
                if let Some(card) = deck.draw() {
                    player.hand.push(card);
                }
            }
        }

        Self {
            deck,
            discard: Discard::new(),
            players,
            turns: 0,
            rng,
        }
    }

    /// Returns whether the game is over (deck exhausted).
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.deck.is_empty()
    }

    /// Returns the seat index that takes the next turn.
    #[must_use]
    pub const fn current_seat(&self) -> usize {
        (self.turns % 2) as usize
    }

    /// Returns the number of turns taken so far.
    #[must_use]
    pub const fn turns(&self) -> u32 {
        self.turns
    }

    /// Runs one full play-then-draw turn for the current seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn starts with an empty hand or the deck
    /// runs out mid-draw. Neither is reachable through [`Game::play`],
    /// which checks the deck before every turn; an error here means the
    /// game state was rigged inconsistently.
    pub fn play_turn(&mut self) -> Result<TurnRecord, TurnError> {
        let seat = self.current_seat();
        let mut record =
            self.players[seat].take_turn(&mut self.deck, &mut self.discard, &mut self.rng)?;
        record.seat = seat;
        self.turns += 1;

        trace!(
            "seat {seat}: {} -> {:?}, drew {} from {:?}, deck {}",
            record.card,
            record.play,
            record.drawn,
            record.source,
            self.deck.remaining()
        );

        Ok(record)
    }

    /// Plays the game to completion and returns the final result.
    ///
    /// The deck is checked before each turn, not after, so the last deck
    /// card is always drawn into a hand before the loop halts.
    ///
    /// # Errors
    ///
    /// Propagates the first [`TurnError`]; see [`Game::play_turn`].
    pub fn play(&mut self) -> Result<GameResult, TurnError> {
        while !self.is_over() {
            self.play_turn()?;
        }
        Ok(self.result())
    }

    /// Returns the current scores, turn count, and leader.
    #[must_use]
    pub fn result(&self) -> GameResult {
        let scores = [self.players[0].score(), self.players[1].score()];
        let winner = match scores[0].cmp(&scores[1]) {
            Ordering::Greater => Some(0),
            Ordering::Less => Some(1),
            Ordering::Equal => None,
        };

        GameResult {
            scores,
            turns: self.turns,
            winner,
        }
    }
}
