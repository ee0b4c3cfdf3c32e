//! Card and expedition color types.

use core::fmt;

/// Expedition color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Green.
    Green,
    /// White.
    White,
    /// Blue.
    Blue,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
}

impl Color {
    /// All five colors, in a fixed iteration order.
    pub const ALL: [Self; 5] = [
        Self::Green,
        Self::White,
        Self::Blue,
        Self::Red,
        Self::Yellow,
    ];

    /// Returns this color's position in [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Green => 0,
            Self::White => 1,
            Self::Blue => 2,
            Self::Red => 3,
            Self::Yellow => 4,
        }
    }

    /// Returns the lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::White => "white",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An expedition card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The expedition color of the card.
    pub color: Color,
    /// The value of the card (1 = wager, 2..=10 = progress).
    pub value: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the value. Values outside 1..=10
    /// are accepted but never occur in a standard deck.
    #[must_use]
    pub const fn new(color: Color, value: u8) -> Self {
        Self { color, value }
    }

    /// Returns whether this is a wager card (value 1).
    #[must_use]
    pub const fn is_wager(self) -> bool {
        self.value == 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 60;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = 8;
