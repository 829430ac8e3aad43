use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Raw strength of the card; the trick-context strength lives in
    /// `rules::effective_power`.
    pub const fn power(self) -> u8 {
        self.rank.value()
    }

    /// Tens are the scoring currency of the match.
    pub const fn is_ten(self) -> bool {
        matches!(self.rank, Rank::Ten)
    }

    /// Total ordering key for hand display: suit priority ascending,
    /// rank descending within suit.
    pub const fn display_key(self) -> (u8, u8) {
        (self.suit as u8, 14 - self.rank.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
