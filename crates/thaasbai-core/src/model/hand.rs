use crate::model::card::Card;
use crate::model::suit::Suit;
use std::fmt;
use std::vec::Vec;

#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandError {
    /// Requested card is not held. Callers that respect `valid_cards`
    /// never see this; it guards against programming errors.
    CardNotHeld(Card),
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandError::CardNotHeld(card) => write!(f, "{card} is not in this hand"),
        }
    }
}

impl std::error::Error for HandError {}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit == suit)
    }

    pub fn cards_of_suit(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.suit == suit)
    }

    /// Playable cards under the follow-suit rule: everything when leading,
    /// only led-suit cards while any are held, the whole hand when void.
    pub fn valid_cards(&self, led: Option<Suit>) -> Vec<Card> {
        match led {
            Some(suit) if self.has_suit(suit) => self.cards_of_suit(suit).collect(),
            _ => self.cards.clone(),
        }
    }

    pub fn can_play(&self, card: Card, led: Option<Suit>) -> bool {
        self.valid_cards(led).contains(&card)
    }

    /// Removes and returns the exact card.
    pub fn play(&mut self, card: Card) -> Result<Card, HandError> {
        if self.remove(card) {
            Ok(card)
        } else {
            Err(HandError::CardNotHeld(card))
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn sort(&mut self) {
        self.cards.sort_by_key(|c| c.display_key());
    }
}
