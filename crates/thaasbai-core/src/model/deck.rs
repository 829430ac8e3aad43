use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `floor(len/n)` cards to each of `n` piles round-robin,
    /// consuming the deck. Remainder cards are dropped; with the standard
    /// 52 cards and 4 players every card is dealt.
    pub fn deal(mut self, n: usize) -> Vec<Vec<Card>> {
        let per_player = self.cards.len() / n;
        let mut piles = vec![Vec::with_capacity(per_player); n];
        for _ in 0..per_player {
            for pile in piles.iter_mut() {
                if let Some(card) = self.draw() {
                    pile.push(card);
                }
            }
        }
        piles
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::{DECK_SIZE, Deck};
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.cards().len(), DECK_SIZE);
        let unique: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let deck_a = Deck::shuffled_with_seed(42);
        let deck_b = Deck::shuffled_with_seed(42);
        assert_eq!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn shuffle_with_different_seeds_differs() {
        let deck_a = Deck::shuffled_with_seed(1);
        let deck_b = Deck::shuffled_with_seed(2);
        assert_ne!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn deal_four_hands_of_thirteen_covers_the_deck() {
        let piles = Deck::shuffled_with_seed(7).deal(4);
        assert_eq!(piles.len(), 4);
        let mut seen = HashSet::new();
        for pile in &piles {
            assert_eq!(pile.len(), 13);
            for card in pile {
                assert!(seen.insert(*card), "card dealt twice: {card}");
            }
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn deal_drops_remainder_cards() {
        let piles = Deck::shuffled_with_seed(7).deal(3);
        for pile in &piles {
            assert_eq!(pile.len(), 17);
        }
    }

    #[test]
    fn draw_empties_the_deck() {
        let mut deck = Deck::standard();
        for _ in 0..DECK_SIZE {
            assert!(deck.draw().is_some());
        }
        assert!(deck.draw().is_none());
    }
}
