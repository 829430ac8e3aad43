use crate::game::events::GameEvent;
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::player::{Seat, SeatKind};
use crate::model::suit::Suit;
use crate::model::trick::Trick;
use crate::rules::{self, MatchResult, TallySheet};
use std::fmt;
use std::{array, mem};

/// The orchestrator: sole owner and mutator of all match state. Each
/// `play_card` is atomic — it either fully succeeds (hand debited, trick and
/// tallies updated, events queued) or rejects with no mutation at all.
#[derive(Debug, Clone)]
pub struct MatchState {
    hands: [Hand; 4],
    kinds: [SeatKind; 4],
    trick: Trick,
    superior: Option<EstablishedSuit>,
    tally: TallySheet,
    phase: MatchPhase,
    events: Vec<GameEvent>,
    seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EstablishedSuit {
    suit: Suit,
    by: Seat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchPhase {
    Playing,
    Over(MatchResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    MatchOver,
    CardNotHeld { seat: Seat, card: Card },
    MustFollowSuit { led: Suit, card: Card },
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::MatchOver => write!(f, "the match is already over"),
            PlayError::CardNotHeld { seat, card } => {
                write!(f, "{seat} does not hold {card}")
            }
            PlayError::MustFollowSuit { led, card } => {
                write!(f, "{card} does not follow the led suit {led}")
            }
        }
    }
}

impl std::error::Error for PlayError {}

impl MatchState {
    /// Deals a fresh match from a random shuffle; seat 0 (South) leads.
    pub fn new(kinds: [SeatKind; 4]) -> Self {
        Self::with_seed(kinds, rand::random())
    }

    pub fn with_seed(kinds: [SeatKind; 4], seed: u64) -> Self {
        let piles = Deck::shuffled_with_seed(seed).deal(4);
        let mut piles = piles.into_iter();
        let hands = array::from_fn(|_| {
            Hand::with_cards(piles.next().expect("deal produced four piles"))
        });

        Self {
            hands,
            kinds,
            trick: Trick::new(Seat::South),
            superior: None,
            tally: TallySheet::new(),
            phase: MatchPhase::Playing,
            events: vec![GameEvent::StateChanged],
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn kind(&self, seat: Seat) -> SeatKind {
        self.kinds[seat.index()]
    }

    pub fn current_trick(&self) -> &Trick {
        &self.trick
    }

    pub fn active_seat(&self) -> Seat {
        self.trick.expected_seat()
    }

    pub fn superior_suit(&self) -> Option<Suit> {
        self.superior.map(|e| e.suit)
    }

    pub fn superior_established_by(&self) -> Option<Seat> {
        self.superior.map(|e| e.by)
    }

    pub fn tally(&self) -> &TallySheet {
        &self.tally
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::Over(_))
    }

    pub fn result(&self) -> Option<&MatchResult> {
        match &self.phase {
            MatchPhase::Playing => None,
            MatchPhase::Over(result) => Some(result),
        }
    }

    /// The seat's currently playable cards given the led suit.
    pub fn legal_cards(&self, seat: Seat) -> Vec<Card> {
        self.hands[seat.index()].valid_cards(self.trick.lead_suit())
    }

    /// Plays `card` for the active seat. Validation happens before any
    /// mutation; a rejected play leaves the match untouched.
    pub fn play_card(&mut self, card: Card) -> Result<(), PlayError> {
        if self.is_over() {
            return Err(PlayError::MatchOver);
        }

        let seat = self.active_seat();
        let led = self.trick.lead_suit();
        let hand = &self.hands[seat.index()];
        if !hand.contains(card) {
            return Err(PlayError::CardNotHeld { seat, card });
        }
        if !hand.can_play(card, led) {
            let led = led.expect("follow-suit rejection implies a led suit");
            return Err(PlayError::MustFollowSuit { led, card });
        }

        // The establishment check runs before the play is recorded because
        // this trick's resolution must see the updated superior suit.
        if let Some(suit) = rules::establishes_superior(card, led, self.superior_suit()) {
            self.superior = Some(EstablishedSuit { suit, by: seat });
            self.events
                .push(GameEvent::SuperiorSuitEstablished { suit, by: seat });
        }

        self.hands[seat.index()]
            .play(card)
            .expect("card presence was checked above");
        self.trick
            .play(seat, card)
            .expect("active seat is the trick's expected seat");
        self.events.push(GameEvent::CardPlayed { seat, card });

        if self.trick.is_complete() {
            self.resolve_trick();
        }

        self.events.push(GameEvent::StateChanged);
        Ok(())
    }

    /// Drains the queued notifications for the presentation layer.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    fn resolve_trick(&mut self) {
        let winner = self
            .trick
            .winner(self.superior_suit())
            .expect("complete trick always has a winner");
        let tens = self.trick.tens();
        self.tally.record_trick(winner.team(), tens.len() as u8);

        let finished = mem::replace(&mut self.trick, Trick::new(winner));
        self.events.push(GameEvent::TrickCompleted {
            winner,
            plays: finished.plays().to_vec(),
            tens,
        });

        if let Some(result) = rules::check_match_winner(&self.tally) {
            self.events.push(GameEvent::MatchOver(result.clone()));
            self.phase = MatchPhase::Over(result);
        }
    }
}
