use crate::model::card::Card;
use crate::model::player::Seat;
use crate::model::suit::Suit;
use crate::model::trick::Play;
use crate::rules::MatchResult;

/// Discrete notifications queued by the orchestrator and drained by the
/// presentation layer via `MatchState::take_events`. Every successful
/// mutating operation ends with a `StateChanged` so consumers can refresh
/// once per drain.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    CardPlayed {
        seat: Seat,
        card: Card,
    },
    /// Fired at most once per match.
    SuperiorSuitEstablished {
        suit: Suit,
        by: Seat,
    },
    TrickCompleted {
        winner: Seat,
        plays: Vec<Play>,
        tens: Vec<Card>,
    },
    MatchOver(MatchResult),
    StateChanged,
}
