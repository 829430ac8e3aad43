mod heuristic;

pub use heuristic::HeuristicPolicy;

use thaasbai_core::model::card::Card;
use thaasbai_core::model::hand::Hand;
use thaasbai_core::model::player::Seat;
use thaasbai_core::model::suit::Suit;
use thaasbai_core::model::trick::Play;

/// Everything a policy may look at when choosing a card: the seat's own
/// hand, its legal moves, and the public trick state. Borrowed from the
/// match state for the duration of one decision.
pub struct PolicyContext<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub legal: &'a [Card],
    pub led_suit: Option<Suit>,
    pub superior: Option<Suit>,
    pub plays: &'a [Play],
}

/// Unified decision interface so alternative policies can drive a seat.
pub trait Policy {
    /// Choose one card from `ctx.legal` (never empty when called).
    fn choose_play(&mut self, ctx: &PolicyContext) -> Card;
}
