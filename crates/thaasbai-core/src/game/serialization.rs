use crate::game::match_state::MatchState;
use crate::model::player::{Seat, Team};
use crate::model::suit::Suit;
use crate::model::trick::Play;
use serde::{Deserialize, Serialize};

/// Read-only snapshot of everything the presentation layer renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub active_seat: Seat,
    pub led_suit: Option<Suit>,
    pub superior_suit: Option<Suit>,
    pub tricks_won: [u8; 2],
    pub tens_collected: [u8; 2],
    pub trick_number: u8,
    pub plays: Vec<Play>,
    pub match_over: bool,
    pub result: Option<ResultSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultSnapshot {
    pub winner: Option<Team>,
    pub kind: String,
    pub message: String,
}

impl GameSnapshot {
    pub fn capture(state: &MatchState) -> Self {
        let tally = state.tally();
        GameSnapshot {
            active_seat: state.active_seat(),
            led_suit: state.current_trick().lead_suit(),
            superior_suit: state.superior_suit(),
            tricks_won: tally.tricks(),
            tens_collected: tally.tens_collected(),
            trick_number: tally.trick_number(),
            plays: state.current_trick().plays().to_vec(),
            match_over: state.is_over(),
            result: state.result().map(|result| ResultSnapshot {
                winner: result.winner,
                kind: result.kind.as_str().to_string(),
                message: result.message.clone(),
            }),
        }
    }

    pub fn to_json(state: &MatchState) -> serde_json::Result<String> {
        let snapshot = Self::capture(state);
        serde_json::to_string_pretty(&snapshot)
    }
}
