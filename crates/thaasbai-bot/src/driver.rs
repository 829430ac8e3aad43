use crate::policy::{Policy, PolicyContext};
use thaasbai_core::game::match_state::{MatchState, PlayError};
use thaasbai_core::model::player::SeatKind;

/// Plays out every computer seat in turn until the match ends or the active
/// seat is human. Control returns to the caller only at a human decision
/// point or a terminal state, so no human turn is ever skipped.
pub fn run_computer_turns(
    state: &mut MatchState,
    policy: &mut dyn Policy,
) -> Result<(), PlayError> {
    while !state.is_over() {
        let seat = state.active_seat();
        if state.kind(seat) == SeatKind::Human {
            break;
        }

        let card = {
            let legal = state.legal_cards(seat);
            let trick = state.current_trick();
            let ctx = PolicyContext {
                seat,
                hand: state.hand(seat),
                legal: &legal,
                led_suit: trick.lead_suit(),
                superior: state.superior_suit(),
                plays: trick.plays(),
            };
            policy.choose_play(&ctx)
        };
        state.play_card(card)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_computer_turns;
    use crate::policy::HeuristicPolicy;
    use thaasbai_core::game::match_state::MatchState;
    use thaasbai_core::model::player::{Seat, SeatKind};

    #[test]
    fn all_computer_match_runs_to_completion() {
        let mut state = MatchState::with_seed([SeatKind::Computer; 4], 21);
        let mut policy = HeuristicPolicy::new();
        run_computer_turns(&mut state, &mut policy).unwrap();
        assert!(state.is_over());
        assert!(state.result().is_some());
    }

    #[test]
    fn driver_stops_at_the_human_seat() {
        let kinds = [
            SeatKind::Human,
            SeatKind::Computer,
            SeatKind::Computer,
            SeatKind::Computer,
        ];
        let mut state = MatchState::with_seed(kinds, 21);
        let mut policy = HeuristicPolicy::new();

        // South is human and leads trick 1: the driver must not move.
        run_computer_turns(&mut state, &mut policy).unwrap();
        assert_eq!(state.active_seat(), Seat::South);
        assert_eq!(state.current_trick().plays().len(), 0);

        // After the human plays, the computers continue until South's next
        // decision point or the end of the match.
        let card = state.legal_cards(Seat::South)[0];
        state.play_card(card).unwrap();
        run_computer_turns(&mut state, &mut policy).unwrap();
        assert!(state.is_over() || state.active_seat() == Seat::South);
        assert!(state.current_trick().plays().len() < 4);
    }
}
