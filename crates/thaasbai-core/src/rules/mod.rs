//! Stateless rules: superior-suit establishment, effective power and trick
//! resolution, and match win-condition evaluation over the running tallies.

use crate::model::card::Card;
use crate::model::player::{Seat, Team};
use crate::model::suit::Suit;
use crate::model::trick::Play;
use core::fmt;
use serde::{Deserialize, Serialize};

pub const TRICKS_PER_MATCH: u8 = 13;
pub const TENS_PER_MATCH: u8 = 4;

/// Power bonus that lifts any superior-suit card above the highest led-suit
/// card (14).
const SUPERIOR_BONUS: u8 = 100;

/// The superior suit is fixed the first time a player, unable to follow the
/// led suit, plays off-suit. Returns the newly established suit, or `None`
/// when this play does not establish one (leading, following, or a superior
/// suit already exists).
///
/// Must be evaluated before the play is recorded: the same card's trick
/// resolution depends on the possibly-updated superior suit.
pub fn establishes_superior(
    played: Card,
    led: Option<Suit>,
    current: Option<Suit>,
) -> Option<Suit> {
    let led = led?;
    if played.suit == led || current.is_some() {
        return None;
    }
    Some(played.suit)
}

/// A card's comparative strength within one trick: superior-suit cards beat
/// everything (100 + rank), led-suit cards count their rank, and any other
/// off-suit card cannot win (0).
pub fn effective_power(card: Card, led: Suit, superior: Option<Suit>) -> u8 {
    if superior == Some(card.suit) {
        SUPERIOR_BONUS + card.power()
    } else if card.suit == led {
        card.power()
    } else {
        0
    }
}

/// Left-to-right scan replacing the provisional winner only on strictly
/// greater power, so the first play keeps any 0-power tie. Works on partial
/// tricks for mid-trick "who is winning" queries.
pub fn trick_winner(plays: &[Play], superior: Option<Suit>) -> Option<Seat> {
    let led = plays.first()?.card.suit;
    let mut best = plays[0].seat;
    let mut best_power = effective_power(plays[0].card, led, superior);
    for play in &plays[1..] {
        let power = effective_power(play.card, led, superior);
        if power > best_power {
            best = play.seat;
            best_power = power;
        }
    }
    Some(best)
}

/// Running score state, mutated only by the orchestrator at trick
/// completion and read-only everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TallySheet {
    tens: [u8; 2],
    tricks: [u8; 2],
    trick_number: u8,
}

impl TallySheet {
    pub const fn new() -> Self {
        Self {
            tens: [0; 2],
            tricks: [0; 2],
            trick_number: 0,
        }
    }

    /// For tests and simulations that need a tally in a specific state.
    pub const fn with_counts(tens: [u8; 2], tricks: [u8; 2], trick_number: u8) -> Self {
        Self {
            tens,
            tricks,
            trick_number,
        }
    }

    pub fn record_trick(&mut self, winner: Team, tens_in_trick: u8) {
        self.tricks[winner.index()] += 1;
        self.tens[winner.index()] += tens_in_trick;
        self.trick_number += 1;
    }

    pub const fn tens(&self, team: Team) -> u8 {
        self.tens[team.index()]
    }

    pub const fn tens_collected(&self) -> [u8; 2] {
        self.tens
    }

    pub const fn tricks_won(&self, team: Team) -> u8 {
        self.tricks[team.index()]
    }

    pub const fn tricks(&self) -> [u8; 2] {
        self.tricks
    }

    pub const fn trick_number(&self) -> u8 {
        self.trick_number
    }

    pub const fn tricks_remaining(&self) -> u8 {
        TRICKS_PER_MATCH - self.trick_number
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultKind {
    AllTens,
    TensAndTricks,
    TricksOnly,
    Shutout,
    FirstToSeven,
    TensSplitTricks,
    Tie,
}

impl ResultKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ResultKind::AllTens => "all-tens",
            ResultKind::TensAndTricks => "tens-and-tricks",
            ResultKind::TricksOnly => "tricks-only",
            ResultKind::Shutout => "shutout",
            ResultKind::FirstToSeven => "first-to-seven",
            ResultKind::TensSplitTricks => "tens-split-tricks",
            ResultKind::Tie => "tie",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Option<Team>,
    pub kind: ResultKind,
    pub message: String,
}

impl MatchResult {
    fn win(winner: Team, kind: ResultKind, message: String) -> Self {
        Self {
            winner: Some(winner),
            kind,
            message,
        }
    }

    fn tie() -> Self {
        Self {
            winner: None,
            kind: ResultKind::Tie,
            message: "Match tied".to_string(),
        }
    }
}

/// Evaluates the match-ending conditions after a trick resolves. `None`
/// means the match continues. Precedence:
///
/// 1. all four tens → instant win, any trick number;
/// 2. before the last trick: ≥2 tens and a trick lead the other team cannot
///    overtake even by winning every remaining trick;
/// 3. final scoring once all 13 tricks are played.
pub fn check_match_winner(tally: &TallySheet) -> Option<MatchResult> {
    for team in Team::BOTH {
        if tally.tens(team) >= TENS_PER_MATCH {
            return Some(MatchResult::win(
                team,
                ResultKind::AllTens,
                format!("{team} win: collected all four tens"),
            ));
        }
    }

    if tally.trick_number() < TRICKS_PER_MATCH {
        let remaining = tally.tricks_remaining();
        for team in Team::BOTH {
            let other = team.opponent();
            if tally.tens(team) >= 2
                && tally.tricks_won(team) > tally.tricks_won(other) + remaining
            {
                return Some(MatchResult::win(
                    team,
                    ResultKind::TensAndTricks,
                    format!("{team} win: decisive trick lead with {} tens", tally.tens(team)),
                ));
            }
        }
        return None;
    }

    Some(final_result(tally))
}

fn final_result(tally: &TallySheet) -> MatchResult {
    if tally.tens_collected() == [2, 2] {
        return split_tens_result(tally);
    }

    // One team holds three tens here (four was an instant win): more tricks
    // seals it, otherwise the tricks alone carry the other team.
    for team in Team::BOTH {
        let other = team.opponent();
        if tally.tens(team) >= 2 {
            return if tally.tricks_won(team) > tally.tricks_won(other) {
                MatchResult::win(
                    team,
                    ResultKind::TensAndTricks,
                    format!("{team} win: {} tens and the most tricks", tally.tens(team)),
                )
            } else {
                MatchResult::win(
                    other,
                    ResultKind::TricksOnly,
                    format!("{other} win on tricks alone"),
                )
            };
        }
    }

    most_tricks_fallback(tally)
}

/// Final scoring under an exact 2-2 tens split: seven tricks decides,
/// labelled a shutout when the loser took none.
fn split_tens_result(tally: &TallySheet) -> MatchResult {
    for team in Team::BOTH {
        let other = team.opponent();
        if tally.tricks_won(team) >= 7 {
            return if tally.tricks_won(other) == 0 {
                MatchResult::win(
                    team,
                    ResultKind::Shutout,
                    format!("{team} win: shutout with the tens split"),
                )
            } else {
                MatchResult::win(
                    team,
                    ResultKind::FirstToSeven,
                    format!("{team} win: seven tricks with the tens split"),
                )
            };
        }
    }

    for team in Team::BOTH {
        let other = team.opponent();
        if tally.tricks_won(team) > tally.tricks_won(other) {
            return MatchResult::win(
                team,
                ResultKind::TensSplitTricks,
                format!("{team} win: most tricks with the tens split"),
            );
        }
    }

    // Unreachable over a real 13-trick match (the trick total is odd), kept
    // so the evaluation is total over arbitrary tallies.
    MatchResult::tie()
}

fn most_tricks_fallback(tally: &TallySheet) -> MatchResult {
    for team in Team::BOTH {
        let other = team.opponent();
        if tally.tricks_won(team) > tally.tricks_won(other) {
            return MatchResult::win(
                team,
                ResultKind::TricksOnly,
                format!("{team} win on tricks"),
            );
        }
    }
    MatchResult::tie()
}

#[cfg(test)]
mod tests {
    use super::{
        MatchResult, ResultKind, TallySheet, check_match_winner, effective_power,
        establishes_superior, trick_winner,
    };
    use crate::model::card::Card;
    use crate::model::player::{Seat, Team};
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use crate::model::trick::Play;

    fn play(seat: Seat, rank: Rank, suit: Suit) -> Play {
        Play {
            seat,
            card: Card::new(rank, suit),
        }
    }

    #[test]
    fn leading_never_establishes() {
        let card = Card::new(Rank::Five, Suit::Clubs);
        assert_eq!(establishes_superior(card, None, None), None);
    }

    #[test]
    fn following_suit_never_establishes() {
        let card = Card::new(Rank::Five, Suit::Clubs);
        assert_eq!(establishes_superior(card, Some(Suit::Clubs), None), None);
    }

    #[test]
    fn first_off_suit_play_establishes() {
        let card = Card::new(Rank::Five, Suit::Clubs);
        assert_eq!(
            establishes_superior(card, Some(Suit::Hearts), None),
            Some(Suit::Clubs)
        );
    }

    #[test]
    fn later_off_suit_plays_do_not_override() {
        let card = Card::new(Rank::Five, Suit::Diamonds);
        assert_eq!(
            establishes_superior(card, Some(Suit::Hearts), Some(Suit::Clubs)),
            None
        );
    }

    #[test]
    fn power_tiers_are_disjoint() {
        let superior = Card::new(Rank::Two, Suit::Clubs);
        let led = Card::new(Rank::Ace, Suit::Hearts);
        let dead = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(effective_power(superior, Suit::Hearts, Some(Suit::Clubs)), 102);
        assert_eq!(effective_power(led, Suit::Hearts, Some(Suit::Clubs)), 14);
        assert_eq!(effective_power(dead, Suit::Hearts, Some(Suit::Clubs)), 0);
    }

    #[test]
    fn lowest_superior_card_beats_highest_led_card() {
        // 5H, 2C, KH, AS with clubs superior: powers 5, 102, 13, 0.
        let plays = [
            play(Seat::South, Rank::Five, Suit::Hearts),
            play(Seat::West, Rank::Two, Suit::Clubs),
            play(Seat::North, Rank::King, Suit::Hearts),
            play(Seat::East, Rank::Ace, Suit::Spades),
        ];
        assert_eq!(trick_winner(&plays, Some(Suit::Clubs)), Some(Seat::West));
    }

    #[test]
    fn first_play_keeps_zero_power_ties() {
        // Nobody followed, no superior suit: the lead stands.
        let plays = [
            play(Seat::North, Rank::Two, Suit::Hearts),
            play(Seat::East, Rank::Ace, Suit::Spades),
            play(Seat::South, Rank::King, Suit::Clubs),
        ];
        assert_eq!(trick_winner(&plays, None), Some(Seat::North));
    }

    #[test]
    fn partial_trick_reports_provisional_winner() {
        let plays = [
            play(Seat::South, Rank::Nine, Suit::Hearts),
            play(Seat::West, Rank::Jack, Suit::Hearts),
        ];
        assert_eq!(trick_winner(&plays, None), Some(Seat::West));
        assert_eq!(trick_winner(&[], None), None);
    }

    #[test]
    fn record_trick_updates_all_counters() {
        let mut tally = TallySheet::new();
        tally.record_trick(Team::EastWest, 2);
        tally.record_trick(Team::NorthSouth, 0);
        assert_eq!(tally.tens(Team::EastWest), 2);
        assert_eq!(tally.tricks_won(Team::EastWest), 1);
        assert_eq!(tally.tricks_won(Team::NorthSouth), 1);
        assert_eq!(tally.trick_number(), 2);
        assert_eq!(tally.tricks_remaining(), 11);
    }

    fn winner_of(result: Option<MatchResult>) -> (Team, ResultKind) {
        let result = result.expect("match should be decided");
        (result.winner.expect("winner expected"), result.kind)
    }

    #[test]
    fn all_four_tens_wins_instantly_mid_match() {
        let tally = TallySheet::with_counts([4, 0], [3, 3], 6);
        assert_eq!(
            winner_of(check_match_winner(&tally)),
            (Team::NorthSouth, ResultKind::AllTens)
        );
    }

    #[test]
    fn early_decisive_lead_ends_the_match() {
        // Trick 10 of 13: 9 > 1 + 3 remaining.
        let tally = TallySheet::with_counts([2, 2], [9, 1], 10);
        assert_eq!(
            winner_of(check_match_winner(&tally)),
            (Team::NorthSouth, ResultKind::TensAndTricks)
        );
    }

    #[test]
    fn catchable_lead_keeps_the_match_going() {
        // 8 > 2 + 3 is false: East-West can still equalize.
        let tally = TallySheet::with_counts([2, 2], [8, 2], 10);
        assert_eq!(check_match_winner(&tally), None);

        // Same margin without the two tens is also not decisive.
        let tally = TallySheet::with_counts([1, 3], [9, 1], 10);
        assert_eq!(check_match_winner(&tally), None);
    }

    #[test]
    fn split_tens_seven_tricks_wins() {
        let tally = TallySheet::with_counts([2, 2], [7, 6], 13);
        assert_eq!(
            winner_of(check_match_winner(&tally)),
            (Team::NorthSouth, ResultKind::FirstToSeven)
        );
    }

    #[test]
    fn split_tens_shutout_is_labelled() {
        let tally = TallySheet::with_counts([2, 2], [7, 0], 13);
        assert_eq!(
            winner_of(check_match_winner(&tally)),
            (Team::NorthSouth, ResultKind::Shutout)
        );
    }

    #[test]
    fn split_tens_below_seven_takes_most_tricks() {
        let tally = TallySheet::with_counts([2, 2], [5, 6], 13);
        assert_eq!(
            winner_of(check_match_winner(&tally)),
            (Team::EastWest, ResultKind::TensSplitTricks)
        );
    }

    #[test]
    fn three_tens_with_more_tricks_wins() {
        let tally = TallySheet::with_counts([3, 1], [7, 6], 13);
        assert_eq!(
            winner_of(check_match_winner(&tally)),
            (Team::NorthSouth, ResultKind::TensAndTricks)
        );
    }

    #[test]
    fn three_tens_with_fewer_tricks_loses_to_tricks_alone() {
        let tally = TallySheet::with_counts([3, 1], [6, 7], 13);
        assert_eq!(
            winner_of(check_match_winner(&tally)),
            (Team::EastWest, ResultKind::TricksOnly)
        );
    }

    #[test]
    fn equal_tricks_fallback_declares_tie() {
        // Not reachable over 13 tricks; the evaluation stays total anyway.
        let tally = TallySheet::with_counts([2, 2], [6, 6], 13);
        let result = check_match_winner(&tally).expect("final scoring always resolves");
        assert_eq!(result.kind, ResultKind::Tie);
        assert_eq!(result.winner, None);
    }

    #[test]
    fn result_kind_tags_are_stable() {
        assert_eq!(ResultKind::AllTens.as_str(), "all-tens");
        assert_eq!(ResultKind::FirstToSeven.as_str(), "first-to-seven");
        assert_eq!(ResultKind::TensSplitTricks.as_str(), "tens-split-tricks");
    }
}
