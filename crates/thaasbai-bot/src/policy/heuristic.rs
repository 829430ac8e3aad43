use super::{Policy, PolicyContext};
use thaasbai_core::model::card::Card;
use thaasbai_core::model::rank::Rank;
use thaasbai_core::model::suit::Suit;
use thaasbai_core::rules;
use tracing::{Level, event};

/// Deterministic heuristic policy: press an established superior suit, keep
/// tens protected, win tricks as cheaply as possible, and never waste a high
/// card on a trick the partnership already holds. Not search-based.
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for HeuristicPolicy {
    fn choose_play(&mut self, ctx: &PolicyContext) -> Card {
        let (card, reason) = decide(ctx);
        log_decision(ctx, card, reason);
        card
    }
}

fn decide(ctx: &PolicyContext) -> (Card, &'static str) {
    if ctx.legal.len() == 1 {
        return (ctx.legal[0], "forced");
    }

    match ctx.led_suit {
        None => choose_lead(ctx),
        Some(led) if ctx.hand.has_suit(led) => choose_follow(ctx, led),
        Some(_) => choose_void_discard(ctx),
    }
}

fn choose_lead(ctx: &PolicyContext) -> (Card, &'static str) {
    // Press an established superior suit while holding a commanding card.
    if let Some(superior) = ctx.superior {
        if let Some(best) = highest_of_suit(ctx.legal, superior) {
            if best.rank >= Rank::Queen {
                return (best, "press-superior");
            }
        }
    }

    // A ten is safe to commit when a same-suit card outranks it or its suit
    // is already the superior suit.
    for ten in ctx.legal.iter().copied().filter(|c| c.is_ten()) {
        let guarded = ctx
            .hand
            .cards_of_suit(ten.suit)
            .any(|c| c.rank > Rank::Ten);
        if guarded || ctx.superior == Some(ten.suit) {
            return (ten, "protected-ten");
        }
    }

    (lowest_card(ctx.legal), "low-lead")
}

fn choose_follow(ctx: &PolicyContext, led: Suit) -> (Card, &'static str) {
    if partner_holds_trick(ctx) {
        return (lowest_card(ctx.legal), "partner-winning");
    }

    let best_power = ctx
        .plays
        .iter()
        .map(|play| rules::effective_power(play.card, led, ctx.superior))
        .max()
        .unwrap_or(0);

    let winners: Vec<Card> = ctx
        .legal
        .iter()
        .copied()
        .filter(|&card| rules::effective_power(card, led, ctx.superior) > best_power)
        .collect();

    if !winners.is_empty() {
        // Minimal overcommitment; a ten already in the trick changes nothing
        // here, the cheapest winning card is still the play.
        return (lowest_card(&winners), "cheap-win");
    }

    (lowest_card(ctx.legal), "safe-loss")
}

fn choose_void_discard(ctx: &PolicyContext) -> (Card, &'static str) {
    if partner_holds_trick(ctx) {
        return (lowest_card(ctx.legal), "partner-winning-discard");
    }

    if let Some(superior) = ctx.superior {
        let trumps: Vec<Card> = ctx
            .legal
            .iter()
            .copied()
            .filter(|c| c.suit == superior)
            .collect();
        if !trumps.is_empty() {
            return (lowest_card(&trumps), "cheap-trump");
        }
        return (lowest_card(ctx.legal), "low-discard");
    }

    // No superior suit yet: this discard will establish one, so keep tens
    // out of it whenever possible.
    let non_tens: Vec<Card> = ctx.legal.iter().copied().filter(|c| !c.is_ten()).collect();
    if !non_tens.is_empty() {
        return (lowest_card(&non_tens), "low-establishing-discard");
    }
    (lowest_card(ctx.legal), "low-discard")
}

fn partner_holds_trick(ctx: &PolicyContext) -> bool {
    rules::trick_winner(ctx.plays, ctx.superior) == Some(ctx.seat.partner())
}

/// Lowest-card policy used throughout: prefer non-tens when the candidate
/// set is mixed, then minimum rank (suit priority settles equal ranks).
fn lowest_card(cards: &[Card]) -> Card {
    let non_tens: Vec<Card> = cards.iter().copied().filter(|c| !c.is_ten()).collect();
    let pool: &[Card] = if non_tens.is_empty() { cards } else { &non_tens };
    pool.iter()
        .copied()
        .min_by_key(|c| (c.rank.value(), c.suit.index()))
        .expect("policy invoked with at least one candidate")
}

fn highest_of_suit(cards: &[Card], suit: Suit) -> Option<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| c.suit == suit)
        .max_by_key(|c| c.rank.value())
}

fn log_decision(ctx: &PolicyContext, card: Card, reason: &'static str) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }
    event!(
        Level::DEBUG,
        seat = %ctx.seat,
        card = %card,
        reason,
        trick_plays = ctx.plays.len(),
        "bot play decision"
    );
}
