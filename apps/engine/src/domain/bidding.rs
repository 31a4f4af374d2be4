//! Bidding: hand evaluation, the forced-bid rule and trump selection.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::info;

use crate::domain::rules::{
    valid_bid_range, DEFAULT_CONTRACT, FORCED_BID_HIGH_CARDS, FORCED_BID_RANK_TOTAL, MAX_BID,
    MIN_BID, MIN_EVALUATED_SUIT_LEN, PLAYERS,
};
use crate::domain::state::{
    next_seat, require_turn, round_start_seat, wrong_phase, MatchState, Phase, Seat,
};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, InternalKind, ValidationKind};

/// Strength summary of one suit in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuitEvaluation {
    pub suit: Suit,
    pub card_count: usize,
    pub high_card_count: usize,
    pub rank_total: u32,
}

/// Evaluate every suit with at least four cards, strongest first.
///
/// Ordering: rank total, then card count, then high-card count (all
/// descending), then suit priority Spades > Hearts > Diamonds > Clubs. The
/// last key makes the order total, so equal hands always rank the same way.
pub fn evaluate_suits(hand: &[Card]) -> Vec<SuitEvaluation> {
    let mut evals: Vec<SuitEvaluation> = Suit::DECK_ORDER
        .iter()
        .filter_map(|&suit| {
            let cards = hand.iter().filter(|c| c.suit == suit);
            let card_count = cards.clone().count();
            if card_count < MIN_EVALUATED_SUIT_LEN {
                return None;
            }
            Some(SuitEvaluation {
                suit,
                card_count,
                high_card_count: cards.clone().filter(|c| c.rank.is_high()).count(),
                rank_total: cards.map(|c| u32::from(c.rank.value())).sum(),
            })
        })
        .collect();

    evals.sort_by(compare_evaluations);
    evals
}

fn compare_evaluations(a: &SuitEvaluation, b: &SuitEvaluation) -> Ordering {
    b.rank_total
        .cmp(&a.rank_total)
        .then(b.card_count.cmp(&a.card_count))
        .then(b.high_card_count.cmp(&a.high_card_count))
        .then(b.suit.cmp(&a.suit))
}

/// A hand that may not pass while no bid stands: its best suit totals at
/// least 40 and the whole hand holds five or more high cards.
pub fn is_forced_to_bid(hand: &[Card]) -> bool {
    let Some(top) = evaluate_suits(hand).into_iter().next() else {
        return false;
    };
    let high_cards = hand.iter().filter(|c| c.rank.is_high()).count();
    top.rank_total >= FORCED_BID_RANK_TOTAL && high_cards >= FORCED_BID_HIGH_CARDS
}

/// Bid amounts the active seat could place right now.
pub fn legal_bid_amounts(current_bid: u8) -> Vec<u8> {
    let floor = current_bid.saturating_add(1).max(MIN_BID);
    (floor..=MAX_BID).collect()
}

/// Whether a pass would be accepted from a seat with this hand and token count.
pub fn can_pass(hand: &[Card], pass_overrides_left: u8, current_bid: u8) -> bool {
    pass_overrides_left > 0 || current_bid != 0 || !is_forced_to_bid(hand)
}

pub(crate) fn place_bid(state: &mut MatchState, seat: Seat, amount: u8) -> Result<(), DomainError> {
    if state.phase != Phase::Bidding {
        return Err(wrong_phase("bid", state.phase));
    }
    require_turn(state, seat)?;
    if !valid_bid_range().contains(&amount) || amount <= state.bid.current_bid {
        return Err(DomainError::validation(
            ValidationKind::InvalidBidAmount,
            format!(
                "Bid {amount} must be within {MIN_BID}..={MAX_BID} and above {}",
                state.bid.current_bid
            ),
        ));
    }

    state.bid.current_bid = amount;
    state.bid.bid_winner = Some(seat);
    state.bid.pass_count = 0;
    state.bid.bidding_turn_count += 1;
    info!(match_id = %state.config.match_id, seat, amount, "Bid placed");

    advance_bidding(state);
    Ok(())
}

pub(crate) fn pass(state: &mut MatchState, seat: Seat) -> Result<(), DomainError> {
    if state.phase != Phase::Bidding {
        return Err(wrong_phase("pass", state.phase));
    }
    require_turn(state, seat)?;

    let player = &mut state.players[seat as usize];
    if player.pass_overrides_left > 0 {
        player.pass_overrides_left -= 1;
        info!(
            match_id = %state.config.match_id,
            seat,
            tokens_left = player.pass_overrides_left,
            "Pass override token consumed"
        );
    } else if state.bid.current_bid == 0 && is_forced_to_bid(&player.hand) {
        return Err(DomainError::validation(
            ValidationKind::ForcedToBid,
            format!("Seat {seat} holds a hand too strong to pass; minimum bid is {MIN_BID}"),
        ));
    }

    state.bid.pass_count += 1;
    state.bid.bidding_turn_count += 1;
    info!(match_id = %state.config.match_id, seat, "Pass");

    advance_bidding(state);
    Ok(())
}

fn advance_bidding(state: &mut MatchState) {
    let next = next_seat(state.active_seat);
    match state.bid.bid_winner {
        Some(winner) if next == winner => finish_bidding(state, winner),
        None if state.bid.pass_count as usize >= PLAYERS => {
            let winner = round_start_seat(state.dealer);
            state.bid.current_bid = DEFAULT_CONTRACT;
            state.bid.bid_winner = Some(winner);
            info!(
                match_id = %state.config.match_id,
                seat = winner,
                bid = DEFAULT_CONTRACT,
                "All seats passed; default contract imposed"
            );
            finish_bidding(state, winner);
        }
        _ => state.active_seat = next,
    }
}

fn finish_bidding(state: &mut MatchState, winner: Seat) {
    state.phase = Phase::TrumpSelection;
    state.active_seat = winner;
    info!(
        match_id = %state.config.match_id,
        winner,
        bid = state.bid.current_bid,
        "Bidding finished"
    );
}

pub(crate) fn select_trump(
    state: &mut MatchState,
    seat: Seat,
    suit: Suit,
    hidden: bool,
) -> Result<(), DomainError> {
    if state.phase != Phase::TrumpSelection {
        return Err(wrong_phase("select_trump", state.phase));
    }
    let winner = state.bid.bid_winner.ok_or_else(|| {
        DomainError::internal(
            InternalKind::MissingBidWinner,
            "Trump selection without a bid winner",
        )
    })?;
    if seat != winner {
        return Err(DomainError::validation(
            ValidationKind::NotDeclarer,
            format!("Seat {seat} is not the declarer (seat {winner})"),
        ));
    }

    state.trump = Some(suit);
    state.trump_hidden = hidden;
    state.phase = Phase::Trick;
    state.active_seat = winner;
    state.trick_starter = winner;
    info!(match_id = %state.config.match_id, seat, ?suit, hidden, "Trump selected");
    Ok(())
}
