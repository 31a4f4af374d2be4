//! Per-observer projection of a match.
//!
//! [`get_public_state`] is the only way match state leaves the engine. Each
//! observer sees their own hand and the card *count* of every other seat;
//! a hidden trump suit is visible only to the declarer.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{can_pass, legal_bid_amounts};
use crate::domain::scoring::RoundResult;
use crate::domain::state::{require_seat, BidState, MatchState, Phase, Seat};
use crate::domain::tricks::legal_move_mask;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Public info about a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub player_id: String,
    pub display_name: String,
    pub automated: bool,
    pub card_count: usize,
    pub pass_overrides_left: u8,
    pub score: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrumpPublic {
    /// `None` while unset, or while hidden from this observer.
    pub suit: Option<Suit>,
    pub hidden: bool,
}

/// A card on the table with the seat that played it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePlay {
    pub seat: Seat,
    pub card: Card,
}

/// What the observer may do right now, if it is their turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverActions {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub legal_bids: Vec<u8>,
    pub can_pass: bool,
    /// Parallel to `my_hand`; empty outside TRICK.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub legal_mask: Vec<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    pub match_id: String,
    pub phase: Phase,
    pub round_no: u32,
    pub dealer: Seat,
    pub active_seat: Seat,
    pub trick_starter: Seat,
    pub trump: Option<TrumpPublic>,
    pub current_trick: Vec<TablePlay>,
    pub seats: Vec<SeatPublic>,
    pub observer_seat: Seat,
    pub my_hand: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_actions: Option<ObserverActions>,
    pub bid: BidState,
    pub trick_scores: [u8; 2],
    pub tricks_played: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_round: Option<RoundResult>,
}

/// Build the snapshot `observer` is allowed to see.
pub fn get_public_state(state: &MatchState, observer: Seat) -> Result<PublicState, DomainError> {
    require_seat(observer)?;
    let me = &state.players[observer as usize];

    let trump = state.trump.map(|suit| {
        let declarer = state.bid.bid_winner == Some(observer);
        TrumpPublic {
            suit: (!state.trump_hidden || declarer).then_some(suit),
            hidden: state.trump_hidden,
        }
    });

    let current_trick = state
        .current_trick
        .iter()
        .enumerate()
        .map(|(i, &card)| TablePlay {
            seat: state.seat_for_trick_position(i),
            card,
        })
        .collect();

    let seats = state
        .players
        .iter()
        .map(|p| SeatPublic {
            seat: p.seat,
            player_id: p.id.clone(),
            display_name: p.name.clone(),
            automated: p.automated,
            card_count: p.hand.len(),
            pass_overrides_left: p.pass_overrides_left,
            score: p.score,
        })
        .collect();

    let my_actions = (state.phase.awaits_intent() && state.active_seat == observer).then(|| {
        match state.phase {
            Phase::Bidding => ObserverActions {
                legal_bids: legal_bid_amounts(state.bid.current_bid),
                can_pass: can_pass(&me.hand, me.pass_overrides_left, state.bid.current_bid),
                legal_mask: Vec::new(),
            },
            Phase::Trick => ObserverActions {
                legal_bids: Vec::new(),
                can_pass: false,
                legal_mask: legal_move_mask(&me.hand, state.lead_suit()),
            },
            _ => ObserverActions {
                legal_bids: Vec::new(),
                can_pass: false,
                legal_mask: Vec::new(),
            },
        }
    });

    Ok(PublicState {
        match_id: state.config.match_id.clone(),
        phase: state.phase,
        round_no: state.round_no,
        dealer: state.dealer,
        active_seat: state.active_seat,
        trick_starter: state.trick_starter,
        trump,
        current_trick,
        seats,
        observer_seat: observer,
        my_hand: me.hand.clone(),
        my_actions,
        bid: state.bid,
        trick_scores: state.trick_scores,
        tricks_played: state.completed_tricks.len(),
        previous_round: state.previous_round.clone(),
    })
}

impl MatchState {
    pub fn public_state(&self, observer: Seat) -> Result<PublicState, DomainError> {
        get_public_state(self, observer)
    }
}
