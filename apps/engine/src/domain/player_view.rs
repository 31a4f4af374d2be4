//! What a seat can see at its decision point.
//!
//! [`SeatView`] is the input to every [`crate::ai::AiPlayer`] decision. It
//! carries the seat's own hand and the public table state, plus helpers
//! that answer "what may I do now" so policies never re-implement rules.

use crate::domain::bidding::{can_pass, legal_bid_amounts};
use crate::domain::state::{require_seat, MatchState, Phase, Seat};
use crate::domain::tricks::legal_indices;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    pub seat: Seat,
    pub phase: Phase,
    pub round_no: u32,
    pub dealer: Seat,
    /// Dealt order; indices line up with the hand the engine holds.
    pub hand: Vec<Card>,
    pub pass_overrides_left: u8,
    pub current_bid: u8,
    pub bid_winner: Option<Seat>,
    /// `None` until set, or while hidden from this seat.
    pub trump: Option<Suit>,
    pub current_trick: Vec<Card>,
    pub trick_scores: [u8; 2],
}

impl SeatView {
    pub fn for_seat(state: &MatchState, seat: Seat) -> Result<Self, DomainError> {
        require_seat(seat)?;
        let player = &state.players[seat as usize];
        let trump_visible = !state.trump_hidden || state.bid.bid_winner == Some(seat);
        Ok(Self {
            seat,
            phase: state.phase,
            round_no: state.round_no,
            dealer: state.dealer,
            hand: player.hand.clone(),
            pass_overrides_left: player.pass_overrides_left,
            current_bid: state.bid.current_bid,
            bid_winner: state.bid.bid_winner,
            trump: state.trump.filter(|_| trump_visible),
            current_trick: state.current_trick.clone(),
            trick_scores: state.trick_scores,
        })
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.current_trick.first().map(|c| c.suit)
    }

    /// Bid amounts that would be accepted.
    pub fn legal_bids(&self) -> Vec<u8> {
        legal_bid_amounts(self.current_bid)
    }

    /// Whether a pass would be accepted.
    pub fn can_pass(&self) -> bool {
        can_pass(&self.hand, self.pass_overrides_left, self.current_bid)
    }

    /// Hand indices that satisfy follow-suit.
    pub fn legal_plays(&self) -> Vec<usize> {
        legal_indices(&self.hand, self.lead_suit())
    }

    /// Any suit may be named trump.
    pub fn legal_trumps(&self) -> [Suit; 4] {
        Suit::DECK_ORDER
    }
}
