use serde::{Deserialize, Serialize};

use crate::domain::rules::{team_of, POINTS_PER_BID_TRICK};
use crate::domain::state::{wrong_phase, MatchState, Phase, Seat};
use crate::domain::Suit;
use crate::errors::domain::{DomainError, InternalKind};

/// Contract outcome for the declaring team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0 = seats 0 and 2, 1 = seats 1 and 3.
    pub team: u8,
    pub bid: u8,
    pub tricks_won: u8,
    pub is_success: bool,
    /// `bid * 10` on success, its negation on failure.
    pub score: i32,
}

/// Summary of a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_no: u32,
    pub dealer: Seat,
    pub bid_winner: Option<Seat>,
    pub trump: Option<Suit>,
    pub trump_hidden: bool,
    pub trick_scores: [u8; 2],
    pub outcome: ScoreResult,
}

/// Score a contract. Only the declaring team is scored; defenders never
/// gain or lose points.
pub fn score_contract(bid_winner: Seat, bid: u8, trick_scores: [u8; 2]) -> ScoreResult {
    let team = team_of(bid_winner);
    let tricks_won = trick_scores[team];
    let is_success = tricks_won >= bid;
    let value = i32::from(bid) * POINTS_PER_BID_TRICK;
    ScoreResult {
        team: team as u8,
        bid,
        tricks_won,
        is_success,
        score: if is_success { value } else { -value },
    }
}

pub(crate) fn calculate_score(state: &MatchState) -> Result<ScoreResult, DomainError> {
    if state.phase != Phase::Scoring {
        return Err(wrong_phase("calculate_score", state.phase));
    }
    let winner = state.bid.bid_winner.ok_or_else(|| {
        DomainError::internal(InternalKind::MissingBidWinner, "Scoring without a bid winner")
    })?;
    Ok(score_contract(winner, state.bid.current_bid, state.trick_scores))
}
