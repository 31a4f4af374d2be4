//! Per-match records written by the simulator.

use engine::domain::rules::PLAYERS;
use engine::{RoundResult, Seat, Suit};
use serde::Serialize;

use crate::simulator::MatchResult;

/// One JSONL line.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_no: u32,
    pub seed: String,
    pub timestamp: String,
    pub policy: String,
    pub rounds: Vec<RoundMetrics>,
    pub final_scores: [i32; PLAYERS],
    pub team_scores: [i32; 2],
    /// `None` on a tie.
    pub winning_team: Option<u8>,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub dealer: Seat,
    pub declarer: Option<Seat>,
    pub bid: u8,
    pub trump: Option<Suit>,
    pub trump_hidden: bool,
    pub trick_scores: [u8; 2],
    pub success: bool,
    pub score: i32,
}

impl From<&RoundResult> for RoundMetrics {
    fn from(r: &RoundResult) -> Self {
        Self {
            round_no: r.round_no,
            dealer: r.dealer,
            declarer: r.bid_winner,
            bid: r.outcome.bid,
            trump: r.trump,
            trump_hidden: r.trump_hidden,
            trick_scores: r.trick_scores,
            success: r.outcome.is_success,
            score: r.outcome.score,
        }
    }
}

/// Flat row for the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub match_no: u32,
    pub seed: String,
    pub rounds: usize,
    pub team0_score: i32,
    pub team1_score: i32,
    pub winning_team: Option<u8>,
    pub contracts_made: usize,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(m: &MatchMetrics) -> Self {
        Self {
            match_no: m.match_no,
            seed: m.seed.clone(),
            rounds: m.rounds.len(),
            team0_score: m.team_scores[0],
            team1_score: m.team_scores[1],
            winning_team: m.winning_team,
            contracts_made: m.rounds.iter().filter(|r| r.success).count(),
        }
    }
}

pub fn build_match_metrics(
    match_no: u32,
    policy: &str,
    result: &MatchResult,
    duration_ms: f64,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    // Partners always share a score
    let team_scores = [result.final_scores[0], result.final_scores[1]];
    let winning_team = match team_scores[0].cmp(&team_scores[1]) {
        std::cmp::Ordering::Greater => Some(0),
        std::cmp::Ordering::Less => Some(1),
        std::cmp::Ordering::Equal => None,
    };

    MatchMetrics {
        match_no,
        seed: result.seed.clone(),
        timestamp,
        policy: policy.to_string(),
        rounds: result.rounds.iter().map(RoundMetrics::from).collect(),
        final_scores: result.final_scores,
        team_scores,
        winning_team,
        duration_ms,
    }
}
