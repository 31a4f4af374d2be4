//! In-memory match runner.
//!
//! Every seat is automated, so creating a match and advancing it round by
//! round drives the whole thing through the registry's bot orchestration.

use engine::config::EngineConfig;
use engine::domain::rules::PLAYERS;
use engine::{DomainError, MatchConfig, MatchRegistry, RoundResult, SeatAssignment};
use tracing::debug;

pub struct MatchResult {
    pub seed: String,
    pub rounds: Vec<RoundResult>,
    pub final_scores: [i32; PLAYERS],
}

pub struct Simulator {
    registry: MatchRegistry,
    rounds: u32,
}

impl Simulator {
    pub fn new(config: EngineConfig, rounds: u32) -> Self {
        Self {
            registry: MatchRegistry::new(config),
            rounds: rounds.max(1),
        }
    }

    pub fn policy(&self) -> &str {
        &self.registry.config().bot_policy
    }

    /// Play one match of `self.rounds` rounds from `seed`.
    pub fn simulate_match(&self, match_no: u32, seed: &str) -> Result<MatchResult, DomainError> {
        let match_id = format!("sim-{match_no}");
        let seats: [SeatAssignment; PLAYERS] = std::array::from_fn(|seat| {
            SeatAssignment::bot(format!("bot-{seat}"), format!("{} {seat}", self.policy()))
        });

        self.registry
            .create_match(MatchConfig::new(match_id.as_str(), seed), seats)?;
        let played = self.play_rounds(&match_id);
        let scores = self.registry.public_state(&match_id, 0);
        self.registry.remove_match(&match_id);

        let rounds = played?;
        let view = scores?;
        let mut final_scores = [0; PLAYERS];
        for seat in &view.seats {
            final_scores[seat.seat as usize] = seat.score;
        }
        Ok(MatchResult {
            seed: seed.to_string(),
            rounds,
            final_scores,
        })
    }

    fn play_rounds(&self, match_id: &str) -> Result<Vec<RoundResult>, DomainError> {
        let mut rounds = Vec::with_capacity(self.rounds as usize);
        for _ in 1..self.rounds {
            let result = self.registry.advance_round(match_id)?;
            debug!(match_id, round_no = result.round_no, score = result.outcome.score, "Round complete");
            rounds.push(result);
        }
        rounds.push(self.registry.finish_match(match_id)?);
        Ok(rounds)
    }
}
