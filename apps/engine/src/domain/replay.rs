//! Rebuild a match from its seed, seating and accepted intents.

use crate::domain::intent::AcceptedIntent;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{MatchConfig, MatchState, SeatAssignment};
use crate::errors::domain::{DomainError, ValidationKind};

/// Re-apply `log` to a freshly dealt match.
///
/// A later round is dealt when the next entry's round number is ahead of
/// the state's, exactly as `start_next_round` would have been called live.
/// Every entry must be accepted again; a rejection means the log does not
/// belong to this seed or seating.
pub fn replay_match(
    config: MatchConfig,
    seats: [SeatAssignment; PLAYERS],
    pass_overrides: u8,
    log: &[AcceptedIntent],
) -> Result<MatchState, DomainError> {
    let mut state = MatchState::new(config, seats, pass_overrides)?;
    state.start_round()?;

    for (i, entry) in log.iter().enumerate() {
        if entry.round_no < state.round_no() {
            return Err(DomainError::validation(
                ValidationKind::Other("REPLAY_ORDER".into()),
                format!(
                    "Log entry {i} is for round {} but the match is in round {}",
                    entry.round_no,
                    state.round_no()
                ),
            ));
        }
        while state.round_no() < entry.round_no {
            state.start_next_round()?;
        }
        state.apply_intent(entry.seat, &entry.intent)?;
    }
    Ok(state)
}
