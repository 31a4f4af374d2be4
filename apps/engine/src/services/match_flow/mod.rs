//! Match flow: applies intents for a live match and resolves the automated
//! turns that follow them.

mod ai_coordinator;

pub use ai_coordinator::{run_bots, BotSeats, MAX_RETRIES_PER_ACTION};
