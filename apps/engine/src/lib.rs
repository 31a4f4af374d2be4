#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod protocol;
pub mod services;
pub mod telemetry;


// Re-exports for public API
pub use config::EngineConfig;
pub use domain::{
    Card, IntentOutcome, MatchConfig, MatchState, Phase, PlayerIntent, PublicState, Rank,
    RoundResult, Seat, SeatAssignment, SeatView, Suit,
};
pub use errors::{DomainError, ErrorCode};
pub use protocol::ActionResult;
pub use services::{MatchRegistry, MatchSession};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
