//! Engine test support utilities
//!
//! Shared by the engine's integration tests and the match simulator's tests:
//! unified logging initialization and builders for seated matches.

pub mod logging;
pub mod tables;
