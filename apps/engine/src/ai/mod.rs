//! AI player module - handles automated seat decisions.
//!
//! This module provides:
//! - the `AiPlayer` trait every policy implements
//! - `Baseline`: the default policy for automated seats
//! - `RandomPlayer`: uniformly random legal moves (seedable for tests)
//! - a static registry of policies by name

mod baseline;
mod random;
pub mod registry;
mod trait_def;

pub use baseline::Baseline;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
pub use trait_def::{AiError, AiPlayer, TrumpChoice};

/// Create an AI player from a registered policy name.
///
/// Returns `None` if the name is not registered.
pub fn create_ai(ai_type: &str, seed: Option<u64>) -> Option<Box<dyn AiPlayer>> {
    let factory = by_name(ai_type)?;
    Some((factory.make)(seed))
}
