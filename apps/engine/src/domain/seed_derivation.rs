//! Seed derivation utilities for deterministic match behavior.
//!
//! The match seed string is the only source of randomness. Everything that
//! needs its own stream (each round's deck, each bot's RNG) derives a
//! sub-seed from it here, so that replaying a match with the same seed and
//! the same accepted intents reproduces it exactly.

use sha2::{Digest, Sha256};

use super::state::Seat;

/// Derive the deck seed for a round.
///
/// Format is `"{match_seed}:R{round_no}"` with `round_no` 1-based. The
/// string is fed verbatim to the shuffle, so it must not change.
///
/// # Example
///
/// ```
/// use engine::domain::derive_round_seed;
/// assert_eq!(derive_round_seed("X", 1), "X:R1");
/// ```
pub fn derive_round_seed(match_seed: &str, round_no: u32) -> String {
    format!("{match_seed}:R{round_no}")
}

/// Derive the RNG seed for a bot seated at `seat`.
///
/// Uses the first eight bytes (big-endian) of `SHA-256("{match_seed}:bot:{seat}")`.
/// Different seats in the same match get unrelated streams; the same seat in
/// the same match always gets the same stream.
pub fn derive_bot_seed(match_seed: &str, seat: Seat) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(format!("{match_seed}:bot:{seat}").as_bytes());
    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}
