//! Seeded, hash-driven Fisher-Yates shuffle.
//!
//! Each swap index is derived independently from `SHA-256("{seed}:{step}")`,
//! so no PRNG state is carried between steps and any single swap can be
//! recomputed in isolation. The exact hash input, the 32-bit prefix and the
//! division by `0xFFFFFFFF` are part of the replay format: other
//! implementations must produce the same permutation for the same seed.

use sha2::{Digest, Sha256};

/// Uniform value in `[0, 1]` for `step` under `seed`.
///
/// Reads the first four digest bytes as a big-endian `u32` (the first eight
/// hex characters of the digest) and divides by `u32::MAX`.
pub fn pseudo_random(seed: &str, step: usize) -> f64 {
    let mut hasher = Sha256::new();
    hasher.update(format!("{seed}:{step}").as_bytes());
    let digest = hasher.finalize();
    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    f64::from(prefix) / f64::from(u32::MAX)
}

/// Shuffle `items` in place, deterministically for `seed`.
///
/// Walks `m` from `len` down to 1; at step `len - m` picks
/// `r = floor(pseudo_random * m)` and swaps positions `m - 1` and `r`.
pub fn shuffle_in_place<T>(items: &mut [T], seed: &str) {
    let len = items.len();
    let mut m = len;
    while m > 0 {
        let r = (pseudo_random(seed, len - m) * m as f64).floor() as usize;
        // A digest prefix of ffffffff maps to exactly 1.0
        let r = r.min(m - 1);
        m -= 1;
        items.swap(m, r);
    }
}

/// Returns a shuffled copy of `items`; the input is left untouched.
pub fn shuffle<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, seed);
    out
}
