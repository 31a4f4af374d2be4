//! Random AI player - makes random legal moves.
//!
//! Useful as a stress opponent: it exercises every bid amount, hidden and
//! open trump, and every legal card.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer, TrumpChoice};
use crate::domain::SeatView;

/// AI that chooses uniformly among legal actions.
///
/// Thread-safe through a `Mutex<StdRng>`; a seed makes it reproducible.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(f(&mut rng))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_bid(&self, view: &SeatView) -> Result<Option<u8>, AiError> {
        let mut options: Vec<Option<u8>> = view.legal_bids().into_iter().map(Some).collect();
        if view.can_pass() {
            options.push(None);
        }
        if options.is_empty() {
            return Err(AiError::InvalidMove("No legal bids available".into()));
        }

        self.with_rng(|rng| options.choose(rng).copied())?
            .ok_or_else(|| AiError::Internal("Failed to choose random bid".into()))
    }

    fn choose_trump(&self, view: &SeatView) -> Result<TrumpChoice, AiError> {
        let suits = view.legal_trumps();
        self.with_rng(|rng| {
            suits.choose(rng).copied().map(|suit| TrumpChoice {
                suit,
                hidden: rng.random_bool(0.5),
            })
        })?
        .ok_or_else(|| AiError::Internal("Failed to choose random trump".into()))
    }

    fn choose_play(&self, view: &SeatView) -> Result<usize, AiError> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }
        self.with_rng(|rng| legal.choose(rng).copied())?
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }
}
