//! Baseline AI: the house policy for automated seats.
//!
//! Bids the minimum only when the hand is forced and nothing stands, names
//! its strongest evaluated suit as open trump, and plays a uniformly random
//! legal card.

use std::sync::Mutex;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use super::trait_def::{AiError, AiPlayer, TrumpChoice};
use crate::domain::rules::MIN_BID;
use crate::domain::{evaluate_suits, is_forced_to_bid, SeatView, Suit};

pub struct Baseline {
    /// Seeded streams must not change across rand releases.
    rng: Mutex<ChaCha8Rng>,
}

impl Baseline {
    pub const NAME: &'static str = "Baseline";
    pub const VERSION: &'static str = "1.0.0";

    /// `seed` = `None` draws from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for Baseline {
    fn choose_bid(&self, view: &SeatView) -> Result<Option<u8>, AiError> {
        if view.current_bid == 0 && is_forced_to_bid(&view.hand) {
            return Ok(Some(MIN_BID));
        }
        if !view.can_pass() {
            return Err(AiError::InvalidMove(format!(
                "Seat {} can neither bid {MIN_BID} nor pass",
                view.seat
            )));
        }
        Ok(None)
    }

    fn choose_trump(&self, view: &SeatView) -> Result<TrumpChoice, AiError> {
        let suit = evaluate_suits(&view.hand)
            .first()
            .map_or(Suit::Spades, |e| e.suit);
        Ok(TrumpChoice {
            suit,
            hidden: false,
        })
    }

    fn choose_play(&self, view: &SeatView) -> Result<usize, AiError> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }
}
