//! AI player trait definition.

use thiserror::Error;

use crate::domain::{SeatView, Suit};
use crate::errors::domain::{DomainError, InternalKind};

/// Errors that can occur during AI decision-making.
#[derive(Debug, Error)]
pub enum AiError {
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI found nothing it was allowed to do
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        let kind = match err {
            AiError::InvalidMove(_) => InternalKind::NoLegalMoves,
            AiError::Internal(_) => InternalKind::Other("AI".into()),
        };
        DomainError::internal(kind, err.to_string())
    }
}

/// Declarer's trump decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrumpChoice {
    pub suit: Suit,
    pub hidden: bool,
}

/// Trait for AI players.
///
/// Implementations receive what their seat can see and must choose a legal
/// action. `SeatView` answers legality questions, so policies never
/// re-implement the rules.
pub trait AiPlayer: Send + Sync {
    /// Choose a bid amount, or `None` to pass.
    fn choose_bid(&self, view: &SeatView) -> Result<Option<u8>, AiError>;

    /// Choose trump; only asked of the declarer.
    fn choose_trump(&self, view: &SeatView) -> Result<TrumpChoice, AiError>;

    /// Choose a card to play, as an index into `view.hand`.
    fn choose_play(&self, view: &SeatView) -> Result<usize, AiError>;
}
