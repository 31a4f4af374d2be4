//! Domain-level error type used across the engine.
//!
//! Every guarded operation returns `Result<T, DomainError>`. Callers branch on
//! [`DomainError::code`] rather than on the human-readable detail string.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Player-facing rule violations. All of these are recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    WrongPhase,
    NotYourTurn,
    InvalidBidAmount,
    ForcedToBid,
    NotDeclarer,
    InvalidCardIndex,
    IllegalMove,
    CardNotInHand,
    InvalidSeat,
    ParseCard,
    Other(String),
}

/// State-machine faults. These abort the bot loop and compromise the match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InternalKind {
    DeckUnderflow,
    NoLegalMoves,
    BotNotDeclarer,
    IterationCapExceeded,
    CardConservation,
    BotActionRejected,
    MissingBidWinner,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Match,
    Player,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    MatchExists,
    MatchCompromised,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Internal inconsistency; never retried
    #[error("internal inconsistency {0:?}: {1}")]
    Internal(InternalKind, String),
    /// Malformed configuration value
    #[error("config error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn internal(kind: InternalKind, detail: impl Into<String>) -> Self {
        Self::Internal(kind, detail.into())
    }
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// Internal inconsistencies are fatal for the match that raised them.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DomainError::Internal(..))
    }

    /// Machine-checkable reason code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::WrongPhase => ErrorCode::WrongPhase,
                ValidationKind::NotYourTurn => ErrorCode::NotYourTurn,
                ValidationKind::InvalidBidAmount => ErrorCode::InvalidBidAmount,
                ValidationKind::ForcedToBid => ErrorCode::ForcedToBid,
                ValidationKind::NotDeclarer => ErrorCode::NotDeclarer,
                ValidationKind::InvalidCardIndex => ErrorCode::InvalidCardIndex,
                ValidationKind::IllegalMove => ErrorCode::IllegalMove,
                ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
                ValidationKind::InvalidSeat => ErrorCode::InvalidSeat,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::MatchExists => ErrorCode::MatchAlreadyExists,
                ConflictKind::MatchCompromised => ErrorCode::MatchCompromised,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Match => ErrorCode::MatchNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotInMatch,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            DomainError::Internal(..) => ErrorCode::InternalInconsistency,
            DomainError::Config(_) => ErrorCode::ConfigError,
        }
    }
}
