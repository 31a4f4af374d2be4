//! Error codes returned by the engine's guarded operations.
//!
//! Add new codes here; never pass ad-hoc strings as reason codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in `ActionResult` payloads.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Centralized reason codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rule violations
    /// Operation invoked outside its valid phase
    WrongPhase,
    /// Seat issuing the intent is not the active seat
    NotYourTurn,
    /// Bid outside [8,13] or not above the standing bid
    InvalidBidAmount,
    /// Pass rejected under the forced-bid rule
    ForcedToBid,
    /// Trump selection attempted by a non-declarer
    NotDeclarer,
    /// Hand index out of range
    InvalidCardIndex,
    /// Follow-suit violation
    IllegalMove,
    /// Card identity not held by the seat
    CardNotInHand,
    /// Seat outside 0..=3
    InvalidSeat,
    /// Card token could not be parsed
    ParseCard,
    /// General validation error
    ValidationError,

    // Registry
    MatchNotFound,
    PlayerNotInMatch,
    NotFound,
    MatchAlreadyExists,
    MatchCompromised,
    Conflict,

    // System
    /// Fatal state-machine fault
    InternalInconsistency,
    ConfigError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 19] = [
        Self::WrongPhase,
        Self::NotYourTurn,
        Self::InvalidBidAmount,
        Self::ForcedToBid,
        Self::NotDeclarer,
        Self::InvalidCardIndex,
        Self::IllegalMove,
        Self::CardNotInHand,
        Self::InvalidSeat,
        Self::ParseCard,
        Self::ValidationError,
        Self::MatchNotFound,
        Self::PlayerNotInMatch,
        Self::NotFound,
        Self::MatchAlreadyExists,
        Self::MatchCompromised,
        Self::Conflict,
        Self::InternalInconsistency,
        Self::ConfigError,
    ];

    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WrongPhase => "WRONG_PHASE",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::InvalidBidAmount => "INVALID_BID_AMOUNT",
            Self::ForcedToBid => "FORCED_TO_BID",
            Self::NotDeclarer => "NOT_DECLARER",
            Self::InvalidCardIndex => "INVALID_CARD_INDEX",
            Self::IllegalMove => "ILLEGAL_MOVE",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::ParseCard => "PARSE_CARD",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::PlayerNotInMatch => "PLAYER_NOT_IN_MATCH",
            Self::NotFound => "NOT_FOUND",
            Self::MatchAlreadyExists => "MATCH_ALREADY_EXISTS",
            Self::MatchCompromised => "MATCH_COMPROMISED",
            Self::Conflict => "CONFLICT",

            Self::InternalInconsistency => "INTERNAL_INCONSISTENCY",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.as_str() == s)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_code(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid error code: {s}")))
    }
}
