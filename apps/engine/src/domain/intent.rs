//! Player intents: the single command shape used by humans, bots and replay.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};
use super::state::Seat;

/// A card addressed either by hand position or by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardRef {
    Index(usize),
    Card(Card),
}

impl From<usize> for CardRef {
    fn from(index: usize) -> Self {
        CardRef::Index(index)
    }
}

impl From<Card> for CardRef {
    fn from(card: Card) -> Self {
        CardRef::Card(card)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerIntent {
    Bid { amount: u8 },
    Pass,
    SelectTrump { suit: Suit, hidden: bool },
    PlayCard { card: CardRef },
}

impl PlayerIntent {
    pub fn play_index(index: usize) -> Self {
        PlayerIntent::PlayCard {
            card: CardRef::Index(index),
        }
    }

    pub fn play(card: Card) -> Self {
        PlayerIntent::PlayCard {
            card: CardRef::Card(card),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PlayerIntent::Bid { .. } => "bid",
            PlayerIntent::Pass => "pass",
            PlayerIntent::SelectTrump { .. } => "select_trump",
            PlayerIntent::PlayCard { .. } => "play_card",
        }
    }
}

/// An intent that passed its guards, in acceptance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedIntent {
    pub round_no: u32,
    pub seat: Seat,
    pub intent: PlayerIntent,
}
