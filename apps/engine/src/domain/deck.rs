//! Seeded 52-card deck for one round.

use super::cards_types::{Card, Rank, Suit};
use super::shuffle::shuffle_in_place;
use crate::domain::rules::DECK_SIZE;
use crate::errors::domain::{DomainError, InternalKind};

/// Generate a full 52-card deck in generation order (S, H, D, C; 2..A).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::DECK_ORDER {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Shuffled card sequence owned by a round. Shrinks only via [`Deck::deal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the ordered deck and shuffle it once under `seed`.
    pub fn new(seed: &str) -> Self {
        let mut cards = full_deck();
        shuffle_in_place(&mut cards, seed);
        Self { cards }
    }

    /// Remove and return `count` cards from the front.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DomainError> {
        if count > self.cards.len() {
            return Err(DomainError::internal(
                InternalKind::DeckUnderflow,
                format!(
                    "Deck underflow: requested {count}, remaining {}",
                    self.cards.len()
                ),
            ));
        }
        Ok(self.cards.drain(..count).collect())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
