// Proptest generators for domain types.
// Cards are drawn from a shuffled full deck so every generated set is duplicate-free.

use proptest::prelude::*;

use crate::domain::deck::full_deck;
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Seat, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::ALL.to_vec())
}

/// Generate a seat (0-3)
pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// Generate a vector of N unique cards
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck()).prop_shuffle().prop_map(move |mut cards| {
        cards.truncate(count);
        cards
    })
}

/// Generate a vector of 1 to max_count unique cards
pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max_count).prop_flat_map(unique_cards)
}

/// Generate a full 13-card hand
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    unique_cards(HAND_SIZE)
}

/// Generate a hand of 1-13 cards containing no card of `excluded_suit`
pub fn hand_without_suit(excluded_suit: Suit) -> impl Strategy<Value = Vec<Card>> {
    let others: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| c.suit != excluded_suit)
        .collect();
    (1..=HAND_SIZE).prop_flat_map(move |count| {
        Just(others.clone()).prop_shuffle().prop_map(move |mut cards| {
            cards.truncate(count);
            cards
        })
    })
}

/// Four unique cards forming a complete trick
pub fn trick_cards() -> impl Strategy<Value = [Card; PLAYERS]> {
    unique_cards(PLAYERS).prop_map(|cards| [cards[0], cards[1], cards[2], cards[3]])
}

/// Optional trump suit
pub fn trump() -> impl Strategy<Value = Option<Suit>> {
    proptest::option::of(suit())
}
