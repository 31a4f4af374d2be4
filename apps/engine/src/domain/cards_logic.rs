//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `candidate` takes the trick away from the current `best` card.
///
/// A card that matches neither the best card's suit nor trump never wins.
pub fn card_beats(candidate: Card, best: Card, trump: Option<Suit>) -> bool {
    let candidate_trump = Some(candidate.suit) == trump;
    let best_trump = Some(best.suit) == trump;
    if candidate_trump && !best_trump {
        return true;
    }
    candidate.suit == best.suit && candidate.rank > best.rank
}
