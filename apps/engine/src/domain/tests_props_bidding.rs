//! Property tests for hand evaluation and the forced-bid rule.
//!
//! Properties tested:
//! - Evaluation covers exactly the suits with four or more cards
//! - Evaluation order is total and independent of hand order
//! - The forced-bid rule matches its two thresholds
//! - A forced hand can always bid, and can pass only with a token or a standing bid

use proptest::prelude::*;

use crate::domain::bidding::{can_pass, evaluate_suits, is_forced_to_bid, legal_bid_amounts};
use crate::domain::rules::{MAX_BID, MIN_BID};
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: only suits with at least four cards are evaluated, each once
    #[test]
    fn prop_evaluation_covers_long_suits(hand in crate::domain::test_gens::hand()) {
        let evals = evaluate_suits(&hand);
        for suit in crate::domain::Suit::DECK_ORDER {
            let count = hand.iter().filter(|c| c.suit == suit).count();
            let listed = evals.iter().filter(|e| e.suit == suit).count();
            prop_assert_eq!(listed, usize::from(count >= 4), "suit {:?}", suit);
        }
        for e in &evals {
            prop_assert!(e.high_card_count <= e.card_count);
        }
    }

    /// Property: order is descending on (rank_total, card_count, high cards, suit)
    #[test]
    fn prop_evaluation_is_sorted(hand in crate::domain::test_gens::hand()) {
        let evals = evaluate_suits(&hand);
        for pair in evals.windows(2) {
            let key = |e: &crate::domain::SuitEvaluation| {
                (e.rank_total, e.card_count, e.high_card_count, e.suit)
            };
            prop_assert!(key(&pair[0]) > key(&pair[1]));
        }
    }

    /// Property: shuffling the hand never changes the evaluation
    #[test]
    fn prop_evaluation_ignores_hand_order(
        (hand, reordered) in crate::domain::test_gens::hand()
            .prop_flat_map(|h| (Just(h.clone()), Just(h).prop_shuffle())),
    ) {
        prop_assert_eq!(evaluate_suits(&hand), evaluate_suits(&reordered));
        prop_assert_eq!(is_forced_to_bid(&hand), is_forced_to_bid(&reordered));
    }

    /// Property: forced iff top suit totals >= 40 and the hand has >= 5 high cards
    #[test]
    fn prop_forced_matches_thresholds(hand in crate::domain::test_gens::hand()) {
        let top_total = evaluate_suits(&hand).first().map_or(0, |e| e.rank_total);
        let high = hand.iter().filter(|c| c.rank.is_high()).count();
        prop_assert_eq!(is_forced_to_bid(&hand), top_total >= 40 && high >= 5);
    }

    /// Property: pass legality under the forced-bid rule
    #[test]
    fn prop_pass_legality(
        hand in crate::domain::test_gens::hand(),
        tokens in 0u8..=2,
        current_bid in prop_oneof![Just(0u8), MIN_BID..=MAX_BID],
    ) {
        let forced = is_forced_to_bid(&hand);
        let expected = !forced || tokens > 0 || current_bid != 0;
        prop_assert_eq!(can_pass(&hand, tokens, current_bid), expected);
    }

    /// Property: legal bid amounts strictly exceed the standing bid and stay in range
    #[test]
    fn prop_legal_bids_in_range(current_bid in 0u8..=MAX_BID) {
        let amounts = legal_bid_amounts(current_bid);
        for amount in &amounts {
            prop_assert!(*amount > current_bid);
            prop_assert!((MIN_BID..=MAX_BID).contains(amount));
        }
        if current_bid < MAX_BID {
            prop_assert_eq!(amounts.last().copied(), Some(MAX_BID));
        }
    }
}
