//! Property tests for follow-suit legality.
//!
//! Properties tested:
//! - Leading: every card is legal
//! - Holding the lead suit: exactly the lead-suit cards are legal
//! - Void in the lead suit: every card is legal
//! - The mask agrees with what `play_card` accepts

use proptest::prelude::*;

use crate::domain::rules::PLAYERS;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{make_state, MakeStateArgs};
use crate::domain::tricks::{legal_indices, legal_move_mask, play_card};
use crate::domain::{hand_has_suit, test_prelude};
use crate::errors::ErrorCode;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: with no card down, the whole hand is playable
    #[test]
    fn prop_leader_may_play_anything(hand in crate::domain::test_gens::unique_cards_up_to(13)) {
        let mask = legal_move_mask(&hand, None);
        prop_assert_eq!(mask.len(), hand.len());
        prop_assert!(mask.iter().all(|&legal| legal));
    }

    /// Property: holding the lead suit restricts play to it
    #[test]
    fn prop_must_follow_when_able(
        hand in crate::domain::test_gens::unique_cards_up_to(13),
        lead in crate::domain::test_gens::suit(),
    ) {
        let mask = legal_move_mask(&hand, Some(lead));
        if hand_has_suit(&hand, lead) {
            for (card, legal) in hand.iter().zip(&mask) {
                prop_assert_eq!(*legal, card.suit == lead, "card {}", card);
            }
        } else {
            prop_assert!(mask.iter().all(|&legal| legal));
        }
        prop_assert!(!legal_indices(&hand, Some(lead)).is_empty());
    }

    /// Property: a void hand may discard any card
    #[test]
    fn prop_void_hand_plays_freely(
        (lead, hand) in crate::domain::test_gens::suit()
            .prop_flat_map(|s| (Just(s), crate::domain::test_gens::hand_without_suit(s))),
    ) {
        prop_assert!(legal_move_mask(&hand, Some(lead)).iter().all(|&legal| legal));
    }

    /// Property: play_card accepts exactly the indices the mask marks legal
    #[test]
    fn prop_play_card_agrees_with_mask(
        cards in crate::domain::test_gens::unique_cards(8),
        index in 0usize..7,
    ) {
        // Seat 0 leads cards[0]; seat 1 holds the remaining seven.
        let lead_card = cards[0];
        let follower: Vec<_> = cards[1..].to_vec();
        let mask = legal_move_mask(&follower, Some(lead_card.suit));

        let mut hands: [Vec<_>; PLAYERS] = Default::default();
        hands[0] = vec![lead_card];
        hands[1] = follower.clone();
        let mut state = make_state(
            hands,
            MakeStateArgs {
                phase: Phase::Trick,
                active_seat: Some(0),
                bid_winner: Some(0),
                current_bid: 8,
                ..Default::default()
            },
        );
        play_card(&mut state, 0, 0).unwrap();

        let result = play_card(&mut state, 1, index);
        if mask[index] {
            prop_assert!(result.is_ok());
            prop_assert_eq!(state.current_trick(), &[lead_card, follower[index]][..]);
        } else {
            prop_assert_eq!(result.unwrap_err().code(), ErrorCode::IllegalMove);
            prop_assert_eq!(state.hand(1).unwrap(), &follower[..]);
        }
    }
}
