use crate::domain::bidding::{
    evaluate_suits, is_forced_to_bid, legal_bid_amounts, pass, place_bid, select_trump,
};
use crate::domain::fixtures::CardFixtures;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{make_state, MakeStateArgs};
use crate::domain::{Card, Suit};
use crate::errors::ErrorCode;

fn weak_hands() -> [Vec<Card>; 4] {
    [
        CardFixtures::weak_hand(),
        CardFixtures::weak_hand(),
        CardFixtures::weak_hand(),
        CardFixtures::weak_hand(),
    ]
}

#[test]
fn evaluate_suits_orders_by_rank_total_then_priority() {
    let hand = CardFixtures::parse_hardcoded(&[
        "AS", "KS", "2S", "3S", // 32
        "AH", "KH", "2H", "3H", // 32, same shape: spades wins on priority
        "QD", "JD", "10D", "9D", "8D", // 50
    ]);
    let evals = evaluate_suits(&hand);
    assert_eq!(evals.len(), 3);
    assert_eq!(evals[0].suit, Suit::Diamonds);
    assert_eq!(evals[0].rank_total, 50);
    assert_eq!(evals[0].card_count, 5);
    assert_eq!(evals[0].high_card_count, 3);
    assert_eq!(evals[1].suit, Suit::Spades);
    assert_eq!(evals[2].suit, Suit::Hearts);
}

#[test]
fn evaluate_suits_skips_short_suits() {
    let hand = CardFixtures::parse_hardcoded(&["AS", "KS", "QS", "AH", "KH", "QH", "AD", "KD"]);
    assert!(evaluate_suits(&hand).is_empty());
    assert!(!is_forced_to_bid(&hand));
}

#[test]
fn evaluate_suits_breaks_rank_ties_on_card_count() {
    // Both total 24: clubs with five cards beats hearts with four
    let hand = CardFixtures::parse_hardcoded(&[
        "9H", "7H", "5H", "3H", "2C", "3C", "4C", "6C", "9C",
    ]);
    let evals = evaluate_suits(&hand);
    assert_eq!(evals[0].suit, Suit::Clubs);
    assert_eq!(evals[1].suit, Suit::Hearts);
}

#[test]
fn forced_to_bid_examples() {
    assert!(is_forced_to_bid(&CardFixtures::strong_hand()));
    assert!(!is_forced_to_bid(&CardFixtures::weak_hand()));

    // Strong suit but only four high cards overall
    let thin = CardFixtures::parse_hardcoded(&[
        "AS", "KS", "QS", "JS", "9S", "2H", "3H", "4H", "5D", "6D", "7D", "8C", "9C",
    ]);
    assert_eq!(evaluate_suits(&thin)[0].rank_total, 59);
    assert!(!is_forced_to_bid(&thin));
}

#[test]
fn bid_then_three_passes_moves_to_trump_selection() {
    let mut state = make_state(weak_hands(), MakeStateArgs::default());
    assert_eq!(state.active_seat(), 1);

    place_bid(&mut state, 1, 9).unwrap();
    assert_eq!(state.bid_state().current_bid, 9);
    assert_eq!(state.bid_state().bid_winner, Some(1));
    pass(&mut state, 2).unwrap();
    pass(&mut state, 3).unwrap();
    assert_eq!(state.phase(), Phase::Bidding);
    pass(&mut state, 0).unwrap();

    assert_eq!(state.phase(), Phase::TrumpSelection);
    assert_eq!(state.active_seat(), 1);
    assert_eq!(state.bid_state().bidding_turn_count, 4);
}

#[test]
fn outbid_resets_pass_count_and_extends_bidding() {
    let mut state = make_state(weak_hands(), MakeStateArgs::default());
    place_bid(&mut state, 1, 8).unwrap();
    pass(&mut state, 2).unwrap();
    place_bid(&mut state, 3, 10).unwrap();
    assert_eq!(state.bid_state().pass_count, 0);
    pass(&mut state, 0).unwrap();
    pass(&mut state, 1).unwrap();
    pass(&mut state, 2).unwrap();
    assert_eq!(state.phase(), Phase::TrumpSelection);
    assert_eq!(state.bid_state().bid_winner, Some(3));
    assert_eq!(state.active_seat(), 3);
}

#[test]
fn bid_rejections() {
    let mut state = make_state(weak_hands(), MakeStateArgs::default());

    let err = place_bid(&mut state, 2, 9).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotYourTurn);

    for amount in [0, 7, 14] {
        let err = place_bid(&mut state, 1, amount).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidBidAmount, "amount {amount}");
    }

    place_bid(&mut state, 1, 10).unwrap();
    assert_eq!(place_bid(&mut state, 2, 10).unwrap_err().code(), ErrorCode::InvalidBidAmount);
    assert_eq!(place_bid(&mut state, 2, 9).unwrap_err().code(), ErrorCode::InvalidBidAmount);
    place_bid(&mut state, 2, 11).unwrap();
    assert_eq!(state.bid_state().bid_winner, Some(2));
}

#[test]
fn all_pass_imposes_default_contract_left_of_dealer() {
    let mut state = make_state(
        weak_hands(),
        MakeStateArgs {
            dealer: 2,
            ..Default::default()
        },
    );
    assert_eq!(state.active_seat(), 3);
    for seat in [3, 0, 1, 2] {
        pass(&mut state, seat).unwrap();
    }
    assert_eq!(state.phase(), Phase::TrumpSelection);
    assert_eq!(state.bid_state().current_bid, 7);
    assert_eq!(state.bid_state().bid_winner, Some(3));
    assert_eq!(state.active_seat(), 3);
}

#[test]
fn forced_hand_cannot_pass_without_token() {
    let mut hands = weak_hands();
    hands[1] = CardFixtures::strong_hand();
    let mut state = make_state(hands, MakeStateArgs::default());

    let err = pass(&mut state, 1).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ForcedToBid);
    assert_eq!(state.active_seat(), 1);
    assert_eq!(state.bid_state().pass_count, 0);

    place_bid(&mut state, 1, 8).unwrap();
}

#[test]
fn forced_hand_may_pass_once_a_bid_stands() {
    let mut hands = weak_hands();
    hands[2] = CardFixtures::strong_hand();
    let mut state = make_state(hands, MakeStateArgs::default());
    place_bid(&mut state, 1, 8).unwrap();
    pass(&mut state, 2).unwrap();
}

#[test]
fn override_token_is_consumed_exactly_once() {
    let mut hands = weak_hands();
    hands[1] = CardFixtures::strong_hand();
    let mut state = make_state(
        hands,
        MakeStateArgs {
            pass_overrides: 1,
            ..Default::default()
        },
    );

    pass(&mut state, 1).unwrap();
    assert_eq!(state.player(1).unwrap().pass_overrides_left, 0);
    pass(&mut state, 2).unwrap();
    pass(&mut state, 3).unwrap();
    pass(&mut state, 0).unwrap();

    // Everybody passed: default contract, seat 1 declares
    assert_eq!(state.phase(), Phase::TrumpSelection);
    assert_eq!(state.bid_state().bid_winner, Some(1));
    // Tokens of weak hands were spent by their passes too
    for seat in 0..4 {
        assert_eq!(state.player(seat).unwrap().pass_overrides_left, 0);
    }
}

#[test]
fn token_spent_on_an_earlier_pass_no_longer_covers_a_forced_hand() {
    let mut hands = weak_hands();
    hands[1] = CardFixtures::strong_hand();
    let mut state = make_state(
        hands,
        MakeStateArgs {
            pass_overrides: 1,
            active_seat: Some(1),
            ..Default::default()
        },
    );
    state.players[1].pass_overrides_left = 0;
    assert_eq!(pass(&mut state, 1).unwrap_err().code(), ErrorCode::ForcedToBid);
    state.players[1].pass_overrides_left = 1;
    pass(&mut state, 1).unwrap();
}

#[test]
fn select_trump_guards() {
    let mut state = make_state(
        weak_hands(),
        MakeStateArgs {
            phase: Phase::TrumpSelection,
            bid_winner: Some(2),
            current_bid: 9,
            ..Default::default()
        },
    );

    let err = select_trump(&mut state, 1, Suit::Hearts, false).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotDeclarer);
    assert_eq!(place_bid(&mut state, 2, 10).unwrap_err().code(), ErrorCode::WrongPhase);

    select_trump(&mut state, 2, Suit::Hearts, true).unwrap();
    assert_eq!(state.phase(), Phase::Trick);
    assert_eq!(state.trump(), Some(Suit::Hearts));
    assert!(state.is_trump_hidden());
    assert_eq!(state.active_seat(), 2);
    assert_eq!(state.trick_starter(), 2);

    assert_eq!(
        select_trump(&mut state, 2, Suit::Spades, false).unwrap_err().code(),
        ErrorCode::WrongPhase
    );
}

#[test]
fn legal_bid_amounts_follow_standing_bid() {
    assert_eq!(legal_bid_amounts(0), (8..=13).collect::<Vec<u8>>());
    assert_eq!(legal_bid_amounts(7), (8..=13).collect::<Vec<u8>>());
    assert_eq!(legal_bid_amounts(11), vec![12, 13]);
    assert!(legal_bid_amounts(13).is_empty());
}
