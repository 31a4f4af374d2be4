use crate::domain::fixtures::CardFixtures;
use crate::domain::state::{MatchState, Phase, Seat};
use crate::domain::test_state_helpers::{make_state, MakeStateArgs};
use crate::domain::tricks::{legal_indices, play_card, play_card_identity};
use crate::domain::{Card, Suit};
use crate::errors::ErrorCode;

fn trick_state(hands: [Vec<Card>; 4], leader: Seat, trump: Suit) -> MatchState {
    make_state(
        hands,
        MakeStateArgs {
            phase: Phase::Trick,
            active_seat: Some(leader),
            bid_winner: Some(leader),
            current_bid: 8,
            trump: Some(trump),
            ..Default::default()
        },
    )
}

fn cards(tokens: &[&str]) -> Vec<Card> {
    CardFixtures::parse_hardcoded(tokens)
}

#[test]
fn trick_winner_leads_next() {
    let hands = [
        cards(&["KH", "2C"]),
        cards(&["AH", "3C"]),
        cards(&["2S", "4C"]),
        cards(&["QH", "5C"]),
    ];
    let mut state = trick_state(hands, 0, Suit::Spades);

    for seat in 0..3 {
        let r = play_card(&mut state, seat, 0).unwrap();
        assert_eq!(r.trick_winner, None);
        assert_eq!(state.active_seat(), seat + 1);
    }
    let r = play_card(&mut state, 3, 0).unwrap();
    // 2S trumps the hearts
    assert_eq!(r.trick_winner, Some(2));
    assert_eq!(r.phase_transitioned, None);
    assert_eq!(state.active_seat(), 2);
    assert_eq!(state.trick_starter(), 2);
    assert_eq!(state.trick_scores(), [1, 0]);
    assert!(state.current_trick().is_empty());

    let done = state.completed_tricks();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].leader, 0);
    assert_eq!(done[0].winner, 2);
}

#[test]
fn last_trick_moves_to_scoring() {
    let hands = [cards(&["2D"]), cards(&["3D"]), cards(&["AD"]), cards(&["9C"])];
    let mut state = trick_state(hands, 1, Suit::Hearts);

    play_card(&mut state, 1, 0).unwrap();
    play_card(&mut state, 2, 0).unwrap();
    play_card(&mut state, 3, 0).unwrap();
    let r = play_card(&mut state, 0, 0).unwrap();

    assert_eq!(r.trick_winner, Some(2));
    assert_eq!(r.phase_transitioned, Some(Phase::Scoring));
    assert_eq!(state.phase(), Phase::Scoring);
    assert_eq!(state.trick_scores(), [1, 0]);
}

#[test]
fn play_rejections_leave_state_untouched() {
    let hands = [
        cards(&["KH", "2C"]),
        cards(&["AH", "3C"]),
        cards(&["2S", "4C"]),
        cards(&["QH", "5C"]),
    ];
    let mut state = trick_state(hands, 0, Suit::Spades);

    assert_eq!(play_card(&mut state, 1, 0).unwrap_err().code(), ErrorCode::NotYourTurn);
    assert_eq!(play_card(&mut state, 0, 2).unwrap_err().code(), ErrorCode::InvalidCardIndex);
    play_card(&mut state, 0, 0).unwrap();

    // Seat 1 holds a heart and must follow
    assert_eq!(play_card(&mut state, 1, 1).unwrap_err().code(), ErrorCode::IllegalMove);
    assert_eq!(state.hand(1).unwrap(), &cards(&["AH", "3C"])[..]);
    assert_eq!(state.current_trick().len(), 1);
    assert_eq!(state.active_seat(), 1);

    // Seat 2 is void in hearts and may discard a club over its trump
    play_card(&mut state, 1, 0).unwrap();
    play_card(&mut state, 2, 1).unwrap();
    assert_eq!(state.current_trick()[2], cards(&["4C"])[0]);
}

#[test]
fn play_by_identity() {
    let hands = [
        cards(&["KH", "2C"]),
        cards(&["AH", "3C"]),
        cards(&["2S", "4C"]),
        cards(&["QH", "5C"]),
    ];
    let mut state = trick_state(hands, 0, Suit::Spades);
    let two_clubs = cards(&["2C"])[0];
    let r = play_card_identity(&mut state, 0, two_clubs).unwrap();
    assert_eq!(r.card, two_clubs);

    let err = play_card_identity(&mut state, 1, two_clubs).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CardNotInHand);
    // Seat 1 follows clubs, so AH is illegal even though it is held
    let err = play_card_identity(&mut state, 1, cards(&["AH"])[0]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IllegalMove);
}

#[test]
fn wrong_phase_for_play() {
    let mut state = make_state(
        [cards(&["2C"]), cards(&["3C"]), cards(&["4C"]), cards(&["5C"])],
        MakeStateArgs::default(),
    );
    assert_eq!(play_card(&mut state, 1, 0).unwrap_err().code(), ErrorCode::WrongPhase);
}

#[test]
fn legal_indices_follow_suit() {
    let hand = cards(&["2C", "AH", "3C", "KS"]);
    assert_eq!(legal_indices(&hand, Some(Suit::Clubs)), vec![0, 2]);
    assert_eq!(legal_indices(&hand, Some(Suit::Diamonds)), vec![0, 1, 2, 3]);
    assert_eq!(legal_indices(&hand, None), vec![0, 1, 2, 3]);
}
