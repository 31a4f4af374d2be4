use tracing::{debug, info};

use crate::domain::rules::PLAYERS;
use crate::domain::state::{
    nth_from, require_turn, wrong_phase, CompletedTrick, MatchState, Phase, Seat,
};
use crate::domain::{card_beats, hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, InternalKind, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    pub card: Card,
    /// Winner of the trick this card completed, if any.
    pub trick_winner: Option<Seat>,
    /// Set when the play emptied every hand.
    pub phase_transitioned: Option<Phase>,
}

/// Per-card legality for `hand` against the trick's lead suit.
///
/// With no lead every card is legal. Otherwise only lead-suit cards are
/// legal when the hand holds any; a void hand may play anything.
pub fn legal_move_mask(hand: &[Card], lead_suit: Option<Suit>) -> Vec<bool> {
    match lead_suit {
        Some(lead) if hand_has_suit(hand, lead) => hand.iter().map(|c| c.suit == lead).collect(),
        _ => vec![true; hand.len()],
    }
}

/// Hand indices that are currently legal.
pub fn legal_indices(hand: &[Card], lead_suit: Option<Suit>) -> Vec<usize> {
    legal_move_mask(hand, lead_suit)
        .into_iter()
        .enumerate()
        .filter_map(|(i, legal)| legal.then_some(i))
        .collect()
}

/// Winning position (0..=3) of a complete trick.
pub fn resolve_trick(cards: &[Card; PLAYERS], trump: Option<Suit>) -> usize {
    let mut best = 0usize;
    for i in 1..PLAYERS {
        if card_beats(cards[i], cards[best], trump) {
            best = i;
        }
    }
    best
}

fn check_play_guards(state: &MatchState, seat: Seat) -> Result<(), DomainError> {
    if state.phase != Phase::Trick {
        return Err(wrong_phase("play_card", state.phase));
    }
    require_turn(state, seat)
}

/// Play the card at `index` of the seat's hand into the current trick.
pub(crate) fn play_card(
    state: &mut MatchState,
    seat: Seat,
    index: usize,
) -> Result<PlayCardResult, DomainError> {
    check_play_guards(state, seat)?;

    let lead = state.lead_suit();
    let hand = &state.players[seat as usize].hand;
    if index >= hand.len() {
        return Err(DomainError::validation(
            ValidationKind::InvalidCardIndex,
            format!("Card index {index} out of range for hand of {}", hand.len()),
        ));
    }
    if !legal_move_mask(hand, lead)[index] {
        return Err(DomainError::validation(
            ValidationKind::IllegalMove,
            format!("{} does not follow the lead suit", hand[index]),
        ));
    }

    let card = state.players[seat as usize].hand.remove(index);
    state.current_trick.push(card);
    debug!(match_id = %state.config.match_id, seat, %card, "Card played");

    let mut result = PlayCardResult {
        card,
        trick_winner: None,
        phase_transitioned: None,
    };

    if state.current_trick.len() < PLAYERS {
        state.active_seat = nth_from(state.active_seat, 1);
        return Ok(result);
    }

    let winner = complete_trick(state)?;
    result.trick_winner = Some(winner);

    if state.players.iter().all(|p| p.hand.is_empty()) {
        state.phase = Phase::Scoring;
        result.phase_transitioned = Some(Phase::Scoring);
        info!(
            match_id = %state.config.match_id,
            round_no = state.round_no,
            trick_scores = ?state.trick_scores,
            "All tricks played"
        );
    }
    Ok(result)
}

/// Play a card by identity; fails with `CardNotInHand` when the seat lacks it.
pub(crate) fn play_card_identity(
    state: &mut MatchState,
    seat: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    check_play_guards(state, seat)?;
    let index = state.players[seat as usize]
        .hand
        .iter()
        .position(|&c| c == card)
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("Seat {seat} does not hold {card}"),
            )
        })?;
    play_card(state, seat, index)
}

/// Resolve the four cards on the table and hand the lead to the winner.
fn complete_trick(state: &mut MatchState) -> Result<Seat, DomainError> {
    let cards: [Card; PLAYERS] = state
        .current_trick
        .as_slice()
        .try_into()
        .map_err(|_| {
            DomainError::internal(
                InternalKind::Other("TRICK_SIZE".into()),
                format!("Trick holds {} cards", state.current_trick.len()),
            )
        })?;

    let position = resolve_trick(&cards, state.trump);
    let winner = nth_from(state.trick_starter, position as u8);
    state.trick_scores[(winner % 2) as usize] += 1;
    state.completed_tricks.push(CompletedTrick {
        leader: state.trick_starter,
        cards,
        winner,
    });
    state.current_trick.clear();
    state.active_seat = winner;
    state.trick_starter = winner;

    info!(
        match_id = %state.config.match_id,
        trick_no = state.completed_tricks.len(),
        winner,
        "Trick won"
    );
    Ok(winner)
}
