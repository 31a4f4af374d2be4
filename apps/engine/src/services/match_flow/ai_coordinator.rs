use tracing::{debug, error, info, warn};

use crate::ai::{create_ai, AiPlayer};
use crate::domain::intent::{CardRef, PlayerIntent};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{MatchState, Phase, Seat};
use crate::domain::{derive_bot_seed, SeatView};
use crate::errors::domain::{DomainError, InternalKind};

/// A policy decision rejected by the rules is asked for again this many times.
pub const MAX_RETRIES_PER_ACTION: usize = 3;

/// Policies for the automated seats of one match; `None` for human seats.
pub struct BotSeats {
    seats: [Option<Box<dyn AiPlayer>>; PLAYERS],
}

impl BotSeats {
    /// Build the named policy for every automated seat, each seeded from the
    /// match seed and its seat.
    pub fn for_match(state: &MatchState, policy: &str) -> Result<Self, DomainError> {
        let mut seats: [Option<Box<dyn AiPlayer>>; PLAYERS] = Default::default();
        for player in state.players().iter().filter(|p| p.automated) {
            let seed = derive_bot_seed(&state.config().seed, player.seat);
            let ai = create_ai(policy, Some(seed)).ok_or_else(|| {
                DomainError::config(format!("Unknown bot policy '{policy}'"))
            })?;
            seats[player.seat as usize] = Some(ai);
        }
        Ok(Self { seats })
    }

    /// Seat-by-seat policies, for tests and tools that mix policies.
    pub fn from_players(seats: [Option<Box<dyn AiPlayer>>; PLAYERS]) -> Self {
        Self { seats }
    }

    pub fn get(&self, seat: Seat) -> Option<&dyn AiPlayer> {
        self.seats.get(seat as usize)?.as_deref()
    }

    pub fn count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }
}

/// Resolve automated turns until a human is active or the phase needs an
/// external decision.
///
/// Returns the number of bot actions applied. Any error is an
/// `InternalInconsistency` and leaves the match unusable.
pub fn run_bots(
    state: &mut MatchState,
    bots: &BotSeats,
    iteration_cap: usize,
) -> Result<usize, DomainError> {
    let mut iterations = 0usize;

    while state.phase().awaits_intent() {
        let seat = state.active_seat();
        let Some(ai) = bots.get(seat) else {
            debug!(match_id = %state.match_id(), seat, "Human seat to act, stopping bot processing");
            break;
        };

        if iterations >= iteration_cap {
            error!(
                match_id = %state.match_id(),
                seat,
                phase = ?state.phase(),
                iteration_cap,
                "Bot loop hit its iteration cap"
            );
            return Err(DomainError::internal(
                InternalKind::IterationCapExceeded,
                format!("Bot loop exceeded {iteration_cap} actions"),
            ));
        }
        iterations += 1;

        execute_bot_action(state, seat, ai)?;
    }

    if iterations > 0 {
        info!(
            match_id = %state.match_id(),
            actions = iterations,
            phase = ?state.phase(),
            active_seat = state.active_seat(),
            "Bot turns resolved"
        );
    }
    Ok(iterations)
}

fn execute_bot_action(
    state: &mut MatchState,
    seat: Seat,
    ai: &dyn AiPlayer,
) -> Result<(), DomainError> {
    check_bot_preconditions(state, seat)?;

    let mut last_error = None;
    for retry in 0..MAX_RETRIES_PER_ACTION {
        let view = SeatView::for_seat(state, seat)?;
        let intent = decide(ai, &view).inspect_err(|e| {
            error!(match_id = %state.match_id(), seat, error = %e, "Bot policy failed");
        })?;

        match state.apply_intent(seat, &intent) {
            Ok(outcome) => {
                debug!(
                    match_id = %state.match_id(),
                    seat,
                    action = intent.kind(),
                    retry,
                    phase = ?outcome.phase,
                    "Bot action applied"
                );
                return Ok(());
            }
            Err(e) if e.is_fatal() => {
                error!(match_id = %state.match_id(), seat, error = %e, "Bot action broke an invariant");
                return Err(e);
            }
            Err(e) => {
                warn!(
                    match_id = %state.match_id(),
                    seat,
                    retry,
                    action = intent.kind(),
                    reason = %e.code(),
                    "Bot action rejected"
                );
                last_error = Some(e);
            }
        }
    }

    let detail = last_error.map_or_else(|| "no error captured".to_string(), |e| e.to_string());
    error!(match_id = %state.match_id(), seat, %detail, "Bot retries exhausted");
    Err(DomainError::internal(
        InternalKind::BotActionRejected,
        format!("Seat {seat} made no acceptable move in {MAX_RETRIES_PER_ACTION} attempts: {detail}"),
    ))
}

/// Conditions that can only arise from a state-machine bug; never retried.
fn check_bot_preconditions(state: &MatchState, seat: Seat) -> Result<(), DomainError> {
    match state.phase() {
        Phase::TrumpSelection if state.bid_state().bid_winner != Some(seat) => {
            error!(match_id = %state.match_id(), seat, "Automated seat active in trump selection but not declarer");
            Err(DomainError::internal(
                InternalKind::BotNotDeclarer,
                format!("Seat {seat} is active in trump selection without winning the bid"),
            ))
        }
        Phase::Trick => {
            let hand = state.hand(seat)?;
            if crate::domain::tricks::legal_indices(hand, state.lead_suit()).is_empty() {
                error!(match_id = %state.match_id(), seat, "Automated seat has no legal card");
                return Err(DomainError::internal(
                    InternalKind::NoLegalMoves,
                    format!("Seat {seat} has no legal card to play"),
                ));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Turn a policy decision into the same intent a client would send.
fn decide(ai: &dyn AiPlayer, view: &SeatView) -> Result<PlayerIntent, DomainError> {
    let intent = match view.phase {
        Phase::Bidding => match ai.choose_bid(view)? {
            Some(amount) => PlayerIntent::Bid { amount },
            None => PlayerIntent::Pass,
        },
        Phase::TrumpSelection => {
            let choice = ai.choose_trump(view)?;
            PlayerIntent::SelectTrump {
                suit: choice.suit,
                hidden: choice.hidden,
            }
        }
        Phase::Trick => PlayerIntent::PlayCard {
            card: CardRef::Index(ai.choose_play(view)?),
        },
        other => {
            return Err(DomainError::internal(
                InternalKind::Other("BOT_PHASE".into()),
                format!("No bot decision exists for phase {other:?}"),
            ))
        }
    };
    Ok(intent)
}
