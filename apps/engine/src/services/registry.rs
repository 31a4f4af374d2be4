//! Live matches keyed by id.
//!
//! Each match lives in its own [`MatchSession`] behind a
//! `parking_lot::Mutex`; one intent and every bot turn it triggers run
//! under a single lock acquisition. The map itself is a `DashMap`, and
//! creation goes through its entry API so racing first-joins agree on one
//! session.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{error, info, warn};

use crate::config::EngineConfig;
use crate::domain::intent::PlayerIntent;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::RoundResult;
use crate::domain::snapshot::PublicState;
use crate::domain::state::{IntentOutcome, MatchConfig, MatchState, Seat, SeatAssignment};
use crate::errors::domain::{ConflictKind, DomainError, InternalKind, NotFoundKind};
use crate::protocol::ActionResult;
use crate::services::match_flow::{run_bots, BotSeats};

pub type SharedSession = Arc<Mutex<MatchSession>>;

/// One live match and the bots that play its automated seats.
pub struct MatchSession {
    state: MatchState,
    bots: BotSeats,
    bot_iteration_cap: usize,
    compromised: bool,
}

impl MatchSession {
    /// Create the match, deal round 1 and let any leading bots act.
    pub fn start(
        config: MatchConfig,
        seats: [SeatAssignment; PLAYERS],
        engine: &EngineConfig,
    ) -> Result<Self, DomainError> {
        let state = MatchState::new(config, seats, engine.pass_overrides)?;
        let bots = BotSeats::for_match(&state, &engine.bot_policy)?;
        let mut session = Self {
            state,
            bots,
            bot_iteration_cap: engine.bot_iteration_cap,
            compromised: false,
        };
        session.guarded(|state| state.start_round())?;
        Ok(session)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn is_compromised(&self) -> bool {
        self.compromised
    }

    /// Apply one intent from `seat`, then resolve trailing bot turns.
    pub fn submit(
        &mut self,
        seat: Seat,
        intent: &PlayerIntent,
    ) -> Result<IntentOutcome, DomainError> {
        self.ensure_usable()?;
        let outcome = self.state.apply_intent(seat, intent);
        let outcome = self.flag_if_fatal(outcome)?;
        self.resolve_bots()?;
        Ok(IntentOutcome {
            phase: self.state.phase(),
            active_seat: self.state.active_seat(),
            trick_winner: outcome.trick_winner,
        })
    }

    /// SCORING -> next round, then let bots act.
    pub fn advance_round(&mut self) -> Result<RoundResult, DomainError> {
        self.ensure_usable()?;
        let result = self.state.apply_round_score();
        let result = self.flag_if_fatal(result)?;
        self.guarded(|state| state.start_next_round())?;
        Ok(result)
    }

    /// SCORING -> FINISHED.
    pub fn finish(&mut self) -> Result<RoundResult, DomainError> {
        self.ensure_usable()?;
        let finished = self.state.finish_match();
        self.flag_if_fatal(finished)?;
        self.state.previous_round().cloned().ok_or_else(|| {
            DomainError::internal(
                InternalKind::Other("NO_ROUND_RESULT".into()),
                "Finished match has no scored round",
            )
        })
    }

    pub fn public_state(&self, observer: Seat) -> Result<PublicState, DomainError> {
        self.state.public_state(observer)
    }

    fn ensure_usable(&self) -> Result<(), DomainError> {
        if self.compromised {
            return Err(DomainError::conflict(
                ConflictKind::MatchCompromised,
                format!(
                    "Match {} stopped after an internal fault",
                    self.state.match_id()
                ),
            ));
        }
        Ok(())
    }

    /// Run a state transition followed by bot resolution.
    fn guarded(
        &mut self,
        op: impl FnOnce(&mut MatchState) -> Result<(), DomainError>,
    ) -> Result<(), DomainError> {
        let result = op(&mut self.state);
        self.flag_if_fatal(result)?;
        self.resolve_bots()
    }

    fn resolve_bots(&mut self) -> Result<(), DomainError> {
        if self.bots.count() == 0 {
            return Ok(());
        }
        let result = run_bots(&mut self.state, &self.bots, self.bot_iteration_cap).map(|_| ());
        self.flag_if_fatal(result)
    }

    fn flag_if_fatal<T>(&mut self, result: Result<T, DomainError>) -> Result<T, DomainError> {
        if let Err(e) = &result {
            if e.is_fatal() {
                self.compromised = true;
                error!(
                    match_id = %self.state.match_id(),
                    round_no = self.state.round_no(),
                    phase = ?self.state.phase(),
                    error = %e,
                    "Match compromised by internal inconsistency"
                );
            }
        }
        result
    }
}

/// The set of live matches.
pub struct MatchRegistry {
    matches: DashMap<String, SharedSession>,
    config: EngineConfig,
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl MatchRegistry {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            matches: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create and deal a new match; fails if the id is taken.
    pub fn create_match(
        &self,
        config: MatchConfig,
        seats: [SeatAssignment; PLAYERS],
    ) -> Result<SharedSession, DomainError> {
        match self.matches.entry(config.match_id.clone()) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::MatchExists,
                format!("Match {} already exists", config.match_id),
            )),
            Entry::Vacant(slot) => {
                let match_id = config.match_id.clone();
                let session = Arc::new(Mutex::new(MatchSession::start(
                    config,
                    seats,
                    &self.config,
                )?));
                slot.insert(Arc::clone(&session));
                info!(%match_id, "Match created");
                Ok(session)
            }
        }
    }

    /// Return the existing match for this id or create it atomically.
    ///
    /// The flag is `true` when this call created the match.
    pub fn join_or_create(
        &self,
        config: MatchConfig,
        seats: [SeatAssignment; PLAYERS],
    ) -> Result<(SharedSession, bool), DomainError> {
        match self.matches.entry(config.match_id.clone()) {
            Entry::Occupied(existing) => Ok((Arc::clone(existing.get()), false)),
            Entry::Vacant(slot) => {
                let match_id = config.match_id.clone();
                let session = Arc::new(Mutex::new(MatchSession::start(
                    config,
                    seats,
                    &self.config,
                )?));
                slot.insert(Arc::clone(&session));
                info!(%match_id, "Match created on first join");
                Ok((session, true))
            }
        }
    }

    pub fn get_match(&self, match_id: &str) -> Result<SharedSession, DomainError> {
        self.matches
            .get(match_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Match, format!("Match {match_id} not found"))
            })
    }

    pub fn remove_match(&self, match_id: &str) -> Option<SharedSession> {
        let removed = self.matches.remove(match_id).map(|(_, session)| session);
        if removed.is_some() {
            info!(%match_id, "Match removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Route an intent from `player_id` to its match.
    ///
    /// Rule violations come back as a failed `ActionResult` with the
    /// reason code; the match is unchanged.
    pub fn submit_intent(
        &self,
        match_id: &str,
        player_id: &str,
        intent: &PlayerIntent,
    ) -> ActionResult {
        match self.try_submit(match_id, player_id, intent) {
            Ok(_) => ActionResult::ok(),
            Err(e) => {
                if !e.is_fatal() {
                    warn!(%match_id, %player_id, action = intent.kind(), reason = %e.code(), "Intent rejected");
                }
                ActionResult::from(&e)
            }
        }
    }

    fn try_submit(
        &self,
        match_id: &str,
        player_id: &str,
        intent: &PlayerIntent,
    ) -> Result<IntentOutcome, DomainError> {
        let session = self.get_match(match_id)?;
        let mut session = session.lock();
        let seat = session.state().seat_of(player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} is not seated in match {match_id}"),
            )
        })?;
        session.submit(seat, intent)
    }

    pub fn public_state(&self, match_id: &str, observer: Seat) -> Result<PublicState, DomainError> {
        self.get_match(match_id)?.lock().public_state(observer)
    }

    pub fn advance_round(&self, match_id: &str) -> Result<RoundResult, DomainError> {
        self.get_match(match_id)?.lock().advance_round()
    }

    pub fn finish_match(&self, match_id: &str) -> Result<RoundResult, DomainError> {
        let result = self.get_match(match_id)?.lock().finish()?;
        info!(%match_id, "Match finished");
        Ok(result)
    }
}
