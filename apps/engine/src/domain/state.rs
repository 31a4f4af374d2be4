use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::deck::Deck;
use crate::domain::intent::{AcceptedIntent, CardRef, PlayerIntent};
use crate::domain::rules::{team_of, DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::scoring::{self, RoundResult, ScoreResult};
use crate::domain::seed_derivation::derive_round_seed;
use crate::domain::{bidding, tricks, Card, Suit};
use crate::errors::domain::{DomainError, InternalKind, ValidationKind};

pub type Seat = u8; // 0..=3, clockwise

/// Match progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Match created, first round not dealt.
    Waiting,
    /// Transient while a round's deck is built and dealt.
    Dealing,
    /// Seats bid or pass in clockwise order.
    Bidding,
    /// Bid winner names trump.
    TrumpSelection,
    /// Thirteen tricks are played.
    Trick,
    /// Round over; waits for an external continue/finish decision.
    Scoring,
    /// Match over.
    Finished,
}

impl Phase {
    /// Phases in which the active seat is expected to submit an intent.
    pub fn awaits_intent(self) -> bool {
        matches!(
            self,
            Phase::Bidding | Phase::TrumpSelection | Phase::Trick
        )
    }

    fn holds_cards(self) -> bool {
        matches!(
            self,
            Phase::Bidding | Phase::TrumpSelection | Phase::Trick | Phase::Scoring
        )
    }
}

/// Immutable per-match settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub match_id: String,
    /// Sole source of randomness for the match.
    pub seed: String,
    #[serde(default)]
    pub ranked: bool,
}

impl MatchConfig {
    pub fn new(match_id: impl Into<String>, seed: impl Into<String>) -> Self {
        Self {
            match_id: match_id.into(),
            seed: seed.into(),
            ranked: false,
        }
    }

    pub fn with_ranked(mut self, ranked: bool) -> Self {
        self.ranked = ranked;
        self
    }
}

/// Who sits where, supplied at match creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub player_id: String,
    pub display_name: String,
    pub automated: bool,
}

impl SeatAssignment {
    pub fn human(player_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            display_name: display_name.into(),
            automated: false,
        }
    }

    pub fn bot(player_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            display_name: display_name.into(),
            automated: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub seat: Seat,
    /// Dealt order; never sorted.
    pub hand: Vec<Card>,
    pub automated: bool,
    pub pass_overrides_left: u8,
    /// Cumulative across rounds.
    pub score: i32,
}

/// Bidding sub-state, reset at round start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidState {
    /// 0 until someone bids.
    pub current_bid: u8,
    pub bid_winner: Option<Seat>,
    /// Passes since the last bid.
    pub pass_count: u8,
    /// Bids and passes accepted this round.
    pub bidding_turn_count: u8,
}

/// A resolved trick kept for the rest of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub leader: Seat,
    pub cards: [Card; PLAYERS],
    pub winner: Seat,
}

/// What an accepted intent changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentOutcome {
    pub phase: Phase,
    pub active_seat: Seat,
    pub trick_winner: Option<Seat>,
}

/// The match aggregate. Mutated only through its guarded operations.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub(crate) config: MatchConfig,
    pub(crate) players: Vec<Player>,
    pub(crate) phase: Phase,
    /// 1-based.
    pub(crate) round_no: u32,
    pub(crate) dealer: Seat,
    pub(crate) active_seat: Seat,
    pub(crate) trick_starter: Seat,
    pub(crate) trump: Option<Suit>,
    pub(crate) trump_hidden: bool,
    /// Card i was played by `trick_starter + i`.
    pub(crate) current_trick: Vec<Card>,
    pub(crate) trick_scores: [u8; 2],
    pub(crate) bid: BidState,
    pub(crate) deck: Option<Deck>,
    pub(crate) completed_tricks: Vec<CompletedTrick>,
    pub(crate) previous_round: Option<RoundResult>,
    pub(crate) round_scored: bool,
    pub(crate) intent_log: Vec<AcceptedIntent>,
}

impl MatchState {
    /// Create a match in WAITING with dealer at seat 0.
    pub fn new(
        config: MatchConfig,
        seats: [SeatAssignment; PLAYERS],
        pass_overrides: u8,
    ) -> Result<Self, DomainError> {
        let mut ids = HashSet::with_capacity(PLAYERS);
        for seat in &seats {
            if !ids.insert(seat.player_id.as_str()) {
                return Err(DomainError::validation_other(format!(
                    "Duplicate player id {}",
                    seat.player_id
                )));
            }
        }

        let players = seats
            .into_iter()
            .enumerate()
            .map(|(i, s)| Player {
                id: s.player_id,
                name: s.display_name,
                seat: i as Seat,
                hand: Vec::with_capacity(HAND_SIZE),
                automated: s.automated,
                pass_overrides_left: pass_overrides,
                score: 0,
            })
            .collect();

        Ok(Self {
            config,
            players,
            phase: Phase::Waiting,
            round_no: 1,
            dealer: 0,
            active_seat: 0,
            trick_starter: 0,
            trump: None,
            trump_hidden: false,
            current_trick: Vec::with_capacity(PLAYERS),
            trick_scores: [0, 0],
            bid: BidState::default(),
            deck: None,
            completed_tricks: Vec::with_capacity(HAND_SIZE),
            previous_round: None,
            round_scored: false,
            intent_log: Vec::new(),
        })
    }

    // ---- read-only accessors ----

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
    pub fn match_id(&self) -> &str {
        &self.config.match_id
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn round_no(&self) -> u32 {
        self.round_no
    }
    pub fn dealer(&self) -> Seat {
        self.dealer
    }
    pub fn active_seat(&self) -> Seat {
        self.active_seat
    }
    pub fn trick_starter(&self) -> Seat {
        self.trick_starter
    }
    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }
    pub fn is_trump_hidden(&self) -> bool {
        self.trump_hidden
    }
    pub fn current_trick(&self) -> &[Card] {
        &self.current_trick
    }
    pub fn trick_scores(&self) -> [u8; 2] {
        self.trick_scores
    }
    pub fn bid_state(&self) -> BidState {
        self.bid
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn completed_tricks(&self) -> &[CompletedTrick] {
        &self.completed_tricks
    }
    pub fn previous_round(&self) -> Option<&RoundResult> {
        self.previous_round.as_ref()
    }
    pub fn intent_log(&self) -> &[AcceptedIntent] {
        &self.intent_log
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.as_ref().map_or(0, Deck::remaining)
    }

    pub fn player(&self, seat: Seat) -> Result<&Player, DomainError> {
        require_seat(seat)?;
        Ok(&self.players[seat as usize])
    }

    pub fn hand(&self, seat: Seat) -> Result<&[Card], DomainError> {
        Ok(&self.player(seat)?.hand)
    }

    pub fn seat_of(&self, player_id: &str) -> Option<Seat> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .map(|p| p.seat)
    }

    pub fn is_automated(&self, seat: Seat) -> bool {
        self.players
            .get(seat as usize)
            .is_some_and(|p| p.automated)
    }

    /// Lead suit of the trick in progress, if any card is down.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.current_trick.first().map(|c| c.suit)
    }

    /// Seat that played `current_trick[position]`.
    pub fn seat_for_trick_position(&self, position: usize) -> Seat {
        nth_from(self.trick_starter, position as u8)
    }

    // ---- guarded operations ----

    /// Deal a round: DEALING -> BIDDING. From WAITING this is the first
    /// round with the dealer at seat 0; from SCORING it is
    /// [`MatchState::start_next_round`].
    pub fn start_round(&mut self) -> Result<(), DomainError> {
        match self.phase {
            Phase::Waiting => self.deal_round(),
            Phase::Scoring => self.start_next_round(),
            other => Err(wrong_phase("start_round", other)),
        }
    }

    pub fn bid(&mut self, seat: Seat, amount: u8) -> Result<IntentOutcome, DomainError> {
        self.apply_intent(seat, &PlayerIntent::Bid { amount })
    }

    pub fn pass(&mut self, seat: Seat) -> Result<IntentOutcome, DomainError> {
        self.apply_intent(seat, &PlayerIntent::Pass)
    }

    pub fn select_trump(
        &mut self,
        seat: Seat,
        suit: Suit,
        hidden: bool,
    ) -> Result<IntentOutcome, DomainError> {
        self.apply_intent(seat, &PlayerIntent::SelectTrump { suit, hidden })
    }

    pub fn play_card(
        &mut self,
        seat: Seat,
        card: impl Into<CardRef>,
    ) -> Result<IntentOutcome, DomainError> {
        self.apply_intent(
            seat,
            &PlayerIntent::PlayCard {
                card: card.into(),
            },
        )
    }

    /// Route an intent to its guarded operation.
    ///
    /// On success the card-conservation invariant is re-checked and the
    /// intent is appended to the log. On a rule violation the state is
    /// untouched.
    pub fn apply_intent(
        &mut self,
        seat: Seat,
        intent: &PlayerIntent,
    ) -> Result<IntentOutcome, DomainError> {
        require_seat(seat)?;
        let trick_winner = match *intent {
            PlayerIntent::Bid { amount } => {
                bidding::place_bid(self, seat, amount)?;
                None
            }
            PlayerIntent::Pass => {
                bidding::pass(self, seat)?;
                None
            }
            PlayerIntent::SelectTrump { suit, hidden } => {
                bidding::select_trump(self, seat, suit, hidden)?;
                None
            }
            PlayerIntent::PlayCard { card } => {
                let result = match card {
                    CardRef::Index(index) => tricks::play_card(self, seat, index)?,
                    CardRef::Card(card) => tricks::play_card_identity(self, seat, card)?,
                };
                result.trick_winner
            }
        };

        self.check_conservation()?;
        self.intent_log.push(AcceptedIntent {
            round_no: self.round_no,
            seat,
            intent: *intent,
        });

        Ok(IntentOutcome {
            phase: self.phase,
            active_seat: self.active_seat,
            trick_winner,
        })
    }

    /// Contract outcome of the round. Read-only; SCORING only.
    pub fn calculate_score(&self) -> Result<ScoreResult, DomainError> {
        scoring::calculate_score(self)
    }

    /// Credit the contract to the declaring team, once per round.
    ///
    /// Returns the round summary. Calling it again in the same round
    /// returns the recorded summary without crediting twice.
    pub fn apply_round_score(&mut self) -> Result<RoundResult, DomainError> {
        let score = self.calculate_score()?;
        if self.round_scored {
            if let Some(prev) = &self.previous_round {
                return Ok(prev.clone());
            }
        }
        for player in self.players.iter_mut() {
            if team_of(player.seat) == score.team as usize {
                player.score += score.score;
            }
        }
        let result = RoundResult {
            round_no: self.round_no,
            dealer: self.dealer,
            bid_winner: self.bid.bid_winner,
            trump: self.trump,
            trump_hidden: self.trump_hidden,
            trick_scores: self.trick_scores,
            outcome: score,
        };
        self.round_scored = true;
        self.previous_round = Some(result.clone());
        info!(
            match_id = %self.config.match_id,
            round_no = self.round_no,
            team = score.team,
            bid = score.bid,
            tricks_won = score.tricks_won,
            success = score.is_success,
            score = score.score,
            "Round scored"
        );
        Ok(result)
    }

    /// SCORING -> next round: scores the round if needed, rotates the
    /// dealer clockwise and deals again.
    pub fn start_next_round(&mut self) -> Result<(), DomainError> {
        if self.phase != Phase::Scoring {
            return Err(wrong_phase("start_next_round", self.phase));
        }
        self.apply_round_score()?;
        self.round_no += 1;
        self.dealer = next_seat(self.dealer);
        self.deal_round()
    }

    /// SCORING -> FINISHED.
    pub fn finish_match(&mut self) -> Result<(), DomainError> {
        if self.phase != Phase::Scoring {
            return Err(wrong_phase("finish_match", self.phase));
        }
        self.apply_round_score()?;
        self.phase = Phase::Finished;
        info!(
            match_id = %self.config.match_id,
            rounds = self.round_no,
            "Match finished"
        );
        Ok(())
    }

    // ---- internals ----

    fn reset_round(&mut self) {
        for player in self.players.iter_mut() {
            player.hand.clear();
        }
        self.trump = None;
        self.trump_hidden = false;
        self.current_trick.clear();
        self.trick_scores = [0, 0];
        self.bid = BidState::default();
        self.completed_tricks.clear();
        self.round_scored = false;
        self.trick_starter = round_start_seat(self.dealer);
    }

    fn deal_round(&mut self) -> Result<(), DomainError> {
        self.phase = Phase::Dealing;
        self.reset_round();

        let round_seed = derive_round_seed(&self.config.seed, self.round_no);
        let mut deck = Deck::new(&round_seed);
        let first = round_start_seat(self.dealer);
        for i in 0..PLAYERS {
            let seat = nth_from(first, i as u8);
            self.players[seat as usize].hand = deck.deal(HAND_SIZE)?;
        }
        self.deck = Some(deck);

        self.phase = Phase::Bidding;
        self.active_seat = first;
        info!(
            match_id = %self.config.match_id,
            round_no = self.round_no,
            dealer = self.dealer,
            first_bidder = first,
            "Round dealt"
        );
        self.check_conservation()
    }

    /// Every card of the round is in exactly one place.
    pub(crate) fn check_conservation(&self) -> Result<(), DomainError> {
        if !self.phase.holds_cards() {
            return Ok(());
        }

        let hands = self.players.iter().flat_map(|p| p.hand.iter());
        let deck = self.deck.iter().flat_map(|d| d.cards().iter());
        let table = self.current_trick.iter();
        let won = self.completed_tricks.iter().flat_map(|t| t.cards.iter());

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in hands.chain(deck).chain(table).chain(won) {
            if !seen.insert(*card) {
                return Err(DomainError::internal(
                    InternalKind::CardConservation,
                    format!("Card {card} appears twice in match {}", self.config.match_id),
                ));
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(DomainError::internal(
                InternalKind::CardConservation,
                format!(
                    "Round accounts for {} cards in match {}",
                    seen.len(),
                    self.config.match_id
                ),
            ));
        }

        let tricks_scored = self.trick_scores[0] as usize + self.trick_scores[1] as usize;
        if tricks_scored != self.completed_tricks.len() {
            return Err(DomainError::internal(
                InternalKind::CardConservation,
                format!(
                    "Trick scores sum to {tricks_scored} after {} tricks",
                    self.completed_tricks.len()
                ),
            ));
        }
        debug!(match_id = %self.config.match_id, phase = ?self.phase, "Conservation ok");
        Ok(())
    }
}

pub(crate) fn wrong_phase(op: &str, phase: Phase) -> DomainError {
    DomainError::validation(
        ValidationKind::WrongPhase,
        format!("{op} not allowed in phase {phase:?}"),
    )
}

pub(crate) fn require_seat(seat: Seat) -> Result<(), DomainError> {
    if (seat as usize) < PLAYERS {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("Seat {seat} out of range"),
        ))
    }
}

pub(crate) fn require_turn(state: &MatchState, seat: Seat) -> Result<(), DomainError> {
    if state.active_seat == seat {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            format!("Seat {seat} acted; active seat is {}", state.active_seat),
        ))
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(s: Seat) -> Seat {
    seat_offset(s, 1)
}

/// Round-start seat (left of the dealer): first to receive cards and first to bid.
#[inline]
pub fn round_start_seat(dealer: Seat) -> Seat {
    next_seat(dealer)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, (n % PLAYERS as u8) as i8)
}
