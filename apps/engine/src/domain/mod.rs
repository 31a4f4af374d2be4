//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod intent;
pub mod player_view;
pub mod replay;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod shuffle;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{evaluate_suits, is_forced_to_bid, SuitEvaluation};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use deck::Deck;
pub use intent::{AcceptedIntent, CardRef, PlayerIntent};
pub use player_view::SeatView;
pub use replay::replay_match;
pub use scoring::{score_contract, RoundResult, ScoreResult};
pub use seed_derivation::{derive_bot_seed, derive_round_seed};
pub use shuffle::shuffle;
pub use snapshot::{get_public_state, PublicState};
pub use state::{
    IntentOutcome, MatchConfig, MatchState, Phase, Player, Seat, SeatAssignment,
};
pub use tricks::{legal_move_mask, resolve_trick};
