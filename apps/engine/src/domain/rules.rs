use std::ops::RangeInclusive;

pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 13;
pub const TRICKS_PER_ROUND: u8 = 13;

pub const MIN_BID: u8 = 8;
pub const MAX_BID: u8 = 13;
/// Contract imposed on the seat left of the dealer when all four seats pass.
pub const DEFAULT_CONTRACT: u8 = 7;
pub const POINTS_PER_BID_TRICK: i32 = 10;

/// A suit is only evaluated once this many of its cards are held.
pub const MIN_EVALUATED_SUIT_LEN: usize = 4;
pub const FORCED_BID_RANK_TOTAL: u32 = 40;
pub const FORCED_BID_HIGH_CARDS: usize = 5;

pub const DEFAULT_PASS_OVERRIDES: u8 = 1;

pub fn valid_bid_range() -> RangeInclusive<u8> {
    MIN_BID..=MAX_BID
}

/// Team index for a seat: seats 0 and 2 are team 0, seats 1 and 3 are team 1.
#[inline]
pub fn team_of(seat: u8) -> usize {
    (seat % 2) as usize
}
