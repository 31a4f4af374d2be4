//! Seat layouts for integration tests.

use engine::domain::rules::PLAYERS;
use engine::SeatAssignment;

const NAMES: [&str; PLAYERS] = ["North", "East", "South", "West"];

/// Four human seats with ids `{prefix}0` .. `{prefix}3`.
pub fn humans(prefix: &str) -> [SeatAssignment; PLAYERS] {
    std::array::from_fn(|i| SeatAssignment::human(format!("{prefix}{i}"), NAMES[i]))
}

/// Four automated seats with ids `{prefix}0` .. `{prefix}3`.
pub fn bots(prefix: &str) -> [SeatAssignment; PLAYERS] {
    std::array::from_fn(|i| SeatAssignment::bot(format!("{prefix}{i}"), NAMES[i]))
}

/// Humans at the listed seats, bots everywhere else.
pub fn mixed(prefix: &str, human_seats: &[usize]) -> [SeatAssignment; PLAYERS] {
    std::array::from_fn(|i| {
        let id = format!("{prefix}{i}");
        if human_seats.contains(&i) {
            SeatAssignment::human(id, NAMES[i])
        } else {
            SeatAssignment::bot(id, NAMES[i])
        }
    })
}
