//! Wire-facing types exchanged with the transport layer.

mod action;

pub use action::ActionResult;
pub use crate::domain::intent::{CardRef, PlayerIntent};
pub use crate::domain::snapshot::{ObserverActions, PublicState, SeatPublic, TablePlay, TrumpPublic};
