pub mod match_flow;
pub mod registry;

pub use registry::{MatchRegistry, MatchSession, SharedSession};
