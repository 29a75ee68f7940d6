//! Single-round commit-reveal protocol.

mod round;

pub use round::{Round, RoundError, RoundOutcome};
