//! FLAMES computation engine
//!
//! Pipeline: match common letters, count the remainder, eliminate from the
//! FLAMES sequence. Every function here is total and pure.

mod compute;
mod elimination;
mod matcher;
mod remainder;

pub use compute::{FlamesResult, compute_flames};
pub use elimination::{Elimination, EliminationOutcome, EliminationRound, ROUNDS, eliminate};
pub use matcher::{MatchSet, match_letters};
pub use remainder::remainder;
