//! Circular elimination over the FLAMES sequence
//!
//! Each round counts `count` letters forward from the cursor, removes the one
//! it lands on, and restarts counting at the letter that slid into that slot
//! (wrapping to the front when the last letter was removed). Five rounds
//! always leave a single survivor.
//!
//! # Wrap rule
//! With `L` letters left and cursor `p`:
//! - eliminate index `(p + count - 1) mod L`
//! - next cursor is `eliminated mod (L - 1)`
//!
//! Other plausible wrap rules give different survivors for the same input,
//! so this one is pinned by golden tests.

use crate::core::FlamesLetter;
use tracing::trace;

/// Number of rounds from six letters to one
pub const ROUNDS: usize = FlamesLetter::SEQUENCE.len() - 1;

/// Record of a single elimination round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationRound {
    /// Letter removed in this round
    pub eliminated: FlamesLetter,
    /// Index it was removed from, in the list before removal
    pub index: usize,
    /// Letters left after removal
    pub remaining: Vec<FlamesLetter>,
    /// Cursor for the next round
    pub cursor: usize,
}

/// Final state of a completed elimination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationOutcome {
    pub survivor: FlamesLetter,
    pub rounds: Vec<EliminationRound>,
}

/// Elimination state machine
///
/// # Examples
/// ```
/// use flames::core::FlamesLetter;
/// use flames::engine::Elimination;
///
/// let outcome = Elimination::new(3).run_to_completion();
/// assert_eq!(outcome.survivor, FlamesLetter::F);
/// assert_eq!(outcome.rounds.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    remaining: Vec<FlamesLetter>,
    cursor: usize,
    count: usize,
}

impl Elimination {
    /// Start a new elimination with the given remainder count
    ///
    /// A count of 0 is treated as 1 so that fully matched names still
    /// produce a result.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            remaining: FlamesLetter::SEQUENCE.to_vec(),
            cursor: 0,
            count: count.max(1),
        }
    }

    /// Count applied each round (after the zero fallback)
    #[inline]
    #[must_use]
    pub const fn effective_count(&self) -> usize {
        self.count
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &[FlamesLetter] {
        &self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.remaining.len() <= 1
    }

    /// The survivor, once terminal
    #[must_use]
    pub fn survivor(&self) -> Option<FlamesLetter> {
        if self.is_terminal() {
            self.remaining.first().copied()
        } else {
            None
        }
    }

    /// Perform one round; returns `None` when already terminal
    pub fn step(&mut self) -> Option<EliminationRound> {
        if self.is_terminal() {
            return None;
        }

        let len = self.remaining.len();
        // Reduce first so huge counts cannot overflow
        let index = (self.cursor + (self.count - 1) % len) % len;
        let eliminated = self.remaining.remove(index);
        self.cursor = index % self.remaining.len();

        trace!(
            %eliminated,
            index,
            cursor = self.cursor,
            left = self.remaining.len(),
            "elimination round"
        );

        Some(EliminationRound {
            eliminated,
            index,
            remaining: self.remaining.clone(),
            cursor: self.cursor,
        })
    }

    /// Run all remaining rounds and return the survivor with the round log
    #[must_use]
    pub fn run_to_completion(mut self) -> EliminationOutcome {
        let mut rounds = Vec::with_capacity(ROUNDS);
        while let Some(round) = self.step() {
            rounds.push(round);
        }

        // Six letters minus five removals: exactly one is left
        let survivor = self.remaining[0];
        EliminationOutcome { survivor, rounds }
    }
}

/// Survivor for a given remainder count
#[must_use]
pub fn eliminate(count: usize) -> FlamesLetter {
    Elimination::new(count).run_to_completion().survivor
}
