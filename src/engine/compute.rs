//! One-call FLAMES evaluation

use super::{EliminationRound, Elimination, MatchSet, match_letters, remainder};
use crate::core::{FlamesLetter, Name, Relationship};
use tracing::debug;

/// Full result of evaluating two names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlamesResult {
    pub result: FlamesLetter,
    pub relationship: Relationship,
    /// One letter per crossed-out pair, in match order
    pub common_letters: Vec<char>,
    pub remainder_count: usize,
    pub match_set: MatchSet,
    pub rounds: Vec<EliminationRound>,
    pub names: (Name, Name),
}

/// Evaluate two names
///
/// Defined for every pair of strings, including empty ones.
///
/// # Examples
/// ```
/// use flames::core::FlamesLetter;
/// use flames::engine::compute_flames;
///
/// let result = compute_flames("Naren", "Priya");
/// assert_eq!(result.common_letters, vec!['a', 'r']);
/// assert_eq!(result.remainder_count, 6);
/// assert_eq!(result.result, FlamesLetter::M);
/// ```
#[must_use]
pub fn compute_flames(name1: &str, name2: &str) -> FlamesResult {
    let first = Name::new(name1);
    let second = Name::new(name2);

    let match_set = match_letters(&first, &second);
    let remainder_count = remainder(&first, &second, &match_set);
    let outcome = Elimination::new(remainder_count).run_to_completion();

    debug!(
        remainder = remainder_count,
        result = %outcome.survivor,
        "computed flames"
    );

    FlamesResult {
        result: outcome.survivor,
        relationship: outcome.survivor.resolve(),
        common_letters: match_set.common_letters(),
        remainder_count,
        match_set,
        rounds: outcome.rounds,
        names: (first, second),
    }
}
