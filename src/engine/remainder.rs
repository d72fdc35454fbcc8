//! Remainder counting

use super::MatchSet;
use crate::core::Name;

/// Count of letters left after crossing out every matched pair
///
/// `len(first) + len(second) - 2 × pairs`. Never negative: a match set
/// cannot hold more pairs than either name has letters.
///
/// # Examples
/// ```
/// use flames::core::Name;
/// use flames::engine::{match_letters, remainder};
///
/// let (a, b) = (Name::new("Naren"), Name::new("Priya"));
/// let matches = match_letters(&a, &b);
/// assert_eq!(remainder(&a, &b, &matches), 6);
/// ```
#[must_use]
pub fn remainder(first: &Name, second: &Name, matches: &MatchSet) -> usize {
    (first.len() + second.len()).saturating_sub(2 * matches.total_pairs())
}
