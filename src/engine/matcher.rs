//! Common-letter matching between two names
//!
//! Pairs letters one-to-one with a stable greedy scan: each letter of the
//! first name takes the first unconsumed equal letter of the second name.
//! Which positions get struck out is visible to users, so the scan order is
//! fixed.

use crate::core::{Name, NameSide};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Matched letter pairs between two names
///
/// Pairs are bucketed by letter; each pair is `(index_in_first, index_in_second)`.
/// Every position of either name appears in at most one pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    buckets: FxHashMap<char, Vec<(usize, usize)>>,
    order: Vec<(char, usize, usize)>,
    consumed: [Vec<bool>; 2],
}

impl MatchSet {
    /// Total number of matched pairs
    #[inline]
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.order.len()
    }

    /// Pairs recorded for a letter, in the order they were found
    #[must_use]
    pub fn pairs(&self, letter: char) -> &[(usize, usize)] {
        self.buckets.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Distinct matched letters in first-match order
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = Vec::new();
        for &(letter, _, _) in &self.order {
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        }
        letters
    }

    /// One letter per matched pair, in match order
    #[must_use]
    pub fn common_letters(&self) -> Vec<char> {
        self.order.iter().map(|&(letter, _, _)| letter).collect()
    }

    /// All pairs as `(letter, index_in_first, index_in_second)`, in match order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize, usize)> + '_ {
        self.order.iter().copied()
    }

    /// Whether a position of one name was consumed by a pair
    #[must_use]
    pub fn is_matched(&self, side: NameSide, index: usize) -> bool {
        self.consumed[side.index()]
            .get(index)
            .copied()
            .unwrap_or(false)
    }
}

/// Find the greedy one-to-one letter matching between two names
///
/// # Examples
/// ```
/// use flames::core::Name;
/// use flames::engine::match_letters;
///
/// let matches = match_letters(&Name::new("Naren"), &Name::new("Priya"));
/// assert_eq!(matches.total_pairs(), 2);
/// assert_eq!(matches.pairs('a'), &[(1, 4)]);
/// assert_eq!(matches.pairs('r'), &[(2, 1)]);
/// ```
#[must_use]
pub fn match_letters(first: &Name, second: &Name) -> MatchSet {
    let a = first.letters();
    let b = second.letters();

    let mut consumed_a = vec![false; a.len()];
    let mut consumed_b = vec![false; b.len()];
    let mut buckets: FxHashMap<char, Vec<(usize, usize)>> = FxHashMap::default();
    let mut order = Vec::new();

    for (i, &letter) in a.iter().enumerate() {
        if consumed_a[i] {
            continue;
        }
        let found = b
            .iter()
            .enumerate()
            .find(|&(j, &other)| other == letter && !consumed_b[j])
            .map(|(j, _)| j);

        if let Some(j) = found {
            consumed_a[i] = true;
            consumed_b[j] = true;
            buckets.entry(letter).or_default().push((i, j));
            order.push((letter, i, j));
        }
    }

    debug!(
        first = %first.normalized(),
        second = %second.normalized(),
        pairs = order.len(),
        "matched common letters"
    );

    MatchSet {
        buckets,
        order,
        consumed: [consumed_a, consumed_b],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(a: &str, b: &str) -> MatchSet {
        match_letters(&Name::new(a), &Name::new(b))
    }

    #[test]
    fn naren_priya() {
        let m = matched("Naren", "Priya");
        assert_eq!(m.total_pairs(), 2);
        assert_eq!(m.letters(), vec!['a', 'r']);
        assert_eq!(m.pairs('a'), &[(1, 4)]);
        assert_eq!(m.pairs('r'), &[(2, 1)]);
        assert!(m.pairs('n').is_empty());
    }

    #[test]
    fn no_common_letters() {
        let m = matched("abc", "xyz");
        assert_eq!(m.total_pairs(), 0);
        assert!(m.letters().is_empty());
    }

    #[test]
    fn identical_names_fully_matched() {
        let m = matched("John", "John");
        assert_eq!(m.total_pairs(), 4);
        for i in 0..4 {
            assert!(m.is_matched(NameSide::First, i));
            assert!(m.is_matched(NameSide::Second, i));
        }
    }

    #[test]
    fn greedy_takes_first_unconsumed_occurrence() {
        // Both a's of the first name match left to right
        let m = matched("aa", "baba");
        assert_eq!(m.pairs('a'), &[(0, 1), (1, 3)]);
        assert!(!m.is_matched(NameSide::Second, 0));
        assert!(!m.is_matched(NameSide::Second, 2));
    }

    #[test]
    fn one_to_one_with_repeats() {
        // Three n's against one n: only one pair
        let m = matched("nnn", "an");
        assert_eq!(m.pairs('n'), &[(0, 1)]);
        assert!(m.is_matched(NameSide::First, 0));
        assert!(!m.is_matched(NameSide::First, 1));
        assert!(!m.is_matched(NameSide::First, 2));
    }

    #[test]
    fn each_index_used_at_most_once() {
        let m = matched("annabella", "hannah banana");
        let mut seen_first = Vec::new();
        let mut seen_second = Vec::new();
        for (letter, i, j) in m.iter() {
            assert!(!seen_first.contains(&i));
            assert!(!seen_second.contains(&j));
            assert_eq!(Name::new("annabella").letter_at(i), Some(letter));
            assert_eq!(Name::new("hannah banana").letter_at(j), Some(letter));
            seen_first.push(i);
            seen_second.push(j);
        }
    }

    #[test]
    fn whitespace_and_case_ignored() {
        let m = matched("Ann Lee", "LEAN");
        // a-n-n-l-e-e vs l-e-a-n
        assert_eq!(m.common_letters(), vec!['a', 'n', 'l', 'e']);
        assert_eq!(m.pairs('e'), &[(4, 1)]);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(matched("", "Bob").total_pairs(), 0);
        assert_eq!(matched("", "").total_pairs(), 0);
        assert!(!matched("", "").is_matched(NameSide::First, 0));
    }

    #[test]
    fn pair_assignment_depends_on_order() {
        // Counts are symmetric, assignments are not required to be
        let ab = matched("aab", "ba");
        let ba = matched("ba", "aab");
        assert_eq!(ab.total_pairs(), ba.total_pairs());
        assert_eq!(ab.pairs('a'), &[(0, 1)]);
        assert_eq!(ba.pairs('a'), &[(1, 0)]);
    }
}
