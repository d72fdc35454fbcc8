//! Manual cross-out mode
//!
//! Users strike letters one at a time. Striking a letter in one name also
//! strikes the first free occurrence of the same letter in the other name,
//! and un-striking either one clears both. Marks are stored per position as
//! `Unpaired` or `Paired(partner)`, so a struck letter always has a partner.

use crate::core::{FlamesLetter, Name, NameSide};
use crate::engine::{eliminate, match_letters, remainder};
use tracing::debug;

/// A letter position within one of the two names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterKey {
    pub side: NameSide,
    pub position: usize,
}

impl LetterKey {
    #[must_use]
    pub const fn new(side: NameSide, position: usize) -> Self {
        Self { side, position }
    }

    #[must_use]
    pub const fn first(position: usize) -> Self {
        Self::new(NameSide::First, position)
    }

    #[must_use]
    pub const fn second(position: usize) -> Self {
        Self::new(NameSide::Second, position)
    }
}

/// Mark on a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossMark {
    #[default]
    Unpaired,
    Paired(LetterKey),
}

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Crossed { key: LetterKey, partner: LetterKey },
    Uncrossed { key: LetterKey, partner: LetterKey },
    /// No free occurrence of the letter in the other name
    NoPartner,
    OutOfRange,
}

impl ToggleOutcome {
    /// Whether the toggle changed any marks
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Crossed { .. } | Self::Uncrossed { .. })
    }
}

/// Crossed-letter state for one manual session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossOutTracker {
    names: [Name; 2],
    marks: [Vec<CrossMark>; 2],
}

impl CrossOutTracker {
    #[must_use]
    pub fn new(first: Name, second: Name) -> Self {
        let marks = [
            vec![CrossMark::Unpaired; first.len()],
            vec![CrossMark::Unpaired; second.len()],
        ];
        Self {
            names: [first, second],
            marks,
        }
    }

    /// Convenience constructor from raw strings
    #[must_use]
    pub fn from_strs(first: &str, second: &str) -> Self {
        Self::new(Name::new(first), Name::new(second))
    }

    #[must_use]
    pub fn name(&self, side: NameSide) -> &Name {
        &self.names[side.index()]
    }

    #[must_use]
    pub fn letter_at(&self, key: LetterKey) -> Option<char> {
        self.name(key.side).letter_at(key.position)
    }

    fn mark(&self, key: LetterKey) -> Option<CrossMark> {
        self.marks[key.side.index()].get(key.position).copied()
    }

    fn set_mark(&mut self, key: LetterKey, mark: CrossMark) {
        self.marks[key.side.index()][key.position] = mark;
    }

    #[must_use]
    pub fn is_crossed(&self, key: LetterKey) -> bool {
        matches!(self.mark(key), Some(CrossMark::Paired(_)))
    }

    #[must_use]
    pub fn partner_of(&self, key: LetterKey) -> Option<LetterKey> {
        match self.mark(key)? {
            CrossMark::Paired(partner) => Some(partner),
            CrossMark::Unpaired => None,
        }
    }

    /// First uncrossed occurrence of `letter` on `side`
    fn free_occurrence(&self, side: NameSide, letter: char) -> Option<LetterKey> {
        self.name(side)
            .positions_of(letter)
            .map(|position| LetterKey::new(side, position))
            .find(|&key| !self.is_crossed(key))
    }

    /// Cross or uncross a letter together with its partner
    ///
    /// # Examples
    /// ```
    /// use flames::manual::{CrossOutTracker, LetterKey, ToggleOutcome};
    ///
    /// let mut tracker = CrossOutTracker::from_strs("Naren", "Priya");
    /// let outcome = tracker.toggle(LetterKey::first(1));
    /// assert_eq!(
    ///     outcome,
    ///     ToggleOutcome::Crossed { key: LetterKey::first(1), partner: LetterKey::second(4) }
    /// );
    /// assert_eq!(tracker.remaining_count(), 8);
    /// ```
    pub fn toggle(&mut self, key: LetterKey) -> ToggleOutcome {
        let Some(mark) = self.mark(key) else {
            return ToggleOutcome::OutOfRange;
        };

        let outcome = match mark {
            CrossMark::Paired(partner) => {
                self.set_mark(key, CrossMark::Unpaired);
                self.set_mark(partner, CrossMark::Unpaired);
                ToggleOutcome::Uncrossed { key, partner }
            }
            CrossMark::Unpaired => {
                let partner = self
                    .letter_at(key)
                    .and_then(|letter| self.free_occurrence(key.side.other(), letter));
                match partner {
                    Some(partner) => {
                        self.set_mark(key, CrossMark::Paired(partner));
                        self.set_mark(partner, CrossMark::Paired(key));
                        ToggleOutcome::Crossed { key, partner }
                    }
                    None => ToggleOutcome::NoPartner,
                }
            }
        };

        debug!(?key, ?outcome, remaining = self.remaining_count(), "toggle");
        outcome
    }

    /// Copy of this tracker with `key` toggled; `self` is left untouched
    #[must_use]
    pub fn toggled(&self, key: LetterKey) -> Self {
        let mut next = self.clone();
        next.toggle(key);
        next
    }

    /// Number of crossed positions across both names
    #[must_use]
    pub fn crossed_count(&self) -> usize {
        self.marks
            .iter()
            .flatten()
            .filter(|mark| matches!(mark, CrossMark::Paired(_)))
            .count()
    }

    /// All crossed positions, first name then second, in index order
    #[must_use]
    pub fn crossed_keys(&self) -> Vec<LetterKey> {
        [NameSide::First, NameSide::Second]
            .into_iter()
            .flat_map(|side| {
                self.marks[side.index()]
                    .iter()
                    .enumerate()
                    .filter(|(_, mark)| matches!(mark, CrossMark::Paired(_)))
                    .map(move |(position, _)| LetterKey::new(side, position))
            })
            .collect()
    }

    /// Letters not yet crossed, usable as the elimination count
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.names[0].len() + self.names[1].len() - self.crossed_count()
    }

    /// Whether no further letter can be crossed
    #[must_use]
    pub fn is_maximal(&self) -> bool {
        (0..self.names[0].len())
            .map(LetterKey::first)
            .filter(|&key| !self.is_crossed(key))
            .filter_map(|key| self.letter_at(key))
            .all(|letter| self.free_occurrence(NameSide::Second, letter).is_none())
    }

    /// Cross out everything still crossable, scanning the first name in order
    ///
    /// On a fresh tracker this yields exactly the batch matcher's pairs.
    pub fn complete(&mut self) {
        for position in 0..self.names[0].len() {
            let key = LetterKey::first(position);
            if !self.is_crossed(key) {
                self.toggle(key);
            }
        }
    }

    /// Clear every mark
    pub fn reset(&mut self) {
        for marks in &mut self.marks {
            marks.fill(CrossMark::Unpaired);
        }
    }

    /// Elimination result for the current remaining count
    #[must_use]
    pub fn result(&self) -> FlamesLetter {
        eliminate(self.remaining_count())
    }

    /// Remainder the batch engine computes for the same names
    #[must_use]
    pub fn batch_remainder(&self) -> usize {
        let [first, second] = &self.names;
        remainder(first, second, &match_letters(first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_flames;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_pairing_invariant(tracker: &CrossOutTracker) {
        for key in tracker.crossed_keys() {
            let partner = tracker.partner_of(key).unwrap();
            assert_ne!(partner.side, key.side);
            assert_eq!(tracker.partner_of(partner), Some(key));
            assert_eq!(tracker.letter_at(partner), tracker.letter_at(key));
        }
    }

    #[test]
    fn crossing_pairs_with_first_free_occurrence() {
        let mut tracker = CrossOutTracker::from_strs("Anna", "Hannah");
        // a at 0 pairs with the a at 1 in "hannah"
        assert_eq!(
            tracker.toggle(LetterKey::first(0)),
            ToggleOutcome::Crossed {
                key: LetterKey::first(0),
                partner: LetterKey::second(1)
            }
        );
        // second a pairs with the next free a at 4
        assert_eq!(
            tracker.toggle(LetterKey::first(3)),
            ToggleOutcome::Crossed {
                key: LetterKey::first(3),
                partner: LetterKey::second(4)
            }
        );
        assert_pairing_invariant(&tracker);
    }

    #[test]
    fn crossing_from_second_name() {
        let mut tracker = CrossOutTracker::from_strs("Naren", "Priya");
        let outcome = tracker.toggle(LetterKey::second(1));
        assert_eq!(
            outcome,
            ToggleOutcome::Crossed {
                key: LetterKey::second(1),
                partner: LetterKey::first(2)
            }
        );
        assert!(tracker.is_crossed(LetterKey::first(2)));
    }

    #[test]
    fn uncrossing_clears_both() {
        let mut tracker = CrossOutTracker::from_strs("Naren", "Priya");
        tracker.toggle(LetterKey::first(1));
        // Uncross via the partner
        let outcome = tracker.toggle(LetterKey::second(4));
        assert_eq!(
            outcome,
            ToggleOutcome::Uncrossed {
                key: LetterKey::second(4),
                partner: LetterKey::first(1)
            }
        );
        assert_eq!(tracker.crossed_count(), 0);
    }

    #[test]
    fn uncross_restores_specific_partner() {
        let mut tracker = CrossOutTracker::from_strs("aa", "aa");
        tracker.toggle(LetterKey::second(1)); // pairs with first(0)
        tracker.toggle(LetterKey::first(1)); // pairs with second(0)
        assert_eq!(tracker.partner_of(LetterKey::second(1)), Some(LetterKey::first(0)));

        tracker.toggle(LetterKey::first(0));
        assert!(!tracker.is_crossed(LetterKey::second(1)));
        assert!(tracker.is_crossed(LetterKey::first(1)));
        assert!(tracker.is_crossed(LetterKey::second(0)));
        assert_pairing_invariant(&tracker);
    }

    #[test]
    fn no_partner_is_noop() {
        let mut tracker = CrossOutTracker::from_strs("Naren", "Priya");
        let before = tracker.clone();
        assert_eq!(tracker.toggle(LetterKey::first(0)), ToggleOutcome::NoPartner);
        assert_eq!(tracker, before);
    }

    #[test]
    fn exhausted_letter_has_no_partner() {
        let mut tracker = CrossOutTracker::from_strs("nn", "n");
        tracker.toggle(LetterKey::first(0));
        assert_eq!(tracker.toggle(LetterKey::first(1)), ToggleOutcome::NoPartner);
        assert_eq!(tracker.crossed_count(), 2);
    }

    #[test]
    fn out_of_range_ignored() {
        let mut tracker = CrossOutTracker::from_strs("Bob", "Bo");
        assert_eq!(tracker.toggle(LetterKey::second(5)), ToggleOutcome::OutOfRange);
        assert!(!ToggleOutcome::OutOfRange.changed());
        assert_eq!(tracker.crossed_count(), 0);
    }

    #[test]
    fn double_toggle_is_identity() {
        let original = CrossOutTracker::from_strs("Mary Jane", "Marian");
        let mut partially = original.clone();
        partially.toggle(LetterKey::first(1));

        for tracker in [original, partially] {
            for side in [NameSide::First, NameSide::Second] {
                for position in 0..tracker.name(side).len() {
                    let key = LetterKey::new(side, position);
                    assert_eq!(tracker.toggled(key).toggled(key), tracker, "{key:?}");
                }
            }
        }
    }

    #[test]
    fn toggled_leaves_original() {
        let tracker = CrossOutTracker::from_strs("Naren", "Priya");
        let next = tracker.toggled(LetterKey::first(2));
        assert_eq!(tracker.crossed_count(), 0);
        assert_eq!(next.crossed_count(), 2);
    }

    #[test]
    fn remaining_count_tracks_crossings() {
        let mut tracker = CrossOutTracker::from_strs("Naren", "Priya");
        assert_eq!(tracker.remaining_count(), 10);
        tracker.toggle(LetterKey::first(1));
        assert_eq!(tracker.remaining_count(), 8);
        tracker.toggle(LetterKey::first(2));
        assert_eq!(tracker.remaining_count(), 6);
        assert!(tracker.is_maximal());
        assert_eq!(tracker.result(), FlamesLetter::M);
    }

    #[test]
    fn complete_matches_batch_pairs() {
        for (a, b) in [("Naren", "Priya"), ("Annabella", "Hannah Banana"), ("John", "John")] {
            let mut tracker = CrossOutTracker::from_strs(a, b);
            tracker.complete();

            let batch = compute_flames(a, b);
            for (_, i, j) in batch.match_set.iter() {
                assert_eq!(tracker.partner_of(LetterKey::first(i)), Some(LetterKey::second(j)));
            }
            assert_eq!(tracker.crossed_count(), 2 * batch.match_set.total_pairs());
            assert_eq!(tracker.result(), batch.result);
        }
    }

    #[test]
    fn reset_clears() {
        let mut tracker = CrossOutTracker::from_strs("John", "John");
        tracker.complete();
        assert_eq!(tracker.remaining_count(), 0);
        tracker.reset();
        assert_eq!(tracker, CrossOutTracker::from_strs("John", "John"));
    }

    #[test]
    fn random_toggles_converge_to_batch_count() {
        let mut rng = StdRng::seed_from_u64(0x0F1A_4E55);
        let alphabet = ['a', 'b', 'c', 'n', 'r', ' '];

        for _ in 0..200 {
            let mut random_name = || -> String {
                let len = rng.random_range(0..10);
                (0..len)
                    .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                    .collect()
            };
            let (a, b) = (random_name(), random_name());
            let mut tracker = CrossOutTracker::from_strs(&a, &b);

            for _ in 0..30 {
                let side = if rng.random_bool(0.5) {
                    NameSide::First
                } else {
                    NameSide::Second
                };
                let position = rng.random_range(0..=tracker.name(side).len());
                tracker.toggle(LetterKey::new(side, position));
                assert_pairing_invariant(&tracker);
            }

            tracker.complete();
            assert!(tracker.is_maximal());
            assert_eq!(tracker.remaining_count(), tracker.batch_remainder(), "{a:?} / {b:?}");
        }
    }
}
