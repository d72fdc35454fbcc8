//! Name representation and normalization
//!
//! A Name keeps the caller's display string untouched and derives a normalized
//! form (lowercase, whitespace removed) used for every comparison.

use std::fmt;

/// Normalize a name for comparison
///
/// Removes all whitespace and lowercases the rest. Letter order is preserved
/// and any string, including the empty one, is accepted.
///
/// # Examples
/// ```
/// use flames::core::normalize;
///
/// assert_eq!(normalize("Mary Jane"), "maryjane");
/// assert_eq!(normalize("  "), "");
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A name as given by the caller, with its normalized letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    display: String,
    letters: Vec<char>,
}

impl Name {
    /// Create a new Name, deriving the normalized letters
    ///
    /// # Examples
    /// ```
    /// use flames::core::Name;
    ///
    /// let name = Name::new("Naren K");
    /// assert_eq!(name.display(), "Naren K");
    /// assert_eq!(name.normalized(), "narenk");
    /// assert_eq!(name.len(), 6);
    /// ```
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        let letters = normalize(&display).chars().collect();
        Self { display, letters }
    }

    /// The original string, unchanged
    #[inline]
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The normalized letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The normalized form as a String
    #[must_use]
    pub fn normalized(&self) -> String {
        self.letters.iter().collect()
    }

    /// Letter at a normalized position, if in range
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// Number of normalized letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Positions at which `letter` occurs, in index order
    pub fn positions_of(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == letter)
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}
