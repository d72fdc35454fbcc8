//! Input validation for names
//!
//! The engine accepts any string; this is where the application rejects
//! names before they reach it.

use crate::core::normalize;
use thiserror::Error;

/// Default maximum name length, in characters
pub const DEFAULT_MAX_LEN: usize = 50;

/// Reasons a name is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name is too long: {len} characters (max {max})")]
    TooLong { len: usize, max: usize },
    #[error("Name contains an invalid character: {0:?}")]
    InvalidCharacter(char),
    #[error("Name must contain at least one letter")]
    NoLetters,
    #[error("Names must be different")]
    Identical,
}

/// Validation limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRules {
    pub max_len: usize,
    pub allow_digits: bool,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            allow_digits: false,
        }
    }
}

impl NameRules {
    /// Check a single name
    ///
    /// # Errors
    /// Returns `NameError` if the name is blank, longer than `max_len`,
    /// holds a character other than letters, whitespace, `'`, `-`, `.`
    /// (and digits when allowed), or has no letters at all.
    ///
    /// # Examples
    /// ```
    /// use flames::validation::{NameError, NameRules};
    ///
    /// let rules = NameRules::default();
    /// assert!(rules.validate("Mary-Jane O'Neil").is_ok());
    /// assert_eq!(rules.validate("  "), Err(NameError::Empty));
    /// ```
    pub fn validate(&self, name: &str) -> Result<(), NameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed.chars().count();
        if len > self.max_len {
            return Err(NameError::TooLong {
                len,
                max: self.max_len,
            });
        }

        if let Some(bad) = trimmed.chars().find(|&c| !self.is_allowed(c)) {
            return Err(NameError::InvalidCharacter(bad));
        }

        if !trimmed.chars().any(char::is_alphabetic) {
            return Err(NameError::NoLetters);
        }

        Ok(())
    }

    /// Check both names, and that they differ after normalization
    ///
    /// # Errors
    /// Returns the first error found in either name, or `NameError::Identical`.
    pub fn validate_pair(&self, first: &str, second: &str) -> Result<(), NameError> {
        self.validate(first)?;
        self.validate(second)?;

        if normalize(first) == normalize(second) {
            return Err(NameError::Identical);
        }

        Ok(())
    }

    fn is_allowed(&self, c: char) -> bool {
        c.is_alphabetic()
            || c.is_whitespace()
            || matches!(c, '\'' | '-' | '.')
            || (self.allow_digits && c.is_ascii_digit())
    }
}
