//! Core domain types for FLAMES
//!
//! Names, their normalized letters, and the six FLAMES letters with their
//! meanings. Everything here is pure and allocation-local.

mod letter;
mod name;

pub use letter::{FlamesLetter, Relationship};
pub use name::{Name, normalize};

/// Which of the two input names a position belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameSide {
    First,
    Second,
}

impl NameSide {
    /// The other name
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Zero-based index (0 for the first name, 1 for the second)
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}
