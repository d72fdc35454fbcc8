//! FLAMES letters and their meanings

use std::fmt;

/// One of the six FLAMES letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlamesLetter {
    F,
    L,
    A,
    M,
    E,
    S,
}

/// Display meaning of a FLAMES letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship {
    pub letter: FlamesLetter,
    pub label: &'static str,
    pub meaning: &'static str,
}

impl FlamesLetter {
    /// Starting order of the elimination sequence
    pub const SEQUENCE: [Self; 6] = [Self::F, Self::L, Self::A, Self::M, Self::E, Self::S];

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::F => 'F',
            Self::L => 'L',
            Self::A => 'A',
            Self::M => 'M',
            Self::E => 'E',
            Self::S => 'S',
        }
    }

    /// Parse a letter, case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'F' => Some(Self::F),
            'L' => Some(Self::L),
            'A' => Some(Self::A),
            'M' => Some(Self::M),
            'E' => Some(Self::E),
            'S' => Some(Self::S),
            _ => None,
        }
    }

    /// Look up the meaning of this letter
    ///
    /// # Examples
    /// ```
    /// use flames::core::FlamesLetter;
    ///
    /// assert_eq!(FlamesLetter::M.resolve().label, "Marriage");
    /// ```
    #[must_use]
    pub const fn resolve(self) -> Relationship {
        let (label, meaning) = match self {
            Self::F => ("Friends", "Good company, no strings attached"),
            Self::L => ("Love", "A romantic spark between the two"),
            Self::A => ("Affection", "Warm, caring feelings for each other"),
            Self::M => ("Marriage", "Headed for a lifelong partnership"),
            Self::E => ("Enemy", "Sparks of the wrong kind"),
            Self::S => ("Siblings", "Close like family"),
        };
        Relationship {
            letter: self,
            label,
            meaning,
        }
    }
}

impl fmt::Display for FlamesLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_order() {
        let text: String = FlamesLetter::SEQUENCE.iter().map(|l| l.as_char()).collect();
        assert_eq!(text, "FLAMES");
    }

    #[test]
    fn resolve_labels() {
        let labels: Vec<&str> = FlamesLetter::SEQUENCE
            .iter()
            .map(|l| l.resolve().label)
            .collect();
        assert_eq!(
            labels,
            ["Friends", "Love", "Affection", "Marriage", "Enemy", "Siblings"]
        );
    }

    #[test]
    fn resolve_keeps_letter() {
        for letter in FlamesLetter::SEQUENCE {
            assert_eq!(letter.resolve().letter, letter);
            assert!(!letter.resolve().meaning.is_empty());
        }
    }

    #[test]
    fn from_char_roundtrip_and_case() {
        for letter in FlamesLetter::SEQUENCE {
            assert_eq!(FlamesLetter::from_char(letter.as_char()), Some(letter));
        }
        assert_eq!(FlamesLetter::from_char('m'), Some(FlamesLetter::M));
        assert_eq!(FlamesLetter::from_char('x'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", FlamesLetter::E), "E");
        assert_eq!(format!("{}", FlamesLetter::E.resolve()), "Enemy");
    }
}
