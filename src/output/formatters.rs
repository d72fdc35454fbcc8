//! Formatting utilities for terminal output

use crate::core::{FlamesLetter, Name};

/// Combining long stroke overlay, drawn over the preceding character
const STRIKE: char = '\u{0336}';

/// Render a name's normalized letters, striking the ones `is_struck` selects
///
/// # Examples
/// ```
/// use flames::core::Name;
/// use flames::output::formatters::strike_name;
///
/// let name = Name::new("Bob");
/// assert_eq!(strike_name(&name, |i| i == 1), "bo\u{336}b");
/// ```
#[must_use]
pub fn strike_name(name: &Name, is_struck: impl Fn(usize) -> bool) -> String {
    let mut result = String::with_capacity(name.len() * 2);
    for (i, &letter) in name.letters().iter().enumerate() {
        result.push(letter);
        if is_struck(i) {
            result.push(STRIKE);
        }
    }
    result
}

/// Render a FLAMES sequence as space-separated letters
#[must_use]
pub fn sequence_line(letters: &[FlamesLetter]) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strike_nothing() {
        let name = Name::new("Naren");
        assert_eq!(strike_name(&name, |_| false), "naren");
    }

    #[test]
    fn strike_selected_letters() {
        let name = Name::new("Naren");
        let struck = strike_name(&name, |i| i == 1 || i == 2);
        assert_eq!(struck, "na\u{336}r\u{336}en");
    }

    #[test]
    fn strike_uses_normalized_letters() {
        let name = Name::new("Ann Lee");
        assert_eq!(strike_name(&name, |_| false), "annlee");
    }

    #[test]
    fn sequence_full() {
        assert_eq!(sequence_line(&FlamesLetter::SEQUENCE), "F L A M E S");
        assert_eq!(sequence_line(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
