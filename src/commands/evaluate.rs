//! Name pair evaluation command
//!
//! Validates two names and runs the engine on them.

use crate::engine::{FlamesResult, compute_flames};
use crate::validation::{NameError, NameRules};

/// Validate (unless `rules` is `None`) and evaluate two names
///
/// # Errors
///
/// Returns `NameError` if validation is enabled and either name is rejected
/// or the names are identical.
pub fn evaluate_names(
    name1: &str,
    name2: &str,
    rules: Option<&NameRules>,
) -> Result<FlamesResult, NameError> {
    if let Some(rules) = rules {
        rules.validate_pair(name1, name2)?;
    }
    Ok(compute_flames(name1, name2))
}
