//! Batch evaluation of many name pairs
//!
//! Reads `name1,name2` lines, evaluates them in parallel and aggregates the
//! result distribution.

use crate::core::FlamesLetter;
use crate::engine::compute_flames;
use crate::validation::{NameError, NameRules};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    pub line: usize,
    pub first: String,
    pub second: String,
}

/// Result of parsing a pairs file
#[derive(Debug, Default)]
pub struct ParsedPairs {
    pub pairs: Vec<NamePair>,
    /// Line numbers without a comma separator
    pub malformed: Vec<usize>,
}

/// Outcome for a single pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutcome {
    Evaluated {
        result: FlamesLetter,
        remainder: usize,
    },
    Rejected(NameError),
}

/// Aggregated batch statistics
#[derive(Debug)]
pub struct BatchResult {
    pub total_pairs: usize,
    pub evaluated: usize,
    pub rejected: Vec<(usize, NameError)>,
    pub malformed: Vec<usize>,
    pub distribution: FxHashMap<FlamesLetter, usize>,
    pub average_remainder: f64,
    pub duration: Duration,
}

impl BatchResult {
    /// Count for a letter (zero when absent)
    #[must_use]
    pub fn count(&self, letter: FlamesLetter) -> usize {
        self.distribution.get(&letter).copied().unwrap_or(0)
    }
}

/// Parse `name1,name2` lines
///
/// Blank lines and lines starting with `#` are skipped. Only the first comma
/// separates the names; both sides are trimmed.
#[must_use]
pub fn parse_pairs(content: &str) -> ParsedPairs {
    let mut parsed = ParsedPairs::default();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match trimmed.split_once(',') {
            Some((first, second)) => parsed.pairs.push(NamePair {
                line,
                first: first.trim().to_string(),
                second: second.trim().to_string(),
            }),
            None => parsed.malformed.push(line),
        }
    }

    parsed
}

/// Load and parse a pairs file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<ParsedPairs> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pairs file {}", path.display()))?;
    let parsed = parse_pairs(&content);
    info!(
        path = %path.display(),
        pairs = parsed.pairs.len(),
        malformed = parsed.malformed.len(),
        "loaded pairs"
    );
    Ok(parsed)
}

/// Evaluate one pair, validating first when rules are given
#[must_use]
pub fn evaluate_pair(pair: &NamePair, rules: Option<&NameRules>) -> PairOutcome {
    if let Some(rules) = rules
        && let Err(err) = rules.validate_pair(&pair.first, &pair.second)
    {
        debug!(line = pair.line, %err, "rejected pair");
        return PairOutcome::Rejected(err);
    }

    let result = compute_flames(&pair.first, &pair.second);
    PairOutcome::Evaluated {
        result: result.result,
        remainder: result.remainder_count,
    }
}

/// Evaluate all pairs in parallel
pub fn run_batch(
    parsed: ParsedPairs,
    rules: Option<&NameRules>,
    show_progress: bool,
) -> BatchResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(parsed.pairs.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<(usize, PairOutcome)> = parsed
        .pairs
        .par_iter()
        .map(|pair| {
            let outcome = evaluate_pair(pair, rules);
            pb.inc(1);
            (pair.line, outcome)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut distribution: FxHashMap<FlamesLetter, usize> = FxHashMap::default();
    let mut rejected = Vec::new();
    let mut remainder_sum = 0usize;

    for (line, outcome) in outcomes {
        match outcome {
            PairOutcome::Evaluated { result, remainder } => {
                *distribution.entry(result).or_insert(0) += 1;
                remainder_sum += remainder;
            }
            PairOutcome::Rejected(err) => rejected.push((line, err)),
        }
    }

    let evaluated: usize = distribution.values().sum();
    let average_remainder = if evaluated > 0 {
        remainder_sum as f64 / evaluated as f64
    } else {
        0.0
    };

    BatchResult {
        total_pairs: parsed.pairs.len(),
        evaluated,
        rejected,
        malformed: parsed.malformed,
        distribution,
        average_remainder,
        duration: start.elapsed(),
    }
}
