//! FLAMES - CLI
//!
//! Evaluate name pairs directly, in bulk, or by crossing letters out by hand.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flames::{
    commands::{evaluate_names, load_pairs, run_batch, run_simple},
    manual::CrossOutTracker,
    output::{print_batch_result, print_flames_result},
    validation::{DEFAULT_MAX_LEN, NameRules},
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "flames",
    about = "FLAMES name matching: Friends, Love, Affection, Marriage, Enemy, Siblings",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum name length accepted by validation
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Accept digits in names
    #[arg(long, global = true)]
    allow_digits: bool,

    /// Skip name validation entirely
    #[arg(long, global = true)]
    no_validate: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate two names
    Match {
        name1: String,
        name2: String,

        /// Show every elimination round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Cross out letters by hand in the TUI
    Manual { name1: String, name2: String },

    /// Cross out letters by hand without the TUI
    Simple { name1: String, name2: String },

    /// Evaluate every `name1,name2` line of a file
    Batch {
        /// Path to the pairs file
        file: PathBuf,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Cli {
    fn rules(&self) -> Option<NameRules> {
        (!self.no_validate).then_some(NameRules {
            max_len: self.max_len,
            allow_digits: self.allow_digits,
        })
    }
}

fn init_tracing(tui: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Writing to stderr would corrupt the alternate screen
    if tui {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(matches!(cli.command, Commands::Manual { .. }));

    let rules = cli.rules();

    match &cli.command {
        Commands::Match {
            name1,
            name2,
            verbose,
        } => run_match_command(name1, name2, *verbose, rules.as_ref()),
        Commands::Manual { name1, name2 } => run_manual_command(name1, name2, rules.as_ref()),
        Commands::Simple { name1, name2 } => {
            validate_names(name1, name2, rules.as_ref())?;
            run_simple(CrossOutTracker::from_strs(name1, name2))
        }
        Commands::Batch { file, quiet } => run_batch_command(file, !*quiet, rules.as_ref()),
    }
}

fn validate_names(name1: &str, name2: &str, rules: Option<&NameRules>) -> Result<()> {
    if let Some(rules) = rules {
        rules
            .validate_pair(name1, name2)
            .with_context(|| format!("Cannot match '{name1}' with '{name2}'"))?;
    }
    Ok(())
}

fn run_match_command(
    name1: &str,
    name2: &str,
    verbose: bool,
    rules: Option<&NameRules>,
) -> Result<()> {
    let result = evaluate_names(name1, name2, rules)
        .with_context(|| format!("Cannot match '{name1}' with '{name2}'"))?;
    print_flames_result(&result, verbose);
    Ok(())
}

fn run_manual_command(name1: &str, name2: &str, rules: Option<&NameRules>) -> Result<()> {
    use flames::interactive::{App, run_tui};

    validate_names(name1, name2, rules)?;
    let app = App::new(CrossOutTracker::from_strs(name1, name2));
    run_tui(app)
}

fn run_batch_command(file: &Path, show_progress: bool, rules: Option<&NameRules>) -> Result<()> {
    let parsed = load_pairs(file)?;
    println!("🔥 Evaluating {} pairs...", parsed.pairs.len());

    let result = run_batch(parsed, rules, show_progress);
    print_batch_result(&result);
    Ok(())
}
