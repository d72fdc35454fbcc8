//! Display functions for command results

use super::formatters::{create_progress_bar, sequence_line, strike_name};
use crate::commands::BatchResult;
use crate::core::{FlamesLetter, NameSide};
use crate::engine::FlamesResult;
use colored::Colorize;

/// Print the result of evaluating two names
pub fn print_flames_result(result: &FlamesResult, verbose: bool) {
    let (first, second) = &result.names;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {} {}",
        first.display().bright_yellow().bold(),
        "&".bright_black(),
        second.display().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let struck_first = strike_name(first, |i| result.match_set.is_matched(NameSide::First, i));
    let struck_second = strike_name(second, |i| result.match_set.is_matched(NameSide::Second, i));
    println!("\n  {struck_first}");
    println!("  {struck_second}");

    let common: String = result.common_letters.iter().collect();
    println!(
        "\n  Common letters:  {}",
        if common.is_empty() {
            "none".bright_black().to_string()
        } else {
            common.bright_white().to_string()
        }
    );
    println!(
        "  Remaining count: {}",
        result.remainder_count.to_string().bright_cyan().bold()
    );

    if verbose {
        println!("\n  {}", sequence_line(&FlamesLetter::SEQUENCE));
        for (i, round) in result.rounds.iter().enumerate() {
            println!(
                "  Round {}: remove {} → {}",
                i + 1,
                round.eliminated.to_string().red(),
                sequence_line(&round.remaining)
            );
        }
    }

    println!();
    println!(
        "{}",
        format!("💫 {} - {}", result.result, result.relationship.label)
            .green()
            .bold()
    );
    println!("   {}", result.relationship.meaning);
}

/// Print the result of a batch run
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Pairs read:        {}", result.total_pairs);
    println!(
        "   Evaluated:         {}",
        result.evaluated.to_string().bright_yellow().bold()
    );
    println!("   Rejected:          {}", result.rejected.len());
    println!("   Malformed lines:   {}", result.malformed.len());
    println!("   Average remainder: {:.2}", result.average_remainder);
    println!("   Time taken:        {:.3}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for letter in FlamesLetter::SEQUENCE {
        let count = result.count(letter);
        let pct = if result.evaluated > 0 {
            count as f64 / result.evaluated as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {} {:<9} {} {count:4} ({pct:5.1}%)",
            letter,
            letter.resolve().label,
            bar.green()
        );
    }

    if !result.rejected.is_empty() {
        println!("\n⚠️  {}", "Rejected pairs:".yellow().bold());
        for (line, err) in result.rejected.iter().take(10) {
            println!("   line {line}: {err}");
        }
        if result.rejected.len() > 10 {
            println!("   … and {} more", result.rejected.len() - 10);
        }
    }
}
