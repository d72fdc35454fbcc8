//! Simple interactive CLI mode
//!
//! Text-based manual cross-out without the TUI.

use crate::core::NameSide;
use crate::manual::{CrossOutTracker, LetterKey, ToggleOutcome};
use crate::output::formatters::strike_name;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A parsed user command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCommand {
    Toggle(LetterKey),
    Auto,
    Reset,
    Done,
    Quit,
}

/// Parse a command line such as `1 3`, `2 0`, `auto`, `reset`, `done`, `quit`
///
/// Positions are zero-based within the normalized name.
#[must_use]
pub fn parse_command(input: &str) -> Option<SimpleCommand> {
    let mut parts = input.split_whitespace();
    let head = parts.next()?.to_lowercase();

    let command = match head.as_str() {
        "auto" | "a" => SimpleCommand::Auto,
        "reset" | "r" => SimpleCommand::Reset,
        "done" | "d" => SimpleCommand::Done,
        "quit" | "q" | "exit" => SimpleCommand::Quit,
        "1" | "2" => {
            let side = if head == "1" {
                NameSide::First
            } else {
                NameSide::Second
            };
            let position = parts.next()?.parse().ok()?;
            SimpleCommand::Toggle(LetterKey::new(side, position))
        }
        _ => return None,
    };

    if parts.next().is_some() {
        return None;
    }
    Some(command)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut tracker: CrossOutTracker) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               FLAMES - Manual Cross-Out Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Cross out letters the two names have in common:");
    println!("  - '1 <pos>' toggles a letter of the first name");
    println!("  - '2 <pos>' toggles a letter of the second name");
    println!("  - 'auto' crosses out everything left, 'reset' starts over");
    println!("  - 'done' shows the result, 'quit' exits\n");

    loop {
        print_board(&tracker);

        // End of input (Ctrl-D or a drained pipe) quits
        let Some(input) = get_user_input("Command")? else {
            println!("\n👋 Bye!\n");
            return Ok(());
        };
        let Some(command) = parse_command(&input) else {
            println!("{}\n", "❌ Unknown command".red());
            continue;
        };

        match command {
            SimpleCommand::Toggle(key) => match tracker.toggle(key) {
                ToggleOutcome::Crossed { partner, .. } => {
                    println!(
                        "✓ Crossed out with position {} of the other name\n",
                        partner.position
                    );
                }
                ToggleOutcome::Uncrossed { .. } => println!("↺ Restored the pair\n"),
                ToggleOutcome::NoPartner => {
                    println!("{}\n", "No matching letter left in the other name".yellow());
                }
                ToggleOutcome::OutOfRange => println!("{}\n", "No letter at that position".red()),
            },
            SimpleCommand::Auto => tracker.complete(),
            SimpleCommand::Reset => tracker.reset(),
            SimpleCommand::Done => {
                print_result(&tracker);
                return Ok(());
            }
            SimpleCommand::Quit => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
        }
    }
}

fn print_board(tracker: &CrossOutTracker) {
    println!("────────────────────────────────────────────────────────────");
    for side in [NameSide::First, NameSide::Second] {
        let name = tracker.name(side);
        let struck = strike_name(name, |i| tracker.is_crossed(LetterKey::new(side, i)));
        let positions: String = (0..name.len()).map(|i| (i % 10).to_string()).collect();
        println!("  {}: {}", side.index() + 1, struck.bright_white().bold());
        println!("     {}", positions.bright_black());
    }
    println!(
        "  Remaining letters: {}{}",
        tracker.remaining_count().to_string().bright_cyan(),
        if tracker.is_maximal() {
            " (nothing left to cross)"
        } else {
            ""
        }
    );
    println!("────────────────────────────────────────────────────────────");
}

fn print_result(tracker: &CrossOutTracker) {
    let relationship = tracker.result().resolve();
    println!(
        "\n  {} letters remain → {} {}",
        tracker.remaining_count(),
        relationship.letter.to_string().bright_yellow().bold(),
        relationship.label.bright_green().bold()
    );
    println!("  {}", relationship.meaning);

    if !tracker.is_maximal() {
        println!(
            "{}",
            format!(
                "  Note: more letters could be crossed; the full count is {}",
                tracker.batch_remainder()
            )
            .yellow()
        );
    }
    println!();
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    Ok(read_trimmed_line(&mut io::stdin().lock())?)
}

/// Read one trimmed line, or `None` once the reader is exhausted
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
