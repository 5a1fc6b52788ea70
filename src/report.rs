//! Console output.
//!
//! Human-readable status lines, one per processed file, framed by a start
//! banner and a closing summary. Wording is for people; use `--json` for
//! anything that parses the output.

use crate::editor::{Entry, Outcome, Summary};
use colored::Colorize;

pub fn print_banner(component: &str, file_count: usize) {
    println!(
        "{} Removing {} from {} files...\n",
        "info:".blue().bold(),
        component.bold(),
        file_count
    );
}

/// Prints the status line for one processed file.
pub fn print_entry(entry: &Entry, write: bool) {
    let path = entry.path.display();
    match entry.outcome {
        Outcome::NotFound => println!("{} File not found: {}", "warn:".yellow().bold(), path),
        Outcome::Updated => println!(
            "{} {}",
            if write { "Updated:" } else { "Would update:" }
                .green()
                .bold(),
            path
        ),
        Outcome::Unchanged => println!("{} {}", "No changes needed:".dimmed(), path),
    }
}

/// Prints the closing tally and where the component lives now.
pub fn print_summary(summary: &Summary, component: &str, layout: &str) {
    let verb = if summary.write { "Updated" } else { "Would update" };
    println!(
        "\n{} {} {} files.",
        "Done!".green().bold(),
        verb,
        summary.updated
    );

    let missing = summary.count(Outcome::NotFound);
    if missing > 0 {
        println!("      {} not found", missing.to_string().yellow());
    }

    println!(
        "{} {} is now only in {} (global layout)",
        "note:".cyan().bold(),
        component,
        layout
    );

    if !summary.write && summary.updated > 0 {
        println!("\n{} Run without --dry-run to apply changes", "hint:".cyan().bold());
    }
}
