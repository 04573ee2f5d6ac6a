//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::types::Record;
use console::style;
use std::io::{self, Write};

const RULE: &str = "═══════════════════════════════════════════════════════════════";

/// Write the collection as a list of book cards.
pub fn write_plain<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(RULE).green())?;
    writeln!(out, "                   {}", style("Your Book Collection").green().bold())?;
    writeln!(out, "{}", style(RULE).green())?;
    writeln!(out)?;

    if records.is_empty() {
        write_warning(out, "Your library is empty!")?;
        writeln!(out)?;
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        writeln!(
            out,
            "  {} {} {}",
            style(format!("{:>3}.", i + 1)).dim(),
            style("Title: ").bold(),
            record.title
        )?;
        writeln!(out, "       {} {}", style("Author:").bold(), record.author)?;
        writeln!(
            out,
            "       {} {}",
            style("Rating:").bold(),
            style(format_rating(record.rating)).yellow()
        )?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "  {} {}",
        style(records.len()).bold(),
        if records.len() == 1 { "book" } else { "books" }
    )?;
    writeln!(out)?;

    Ok(())
}

/// Show a rating with one decimal, and a star bar when it is in range.
fn format_rating(rating: f64) -> String {
    if !(0.0..=5.0).contains(&rating) {
        return rating.to_string();
    }
    let full = rating.floor() as usize;
    let half = rating - rating.floor() >= 0.5;
    let stars = format!("{}{}", "★".repeat(full), if half { "½" } else { "" });
    format!("{:.1} {}", rating, stars)
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Write a warning message.
pub fn write_warning<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", style("!").yellow().bold(), style(msg).yellow())
}

/// Write a success message.
pub fn write_success<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", style("✓").green().bold(), msg)
}

/// Write an info message.
pub fn write_info<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", style("ℹ").blue().bold(), msg)
}
