//! Line-oriented form input.
//!
//! `Prompter` reads answers from any `BufRead` and writes prompts to any
//! `Write`, so the interactive flows run the same against a terminal or an
//! in-memory buffer.

use crate::error::{CliError, CliResult};
use crate::output;
use crate::types::Rating;
use console::style;
use std::io::{self, BufRead, Write};

/// Prompts for form fields and picks.
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given reader and writer.
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Writer that prompts and messages go to.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the prompter, returning its writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Ask for a line of text. An empty answer takes the default, if any.
    pub fn text(&mut self, label: &str, default: Option<&str>) -> CliResult<String> {
        let answer = self.ask(label, default)?;
        match (answer.is_empty(), default) {
            (true, Some(value)) => Ok(value.to_string()),
            _ => Ok(answer),
        }
    }

    /// Ask for a rating until a valid one is entered.
    pub fn rating(&mut self, label: &str, default: Rating) -> CliResult<Rating> {
        loop {
            let answer = self.text(label, Some(&default.to_string()))?;
            match answer.parse::<Rating>() {
                Ok(rating) => return Ok(rating),
                Err(e) => output::write_warning(&mut self.out, &e.to_string())?,
            }
        }
    }

    /// Ask for a replacement rating. An empty answer keeps `current`
    /// exactly as stored; anything typed must be a valid rating.
    ///
    /// A stored value outside 0.0-5.0 is not offered; the prompt then
    /// defaults to zero.
    pub fn rating_or_keep(&mut self, label: &str, current: f64) -> CliResult<f64> {
        if !(Rating::MIN..=Rating::MAX).contains(&current) {
            return self.rating(label, Rating::ZERO).map(f64::from);
        }

        loop {
            let answer = self.ask(label, Some(&current.to_string()))?;
            if answer.is_empty() {
                return Ok(current);
            }
            match answer.parse::<Rating>() {
                Ok(rating) => return Ok(rating.value()),
                Err(e) => output::write_warning(&mut self.out, &e.to_string())?,
            }
        }
    }

    /// Show a numbered list and return the chosen index.
    ///
    /// An empty answer picks the first option.
    pub fn select(&mut self, label: &str, options: &[&str]) -> CliResult<usize> {
        if options.is_empty() {
            return Err(CliError::Other("nothing to choose from".to_string()));
        }

        writeln!(self.out, "{}", style(label).bold())?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.out, "  {:>2}) {}", i + 1, option)?;
        }

        loop {
            let answer = self.text("Choice", Some("1"))?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => output::write_warning(
                    &mut self.out,
                    &format!("enter a number between 1 and {}", options.len()),
                )?,
            }
        }
    }

    /// Ask a yes/no question, defaulting to no.
    pub fn confirm(&mut self, question: &str) -> CliResult<bool> {
        write!(self.out, "{} [y/N] ", question)?;
        self.out.flush()?;

        let answer = self.read_line()?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    fn ask(&mut self, label: &str, default: Option<&str>) -> CliResult<String> {
        match default {
            Some(value) => write!(self.out, "{} [{}]: ", style(label).bold(), value)?,
            None => write!(self.out, "{}: ", style(label).bold())?,
        }
        self.out.flush()?;

        self.read_line()
    }

    fn read_line(&mut self) -> CliResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::Cancelled);
        }
        Ok(line.trim().to_string())
    }
}
