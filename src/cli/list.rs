//! List subcommand implementation.
//!
//! Handles the `shelf list` command for viewing the collection.

use super::{Options, OutputFormat};
use crate::error::CliResult;
use crate::library::Library;
use crate::output;
use crate::prompt::Prompter;
use crate::storage::RecordStore;
use clap::Parser;
use std::io::{BufRead, Write};

/// View the books in the library.
#[derive(Parser, Debug, Default)]
pub struct ListCommand {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute<S: RecordStore, R: BufRead, W: Write>(
        &self,
        library: &mut Library<S>,
        prompter: &mut Prompter<R, W>,
        options: Options,
    ) -> CliResult<()> {
        let format = self.format.unwrap_or(options.default_format);
        output::write_records(prompter.out(), library.list(), format)?;
        Ok(())
    }
}
