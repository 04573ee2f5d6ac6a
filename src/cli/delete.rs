//! Delete subcommand implementation.
//!
//! Handles the `shelf delete` command. Removes the first book with the
//! chosen title.

use super::Options;
use crate::error::{CliError, CliResult};
use crate::library::Library;
use crate::output;
use crate::prompt::Prompter;
use crate::storage::RecordStore;
use clap::Parser;
use std::io::{BufRead, Write};

/// Delete a book.
#[derive(Parser, Debug, Default)]
pub struct DeleteCommand {
    /// Title of the book to delete (first match is deleted)
    #[arg(value_name = "TITLE")]
    pub target: Option<String>,

    /// Skip confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute<S: RecordStore, R: BufRead, W: Write>(
        &self,
        library: &mut Library<S>,
        prompter: &mut Prompter<R, W>,
        options: Options,
    ) -> CliResult<()> {
        if library.is_empty() {
            output::write_warning(prompter.out(), "No books in library to delete!")?;
            return Ok(());
        }

        let selected = match &self.target {
            Some(title) => title.clone(),
            None => {
                let titles = library.titles();
                let index = prompter.select("Select a book to delete", &titles)?;
                titles[index].to_string()
            }
        };

        if library.find_by_title(&selected).is_none() {
            return Err(CliError::NotFound(selected));
        }

        if !self.yes && !prompter.confirm(&format!("Delete '{}'?", selected))? {
            output::write_info(prompter.out(), "Cancelled.")?;
            return Ok(());
        }

        library
            .delete(&selected)?
            .ok_or(CliError::NotFound(selected))?;

        if !options.quiet {
            output::write_success(prompter.out(), "Book deleted successfully!")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::tests::scripted;
    use crate::storage::MemoryStore;
    use crate::types::{Rating, Record};
    use pretty_assertions::assert_eq;

    fn record(title: &str, author: &str) -> Record {
        Record::new(title, author, Rating::new(3.0).unwrap())
    }

    #[test]
    fn test_empty_library_warns() {
        let mut library = Library::open(MemoryStore::new()).unwrap();
        let mut prompter = scripted("");

        DeleteCommand::default()
            .execute(&mut library, &mut prompter, Options::default())
            .unwrap();

        let shown = String::from_utf8(prompter.into_output()).unwrap();
        assert!(shown.contains("No books in library to delete!"));
    }

    #[test]
    fn test_delete_duplicate_title_removes_first() {
        let mut library = Library::open(MemoryStore::with_records(vec![
            record("Echo", "first"),
            record("Echo", "second"),
        ]))
        .unwrap();
        let mut prompter = scripted("");
        let cmd = DeleteCommand {
            target: Some("Echo".to_string()),
            yes: true,
        };

        cmd.execute(&mut library, &mut prompter, Options::default())
            .unwrap();
        assert_eq!(library.store().records(), &[record("Echo", "second")]);
    }

    #[test]
    fn test_picker_and_confirm() {
        let mut library =
            Library::open(MemoryStore::with_records(vec![record("A", "a"), record("B", "b")]))
                .unwrap();
        let mut prompter = scripted("2\ny\n");

        DeleteCommand::default()
            .execute(&mut library, &mut prompter, Options::default())
            .unwrap();
        assert_eq!(library.list(), &[record("A", "a")]);
    }

    #[test]
    fn test_declined_confirmation_keeps_record() {
        let mut library = Library::open(MemoryStore::with_records(vec![record("A", "a")])).unwrap();
        let mut prompter = scripted("1\nn\n");

        DeleteCommand::default()
            .execute(&mut library, &mut prompter, Options::default())
            .unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library.store().saves(), 0);
    }

    #[test]
    fn test_unknown_title_is_not_found() {
        let mut library = Library::open(MemoryStore::with_records(vec![record("A", "a")])).unwrap();
        let mut prompter = scripted("");
        let cmd = DeleteCommand {
            target: Some("Z".to_string()),
            yes: true,
        };

        assert!(matches!(
            cmd.execute(&mut library, &mut prompter, Options::default()),
            Err(CliError::NotFound(_))
        ));
    }
}
