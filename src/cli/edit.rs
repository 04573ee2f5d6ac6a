//! Edit subcommand implementation.
//!
//! Handles the `shelf edit` command. Without a title a picker over the
//! existing titles is shown; fields not given as flags are prompted for with
//! the current value as default.

use super::Options;
use crate::error::{CliError, CliResult};
use crate::library::Library;
use crate::output;
use crate::prompt::Prompter;
use crate::storage::RecordStore;
use crate::types::{Rating, Record};
use clap::Parser;
use std::io::{BufRead, Write};

/// Edit an existing book.
#[derive(Parser, Debug, Default)]
pub struct EditCommand {
    /// Title of the book to edit (first match is edited)
    #[arg(value_name = "TITLE")]
    pub target: Option<String>,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New author
    #[arg(short, long)]
    pub author: Option<String>,

    /// New rating from 0 to 5 in steps of 0.5
    #[arg(short, long)]
    pub rating: Option<Rating>,
}

impl EditCommand {
    /// Execute the edit command.
    pub fn execute<S: RecordStore, R: BufRead, W: Write>(
        &self,
        library: &mut Library<S>,
        prompter: &mut Prompter<R, W>,
        options: Options,
    ) -> CliResult<()> {
        if library.is_empty() {
            output::write_warning(prompter.out(), "No books in library to edit!")?;
            return Ok(());
        }

        let selected = match &self.target {
            Some(title) => title.clone(),
            None => {
                let titles = library.titles();
                let index = prompter.select("Select a book to edit", &titles)?;
                titles[index].to_string()
            }
        };

        let current = library
            .find_by_title(&selected)
            .cloned()
            .ok_or_else(|| CliError::NotFound(selected.clone()))?;

        let title = match &self.title {
            Some(title) => title.clone(),
            None => prompter.text("Title", Some(&current.title))?,
        };
        let author = match &self.author {
            Some(author) => author.clone(),
            None => prompter.text("Author", Some(&current.author))?,
        };
        let rating = match self.rating {
            Some(rating) => rating.value(),
            None => prompter.rating_or_keep("Rating", current.rating)?,
        };

        library
            .update(
                &selected,
                Record {
                    title,
                    author,
                    rating,
                },
            )?
            .ok_or(CliError::NotFound(selected))?;

        if !options.quiet {
            output::write_success(prompter.out(), "Book updated successfully!")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::tests::scripted;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    fn record(title: &str, author: &str, rating: f64) -> Record {
        Record::new(title, author, Rating::new(rating).unwrap())
    }

    fn library_with(records: Vec<Record>) -> Library<MemoryStore> {
        Library::open(MemoryStore::with_records(records)).unwrap()
    }

    #[test]
    fn test_empty_library_warns() {
        let mut library = library_with(vec![]);
        let mut prompter = scripted("");

        EditCommand::default()
            .execute(&mut library, &mut prompter, Options::default())
            .unwrap();

        let shown = String::from_utf8(prompter.into_output()).unwrap();
        assert!(shown.contains("No books in library to edit!"));
    }

    #[test]
    fn test_pick_and_edit_keeps_defaults() {
        let mut library = library_with(vec![record("A", "a", 1.0), record("B", "b", 2.0)]);
        // pick #2, keep title, new author, keep rating
        let mut prompter = scripted("2\n\nBee\n\n");

        EditCommand::default()
            .execute(&mut library, &mut prompter, Options::default())
            .unwrap();

        assert_eq!(
            library.store().records(),
            &[record("A", "a", 1.0), record("B", "Bee", 2.0)]
        );
    }

    #[test]
    fn test_edit_by_title_with_flags() {
        let mut library = library_with(vec![record("Dune", "Herbert", 4.0)]);
        let mut prompter = scripted("");
        let cmd = EditCommand {
            target: Some("Dune".to_string()),
            title: Some("Dune Messiah".to_string()),
            author: Some("Herbert".to_string()),
            rating: Rating::new(3.5),
        };

        cmd.execute(&mut library, &mut prompter, Options::default())
            .unwrap();
        assert_eq!(library.list(), &[record("Dune Messiah", "Herbert", 3.5)]);
    }

    #[test]
    fn test_unknown_title_is_not_found() {
        let mut library = library_with(vec![record("Dune", "Herbert", 4.0)]);
        let mut prompter = scripted("");
        let cmd = EditCommand {
            target: Some("Emma".to_string()),
            ..EditCommand::default()
        };

        let err = cmd
            .execute(&mut library, &mut prompter, Options::default())
            .unwrap_err();
        assert!(matches!(err, CliError::NotFound(title) if title == "Emma"));
        assert_eq!(library.store().saves(), 0);
    }

    #[test]
    fn test_off_step_stored_rating_kept_on_enter() {
        let stored = Record {
            title: "Odd".to_string(),
            author: "x".to_string(),
            rating: 3.3,
        };
        let mut library = library_with(vec![stored.clone()]);
        let mut prompter = scripted("\n\n\n");
        let cmd = EditCommand {
            target: Some("Odd".to_string()),
            ..EditCommand::default()
        };

        cmd.execute(&mut library, &mut prompter, Options::default())
            .unwrap();
        assert_eq!(library.store().records(), &[stored]);
    }

    #[test]
    fn test_out_of_range_stored_rating_defaults_to_zero() {
        let stored = Record {
            title: "Odd".to_string(),
            author: "x".to_string(),
            rating: 9.0,
        };
        let mut library = library_with(vec![stored]);
        let mut prompter = scripted("\n\n\n");
        let cmd = EditCommand {
            target: Some("Odd".to_string()),
            ..EditCommand::default()
        };

        cmd.execute(&mut library, &mut prompter, Options::default())
            .unwrap();
        assert_eq!(library.list()[0].rating, 0.0);
    }
}
