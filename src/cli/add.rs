//! Add subcommand implementation.
//!
//! Handles the `shelf add` command. Fields not given as flags are prompted
//! for.

use super::Options;
use crate::error::CliResult;
use crate::library::Library;
use crate::output;
use crate::prompt::Prompter;
use crate::storage::RecordStore;
use crate::types::{Rating, Record};
use clap::Parser;
use std::io::{BufRead, Write};

/// Add a new book.
#[derive(Parser, Debug, Default)]
pub struct AddCommand {
    /// Book title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Book author
    #[arg(short, long)]
    pub author: Option<String>,

    /// Rating from 0 to 5 in steps of 0.5
    #[arg(short, long)]
    pub rating: Option<Rating>,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute<S: RecordStore, R: BufRead, W: Write>(
        &self,
        library: &mut Library<S>,
        prompter: &mut Prompter<R, W>,
        options: Options,
    ) -> CliResult<()> {
        let title = match &self.title {
            Some(title) => title.clone(),
            None => prompter.text("Title", None)?,
        };
        let author = match &self.author {
            Some(author) => author.clone(),
            None => prompter.text("Author", None)?,
        };
        let rating = match self.rating {
            Some(rating) => rating,
            None => prompter.rating("Rating", Rating::ZERO)?,
        };

        library.add(Record::new(title, author, rating))?;

        if !options.quiet {
            output::write_success(prompter.out(), "Book added successfully!")?;
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

    #[test]
    fn test_add_from_prompts() {
        let mut library = Library::open(MemoryStore::new()).unwrap();
        let mut prompter = scripted("Dune\nHerbert\n4.5\n");

        AddCommand::default()
            .execute(&mut library, &mut prompter, Options::default())
            .unwrap();

        assert_eq!(
            library.store().records(),
            &[Record::new("Dune", "Herbert", Rating::new(4.5).unwrap())]
        );
        let shown = String::from_utf8(prompter.into_output()).unwrap();
        assert!(shown.contains("Book added successfully!"));
    }

    #[test]
    fn test_add_from_flags_skips_prompts() {
        let mut library = Library::open(MemoryStore::new()).unwrap();
        let mut prompter = scripted("");
        let cmd = AddCommand {
            title: Some("Emma".to_string()),
            author: Some("Austen".to_string()),
            rating: Rating::new(5.0),
        };

        cmd.execute(&mut library, &mut prompter, Options::default())
            .unwrap();
        assert_eq!(library.list()[0].rating, 5.0);
    }

    #[test]
    fn test_rating_prompt_defaults_to_zero() {
        let mut library = Library::open(MemoryStore::new()).unwrap();
        let mut prompter = scripted("Untitled\n\n\n");

        AddCommand::default()
            .execute(&mut library, &mut prompter, Options::default())
            .unwrap();

        assert_eq!(library.list()[0].author, "");
        assert_eq!(library.list()[0].rating, 0.0);
    }

    #[test]
    fn test_quiet_suppresses_success() {
        let mut library = Library::open(MemoryStore::new()).unwrap();
        let mut prompter = scripted("");
        let cmd = AddCommand {
            title: Some("Emma".to_string()),
            author: Some("Austen".to_string()),
            rating: Rating::new(4.0),
        };
        let options = Options {
            quiet: true,
            ..Options::default()
        };

        cmd.execute(&mut library, &mut prompter, options).unwrap();
        assert!(prompter.into_output().is_empty());
    }
}
