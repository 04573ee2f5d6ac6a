//! Interactive menu.
//!
//! Loops over the four library actions until the user quits or input ends.

use super::{AddCommand, DeleteCommand, EditCommand, ListCommand, Options};
use crate::error::{CliError, CliResult};
use crate::library::Library;
use crate::output;
use crate::prompt::Prompter;
use crate::storage::RecordStore;
use console::style;
use std::io::{BufRead, Write};
use tracing::debug;

const ACTIONS: [&str; 5] = ["View books", "Add book", "Edit book", "Delete book", "Quit"];

/// Run the interactive menu.
pub fn run_menu<S: RecordStore, R: BufRead, W: Write>(
    library: &mut Library<S>,
    prompter: &mut Prompter<R, W>,
    options: Options,
) -> CliResult<()> {
    writeln!(
        prompter.out(),
        "\n{}",
        style("Personal Library Manager").green().bold()
    )?;

    loop {
        writeln!(prompter.out())?;
        let choice = match prompter.select("Menu", &ACTIONS) {
            Ok(choice) => choice,
            Err(CliError::Cancelled) => return Ok(()),
            Err(e) => return Err(e),
        };
        debug!(action = ACTIONS[choice], "menu selection");

        let result = match choice {
            0 => ListCommand::default().execute(library, prompter, options),
            1 => AddCommand::default().execute(library, prompter, options),
            2 => EditCommand::default().execute(library, prompter, options),
            3 => DeleteCommand::default().execute(library, prompter, options),
            _ => return Ok(()),
        };

        match result {
            Ok(()) => {}
            Err(CliError::Cancelled) => return Ok(()),
            // The collection is still held in memory after a failed save.
            Err(CliError::Store(e)) => output::write_warning(prompter.out(), &e.to_string())?,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::tests::scripted;
    use crate::storage::MemoryStore;
    use crate::types::{Rating, Record};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_edit_delete_session() {
        let mut library = Library::open(MemoryStore::new()).unwrap();
        let script = [
            "2", "Dune", "Herbert", "4.5", // add
            "2", "Echo", "One", "3", // add
            "3", "1", "", "", "5", // edit Dune's rating
            "4", "2", "y", // delete Echo
            "5", // quit
        ]
        .join("\n")
            + "\n";
        let mut prompter = scripted(&script);

        run_menu(&mut library, &mut prompter, Options::default()).unwrap();

        assert_eq!(
            library.store().records(),
            &[Record::new("Dune", "Herbert", Rating::new(5.0).unwrap())]
        );
    }

    #[test]
    fn test_view_empty_then_eof() {
        let mut library = Library::open(MemoryStore::new()).unwrap();
        let mut prompter = scripted("1\n");

        run_menu(&mut library, &mut prompter, Options::default()).unwrap();

        let shown = String::from_utf8(prompter.into_output()).unwrap();
        assert!(shown.contains("Your library is empty!"));
    }

    #[test]
    fn test_store_failure_keeps_menu_running() {
        let mut store = MemoryStore::new();
        store.fail_writes(true);
        let mut library = Library::open(store).unwrap();
        let mut prompter = scripted("2\nDune\nHerbert\n4\n5\n");

        run_menu(&mut library, &mut prompter, Options::default()).unwrap();

        assert_eq!(library.len(), 1);
        assert!(library.store().records().is_empty());
        let shown = String::from_utf8(prompter.into_output()).unwrap();
        assert!(shown.contains("writes disabled"));
    }
}
