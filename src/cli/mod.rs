//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `shelf list` - View the collection
//! - `shelf add` - Add a book
//! - `shelf edit [TITLE]` - Edit a book
//! - `shelf delete [TITLE]` - Delete a book
//! - `shelf` / `shelf menu` - Interactive menu over all of the above

mod add;
mod delete;
mod edit;
mod list;
mod menu;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use list::ListCommand;
pub use menu::run_menu;

use crate::config::{AppSettings, Paths};
use crate::error::CliResult;
use crate::library::Library;
use crate::prompt::Prompter;
use crate::storage::{JsonFileStore, RecordStore, WriteMode};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Shelf - a personal library manager.
///
/// Keeps a list of books (title, author, rating) in a JSON file and lets you
/// view, add, edit and delete them from the terminal.
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A personal library manager", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (opens the interactive menu if omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Library file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub library: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// View the books in the library
    #[command(alias = "ls")]
    List(ListCommand),

    /// Add a new book
    #[command(alias = "a")]
    Add(AddCommand),

    /// Edit an existing book
    #[command(alias = "e")]
    Edit(EditCommand),

    /// Delete a book
    #[command(alias = "rm")]
    Delete(DeleteCommand),

    /// Open the interactive menu
    #[command(alias = "m")]
    Menu,
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable book cards
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for spreadsheets
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl OutputFormat {
    /// Parse a format name from settings, falling back to plain.
    pub fn from_setting(name: &str) -> Self {
        <Self as ValueEnum>::from_str(name, true).unwrap_or_else(|_| {
            warn!(format = name, "unknown default format in settings, using plain");
            Self::Plain
        })
    }
}

/// Options shared by every command handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Suppress success and info messages.
    pub quiet: bool,
    /// Listing format when none is given on the command line.
    pub default_format: OutputFormat,
}

/// Resolved settings for a run.
#[derive(Debug)]
pub struct Setup {
    /// Library store built from settings and flags.
    pub store: JsonFileStore,
    /// Handler options.
    pub options: Options,
}

impl Setup {
    /// True when saves will fail because the library file is read-only.
    ///
    /// Atomic writes replace the file by rename, which only needs the
    /// directory to be writable.
    pub fn library_read_only(&self) -> bool {
        self.store.mode() == WriteMode::Overwrite
            && std::fs::metadata(self.store.path()).is_ok_and(|m| m.permissions().readonly())
    }
}

impl Cli {
    /// Resolve settings, paths and flags into a store and handler options.
    pub fn setup(&self) -> CliResult<Setup> {
        let settings = match &self.config {
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load(&Paths::new()?)?,
        };

        let library_path = match &self.library {
            Some(path) => path.clone(),
            None => settings.library_path(&Paths::new()?),
        };
        debug!(path = %library_path.display(), mode = ?settings.write_mode(), "using library file");

        Ok(Setup {
            store: JsonFileStore::new(library_path).with_mode(settings.write_mode()),
            options: Options {
                quiet: self.quiet,
                default_format: OutputFormat::from_setting(&settings.default_format),
            },
        })
    }
}

/// Run one command, or the menu when none was given.
pub fn dispatch<S, R, W>(
    command: Option<&Commands>,
    library: &mut Library<S>,
    prompter: &mut Prompter<R, W>,
    options: Options,
) -> CliResult<()>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    match command {
        Some(Commands::List(cmd)) => cmd.execute(library, prompter, options),
        Some(Commands::Add(cmd)) => cmd.execute(library, prompter, options),
        Some(Commands::Edit(cmd)) => cmd.execute(library, prompter, options),
        Some(Commands::Delete(cmd)) => cmd.execute(library, prompter, options),
        Some(Commands::Menu) | None => run_menu(library, prompter, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_opens_menu() {
        let cli = Cli::try_parse_from(["shelf"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_add_flags() {
        let cli = Cli::try_parse_from([
            "shelf", "add", "--title", "Dune", "--author", "Herbert", "--rating", "4.5",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Add(cmd)) => {
                assert_eq!(cmd.title.as_deref(), Some("Dune"));
                assert_eq!(cmd.rating.map(|r| r.value()), Some(4.5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_rating_rejected_by_parser() {
        assert!(Cli::try_parse_from(["shelf", "add", "--rating", "6"]).is_err());
        assert!(Cli::try_parse_from(["shelf", "add", "--rating", "-1"]).is_err());
    }

    #[test]
    fn test_global_library_flag() {
        let cli = Cli::try_parse_from(["shelf", "list", "--library", "/tmp/books.json"]).unwrap();
        assert_eq!(cli.library, Some(PathBuf::from("/tmp/books.json")));
    }

    #[test]
    fn test_read_only_warning_only_for_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, "[]").unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&path, perms).unwrap();

        let setup = |mode| Setup {
            store: JsonFileStore::new(&path).with_mode(mode),
            options: Options::default(),
        };

        assert!(!setup(WriteMode::Atomic).library_read_only());
        assert!(setup(WriteMode::Overwrite).library_read_only());
    }

    #[test]
    fn test_format_from_setting() {
        assert_eq!(OutputFormat::from_setting("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_setting("yaml"), OutputFormat::Plain);
    }
}
