use anyhow::Context;
use clap::Parser;
use shelf::cli::{self, Cli};
use shelf::library::Library;
use shelf::output;
use shelf::prompt::Prompter;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let setup = cli.setup().context("failed to load configuration")?;
    let path = setup.store.path().to_path_buf();

    if setup.library_read_only() {
        output::print_warning("library file is read-only; changes will not be saved");
    }

    let mut library = Library::open(setup.store)
        .with_context(|| format!("failed to open library at {}", path.display()))?;

    let mut prompter = Prompter::stdio();
    cli::dispatch(cli.command.as_ref(), &mut library, &mut prompter, setup.options)?;
    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the level picked from `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "shelf=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
