use clap::Parser;
use miette::{IntoDiagnostic, Result};
use registrar::logging;
use registrar::registry::Registry;
use registrar::shell::Shell;
use std::io;

/// Interactive course-registration and payment ledger.
///
/// All state is in memory and lost on exit. The menu is driven entirely over
/// stdin/stdout; there are no positional arguments.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let registry = Registry::seeded().into_diagnostic()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(registry, stdin.lock(), stdout.lock());
    shell.run().into_diagnostic()?;

    Ok(())
}
