//! gckb - list, add and delete GNOME custom keyboard shortcuts.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run one verb against the configured settings backend.
//! - Report errors on stderr and exit with a structured status.
//!
//! Does NOT handle:
//! - Settings storage or binding validation (see `crates/store`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing.
//! - Logs go to stderr; stdout carries only `list` output.

mod args;
mod commands;
mod dispatch;
mod error;
mod store_context;

use args::Cli;
use clap::Parser;
use clap::error::ErrorKind;
use dispatch::run_command;
use error::{CliError, ExitCode, ExitCodeExt};
use gckb_store::StoreConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    if let Err(e) = StoreConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut stdout = std::io::stdout().lock();
    let result = if cli.generate_man {
        commands::manpage::run(&mut stdout)
    } else {
        run_command(cli, &mut stdout)
    };
    if let Err(e) = result {
        eprintln!("{:#}", e);
        if let Some(usage) = e.downcast_ref::<CliError>().and_then(CliError::usage) {
            eprint!("{}", usage);
        }
        std::process::exit(e.exit_code().as_i32());
    }
}
