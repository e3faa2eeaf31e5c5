//! Command dispatch logic.
//!
//! Responsibilities:
//! - Check each verb's argument count and turn raw arguments into typed input.
//! - Open the settings store and route to the verb's handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Backend selection (see `store_context` module).
//!
//! Invariants:
//! - Argument errors are reported before the store is opened.

use std::io::Write;

use anyhow::Result;

use crate::args::{Cli, Commands, Verb};
use crate::commands;
use crate::error::CliError;
use crate::store_context::open_store;

/// A verb with its arguments checked.
#[derive(Debug, PartialEq, Eq)]
enum Request {
    List,
    Add {
        name: String,
        command: String,
        binding: String,
    },
    Delete {
        index: Option<usize>,
    },
}

fn request_for(command: Option<&Commands>) -> Result<Request, CliError> {
    let Some(Commands::Invoke(words)) = command else {
        return Err(CliError::NoVerb);
    };
    let Some((name, args)) = words.split_first() else {
        return Err(CliError::NoVerb);
    };
    let Some(verb) = Verb::from_name(name) else {
        return Err(CliError::UnknownVerb(name.clone()));
    };

    match (verb, args) {
        (Verb::List, []) => Ok(Request::List),
        (Verb::Add, [name, command, binding]) => Ok(Request::Add {
            name: name.clone(),
            command: command.clone(),
            binding: binding.clone(),
        }),
        (Verb::Delete, []) => Ok(Request::Delete { index: None }),
        (Verb::Delete, [raw]) => Ok(Request::Delete {
            index: Some(commands::delete::parse_index(raw)?),
        }),
        (verb, _) => Err(CliError::WrongArgCount(verb)),
    }
}

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, out: &mut impl Write) -> Result<()> {
    let request = request_for(cli.command.as_ref())?;
    let mut store = open_store(&cli)?;

    match request {
        Request::List => commands::list::run(&store, out)?,
        Request::Add {
            name,
            command,
            binding,
        } => {
            commands::add::run(&mut store, &name, &command, &binding)?;
        }
        Request::Delete { index } => commands::delete::run(&mut store, index)?,
    }

    Ok(())
}
