//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Hold the usage text printed alongside argument errors.
//!
//! Non-responsibilities:
//! - Does not check verb argument counts (see `dispatch` module).
//! - Does not resolve the settings backend (see `store_context` module).
//!
//! Invariants:
//! - Everything from the verb onwards is collected verbatim, so counting and
//!   index parsing report the tool's own messages instead of clap's.
//! - Global options must precede the verb.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gckb_store::BackendKind;

/// Full usage block shown when the verb is missing or unknown.
pub const USAGE: &str = "Usage:
  gckb add <name> <command> <binding>
  gckb delete [<index>]
  gckb list
Try 'man gckb' for more information.
";

#[derive(Debug, Parser)]
#[command(name = "gckb")]
#[command(about = "List, add and delete GNOME custom keyboard shortcuts", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(override_usage = "gckb [OPTIONS] <VERB> [ARGS]...")]
#[command(
    after_help = "Verbs:\n  list                               Print every custom keybinding as index, name, command and binding\n  add <name> <command> <binding>     Register a new custom keybinding\n  delete [<index>]                   Delete the keybinding at <index>, or every keybinding if omitted\n\nExamples:\n  gckb list\n  gckb add Terminal gnome-terminal '<Ctrl><Alt>t'\n  gckb delete 0\n  gckb --backend file --store-file ./store.json list\n"
)]
pub struct Cli {
    /// Settings backend to edit: gsettings or file.
    ///
    /// Can also be set via GCKB_BACKEND environment variable.
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<BackendKind>,

    /// JSON store used by the file backend.
    ///
    /// Can also be set via GCKB_STORE_PATH environment variable.
    #[arg(long, value_name = "FILE")]
    pub store_file: Option<PathBuf>,

    /// Print the manual page in roff format and exit.
    #[arg(long)]
    pub generate_man: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// A verb followed by its arguments, exactly as given.
    ///
    /// `--` and `-h` after the verb are ordinary arguments.
    #[command(external_subcommand)]
    Invoke(Vec<String>),
}

/// The three verbs the tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    List,
    Add,
    Delete,
}

impl Verb {
    /// Looks up a verb by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "list" => Some(Verb::List),
            "add" => Some(Verb::Add),
            "delete" => Some(Verb::Delete),
            _ => None,
        }
    }

    /// Usage block for this verb alone.
    pub fn usage(self) -> String {
        let synopsis = match self {
            Verb::List => "gckb list",
            Verb::Add => "gckb add <name> <command> <binding>",
            Verb::Delete => "gckb delete [<index>]",
        };
        format!("Usage:\n  {synopsis}\nTry 'man gckb' for more information.\n")
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::List => write!(f, "list"),
            Verb::Add => write!(f, "add"),
            Verb::Delete => write!(f, "delete"),
        }
    }
}
