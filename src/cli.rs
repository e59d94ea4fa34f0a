//! Command-line argument parsing for keydispatch
//!
//! Supports:
//! - Listing the effective bindings
//! - Resolving a single key string
//! - Checking a bindings file for problems
//! - Rebinding a key and saving it
//! - Probing live terminal input against the keymap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and edit terminal editor keybindings
#[derive(Parser, Debug)]
#[command(
    name = "keydispatch",
    version,
    about = "Inspect and edit terminal editor keybindings"
)]
pub struct CliArgs {
    /// Bindings file to use instead of the one in the config directory
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print every keyboard and mouse binding in effect
    List {
        /// Print the bindings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how a key string parses and what it is bound to
    Resolve {
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Load the bindings file and report problems (exit code 1 if any)
    Check,
    /// Bind KEY to ACTION and save it to the bindings file
    Bind {
        #[arg(value_name = "KEY")]
        key: String,
        /// Comma-separated action chain, e.g. "IndentSelection,InsertTab"
        #[arg(value_name = "ACTION")]
        action: String,
    },
    /// Print the binding for each key or mouse event until Quit is pressed
    Probe,
}

impl CliArgs {
    /// The bindings file to load, if any location is known
    pub fn bindings_path(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(crate::config_paths::bindings_file)
    }
}
