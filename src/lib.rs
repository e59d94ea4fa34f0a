//! keydispatch - keybinding resolution and action dispatch
//!
//! This crate turns key strings from a bindings file into typed keys, resolves
//! action text into action chains, and keeps the keyboard and mouse binding
//! tables a terminal editor dispatches from.

pub mod cli;
pub mod config_paths;
pub mod keymap;
pub mod tracing;

// Re-export commonly used types
pub use keymap::{Action, ActionChain, Key, Keymap, KeymapError};
