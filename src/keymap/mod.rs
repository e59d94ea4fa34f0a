//! Configurable key and mouse binding system
//!
//! This module provides a data-driven keybinding system that:
//! - Parses key strings like `"CtrlShiftLeft"`, `"Alt-n"` or `"MouseWheelUp"`
//! - Resolves comma-separated action text into typed action chains
//! - Keeps separate keyboard and mouse binding tables
//! - Loads user overrides from a JSON5 bindings file
//! - Saves runtime rebinds back to that file
//!
//! # Architecture
//!
//! ```text
//! crossterm::Event → Key → Keymap::lookup() → ActionChain → Action::invoke()
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Defaults only
//! let keymap = default_keymap();
//!
//! // Defaults with the user's file on top
//! let (keymap, report) = load_keymap(Some(&path));
//! ```

mod action;
mod command;
mod config;
mod crossterm_adapter;
mod defaults;
mod error;
#[allow(clippy::module_inception)]
mod keymap;
mod keys;
mod parser;
mod persist;
mod script;
mod types;

pub use action::{
    resolve_action, Action, ActionChain, ActionClass, ActionRegistry, EditorActions,
    NativeAction, MOUSE_PREFIX, SHELL_EDIT_PREFIX, SHELL_PREFIX,
};
pub use command::{Command, MouseCommand};
pub use config::{load_bindings_file, parse_bindings_json, read_bindings_file};
pub use crossterm_adapter::{key_from_event, key_from_key_event, key_from_mouse_event};
pub use defaults::{default_keymap, load_keymap, LoadReport, DEFAULT_BINDINGS};
pub use error::KeymapError;
pub use keymap::{BindingEntry, Keymap, ToggleTracking, UNBIND_KEY};
pub use keys::{control_key, mouse_button, named_key};
pub use parser::parse_key_spec;
pub use persist::{apply_binding, persist_binding, PersistOutcome};
pub use script::ScriptRegistry;
pub use types::{Key, KeyCode, KeyKind, Modifiers, MouseButton};

#[cfg(test)]
mod tests;
