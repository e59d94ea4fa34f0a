//! Errors reported while loading or persisting keybindings
//!
//! None of these stop the editor: a failed file means defaults only, a bad
//! key string means that one entry is skipped.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeymapError {
    /// The bindings file exists but could not be read
    #[error("Error reading bindings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bindings file is not a valid JSON5 object of strings
    #[error("Error parsing bindings file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A key string that names no key
    #[error("Unknown keybinding: {0}")]
    UnknownKey(String),

    /// The bindings file could not be written back
    #[error("Error writing bindings file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
