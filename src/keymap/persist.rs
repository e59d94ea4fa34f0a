//! Saving a runtime rebind back to the bindings file
//!
//! The file is read as JSON5, edited as a map, and written back as
//! pretty-printed JSON. Comments in the existing file are not preserved.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use super::config::{parse_bindings_json, read_bindings_file};
use super::error::KeymapError;
use super::parser::parse_key_spec;

/// What happened to the bindings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// No existing entry named the key; the new one was added first
    Inserted,
    /// An existing entry for the same key was overwritten
    Replaced {
        previous_key: String,
        previous_action: String,
    },
}

impl PersistOutcome {
    /// The user-facing warning for an overwritten binding, if there was one
    pub fn conflict_warning(&self, key_spec: &str) -> Option<String> {
        match self {
            PersistOutcome::Inserted => None,
            PersistOutcome::Replaced { .. } => Some(format!(
                "Warning: Keybinding conflict: {} has been overwritten",
                key_spec
            )),
        }
    }
}

/// Write `key_spec: action_spec` into the bindings file at `path`
///
/// An entry conflicts when its key string is identical or parses to the
/// same key. The first conflicting entry is replaced in place and any
/// further ones are dropped; with no conflict the entry is inserted at the
/// top. A missing file is created.
pub fn persist_binding(
    path: &Path,
    key_spec: &str,
    action_spec: &str,
) -> Result<PersistOutcome, KeymapError> {
    let existing = match read_bindings_file(path)? {
        Some(content) => parse_bindings_json(&content).map_err(|message| KeymapError::Parse {
            path: path.to_path_buf(),
            message,
        })?,
        None => IndexMap::new(),
    };

    let (updated, outcome) = apply_binding(existing, key_spec, action_spec);

    // The caller shows the conflict warning to the user
    if let PersistOutcome::Replaced { previous_key, previous_action } = &outcome {
        tracing::debug!(
            "Replaced saved binding {} = {}",
            previous_key,
            previous_action
        );
    }

    write_bindings_file(path, &updated)?;
    tracing::info!("Saved binding {} = {} to {}", key_spec, action_spec, path.display());
    Ok(outcome)
}

/// Merge one binding into a parsed bindings map
pub fn apply_binding(
    existing: IndexMap<String, String>,
    key_spec: &str,
    action_spec: &str,
) -> (IndexMap<String, String>, PersistOutcome) {
    let new_key = parse_key_spec(key_spec).ok();
    let conflicts = |raw: &str| {
        raw == key_spec
            || new_key
                .as_ref()
                .is_some_and(|key| parse_key_spec(raw).ok().as_ref() == Some(key))
    };

    let mut outcome = PersistOutcome::Inserted;
    let mut updated = IndexMap::with_capacity(existing.len() + 1);

    for (raw, action) in existing {
        if !conflicts(&raw) {
            updated.insert(raw, action);
        } else if outcome == PersistOutcome::Inserted {
            updated.insert(key_spec.to_string(), action_spec.to_string());
            outcome = PersistOutcome::Replaced {
                previous_key: raw,
                previous_action: action,
            };
        }
    }

    if outcome == PersistOutcome::Inserted {
        updated.shift_insert(0, key_spec.to_string(), action_spec.to_string());
    }

    (updated, outcome)
}

fn write_bindings_file(path: &Path, bindings: &IndexMap<String, String>) -> Result<(), KeymapError> {
    let write_err = |source| KeymapError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut content = serde_json::to_string_pretty(bindings)
        .map_err(|e| write_err(std::io::Error::other(e)))?;
    content.push('\n');

    fs::write(path, content).map_err(write_err)
}
