//! Default keybindings and the startup load sequence
//!
//! Loading order (each layer replaces per key, chains are never merged):
//! 1. Built-in defaults below
//! 2. The user's bindings file, entry by entry in file order

use std::path::{Path, PathBuf};

use super::config::load_bindings_file;
use super::error::KeymapError;
use super::keymap::Keymap;

/// Built-in bindings, applied in this order
pub const DEFAULT_BINDINGS: &[(&str, &str)] = &[
    // ====================================================================
    // Navigation
    // ====================================================================
    ("Up", "CursorUp"),
    ("Down", "CursorDown"),
    ("Right", "CursorRight"),
    ("Left", "CursorLeft"),
    ("ShiftUp", "SelectUp"),
    ("ShiftDown", "SelectDown"),
    ("ShiftLeft", "SelectLeft"),
    ("ShiftRight", "SelectRight"),
    ("AltLeft", "WordLeft"),
    ("AltRight", "WordRight"),
    ("AltShiftRight", "SelectWordRight"),
    ("AltShiftLeft", "SelectWordLeft"),
    ("CtrlUp", "MoveLinesUp"),
    ("CtrlDown", "MoveLinesDown"),
    ("CtrlLeft", "StartOfLine"),
    ("CtrlRight", "EndOfLine"),
    ("CtrlShiftLeft", "SelectToStartOfLine"),
    ("ShiftHome", "SelectToStartOfLine"),
    ("CtrlShiftRight", "SelectToEndOfLine"),
    ("ShiftEnd", "SelectToEndOfLine"),
    ("CtrlShiftUp", "SelectToStart"),
    ("CtrlShiftDown", "SelectToEnd"),
    ("Alt-{", "ParagraphPrevious"),
    ("Alt-}", "ParagraphNext"),
    ("Home", "StartOfLine"),
    ("End", "EndOfLine"),
    ("CtrlHome", "CursorStart"),
    ("CtrlEnd", "CursorEnd"),
    ("PageUp", "CursorPageUp"),
    ("PageDown", "CursorPageDown"),
    ("CtrlL", "JumpLine"),
    // ====================================================================
    // Editing
    // ====================================================================
    ("Enter", "InsertNewline"),
    ("CtrlH", "Backspace"),
    ("Backspace", "Backspace"),
    ("Alt-CtrlH", "DeleteWordLeft"),
    ("Alt-Backspace", "DeleteWordLeft"),
    ("Tab", "IndentSelection,InsertTab"),
    ("Backtab", "OutdentSelection,OutdentLine"),
    ("Delete", "Delete"),
    ("Insert", "ToggleOverwriteMode"),
    ("CtrlZ", "Undo"),
    ("CtrlShiftZ", "Redo"),
    ("CtrlC", "Copy"),
    ("CtrlX", "Cut"),
    ("CtrlK", "CutLine"),
    ("CtrlShiftD", "DuplicateLine"),
    ("CtrlV", "Paste"),
    ("CtrlA", "SelectAll"),
    // ====================================================================
    // Files, Search, Tabs
    // ====================================================================
    ("CtrlO", "OpenFile"),
    ("CtrlS", "Save"),
    ("CtrlF", "Find"),
    ("CtrlN", "FindNext"),
    ("CtrlP", "FindPrevious"),
    ("CtrlT", "AddTab"),
    ("Alt,", "PreviousTab"),
    ("Alt.", "NextTab"),
    ("CtrlPageUp", "PreviousTab"),
    ("CtrlPageDown", "NextTab"),
    ("CtrlW", "NextSplit"),
    // ====================================================================
    // Modes and Toggles
    // ====================================================================
    ("CtrlG", "ToggleHelp"),
    ("Alt-g", "ToggleKeyMenu"),
    ("CtrlR", "ToggleRuler"),
    ("CtrlB", "ShellMode"),
    ("CtrlQ", "Quit"),
    ("CtrlE", "CommandMode"),
    ("CtrlU", "ToggleMacro"),
    ("CtrlJ", "PlayMacro"),
    ("Esc", "Escape"),
    // Emacs-style
    ("Alt-f", "WordRight"),
    ("Alt-b", "WordLeft"),
    ("Alt-a", "StartOfLine"),
    ("Alt-e", "EndOfLine"),
    // File manager style
    ("F2", "Save"),
    ("F3", "Find"),
    ("F4", "Quit"),
    ("F7", "Find"),
    ("F10", "Quit"),
    // ====================================================================
    // Mouse
    // ====================================================================
    ("MouseWheelUp", "ScrollUp"),
    ("MouseWheelDown", "ScrollDown"),
    ("MouseLeft", "MousePress"),
    ("MouseMiddle", "PastePrimary"),
    ("Ctrl-MouseLeft", "MouseMultiCursor"),
    // ====================================================================
    // Multi-Cursor
    // ====================================================================
    ("Alt-n", "SpawnMultiCursor"),
    ("Alt-m", "SpawnMultiCursorSelect"),
    ("Alt-p", "RemoveMultiCursor"),
    ("Alt-c", "RemoveAllMultiCursors"),
    ("Alt-x", "SkipMultiCursor"),
];

/// What happened while building the startup keymap
#[derive(Debug, Default)]
pub struct LoadReport {
    /// The user file that was applied, if one was found and parsed
    pub user_file: Option<PathBuf>,
    /// Number of entries read from the user file
    pub user_entries: usize,
    /// Every non-fatal problem, in the order it happened
    pub errors: Vec<KeymapError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Build a keymap holding only the built-in defaults
pub fn default_keymap() -> Keymap {
    let mut keymap = Keymap::new();
    let errors = keymap.bind_all(DEFAULT_BINDINGS.iter().copied());
    debug_assert!(errors.is_empty(), "default bindings must parse: {errors:?}");
    keymap
}

/// Build the startup keymap: defaults, then `user_file` on top
///
/// A missing file is not an error. A file that cannot be read or parsed is
/// reported and skipped as a whole, leaving the defaults in place. Entries
/// with an unknown key string are reported and skipped individually.
pub fn load_keymap(user_file: Option<&Path>) -> (Keymap, LoadReport) {
    let mut keymap = default_keymap();
    let mut report = LoadReport::default();
    tracing::info!("Applied {} default bindings", DEFAULT_BINDINGS.len());

    let Some(path) = user_file else {
        return (keymap, report);
    };

    match load_bindings_file(path) {
        Ok(Some(user_bindings)) => {
            tracing::info!(
                "Applying user bindings from {} ({} entries)",
                path.display(),
                user_bindings.len()
            );
            report.user_entries = user_bindings.len();
            report.errors.extend(keymap.bind_all(&user_bindings));
            report.user_file = Some(path.to_path_buf());
        }
        Ok(None) => {
            tracing::debug!("No bindings file at {}, using defaults", path.display());
        }
        Err(e) => {
            tracing::warn!("{}", e);
            report.errors.push(e);
        }
    }

    (keymap, report)
}
