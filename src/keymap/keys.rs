//! Canonical key name tables
//!
//! Every alias lives here as explicit data: `PgUp`/`PageUp` and
//! `PgDown`/`PageDown` resolve to the same code, `Esc` and `Escape` stay
//! distinct, and `CtrlH` is the historical name for Backspace.

use super::types::{KeyCode, MouseButton};

/// The key string that means Backspace rather than Ctrl+H
pub const CTRL_H: &str = "CtrlH";

/// Highest function key the grammar accepts
const MAX_FUNCTION_KEY: u8 = 64;

/// Look up a key name without modifiers (arrows, F-keys, navigation, ...)
pub fn named_key(name: &str) -> Option<KeyCode> {
    if let Some(code) = function_key(name) {
        return Some(code);
    }

    let code = match name {
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Right" => KeyCode::Right,
        "Left" => KeyCode::Left,
        "UpLeft" => KeyCode::UpLeft,
        "UpRight" => KeyCode::UpRight,
        "DownLeft" => KeyCode::DownLeft,
        "DownRight" => KeyCode::DownRight,
        "Center" => KeyCode::Center,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "Insert" => KeyCode::Insert,
        "Delete" => KeyCode::Delete,
        "Help" => KeyCode::Help,
        "Exit" => KeyCode::Exit,
        "Clear" => KeyCode::Clear,
        "Cancel" => KeyCode::Cancel,
        "Print" => KeyCode::Print,
        "Pause" => KeyCode::Pause,
        "Backtab" => KeyCode::Backtab,
        "Tab" => KeyCode::Tab,
        "Esc" => KeyCode::Esc,
        "Escape" => KeyCode::Escape,
        "Enter" => KeyCode::Enter,
        "Backspace" => KeyCode::Backspace,
        "OldBackspace" => KeyCode::OldBackspace,

        // Legacy names
        "PgUp" => KeyCode::PageUp,
        "PgDown" => KeyCode::PageDown,
        CTRL_H => KeyCode::Backspace,

        _ => return None,
    };
    Some(code)
}

/// Look up a `Ctrl`-prefixed name whose control form is its own code
///
/// The caller passes the full name including the prefix, e.g. `"CtrlS"`.
pub fn control_key(name: &str) -> Option<KeyCode> {
    let code = match name {
        "CtrlSpace" => KeyCode::Ctrl(' '),
        "CtrlA" => KeyCode::Ctrl('A'),
        "CtrlB" => KeyCode::Ctrl('B'),
        "CtrlC" => KeyCode::Ctrl('C'),
        "CtrlD" => KeyCode::Ctrl('D'),
        "CtrlE" => KeyCode::Ctrl('E'),
        "CtrlF" => KeyCode::Ctrl('F'),
        "CtrlG" => KeyCode::Ctrl('G'),
        CTRL_H => KeyCode::Backspace,
        "CtrlI" => KeyCode::Ctrl('I'),
        "CtrlJ" => KeyCode::Ctrl('J'),
        "CtrlK" => KeyCode::Ctrl('K'),
        "CtrlL" => KeyCode::Ctrl('L'),
        "CtrlM" => KeyCode::Ctrl('M'),
        "CtrlN" => KeyCode::Ctrl('N'),
        "CtrlO" => KeyCode::Ctrl('O'),
        "CtrlP" => KeyCode::Ctrl('P'),
        "CtrlQ" => KeyCode::Ctrl('Q'),
        "CtrlR" => KeyCode::Ctrl('R'),
        "CtrlS" => KeyCode::Ctrl('S'),
        "CtrlT" => KeyCode::Ctrl('T'),
        "CtrlU" => KeyCode::Ctrl('U'),
        "CtrlV" => KeyCode::Ctrl('V'),
        "CtrlW" => KeyCode::Ctrl('W'),
        "CtrlX" => KeyCode::Ctrl('X'),
        "CtrlY" => KeyCode::Ctrl('Y'),
        "CtrlZ" => KeyCode::Ctrl('Z'),
        "CtrlLeftSq" => KeyCode::Ctrl('['),
        "CtrlBackslash" => KeyCode::Ctrl('\\'),
        "CtrlRightSq" => KeyCode::Ctrl(']'),
        "CtrlCarat" => KeyCode::Ctrl('^'),
        "CtrlUnderscore" => KeyCode::Ctrl('_'),
        "CtrlPageUp" => KeyCode::CtrlPageUp,
        "CtrlPageDown" => KeyCode::CtrlPageDown,
        _ => return None,
    };
    Some(code)
}

/// Look up a mouse button or wheel name
pub fn mouse_button(name: &str) -> Option<MouseButton> {
    let button = match name {
        "MouseLeft" => MouseButton::Left,
        "MouseMiddle" => MouseButton::Middle,
        "MouseRight" => MouseButton::Right,
        "MouseWheelUp" => MouseButton::WheelUp,
        "MouseWheelDown" => MouseButton::WheelDown,
        "MouseWheelLeft" => MouseButton::WheelLeft,
        "MouseWheelRight" => MouseButton::WheelRight,
        _ => return None,
    };
    Some(button)
}

/// `F1` through `F64`, no leading zeros
fn function_key(name: &str) -> Option<KeyCode> {
    let digits = name.strip_prefix('F')?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let n: u8 = digits.parse().ok()?;
    (1..=MAX_FUNCTION_KEY).contains(&n).then_some(KeyCode::F(n))
}
