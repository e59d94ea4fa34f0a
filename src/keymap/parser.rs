//! Key-string parser
//!
//! Grammar: `(Mod[-]?)*Name` where `Mod` is `Ctrl`, `Alt` or `Shift` and
//! `Name` is a named key, a mouse button, one character, or an escape
//! sequence. Examples: `CtrlShiftLeft`, `Alt-n`, `Ctrl-MouseLeft`.

use super::error::KeymapError;
use super::keys::{control_key, mouse_button, named_key, CTRL_H};
use super::types::{Key, Modifiers};

/// One prefix token recognized at the front of a key string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    Separator,
    Modifier(Modifiers),
}

/// Split one prefix off the front of `rest`, if there is one
///
/// `CtrlH` as the entire remainder is not a prefix: it names Backspace.
fn next_prefix(rest: &str) -> Option<(Prefix, &str)> {
    if let Some(tail) = rest.strip_prefix('-') {
        return Some((Prefix::Separator, tail));
    }
    if rest != CTRL_H {
        if let Some(tail) = rest.strip_prefix("Ctrl") {
            return Some((Prefix::Modifier(Modifiers::CTRL), tail));
        }
    }
    if let Some(tail) = rest.strip_prefix("Alt") {
        return Some((Prefix::Modifier(Modifiers::ALT), tail));
    }
    if let Some(tail) = rest.strip_prefix("Shift") {
        return Some((Prefix::Modifier(Modifiers::SHIFT), tail));
    }
    None
}

/// Parse a key string like `"CtrlShiftLeft"` or `"Alt-n"` into a Key
pub fn parse_key_spec(spec: &str) -> Result<Key, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut rest = spec;

    while let Some((prefix, tail)) = next_prefix(rest) {
        if let Prefix::Modifier(m) = prefix {
            mods |= m;
        }
        rest = tail;
    }

    // Raw escape sequences win over every table
    if rest.starts_with('\x1b') {
        return Ok(Key::escape(rest, mods));
    }

    let mut chars = rest.chars();
    let Some(first) = chars.next() else {
        return Err(KeymapError::UnknownKey(spec.to_string()));
    };

    // Under Ctrl the name is looked up with its first letter capitalized,
    // so `Ctrl-up` and `Ctrl-mouseLeft` name the same keys as `CtrlUp`.
    let (first, name) = if mods.ctrl() {
        let upper = upper_char(first);
        let name: String = std::iter::once(upper).chain(chars.clone()).collect();
        if let Some(code) = control_key(&format!("Ctrl{name}")) {
            return Ok(Key::code(code, mods));
        }
        (upper, name)
    } else {
        (first, rest.to_string())
    };

    if let Some(code) = named_key(&name) {
        return Ok(Key::code(code, mods));
    }

    if let Some(button) = mouse_button(&name) {
        return Ok(Key::mouse(button, mods));
    }

    if chars.next().is_none() {
        return Ok(Key::rune(first, mods));
    }

    Err(KeymapError::UnknownKey(spec.to_string()))
}

/// Uppercase a single character, keeping it when the uppercase form is
/// longer than one character
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
