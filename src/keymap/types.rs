//! Core types for the keymap system: Key, Modifiers, KeyCode, MouseButton

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::parser::parse_key_spec;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, alt: bool, shift: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        Modifiers(bits)
    }

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    /// Check if alt is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Remove every modifier in `other`
    #[inline]
    pub const fn without(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 & !other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same order the key-string grammar strips them in
        if self.ctrl() {
            f.write_str("Ctrl")?;
        }
        if self.alt() {
            f.write_str("Alt")?;
        }
        if self.shift() {
            f.write_str("Shift")?;
        }
        Ok(())
    }
}

/// A named key code, as reported by the terminal
///
/// Control-key codes (`Ctrl`, `CtrlPageUp`, `CtrlPageDown`) are distinct
/// symbolic codes rather than a modified rune: terminals deliver Ctrl+S as
/// a single control character, not as `s` plus a modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    // Arrows and keypad directions
    Up,
    Down,
    Right,
    Left,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Center,

    // Navigation
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,

    // Rarely seen terminal keys
    Help,
    Exit,
    Clear,
    Cancel,
    Print,
    Pause,
    Backtab,

    /// F1-F64
    F(u8),

    /// A control character: `Ctrl('A')` through `Ctrl('Z')`, plus
    /// `' '`, `'['`, `'\\'`, `']'`, `'^'` and `'_'`
    Ctrl(char),
    CtrlPageUp,
    CtrlPageDown,

    Tab,
    /// The `Esc` key name
    Esc,
    /// The `Escape` key name, kept apart from `Esc`
    Escape,
    Enter,
    /// DEL (0x7f), what modern terminals send for the backspace key
    Backspace,
    /// BS (0x08), sent by some older terminals
    OldBackspace,
}

impl KeyCode {
    /// Whether this code already implies the Ctrl modifier
    pub const fn is_control(self) -> bool {
        matches!(
            self,
            KeyCode::Ctrl(_) | KeyCode::CtrlPageUp | KeyCode::CtrlPageDown
        )
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyCode::Up => "Up",
            KeyCode::Down => "Down",
            KeyCode::Right => "Right",
            KeyCode::Left => "Left",
            KeyCode::UpLeft => "UpLeft",
            KeyCode::UpRight => "UpRight",
            KeyCode::DownLeft => "DownLeft",
            KeyCode::DownRight => "DownRight",
            KeyCode::Center => "Center",
            KeyCode::PageUp => "PageUp",
            KeyCode::PageDown => "PageDown",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
            KeyCode::Insert => "Insert",
            KeyCode::Delete => "Delete",
            KeyCode::Help => "Help",
            KeyCode::Exit => "Exit",
            KeyCode::Clear => "Clear",
            KeyCode::Cancel => "Cancel",
            KeyCode::Print => "Print",
            KeyCode::Pause => "Pause",
            KeyCode::Backtab => "Backtab",
            KeyCode::F(n) => return write!(f, "F{}", n),
            KeyCode::Ctrl(' ') => "CtrlSpace",
            KeyCode::Ctrl('[') => "CtrlLeftSq",
            KeyCode::Ctrl('\\') => "CtrlBackslash",
            KeyCode::Ctrl(']') => "CtrlRightSq",
            KeyCode::Ctrl('^') => "CtrlCarat",
            KeyCode::Ctrl('_') => "CtrlUnderscore",
            KeyCode::Ctrl(c) => return write!(f, "Ctrl{}", c),
            KeyCode::CtrlPageUp => "CtrlPageUp",
            KeyCode::CtrlPageDown => "CtrlPageDown",
            KeyCode::Tab => "Tab",
            KeyCode::Esc => "Esc",
            KeyCode::Escape => "Escape",
            KeyCode::Enter => "Enter",
            KeyCode::Backspace => "Backspace",
            KeyCode::OldBackspace => "OldBackspace",
        };
        f.write_str(name)
    }
}

/// A mouse button or wheel direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    WheelUp,
    WheelDown,
    WheelLeft,
    WheelRight,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseButton::Left => "MouseLeft",
            MouseButton::Middle => "MouseMiddle",
            MouseButton::Right => "MouseRight",
            MouseButton::WheelUp => "MouseWheelUp",
            MouseButton::WheelDown => "MouseWheelDown",
            MouseButton::WheelLeft => "MouseWheelLeft",
            MouseButton::WheelRight => "MouseWheelRight",
        };
        f.write_str(name)
    }
}

/// What a key identifies; exactly one of these per key
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyKind {
    /// A named key code
    Code(KeyCode),
    /// A single printable character
    Rune(char),
    /// A mouse button or wheel direction
    Mouse(MouseButton),
    /// A raw escape sequence, starting with `\x1b`
    Escape(String),
}

/// The identity of one keyboard or mouse input: what was pressed plus modifiers
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    pub kind: KeyKind,
    pub mods: Modifiers,
}

impl Key {
    /// Create a key for a named key code
    pub const fn code(code: KeyCode, mods: Modifiers) -> Self {
        Self {
            kind: KeyKind::Code(code),
            mods,
        }
    }

    /// Create a key for a single character
    pub const fn rune(c: char, mods: Modifiers) -> Self {
        Self {
            kind: KeyKind::Rune(c),
            mods,
        }
    }

    /// Create a key for a mouse button or wheel direction
    pub const fn mouse(button: MouseButton, mods: Modifiers) -> Self {
        Self {
            kind: KeyKind::Mouse(button),
            mods,
        }
    }

    /// Create a key for a raw escape sequence
    pub fn escape(sequence: impl Into<String>, mods: Modifiers) -> Self {
        Self {
            kind: KeyKind::Escape(sequence.into()),
            mods,
        }
    }

    /// Check if this key is a mouse button or wheel direction
    pub fn is_mouse(&self) -> bool {
        matches!(self.kind, KeyKind::Mouse(_))
    }
}

/// Formats the key back into the key-string grammar, e.g. `CtrlShiftZ`,
/// `Alt-n` or `CtrlMouseLeft`
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            KeyKind::Code(code) if code.is_control() => {
                // The code name already carries "Ctrl"
                write!(f, "{}{}", self.mods.without(Modifiers::CTRL), code)
            }
            KeyKind::Code(code) => write!(f, "{}{}", self.mods, code),
            KeyKind::Rune(c) if self.mods.is_empty() => write!(f, "{}", c),
            KeyKind::Rune(c) => write!(f, "{}-{}", self.mods, c),
            KeyKind::Mouse(button) => write!(f, "{}{}", self.mods, button),
            KeyKind::Escape(seq) => write!(f, "{}{}", self.mods, seq.escape_default()),
        }
    }
}

/// Keys serialize as their key string, e.g. `"CtrlShiftLeft"`
/// Serializes as a key string that parses back to the same key. Escape
/// sequences are written raw rather than in their `Display` form.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.kind {
            KeyKind::Escape(seq) => serializer.collect_str(&format_args!("{}{}", self.mods, seq)),
            _ => serializer.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        parse_key_spec(&spec).map_err(de::Error::custom)
    }
}
