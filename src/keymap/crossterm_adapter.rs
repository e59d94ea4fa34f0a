//! Adapter to convert crossterm terminal events to our Key type

use crossterm::event::{
    Event, KeyCode as TermKeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as TermButton,
    MouseEvent, MouseEventKind,
};

use super::types::{Key, KeyCode, Modifiers, MouseButton};

fn modifiers_from(mods: KeyModifiers) -> Modifiers {
    Modifiers::new(
        mods.contains(KeyModifiers::CONTROL),
        mods.contains(KeyModifiers::ALT),
        mods.contains(KeyModifiers::SHIFT),
    )
}

/// Convert a terminal key event to the Key it would be bound under
///
/// Returns None for key releases and keys with no binding name
pub fn key_from_key_event(event: &KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let mods = modifiers_from(event.modifiers);

    let code = match event.code {
        TermKeyCode::Char(c) => return Some(char_key(c, mods)),
        // Ctrl+Space arrives as NUL on most terminals
        TermKeyCode::Null => return Some(Key::code(KeyCode::Ctrl(' '), mods | Modifiers::CTRL)),

        TermKeyCode::Up => KeyCode::Up,
        TermKeyCode::Down => KeyCode::Down,
        TermKeyCode::Left => KeyCode::Left,
        TermKeyCode::Right => KeyCode::Right,
        TermKeyCode::Home => KeyCode::Home,
        TermKeyCode::End => KeyCode::End,
        TermKeyCode::PageUp if mods.ctrl() => KeyCode::CtrlPageUp,
        TermKeyCode::PageDown if mods.ctrl() => KeyCode::CtrlPageDown,
        TermKeyCode::PageUp => KeyCode::PageUp,
        TermKeyCode::PageDown => KeyCode::PageDown,
        TermKeyCode::Insert => KeyCode::Insert,
        TermKeyCode::Delete => KeyCode::Delete,
        TermKeyCode::Tab => KeyCode::Tab,
        // Shift is implied by Backtab itself
        TermKeyCode::BackTab => {
            return Some(Key::code(KeyCode::Backtab, mods.without(Modifiers::SHIFT)))
        }
        TermKeyCode::Enter => KeyCode::Enter,
        TermKeyCode::Backspace => KeyCode::Backspace,
        TermKeyCode::Esc => KeyCode::Esc,
        TermKeyCode::F(n) => KeyCode::F(n),
        TermKeyCode::Pause => KeyCode::Pause,
        TermKeyCode::PrintScreen => KeyCode::Print,
        TermKeyCode::KeypadBegin => KeyCode::Center,
        _ => return None,
    };

    Some(Key::code(code, mods))
}

/// Characters: Ctrl+letter becomes its control code, everything else a rune
fn char_key(c: char, mods: Modifiers) -> Key {
    if mods.ctrl() {
        match c.to_ascii_uppercase() {
            // Ctrl+H is the terminal's backspace, bound as plain Backspace
            'H' => return Key::code(KeyCode::Backspace, mods.without(Modifiers::CTRL)),
            upper @ 'A'..='Z' => return Key::code(KeyCode::Ctrl(upper), mods),
            ' ' | '[' | '\\' | ']' | '^' | '_' => return Key::code(KeyCode::Ctrl(c), mods),
            // Legacy terminals send 0x1C-0x1F, which crossterm decodes as Ctrl+4..7
            '4' => return Key::code(KeyCode::Ctrl('\\'), mods),
            '5' => return Key::code(KeyCode::Ctrl(']'), mods),
            '6' => return Key::code(KeyCode::Ctrl('^'), mods),
            '7' => return Key::code(KeyCode::Ctrl('_'), mods),
            _ => {}
        }
    }

    // Shift is already reflected in the character
    Key::rune(c, mods.without(Modifiers::SHIFT))
}

/// Convert a terminal mouse event to the Key it would be bound under
///
/// Presses, drags and wheel movement map to buttons; releases and bare
/// motion return None.
pub fn key_from_mouse_event(event: &MouseEvent) -> Option<Key> {
    let button = match event.kind {
        MouseEventKind::Down(button) | MouseEventKind::Drag(button) => match button {
            TermButton::Left => MouseButton::Left,
            TermButton::Middle => MouseButton::Middle,
            TermButton::Right => MouseButton::Right,
        },
        MouseEventKind::ScrollUp => MouseButton::WheelUp,
        MouseEventKind::ScrollDown => MouseButton::WheelDown,
        MouseEventKind::ScrollLeft => MouseButton::WheelLeft,
        MouseEventKind::ScrollRight => MouseButton::WheelRight,
        MouseEventKind::Up(_) | MouseEventKind::Moved => return None,
    };

    Some(Key::mouse(button, modifiers_from(event.modifiers)))
}

/// Convert any terminal event that can trigger a binding
pub fn key_from_event(event: &Event) -> Option<Key> {
    match event {
        Event::Key(key) => key_from_key_event(key),
        Event::Mouse(mouse) => key_from_mouse_event(mouse),
        _ => None,
    }
}
