//! Binding table behavior through the public API
//!
//! Covers key-string parsing, action resolution and the rules for
//! binding, rebinding and unbinding keys.

use keydispatch::keymap::{
    default_keymap, parse_key_spec, resolve_action, Action, ActionChain, ActionClass, Key,
    KeyCode, KeyKind, Keymap, KeymapError, Modifiers, MouseButton,
};

fn key(spec: &str) -> Key {
    parse_key_spec(spec).unwrap_or_else(|e| panic!("{spec} should parse: {e}"))
}

fn names(chain: Option<&ActionChain>) -> Vec<String> {
    chain.map(ActionChain::names).unwrap_or_default()
}

// ========================================================================
// Key strings
// ========================================================================

#[test]
fn test_modifier_order_is_commutative() {
    assert_eq!(key("CtrlAltDelete"), key("AltCtrlDelete"));
    assert_eq!(key("CtrlShiftLeft"), key("ShiftCtrlLeft"));
    assert_eq!(key("Alt-Shift-Up"), key("ShiftAltUp"));
}

#[test]
fn test_ctrl_h_is_backspace() {
    let ctrl_h = key("CtrlH");
    assert_eq!(ctrl_h, key("Backspace"));
    assert!(ctrl_h.mods.is_empty());
}

#[test]
fn test_ctrl_letter_differs_from_letter() {
    let ctrl_a = key("CtrlA");
    assert!(ctrl_a.mods.ctrl());
    assert_ne!(ctrl_a, key("A"));
    assert_eq!(key("A"), Key::rune('A', Modifiers::NONE));
}

#[test]
fn test_aliases() {
    assert_eq!(key("PgUp"), key("PageUp"));
    assert_eq!(key("PgDown"), key("PageDown"));
    assert_ne!(key("Esc"), key("Escape"));
    assert_ne!(key("Backspace"), key("OldBackspace"));
}

#[test]
fn test_mouse_keys() {
    assert_eq!(
        key("Ctrl-MouseLeft"),
        Key::mouse(MouseButton::Left, Modifiers::CTRL)
    );
    assert!(key("MouseWheelDown").is_mouse());
}

#[test]
fn test_escape_sequence_key() {
    let parsed = key("Alt\x1b[1;5A");
    assert_eq!(parsed.kind, KeyKind::Escape("\x1b[1;5A".to_string()));
    assert!(parsed.mods.alt());
}

#[test]
fn test_unknown_keys() {
    for spec in ["", "Ctrl", "CtrlShift-", "NotAKey", "F65", "MouseSideways"] {
        assert!(
            matches!(parse_key_spec(spec), Err(KeymapError::UnknownKey(_))),
            "{spec:?} should not parse"
        );
    }
}

#[test]
fn test_display_is_parseable() {
    for spec in ["CtrlS", "Alt-n", "CtrlShiftLeft", "F12", "Ctrl-MouseLeft", "Alt-{"] {
        let parsed = key(spec);
        assert_eq!(key(&parsed.to_string()), parsed, "{spec} -> {parsed}");
    }
}

// ========================================================================
// Action tokens
// ========================================================================

#[test]
fn test_shell_command_splits_on_first_colon() {
    assert_eq!(
        resolve_action("command:ls -la:extra"),
        Action::ShellCommand("ls -la:extra".to_string())
    );
    assert_eq!(
        resolve_action("command-edit:open "),
        Action::ShellCommandEdit("open ".to_string())
    );
}

#[test]
fn test_unknown_name_is_deferred_script() {
    let action = resolve_action("MyCustomPlugin");
    assert_eq!(
        action,
        Action::Script {
            name: "MyCustomPlugin".to_string(),
            class: ActionClass::Keyboard,
        }
    );

    let mut keymap = Keymap::new();
    assert!(keymap.bind_key("F9", "MyCustomPlugin").is_ok());
    assert_eq!(names(keymap.lookup(&key("F9"))), vec!["MyCustomPlugin"]);
}

#[test]
fn test_mouse_prefix_is_mouse_class() {
    assert_eq!(resolve_action("MousePress").class(), ActionClass::Mouse);
    assert_eq!(resolve_action("MouseAnything").class(), ActionClass::Mouse);
    assert_eq!(resolve_action("Save").class(), ActionClass::Keyboard);
}

// ========================================================================
// Binding rules
// ========================================================================

#[test]
fn test_keyboard_rebind_evicts_mouse_binding() {
    let mut keymap = Keymap::new();
    keymap.bind_key("MouseLeft", "MousePress").unwrap();
    keymap.bind_key("MouseLeft", "Save").unwrap();

    let left = key("MouseLeft");
    assert_eq!(names(keymap.keyboard_chain(&left)), vec!["Save"]);
    assert!(keymap.mouse_chain(&left).is_none());
}

#[test]
fn test_unbind_then_bind_in_one_entry() {
    let mut keymap = Keymap::new();
    keymap.bind_key("CtrlY", "Undo,Redo").unwrap();
    keymap.bind_key("CtrlY", "UnbindKey,Save").unwrap();

    assert_eq!(names(keymap.lookup(&key("CtrlY"))), vec!["Save"]);
}

#[test]
fn test_unbind_alone_removes_binding() {
    let mut keymap = default_keymap();
    keymap.bind_key("CtrlS", "UnbindKey").unwrap();
    keymap.bind_key("MouseLeft", "UnbindKey").unwrap();

    assert!(keymap.lookup(&key("CtrlS")).is_none());
    assert!(keymap.lookup(&key("MouseLeft")).is_none());
    assert!(!keymap.raw_specs().contains_key("CtrlS"));
    assert!(!keymap.raw_specs().contains_key("MouseLeft"));
}

#[test]
fn test_override_replaces_never_merges() {
    let mut keymap = default_keymap();
    keymap.bind_key("CtrlS", "Quit").unwrap();

    assert_eq!(names(keymap.lookup(&key("CtrlS"))), vec!["Quit"]);
}

#[test]
fn test_help_toggle_cleared_on_rebind() {
    let mut keymap = Keymap::new();
    keymap.bind_key("CtrlG", "ToggleHelp").unwrap();
    keymap.bind_key("CtrlQ", "Quit").unwrap();
    assert_eq!(keymap.help_key(), Some("CtrlG"));

    keymap.bind_key("CtrlG", "Save").unwrap();
    assert_eq!(keymap.help_key(), None);
    assert_eq!(names(keymap.lookup(&key("CtrlQ"))), vec!["Quit"]);
}

#[test]
fn test_key_never_in_both_tables() {
    let mut keymap = default_keymap();
    keymap.bind_all([
        ("MouseLeft", "Save"),
        ("MouseMiddle", "MousePress"),
        ("MouseRight", "MouseMultiCursor"),
        ("MouseRight", "Copy,Paste"),
    ]);

    for (k, _) in keymap.keyboard_bindings() {
        assert!(keymap.mouse_chain(k).is_none(), "{k} is in both tables");
    }
    assert_eq!(
        names(keymap.mouse_chain(&key("MouseMiddle"))),
        vec!["MousePress"]
    );
}

#[test]
fn test_function_keys() {
    assert_eq!(key("F1"), Key::code(KeyCode::F(1), Modifiers::NONE));
    assert_eq!(key("ShiftF64"), Key::code(KeyCode::F(64), Modifiers::SHIFT));
}
