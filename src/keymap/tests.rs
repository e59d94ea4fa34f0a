//! Integration tests for the keymap system

use super::*;
use crossterm::event::{
    KeyCode as TermKeyCode, KeyEvent, KeyModifiers, MouseButton as TermButton, MouseEvent,
    MouseEventKind,
};

fn names(chain: Option<&ActionChain>) -> Vec<String> {
    chain.map(ActionChain::names).unwrap_or_default()
}

fn left_click(modifiers: KeyModifiers) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(TermButton::Left),
        column: 4,
        row: 2,
        modifiers,
    }
}

/// Records every action that reaches the editor
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl EditorActions for Recorder {
    fn run_command(&mut self, command: Command, _from_binding: bool) -> bool {
        self.calls.push(command.to_string());
        true
    }

    fn run_mouse_command(
        &mut self,
        command: MouseCommand,
        _from_binding: bool,
        event: &MouseEvent,
    ) -> bool {
        self.calls
            .push(format!("{}@{},{}", command, event.column, event.row));
        true
    }

    fn run_shell(&mut self, command: &str, _from_binding: bool) -> bool {
        self.calls.push(format!("shell:{command}"));
        true
    }

    fn edit_shell(&mut self, command: &str, _from_binding: bool) -> bool {
        self.calls.push(format!("edit:{command}"));
        true
    }
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_defaults_save_and_quit() {
    let keymap = default_keymap();
    assert_eq!(names(keymap.lookup_spec("CtrlS").unwrap()), vec!["Save"]);
    assert_eq!(names(keymap.lookup_spec("CtrlQ").unwrap()), vec!["Quit"]);
    assert_eq!(names(keymap.lookup_spec("F10").unwrap()), vec!["Quit"]);
}

#[test]
fn test_defaults_tab_chain() {
    let keymap = default_keymap();
    assert_eq!(
        names(keymap.lookup_spec("Tab").unwrap()),
        vec!["IndentSelection", "InsertTab"]
    );
}

#[test]
fn test_defaults_mouse_tables() {
    let keymap = default_keymap();

    let left = parse_key_spec("MouseLeft").unwrap();
    assert_eq!(names(keymap.mouse_chain(&left)), vec!["MousePress"]);

    let ctrl_left = parse_key_spec("Ctrl-MouseLeft").unwrap();
    assert_eq!(names(keymap.mouse_chain(&ctrl_left)), vec!["MouseMultiCursor"]);

    // Mouse keys with keyboard actions live in the keyboard table
    let middle = parse_key_spec("MouseMiddle").unwrap();
    assert_eq!(names(keymap.keyboard_chain(&middle)), vec!["PastePrimary"]);
    assert!(keymap.mouse_chain(&middle).is_none());

    let wheel = parse_key_spec("MouseWheelUp").unwrap();
    assert_eq!(names(keymap.keyboard_chain(&wheel)), vec!["ScrollUp"]);
}

#[test]
fn test_defaults_ctrl_h_and_backspace_share_a_key() {
    let keymap = default_keymap();
    assert_eq!(
        parse_key_spec("CtrlH").unwrap(),
        parse_key_spec("Backspace").unwrap()
    );
    assert_eq!(names(keymap.lookup_spec("CtrlH").unwrap()), vec!["Backspace"]);
}

#[test]
fn test_defaults_raw_specs_record_both_tables() {
    let keymap = default_keymap();
    let raw = keymap.raw_specs();

    assert_eq!(raw.get("CtrlS").map(String::as_str), Some("Save"));
    assert_eq!(raw.get("MouseLeft").map(String::as_str), Some("MousePress"));
    assert_eq!(
        raw.get("Tab").map(String::as_str),
        Some("IndentSelection,InsertTab")
    );
}

#[test]
fn test_every_default_action_is_native() {
    let keymap = default_keymap();
    for (key, chain) in keymap.keyboard_bindings().chain(keymap.mouse_bindings()) {
        for action in chain {
            assert!(
                matches!(action, Action::Native(_)),
                "{key} is bound to non-native action {action}"
            );
        }
    }
}

// ============================================================================
// Terminal events through the keymap
// ============================================================================

#[test]
fn test_terminal_key_finds_default_binding() {
    let keymap = default_keymap();

    let event = KeyEvent::new(TermKeyCode::Char('s'), KeyModifiers::CONTROL);
    let key = key_from_key_event(&event).unwrap();
    assert_eq!(names(keymap.lookup(&key)), vec!["Save"]);

    let event = KeyEvent::new(TermKeyCode::Char('n'), KeyModifiers::ALT);
    let key = key_from_key_event(&event).unwrap();
    assert_eq!(names(keymap.lookup(&key)), vec!["SpawnMultiCursor"]);

    let event = KeyEvent::new(TermKeyCode::Char('h'), KeyModifiers::CONTROL);
    let key = key_from_key_event(&event).unwrap();
    assert_eq!(names(keymap.lookup(&key)), vec!["Backspace"]);
}

#[test]
fn test_legacy_ctrl_backslash_finds_binding() {
    let mut keymap = Keymap::new();
    keymap.bind_key("CtrlBackslash", "Save").unwrap();

    let event = KeyEvent::new(TermKeyCode::Char('4'), KeyModifiers::CONTROL);
    let key = key_from_key_event(&event).unwrap();
    assert_eq!(names(keymap.lookup(&key)), vec!["Save"]);
}

#[test]
fn test_terminal_click_dispatches_mouse_action() {
    let keymap = default_keymap();
    let scripts = ScriptRegistry::new();
    let mut editor = Recorder::default();

    let event = left_click(KeyModifiers::CONTROL);
    let key = key_from_mouse_event(&event).unwrap();
    let chain = keymap.mouse_chain(&key).unwrap();

    for action in chain {
        assert!(action.invoke(&mut editor, &scripts, Some(&event)));
    }
    assert_eq!(editor.calls, vec!["MouseMultiCursor@4,2"]);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_chain_dispatch_runs_in_order() {
    let mut keymap = Keymap::new();
    keymap
        .bind_key("F5", "Save,command:make,command-edit:open ,Quit")
        .unwrap();

    let scripts = ScriptRegistry::new();
    let mut editor = Recorder::default();
    for action in keymap.lookup_spec("F5").unwrap().unwrap() {
        action.invoke(&mut editor, &scripts, None);
    }

    assert_eq!(
        editor.calls,
        vec!["Save", "shell:make", "edit:open ", "Quit"]
    );
}

#[test]
fn test_script_action_resolved_at_invocation() {
    let mut keymap = Keymap::new();
    keymap.bind_key("F6", "myplugin.Reformat").unwrap();
    let chain = keymap.lookup_spec("F6").unwrap().unwrap();

    let mut scripts = ScriptRegistry::new();
    let mut editor = Recorder::default();

    // Not registered yet
    assert!(!chain.actions()[0].invoke(&mut editor, &scripts, None));

    scripts.register("myplugin.Reformat", |ctx, _, _| {
        ctx.run_command(Command::SelectAll, false);
        ctx.run_command(Command::IndentSelection, false)
    });
    assert!(chain.actions()[0].invoke(&mut editor, &scripts, None));
    assert_eq!(editor.calls, vec!["SelectAll", "IndentSelection"]);
}

#[test]
fn test_mouse_script_binds_to_mouse_table() {
    let mut keymap = Keymap::new();
    keymap.bind_key("MouseRight", "MouseContextMenu").unwrap();

    let key = parse_key_spec("MouseRight").unwrap();
    let chain = keymap.mouse_chain(&key).unwrap();
    assert_eq!(chain.class(), ActionClass::Mouse);

    let mut scripts = ScriptRegistry::new();
    scripts.register("MouseContextMenu", |_, _, event| event.is_some());

    let mut editor = Recorder::default();
    let event = left_click(KeyModifiers::NONE);
    assert!(chain.actions()[0].invoke(&mut editor, &scripts, Some(&event)));
}

#[test]
fn test_user_override_on_defaults() {
    let mut keymap = default_keymap();
    let errors = keymap.bind_all([
        ("CtrlS", "SaveAs"),
        ("CtrlQ", "UnbindKey"),
        ("Alt-g", "Save"),
        ("NotAKey", "Quit"),
    ]);

    assert_eq!(errors.len(), 1);
    assert_eq!(names(keymap.lookup_spec("CtrlS").unwrap()), vec!["SaveAs"]);
    assert!(keymap.lookup_spec("CtrlQ").unwrap().is_none());
    assert_eq!(keymap.key_menu_key(), None);
    assert_eq!(keymap.help_key(), Some("CtrlG"));
}
