//! Actions: what a binding does when its key fires
//!
//! An action token from a bindings file resolves to one of four things:
//! a built-in command, a script action looked up by name when invoked,
//! a shell command, or a shell command pre-filled into the command prompt.
//! Resolution never fails.

use std::fmt;
use std::str::FromStr;

use crossterm::event::MouseEvent;
use serde::Serialize;

use super::command::{Command, MouseCommand};

/// Token prefix for bare shell commands
pub const SHELL_PREFIX: &str = "command:";
/// Token prefix for shell commands that open in the prompt for editing
pub const SHELL_EDIT_PREFIX: &str = "command-edit:";
/// Token prefix that routes a name to the mouse-action table
pub const MOUSE_PREFIX: &str = "Mouse";

/// Which binding table an action belongs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionClass {
    Keyboard,
    Mouse,
}

/// A statically known operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeAction {
    Key(Command),
    Mouse(MouseCommand),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// A built-in operation
    Native(NativeAction),
    /// A name resolved against the script registry when the binding fires
    Script { name: String, class: ActionClass },
    /// `command:<text>`
    ShellCommand(String),
    /// `command-edit:<text>`
    ShellCommandEdit(String),
}

impl Action {
    pub fn class(&self) -> ActionClass {
        match self {
            Action::Native(NativeAction::Mouse(_)) => ActionClass::Mouse,
            Action::Script { class, .. } => *class,
            Action::Native(NativeAction::Key(_))
            | Action::ShellCommand(_)
            | Action::ShellCommandEdit(_) => ActionClass::Keyboard,
        }
    }

    /// The built-in keyboard command, if this is one
    pub fn command(&self) -> Option<Command> {
        match self {
            Action::Native(NativeAction::Key(command)) => Some(*command),
            _ => None,
        }
    }

    /// Run this action as triggered by a key binding
    ///
    /// Mouse actions need the triggering event; without one they report
    /// `false`. A script action whose name the registry does not know also
    /// reports `false`.
    pub fn invoke(
        &self,
        ctx: &mut dyn EditorActions,
        scripts: &dyn ActionRegistry,
        event: Option<&MouseEvent>,
    ) -> bool {
        match self {
            Action::Native(NativeAction::Key(command)) => ctx.run_command(*command, true),
            Action::Native(NativeAction::Mouse(command)) => match event {
                Some(event) => ctx.run_mouse_command(*command, true, event),
                None => {
                    tracing::debug!("{} needs a mouse event, skipping", command);
                    false
                }
            },
            Action::Script { name, .. } => match scripts.call(name, ctx, true, event) {
                Some(handled) => handled,
                None => {
                    tracing::warn!("No action or script function named {}", name);
                    false
                }
            },
            Action::ShellCommand(text) => ctx.run_shell(text, true),
            Action::ShellCommandEdit(text) => ctx.edit_shell(text, true),
        }
    }
}

/// Formats the action back into its token form
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Native(NativeAction::Key(command)) => write!(f, "{}", command),
            Action::Native(NativeAction::Mouse(command)) => write!(f, "{}", command),
            Action::Script { name, .. } => f.write_str(name),
            Action::ShellCommand(text) => write!(f, "{}{}", SHELL_PREFIX, text),
            Action::ShellCommandEdit(text) => write!(f, "{}{}", SHELL_EDIT_PREFIX, text),
        }
    }
}

/// Resolve one action token
///
/// Precedence: `Mouse*` names, then `command:`, then `command-edit:`, then
/// the keyboard table. Unknown names become script actions.
pub fn resolve_action(token: &str) -> Action {
    if token.starts_with(MOUSE_PREFIX) {
        return match MouseCommand::from_str(token) {
            Ok(command) => Action::Native(NativeAction::Mouse(command)),
            Err(()) => Action::Script {
                name: token.to_string(),
                class: ActionClass::Mouse,
            },
        };
    }

    if token.starts_with(SHELL_PREFIX) {
        return Action::ShellCommand(after_first_colon(token).to_string());
    }

    if token.starts_with(SHELL_EDIT_PREFIX) {
        return Action::ShellCommandEdit(after_first_colon(token).to_string());
    }

    match Command::from_str(token) {
        Ok(command) => Action::Native(NativeAction::Key(command)),
        Err(()) => Action::Script {
            name: token.to_string(),
            class: ActionClass::Keyboard,
        },
    }
}

fn after_first_colon(token: &str) -> &str {
    token.split_once(':').map_or("", |(_, text)| text)
}

/// A non-empty, ordered list of actions of one class, bound to one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionChain {
    class: ActionClass,
    actions: Vec<Action>,
}

impl ActionChain {
    /// Build a chain; `None` when `actions` is empty or mixes classes
    pub fn new(actions: Vec<Action>) -> Option<Self> {
        let class = actions.first()?.class();
        if actions.iter().any(|a| a.class() != class) {
            return None;
        }
        Some(Self { class, actions })
    }

    pub fn class(&self) -> ActionClass {
        self.class
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Always false: a chain holds at least one action
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Token names of each action, in order
    pub fn names(&self) -> Vec<String> {
        self.actions.iter().map(ToString::to_string).collect()
    }

    /// Check if any action in the chain is this built-in command
    pub fn contains(&self, command: Command) -> bool {
        self.actions.iter().any(|a| a.command() == Some(command))
    }
}

impl fmt::Display for ActionChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(","))
    }
}

impl<'a> IntoIterator for &'a ActionChain {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// The editing operations a resolved action can run
///
/// Implemented by the editor view that owns the cursor and buffer.
/// `from_binding` is true when the call comes from a key binding. Each
/// method returns whether the action was handled.
pub trait EditorActions {
    fn run_command(&mut self, command: Command, from_binding: bool) -> bool;

    fn run_mouse_command(
        &mut self,
        command: MouseCommand,
        from_binding: bool,
        event: &MouseEvent,
    ) -> bool;

    /// Run a shell command
    fn run_shell(&mut self, command: &str, from_binding: bool) -> bool;

    /// Open the command prompt pre-filled with `command`
    fn edit_shell(&mut self, command: &str, from_binding: bool) -> bool;
}

/// Named actions provided outside the editor, e.g. by plugins
pub trait ActionRegistry {
    /// Call the action registered as `name`
    ///
    /// Returns `None` if nothing is registered under that name.
    fn call(
        &self,
        name: &str,
        ctx: &mut dyn EditorActions,
        from_binding: bool,
        event: Option<&MouseEvent>,
    ) -> Option<bool>;
}
