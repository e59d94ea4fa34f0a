//! A name → function registry for actions defined outside the editor

use std::collections::HashMap;
use std::fmt;

use crossterm::event::MouseEvent;

use super::action::{ActionRegistry, EditorActions};

type ScriptFn = Box<dyn Fn(&mut dyn EditorActions, bool, Option<&MouseEvent>) -> bool>;

/// Script actions registered at runtime, looked up by name when a binding fires
///
/// Bindings to a name that is registered later still work, since lookup
/// happens at invocation time.
#[derive(Default)]
pub struct ScriptRegistry {
    functions: HashMap<String, ScriptFn>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the function behind `name`
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&mut dyn EditorActions, bool, Option<&MouseEvent>) -> bool + 'static,
    {
        let name = name.into();
        tracing::debug!("Registered script action {}", name);
        self.functions.insert(name, Box::new(function));
    }

    pub fn unregister(&mut self, name: &str) -> bool {
        self.functions.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl ActionRegistry for ScriptRegistry {
    fn call(
        &self,
        name: &str,
        ctx: &mut dyn EditorActions,
        from_binding: bool,
        event: Option<&MouseEvent>,
    ) -> Option<bool> {
        let function = self.functions.get(name)?;
        Some(function(ctx, from_binding, event))
    }
}

impl fmt::Debug for ScriptRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.functions.keys().collect();
        names.sort();
        f.debug_struct("ScriptRegistry")
            .field("functions", &names)
            .finish()
    }
}
