//! Keymap: the keyboard and mouse binding tables for one running editor

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use super::action::{resolve_action, Action, ActionChain, ActionClass};
use super::error::KeymapError;
use super::parser::parse_key_spec;
use super::persist::{persist_binding, PersistOutcome};
use super::types::Key;

/// Action token that removes a key's binding
pub const UNBIND_KEY: &str = "UnbindKey";
const TOGGLE_HELP: &str = "ToggleHelp";
const TOGGLE_KEY_MENU: &str = "ToggleKeyMenu";

/// Which raw key strings currently toggle the help buffer and the key menu
///
/// A key string loses its role as soon as it is bound to anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleTracking {
    pub help: Option<String>,
    pub key_menu: Option<String>,
}

impl ToggleTracking {
    fn update(&mut self, key_spec: &str, tokens: &[&str]) {
        track(&mut self.help, key_spec, tokens.contains(&TOGGLE_HELP));
        track(&mut self.key_menu, key_spec, tokens.contains(&TOGGLE_KEY_MENU));
    }

    fn forget(&mut self, key_spec: &str) {
        track(&mut self.help, key_spec, false);
        track(&mut self.key_menu, key_spec, false);
    }
}

fn track(slot: &mut Option<String>, key_spec: &str, holds_role: bool) {
    if holds_role {
        *slot = Some(key_spec.to_string());
    } else if slot.as_deref() == Some(key_spec) {
        *slot = None;
    }
}

/// One row of the binding tables, for listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingEntry {
    pub key: Key,
    pub class: ActionClass,
    pub actions: Vec<String>,
}

/// The binding tables
///
/// A key is bound in at most one of the keyboard and mouse tables; binding
/// it in one evicts it from the other.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    keyboard: HashMap<Key, ActionChain>,
    mouse: HashMap<Key, ActionChain>,
    /// Raw key string → raw action text, in the order first bound
    raw_specs: IndexMap<String, String>,
    /// Which raw key string is the current entry in `raw_specs` for a key
    raw_key_for: HashMap<Key, String>,
    toggles: ToggleTracking,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key_spec` (e.g. `"CtrlS"`) to `action_spec` (e.g. `"Save"`)
    ///
    /// The action text is a comma-separated chain. A leading `UnbindKey`
    /// removes the key first; anything after it is bound fresh. A later
    /// binding for the same key replaces the earlier chain entirely.
    pub fn bind_key(&mut self, key_spec: &str, action_spec: &str) -> Result<(), KeymapError> {
        let key = parse_key_spec(key_spec)?;

        let mut tokens: Vec<&str> = action_spec.split(',').filter(|t| !t.is_empty()).collect();

        let rest;
        let mut action_spec = action_spec;
        let unbinds = tokens.iter().take_while(|&&t| t == UNBIND_KEY).count();
        if unbinds > 0 {
            self.remove(&key, key_spec);
            tokens.drain(..unbinds);
            if tokens.is_empty() {
                tracing::debug!("Unbound {}", key_spec);
                return Ok(());
            }
            rest = tokens.join(",");
            action_spec = &rest;
        }

        if tokens.is_empty() {
            tracing::debug!("No actions given for {}, leaving it unchanged", key_spec);
            return Ok(());
        }

        self.toggles.update(key_spec, &tokens);

        let (keyboard, mouse): (Vec<Action>, Vec<Action>) = tokens
            .iter()
            .map(|token| resolve_action(token))
            .partition(|action| action.class() == ActionClass::Keyboard);

        if let Some(chain) = ActionChain::new(keyboard) {
            if !mouse.is_empty() {
                tracing::warn!(
                    "{}: mouse actions cannot share a binding with keyboard actions, dropping {} of them",
                    key_spec,
                    mouse.len()
                );
            }
            self.mouse.remove(&key);
            self.keyboard.insert(key.clone(), chain);
        } else if let Some(chain) = ActionChain::new(mouse) {
            self.keyboard.remove(&key);
            self.mouse.insert(key.clone(), chain);
        }

        self.record_raw(key, key_spec, action_spec);
        tracing::debug!("Bound {} to {}", key_spec, action_spec);
        Ok(())
    }

    /// Apply every `(key, action)` pair in order, collecting failures
    ///
    /// A key string that does not parse is skipped; the rest still apply.
    pub fn bind_all<I, K, A>(&mut self, entries: I) -> Vec<KeymapError>
    where
        I: IntoIterator<Item = (K, A)>,
        K: AsRef<str>,
        A: AsRef<str>,
    {
        let mut errors = Vec::new();
        for (key_spec, action_spec) in entries {
            if let Err(e) = self.bind_key(key_spec.as_ref(), action_spec.as_ref()) {
                tracing::warn!("{}", e);
                errors.push(e);
            }
        }
        errors
    }

    /// Remove the binding for `key_spec` from every table
    ///
    /// Returns whether anything was bound.
    pub fn unbind(&mut self, key_spec: &str) -> Result<bool, KeymapError> {
        let key = parse_key_spec(key_spec)?;
        Ok(self.remove(&key, key_spec))
    }

    fn remove(&mut self, key: &Key, key_spec: &str) -> bool {
        self.toggles.forget(key_spec);

        let had_keyboard = self.keyboard.remove(key).is_some();
        let had_mouse = self.mouse.remove(key).is_some();
        self.raw_specs.shift_remove(key_spec);
        if let Some(previous) = self.raw_key_for.remove(key) {
            self.raw_specs.shift_remove(&previous);
        }

        had_keyboard || had_mouse
    }

    fn record_raw(&mut self, key: Key, key_spec: &str, action_spec: &str) {
        // Another spelling of the same key ("Ctrl-s" vs "CtrlS") is replaced
        if let Some(previous) = self.raw_key_for.insert(key, key_spec.to_string()) {
            if previous != key_spec {
                self.raw_specs.shift_remove(&previous);
            }
        }
        self.raw_specs
            .insert(key_spec.to_string(), action_spec.to_string());
    }

    /// Bind a key at runtime and save the binding to `file`
    ///
    /// The keymap is only changed if the key string parses. The returned
    /// outcome says whether an existing entry in the file was overwritten.
    pub fn rebind(
        &mut self,
        key_spec: &str,
        action_spec: &str,
        file: &Path,
    ) -> Result<PersistOutcome, KeymapError> {
        self.bind_key(key_spec, action_spec)?;
        persist_binding(file, key_spec, action_spec)
    }

    /// The keyboard chain bound to `key`
    pub fn keyboard_chain(&self, key: &Key) -> Option<&ActionChain> {
        self.keyboard.get(key)
    }

    /// The mouse chain bound to `key`
    pub fn mouse_chain(&self, key: &Key) -> Option<&ActionChain> {
        self.mouse.get(key)
    }

    /// Whichever chain is bound to `key`
    pub fn lookup(&self, key: &Key) -> Option<&ActionChain> {
        self.keyboard_chain(key).or_else(|| self.mouse_chain(key))
    }

    /// Parse `key_spec` and look up its chain
    pub fn lookup_spec(&self, key_spec: &str) -> Result<Option<&ActionChain>, KeymapError> {
        let key = parse_key_spec(key_spec)?;
        Ok(self.lookup(&key))
    }

    pub fn keyboard_bindings(&self) -> impl Iterator<Item = (&Key, &ActionChain)> {
        self.keyboard.iter()
    }

    pub fn mouse_bindings(&self) -> impl Iterator<Item = (&Key, &ActionChain)> {
        self.mouse.iter()
    }

    /// Every binding in both tables, sorted by key
    pub fn entries(&self) -> Vec<BindingEntry> {
        let mut entries: Vec<_> = self
            .keyboard
            .iter()
            .chain(&self.mouse)
            .map(|(key, chain)| BindingEntry {
                key: key.clone(),
                class: chain.class(),
                actions: chain.names(),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }

    /// Raw key string → raw action text for every live binding
    pub fn raw_specs(&self) -> &IndexMap<String, String> {
        &self.raw_specs
    }

    /// The key string that toggles help, for "press X for help" hints
    pub fn help_key(&self) -> Option<&str> {
        self.toggles.help.as_deref()
    }

    /// The key string that toggles the key menu
    pub fn key_menu_key(&self) -> Option<&str> {
        self.toggles.key_menu.as_deref()
    }

    pub fn toggles(&self) -> &ToggleTracking {
        &self.toggles
    }

    /// Number of bound keys across both tables
    pub fn len(&self) -> usize {
        self.keyboard.len() + self.mouse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyboard.is_empty() && self.mouse.is_empty()
    }
}
