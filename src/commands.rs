//! Command registry
//!
//! Commands are the editor's verbs: buttons bind to them by id, keyboard
//! shortcuts and host code run them directly. A button bound to an id
//! nobody registered degrades to a no-op click, observable only through
//! the host UI.

use std::collections::HashMap;

use crate::editor::EditorState;

type CommandFn = Box<dyn FnMut(&mut EditorState)>;

/// Name -> handler registry for editor commands.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, CommandFn>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `id`, replacing any previous one.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        handler: impl FnMut(&mut EditorState) + 'static,
    ) {
        let id = id.into();
        if self.handlers.insert(id.clone(), Box::new(handler)).is_some() {
            log::debug!("command `{}` re-registered", id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    /// Run the handler registered under `id`. Returns `false` (and does
    /// nothing) when no such command exists.
    pub fn run(&mut self, id: &str, state: &mut EditorState) -> bool {
        match self.handlers.get_mut(id) {
            Some(handler) => {
                handler(state);
                true
            }
            None => {
                log::debug!("command `{}` not registered, ignoring", id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{Device, EditorState};

    #[test]
    fn runs_registered_handler() {
        let mut registry = CommandRegistry::new();
        let mut state = EditorState::new();

        registry.register("switch-tablet", |state| state.set_device(Device::Tablet));

        assert!(registry.contains("switch-tablet"));
        assert!(registry.run("switch-tablet", &mut state));
        assert_eq!(state.device(), Device::Tablet);
    }

    #[test]
    fn unknown_command_is_a_no_op() {
        let mut registry = CommandRegistry::new();
        let mut state = EditorState::new();

        assert!(!registry.run("does-not-exist", &mut state));
        assert_eq!(state.device(), Device::Desktop);
    }

    #[test]
    fn re_registering_replaces_the_handler() {
        let mut registry = CommandRegistry::new();
        let mut state = EditorState::new();

        registry.register("switch", |state| state.set_device(Device::Tablet));
        registry.register("switch", |state| state.set_device(Device::Mobile));

        registry.run("switch", &mut state);
        assert_eq!(state.device(), Device::Mobile);
    }
}
