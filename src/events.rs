//! Editor events
//!
//! Listeners are registered per event kind and run synchronously, in
//! registration order, whenever the host emits the event. Handlers get
//! mutable access to the editor state, never to the listener table, so
//! dispatch cannot re-enter itself.

use std::collections::HashMap;

use crate::editor::EditorState;

/// Events observable on the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorEvent {
    /// A canvas component became selected. Fires on selection only,
    /// never on deselection.
    ComponentSelected,
    /// The selected component was deselected.
    ComponentDeselected,
}

pub(crate) type Listener = Box<dyn FnMut(&mut EditorState)>;

/// Per-event listener lists.
#[derive(Default)]
pub(crate) struct EventListeners {
    listeners: HashMap<EditorEvent, Vec<Listener>>,
}

impl EventListeners {
    pub fn subscribe(&mut self, event: EditorEvent, listener: Listener) {
        self.listeners.entry(event).or_default().push(listener);
    }

    pub fn count(&self, event: EditorEvent) -> usize {
        self.listeners.get(&event).map(Vec::len).unwrap_or(0)
    }

    pub fn dispatch(&mut self, event: EditorEvent, state: &mut EditorState) {
        if let Some(list) = self.listeners.get_mut(&event) {
            for listener in list.iter_mut() {
                listener(state);
            }
        }
    }
}
