//! Editor host
//!
//! The `Editor` is the single source of truth all presets and host code
//! reference: configuration, the panel set, canvas components and
//! selection, the active device, command dispatch and event listeners.
//! Presets request state transitions through it; arbitration of button
//! flags stays here.

use crate::commands::CommandRegistry;
use crate::config::EditorConfig;
use crate::events::{EditorEvent, EventListeners};
use crate::ui::PanelRegistry;

/// The canvas device frame being edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Device {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Desktop, Device::Tablet, Device::Mobile];

    /// Display label for this device.
    pub fn label(&self) -> &'static str {
        match self {
            Device::Desktop => "Desktop",
            Device::Tablet => "Tablet",
            Device::Mobile => "Mobile",
        }
    }
}

/// Mutable editor state handed to command handlers and event listeners.
///
/// Command handlers and listeners see this, not the full [`Editor`], so
/// they can change state but never re-enter dispatch.
#[derive(Default)]
pub struct EditorState {
    pub config: EditorConfig,
    pub panels: PanelRegistry,
    components: Vec<String>,
    selected: Option<String>,
    device: Device,
    preview: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the components currently on the canvas.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Add a component to the canvas. Duplicate ids are refused.
    pub fn add_component(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.components.contains(&id) {
            log::warn!("component `{}` already on the canvas", id);
            return;
        }
        self.components.push(id);
    }

    /// The currently selected component, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub(crate) fn set_selected(&mut self, selected: Option<String>) {
        self.selected = selected;
    }

    /// Drop every component and the selection with it.
    pub fn clear_canvas(&mut self) {
        log::debug!("clearing canvas ({} components)", self.components.len());
        self.components.clear();
        self.selected = None;
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn set_device(&mut self, device: Device) {
        log::debug!("switching canvas device to {}", device.label());
        self.device = device;
    }

    pub fn preview_active(&self) -> bool {
        self.preview
    }

    pub fn toggle_preview(&mut self) {
        self.preview = !self.preview;
    }
}

/// The editor host instance.
pub struct Editor {
    state: EditorState,
    listeners: EventListeners,
    commands: CommandRegistry,
    ready_callbacks: Vec<Box<dyn FnOnce(&mut EditorState)>>,
    ready: bool,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            state: EditorState::new(),
            listeners: EventListeners::default(),
            commands: CommandRegistry::new(),
            ready_callbacks: Vec::new(),
            ready: false,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.state.config
    }

    pub fn config_mut(&mut self) -> &mut EditorConfig {
        &mut self.state.config
    }

    pub fn panels(&self) -> &PanelRegistry {
        &self.state.panels
    }

    pub fn panels_mut(&mut self) -> &mut PanelRegistry {
        &mut self.state.panels
    }

    // === Events ===

    /// Subscribe `listener` to `event`. Listeners run synchronously, in
    /// registration order, each time the event is emitted.
    pub fn on(&mut self, event: EditorEvent, listener: impl FnMut(&mut EditorState) + 'static) {
        self.listeners.subscribe(event, Box::new(listener));
    }

    pub fn listener_count(&self, event: EditorEvent) -> usize {
        self.listeners.count(event)
    }

    /// Emit `event` to its listeners.
    pub fn emit(&mut self, event: EditorEvent) {
        self.listeners.dispatch(event, &mut self.state);
    }

    // === Ready lifecycle ===

    /// Register a one-shot callback for when the host finishes its own
    /// initialization. If the editor is already ready, the callback runs
    /// immediately.
    pub fn on_ready(&mut self, callback: impl FnOnce(&mut EditorState) + 'static) {
        if self.ready {
            callback(&mut self.state);
        } else {
            self.ready_callbacks.push(Box::new(callback));
        }
    }

    /// Callbacks still waiting for [`Editor::fire_ready`].
    pub fn pending_ready_callbacks(&self) -> usize {
        self.ready_callbacks.len()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Mark initialization complete and drain the ready queue in
    /// registration order. Later calls are no-ops.
    pub fn fire_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        let callbacks = std::mem::take(&mut self.ready_callbacks);
        for callback in callbacks {
            callback(&mut self.state);
        }
    }

    // === Canvas ===

    pub fn add_component(&mut self, id: impl Into<String>) {
        self.state.add_component(id);
    }

    pub fn selected(&self) -> Option<&str> {
        self.state.selected()
    }

    /// Select a component already on the canvas and notify listeners.
    /// Unknown ids are refused.
    pub fn select_component(&mut self, id: &str) -> bool {
        if !self.state.components.iter().any(|c| c == id) {
            log::warn!("cannot select `{}`: not on the canvas", id);
            return false;
        }
        self.state.set_selected(Some(id.to_string()));
        self.emit(EditorEvent::ComponentSelected);
        true
    }

    /// Clear the selection, notifying listeners if something was selected.
    pub fn deselect(&mut self) {
        if self.state.selected.take().is_some() {
            self.emit(EditorEvent::ComponentDeselected);
        }
    }

    // === Commands ===

    pub fn register_command(
        &mut self,
        id: impl Into<String>,
        handler: impl FnMut(&mut EditorState) + 'static,
    ) {
        self.commands.register(id, handler);
    }

    pub fn has_command(&self, id: &str) -> bool {
        self.commands.contains(id)
    }

    /// Run a command by id. Returns `false` for unregistered ids.
    pub fn run_command(&mut self, id: &str) -> bool {
        self.commands.run(id, &mut self.state)
    }

    /// Host-level click entry point: flips the button's active flag and
    /// runs its bound command. Missing buttons and dangling command
    /// bindings degrade to no-ops.
    pub fn click_button(&mut self, panel_id: &str, button_id: &str) -> bool {
        let command = match self.state.panels.get_button_mut(panel_id, button_id) {
            Some(button) => {
                button.set_active(!button.is_active());
                button.command.clone()
            }
            None => return false,
        };
        if !command.is_empty() {
            self.run_command(&command);
        }
        true
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
