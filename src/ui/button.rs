//! Panel buttons

use serde::{Deserialize, Serialize};

/// A single panel button: identity, command binding, initial state and
/// the markup rendered as its face.
///
/// ```
/// use pagestudio::ui::Button;
///
/// let button = Button::new("undo", "core:undo").label("<svg/>");
/// assert!(!button.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    /// Unique within the owning panel.
    pub id: String,
    /// Command run when the button is clicked. An id nobody registered
    /// makes the button inert, never an error.
    pub command: String,
    /// Initial pressed state; owned and mutated by the host afterwards.
    pub active: bool,
    /// Toggle-group marker, interpreted by the host.
    pub context: Option<String>,
    /// Opaque inline SVG markup rendered as the button's face.
    pub label: String,
}

impl Button {
    pub fn new(id: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            command: command.into(),
            ..Self::default()
        }
    }

    /// An empty slot entry: no id, no command. Keeps the panel area
    /// rendering while reserving the spot for host wiring.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_empty() && self.command.is_empty()
    }
}
