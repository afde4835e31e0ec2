//! Panels

use serde::{Deserialize, Serialize};

use super::Button;

/// An identified, ordered group of buttons. Button order is display
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Panel {
    pub id: String,
    pub buttons: Vec<Button>,
}

impl Panel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buttons: Vec::new(),
        }
    }

    /// Append a button, keeping declaration order.
    pub fn button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn get_button(&self, button_id: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.id == button_id)
    }

    pub fn get_button_mut(&mut self, button_id: &str) -> Option<&mut Button> {
        self.buttons.iter_mut().find(|b| b.id == button_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_keep_declaration_order() {
        let panel = Panel::new("options")
            .button(Button::new("undo", "core:undo"))
            .button(Button::new("redo", "core:redo"));

        let ids: Vec<&str> = panel.buttons.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["undo", "redo"]);
    }

    #[test]
    fn lookup_by_id() {
        let panel = Panel::new("options").button(Button::new("undo", "core:undo"));
        assert!(panel.get_button("undo").is_some());
        assert!(panel.get_button("redo").is_none());
    }
}
