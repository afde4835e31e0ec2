//! Panel registry
//!
//! The host-owned panel set. Presets hand over a full set once via
//! [`PanelRegistry::reset`]; embedding applications may extend it
//! afterwards with `add_panel` / `add_button`. Every lookup is
//! skip-on-missing: a flag transition against a button that is not there
//! simply does not happen.

use serde::{Deserialize, Serialize};

use super::{Button, Panel};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the whole panel set. No partial set is ever
    /// observable. Panel ids must be unique; later duplicates are dropped
    /// so lookups stay deterministic.
    pub fn reset(&mut self, panels: Vec<Panel>) {
        let mut deduped: Vec<Panel> = Vec::with_capacity(panels.len());
        for panel in panels {
            if deduped.iter().any(|p| p.id == panel.id) {
                log::warn!("duplicate panel id `{}` in reset, keeping the first", panel.id);
                continue;
            }
            deduped.push(panel);
        }
        log::debug!("panel set replaced ({} panels)", deduped.len());
        self.panels = deduped;
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel_ids(&self) -> Vec<&str> {
        self.panels.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn get_panel(&self, panel_id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == panel_id)
    }

    pub fn get_panel_mut(&mut self, panel_id: &str) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id == panel_id)
    }

    /// Add a panel, replacing an existing one with the same id.
    pub fn add_panel(&mut self, panel: Panel) {
        match self.get_panel_mut(&panel.id) {
            Some(existing) => *existing = panel,
            None => self.panels.push(panel),
        }
    }

    /// Append a button to an existing panel. Duplicate button ids within
    /// a panel are refused.
    pub fn add_button(&mut self, panel_id: &str, button: Button) -> bool {
        match self.get_panel_mut(panel_id) {
            Some(panel) => {
                if panel.get_button(&button.id).is_some() {
                    log::warn!(
                        "button `{}` already exists in panel `{}`",
                        button.id,
                        panel_id
                    );
                    return false;
                }
                panel.buttons.push(button);
                true
            }
            None => false,
        }
    }

    pub fn get_button(&self, panel_id: &str, button_id: &str) -> Option<&Button> {
        self.get_panel(panel_id).and_then(|p| p.get_button(button_id))
    }

    pub fn get_button_mut(&mut self, panel_id: &str, button_id: &str) -> Option<&mut Button> {
        self.get_panel_mut(panel_id)
            .and_then(|p| p.get_button_mut(button_id))
    }

    /// Request a flag transition. Returns `false` (and changes nothing)
    /// when the button is not there.
    pub fn set_active(&mut self, panel_id: &str, button_id: &str, active: bool) -> bool {
        match self.get_button_mut(panel_id, button_id) {
            Some(button) => {
                button.set_active(active);
                true
            }
            None => false,
        }
    }
}
