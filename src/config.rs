//! Editor configuration

use serde::{Deserialize, Serialize};

/// Mutable host configuration, owned by the editor and adjustable by
/// presets before the first frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Show the built-in device selector. Presets that ship their own
    /// device switcher panel turn this off.
    pub show_devices: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { show_devices: true }
    }
}
