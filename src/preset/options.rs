//! Preset options
//!
//! Options arrive fully resolved: any subset may be supplied (in code or
//! as a RON file) and the rest falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error type for options loading and saving
#[derive(Debug)]
pub enum OptionsError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for OptionsError {
    fn from(e: std::io::Error) -> Self {
        OptionsError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for OptionsError {
    fn from(e: ron::error::SpannedError) -> Self {
        OptionsError::ParseError(e)
    }
}

impl From<ron::Error> for OptionsError {
    fn from(e: ron::Error) -> Self {
        OptionsError::SerializeError(e)
    }
}

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsError::IoError(e) => write!(f, "IO error: {}", e),
            OptionsError::ParseError(e) => write!(f, "Parse error: {}", e),
            OptionsError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

/// Resolved options for the web-page preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetOptions {
    /// Command run by the import entry. Reserved for host wiring; the
    /// panel layout does not reference it.
    pub cmd_open_import: String,
    /// Command toggling image visibility. Reserved for host wiring.
    pub cmd_tgl_images: String,
    /// Activate the Style Manager view whenever a component is selected.
    pub show_styles_on_change: bool,
    /// Activate the Blocks view once the editor is ready.
    pub show_blocks_on_load: bool,
}

impl Default for PresetOptions {
    fn default() -> Self {
        Self {
            cmd_open_import: "open-import".to_string(),
            cmd_tgl_images: "toggle-images".to_string(),
            show_styles_on_change: true,
            show_blocks_on_load: true,
        }
    }
}

impl PresetOptions {
    /// Parse options from RON. Missing fields resolve to defaults.
    pub fn from_ron_str(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }

    /// Load options from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, OptionsError> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::from_ron_str(&contents)?)
    }

    /// Save options as pretty-printed RON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), OptionsError> {
        let config = ron::ser::PrettyConfig::new().indentor("  ".to_string());
        let ron_string = ron::ser::to_string_pretty(self, config)?;
        fs::write(path, ron_string)?;
        Ok(())
    }
}
