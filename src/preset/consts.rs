//! Shared command and panel identifiers
//!
//! The full vocabulary the preset and its host wiring speak.
//! `CMD_OPEN_EXPORT` and `CMD_OPEN_TRAITS` are part of the contract but
//! unused by the panel layout itself.

pub const CMD_DEVICE_DESKTOP: &str = "device-desktop";
pub const CMD_DEVICE_TABLET: &str = "device-tablet";
pub const CMD_DEVICE_MOBILE: &str = "device-mobile";

pub const CMD_CLEAR: &str = "clear";
pub const CMD_UNDO: &str = "core:undo";
pub const CMD_REDO: &str = "core:redo";
pub const CMD_PREVIEW: &str = "preview";

pub const CMD_OPEN_EXPORT: &str = "export-template";
pub const CMD_OPEN_STYLE_MANAGER: &str = "open-sm";
pub const CMD_OPEN_TRAITS: &str = "open-tm";
pub const CMD_OPEN_LAYERS: &str = "open-layers";
pub const CMD_OPEN_BLOCKS: &str = "open-blocks";

pub const PANEL_COMMANDS: &str = "commands";
pub const PANEL_DEVICES: &str = "devices-c";
pub const PANEL_OPTIONS: &str = "options";
pub const PANEL_VIEWS: &str = "views";
