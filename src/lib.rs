//! UI-state shell for a block-based web page editor
//!
//! Models the editor chrome as data, not pixels:
//! - Panels of buttons with command bindings and active flags
//! - A command registry dispatching by id
//! - Event listeners and a one-shot ready hook
//! - A `preset` module wiring the web-page editing layout
//!
//! Rendering is left to the embedding application; button labels are
//! carried as opaque SVG markup payloads.

mod commands;
mod config;
mod editor;
mod events;

pub mod preset;
pub mod ui;

pub use commands::CommandRegistry;
pub use config::EditorConfig;
pub use editor::{Device, Editor, EditorState};
pub use events::EditorEvent;
