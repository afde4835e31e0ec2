//! Web-page editing preset
//!
//! Configures a bare [`Editor`](crate::Editor) for block-based page
//! editing: a custom device switcher, preview, undo/redo, canvas clear
//! and the layer view, plus the view-switching behavior driven by the
//! preset options.

mod commands;
mod options;
mod panels;

pub mod consts;

pub use commands::register_commands;
pub use options::{OptionsError, PresetOptions};
pub use panels::initialize_panels;

use crate::Editor;

/// Apply the full preset: built-in commands, then the panel layout.
pub fn apply(editor: &mut Editor, opts: &PresetOptions) {
    register_commands(editor);
    initialize_panels(editor, opts);
}
