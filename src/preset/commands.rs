//! Built-in preset commands
//!
//! Registers the handlers the preset's own buttons are bound to: device
//! switching, canvas clear and preview. `core:undo` / `core:redo` live in
//! the host's `core:` namespace; the preset only binds buttons to their
//! ids.

use crate::{Device, Editor};

use super::consts::*;

pub fn register_commands(editor: &mut Editor) {
    editor.register_command(CMD_DEVICE_DESKTOP, |state| state.set_device(Device::Desktop));
    editor.register_command(CMD_DEVICE_TABLET, |state| state.set_device(Device::Tablet));
    editor.register_command(CMD_DEVICE_MOBILE, |state| state.set_device(Device::Mobile));
    editor.register_command(CMD_CLEAR, |state| state.clear_canvas());
    editor.register_command(CMD_PREVIEW, |state| state.toggle_preview());
}
