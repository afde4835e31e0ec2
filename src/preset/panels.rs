//! Panel layout for the web-page preset
//!
//! Declarative registration of the editor chrome: one placeholder
//! commands slot, the custom device switcher, the options row (preview,
//! undo, redo, clear) and the layer view toggle. Also wires the two
//! view-switching behaviors driven by [`PresetOptions`].

use crate::ui::{icons, Button, Panel};
use crate::{Editor, EditorEvent};

use super::consts::*;
use super::options::PresetOptions;

/// Wire the preset panel layout into the editor.
///
/// Synchronous; side effects in order: turns off the built-in device
/// selector, atomically replaces the panel set with the four preset
/// panels, subscribes the style-manager-on-selection listener when
/// `opts.show_styles_on_change` is set, and always registers the ready
/// callback that honors `opts.show_blocks_on_load`.
pub fn initialize_panels(editor: &mut Editor, opts: &PresetOptions) {
    // The devices-c panel replaces the built-in device select
    editor.config_mut().show_devices = false;

    editor.panels_mut().reset(vec![
        Panel::new(PANEL_COMMANDS).button(Button::placeholder()),
        Panel::new(PANEL_DEVICES)
            .button(
                Button::new(CMD_DEVICE_DESKTOP, CMD_DEVICE_DESKTOP)
                    .active(true)
                    .label(icons::DEVICE_DESKTOP),
            )
            .button(Button::new(CMD_DEVICE_TABLET, CMD_DEVICE_TABLET).label(icons::DEVICE_TABLET))
            .button(Button::new(CMD_DEVICE_MOBILE, CMD_DEVICE_MOBILE).label(icons::DEVICE_MOBILE)),
        Panel::new(PANEL_OPTIONS)
            .button(
                Button::new(CMD_PREVIEW, CMD_PREVIEW)
                    .context(CMD_PREVIEW)
                    .label(icons::PREVIEW),
            )
            .button(Button::new("undo", CMD_UNDO).label(icons::UNDO))
            .button(Button::new("redo", CMD_REDO).label(icons::REDO))
            .button(Button::new(CMD_CLEAR, CMD_CLEAR).label(icons::CLEAR)),
        Panel::new(PANEL_VIEWS)
            .button(Button::new(CMD_OPEN_LAYERS, CMD_OPEN_LAYERS).label(icons::LAYERS)),
    ]);

    // On component selection, switch to the Style Manager view, unless
    // the Layer Manager is on or nothing is actually selected
    if opts.show_styles_on_change {
        editor.on(EditorEvent::ComponentSelected, |state| {
            let layers_active = state
                .panels
                .get_button(PANEL_VIEWS, CMD_OPEN_LAYERS)
                .map(Button::is_active)
                .unwrap_or(false);

            if !layers_active && state.selected().is_some() {
                state
                    .panels
                    .set_active(PANEL_VIEWS, CMD_OPEN_STYLE_MANAGER, true);
            }
        });
    }

    let show_blocks = opts.show_blocks_on_load;
    editor.on_ready(move |state| {
        if show_blocks {
            state.panels.set_active(PANEL_VIEWS, CMD_OPEN_BLOCKS, true);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::apply;
    use crate::ui::Panel;

    fn preset_editor(opts: &PresetOptions) -> Editor {
        let mut editor = Editor::new();
        apply(&mut editor, opts);
        editor
    }

    /// Host applications extend the views panel with their own view
    /// switchers; the selection and ready behaviors target those buttons.
    fn add_view_buttons(editor: &mut Editor) {
        editor.panels_mut().add_button(
            PANEL_VIEWS,
            Button::new(CMD_OPEN_STYLE_MANAGER, CMD_OPEN_STYLE_MANAGER),
        );
        editor
            .panels_mut()
            .add_button(PANEL_VIEWS, Button::new(CMD_OPEN_BLOCKS, CMD_OPEN_BLOCKS));
    }

    fn style_manager_active(editor: &Editor) -> bool {
        editor
            .panels()
            .get_button(PANEL_VIEWS, CMD_OPEN_STYLE_MANAGER)
            .map(Button::is_active)
            .unwrap_or(false)
    }

    #[test]
    fn registers_four_panels_in_order() {
        let editor = preset_editor(&PresetOptions::default());

        assert_eq!(
            editor.panels().panel_ids(),
            ["commands", "devices-c", "options", "views"]
        );
        let counts: Vec<usize> = editor
            .panels()
            .panels()
            .iter()
            .map(|p| p.buttons.len())
            .collect();
        assert_eq!(counts, [1, 3, 4, 1]);
    }

    #[test]
    fn commands_panel_holds_a_placeholder_slot() {
        let editor = preset_editor(&PresetOptions::default());
        let slot = &editor.panels().get_panel(PANEL_COMMANDS).unwrap().buttons[0];
        assert!(slot.is_placeholder());
    }

    #[test]
    fn desktop_starts_active_the_others_do_not() {
        let editor = preset_editor(&PresetOptions::default());
        let devices = editor.panels().get_panel(PANEL_DEVICES).unwrap();

        assert!(devices.get_button(CMD_DEVICE_DESKTOP).unwrap().is_active());
        assert!(!devices.get_button(CMD_DEVICE_TABLET).unwrap().is_active());
        assert!(!devices.get_button(CMD_DEVICE_MOBILE).unwrap().is_active());
    }

    #[test]
    fn device_buttons_share_no_context_group() {
        // Exclusivity, if any, is left to the underlying commands
        let editor = preset_editor(&PresetOptions::default());
        let devices = editor.panels().get_panel(PANEL_DEVICES).unwrap();
        assert!(devices.buttons.iter().all(|b| b.context.is_none()));
    }

    #[test]
    fn preview_is_its_own_toggle_group() {
        let editor = preset_editor(&PresetOptions::default());
        let preview = editor.panels().get_button(PANEL_OPTIONS, CMD_PREVIEW).unwrap();
        assert_eq!(preview.context.as_deref(), Some(CMD_PREVIEW));

        let options = editor.panels().get_panel(PANEL_OPTIONS).unwrap();
        let ids: Vec<&str> = options.buttons.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, [CMD_PREVIEW, "undo", "redo", CMD_CLEAR]);
    }

    #[test]
    fn disables_the_builtin_device_selector() {
        let editor = preset_editor(&PresetOptions::default());
        assert!(!editor.config().show_devices);

        // Regardless of the input options
        let editor = preset_editor(&PresetOptions {
            show_styles_on_change: false,
            show_blocks_on_load: false,
            ..Default::default()
        });
        assert!(!editor.config().show_devices);
    }

    #[test]
    fn selection_activates_the_style_manager() {
        let mut editor = preset_editor(&PresetOptions::default());
        add_view_buttons(&mut editor);

        editor.add_component("hero");
        editor.select_component("hero");
        assert!(style_manager_active(&editor));
    }

    #[test]
    fn active_layer_view_blocks_the_switch() {
        let mut editor = preset_editor(&PresetOptions::default());
        add_view_buttons(&mut editor);
        editor
            .panels_mut()
            .set_active(PANEL_VIEWS, CMD_OPEN_LAYERS, true);

        editor.add_component("hero");
        editor.select_component("hero");
        assert!(!style_manager_active(&editor));
    }

    #[test]
    fn missing_layers_button_does_not_block_the_switch() {
        let mut editor = preset_editor(&PresetOptions::default());
        add_view_buttons(&mut editor);
        editor.panels_mut().add_panel(Panel::new(PANEL_VIEWS)
            .button(Button::new(CMD_OPEN_STYLE_MANAGER, CMD_OPEN_STYLE_MANAGER)));

        editor.add_component("hero");
        editor.select_component("hero");
        assert!(style_manager_active(&editor));
    }

    #[test]
    fn empty_selection_leaves_the_style_manager_alone() {
        let mut editor = preset_editor(&PresetOptions::default());
        add_view_buttons(&mut editor);

        // Event fired without an actual selection
        editor.emit(EditorEvent::ComponentSelected);
        assert!(!style_manager_active(&editor));

        // Even with the layer view off and buttons present
        editor
            .panels_mut()
            .set_active(PANEL_VIEWS, CMD_OPEN_LAYERS, false);
        editor.emit(EditorEvent::ComponentSelected);
        assert!(!style_manager_active(&editor));
    }

    #[test]
    fn the_switch_is_one_way() {
        let mut editor = preset_editor(&PresetOptions::default());
        add_view_buttons(&mut editor);

        editor.add_component("hero");
        editor.select_component("hero");
        assert!(style_manager_active(&editor));

        // Deselection never deactivates anything
        editor.deselect();
        assert!(style_manager_active(&editor));
    }

    #[test]
    fn no_selection_listener_without_the_styles_flag() {
        let opts = PresetOptions {
            show_styles_on_change: false,
            ..Default::default()
        };
        let mut editor = preset_editor(&opts);
        add_view_buttons(&mut editor);
        assert_eq!(editor.listener_count(EditorEvent::ComponentSelected), 0);

        editor.add_component("hero");
        editor.select_component("hero");
        assert!(!style_manager_active(&editor));
    }

    #[test]
    fn ready_activates_the_blocks_view() {
        let mut editor = preset_editor(&PresetOptions::default());
        add_view_buttons(&mut editor);

        editor.fire_ready();
        assert!(editor
            .panels()
            .get_button(PANEL_VIEWS, CMD_OPEN_BLOCKS)
            .unwrap()
            .is_active());
    }

    #[test]
    fn ready_leaves_blocks_alone_when_the_flag_is_off() {
        let opts = PresetOptions {
            show_blocks_on_load: false,
            ..Default::default()
        };
        let mut editor = preset_editor(&opts);
        add_view_buttons(&mut editor);

        editor.fire_ready();
        assert!(!editor
            .panels()
            .get_button(PANEL_VIEWS, CMD_OPEN_BLOCKS)
            .unwrap()
            .is_active());
    }

    #[test]
    fn ready_callback_registers_regardless_of_flags() {
        let opts = PresetOptions {
            show_styles_on_change: false,
            show_blocks_on_load: false,
            ..Default::default()
        };
        let editor = preset_editor(&opts);
        assert_eq!(editor.pending_ready_callbacks(), 1);
    }

    #[test]
    fn missing_view_buttons_are_tolerated() {
        // The preset layout itself ships no open-sm/open-blocks buttons;
        // without host wiring both behaviors must degrade silently
        let mut editor = preset_editor(&PresetOptions::default());

        editor.add_component("hero");
        editor.select_component("hero");
        editor.fire_ready();

        assert!(editor
            .panels()
            .get_button(PANEL_VIEWS, CMD_OPEN_STYLE_MANAGER)
            .is_none());
        assert!(editor
            .panels()
            .get_button(PANEL_VIEWS, CMD_OPEN_BLOCKS)
            .is_none());
    }

    #[test]
    fn reinitialization_replaces_the_panel_set() {
        let mut editor = preset_editor(&PresetOptions::default());
        editor.panels_mut().add_panel(Panel::new("custom"));
        editor
            .panels_mut()
            .set_active(PANEL_DEVICES, CMD_DEVICE_TABLET, true);

        initialize_panels(&mut editor, &PresetOptions::default());

        assert_eq!(
            editor.panels().panel_ids(),
            ["commands", "devices-c", "options", "views"]
        );
        assert!(!editor
            .panels()
            .get_button(PANEL_DEVICES, CMD_DEVICE_TABLET)
            .unwrap()
            .is_active());
    }

    #[test]
    fn clicked_device_buttons_drive_the_canvas_device() {
        use crate::Device;

        let mut editor = preset_editor(&PresetOptions::default());
        editor.click_button(PANEL_DEVICES, CMD_DEVICE_MOBILE);
        assert_eq!(editor.state().device(), Device::Mobile);

        editor.click_button(PANEL_DEVICES, CMD_DEVICE_DESKTOP);
        assert_eq!(editor.state().device(), Device::Desktop);
    }

    #[test]
    fn buttons_carry_their_icons() {
        let editor = preset_editor(&PresetOptions::default());
        let devices = editor.panels().get_panel(PANEL_DEVICES).unwrap();
        for button in &devices.buttons {
            assert!(button.label.starts_with("<svg"));
        }
    }
}
