//! egui-based settings UI for the display.

mod controls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin that adds the view-settings panel.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, controls::controls_panel);
    }
}
