//! View-settings panel: scale, zoom, frame elements, orbit paths.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::orbit;
use crate::render::{FrameSettings, OrbitPathSettings};
use crate::view::Viewport;

/// Slider bounds for the scale factor (km per pixel).
const SCALE_RANGE: std::ops::RangeInclusive<f64> = 10_000.0..=10_000_000.0;

/// Slider bounds for the zoom factor.
const ZOOM_RANGE: std::ops::RangeInclusive<f64> = 0.1..=10.0;

/// System that renders the settings window.
pub fn controls_panel(
    mut contexts: EguiContexts,
    mut viewport: ResMut<Viewport>,
    mut frame_settings: ResMut<FrameSettings>,
    mut orbit_settings: ResMut<OrbitPathSettings>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("View")
        .default_pos(egui::pos2(12.0, 12.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Scale (km / px)");
            let mut scale = viewport.scale();
            let response = ui.add(
                egui::Slider::new(&mut scale, SCALE_RANGE)
                    .logarithmic(true)
                    .custom_formatter(|v, _| format!("{v:.0}")),
            );
            if response.changed() {
                // Slider bounds keep the value positive; a failed set is
                // still logged rather than dropped silently.
                if let Err(err) = viewport.set_scale(scale) {
                    warn!("rejected scale from panel: {err}");
                }
            }

            ui.label("Zoom");
            ui.add(egui::Slider::new(&mut viewport.zoom, ZOOM_RANGE).logarithmic(true));

            ui.separator();
            let options = &mut frame_settings.options;
            ui.checkbox(&mut options.zero, "Origin ring");
            ui.checkbox(&mut options.zero_cross, "Cross-hairs");
            ui.add_enabled(
                false,
                egui::Checkbox::new(&mut options.x_cross, "X cross (reserved)"),
            );
            ui.checkbox(&mut options.rings, "Range rings");

            ui.separator();
            ui.checkbox(&mut orbit_settings.visible, "Orbit paths");
            ui.add_enabled(
                orbit_settings.visible,
                egui::Slider::new(&mut orbit_settings.segments, 64..=4096).text("segments"),
            );
            if ui.button("Reset segments").clicked() {
                orbit_settings.segments = orbit::DEFAULT_SEGMENTS;
            }
        });
}
