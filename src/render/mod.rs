//! Rendering for the solar system display.
//!
//! One pass per frame, painted through a background egui area: refresh the
//! viewport from the current surface size (the resize pass), draw the
//! reference frame, then draw one closed ellipse per catalog body.

pub mod frame;
pub mod labels;
pub mod orbits;

#[cfg(test)]
mod proptest_render;

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::bodies::BodyCatalog;
use crate::error::ViewError;
use crate::surface::{DrawSurface, EguiSurface};
use crate::view::Viewport;

pub use self::frame::{FrameOptions, FrameSettings};
pub use self::orbits::OrbitPathSettings;

/// Stroke and fill styling for the display.
pub mod colors {
    use bevy_egui::egui::{Color32, Stroke};

    /// Reference-frame stroke: dim gray, 1 px.
    pub fn frame_stroke() -> Stroke {
        Stroke::new(1.0, Color32::from_rgb(0x29, 0x29, 0x29))
    }

    /// Ring label fill color.
    pub const LABEL_FILL: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);

    /// Ring label font size in points.
    pub const LABEL_FONT_SIZE: f32 = 9.0;

    /// Stroke for an orbit path in the given body color.
    pub fn orbit_stroke(color: Color32) -> Stroke {
        Stroke::new(1.0, color)
    }
}

/// Stroke a segment between two logical points, both routed through the
/// viewport transform.
pub fn draw_line(
    surface: &dyn DrawSurface,
    viewport: &Viewport,
    from: DVec2,
    to: DVec2,
    stroke: egui::Stroke,
) -> Result<(), ViewError> {
    let from = viewport.to_device(from)?;
    let to = viewport.to_device(to)?;
    surface.stroke_line(from, to, stroke);
    Ok(())
}

/// Stroke a full-turn circle with a logical center and a logical radius.
/// The radius is a distance: scaled, never mirrored or translated.
pub fn draw_circle(
    surface: &dyn DrawSurface,
    viewport: &Viewport,
    center: DVec2,
    radius_km: f64,
    stroke: egui::Stroke,
) -> Result<(), ViewError> {
    let center = viewport.to_device(center)?;
    surface.stroke_circle(center, viewport.device_radius(radius_km), stroke);
    Ok(())
}

/// Plugin providing the per-frame render pass.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .init_resource::<FrameSettings>()
            .init_resource::<OrbitPathSettings>()
            .init_resource::<BodyCatalog>()
            .add_systems(EguiPrimaryContextPass, draw_scene);
    }
}

/// Per-frame render pass.
///
/// If the egui context is not ready yet the pass simply returns; rendering
/// is caller-driven, so the next frame retries in full.
fn draw_scene(
    mut contexts: EguiContexts,
    mut viewport: ResMut<Viewport>,
    frame_settings: Res<FrameSettings>,
    orbit_settings: Res<OrbitPathSettings>,
    catalog: Res<BodyCatalog>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // Resize pass: the windowing layer owns both surface dimensions, so the
    // center can never go stale. Idempotent when the size is unchanged.
    let rect = ctx.screen_rect();
    viewport.resize(rect.width(), rect.height());

    egui::Area::new(egui::Id::new("solar_display"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();
            let surface = EguiSurface::new(painter);

            if let Err(err) = frame::draw_frame(&surface, &viewport, frame_settings.options) {
                warn!("skipping reference frame: {err}");
            }

            if orbit_settings.visible {
                for body in catalog.bodies() {
                    let result = orbits::draw_orbit(
                        &surface,
                        &viewport,
                        DVec2::ZERO,
                        &body.orbit,
                        orbit_settings.segments,
                        colors::orbit_stroke(body.color),
                    );
                    if let Err(err) = result {
                        warn!("skipping orbit for {}: {err}", body.id.name());
                    }
                }
            }
        });
}
