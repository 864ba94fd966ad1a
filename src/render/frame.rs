//! Reference frame drawing: zero ring, cross-hairs, range rings.
//!
//! Pure reference geometry around the viewport center; no orbit math. The
//! cross-hairs live entirely in device space; rings have a logical center
//! (the origin) and a logical radius that divides the scale factor back out.

use bevy::math::DVec2;
use bevy_egui::egui::FontId;

use super::{colors, draw_circle, labels};
use crate::error::ViewError;
use crate::surface::DrawSurface;
use crate::view::Viewport;

/// Number of concentric range rings.
pub const RING_COUNT: u32 = 50;

/// Device-space spacing between consecutive rings, in pixels. The logical
/// ring radii are `i * RING_SPACING_PX * scale`, so the pixel spacing holds
/// for every scale factor.
pub const RING_SPACING_PX: f64 = 50.0;

/// Device radius of the origin marker ring, in pixels.
pub const ZERO_RING_RADIUS_PX: f64 = 3.0;

/// Which reference-geometry elements a frame pass draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameOptions {
    /// Origin marker ring at the center.
    pub zero: bool,
    /// Full-span vertical and horizontal cross-hairs through the center.
    pub zero_cross: bool,
    /// Reserved; draws nothing in any revision so far.
    pub x_cross: bool,
    /// Labeled concentric range rings.
    pub rings: bool,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            zero: true,
            zero_cross: true,
            x_cross: true,
            rings: true,
        }
    }
}

impl FrameOptions {
    /// Draw nothing; useful as a base for enabling single elements.
    pub const NONE: FrameOptions = FrameOptions {
        zero: false,
        zero_cross: false,
        x_cross: false,
        rings: false,
    };
}

/// Resource holding the frame options for the live render pass.
#[derive(bevy::prelude::Resource, Clone, Copy, Debug, Default)]
pub struct FrameSettings {
    pub options: FrameOptions,
}

/// Draw the reference frame in order: zero ring, cross-hairs, range rings.
pub fn draw_frame(
    surface: &dyn DrawSurface,
    viewport: &Viewport,
    options: FrameOptions,
) -> Result<(), ViewError> {
    if options.zero {
        // Logical radius chosen so the marker is 3 px at any scale.
        draw_range_ring(surface, viewport, ZERO_RING_RADIUS_PX * viewport.scale(), false)?;
    }
    if options.zero_cross {
        draw_zero_cross(surface, viewport);
    }
    if options.x_cross {
        // Reserved, intentionally not drawn.
    }
    if options.rings {
        for i in 1..=RING_COUNT {
            let radius_km = f64::from(i) * RING_SPACING_PX * viewport.scale();
            draw_range_ring(surface, viewport, radius_km, true)?;
        }
    }
    Ok(())
}

/// Draw the full-span cross-hairs through the viewport center.
///
/// These are device-space spans of the whole surface, not transformed
/// logical geometry.
pub fn draw_zero_cross(surface: &dyn DrawSurface, viewport: &Viewport) {
    let center = viewport.center();
    let stroke = colors::frame_stroke();

    let top = bevy_egui::egui::pos2(center.x, 0.0);
    let bottom = bevy_egui::egui::pos2(center.x, viewport.height());
    surface.stroke_line(top, bottom, stroke);

    let left = bevy_egui::egui::pos2(0.0, center.y);
    let right = bevy_egui::egui::pos2(viewport.width(), center.y);
    surface.stroke_line(left, right, stroke);
}

/// Draw one range ring of the given logical radius (km) about the origin,
/// optionally labeled at its leftmost point.
pub fn draw_range_ring(
    surface: &dyn DrawSurface,
    viewport: &Viewport,
    radius_km: f64,
    label: bool,
) -> Result<(), ViewError> {
    draw_circle(surface, viewport, DVec2::ZERO, radius_km, colors::frame_stroke())?;

    if label {
        surface.fill_text(
            labels::ring_label_pos(viewport, viewport.device_radius(radius_km)),
            &labels::format_distance_label(radius_km),
            FontId::proportional(colors::LABEL_FONT_SIZE),
            colors::LABEL_FILL,
        );
    }
    Ok(())
}
