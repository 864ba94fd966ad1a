//! Orbit path drawing.
//!
//! Samples an [`OrbitShape`] around its focus and strokes the samples as a
//! single closed polyline. Every sample routes through the viewport
//! transform; orbit geometry is never drawn in logical coordinates.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy_egui::egui::Stroke;

use crate::error::RenderError;
use crate::orbit::{DEFAULT_SEGMENTS, OrbitShape};
use crate::surface::DrawSurface;
use crate::view::Viewport;

/// Settings for orbit path rendering.
#[derive(Resource, Clone, Copy, Debug)]
pub struct OrbitPathSettings {
    /// Whether to draw orbit paths at all.
    pub visible: bool,
    /// Number of anomaly steps per orbit (higher = smoother).
    pub segments: u32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Draw one orbit around `center` (logical km) as a closed polyline.
///
/// Fails if any sample cannot be transformed; nothing is stroked in that
/// case, so a bad orbit never leaves a partial curve on the surface.
pub fn draw_orbit(
    surface: &dyn DrawSurface,
    viewport: &Viewport,
    center: DVec2,
    shape: &OrbitShape,
    segments: u32,
    stroke: Stroke,
) -> Result<(), RenderError> {
    let samples = shape.sample(center, segments);
    let mut points = Vec::with_capacity(samples.len());
    for sample in samples {
        points.push(viewport.to_device(sample)?);
    }
    surface.stroke_polyline(points, true, stroke);
    Ok(())
}
