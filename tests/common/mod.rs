//! Common helpers for integration tests.
// Not every test binary uses every helper.
#![allow(dead_code)]

use bevy_egui::egui::Pos2;
use solarview::surface::DrawOp;
use solarview::view::Viewport;

/// Viewport with the given scale and surface dimensions.
pub fn viewport(scale: f64, width: f32, height: f32) -> Viewport {
    let mut v = Viewport::with_scale(scale).unwrap();
    v.resize(width, height);
    v
}

/// Circle radii from a recorded op list, in call order.
pub fn circle_radii(ops: &[DrawOp]) -> Vec<f32> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Circle { radius, .. } => Some(*radius),
            _ => None,
        })
        .collect()
}

/// Circle centers from a recorded op list, in call order.
pub fn circle_centers(ops: &[DrawOp]) -> Vec<Pos2> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Circle { center, .. } => Some(*center),
            _ => None,
        })
        .collect()
}
