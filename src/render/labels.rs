//! Range-ring label formatting and placement.

use bevy_egui::egui::{self, Pos2};

use crate::view::Viewport;

/// Pixel nudge from the ring's leftmost point to its label anchor:
/// slightly right and below, so the text clears the stroke.
pub const LABEL_NUDGE: egui::Vec2 = egui::vec2(3.0, 10.0);

/// Format a distance (km) for a ring label.
///
/// Single ordered precedence: millions first ("N M"), then thousands
/// ("N K"), else the raw number.
pub fn format_distance_label(radius_km: f64) -> String {
    if radius_km >= 1_000_000.0 {
        format!("{} M", format_number(radius_km / 1_000_000.0))
    } else if radius_km >= 1_000.0 {
        format!("{} K", format_number(radius_km / 1_000.0))
    } else {
        format_number(radius_km)
    }
}

/// Print whole values without a trailing ".0".
fn format_number(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Label anchor for a ring of the given device radius: the ring's leftmost
/// intersection with the horizontal cross-hair, nudged by [`LABEL_NUDGE`].
pub fn ring_label_pos(viewport: &Viewport, device_radius: f32) -> Pos2 {
    viewport.center() + egui::vec2(-device_radius, 0.0) + LABEL_NUDGE
}
