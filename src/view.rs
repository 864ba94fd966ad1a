//! Screen-space viewport for the solar system display.
//!
//! Owns the transform between the two coordinate frames of the renderer:
//! - *Logical space*: Y-up Cartesian, in kilometers, origin at the Sun.
//! - *Device space*: Y-down pixels, origin at the top-left of the surface.
//!
//! Every drawn point routes through [`Viewport::to_device`]; nothing draws
//! raw logical coordinates.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy_egui::egui::{self, Pos2};

use crate::error::ViewError;

/// Default scale factor: kilometers of logical space per device pixel.
/// At this scale the inner solar system fits a desktop window.
pub const DEFAULT_SCALE_KM_PER_PX: f64 = 500_000.0;

/// View parameters: device-space center, zoom, scale, surface dimensions.
///
/// There is exactly one `Viewport` per app; the render pass refreshes its
/// dimensions from the current surface every frame.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct Viewport {
    center: Pos2,
    scale: f64,
    /// Secondary multiplicative zoom applied on top of the scale factor.
    pub zoom: f64,
    width: f32,
    height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: egui::pos2(0.0, 0.0),
            scale: 1.0,
            zoom: 1.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Viewport {
    /// Create a viewport with the given scale factor (km per pixel).
    pub fn with_scale(scale: f64) -> Result<Self, ViewError> {
        let mut viewport = Self::default();
        viewport.set_scale(scale)?;
        Ok(viewport)
    }

    /// Set the scale factor (km per pixel). Rejects zero, negative, and
    /// non-finite values: a bad divisor here would turn every subsequent
    /// device coordinate into infinity or NaN.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), ViewError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewError::InvalidScale(scale));
        }
        self.scale = scale;
        Ok(())
    }

    /// Current scale factor (km per pixel).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Device-space center of the surface.
    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Update surface dimensions and recompute the center.
    ///
    /// Callable at any time; idempotent for unchanged dimensions. The
    /// center must never go stale relative to the surface size, so this is
    /// the only place it is written.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.center = egui::pos2(width / 2.0, height / 2.0);
    }

    /// Transform a logical point (Y-up, km) to device space (Y-down, px).
    ///
    /// The Y negation mirrors the mathematical frame onto the raster frame.
    /// Non-finite coordinates are rejected here, at the boundary, rather
    /// than propagating into degenerate draw calls.
    pub fn to_device(&self, p: DVec2) -> Result<Pos2, ViewError> {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(ViewError::NonFinitePoint { x: p.x, y: p.y });
        }
        let x = f64::from(self.center.x) + p.x * self.zoom / self.scale;
        let y = f64::from(self.center.y) - p.y * self.zoom / self.scale;
        Ok(egui::pos2(x as f32, y as f32))
    }

    /// Convert a logical distance to a device-space length in pixels.
    ///
    /// A radius is a distance, not a point: it is scaled only, never
    /// mirrored or translated, and zoom deliberately does not apply
    /// (range rings keep their pixel spacing at any zoom).
    pub fn device_radius(&self, radius_km: f64) -> f32 {
        (radius_km / self.scale) as f32
    }
}
