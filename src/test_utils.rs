//! Test fixtures for viewport and orbit geometry tests.

pub mod fixtures {
    use crate::orbit::OrbitShape;
    use crate::view::Viewport;

    /// Viewport with the given scale and surface dimensions.
    pub fn viewport(scale: f64, width: f32, height: f32) -> Viewport {
        let mut v = Viewport::with_scale(scale).unwrap();
        v.resize(width, height);
        v
    }

    /// The reference scenario: 800x600 surface at 500,000 km/px.
    pub fn viewport_800x600() -> Viewport {
        viewport(500_000.0, 800.0, 600.0)
    }

    /// Earth's orbit as drawn by the display.
    pub fn earth_orbit() -> OrbitShape {
        OrbitShape::new(149_598_261.0, 0.016_711_23, 0.0).unwrap()
    }
}
