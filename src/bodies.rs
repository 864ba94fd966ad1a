//! Orbital elements for the displayed bodies.
//!
//! Stylized inner-planet elements (semi-major axis in km, J2000-ish values)
//! for the 2D display. This is presentation data, not an ephemeris: no
//! epochs, no mean motion, no time dependence.

use bevy::prelude::*;
use bevy_egui::egui::Color32;

use crate::orbit::{DEG_TO_RAD, OrbitShape};

/// Identifier for the bodies on the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Mercury,
    Venus,
    Earth,
    Mars,
}

impl BodyId {
    pub const ALL: &'static [BodyId] = &[BodyId::Mercury, BodyId::Venus, BodyId::Earth, BodyId::Mars];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
        }
    }
}

/// One body to render: identity, orbit shape, stroke color.
#[derive(Clone, Debug)]
pub struct Body {
    pub id: BodyId,
    pub orbit: OrbitShape,
    pub color: Color32,
}

/// The set of bodies drawn each render pass.
#[derive(Resource, Clone, Debug)]
pub struct BodyCatalog {
    bodies: Vec<Body>,
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self {
            bodies: all_bodies(),
        }
    }
}

impl BodyCatalog {
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}

/// Static element table for the inner planets.
fn all_bodies() -> Vec<Body> {
    let orbit = |a_km: f64, e: f64, omega_deg: f64| {
        OrbitShape::new(a_km, e, omega_deg * DEG_TO_RAD)
            .expect("catalog orbital elements are valid")
    };

    vec![
        Body {
            id: BodyId::Mercury,
            orbit: orbit(57_909_050.0, 0.205_630, 29.124),
            color: Color32::from_rgb(0x99, 0x99, 0x99),
        },
        Body {
            id: BodyId::Venus,
            orbit: orbit(108_208_000.0, 0.006_772, 54.884),
            color: Color32::from_rgb(0xe6, 0xd9, 0xb3),
        },
        Body {
            id: BodyId::Earth,
            orbit: orbit(149_598_261.0, 0.016_711_23, 0.0),
            color: Color32::from_rgb(0x77, 0xaa, 0x99),
        },
        Body {
            id: BodyId::Mars,
            orbit: orbit(227_939_200.0, 0.093_4, 286.502),
            color: Color32::from_rgb(0xcc, 0x66, 0x33),
        },
    ]
}
