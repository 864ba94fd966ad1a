//! Orbit shape parameterization and sampling.
//!
//! An orbit is rendered as a closed polyline: the conic equation is sampled
//! at equally spaced anomaly steps and consecutive samples are connected by
//! line segments. All distances are in kilometers, angles in radians.

use bevy::math::DVec2;

use crate::error::RenderError;

/// Degrees to radians conversion factor.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Default number of anomaly steps per orbit.
///
/// Trades curve smoothness against per-frame draw cost; runtime-adjustable
/// through `OrbitPathSettings` in the render layer.
pub const DEFAULT_SEGMENTS: u32 = 1000;

/// Sampling never goes below this many steps; fewer would not read as a
/// curve at all.
pub const MIN_SEGMENTS: u32 = 8;

/// Shape of a closed elliptical orbit.
///
/// Validated at construction: `semi_major_axis > 0` and `0 <= e < 1`. The
/// sampling loop assumes a bounded curve, so hyperbolic and parabolic
/// eccentricities are rejected rather than silently tracing an open arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitShape {
    semi_major_axis: f64,
    eccentricity: f64,
    argument_of_periapsis: f64,
}

impl OrbitShape {
    /// Create an orbit from semi-major axis (km), eccentricity, and
    /// argument of periapsis (radians).
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        argument_of_periapsis: f64,
    ) -> Result<Self, RenderError> {
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(RenderError::DegenerateAxis(semi_major_axis));
        }
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(RenderError::UnboundOrbit(eccentricity));
        }
        Ok(Self {
            semi_major_axis,
            eccentricity,
            argument_of_periapsis,
        })
    }

    /// Create an orbit from its apsis distances (km).
    ///
    /// `a = (r_apo + r_peri) / 2`, `e = (r_apo - r_peri) / (r_apo + r_peri)`.
    pub fn from_apsides(
        apoapsis: f64,
        periapsis: f64,
        argument_of_periapsis: f64,
    ) -> Result<Self, RenderError> {
        if !periapsis.is_finite() || periapsis <= 0.0 {
            return Err(RenderError::DegenerateAxis(periapsis));
        }
        if !apoapsis.is_finite() || apoapsis < periapsis {
            return Err(RenderError::DegenerateAxis(apoapsis));
        }
        let semi_major_axis = (apoapsis + periapsis) / 2.0;
        let eccentricity = (apoapsis - periapsis) / (apoapsis + periapsis);
        Self::new(semi_major_axis, eccentricity, argument_of_periapsis)
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn argument_of_periapsis(&self) -> f64 {
        self.argument_of_periapsis
    }

    /// Semi-minor axis: `b = a * sqrt(1 - e^2)` (equals
    /// `sqrt(r_apo * r_peri)`).
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Nearest distance from the focus.
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the focus.
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Orbital radius at anomaly `theta`, via the conic equation
    /// `r = a (1 - e^2) / (1 - e cos(theta))`.
    pub fn radius_at(&self, theta: f64) -> f64 {
        let a = self.semi_major_axis;
        let e = self.eccentricity;
        a * (1.0 - e * e) / (1.0 - e * theta.cos())
    }

    /// The ellipse center is displaced `a*e` from the focus along the
    /// orientation angle; samples are measured from this offset point.
    pub fn focus_offset(&self) -> DVec2 {
        let ae = self.semi_major_axis * self.eccentricity;
        let omega = self.argument_of_periapsis;
        DVec2::new(ae * omega.cos(), ae * omega.sin())
    }

    /// Sample the orbit around `center` (the focus, logical km) at
    /// `segments` equally spaced anomaly steps.
    ///
    /// Returns `segments` distinct points, one full turn, without repeating
    /// the first point; the drawing layer closes the polyline.
    pub fn sample(&self, center: DVec2, segments: u32) -> Vec<DVec2> {
        let n = segments.max(MIN_SEGMENTS);
        let omega = self.argument_of_periapsis;
        let offset = center + self.focus_offset();

        let mut points = Vec::with_capacity(n as usize);
        for k in 0..n {
            let theta = std::f64::consts::TAU * f64::from(k) / f64::from(n);
            let r = self.radius_at(theta);
            let angle = omega + theta;
            points.push(offset + DVec2::new(r * angle.cos(), r * angle.sin()));
        }
        points
    }
}
