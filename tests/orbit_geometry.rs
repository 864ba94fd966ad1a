//! Integration tests for orbit rasterization through the viewport.

mod common;

use bevy::math::DVec2;
use bevy_egui::egui::{Color32, Stroke};
use solarview::bodies::BodyCatalog;
use solarview::error::RenderError;
use solarview::orbit::OrbitShape;
use solarview::render::orbits::draw_orbit;
use solarview::surface::{DrawOp, RecordingSurface};

use common::viewport;

fn stroke() -> Stroke {
    Stroke::new(1.0, Color32::WHITE)
}

#[test]
fn circular_orbit_round_trips_to_logical_radius() {
    let viewport = viewport(500_000.0, 800.0, 600.0);
    let a = 149_598_261.0;
    let shape = OrbitShape::new(a, 0.0, 0.0).unwrap();

    let surface = RecordingSurface::new();
    draw_orbit(&surface, &viewport, DVec2::ZERO, &shape, 1000, stroke()).unwrap();

    let ops = surface.ops();
    assert_eq!(ops.len(), 1);
    let DrawOp::Polyline { points, closed } = &ops[0] else {
        panic!("expected one closed polyline, got {ops:?}");
    };
    assert!(*closed);
    assert_eq!(points.len(), 1000);

    // Every device point maps back to logical distance a within tolerance.
    for p in points {
        let device = f64::from((*p - viewport.center()).length());
        let logical = device * viewport.scale();
        assert!(
            (logical - a).abs() <= a * 1.0e-4,
            "sample at logical distance {logical}, expected {a}"
        );
    }
}

#[test]
fn whole_catalog_renders_without_errors() {
    let viewport = viewport(500_000.0, 800.0, 600.0);
    let catalog = BodyCatalog::default();

    let surface = RecordingSurface::new();
    for body in catalog.bodies() {
        draw_orbit(&surface, &viewport, DVec2::ZERO, &body.orbit, 1000, stroke()).unwrap();
    }
    assert_eq!(surface.stroke_count(), catalog.bodies().len());
}

#[test]
fn segments_setting_controls_resolution() {
    let viewport = viewport(500_000.0, 800.0, 600.0);
    let shape = OrbitShape::new(1.0e8, 0.1, 0.0).unwrap();

    for segments in [64u32, 256, 1000] {
        let surface = RecordingSurface::new();
        draw_orbit(&surface, &viewport, DVec2::ZERO, &shape, segments, stroke()).unwrap();
        let ops = surface.ops();
        let DrawOp::Polyline { points, .. } = &ops[0] else {
            panic!("expected a polyline");
        };
        assert_eq!(points.len(), segments as usize);
    }
}

#[test]
fn unbound_shapes_are_rejected_before_drawing() {
    assert_eq!(
        OrbitShape::new(1.0e8, 1.2, 0.0),
        Err(RenderError::UnboundOrbit(1.2))
    );
    assert_eq!(
        OrbitShape::new(-5.0, 0.1, 0.0),
        Err(RenderError::DegenerateAxis(-5.0))
    );
}

#[test]
fn orbit_follows_viewport_recenter() {
    let mut viewport = viewport(500_000.0, 800.0, 600.0);
    let shape = OrbitShape::new(1.0e8, 0.0, 0.0).unwrap();

    let centroid = |surface: &RecordingSurface| {
        let ops = surface.ops();
        let DrawOp::Polyline { points, .. } = &ops[0] else {
            panic!("expected a polyline");
        };
        let sum = points
            .iter()
            .fold(bevy_egui::egui::vec2(0.0, 0.0), |acc, p| acc + p.to_vec2());
        sum / points.len() as f32
    };

    let surface = RecordingSurface::new();
    draw_orbit(&surface, &viewport, DVec2::ZERO, &shape, 1000, stroke()).unwrap();
    let before = centroid(&surface);
    assert!((before.x - 400.0).abs() < 0.5 && (before.y - 300.0).abs() < 0.5);

    viewport.resize(1024.0, 768.0);
    let surface = RecordingSurface::new();
    draw_orbit(&surface, &viewport, DVec2::ZERO, &shape, 1000, stroke()).unwrap();
    let after = centroid(&surface);
    assert!((after.x - 512.0).abs() < 0.5 && (after.y - 384.0).abs() < 0.5);
}
