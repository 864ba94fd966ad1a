//! The drawing-surface abstraction.
//!
//! The renderer draws through [`DrawSurface`], a minimal device-space
//! capability set: stroke a line, stroke a circle, stroke a polyline, fill
//! text. The production implementation is a thin adapter over the egui
//! painter; [`RecordingSurface`] captures calls for geometry tests.
//!
//! All coordinates reaching a surface are device-space pixels; the
//! logical-to-device conversion happens in [`crate::view::Viewport`].

use std::cell::RefCell;

use bevy_egui::egui::{self, Align2, Color32, FontId, Pos2, Stroke};

/// Device-space drawing capabilities consumed by the renderer.
pub trait DrawSurface {
    /// Stroke a straight segment between two pixel positions.
    fn stroke_line(&self, from: Pos2, to: Pos2, stroke: Stroke);

    /// Stroke a full-turn circle of the given pixel radius.
    fn stroke_circle(&self, center: Pos2, radius: f32, stroke: Stroke);

    /// Stroke consecutive points as line segments; `closed` connects the
    /// last point back to the first.
    fn stroke_polyline(&self, points: Vec<Pos2>, closed: bool, stroke: Stroke);

    /// Fill text with its top-left corner at the given pixel position.
    fn fill_text(&self, pos: Pos2, text: &str, font: FontId, color: Color32);
}

/// Adapter exposing an [`egui::Painter`] as a [`DrawSurface`].
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn stroke_line(&self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter.line_segment([from, to], stroke);
    }

    fn stroke_circle(&self, center: Pos2, radius: f32, stroke: Stroke) {
        self.painter.circle_stroke(center, radius, stroke);
    }

    fn stroke_polyline(&self, points: Vec<Pos2>, closed: bool, stroke: Stroke) {
        let shape = if closed {
            egui::Shape::closed_line(points, stroke)
        } else {
            egui::Shape::line(points, stroke)
        };
        self.painter.add(shape);
    }

    fn fill_text(&self, pos: Pos2, text: &str, font: FontId, color: Color32) {
        self.painter.text(pos, Align2::LEFT_TOP, text, font, color);
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line { from: Pos2, to: Pos2 },
    Circle { center: Pos2, radius: f32 },
    Polyline { points: Vec<Pos2>, closed: bool },
    Text { pos: Pos2, text: String },
}

impl DrawOp {
    /// Whether this op strokes geometry (text fills, it does not stroke).
    pub fn is_stroke(&self) -> bool {
        !matches!(self, DrawOp::Text { .. })
    }
}

/// A surface that records every draw call instead of painting.
///
/// Used by unit and integration tests to assert stroke counts and exact
/// device-space geometry of a render pass.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: RefCell<Vec<DrawOp>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded ops, in call order.
    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.borrow().clone()
    }

    /// Number of stroke operations recorded (lines, circles, polylines).
    pub fn stroke_count(&self) -> usize {
        self.ops.borrow().iter().filter(|op| op.is_stroke()).count()
    }

    /// Recorded text labels, in call order.
    pub fn labels(&self) -> Vec<String> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn stroke_line(&self, from: Pos2, to: Pos2, _stroke: Stroke) {
        self.ops.borrow_mut().push(DrawOp::Line { from, to });
    }

    fn stroke_circle(&self, center: Pos2, radius: f32, _stroke: Stroke) {
        self.ops.borrow_mut().push(DrawOp::Circle { center, radius });
    }

    fn stroke_polyline(&self, points: Vec<Pos2>, closed: bool, _stroke: Stroke) {
        self.ops.borrow_mut().push(DrawOp::Polyline { points, closed });
    }

    fn fill_text(&self, pos: Pos2, text: &str, _font: FontId, _color: Color32) {
        self.ops.borrow_mut().push(DrawOp::Text {
            pos,
            text: text.to_owned(),
        });
    }
}
