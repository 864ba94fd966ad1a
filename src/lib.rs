//! Solarview - stylized 2D solar system display.
//!
//! A library crate providing the viewport transform, drawing-surface
//! abstraction, and orbit rasterization for testing and integration
//! purposes.

pub mod bodies;
pub mod error;
pub mod orbit;
pub mod render;
pub mod surface;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod test_utils;
