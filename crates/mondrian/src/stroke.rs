//! Stroke-width derived offsets.
//!
//! A stroke of width `w` drawn along a tile edge spills `floor(w / 2)` units to either side of its
//! centerline. Corners are pushed outwards by that amount so that adjacent tiles sharing a grid
//! line meet without gaps, and connectors use the same quantities to stay outside tile bodies.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeMetrics {
    pub width: f64,
    /// `floor(width / 2)`: perpendicular offset that keeps a stroke outside a tile body.
    pub half: f64,
    /// `half + 1`: reach of an existing boundary stroke past its corner.
    pub reach: f64,
}

impl StrokeMetrics {
    pub fn new(width: f64) -> Self {
        let half = (width / 2.0).floor();
        Self {
            width,
            half,
            reach: half + 1.0,
        }
    }

    /// Along-axis trim applied where a connector meets a boundary stroke (`reach - half`).
    pub fn trim(&self) -> f64 {
        self.reach - self.half
    }
}

impl Default for StrokeMetrics {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_STROKE_WIDTH)
    }
}
