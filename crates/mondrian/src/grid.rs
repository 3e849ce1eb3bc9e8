//! Uniform cell grid and footprint packing.
//!
//! The canvas is cut into `cell_width x cell_height` cells. A footprint is a block of whole cells
//! whose size approximates a target area and whose middle cell sits under the requested center.
//! Packing performs no overlap detection: callers feed entities by descending area, and earlier
//! footprints simply keep their cells.

use crate::geom::Point;
use tracing::trace;

/// Pixel rectangle of a footprint, spanning whole grid cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Footprint {
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True when the open interiors of both rectangles intersect.
    pub fn overlaps(&self, other: &Footprint) -> bool {
        self.top_left.x < other.bottom_right.x
            && other.top_left.x < self.bottom_right.x
            && self.top_left.y < other.bottom_right.y
            && other.top_left.y < self.bottom_right.y
    }
}

#[derive(Debug, Clone)]
pub struct GridSystem {
    pub width: f64,
    pub height: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    /// y-values of horizontal grid lines, from 0 in steps of `cell_height`.
    pub lines_h: Vec<f64>,
    /// x-values of vertical grid lines, from 0 in steps of `cell_width`.
    pub lines_v: Vec<f64>,
}

impl GridSystem {
    pub fn new(width: f64, height: f64, cell_width: f64, cell_height: f64) -> Self {
        Self {
            width,
            height,
            cell_width,
            cell_height,
            lines_h: grid_lines(height, cell_height),
            lines_v: grid_lines(width, cell_width),
        }
    }

    pub fn from_config(config: &crate::CanvasConfig) -> Self {
        Self::new(
            config.canvas_width,
            config.canvas_height,
            config.cell_width,
            config.cell_height,
        )
    }

    pub fn cell_area(&self) -> f64 {
        self.cell_width * self.cell_height
    }

    /// Bottom-right corner of the last full grid cell; the drawable extent of the canvas.
    pub fn extent(&self) -> Point {
        Point::new(
            self.lines_v.last().copied().unwrap_or(0.0),
            self.lines_h.last().copied().unwrap_or(0.0),
        )
    }

    /// Rows and columns of a near-square block holding `cell_count` cells.
    pub fn approximate_grid_layout(cell_count: usize) -> (usize, usize) {
        match cell_count {
            0 | 1 => (1, 1),
            2..=4 => (2, 2),
            n => {
                let rows = (n as f64).sqrt().floor() as usize;
                (rows, n.div_ceil(rows))
            }
        }
    }

    /// Whole-cell rectangle centered on `point` approximating `target_area`.
    ///
    /// Returns the footprint and the absolute difference between the target and the footprint's
    /// cell area. Footprints larger than the grid are clipped to the usable cells (cell 0 on each
    /// axis is reserved).
    pub fn fill_footprint(&self, point: Point, target_area: f64) -> (Footprint, f64) {
        let cell_count = (target_area / self.cell_area()).round_ties_even().max(1.0) as usize;
        let (mut rows, mut cols) = Self::approximate_grid_layout(cell_count);

        let last_row = self.lines_h.len().saturating_sub(1);
        let last_col = self.lines_v.len().saturating_sub(1);
        let max_rows = last_row.saturating_sub(1).max(1);
        let max_cols = last_col.saturating_sub(1).max(1);
        if rows > max_rows || cols > max_cols {
            trace!(rows, cols, max_rows, max_cols, "footprint clipped to grid bounds");
            rows = rows.min(max_rows);
            cols = cols.min(max_cols);
        }

        let start_row = clamp_start(
            (point.y / self.cell_height).floor() - (rows / 2) as f64,
            last_row,
            rows,
        );
        let start_col = clamp_start(
            (point.x / self.cell_width).floor() - (cols / 2) as f64,
            last_col,
            cols,
        );

        let footprint = Footprint {
            top_left: Point::new(self.line_v(start_col), self.line_h(start_row)),
            bottom_right: Point::new(self.line_v(start_col + cols), self.line_h(start_row + rows)),
        };
        let area_error = (target_area - (rows * cols) as f64 * self.cell_area()).abs();
        (footprint, area_error)
    }

    /// Applies [`Self::fill_footprint`] pairwise, preserving input order.
    ///
    /// Returns the footprints and the summed area error.
    pub fn fill_footprints(&self, points: &[Point], target_areas: &[f64]) -> (Vec<Footprint>, f64) {
        let mut footprints = Vec::with_capacity(points.len().min(target_areas.len()));
        let mut area_error = 0.0;
        for (&point, &target_area) in points.iter().zip(target_areas) {
            let (footprint, err) = self.fill_footprint(point, target_area);
            footprints.push(footprint);
            area_error += err;
        }
        (footprints, area_error)
    }

    fn line_h(&self, idx: usize) -> f64 {
        self.lines_h
            .get(idx)
            .copied()
            .unwrap_or(idx as f64 * self.cell_height)
    }

    fn line_v(&self, idx: usize) -> f64 {
        self.lines_v
            .get(idx)
            .copied()
            .unwrap_or(idx as f64 * self.cell_width)
    }
}

fn grid_lines(extent: f64, step: f64) -> Vec<f64> {
    let count = (extent / step).floor() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Clamped in float space so far off-canvas centers pin to the nearest edge.
fn clamp_start(start: f64, last_index: usize, span: usize) -> usize {
    let max = last_index.saturating_sub(span).max(1) as f64;
    start.clamp(1.0, max) as usize
}
