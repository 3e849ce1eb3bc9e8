//! Tiles and their stroke-adjusted corners.

use crate::geom::{ColorClass, CornerPos, Point, SegmentId};
use crate::stroke::StrokeMetrics;

#[derive(Debug, Clone, PartialEq)]
pub struct Corner {
    pub point: Point,
    pub position: CornerPos,
    /// Last segment routed from this corner. Lookup only; the context owns the segment.
    pub owning_line: Option<SegmentId>,
}

impl Corner {
    fn new(point: Point, position: CornerPos) -> Self {
        Self {
            point,
            position,
            owning_line: None,
        }
    }
}

/// One entity's rectangle.
///
/// `raw_top_left`/`raw_bottom_right` are the footprint on grid lines; the corners sit
/// `stroke.half` outside it so a stroke centered on the corner-to-corner line covers the
/// footprint border exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: String,
    pub raw_top_left: Point,
    pub raw_bottom_right: Point,
    /// Indexed by [`CornerPos::index`].
    pub corners: [Corner; 4],
    pub center: Point,
    pub area: f64,
    pub color: ColorClass,
}

impl Tile {
    pub fn new(
        raw_top_left: Point,
        raw_bottom_right: Point,
        area: f64,
        color: ColorClass,
        id: impl Into<String>,
        stroke: &StrokeMetrics,
    ) -> Self {
        let h = stroke.half;
        let top_left = Point::new(raw_top_left.x - h, raw_top_left.y - h);
        let bottom_right = Point::new(raw_bottom_right.x + h, raw_bottom_right.y + h);
        let corners = [
            Corner::new(top_left, CornerPos::TopLeft),
            Corner::new(Point::new(bottom_right.x, top_left.y), CornerPos::TopRight),
            Corner::new(Point::new(top_left.x, bottom_right.y), CornerPos::BottomLeft),
            Corner::new(bottom_right, CornerPos::BottomRight),
        ];
        let center = Point::new(
            (top_left.x + bottom_right.x) / 2.0,
            (top_left.y + bottom_right.y) / 2.0,
        );
        Self {
            id: id.into(),
            raw_top_left,
            raw_bottom_right,
            corners,
            center,
            area,
            color,
        }
    }

    pub fn corner(&self, pos: CornerPos) -> &Corner {
        &self.corners[pos.index()]
    }

    pub fn corner_mut(&mut self, pos: CornerPos) -> &mut Corner {
        &mut self.corners[pos.index()]
    }

    pub fn top_left(&self) -> Point {
        self.corner(CornerPos::TopLeft).point
    }

    pub fn top_right(&self) -> Point {
        self.corner(CornerPos::TopRight).point
    }

    pub fn bottom_left(&self) -> Point {
        self.corner(CornerPos::BottomLeft).point
    }

    pub fn bottom_right(&self) -> Point {
        self.corner(CornerPos::BottomRight).point
    }

    pub fn width(&self) -> f64 {
        self.top_right().x - self.top_left().x
    }

    pub fn height(&self) -> f64 {
        self.bottom_left().y - self.top_left().y
    }

    /// True when `p` lies strictly left/right of the corner x-range and strictly above/below the
    /// corner y-range.
    pub fn is_diagonal_to(&self, p: Point) -> bool {
        let outside_x = p.x < self.top_left().x || p.x > self.top_right().x;
        let outside_y = p.y < self.top_left().y || p.y > self.bottom_left().y;
        outside_x && outside_y
    }
}
