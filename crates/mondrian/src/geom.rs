//! Geometry primitives shared by the grid, tile and routing stages.
//!
//! Values here carry no behavior beyond small helpers; all layout state lives in
//! [`crate::context::LayoutContext`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn euclidean(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerPos {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CornerPos {
    pub const ALL: [CornerPos; 4] = [
        CornerPos::TopLeft,
        CornerPos::TopRight,
        CornerPos::BottomLeft,
        CornerPos::BottomRight,
    ];

    pub const fn index(self) -> usize {
        match self {
            CornerPos::TopLeft => 0,
            CornerPos::TopRight => 1,
            CornerPos::BottomLeft => 2,
            CornerPos::BottomRight => 3,
        }
    }

    pub const fn is_left(self) -> bool {
        matches!(self, CornerPos::TopLeft | CornerPos::BottomLeft)
    }

    pub const fn is_top(self) -> bool {
        matches!(self, CornerPos::TopLeft | CornerPos::TopRight)
    }
}

/// Travel direction of an axis-aligned segment (screen coordinates, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDir {
    Right,
    Left,
    Down,
    Up,
}

impl LineDir {
    pub const ALL: [LineDir; 4] = [LineDir::Right, LineDir::Left, LineDir::Down, LineDir::Up];

    pub const fn index(self) -> usize {
        match self {
            LineDir::Right => 0,
            LineDir::Left => 1,
            LineDir::Down => 2,
            LineDir::Up => 3,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, LineDir::Right | LineDir::Left)
    }

    /// Unit step along the direction of travel.
    pub const fn unit(self) -> (f64, f64) {
        match self {
            LineDir::Right => (1.0, 0.0),
            LineDir::Left => (-1.0, 0.0),
            LineDir::Down => (0.0, 1.0),
            LineDir::Up => (0.0, -1.0),
        }
    }
}

/// Classifies the segment `a -> b` as vertical or horizontal.
///
/// A delta of at most `tolerance` on one axis counts as aligned on that axis (corner points carry
/// the half-stroke adjustment, so exact equality is too strict). Coincident points, and points
/// that are misaligned on both axes, yield `None`.
pub fn line_direction(a: Point, b: Point, tolerance: f64) -> Option<LineDir> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let vertical = dx.abs() <= tolerance;
    let horizontal = dy.abs() <= tolerance;
    match (vertical, horizontal) {
        (true, true) => None,
        (true, false) if dy > 0.0 => Some(LineDir::Down),
        (true, false) => Some(LineDir::Up),
        (false, true) if dx > 0.0 => Some(LineDir::Right),
        (false, true) => Some(LineDir::Left),
        (false, false) => None,
    }
}

/// Abstract color class of a tile or segment. Concrete palettes belong to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ColorClass {
    Up,
    Down,
    Moderate,
    #[default]
    Neutral,
}

impl ColorClass {
    /// Fixed tag lookup. Unrecognized tags fall back to [`ColorClass::Neutral`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "up" | "red" => ColorClass::Up,
            "down" | "blue" => ColorClass::Down,
            "moderate" | "yellow" => ColorClass::Moderate,
            _ => ColorClass::Neutral,
        }
    }
}

impl From<&str> for ColorClass {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<String> for ColorClass {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Outline of a tile.
    Boundary,
    /// Orthogonal link between two related tiles.
    Connector,
    /// Background guide line touching a tile edge.
    Guide,
    /// Outer canvas frame.
    Frame,
}

/// Index of a segment inside the layout context that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub a: Point,
    pub b: Point,
    pub direction: Option<LineDir>,
    pub color: ColorClass,
    pub stroke_width: f64,
    pub kind: SegmentKind,
}

impl LineSegment {
    pub fn length(&self) -> f64 {
        self.a.euclidean(self.b)
    }
}
