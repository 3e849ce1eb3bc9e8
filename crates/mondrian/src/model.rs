//! Input and output records exchanged with loaders and renderers.

use crate::geom::{ColorClass, LineDir, LineSegment, Point, SegmentKind};
use crate::tile::Tile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub weight: f64,
    #[serde(default, alias = "color", alias = "colorClass")]
    pub color_class: ColorClass,
}

impl Entity {
    pub fn new(
        id: impl Into<String>,
        x: f64,
        y: f64,
        weight: f64,
        color_class: ColorClass,
    ) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            weight,
            color_class,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Unordered pair of tile ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    #[serde(alias = "idA", alias = "a")]
    pub id_a: String,
    #[serde(alias = "idB", alias = "b")]
    pub id_b: String,
}

impl Relation {
    pub fn new(id_a: impl Into<String>, id_b: impl Into<String>) -> Self {
        Self {
            id_a: id_a.into(),
            id_b: id_b.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayout {
    pub id: String,
    pub top_left: Point,
    pub bottom_right: Point,
    pub color_class: ColorClass,
    pub area: f64,
}

impl From<&Tile> for TileLayout {
    fn from(tile: &Tile) -> Self {
        Self {
            id: tile.id.clone(),
            top_left: tile.raw_top_left,
            bottom_right: tile.raw_bottom_right,
            color_class: tile.color,
            area: tile.area,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentLayout {
    pub a: Point,
    pub b: Point,
    pub direction: Option<LineDir>,
    pub color_class: ColorClass,
    pub stroke_width: f64,
    pub kind: SegmentKind,
}

impl From<&LineSegment> for SegmentLayout {
    fn from(seg: &LineSegment) -> Self {
        Self {
            a: seg.a,
            b: seg.b,
            direction: seg.direction,
            color_class: seg.color,
            stroke_width: seg.stroke_width,
            kind: seg.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MondrianLayout {
    /// Tiles in placement order (descending area).
    pub tiles: Vec<TileLayout>,
    /// Frame, boundary, connector and guide segments in emission order.
    pub segments: Vec<SegmentLayout>,
    /// Summed `|target - footprint|` area over all tiles.
    pub area_error: f64,
}

impl MondrianLayout {
    pub fn segments_of_kind(&self, kind: SegmentKind) -> impl Iterator<Item = &SegmentLayout> + '_ {
        self.segments.iter().filter(move |s| s.kind == kind)
    }
}
