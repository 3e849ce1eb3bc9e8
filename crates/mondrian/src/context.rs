//! Per-build layout state.
//!
//! A [`LayoutContext`] owns every tile and segment of one build. Nothing is shared between
//! contexts, so independent builds can run side by side.

use crate::config::CanvasConfig;
use crate::error::{Error, Result};
use crate::geom::{ColorClass, CornerPos, LineDir, LineSegment, Point, SegmentId, SegmentKind};
use crate::stroke::StrokeMetrics;
use crate::tile::Tile;
use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct LayoutContext {
    pub stroke: StrokeMetrics,
    pub thin_stroke_width: f64,
    tiles: IndexMap<String, Tile>,
    segments: Vec<LineSegment>,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl LayoutContext {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            stroke: StrokeMetrics::new(config.stroke_width),
            thin_stroke_width: config.thin_stroke_width,
            tiles: IndexMap::new(),
            segments: Vec::new(),
        }
    }

    /// Registers a tile and appends its four boundary segments (top, right, bottom, left).
    pub fn new_tile(
        &mut self,
        raw_top_left: Point,
        raw_bottom_right: Point,
        area: f64,
        color: ColorClass,
        id: impl Into<String>,
    ) -> Result<&Tile> {
        let id = id.into();
        if self.tiles.contains_key(&id) {
            return Err(Error::DuplicateEntity { id });
        }
        let tile = Tile::new(
            raw_top_left,
            raw_bottom_right,
            area,
            color,
            id.clone(),
            &self.stroke,
        );

        let h = self.stroke.half;
        let (tl, tr, bl, br) = (
            tile.top_left(),
            tile.top_right(),
            tile.bottom_left(),
            tile.bottom_right(),
        );
        let outline = [
            (tl.offset(0.0, h), tr.offset(0.0, h), LineDir::Right),
            (tr.offset(-h, 0.0), br.offset(-h, 0.0), LineDir::Down),
            (br.offset(0.0, -h), bl.offset(0.0, -h), LineDir::Left),
            (bl.offset(h, 0.0), tl.offset(h, 0.0), LineDir::Up),
        ];
        for (a, b, dir) in outline {
            self.push_segment(LineSegment {
                a,
                b,
                direction: Some(dir),
                color: ColorClass::Neutral,
                stroke_width: self.stroke.width,
                kind: SegmentKind::Boundary,
            });
        }

        let (idx, _) = self.tiles.insert_full(id, tile);
        Ok(&self.tiles[idx])
    }

    /// Thin outline along the outer grid extent: top, right, bottom, left.
    pub fn push_frame(&mut self, extent: Point) {
        let (w, hgt) = (extent.x, extent.y);
        let frame = [
            (Point::new(0.0, 0.0), Point::new(w, 0.0), LineDir::Right),
            (Point::new(w, 0.0), Point::new(w, hgt), LineDir::Down),
            (Point::new(w, hgt), Point::new(0.0, hgt), LineDir::Left),
            (Point::new(0.0, hgt), Point::new(0.0, 0.0), LineDir::Up),
        ];
        for (a, b, dir) in frame {
            self.push_segment(LineSegment {
                a,
                b,
                direction: Some(dir),
                color: ColorClass::Neutral,
                stroke_width: self.thin_stroke_width,
                kind: SegmentKind::Frame,
            });
        }
    }

    pub fn push_segment(&mut self, segment: LineSegment) -> SegmentId {
        self.segments.push(segment);
        SegmentId(self.segments.len() - 1)
    }

    pub fn tile(&self, id: &str) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn tile_mut(&mut self, id: &str) -> Option<&mut Tile> {
        self.tiles.get_mut(id)
    }

    /// Tiles in creation order.
    pub fn tiles(&self) -> impl ExactSizeIterator<Item = &Tile> + '_ {
        self.tiles.values()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn segment(&self, id: SegmentId) -> Option<&LineSegment> {
        self.segments.get(id.0)
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn segments_of_kind(&self, kind: SegmentKind) -> impl Iterator<Item = &LineSegment> + '_ {
        self.segments.iter().filter(move |s| s.kind == kind)
    }

    /// Resolves a corner's back-reference to the segment it names.
    pub fn corner_segment(&self, tile_id: &str, pos: CornerPos) -> Option<&LineSegment> {
        let id = self.tile(tile_id)?.corner(pos).owning_line?;
        self.segment(id)
    }

    pub(crate) fn into_parts(self) -> (Vec<Tile>, Vec<LineSegment>) {
        (self.tiles.into_values().collect(), self.segments)
    }
}
