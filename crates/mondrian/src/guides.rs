//! Background guide lines.
//!
//! Guides are laid only on x/y positions that are tile edges, and only across the gaps between
//! tiles along that position. Each guide ends on a tile edge or on the canvas boundary; short
//! stubs are dropped.

use crate::geom::{ColorClass, LineDir, LineSegment, Point, SegmentKind};
use crate::tile::Tile;

/// A tile rectangle seen from one line orientation: `across` is the axis the line position lives
/// on, `along` is the axis the line runs on.
#[derive(Debug, Clone, Copy)]
struct Span {
    across: (f64, f64),
    along: (f64, f64),
}

#[derive(Debug, Clone, Copy)]
pub struct GuideOptions {
    /// Bottom-right of the canvas; guides run from 0 to this extent.
    pub extent: Point,
    /// Guides must be strictly longer than this.
    pub min_length: f64,
    pub stroke_width: f64,
}

/// Vertical guides first (by ascending x), then horizontal guides (by ascending y).
pub fn structural_guides<'a>(
    tiles: impl IntoIterator<Item = &'a Tile>,
    opts: &GuideOptions,
) -> Vec<LineSegment> {
    let tiles: Vec<&Tile> = tiles.into_iter().collect();
    let vertical: Vec<Span> = tiles
        .iter()
        .map(|t| Span {
            across: (t.raw_top_left.x, t.raw_bottom_right.x),
            along: (t.raw_top_left.y, t.raw_bottom_right.y),
        })
        .collect();
    let horizontal: Vec<Span> = tiles
        .iter()
        .map(|t| Span {
            across: (t.raw_top_left.y, t.raw_bottom_right.y),
            along: (t.raw_top_left.x, t.raw_bottom_right.x),
        })
        .collect();

    let mut out = Vec::new();
    for x in edge_positions(&vertical, opts.extent.x) {
        for (y0, y1) in gaps_at(x, &vertical, opts.extent.y) {
            if y1 - y0 > opts.min_length {
                out.push(guide(
                    Point::new(x, y0),
                    Point::new(x, y1),
                    LineDir::Down,
                    opts,
                ));
            }
        }
    }
    for y in edge_positions(&horizontal, opts.extent.y) {
        for (x0, x1) in gaps_at(y, &horizontal, opts.extent.x) {
            if x1 - x0 > opts.min_length {
                out.push(guide(
                    Point::new(x0, y),
                    Point::new(x1, y),
                    LineDir::Right,
                    opts,
                ));
            }
        }
    }
    out
}

fn guide(a: Point, b: Point, dir: LineDir, opts: &GuideOptions) -> LineSegment {
    LineSegment {
        a,
        b,
        direction: Some(dir),
        color: ColorClass::Neutral,
        stroke_width: opts.stroke_width,
        kind: SegmentKind::Guide,
    }
}

/// Distinct tile edges strictly inside the canvas, ascending.
fn edge_positions(spans: &[Span], extent: f64) -> Vec<f64> {
    let mut positions: Vec<f64> = spans
        .iter()
        .flat_map(|s| [s.across.0, s.across.1])
        .filter(|&p| p > 0.0 && p < extent)
        .collect();
    positions.sort_by(f64::total_cmp);
    positions.dedup();
    positions
}

/// Free stretches along the line at `pos`, bounded by tile edges or the canvas.
fn gaps_at(pos: f64, spans: &[Span], extent: f64) -> Vec<(f64, f64)> {
    // Tiles the line crosses or runs along.
    let mut occupied: Vec<(f64, f64)> = spans
        .iter()
        .filter(|s| {
            (s.across.0 < pos && pos < s.across.1) || s.across.0 == pos || s.across.1 == pos
        })
        .map(|s| s.along)
        .collect();
    if occupied.is_empty() {
        return Vec::new();
    }
    occupied.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut merged: Vec<(f64, f64)> = Vec::with_capacity(occupied.len());
    for (start, end) in occupied {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut gaps = Vec::new();
    let mut current = 0.0;
    for (start, end) in merged {
        if current < start && (current == 0.0 || touches_edge(pos, current, start, spans, extent)) {
            gaps.push((current, start));
        }
        current = f64::max(current, end);
    }
    if current < extent && touches_edge(pos, current, extent, spans, extent) {
        gaps.push((current, extent));
    }
    gaps
}

/// True when either end of `start..end` lies on an edge of a tile the line passes, or on the
/// canvas boundary.
fn touches_edge(pos: f64, start: f64, end: f64, spans: &[Span], extent: f64) -> bool {
    let on_edge = |v: f64| {
        spans.iter().any(|s| {
            (s.along.0 == v || s.along.1 == v) && s.across.0 <= pos && pos <= s.across.1
        })
    };
    start == 0.0 || end == extent || on_edge(start) || on_edge(end)
}
