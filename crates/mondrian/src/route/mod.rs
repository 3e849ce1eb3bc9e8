//! Orthogonal connectors between related tiles.
//!
//! A connector leaves the corner of the source tile nearest the target's center. If that corner
//! shares an x or y coordinate with the chosen target corner the connector is a single straight
//! segment; otherwise it is an L with one bend, placed on whichever side keeps it away from the
//! tile it would otherwise cut across.

pub mod placement;

use crate::context::LayoutContext;
use crate::geom::{
    ColorClass, CornerPos, LineDir, LineSegment, Point, SegmentId, SegmentKind, line_direction,
};
use crate::model::Relation;
use crate::stroke::StrokeMetrics;
use crate::tile::{Corner, Tile};
use placement::{Leg, place, placement};
use tracing::{debug, trace};

/// Corner scan order used when ties are broken by first occurrence.
const CLOSEST_ORDER: [CornerPos; 4] = [
    CornerPos::TopLeft,
    CornerPos::TopRight,
    CornerPos::BottomRight,
    CornerPos::BottomLeft,
];

/// Corner of `a` with the smallest Manhattan distance to `b`'s center. Ties keep the first corner
/// in clockwise order from the top-left.
pub fn closest_corner(a: &Tile, b: &Tile) -> CornerPos {
    let mut best = CLOSEST_ORDER[0];
    let mut best_d = f64::INFINITY;
    for pos in CLOSEST_ORDER {
        let d = a.corner(pos).point.manhattan(b.center);
        if d < best_d {
            best_d = d;
            best = pos;
        }
    }
    best
}

/// Corner of `b` lying diagonally outside `a` (outside both its x-range and y-range) that is
/// nearest to `a`'s center, if any.
pub fn far_corner(a: &Tile, b: &Tile) -> Option<CornerPos> {
    let mut best = None;
    let mut best_d = f64::INFINITY;
    for pos in CornerPos::ALL {
        let pt = b.corner(pos).point;
        if !a.is_diagonal_to(pt) {
            continue;
        }
        let d = a.center.euclidean(pt);
        if d < best_d {
            best_d = d;
            best = Some(pos);
        }
    }
    best
}

/// Bend point of the L through `cp1` and `cp2` that lies further from `center`.
pub fn furthest_connector(cp1: Point, cp2: Point, center: Point) -> Point {
    let p = Point::new(cp1.x, cp2.y);
    let q = Point::new(cp2.x, cp1.y);
    if p.euclidean(center) > q.euclidean(center) {
        p
    } else {
        q
    }
}

/// Connectors are emphasized only between tiles regulated in the same direction.
pub fn connector_color(a: &Tile, b: &Tile) -> ColorClass {
    match (a.color, b.color) {
        (ColorClass::Up, ColorClass::Up) => ColorClass::Up,
        (ColorClass::Down, ColorClass::Down) => ColorClass::Down,
        _ => ColorClass::Moderate,
    }
}

/// Segments of one connector.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Straight(LineSegment),
    Bent(LineSegment, LineSegment),
}

impl Route {
    pub fn segments(&self) -> Vec<&LineSegment> {
        match self {
            Route::Straight(s) => vec![s],
            Route::Bent(a, b) => vec![a, b],
        }
    }
}

/// Corner choice and bend point for a pair of tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPair {
    pub from: CornerPos,
    pub to: CornerPos,
    pub connector: Point,
    /// True when no corner of the target lay diagonally outside the source.
    pub fallback: bool,
}

pub fn choose_corners(a: &Tile, b: &Tile) -> CornerPair {
    let from = closest_corner(a, b);
    let cp1 = a.corner(from).point;
    match far_corner(a, b) {
        Some(to) => CornerPair {
            from,
            to,
            connector: furthest_connector(cp1, b.corner(to).point, b.center),
            fallback: false,
        },
        None => {
            let to = closest_corner(b, a);
            CornerPair {
                from,
                to,
                connector: furthest_connector(cp1, b.corner(to).point, a.center),
                fallback: true,
            }
        }
    }
}

/// Builds the segments linking `from` to `to`, bending at `connector` when the corners are not
/// aligned on either axis.
pub fn route_corners(
    from: &Corner,
    to: &Corner,
    connector: Point,
    color: ColorClass,
    stroke: &StrokeMetrics,
) -> Route {
    let (a, b) = (from.point, to.point);
    let segment = |a: Point, b: Point, direction: Option<LineDir>| LineSegment {
        a,
        b,
        direction,
        color,
        stroke_width: stroke.width,
        kind: SegmentKind::Connector,
    };

    if a.x == b.x && a.y != b.y {
        let dx = if from.position.is_left() {
            stroke.half
        } else {
            -stroke.half
        };
        return Route::Straight(segment(
            a.offset(dx, 0.0),
            b.offset(dx, 0.0),
            line_direction(a, b, stroke.half),
        ));
    }

    if a.y == b.y && a.x != b.x {
        let dy = if from.position.is_top() {
            stroke.half
        } else {
            -stroke.half
        };
        // The source corner's own boundary stroke already reaches past the corner.
        let lead = if from.position.is_left() {
            -stroke.trim()
        } else {
            stroke.trim()
        };
        return Route::Straight(segment(
            a.offset(lead, dy),
            b.offset(0.0, dy),
            line_direction(a, b, stroke.half),
        ));
    }

    let leg = |start: Point, end: Point, corner: CornerPos, role: Leg| {
        let dir = line_direction(start, end, stroke.half);
        match dir {
            Some(d) => {
                let (s, e) = place(start, end, d, placement(corner, d, role), stroke);
                segment(s, e, dir)
            }
            None => segment(start, end, None),
        }
    };

    Route::Bent(
        leg(a, connector, from.position, Leg::Outbound),
        leg(connector, b, to.position, Leg::Inbound),
    )
}

/// Routes one relation, appending its segments to `ctx` and recording the corner back-references.
///
/// Returns `None` when either id is not a tile of this context, or for a self pair.
pub fn route_relation(ctx: &mut LayoutContext, id_a: &str, id_b: &str) -> Option<Vec<SegmentId>> {
    if id_a == id_b {
        return None;
    }
    let (pair, route) = {
        let a = ctx.tile(id_a)?;
        let b = ctx.tile(id_b)?;
        let pair = choose_corners(a, b);
        if pair.fallback {
            trace!(a = id_a, b = id_b, "no diagonal target corner; using fallback scan");
        }
        let route = route_corners(
            a.corner(pair.from),
            b.corner(pair.to),
            pair.connector,
            connector_color(a, b),
            &ctx.stroke,
        );
        (pair, route)
    };

    let (ids, first, last) = match route {
        Route::Straight(seg) => {
            let id = ctx.push_segment(seg);
            (vec![id], id, id)
        }
        Route::Bent(out, back) => {
            let first = ctx.push_segment(out);
            let last = ctx.push_segment(back);
            (vec![first, last], first, last)
        }
    };
    if let Some(t) = ctx.tile_mut(id_a) {
        t.corner_mut(pair.from).owning_line = Some(first);
    }
    if let Some(t) = ctx.tile_mut(id_b) {
        t.corner_mut(pair.to).owning_line = Some(last);
    }
    Some(ids)
}

/// Routes `relations` in order, skipping self pairs and those naming unknown tiles.
pub fn route_all(ctx: &mut LayoutContext, relations: &[Relation]) -> Vec<SegmentId> {
    let mut out = Vec::new();
    for rel in relations {
        match route_relation(ctx, &rel.id_a, &rel.id_b) {
            Some(ids) => out.extend(ids),
            None => trace!(a = %rel.id_a, b = %rel.id_b, "relation not routed"),
        }
    }
    debug!(
        relations = relations.len(),
        segments = out.len(),
        "connectors routed"
    );
    out
}
