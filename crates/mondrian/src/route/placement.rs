//! Stroke offsets for connector legs.
//!
//! Every leg of a connector is nudged so its stroke stays outside the tile body it touches and
//! does not overdraw a boundary stroke at the joint. The nudge depends only on the corner the leg
//! touches, the leg's travel direction, and whether the leg leaves the corner or arrives at it.

use crate::geom::{CornerPos, LineDir, Point};
use crate::stroke::StrokeMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leg {
    /// Corner to bend point.
    Outbound,
    /// Bend point to corner.
    Inbound,
}

/// Offset expressed in stroke units, resolved against [`StrokeMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nudge {
    halves: i8,
    trims: i8,
}

impl Nudge {
    pub const ZERO: Nudge = Nudge::new(0, 0);

    pub const fn new(halves: i8, trims: i8) -> Self {
        Self { halves, trims }
    }

    pub fn resolve(self, stroke: &StrokeMetrics) -> f64 {
        f64::from(self.halves) * stroke.half + f64::from(self.trims) * stroke.trim()
    }
}

const HALF: Nudge = Nudge::new(1, 0);
const NEG_HALF: Nudge = Nudge::new(-1, 0);
const TRIM: Nudge = Nudge::new(0, 1);
const NEG_TRIM: Nudge = Nudge::new(0, -1);
const BACK_OVER: Nudge = Nudge::new(-2, 0);

/// `normal` shifts both endpoints across the travel axis (+x or +y); `lead` and `tail` shift the
/// start and end points along the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub normal: Nudge,
    pub lead: Nudge,
    pub tail: Nudge,
}

const fn p(normal: Nudge, lead: Nudge, tail: Nudge) -> Placement {
    Placement { normal, lead, tail }
}

const Z: Nudge = Nudge::ZERO;

// Shift across the travel axis only.
const SHIFT_POS: Placement = p(HALF, Z, Z);
const SHIFT_NEG: Placement = p(NEG_HALF, Z, Z);
// Leaving a corner away from the tile: start past the boundary stroke.
const LEAVE_POS: Placement = p(HALF, TRIM, Z);
const LEAVE_NEG: Placement = p(NEG_HALF, TRIM, Z);
// Entering a corner: start back over the bend joint, stop short of the boundary stroke.
const ENTER_POS: Placement = p(HALF, BACK_OVER, NEG_TRIM);
const ENTER_NEG: Placement = p(NEG_HALF, BACK_OVER, NEG_TRIM);

// Rows: TopLeft, TopRight, BottomLeft, BottomRight. Columns: Right, Left, Down, Up.
const OUTBOUND: [[Placement; 4]; 4] = [
    [SHIFT_POS, LEAVE_POS, SHIFT_POS, LEAVE_POS],
    [LEAVE_POS, SHIFT_POS, SHIFT_NEG, LEAVE_NEG],
    [SHIFT_NEG, LEAVE_NEG, LEAVE_POS, SHIFT_POS],
    [LEAVE_NEG, SHIFT_NEG, LEAVE_NEG, SHIFT_NEG],
];

const INBOUND: [[Placement; 4]; 4] = [
    [ENTER_POS, SHIFT_POS, ENTER_POS, SHIFT_POS],
    [SHIFT_POS, ENTER_POS, ENTER_NEG, SHIFT_NEG],
    [ENTER_NEG, SHIFT_NEG, SHIFT_POS, ENTER_POS],
    [SHIFT_NEG, ENTER_NEG, SHIFT_NEG, ENTER_NEG],
];

pub fn placement(corner: CornerPos, dir: LineDir, leg: Leg) -> Placement {
    let table = match leg {
        Leg::Outbound => &OUTBOUND,
        Leg::Inbound => &INBOUND,
    };
    table[corner.index()][dir.index()]
}

/// Applies `placement` to the leg `start -> end` travelling in `dir`.
pub fn place(
    start: Point,
    end: Point,
    dir: LineDir,
    placement: Placement,
    stroke: &StrokeMetrics,
) -> (Point, Point) {
    let (ux, uy) = dir.unit();
    let n = placement.normal.resolve(stroke);
    let (nx, ny) = if dir.is_horizontal() { (0.0, n) } else { (n, 0.0) };
    let lead = placement.lead.resolve(stroke);
    let tail = placement.tail.resolve(stroke);
    (
        start.offset(nx + ux * lead, ny + uy * lead),
        end.offset(nx + ux * tail, ny + uy * tail),
    )
}
