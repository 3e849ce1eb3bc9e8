#![forbid(unsafe_code)]

//! Grid-packed tile maps with orthogonal connectors.
//!
//! Weighted, positioned entities become non-overlapping axis-aligned tiles on a fixed cell grid,
//! related tiles are linked by one- or two-segment orthogonal connectors, and background guide
//! lines are laid along tile edges. The output is plain geometry for an external renderer.
//!
//! Every build runs inside its own [`LayoutContext`]; [`layout`] creates one, fills it and
//! returns the flattened result.

pub mod config;
pub mod context;
pub mod error;
pub mod geom;
pub mod grid;
pub mod guides;
pub mod model;
pub mod relations;
pub mod route;
pub mod stroke;
pub mod tile;

pub use config::CanvasConfig;
pub use context::LayoutContext;
pub use error::{Error, Result};
pub use geom::{ColorClass, CornerPos, LineDir, LineSegment, Point, SegmentId, SegmentKind};
pub use grid::{Footprint, GridSystem};
pub use model::{Entity, MondrianLayout, Relation, SegmentLayout, TileLayout};
pub use stroke::StrokeMetrics;
pub use tile::{Corner, Tile};

use rustc_hash::FxHashSet;
use tracing::debug;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lays out `entities` and routes `relations` between them.
///
/// Relations naming unknown ids are dropped; the rest go through bounded-degree selection in
/// input order before routing.
pub fn layout(
    entities: &[Entity],
    relations: &[Relation],
    config: &CanvasConfig,
) -> Result<MondrianLayout> {
    config.validate()?;

    let mut ctx = LayoutContext::new(config);
    let area_error = place_tiles(&mut ctx, entities, config)?;

    let known: Vec<Relation> = relations
        .iter()
        .filter(|r| ctx.tile(&r.id_a).is_some() && ctx.tile(&r.id_b).is_some())
        .cloned()
        .collect();
    let selected = relations::select_relations(&known, config.degree_cap);
    route::route_all(&mut ctx, &selected);

    let grid = GridSystem::from_config(config);
    let guides = guides::structural_guides(
        ctx.tiles(),
        &guides::GuideOptions {
            extent: grid.extent(),
            min_length: config.min_guide_length,
            stroke_width: config.thin_stroke_width,
        },
    );
    let guide_count = guides.len();
    for g in guides {
        ctx.push_segment(g);
    }

    debug!(
        tiles = ctx.tile_count(),
        relations = relations.len(),
        selected = selected.len(),
        guides = guide_count,
        area_error,
        "layout built"
    );

    let (tiles, segments) = ctx.into_parts();
    Ok(MondrianLayout {
        tiles: tiles.iter().map(TileLayout::from).collect(),
        segments: segments.iter().map(SegmentLayout::from).collect(),
        area_error,
    })
}

/// Places tiles for `entities` into `ctx` by descending target area, after emitting the canvas
/// frame. Returns the summed area error.
///
/// Entities are validated against each other and against tiles already in `ctx` before anything
/// is added, so an error or an empty entity set leaves `ctx` untouched.
pub fn place_tiles(
    ctx: &mut LayoutContext,
    entities: &[Entity],
    config: &CanvasConfig,
) -> Result<f64> {
    validate_entities(entities)?;
    if let Some(e) = entities.iter().find(|e| ctx.tile(&e.id).is_some()) {
        return Err(Error::DuplicateEntity { id: e.id.clone() });
    }
    if entities.is_empty() {
        return Ok(0.0);
    }
    let mut order: Vec<(usize, f64)> = entities
        .iter()
        .enumerate()
        .map(|(i, e)| (i, e.weight * config.area_scale))
        .collect();
    // Stable: equal areas keep input order.
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    let grid = GridSystem::from_config(config);
    let points: Vec<Point> = order.iter().map(|&(i, _)| entities[i].center()).collect();
    let areas: Vec<f64> = order.iter().map(|&(_, area)| area).collect();
    let (footprints, area_error) = grid.fill_footprints(&points, &areas);

    ctx.push_frame(grid.extent());
    for (&(i, area), fp) in order.iter().zip(&footprints) {
        let e = &entities[i];
        ctx.new_tile(fp.top_left, fp.bottom_right, area, e.color_class, e.id.clone())?;
    }
    Ok(area_error)
}

/// JSON convenience over [`layout`]: `entities` and `relations` are JSON arrays of records.
pub fn layout_json(entities: &str, relations: &str, config: &CanvasConfig) -> Result<String> {
    let entities: Vec<Entity> = serde_json::from_str(entities)?;
    let relations: Vec<Relation> = serde_json::from_str(relations)?;
    let out = layout(&entities, &relations, config)?;
    Ok(serde_json::to_string(&out)?)
}

fn validate_entities(entities: &[Entity]) -> Result<()> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for e in entities {
        if !seen.insert(e.id.as_str()) {
            return Err(Error::DuplicateEntity { id: e.id.clone() });
        }
        if !e.x.is_finite() || !e.y.is_finite() {
            return Err(Error::InvalidEntity {
                id: e.id.clone(),
                message: format!("center ({}, {}) is not finite", e.x, e.y),
            });
        }
        if !e.weight.is_finite() || e.weight < 0.0 {
            return Err(Error::InvalidEntity {
                id: e.id.clone(),
                message: format!("weight {} must be finite and non-negative", e.weight),
            });
        }
    }
    Ok(())
}
