use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CANVAS_SIZE: f64 = 1001.0;
pub const DEFAULT_CELL_SIZE: f64 = 20.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;
pub const DEFAULT_THIN_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_DEGREE_CAP: usize = 2;
pub const DEFAULT_MIN_GUIDE_LENGTH: f64 = 40.0;
pub const DEFAULT_AREA_SCALE: f64 = 4000.0;

/// Canvas and stroke parameters for one layout build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    /// Stroke of tile boundaries and connectors.
    pub stroke_width: f64,
    /// Stroke of guide and frame lines.
    pub thin_stroke_width: f64,
    /// Maximum number of connectors per tile.
    pub degree_cap: usize,
    /// Guide segments must be strictly longer than this.
    pub min_guide_length: f64,
    /// Multiplier turning an entity weight into a target area.
    pub area_scale: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            cell_width: DEFAULT_CELL_SIZE,
            cell_height: DEFAULT_CELL_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            thin_stroke_width: DEFAULT_THIN_STROKE_WIDTH,
            degree_cap: DEFAULT_DEGREE_CAP,
            min_guide_length: DEFAULT_MIN_GUIDE_LENGTH,
            area_scale: DEFAULT_AREA_SCALE,
        }
    }
}

fn json_f64(v: &Value) -> Option<f64> {
    v.as_f64()
        .or_else(|| v.as_i64().map(|n| n as f64))
        .or_else(|| v.as_u64().map(|n| n as f64))
}

fn config_f64(cfg: &Value, path: &[&str]) -> Option<f64> {
    let mut cur = cfg;
    for key in path {
        cur = cur.get(*key)?;
    }
    json_f64(cur)
}

fn config_usize(cfg: &Value, path: &[&str]) -> Option<usize> {
    let mut cur = cfg;
    for key in path {
        cur = cur.get(*key)?;
    }
    cur.as_u64().and_then(|n| usize::try_from(n).ok())
}

impl CanvasConfig {
    /// Reads overrides from an effective-config object.
    ///
    /// Keys may sit at the top level or under a `"mondrian"` section; the section wins. Missing or
    /// mistyped keys keep their defaults.
    pub fn from_value(cfg: &Value) -> Self {
        let d = Self::default();
        let f = |key: &str, default: f64| {
            config_f64(cfg, &["mondrian", key])
                .or_else(|| config_f64(cfg, &[key]))
                .unwrap_or(default)
        };
        let degree_cap = config_usize(cfg, &["mondrian", "degreeCap"])
            .or_else(|| config_usize(cfg, &["degreeCap"]))
            .unwrap_or(d.degree_cap);

        Self {
            canvas_width: f("canvasWidth", d.canvas_width),
            canvas_height: f("canvasHeight", d.canvas_height),
            cell_width: f("cellWidth", d.cell_width),
            cell_height: f("cellHeight", d.cell_height),
            stroke_width: f("strokeWidth", d.stroke_width),
            thin_stroke_width: f("thinStrokeWidth", d.thin_stroke_width),
            degree_cap,
            min_guide_length: f("minGuideLength", d.min_guide_length),
            area_scale: f("areaScale", d.area_scale),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("canvasWidth", self.canvas_width),
            ("canvasHeight", self.canvas_height),
            ("cellWidth", self.cell_width),
            ("cellHeight", self.cell_height),
            ("strokeWidth", self.stroke_width),
            ("thinStrokeWidth", self.thin_stroke_width),
            ("minGuideLength", self.min_guide_length),
            ("areaScale", self.area_scale),
        ];
        for (name, v) in finite {
            if !v.is_finite() || v < 0.0 {
                return Err(invalid(format!("{name} must be finite and non-negative, got {v}")));
            }
        }
        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return Err(invalid(format!(
                "cell size must be positive, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        if self.stroke_width <= 0.0 {
            return Err(invalid("strokeWidth must be positive".to_string()));
        }
        // Cell 0 is reserved, so at least one usable cell must remain on each axis.
        if self.canvas_width < 2.0 * self.cell_width || self.canvas_height < 2.0 * self.cell_height
        {
            return Err(invalid(format!(
                "canvas {}x{} must span at least two cells of {}x{}",
                self.canvas_width, self.canvas_height, self.cell_width, self.cell_height
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig { message }
}
