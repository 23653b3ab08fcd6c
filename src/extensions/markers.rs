use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::SeriesAnchor;
use crate::error::{GraphError, GraphResult};
use crate::render::{CirclePrimitive, Color};

/// Three-ring marker glyph style.
///
/// Radii are resolved pixel values at the caller's display density; the
/// defaults are the baseline-density sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub outer_radius_px: f64,
    pub core_radius_px: f64,
    pub inner_radius_px: f64,
    pub ring_color: Color,
    pub core_color: Color,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            outer_radius_px: 9.0,
            core_radius_px: 7.0,
            inner_radius_px: 3.0,
            ring_color: Color::rgb(1.0, 1.0, 1.0),
            core_color: Color::rgb(79.0 / 255.0, 223.0 / 255.0, 190.0 / 255.0),
        }
    }
}

impl MarkerStyle {
    pub fn validate(self) -> GraphResult<Self> {
        for (value, name) in [
            (self.outer_radius_px, "outer_radius_px"),
            (self.core_radius_px, "core_radius_px"),
            (self.inner_radius_px, "inner_radius_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "marker radius `{name}` must be finite and > 0"
                )));
            }
        }

        if self.outer_radius_px <= self.core_radius_px
            || self.core_radius_px <= self.inner_radius_px
        {
            return Err(GraphError::InvalidData(
                "marker radii must strictly decrease from outer to inner".to_owned(),
            ));
        }

        self.ring_color.validate()?;
        self.core_color.validate()?;
        Ok(self)
    }

    /// Scales all three radii by a display-density factor.
    pub fn scaled_by(self, density_factor: f64) -> GraphResult<Self> {
        if !density_factor.is_finite() || density_factor <= 0.0 {
            return Err(GraphError::InvalidData(
                "density factor must be finite and > 0".to_owned(),
            ));
        }

        Self {
            outer_radius_px: self.outer_radius_px * density_factor,
            core_radius_px: self.core_radius_px * density_factor,
            inner_radius_px: self.inner_radius_px * density_factor,
            ..self
        }
        .validate()
    }
}

/// Builds the three concentric circle primitives for one marker glyph.
///
/// Paint order: outer ring, colored core, inner dot.
#[must_use]
pub fn marker_rings(anchor: SeriesAnchor, style: MarkerStyle) -> SmallVec<[CirclePrimitive; 3]> {
    smallvec![
        CirclePrimitive::new(anchor.x, anchor.y, style.outer_radius_px, style.ring_color),
        CirclePrimitive::new(anchor.x, anchor.y, style.core_radius_px, style.core_color),
        CirclePrimitive::new(anchor.x, anchor.y, style.inner_radius_px, style.ring_color),
    ]
}
