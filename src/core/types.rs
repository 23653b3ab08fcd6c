use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Pixel-space plot rectangle plus the offsets applied to every projected
/// point.
///
/// All fields are screen-space pixel measurements, already scaled for display
/// density by the caller. `extra_margin` reserves room so marker glyphs are
/// not clipped at the plot edges; half of it is added to every projected x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub border: f64,
    #[serde(default)]
    pub horstart: f64,
    #[serde(default)]
    pub extra_margin: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            border: 0.0,
            horstart: 0.0,
            extra_margin: 0.0,
        }
    }

    #[must_use]
    pub fn with_border(mut self, border: f64) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn with_horstart(mut self, horstart: f64) -> Self {
        self.horstart = horstart;
        self
    }

    #[must_use]
    pub fn with_extra_margin(mut self, extra_margin: f64) -> Self {
        self.extra_margin = extra_margin;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.border.is_finite()
            && self.horstart.is_finite()
            && self.extra_margin.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.border >= 0.0
            && self.extra_margin >= 0.0
    }

    /// Maps a normalized [0, 1] x ratio to pixel x.
    ///
    /// The trailing `+ 1` and the half extra margin keep edge markers inside
    /// the plot rectangle.
    #[must_use]
    pub fn x_at(self, rat_x: f64) -> f64 {
        self.width * rat_x + self.extra_margin * 0.5 + self.horstart + 1.0
    }

    /// Maps a normalized [0, 1] y ratio to pixel y.
    ///
    /// Larger ratios land higher on screen (smaller pixel y).
    #[must_use]
    pub fn y_at(self, rat_y: f64) -> f64 {
        (self.border - self.height * rat_y) + self.height
    }

    /// Pixel x used for a single-point series, centered horizontally.
    #[must_use]
    pub fn center_x(self) -> f64 {
        self.width * 0.5 + self.extra_margin * 0.5 + self.horstart + 1.0
    }

    /// Pixel y of the plot bottom edge, the fill-polygon baseline.
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.height + self.border
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from a timestamped decimal sample.
    ///
    /// The x coordinate becomes unix seconds with millisecond resolution.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> GraphResult<Self> {
        let y = value.to_f64().ok_or_else(|| {
            GraphError::InvalidData("sample value cannot be represented as f64".to_owned())
        })?;
        Ok(Self {
            x: time.timestamp_millis() as f64 / 1000.0,
            y,
        })
    }
}
