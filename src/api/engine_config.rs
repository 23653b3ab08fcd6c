use serde::{Deserialize, Serialize};

use crate::core::{ValueRange, Viewport};
use crate::error::GraphResult;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load graph
/// setup without inventing their own ad-hoc format. Ranges are expressed as
/// raw min/diff pairs and validated into `ValueRange` at engine
/// construction, so a zero-span range is rejected before any draw command
/// is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphEngineConfig {
    pub viewport: Viewport,
    pub x_min: f64,
    pub x_diff: f64,
    pub y_min: f64,
    pub y_diff: f64,
    #[serde(default)]
    pub clip_to_x_range: bool,
}

impl GraphEngineConfig {
    /// Creates a minimal config with unit value ranges.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            x_min: 0.0,
            x_diff: 1.0,
            y_min: 0.0,
            y_diff: 1.0,
            clip_to_x_range: false,
        }
    }

    #[must_use]
    pub fn with_x_range(mut self, x_min: f64, x_diff: f64) -> Self {
        self.x_min = x_min;
        self.x_diff = x_diff;
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, y_min: f64, y_diff: f64) -> Self {
        self.y_min = y_min;
        self.y_diff = y_diff;
        self
    }

    /// Restricts drawing to points inside the configured x range.
    #[must_use]
    pub fn with_clip_to_x_range(mut self, clip_to_x_range: bool) -> Self {
        self.clip_to_x_range = clip_to_x_range;
        self
    }

    pub(super) fn x_range(self) -> GraphResult<ValueRange> {
        ValueRange::new(self.x_min, self.x_diff)
    }

    pub(super) fn y_range(self) -> GraphResult<ValueRange> {
        ValueRange::new(self.y_min, self.y_diff)
    }
}
