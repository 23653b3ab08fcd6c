use serde::Serialize;

use crate::error::{GraphError, GraphResult};
use crate::render::Renderer;

use super::{GraphEngine, GraphEngineConfig, SeriesStyle};

/// Serializable snapshot of engine configuration and series inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    pub config: GraphEngineConfig,
    pub series: Vec<SeriesSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSnapshot {
    pub id: String,
    pub point_count: usize,
    pub style: SeriesStyle,
}

impl<R: Renderer> GraphEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: GraphEngineConfig {
                viewport: self.viewport,
                x_min: self.x_range.min(),
                x_diff: self.x_range.diff(),
                y_min: self.y_range.min(),
                y_diff: self.y_range.diff(),
                clip_to_x_range: self.clip_to_x_range,
            },
            series: self
                .series
                .iter()
                .map(|(id, series)| SeriesSnapshot {
                    id: id.clone(),
                    point_count: series.points.len(),
                    style: series.style,
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON snapshot for host-side diagnostics.
    pub fn snapshot_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|err| GraphError::InvalidData(format!("failed to serialize snapshot: {err}")))
    }
}
