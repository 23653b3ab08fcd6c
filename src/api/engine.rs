use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{DataPoint, ValueRange, Viewport, points_in_window};
use crate::error::{GraphError, GraphResult};
use crate::render::{RenderFrame, Renderer};

use super::series_frame_builder::append_series_primitives;
use super::{GraphEngineConfig, LineSeries};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `GraphEngine` coordinates the viewport, both value ranges, the ordered
/// series registry, and renderer calls. Registry insertion order is draw
/// order.
pub struct GraphEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) x_range: ValueRange,
    pub(super) y_range: ValueRange,
    pub(super) clip_to_x_range: bool,
    pub(super) series: IndexMap<String, LineSeries>,
}

impl<R: Renderer> GraphEngine<R> {
    pub fn new(renderer: R, config: GraphEngineConfig) -> GraphResult<Self> {
        if !config.viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        let x_range = config.x_range()?;
        let y_range = config.y_range()?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            x_range,
            y_range,
            clip_to_x_range: config.clip_to_x_range,
            series: IndexMap::new(),
        })
    }

    /// Inserts or replaces a named series after validating its style.
    pub fn insert_series(&mut self, id: impl Into<String>, series: LineSeries) -> GraphResult<()> {
        let id = id.into();
        let style = series.style.validate()?;
        debug!(series = id.as_str(), points = series.points.len(), "series inserted");
        self.series.insert(
            id,
            LineSeries {
                points: series.points,
                style,
            },
        );
        Ok(())
    }

    pub fn remove_series(&mut self, id: &str) -> Option<LineSeries> {
        self.series.shift_remove(id)
    }

    /// Appends one point to an existing series.
    pub fn append_point(&mut self, id: &str, point: DataPoint) -> GraphResult<()> {
        let Some(series) = self.series.get_mut(id) else {
            return Err(GraphError::InvalidData(format!("unknown series `{id}`")));
        };
        series.points.push(point);
        Ok(())
    }

    #[must_use]
    pub fn series(&self, id: &str) -> Option<&LineSeries> {
        self.series.get(id)
    }

    pub fn series_ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> GraphResult<()> {
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn x_range(&self) -> ValueRange {
        self.x_range
    }

    #[must_use]
    pub fn y_range(&self) -> ValueRange {
        self.y_range
    }

    pub fn set_x_range(&mut self, min: f64, diff: f64) -> GraphResult<()> {
        self.x_range = ValueRange::new(min, diff)?;
        Ok(())
    }

    pub fn set_y_range(&mut self, min: f64, diff: f64) -> GraphResult<()> {
        self.y_range = ValueRange::new(min, diff)?;
        Ok(())
    }

    /// Refits both ranges from all series data. A no-op when no series holds
    /// any points.
    pub fn autoscale_from_data(&mut self) -> GraphResult<()> {
        let points: Vec<DataPoint> = self
            .series
            .values()
            .flat_map(|series| series.points.iter().copied())
            .collect();
        if points.is_empty() {
            return Ok(());
        }

        self.x_range = ValueRange::from_data_x(&points)?;
        self.y_range = ValueRange::from_data_y(&points)?;
        Ok(())
    }

    /// Builds the frame for the current state without touching the renderer.
    ///
    /// Pure with respect to engine state; two calls with identical state
    /// produce identical frames.
    pub fn build_frame(&self) -> GraphResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);

        for (id, series) in &self.series {
            let clipped;
            let points: &[DataPoint] = if self.clip_to_x_range {
                let (start, end) = self.x_range.bounds();
                clipped = points_in_window(&series.points, start, end);
                &clipped
            } else {
                &series.points
            };

            trace!(series = id.as_str(), points = points.len(), "projecting series");
            append_series_primitives(
                &mut frame,
                points,
                series.style,
                self.x_range,
                self.y_range,
                self.viewport,
            )?;
        }

        debug!(
            series = self.series.len(),
            polygons = frame.polygons.len(),
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            "frame built"
        );
        Ok(frame)
    }

    pub fn render(&mut self) -> GraphResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by widget draw callbacks while keeping the renderer
    /// implementation decoupled from any toolkit APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> GraphResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
