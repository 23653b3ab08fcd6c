use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, ValueRange, Viewport};
use crate::error::{GraphError, GraphResult};

/// Series length at which the parallel projection path takes over.
#[cfg(feature = "parallel-projection")]
const PARALLEL_PROJECTION_THRESHOLD: usize = 2048;

/// Projected screen position of one data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesAnchor {
    pub x: f64,
    pub y: f64,
}

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects each data point to its screen anchor, one anchor per point.
///
/// A single-point series is centered horizontally instead of being projected
/// by its own x value; its vertical position still follows the normalized y.
/// The function is deterministic and side-effect free so rendering and tests
/// consume the exact same geometry output.
pub fn project_series_anchors(
    points: &[DataPoint],
    x_range: ValueRange,
    y_range: ValueRange,
    viewport: Viewport,
) -> GraphResult<Vec<SeriesAnchor>> {
    if !viewport.is_valid() {
        return Err(GraphError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    if let [point] = points {
        // A lone point has no horizontal extent; its x value is ignored.
        return Ok(vec![SeriesAnchor {
            x: viewport.center_x(),
            y: viewport.y_at(y_range.ratio(point.y)?),
        }]);
    }

    project_all(points, x_range, y_range, viewport)
}

/// Pairs consecutive anchors into line segments.
///
/// Fewer than two anchors produce no segments.
#[must_use]
pub fn segments_between(anchors: &[SeriesAnchor]) -> Vec<LineSegment> {
    if anchors.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(anchors.len() - 1);
    for pair in anchors.windows(2) {
        segments.push(LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        });
    }
    segments
}

/// Projects points straight into adjacent line segments.
pub fn project_line_segments(
    points: &[DataPoint],
    x_range: ValueRange,
    y_range: ValueRange,
    viewport: Viewport,
) -> GraphResult<Vec<LineSegment>> {
    let anchors = project_series_anchors(points, x_range, y_range, viewport)?;
    Ok(segments_between(&anchors))
}

fn project_one(
    point: DataPoint,
    x_range: ValueRange,
    y_range: ValueRange,
    viewport: Viewport,
) -> GraphResult<SeriesAnchor> {
    Ok(SeriesAnchor {
        x: viewport.x_at(x_range.ratio(point.x)?),
        y: viewport.y_at(y_range.ratio(point.y)?),
    })
}

#[cfg(not(feature = "parallel-projection"))]
fn project_all(
    points: &[DataPoint],
    x_range: ValueRange,
    y_range: ValueRange,
    viewport: Viewport,
) -> GraphResult<Vec<SeriesAnchor>> {
    let mut anchors = Vec::with_capacity(points.len());
    for point in points {
        anchors.push(project_one(*point, x_range, y_range, viewport)?);
    }
    Ok(anchors)
}

#[cfg(feature = "parallel-projection")]
fn project_all(
    points: &[DataPoint],
    x_range: ValueRange,
    y_range: ValueRange,
    viewport: Viewport,
) -> GraphResult<Vec<SeriesAnchor>> {
    use rayon::prelude::*;

    if points.len() < PARALLEL_PROJECTION_THRESHOLD {
        let mut anchors = Vec::with_capacity(points.len());
        for point in points {
            anchors.push(project_one(*point, x_range, y_range, viewport)?);
        }
        return Ok(anchors);
    }

    points
        .par_iter()
        .map(|point| project_one(*point, x_range, y_range, viewport))
        .collect()
}
