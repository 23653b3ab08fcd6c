use serde::{Deserialize, Serialize};

use crate::core::line_series::{SeriesAnchor, project_series_anchors};
use crate::core::{DataPoint, ValueRange, Viewport};
use crate::error::GraphResult;

/// Vertex of the background fill polygon in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillVertex {
    pub x: f64,
    pub y: f64,
}

/// Builds the closed background polygon under already-projected anchors.
///
/// The polygon follows the anchors first-to-last, drops to the plot bottom
/// under the last anchor, runs back under the first anchor, then explicitly
/// repeats the first anchor so consumers can render a closed polygon without
/// implicit closure rules. Fewer than two anchors produce no polygon: a path
/// needs at least two line vertices to bound an area.
#[must_use]
pub fn fill_polygon_under(anchors: &[SeriesAnchor], viewport: Viewport) -> Vec<FillVertex> {
    if anchors.len() < 2 {
        return Vec::new();
    }

    let first = anchors[0];
    let last = anchors[anchors.len() - 1];
    let bottom = viewport.bottom();
    let mut polygon = Vec::with_capacity(anchors.len() + 3);
    polygon.extend(
        anchors
            .iter()
            .map(|anchor| FillVertex { x: anchor.x, y: anchor.y }),
    );
    polygon.push(FillVertex { x: last.x, y: bottom });
    polygon.push(FillVertex { x: first.x, y: bottom });
    polygon.push(FillVertex { x: first.x, y: first.y });
    polygon
}

/// Projects points into the closed background polygon.
pub fn project_fill_polygon(
    points: &[DataPoint],
    x_range: ValueRange,
    y_range: ValueRange,
    viewport: Viewport,
) -> GraphResult<Vec<FillVertex>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let anchors = project_series_anchors(points, x_range, y_range, viewport)?;
    Ok(fill_polygon_under(&anchors, viewport))
}
