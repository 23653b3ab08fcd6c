use crate::core::{
    DataPoint, ValueRange, Viewport, fill_polygon_under, project_series_anchors, segments_between,
};
use crate::error::GraphResult;
use crate::extensions::marker_rings;
use crate::render::{LinePrimitive, PolygonPrimitive, RenderFrame};

use super::SeriesStyle;

/// Appends one series' primitives to the frame.
///
/// Paint order within a series: background fill, then line segments, then
/// marker glyphs. Anchors are projected once and shared by all three passes
/// so every point receives exactly one marker glyph regardless of how the
/// segments are iterated.
pub(super) fn append_series_primitives(
    frame: &mut RenderFrame,
    points: &[DataPoint],
    style: SeriesStyle,
    x_range: ValueRange,
    y_range: ValueRange,
    viewport: Viewport,
) -> GraphResult<()> {
    if points.is_empty() {
        return Ok(());
    }

    let anchors = project_series_anchors(points, x_range, y_range, viewport)?;

    if style.draw_background {
        let vertices = fill_polygon_under(&anchors, viewport);
        if !vertices.is_empty() {
            frame.polygons.push(PolygonPrimitive::new(
                vertices.into_iter().map(|vertex| (vertex.x, vertex.y)).collect(),
                style.background_color,
            ));
        }
    }

    for segment in segments_between(&anchors) {
        frame.lines.push(LinePrimitive::new(
            segment.x1,
            segment.y1,
            segment.x2,
            segment.y2,
            style.stroke_width,
            style.stroke_color,
        ));
    }

    if style.draw_markers {
        for anchor in &anchors {
            frame.circles.extend(marker_rings(*anchor, style.marker));
        }
    }

    Ok(())
}
