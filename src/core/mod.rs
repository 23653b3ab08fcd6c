pub mod area_fill;
pub mod line_series;
pub mod range;
pub mod types;
pub mod windowing;

pub use area_fill::{FillVertex, fill_polygon_under, project_fill_polygon};
pub use line_series::{
    LineSegment, SeriesAnchor, project_line_segments, project_series_anchors, segments_between,
};
pub use range::ValueRange;
pub use types::{DataPoint, Viewport};
pub use windowing::points_in_window;
