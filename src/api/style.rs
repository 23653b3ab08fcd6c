use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{GraphError, GraphResult};
use crate::extensions::MarkerStyle;
use crate::render::Color;

/// Stroke, marker, and background-fill styling for one line series.
///
/// Immutable per render call. The defaults mirror the stock widget look:
/// teal accent stroke, white marker rings, dark translucent fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub stroke_color: Color,
    pub stroke_width: f64,
    #[serde(default)]
    pub draw_markers: bool,
    #[serde(default)]
    pub marker: MarkerStyle,
    #[serde(default)]
    pub draw_background: bool,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::rgb(79.0 / 255.0, 223.0 / 255.0, 190.0 / 255.0),
            stroke_width: 4.0,
            draw_markers: false,
            marker: MarkerStyle::default(),
            draw_background: false,
            background_color: default_background_color(),
        }
    }
}

fn default_background_color() -> Color {
    Color::rgba(20.0 / 255.0, 40.0 / 255.0, 60.0 / 255.0, 128.0 / 255.0)
}

impl SeriesStyle {
    pub fn validate(self) -> GraphResult<Self> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "series stroke width must be finite and > 0".to_owned(),
            ));
        }

        self.stroke_color.validate()?;
        self.background_color.validate()?;
        self.marker.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke_color = color;
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, draw_markers: bool) -> Self {
        self.draw_markers = draw_markers;
        self
    }

    #[must_use]
    pub fn with_background(mut self, draw_background: bool) -> Self {
        self.draw_background = draw_background;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// One named line series: data plus styling.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub points: Vec<DataPoint>,
    pub style: SeriesStyle,
}

impl LineSeries {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            style: SeriesStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }
}
