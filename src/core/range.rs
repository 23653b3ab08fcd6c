use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{GraphError, GraphResult};

/// Span used to widen a flat axis when fitting a range from data.
const MIN_FITTED_SPAN: f64 = 0.000_001;

/// Data-space interval normalizing a raw value into [0, 1].
///
/// `diff` is the signed span of the interval. A negative span inverts the
/// axis deterministically; a zero span is rejected at construction so
/// projection never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    min: f64,
    diff: f64,
}

impl ValueRange {
    pub fn new(min: f64, diff: f64) -> GraphResult<Self> {
        if !min.is_finite() || !diff.is_finite() || diff == 0.0 {
            return Err(GraphError::InvalidRange { min, diff });
        }
        Ok(Self { min, diff })
    }

    pub fn from_bounds(min: f64, max: f64) -> GraphResult<Self> {
        Self::new(min, max - min)
    }

    /// Fits the x axis from data, widening a flat series to a minimal span.
    pub fn from_data_x(points: &[DataPoint]) -> GraphResult<Self> {
        let values: Vec<f64> = points.iter().map(|point| point.x).collect();
        Self::fit_axis(&values, "x")
    }

    /// Fits the y axis from data, widening a flat series to a minimal span.
    pub fn from_data_y(points: &[DataPoint]) -> GraphResult<Self> {
        let values: Vec<f64> = points.iter().map(|point| point.y).collect();
        Self::fit_axis(&values, "y")
    }

    fn fit_axis(values: &[f64], axis: &str) -> GraphResult<Self> {
        for value in values {
            if !value.is_finite() {
                return Err(GraphError::InvalidData(format!(
                    "{axis} values must be finite"
                )));
            }
        }

        let (Some(min), Some(max)) = (
            values.iter().copied().min_by_key(|value| OrderedFloat(*value)),
            values.iter().copied().max_by_key(|value| OrderedFloat(*value)),
        ) else {
            return Err(GraphError::InvalidData(format!(
                "{axis} range cannot be fitted from empty data"
            )));
        };

        if min == max {
            return Self::new(min - MIN_FITTED_SPAN * 0.5, MIN_FITTED_SPAN);
        }
        Self::new(min, max - min)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn diff(self) -> f64 {
        self.diff
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.min, self.min + self.diff)
    }

    /// Normalizes a raw value into the [0, 1] interval.
    pub fn ratio(self, value: f64) -> GraphResult<f64> {
        if !value.is_finite() {
            return Err(GraphError::InvalidData("value must be finite".to_owned()));
        }
        Ok((value - self.min) / self.diff)
    }
}
