use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid value range: min={min}, diff={diff}")]
    InvalidRange { min: f64, diff: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
