mod engine;
mod engine_config;
mod engine_snapshot;
mod series_frame_builder;
mod style;

pub use engine::GraphEngine;
pub use engine_config::GraphEngineConfig;
pub use engine_snapshot::{EngineSnapshot, SeriesSnapshot};
pub use style::{LineSeries, SeriesStyle};
