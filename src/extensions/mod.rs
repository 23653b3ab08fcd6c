//! Optional glyph modules layered on top of the projection core.
//!
//! Keep extensions decoupled from core paths: they consume projected
//! anchors and produce primitives, never the other way around.

pub mod markers;

pub use markers::{MarkerStyle, marker_rings};
