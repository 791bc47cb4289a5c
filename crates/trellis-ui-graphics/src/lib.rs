//! Pure math/data for drawing in Trellis
//!
//! Geometry primitives, colors, brushes and the drawing context that
//! elements paint into.

mod brush;
mod color;
mod draw;
mod geometry;

pub use brush::*;
pub use color::*;
pub use draw::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::draw::{DrawPrimitive, DrawScope, RecordingDrawScope};
    pub use crate::geometry::{Point, Rect, Size};
}
