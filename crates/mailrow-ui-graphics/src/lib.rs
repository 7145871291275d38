//! Pure math/data for drawing swipe rows in mailrow
//!
//! This crate contains the geometry primitives and color definitions shared
//! by the swipe controller and whatever renderer draws its indicators.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
}
