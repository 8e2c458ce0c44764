//! Pure math/data for drawing & units in Sapling
//!
//! This crate contains geometry primitives, color definitions and the
//! [`Surface`] contract that rendering backends implement.

mod color;
mod geometry;
mod surface;

pub use color::*;
pub use geometry::*;
pub use surface::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Offset, Point, Rect, Size};
    pub use crate::surface::Surface;
}
