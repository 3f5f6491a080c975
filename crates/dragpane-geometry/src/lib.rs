//! Pure math/data for the dragpane interaction layer.
//!
//! This crate contains the geometry primitives shared by the gesture and
//! animation crates. It has no dependencies and no behavior beyond
//! coordinate arithmetic.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
