//! Integer-grid geometry primitives
//!
//! The plane model is integer-only: points are integer pairs and rectangles
//! are half-open regions `[bottom_left, top_right)`. Floating-point
//! coordinates and non-axis-aligned shapes are out of scope.

/// Integer point type
pub mod point;
/// Half-open axis-aligned rectangle type
pub mod rect;

pub use point::Point;
pub use rect::Rect;
