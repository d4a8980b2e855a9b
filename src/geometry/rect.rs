//! Half-open axis-aligned rectangles
//!
//! A rectangle covers `[bottom_left, top_right)` on both axes: its
//! bottom-left corner is inside, its top-right corner is not. Adjacent tiles
//! therefore share edge coordinates without sharing any grid point, which is
//! what keeps the plane partition exact.

use crate::geometry::point::Point;

/// An axis-aligned rectangle, half-open on the top and right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Inclusive lower-left corner
    pub bottom_left: Point,
    /// Exclusive upper-right corner
    pub top_right: Point,
}

impl Rect {
    /// Build a rectangle from its two corners
    pub const fn new(bottom_left: Point, top_right: Point) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    /// Build a rectangle from its bottom-left corner and extent
    pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            bottom_left: Point::new(x, y),
            top_right: Point::new(x + width, y + height),
        }
    }

    /// Left edge coordinate
    pub const fn left(&self) -> i32 {
        self.bottom_left.x
    }

    /// Exclusive right edge coordinate
    pub const fn right(&self) -> i32 {
        self.top_right.x
    }

    /// Bottom edge coordinate
    pub const fn bottom(&self) -> i32 {
        self.bottom_left.y
    }

    /// Exclusive top edge coordinate
    pub const fn top(&self) -> i32 {
        self.top_right.y
    }

    /// Horizontal extent
    pub const fn width(&self) -> i32 {
        self.right() - self.left()
    }

    /// Vertical extent
    pub const fn height(&self) -> i32 {
        self.top() - self.bottom()
    }

    /// Covered area in grid cells
    pub const fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Whether either extent is zero or negative
    pub const fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Whether a point lies inside the half-open region
    pub const fn contains(&self, point: Point) -> bool {
        self.contains_x(point.x) && self.contains_y(point.y)
    }

    /// Whether a coordinate falls in the horizontal range
    pub const fn contains_x(&self, x: i32) -> bool {
        x >= self.left() && x < self.right()
    }

    /// Whether a coordinate falls in the vertical range
    pub const fn contains_y(&self, y: i32) -> bool {
        y >= self.bottom() && y < self.top()
    }

    /// Whether `other` fits entirely inside this rectangle
    pub const fn encloses(&self, other: &Self) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.bottom() >= self.bottom()
            && other.top() <= self.top()
    }

    /// Whether the two rectangles cover at least one common grid cell
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.bottom() < other.top()
            && other.bottom() < self.top()
    }
}
