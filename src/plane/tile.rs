//! Tile records and occupancy tagging
//!
//! A tile is a plain data record: a rectangle, an occupancy tag, and four
//! corner stitches. Each stitch is one anchor per edge, not a neighbor list:
//! `above` references the top-edge neighbor touching the top-right corner,
//! `right` the right-edge neighbor at the same corner, `below` and `left`
//! their mirrors at the bottom-left corner. Walking an anchor and then the
//! edge-parallel stitch reaches every other neighbor on that edge.

use crate::geometry::Rect;
use crate::plane::arena::TileHandle;

/// What a tile holds: background space or a solid block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupancy {
    /// Unassigned background
    Space,
    /// An occupied block carrying its id (ids start at 0)
    Solid(u32),
}

impl Occupancy {
    /// Whether this is background space
    pub const fn is_space(self) -> bool {
        matches!(self, Self::Space)
    }

    /// Whether this is an occupied block
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Solid(_))
    }

    /// The block id, if solid
    pub const fn solid_id(self) -> Option<u32> {
        match self {
            Self::Space => None,
            Self::Solid(id) => Some(id),
        }
    }

    /// Signed id used by the text formats, `-1` for space
    pub const fn display_id(self) -> i64 {
        match self {
            Self::Space => -1,
            Self::Solid(id) => id as i64,
        }
    }
}

/// One rectangular cell of the plane partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Covered region
    pub rect: Rect,
    /// Space or solid tag
    pub occupancy: Occupancy,
    /// Top-edge anchor at the top-right corner, walked via `left`
    pub above: Option<TileHandle>,
    /// Right-edge anchor at the top-right corner, walked via `below`
    pub right: Option<TileHandle>,
    /// Bottom-edge anchor at the bottom-left corner, walked via `right`
    pub below: Option<TileHandle>,
    /// Left-edge anchor at the bottom-left corner, walked via `above`
    pub left: Option<TileHandle>,
}

impl Tile {
    /// Create an unstitched tile
    pub const fn new(rect: Rect, occupancy: Occupancy) -> Self {
        Self {
            rect,
            occupancy,
            above: None,
            right: None,
            below: None,
            left: None,
        }
    }
}
