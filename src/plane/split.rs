//! Tile splitting with stitch repair
//!
//! Both splits mutate the argument tile in place to become the lower/left
//! half and allocate a fresh tile for the upper/right half, carrying the
//! original occupancy. The surviving identity of the lower/left half is what
//! the merge direction relies on elsewhere. Stitch repair walks each edge of
//! the cut outward and only touches tiles bordering it, so the cost tracks
//! the local mesh, not the plane.
//!
//! A cut coordinate that is not strictly interior to the tile is a normal,
//! expected outcome reported as `Ok(None)`; callers skip the split.

use crate::geometry::{Point, Rect};
use crate::io::error::Result;
use crate::plane::arena::TileHandle;
use crate::plane::plane::Plane;
use crate::plane::tile::Tile;

/// Result of a horizontal split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HSplit {
    /// Newly allocated half covering `[y, top)`
    pub upper: TileHandle,
    /// The original tile, shrunk to `[bottom, y)`
    pub lower: TileHandle,
}

/// Result of a vertical split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VSplit {
    /// The original tile, shrunk to `[left, x)`
    pub left: TileHandle,
    /// Newly allocated half covering `[x, right)`
    pub right: TileHandle,
}

impl Plane {
    /// Split a tile along the horizontal line at `y`
    ///
    /// Returns `Ok(None)` when `y` is not strictly inside the tile's
    /// vertical range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlaneError::StaleHandle`] when `tile` no longer
    /// refers to a live tile.
    pub fn split_horizontal(&mut self, tile: TileHandle, y: i32) -> Result<Option<HSplit>> {
        let (rect, occupancy, old_above, old_right, old_left) = {
            let t = self.tile(tile)?;
            (t.rect, t.occupancy, t.above, t.right, t.left)
        };
        if y <= rect.bottom() || y >= rect.top() {
            return Ok(None);
        }

        let lower = tile;
        let mut upper_tile = Tile::new(
            Rect::new(Point::new(rect.left(), y), rect.top_right),
            occupancy,
        );
        upper_tile.below = Some(lower);
        upper_tile.above = old_above;
        upper_tile.right = old_right;
        let upper = self.allocate(upper_tile);

        self.tile_mut(lower)?.rect.top_right = Point::new(rect.right(), y);

        // Top edge: every neighbor anchored on the old tile now sits on the
        // upper half.
        let mut cursor = old_above;
        while let Some(handle) = cursor {
            let t = self.tile_mut(handle)?;
            if t.below != Some(lower) {
                break;
            }
            t.below = Some(upper);
            cursor = t.left;
        }
        self.tile_mut(lower)?.above = Some(upper);

        // Right edge: neighbors whose anchor corner lies at or above the cut
        // move to the upper half; the first one below it becomes the lower
        // half's new right anchor.
        let mut cursor = old_right;
        while let Some(handle) = cursor {
            let t = self.tile_mut(handle)?;
            if t.rect.bottom() < y {
                break;
            }
            t.left = Some(upper);
            cursor = t.below;
        }
        self.tile_mut(lower)?.right = cursor;

        // Left edge: skip neighbors entirely below the cut (they keep their
        // stitches into the surviving lower half), then anchor the upper
        // half and redirect the neighbors crossing the cut.
        let mut cursor = old_left;
        while let Some(handle) = cursor {
            let t = self.tile(handle)?;
            if t.rect.top() > y {
                break;
            }
            cursor = t.above;
        }
        self.tile_mut(upper)?.left = cursor;
        while let Some(handle) = cursor {
            let t = self.tile_mut(handle)?;
            if t.right != Some(lower) {
                break;
            }
            t.right = Some(upper);
            cursor = t.above;
        }

        Ok(Some(HSplit { upper, lower }))
    }

    /// Split a tile along the vertical line at `x`
    ///
    /// Returns `Ok(None)` when `x` is not strictly inside the tile's
    /// horizontal range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlaneError::StaleHandle`] when `tile` no longer
    /// refers to a live tile.
    pub fn split_vertical(&mut self, tile: TileHandle, x: i32) -> Result<Option<VSplit>> {
        let (rect, occupancy, old_above, old_right, old_below) = {
            let t = self.tile(tile)?;
            (t.rect, t.occupancy, t.above, t.right, t.below)
        };
        if x <= rect.left() || x >= rect.right() {
            return Ok(None);
        }

        let left = tile;
        let mut right_tile = Tile::new(
            Rect::new(Point::new(x, rect.bottom()), rect.top_right),
            occupancy,
        );
        right_tile.left = Some(left);
        right_tile.right = old_right;
        right_tile.above = old_above;
        let right = self.allocate(right_tile);

        self.tile_mut(left)?.rect.top_right = Point::new(x, rect.top());

        // Right edge: every neighbor anchored on the old tile now sits on
        // the right half.
        let mut cursor = old_right;
        while let Some(handle) = cursor {
            let t = self.tile_mut(handle)?;
            if t.left != Some(left) {
                break;
            }
            t.left = Some(right);
            cursor = t.below;
        }
        self.tile_mut(left)?.right = Some(right);

        // Top edge: neighbors whose anchor corner lies at or beyond the cut
        // move to the right half; the first one short of it becomes the left
        // half's new top anchor.
        let mut cursor = old_above;
        while let Some(handle) = cursor {
            let t = self.tile_mut(handle)?;
            if t.rect.left() < x {
                break;
            }
            t.below = Some(right);
            cursor = t.left;
        }
        self.tile_mut(left)?.above = cursor;

        // Bottom edge: skip neighbors entirely left of the cut, then anchor
        // the right half and redirect the neighbors crossing the cut.
        let mut cursor = old_below;
        while let Some(handle) = cursor {
            let t = self.tile(handle)?;
            if t.rect.right() > x {
                break;
            }
            cursor = t.right;
        }
        self.tile_mut(right)?.below = cursor;
        while let Some(handle) = cursor {
            let t = self.tile_mut(handle)?;
            if t.above != Some(left) {
                break;
            }
            t.above = Some(right);
            cursor = t.right;
        }

        Ok(Some(VSplit { left, right }))
    }
}
