//! Vertical tile coalescing
//!
//! `merge_down` absorbs a tile into its `below` neighbor when the two share
//! an exact horizontal extent and the same occupancy; the lower tile's
//! identity survives and the upper one is freed. An ineligible merge is a
//! no-op, never an error. Only vertical merges exist: side-by-side tiles of
//! equal occupancy are never coalesced, an accepted asymmetry of the design.

use crate::io::error::Result;
use crate::plane::arena::TileHandle;
use crate::plane::plane::Plane;

impl Plane {
    /// Absorb `tile` into the tile below it when extents and occupancy match
    ///
    /// Returns the surviving tile: the lower neighbor after a merge, or
    /// `tile` itself when the merge is ineligible. After a merge every
    /// handle to `tile` is stale.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlaneError::StaleHandle`] when `tile` no longer
    /// refers to a live tile.
    pub fn merge_down(&mut self, tile: TileHandle) -> Result<TileHandle> {
        let (rect, occupancy, above, right, below, left) = {
            let t = self.tile(tile)?;
            (t.rect, t.occupancy, t.above, t.right, t.below, t.left)
        };

        let Some(lower) = below else {
            return Ok(tile);
        };
        {
            let lower_tile = self.tile(lower)?;
            if lower_tile.rect.left() != rect.left() || lower_tile.rect.right() != rect.right() {
                return Ok(tile);
            }
            if lower_tile.occupancy != occupancy {
                return Ok(tile);
            }
        }

        // Extend the survivor upward and hand it the absorbed tile's upper
        // anchors.
        {
            let lower_tile = self.tile_mut(lower)?;
            lower_tile.rect.top_right = rect.top_right;
            lower_tile.above = above;
            lower_tile.right = right;
        }

        // Right edge: anchors into the absorbed tile move to the survivor.
        let mut cursor = right;
        while let Some(handle) = cursor {
            let t = self.tile_mut(handle)?;
            if t.left != Some(tile) {
                break;
            }
            t.left = Some(lower);
            cursor = t.below;
        }

        // Left edge.
        let mut cursor = left;
        while let Some(handle) = cursor {
            let t = self.tile_mut(handle)?;
            if t.right != Some(tile) {
                break;
            }
            t.right = Some(lower);
            cursor = t.above;
        }

        // Top edge.
        let mut cursor = above;
        while let Some(handle) = cursor {
            let t = self.tile_mut(handle)?;
            if t.below != Some(tile) {
                break;
            }
            t.below = Some(lower);
            cursor = t.left;
        }

        self.free(tile);
        Ok(lower)
    }

    /// Merge the tile above `tile` down into it when eligible
    ///
    /// Delegates to [`Plane::merge_down`] on the upper neighbor; a tile with
    /// no upper neighbor is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlaneError::StaleHandle`] when `tile` no longer
    /// refers to a live tile.
    pub fn merge_up(&mut self, tile: TileHandle) -> Result<TileHandle> {
        match self.tile(tile)?.above {
            Some(upper) => self.merge_down(upper),
            None => Ok(tile),
        }
    }
}
