//! Per-edge neighbor classification
//!
//! Walks the stitch mesh along each of a tile's four edges, counting every
//! bordering tile as space or solid. Each walk starts at the edge's anchor
//! stitch and continues via the edge-parallel stitch while the visited
//! tile's projection still overlaps the shared edge segment. A plane
//! boundary contributes nothing for its edge.

use crate::io::error::Result;
use crate::plane::arena::TileHandle;
use crate::plane::plane::Plane;

/// Tally of a tile's bordering tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborCounts {
    /// Bordering tiles holding a block
    pub solid: usize,
    /// Bordering space tiles
    pub space: usize,
}

impl Plane {
    /// Classify every tile touching `tile`'s boundary
    ///
    /// Cost is proportional to the number of distinct neighbors, never the
    /// plane's total tile count.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlaneError::StaleHandle`] when `tile` no longer
    /// refers to a live tile.
    pub fn neighbor_counts(&self, tile: TileHandle) -> Result<NeighborCounts> {
        let (rect, above, right, below, left) = {
            let t = self.tile(tile)?;
            (t.rect, t.above, t.right, t.below, t.left)
        };

        let mut counts = NeighborCounts::default();
        let mut tally = |solid: bool| {
            if solid {
                counts.solid += 1;
            } else {
                counts.space += 1;
            }
        };

        // Top edge, right to left.
        let mut cursor = above;
        while let Some(handle) = cursor {
            let t = self.tile(handle)?;
            if t.rect.right() <= rect.left() {
                break;
            }
            tally(t.occupancy.is_solid());
            cursor = t.left;
        }

        // Right edge, top to bottom.
        let mut cursor = right;
        while let Some(handle) = cursor {
            let t = self.tile(handle)?;
            if t.rect.top() <= rect.bottom() {
                break;
            }
            tally(t.occupancy.is_solid());
            cursor = t.below;
        }

        // Bottom edge, left to right.
        let mut cursor = below;
        while let Some(handle) = cursor {
            let t = self.tile(handle)?;
            if t.rect.left() >= rect.right() {
                break;
            }
            tally(t.occupancy.is_solid());
            cursor = t.right;
        }

        // Left edge, bottom to top.
        let mut cursor = left;
        while let Some(handle) = cursor {
            let t = self.tile(handle)?;
            if t.rect.bottom() >= rect.top() {
                break;
            }
            tally(t.occupancy.is_solid());
            cursor = t.above;
        }

        Ok(counts)
    }
}
