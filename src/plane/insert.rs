//! Composite block insertion sweep
//!
//! Carves a rectangle of a given id out of the plane using location, splits
//! and merges as primitives. The sweep works bottom-to-top: the strip
//! property guarantees a single tile contains each horizontal boundary, so
//! one horizontal split isolates the top and one the bottom; each row in
//! between is carved into a left remainder, a middle piece spanning the
//! block's x range, and a right remainder. Middle pieces merge downward
//! immediately, building the block as the sweep climbs. Side remainders must
//! not merge upward mid-sweep — the rows above them are still going to be
//! modified — so their merge happens once, after the sweep ends.

use crate::geometry::{Point, Rect};
use crate::io::error::{PlaneError, Result};
use crate::plane::arena::TileHandle;
use crate::plane::plane::Plane;
use crate::plane::tile::Occupancy;

impl Plane {
    /// Assign `id` to every cell of `rect`, carving tiles as needed
    ///
    /// Tiles already holding a different id inside `rect` are overwritten.
    /// Returns the lowest row fragment of the inserted block; callers that
    /// need a handle after further mutations should re-locate by point.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::DegenerateRect`] when `rect` has a non-positive
    /// extent and [`PlaneError::OutOfBounds`] when it is not entirely inside
    /// the plane.
    pub fn insert_block(&mut self, rect: Rect, id: u32) -> Result<TileHandle> {
        if rect.is_degenerate() {
            return Err(PlaneError::DegenerateRect {
                width: rect.width(),
                height: rect.height(),
            });
        }
        if !self.bounds().encloses(&rect) {
            let point = if self.bounds().contains(rect.bottom_left) {
                rect.top_right
            } else {
                rect.bottom_left
            };
            return Err(PlaneError::OutOfBounds {
                point,
                width: self.width(),
                height: self.height(),
            });
        }

        // Isolate the strip boundaries. The top cut is skipped when the
        // block reaches the plane's upper edge; the bottom split rejects
        // itself when the block sits on an existing cut line.
        if rect.top() < self.height() {
            let top_tile = self.locate(self.start(), Point::new(rect.left(), rect.top()))?;
            self.split_horizontal(top_tile, rect.top())?;
        }

        let bottom_tile = self.locate(self.start(), rect.bottom_left)?;
        let bottom_split = self.split_horizontal(bottom_tile, rect.bottom())?;
        let mut cursor = Some(bottom_split.map_or(bottom_tile, |split| split.upper));

        let mut final_left: Option<TileHandle> = None;
        let mut final_right: Option<TileHandle> = None;
        let mut block: Option<TileHandle> = None;

        while let Some(row) = cursor {
            let row_top = self.tile(row)?.rect.top();
            if row_top > rect.top() {
                break;
            }
            // The next row is found before this one is carved up; carving
            // never touches the strip above the current row's top edge.
            cursor = if row_top < self.height() {
                Some(self.locate(row, Point::new(rect.left(), row_top))?)
            } else {
                None
            };

            let mut middle = row;
            if let Some(split) = self.split_vertical(middle, rect.left())? {
                final_left = Some(self.merge_down(split.left)?);
                middle = split.right;
            }
            if let Some(split) = self.split_vertical(middle, rect.right())? {
                final_right = Some(self.merge_down(split.right)?);
                middle = split.left;
            }

            self.tile_mut(middle)?.occupancy = Occupancy::Solid(id);
            block = Some(self.merge_down(middle)?);
        }

        // Deferred remainder merges: a single upward attempt per side, now
        // that the row above each remainder is final.
        if let Some(remainder) = final_left {
            self.merge_up(remainder)?;
        }
        if let Some(remainder) = final_right {
            self.merge_up(remainder)?;
        }

        block.ok_or(PlaneError::MeshCorrupted {
            operation: "insert_block",
        })
    }
}
