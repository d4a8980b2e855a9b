//! Stitch-mesh point location
//!
//! Starting from any live tile, the search alternates a vertical walk (via
//! `below`/`above`) and a horizontal walk (via `left`/`right`) until the
//! current tile's rectangle contains the target point. The horizontal walk
//! can reintroduce vertical misalignment, so the phases repeat; convexity of
//! the tiles guarantees convergence.

use crate::geometry::Point;
use crate::io::error::{PlaneError, Result};
use crate::plane::arena::TileHandle;
use crate::plane::plane::Plane;

impl Plane {
    /// Find the unique tile whose rectangle contains `point`
    ///
    /// `hint` may be any live tile; a hint near the target shortens the
    /// walk. Cost is proportional to the number of tiles crossed, never to
    /// the total tile count.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::OutOfBounds`] when the point lies outside the
    /// plane, [`PlaneError::StaleHandle`] when `hint` no longer refers to a
    /// live tile, and [`PlaneError::MeshCorrupted`] when a stitch required
    /// by the partition invariant is missing.
    pub fn locate(&self, hint: TileHandle, point: Point) -> Result<TileHandle> {
        if !self.bounds().contains(point) {
            return Err(PlaneError::OutOfBounds {
                point,
                width: self.width(),
                height: self.height(),
            });
        }

        let mut current = hint;
        let mut rect = self.tile(current)?.rect;

        while !rect.contains(point) {
            // Vertical phase: walk until the y range matches.
            while !rect.contains_y(point.y) {
                let tile = self.tile(current)?;
                let step = if point.y < rect.bottom() {
                    tile.below
                } else {
                    tile.above
                };
                current = step.ok_or(PlaneError::MeshCorrupted { operation: "locate" })?;
                rect = self.tile(current)?.rect;
            }
            // Horizontal phase: walk until the x range matches.
            while !rect.contains_x(point.x) {
                let tile = self.tile(current)?;
                let step = if point.x < rect.left() {
                    tile.left
                } else {
                    tile.right
                };
                current = step.ok_or(PlaneError::MeshCorrupted { operation: "locate" })?;
                rect = self.tile(current)?.rect;
            }
        }

        Ok(current)
    }
}
