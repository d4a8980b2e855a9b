//! Plane construction, tile access and enumeration
//!
//! The plane owns the arena and the `start` tile used as the default hint
//! for point-location searches. Between public operations the live tiles
//! form an exact partition of `[0,width) × [0,height)` with consistent
//! stitches on every tile.

use ndarray::Array2;

use crate::geometry::{Point, Rect};
use crate::io::error::{PlaneError, Result};
use crate::plane::arena::{TileArena, TileHandle};
use crate::plane::tile::{Occupancy, Tile};

/// A corner-stitched partition of a fixed rectangular extent
#[derive(Debug, Clone)]
pub struct Plane {
    width: i32,
    height: i32,
    arena: TileArena,
    start: TileHandle,
}

impl Plane {
    /// Build the initial all-space plane
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::DegenerateRect`] when either extent is not
    /// positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlaneError::DegenerateRect { width, height });
        }

        let mut arena = TileArena::new();
        let start = arena.insert(Tile::new(
            Rect::new(Point::new(0, 0), Point::new(width, height)),
            Occupancy::Space,
        ));

        Ok(Self {
            width,
            height,
            arena,
            start,
        })
    }

    /// Horizontal extent of the plane
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Vertical extent of the plane
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The covered region `[0,width) × [0,height)`
    pub const fn bounds(&self) -> Rect {
        Rect::new(Point::new(0, 0), Point::new(self.width, self.height))
    }

    /// Handle of the plane's root tile, always live
    ///
    /// The root is the initial full-extent space tile; splits shrink it in
    /// place and merges absorb upward into it, so the handle never goes
    /// stale and serves as a universal location hint.
    pub const fn start(&self) -> TileHandle {
        self.start
    }

    /// Resolve a handle for external callers
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::StaleHandle`] when the tile was merged away
    /// after the handle was issued.
    pub fn get(&self, handle: TileHandle) -> Result<&Tile> {
        self.arena
            .get(handle)
            .ok_or(PlaneError::StaleHandle { handle })
    }

    /// Number of live tiles in the partition
    pub fn tile_count(&self) -> usize {
        self.arena.len()
    }

    /// Snapshot every live tile with its handle, in arena order
    pub fn tiles(&self) -> impl Iterator<Item = (TileHandle, &Tile)> {
        self.arena.iter()
    }

    /// Render the partition as a dense id grid
    ///
    /// The result is indexed `[y][x]` with display ids (`-1` for space).
    /// Intended for the drawing dump and for invariant checks in tests;
    /// cost is proportional to the plane area, unlike the mesh operations.
    pub fn rasterize(&self) -> Array2<i64> {
        let mut grid = Array2::from_elem((self.height as usize, self.width as usize), i64::MIN);
        for (_, tile) in self.arena.iter() {
            let id = tile.occupancy.display_id();
            for y in tile.rect.bottom()..tile.rect.top() {
                for x in tile.rect.left()..tile.rect.right() {
                    grid[(y as usize, x as usize)] = id;
                }
            }
        }
        grid
    }

    pub(crate) fn tile(&self, handle: TileHandle) -> Result<&Tile> {
        self.arena
            .get(handle)
            .ok_or(PlaneError::StaleHandle { handle })
    }

    pub(crate) fn tile_mut(&mut self, handle: TileHandle) -> Result<&mut Tile> {
        self.arena
            .get_mut(handle)
            .ok_or(PlaneError::StaleHandle { handle })
    }

    pub(crate) fn allocate(&mut self, tile: Tile) -> TileHandle {
        self.arena.insert(tile)
    }

    pub(crate) fn free(&mut self, handle: TileHandle) -> Option<Tile> {
        self.arena.remove(handle)
    }
}
