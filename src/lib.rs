//! Corner-stitched planar subdivision for rectangular layout queries
//!
//! A fixed-extent plane is partitioned into disjoint axis-aligned tiles, each
//! either background space or a solid block. Tiles carry four directional
//! "corner stitches" that make point location, splitting, merging, block
//! insertion and neighbor enumeration local operations: their cost tracks the
//! size of the surrounding mesh, never the total tile count.

#![forbid(unsafe_code)]

/// Integer points and half-open rectangles
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// The tile plane: arena, stitches, and the mesh operations
pub mod plane;

pub use io::error::{PlaneError, Result};
pub use plane::{Plane, TileHandle};
