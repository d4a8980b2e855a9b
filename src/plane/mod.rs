//! The corner-stitched tile plane
//!
//! This module contains the mesh engine:
//! - Tile records and the handle arena that owns them
//! - Point location over the stitch mesh
//! - Horizontal/vertical splitting with stitch repair
//! - Vertical merging
//! - Composite block insertion
//! - Neighbor classification

/// Slot arena with generation-counted handles
pub mod arena;
/// Composite block insertion sweep
pub mod insert;
/// Stitch-mesh point location
pub mod locate;
/// Vertical tile coalescing
pub mod merge;
/// Per-edge neighbor classification
pub mod neighbors;
/// Plane construction, tile access and enumeration
pub mod plane;
/// Tile splitting with stitch repair
pub mod split;
/// Tile records and occupancy tagging
pub mod tile;

pub use arena::{TileArena, TileHandle};
pub use neighbors::NeighborCounts;
pub use plane::Plane;
pub use split::{HSplit, VSplit};
pub use tile::{Occupancy, Tile};
