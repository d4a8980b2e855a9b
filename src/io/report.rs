//! Result formatting
//!
//! The report starts with the live tile count on its own line, then lists
//! `id solid_count space_count` for every solid tile in ascending id order
//! (a block split across rows produces one line per surviving tile), then
//! `x y` for every point query in input order.

use std::io::Write;

use crate::geometry::Point;
use crate::io::error::Result;
use crate::plane::plane::Plane;

/// Write the tile count, neighbor summary and point answers
///
/// # Errors
///
/// Returns [`crate::PlaneError::StaleHandle`] if the plane's tile set
/// changes under us (impossible through this crate's API) and propagates
/// writer failures.
pub fn write_report<W: Write>(plane: &Plane, answers: &[Point], out: &mut W) -> Result<()> {
    writeln!(out, "{}", plane.tile_count())?;

    let mut solids: Vec<_> = plane
        .tiles()
        .filter_map(|(handle, tile)| tile.occupancy.solid_id().map(|id| (id, handle)))
        .collect();
    solids.sort_by_key(|&(id, _)| id);

    for (id, handle) in solids {
        let counts = plane.neighbor_counts(handle)?;
        writeln!(out, "{id} {} {}", counts.solid, counts.space)?;
    }

    for point in answers {
        writeln!(out, "{} {}", point.x, point.y)?;
    }

    Ok(())
}
