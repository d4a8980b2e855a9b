//! Debug drawing dump and ASCII rendering
//!
//! The dump lists every live tile as `id x y w h` behind a count and extent
//! header, space tiles rendered with id `-1`; external visualizers consume
//! it directly. The ASCII rendering rasterizes the plane into a character
//! grid for eyeballing small planes.

use std::io::Write;

use crate::io::configuration::{
    ASCII_SOLID_GLYPHS, ASCII_SPACE_GLYPH, MAX_ASCII_DIMENSION, SPACE_DISPLAY_ID,
};
use crate::io::error::Result;
use crate::plane::plane::Plane;

/// Write the tile-list dump for every live tile
///
/// # Errors
///
/// Propagates writer failures.
pub fn write_drawing<W: Write>(plane: &Plane, out: &mut W) -> Result<()> {
    writeln!(out, "{}", plane.tile_count())?;
    writeln!(out, "{} {}", plane.width(), plane.height())?;

    for (_, tile) in plane.tiles() {
        writeln!(
            out,
            "{} {} {} {} {}",
            tile.occupancy.display_id(),
            tile.rect.left(),
            tile.rect.bottom(),
            tile.rect.width(),
            tile.rect.height()
        )?;
    }

    Ok(())
}

/// Render the plane as a character grid, top row first
///
/// Space cells draw as [`ASCII_SPACE_GLYPH`]; solid cells cycle through
/// [`ASCII_SOLID_GLYPHS`] by id. Returns `None` for planes larger than
/// [`MAX_ASCII_DIMENSION`] on either edge.
pub fn render_ascii(plane: &Plane) -> Option<String> {
    if plane.width() > MAX_ASCII_DIMENSION || plane.height() > MAX_ASCII_DIMENSION {
        return None;
    }

    let grid = plane.rasterize();
    let glyphs: Vec<char> = ASCII_SOLID_GLYPHS.chars().collect();
    let mut rendering =
        String::with_capacity((plane.width() as usize + 1) * plane.height() as usize);

    for y in (0..plane.height() as usize).rev() {
        for x in 0..plane.width() as usize {
            let id = grid[(y, x)];
            if id == SPACE_DISPLAY_ID {
                rendering.push(ASCII_SPACE_GLYPH);
            } else {
                rendering.push(glyphs[id as usize % glyphs.len()]);
            }
        }
        rendering.push('\n');
    }

    Some(rendering)
}
