//! Driver constants

/// Signed id the text formats use for space tiles
pub const SPACE_DISPLAY_ID: i64 = -1;

/// Glyph used for space cells in ASCII renderings
pub const ASCII_SPACE_GLYPH: char = '.';

/// Glyphs cycled through for solid cells in ASCII renderings
pub const ASCII_SOLID_GLYPHS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Keeps accidental huge headers from allocating the raster grid
/// Largest plane edge the ASCII renderer will draw
pub const MAX_ASCII_DIMENSION: i32 = 512;
