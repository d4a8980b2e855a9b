//! Tile plane engine tests

mod locate;
mod split;
mod tile;
