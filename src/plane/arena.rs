//! Slot arena with generation-counted handles
//!
//! The stitch mesh is a cyclic graph, so tiles cannot reference each other
//! through ownership. The arena owns every tile in slots addressed by
//! `TileHandle`; a handle carries the generation the slot had when the tile
//! was created, so a handle kept across a merge that freed its tile is
//! detectably stale instead of silently resolving to a recycled slot.

use std::fmt;

use crate::plane::tile::Tile;

/// Stable reference to a tile in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileHandle {
    index: u32,
    generation: u32,
}

impl TileHandle {
    /// Slot index inside the arena
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Slot generation this handle was issued for
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for TileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    tile: Option<Tile>,
}

/// Owner of every live tile of one plane
#[derive(Debug, Clone, Default)]
pub struct TileArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl TileArena {
    /// Create an empty arena
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store a tile, reusing a freed slot when one exists
    pub fn insert(&mut self, tile: Tile) -> TileHandle {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.tile = Some(tile);
            return TileHandle {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            tile: Some(tile),
        });
        TileHandle {
            index,
            generation: 0,
        }
    }

    /// Free a tile, invalidating every handle issued for it
    ///
    /// Returns the removed tile, or `None` if the handle was already stale.
    pub fn remove(&mut self, handle: TileHandle) -> Option<Tile> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let tile = slot.tile.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        Some(tile)
    }

    /// Resolve a handle to its tile, `None` when stale
    pub fn get(&self, handle: TileHandle) -> Option<&Tile> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.tile.as_ref()
    }

    /// Resolve a handle mutably, `None` when stale
    pub fn get_mut(&mut self, handle: TileHandle) -> Option<&mut Tile> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.tile.as_mut()
    }

    /// Whether a handle still refers to a live tile
    pub fn contains(&self, handle: TileHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Number of live tiles
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Whether the arena holds no live tiles
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit every live tile with its handle
    pub fn iter(&self) -> impl Iterator<Item = (TileHandle, &Tile)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.tile.as_ref().map(|tile| {
                (
                    TileHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    tile,
                )
            })
        })
    }
}
