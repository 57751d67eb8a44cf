#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use hex::*;
pub use snapshot::*;
pub use target::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod hex;
mod snapshot;
mod target;
mod tile;
mod types;

/// External difficulty configuration, read-only to the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Tile count per row, top to bottom.
    pub hexes_per_row: Vec<RowWidth>,
    /// Inclusive `[min, max]` range tile values are drawn from.
    pub number_range: (TileValue, TileValue),
    /// Inclusive `[min, max]` count of tiles summed into one target.
    pub chain_bounds: (u8, u8),
    /// How long the view keeps values visible before hiding them. Carried
    /// for the presentation layer; the engine never schedules it.
    pub reveal_duration_ms: u32,
}

impl Preset {
    pub fn new(
        hexes_per_row: Vec<RowWidth>,
        number_range: (TileValue, TileValue),
        chain_bounds: (u8, u8),
        reveal_duration_ms: u32,
    ) -> Result<Self> {
        let preset = Self {
            hexes_per_row,
            number_range,
            chain_bounds,
            reveal_duration_ms,
        };
        preset.validate()?;
        Ok(preset)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hexes_per_row.is_empty() || self.hexes_per_row.contains(&0) {
            return Err(GameError::EmptyLayout);
        }
        let total: u32 = self.hexes_per_row.iter().map(|&w| u32::from(w)).sum();
        if total > u32::from(TileId::MAX) {
            return Err(GameError::BoardTooLarge);
        }
        let (min, max) = self.number_range;
        // values below 1 would collide with the reserved 0 target sentinel
        if min < 1 || min > max {
            return Err(GameError::InvalidNumberRange);
        }
        let (chain_min, chain_max) = self.chain_bounds;
        if chain_min < 1 || chain_min > chain_max {
            return Err(GameError::InvalidChainBounds);
        }
        Ok(())
    }

    pub fn total_tiles(&self) -> u16 {
        total_width(&self.hexes_per_row)
    }

    pub fn max_row_width(&self) -> RowWidth {
        self.hexes_per_row.iter().copied().max().unwrap_or(0)
    }
}

/// The full tile set for one level. Tiles are never added or removed after
/// generation, only marked cleared, and a tile's id always equals its index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        for (index, tile) in tiles.iter().enumerate() {
            if usize::from(tile.id) != index {
                return Err(GameError::InvalidBoardShape);
            }
            if !tile.coords.is_valid() {
                return Err(GameError::InvalidCoords);
            }
        }
        Ok(Self { tiles })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Result<&Tile> {
        self.tiles
            .get(usize::from(id))
            .ok_or(GameError::UnknownTile)
    }

    pub fn uncleared(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| !tile.cleared)
    }

    pub fn uncleared_count(&self) -> usize {
        self.uncleared().count()
    }

    pub(crate) fn clear(&mut self, id: TileId) {
        if let Some(tile) = self.tiles.get_mut(usize::from(id)) {
            tile.cleared = true;
        }
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }
}

impl Index<TileId> for Board {
    type Output = Tile;

    fn index(&self, id: TileId) -> &Self::Output {
        &self.tiles[usize::from(id)]
    }
}
