use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::{CubeCoord, TileId, TileValue};

/// Persistent unit of board state. `value`, `label`, and coordinates are
/// fixed for the tile's lifetime; only `cleared` ever changes, and only from
/// false to true.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub coords: CubeCoord,
    pub label: String,
    pub value: TileValue,
    pub cleared: bool,
}

/// Base-26 alphabetic label for a sequential index: 0 is "A", 25 is "Z",
/// 26 is "AA", and so on.
pub fn sequential_label(id: TileId) -> String {
    let mut label = String::new();
    let mut index = i32::from(id);
    while index >= 0 {
        let digit = (index % 26) as u8;
        label.insert(0, char::from(b'A' + digit));
        index = index / 26 - 1;
    }
    label
}
