use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::*;

/// Key the embedding application should store the encoded board under.
pub const BOARD_SNAPSHOT_KEY: &str = "anzan:board";

/// The persisted slice of one tile: enough to restore what the player has
/// memorized. Coordinates and the cleared flag are reconstructed elsewhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub id: TileId,
    pub value: TileValue,
    pub label: String,
}

pub fn snapshot_board(board: &Board) -> Vec<TileSnapshot> {
    board
        .tiles()
        .iter()
        .map(|tile| TileSnapshot {
            id: tile.id,
            value: tile.value,
            label: tile.label.clone(),
        })
        .collect()
}

pub fn encode_board(board: &Board) -> serde_json::Result<String> {
    serde_json::to_string(&snapshot_board(board))
}

pub fn decode_snapshot(json: &str) -> serde_json::Result<Vec<TileSnapshot>> {
    serde_json::from_str(json)
}

/// Overwrites a freshly generated board's values and labels from a snapshot,
/// so a reloaded level keeps the numbers the player memorized. The snapshot
/// must cover exactly the board's tile ids.
pub fn restore_board(board: &mut Board, snapshot: &[TileSnapshot]) -> Result<()> {
    let by_id: HashMap<TileId, &TileSnapshot> =
        snapshot.iter().map(|entry| (entry.id, entry)).collect();
    if by_id.len() != snapshot.len() || by_id.len() != board.len() {
        log::warn!(
            "snapshot covers {} tiles, board has {}",
            snapshot.len(),
            board.len()
        );
        return Err(GameError::SnapshotMismatch);
    }

    for tile in board.tiles_mut() {
        let entry = by_id.get(&tile.id).ok_or(GameError::SnapshotMismatch)?;
        tile.value = entry.value;
        tile.label = entry.label.clone();
    }
    Ok(())
}
