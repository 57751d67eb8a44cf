use alloc::vec::Vec;
use rand::{Rng, RngExt};

use crate::TileValue;

pub const DEFAULT_MIN_TILES: usize = 2;
pub const DEFAULT_MAX_TILES: usize = 4;

/// Draws the next round target from the values of the currently uncleared
/// tiles: picks a chain length in `[min_tiles, min(max_tiles, len)]`, samples
/// that many distinct values uniformly, and returns their sum. The sum of an
/// actually-sampled subset is always achievable, so every non-zero target is
/// solvable by construction.
///
/// Returns the reserved sentinel `0` when fewer than `min_tiles` values
/// remain.
pub fn generate_target<R: Rng + ?Sized>(
    values: &[TileValue],
    min_tiles: usize,
    max_tiles: usize,
    rng: &mut R,
) -> TileValue {
    if min_tiles == 0 || values.len() < min_tiles {
        return 0;
    }
    let safe_max = max_tiles.min(values.len()).max(min_tiles);
    let count = rng.random_range(min_tiles..=safe_max);

    // partial shuffle, only the prefix that gets summed needs to be in place
    let mut order: Vec<usize> = (0..values.len()).collect();
    let mut sum = 0;
    for slot in 0..count {
        let pick = rng.random_range(slot..order.len());
        order.swap(slot, pick);
        sum += values[order[slot]];
    }
    sum
}
