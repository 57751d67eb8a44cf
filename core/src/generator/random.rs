use alloc::vec::Vec;

use super::*;

/// Seeded row-major board generation. One call produces the whole tile set
/// for a level; layout-only events (resize and the like) must reuse the
/// returned board instead of generating again, or tile values would change
/// under the player.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, preset: &Preset) -> Result<Board> {
        use rand::prelude::*;

        preset.validate()?;

        let max_per_row = preset.max_row_width();
        let (min, max) = preset.number_range;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut tiles = Vec::with_capacity(usize::from(preset.total_tiles()));
        let mut next_id: TileId = 0;

        for (row, &width) in preset.hexes_per_row.iter().enumerate() {
            // center shorter rows under the widest one
            let row_offset = Axis::from((max_per_row - width) / 2);
            for col in 0..width {
                let coords = hex_coordinates(row as Axis, Axis::from(col), row_offset);
                tiles.push(Tile {
                    id: next_id,
                    coords,
                    label: sequential_label(next_id),
                    value: rng.random_range(min..=max),
                    cleared: false,
                });
                next_id += 1;
            }
        }

        log::debug!("generated {} tiles from seed {}", tiles.len(), self.seed);
        Board::from_tiles(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn preset() -> Preset {
        Preset::new(vec![3, 4, 5, 4, 3], (1, 15), (2, 4), 5_000).unwrap()
    }

    #[test]
    fn generates_row_major_sequential_ids() {
        let board = RandomBoardGenerator::new(7).generate(&preset()).unwrap();

        assert_eq!(board.len(), 19);
        for (index, tile) in board.tiles().iter().enumerate() {
            assert_eq!(usize::from(tile.id), index);
            assert_eq!(tile.label, sequential_label(tile.id));
            assert!(!tile.cleared);
        }
        assert_eq!(board.tiles()[0].label, "A");
        assert_eq!(board.tiles()[18].label, "S");
    }

    #[test]
    fn cube_sum_invariant_holds_for_every_tile() {
        let board = RandomBoardGenerator::new(99).generate(&preset()).unwrap();
        for tile in board.tiles() {
            assert!(tile.coords.is_valid());
        }
    }

    #[test]
    fn values_stay_inside_the_preset_range() {
        let board = RandomBoardGenerator::new(3).generate(&preset()).unwrap();
        for tile in board.tiles() {
            assert!((1..=15).contains(&tile.value));
        }
    }

    #[test]
    fn rows_are_centered_by_half_the_width_difference() {
        let preset = Preset::new(vec![2, 4], (1, 9), (2, 2), 0).unwrap();
        let board = RandomBoardGenerator::new(0).generate(&preset).unwrap();

        // row 0 is offset by (4 - 2) / 2 = 1 implicit column
        assert_eq!(board.tiles()[0].coords, hex_coordinates(0, 0, 1));
        // row 1 is the widest, no offset
        assert_eq!(board.tiles()[2].coords, hex_coordinates(1, 0, 0));
    }

    #[test]
    fn same_seed_regenerates_the_same_board() {
        let first = RandomBoardGenerator::new(42).generate(&preset()).unwrap();
        let second = RandomBoardGenerator::new(42).generate(&preset()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_preset_is_rejected_before_generation() {
        let bad = Preset {
            hexes_per_row: vec![],
            number_range: (1, 9),
            chain_bounds: (2, 4),
            reveal_duration_ms: 0,
        };
        assert_eq!(
            RandomBoardGenerator::new(0).generate(&bad).unwrap_err(),
            GameError::EmptyLayout
        );
    }
}
