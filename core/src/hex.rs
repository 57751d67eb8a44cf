use serde::{Deserialize, Serialize};

use crate::Axis;

/// Cube coordinates for a pointy-top hex grid. Valid coordinates always
/// satisfy `q + r + s == 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeCoord {
    pub q: Axis,
    pub r: Axis,
    pub s: Axis,
}

impl CubeCoord {
    pub const fn new(q: Axis, r: Axis) -> Self {
        Self { q, r, s: -q - r }
    }

    pub const fn is_valid(self) -> bool {
        self.q + self.r + self.s == 0
    }

    /// Cube distance; always an exact integer for valid coordinates because
    /// the axis deltas sum to an even number.
    pub const fn distance(self, other: CubeCoord) -> Axis {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s - other.s).abs();
        (dq + dr + ds) / 2
    }

    pub const fn is_neighbor(self, other: CubeCoord) -> bool {
        self.distance(other) == 1
    }
}

/// Cube coordinates for the tile at `(row, col)` in a row-staggered layout,
/// where `row_offset` counts the implicit leading columns of a centered row.
pub const fn hex_coordinates(row: Axis, col: Axis, row_offset: Axis) -> CubeCoord {
    let r = row;
    let q = col - row.div_euclid(2) - row_offset;
    CubeCoord { q, r, s: -q - r }
}

pub const fn are_neighbors(a: CubeCoord, b: CubeCoord) -> bool {
    a.is_neighbor(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_coordinates_satisfy_cube_sum() {
        for row in 0..8 {
            for col in 0..8 {
                for offset in 0..3 {
                    let coord = hex_coordinates(row, col, offset);
                    assert!(coord.is_valid(), "q+r+s != 0 at ({row}, {col}, {offset})");
                }
            }
        }
    }

    #[test]
    fn same_row_tiles_step_along_q() {
        let a = hex_coordinates(2, 0, 1);
        let b = hex_coordinates(2, 1, 1);
        assert_eq!(a.r, b.r);
        assert_eq!(b.q - a.q, 1);
        assert!(are_neighbors(a, b));
    }

    #[test]
    fn adjacency_is_symmetric_and_irreflexive() {
        let coords: alloc::vec::Vec<CubeCoord> = (0..4)
            .flat_map(|row| (0..4).map(move |col| hex_coordinates(row, col, 0)))
            .collect();

        for &a in &coords {
            assert!(!are_neighbors(a, a));
            for &b in &coords {
                assert_eq!(are_neighbors(a, b), are_neighbors(b, a));
            }
        }
    }

    #[test]
    fn distance_counts_axis_steps() {
        let origin = CubeCoord::new(0, 0);
        assert_eq!(origin.distance(CubeCoord::new(2, 0)), 2);
        assert_eq!(origin.distance(CubeCoord::new(1, 1)), 2);
        assert_eq!(origin.distance(CubeCoord::new(0, 3)), 3);
        assert_eq!(origin.distance(origin), 0);
    }

    #[test]
    fn staggered_rows_are_neighbors() {
        // rows shift by half a column: (0,0) touches (1,0) in a 2-wide layout
        let top = hex_coordinates(0, 0, 0);
        let below = hex_coordinates(1, 0, 0);
        assert!(are_neighbors(top, below));
    }
}
