/// Tile count within a single board row.
pub type RowWidth = u8;

/// Stable tile identifier, assigned in row-major generation order.
pub type TileId = u16;

/// Numeric value shown on a tile face; also the type of targets and sums.
pub type TileValue = i32;

/// Single cube-coordinate axis.
pub type Axis = i32;

/// Saturating total over a row-width layout.
pub fn total_width(rows: &[RowWidth]) -> u16 {
    rows.iter()
        .fold(0u16, |acc, &width| acc.saturating_add(u16::from(width)))
}
