use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board layout has no usable rows")]
    EmptyLayout,
    #[error("Board exceeds the maximum tile count")]
    BoardTooLarge,
    #[error("Number range is empty or allows values below 1")]
    InvalidNumberRange,
    #[error("Chain bounds are empty or allow zero-length chains")]
    InvalidChainBounds,
    #[error("Board does not match the declared layout")]
    InvalidBoardShape,
    #[error("Cube coordinates do not sum to zero")]
    InvalidCoords,
    #[error("Unknown tile id")]
    UnknownTile,
    #[error("Snapshot does not match the board")]
    SnapshotMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
