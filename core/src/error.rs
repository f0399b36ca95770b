use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position outside the grid")]
    InvalidPosition,
    #[error("Grid size must be a non-zero even number of cards")]
    UnevenGrid,
    #[error("Catalog has fewer identities than the requested pair count")]
    InsufficientCatalog,
    #[error("Deck does not form whole pairs")]
    InvalidDeck,
    #[error("Snapshot failed structural validation")]
    CorruptSave,
}

pub type Result<T> = core::result::Result<T, GameError>;
