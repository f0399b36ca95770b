#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use card::*;
pub use catalog::*;
pub use deck::*;
pub use engine::*;
pub use error::*;
pub use layout::*;
pub use ports::*;
pub use snapshot::*;
pub use types::*;

mod card;
mod catalog;
mod deck;
mod engine;
mod error;
mod layout;
mod ports;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: Coord,
    pub columns: Coord,
}

impl GridConfig {
    pub const fn new(rows: Coord, columns: Coord) -> Self {
        Self { rows, columns }
    }

    pub const fn total_cards(&self) -> CardCount {
        mult(self.rows, self.columns)
    }

    /// Number of distinct identities needed: `rows * columns / 2`.
    pub const fn pair_count(&self) -> CardCount {
        self.total_cards() / 2
    }

    /// Pairs must be whole, so the grid needs a non-zero even card count.
    pub fn validate(&self) -> Result<()> {
        let total = self.total_cards();
        if total == 0 || total % 2 != 0 {
            return Err(GameError::UnevenGrid);
        }
        Ok(())
    }
}
