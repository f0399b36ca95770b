use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::*;

pub use random::*;

mod random;

/// Produces a randomized placement sequence of identity names, each selected
/// identity appearing exactly twice.
pub trait DeckBuilder {
    fn build(&mut self, pair_count: CardCount, catalog: &Catalog) -> Result<Vec<String>>;
}

/// Deals a pre-scripted layout. Used for deterministic tests and demos.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedDeckBuilder {
    layout: Vec<String>,
}

impl FixedDeckBuilder {
    pub fn new(layout: &[&str]) -> Self {
        Self {
            layout: layout.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl DeckBuilder for FixedDeckBuilder {
    fn build(&mut self, pair_count: CardCount, _catalog: &Catalog) -> Result<Vec<String>> {
        if self.layout.len() != 2 * pair_count as usize {
            return Err(GameError::InvalidDeck);
        }
        for name in &self.layout {
            let copies = self.layout.iter().filter(|other| *other == name).count();
            if copies != 2 {
                return Err(GameError::InvalidDeck);
            }
        }
        Ok(self.layout.clone())
    }
}
