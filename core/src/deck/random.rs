use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::*;

/// Draws `pair_count` distinct identities from the catalog without
/// replacement, duplicates them into pairs, and applies a uniform in-place
/// shuffle. Reproducible under a fixed seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomDeckBuilder {
    seed: u64,
}

impl RandomDeckBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckBuilder for RandomDeckBuilder {
    fn build(&mut self, pair_count: CardCount, catalog: &Catalog) -> Result<Vec<String>> {
        use rand::prelude::*;

        if !catalog.can_supply(pair_count) {
            log::warn!(
                "Catalog has {} identities, cannot supply {} pairs",
                catalog.len(),
                pair_count
            );
            return Err(GameError::InsufficientCatalog);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);

        // uniform index selection from a shrinking candidate pool
        let mut candidates: Vec<&str> = catalog.iter().map(|card| card.name()).collect();
        let mut selected: Vec<String> = Vec::with_capacity(pair_count as usize);
        for _ in 0..pair_count {
            let pick = rng.random_range(0..candidates.len());
            selected.push(candidates.swap_remove(pick).to_string());
        }

        let mut deck: Vec<String> = Vec::with_capacity(2 * pair_count as usize);
        deck.extend(selected.iter().cloned());
        deck.extend(selected);
        // Fisher-Yates, not a sort-by-random-key scheme
        deck.shuffle(&mut rng);
        Ok(deck)
    }
}
