use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Complete, loadable description of an in-progress game.
///
/// Field names keep the original on-disk schema, so saves written by earlier
/// builds stay loadable. The combo streak is deliberately absent: it resets on
/// every restore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub score: u32,
    pub turns: u32,
    pub matches: CardCount,
    pub rows: Coord,
    pub columns: Coord,
    /// Identity name of each card in position order.
    pub card_layout_names: Vec<String>,
    /// Matched flag of the card at the same index.
    pub card_is_matched: Vec<bool>,
}

impl GameSnapshot {
    /// Structural validation; anything that fails here is treated as "no
    /// usable save" by the caller.
    pub fn validate(&self) -> Result<()> {
        let config = GridConfig {
            rows: self.rows,
            columns: self.columns,
        };
        config.validate().map_err(|_| GameError::CorruptSave)?;

        let total = config.total_cards() as usize;
        if self.card_layout_names.len() != total || self.card_is_matched.len() != total {
            log::warn!(
                "Snapshot layout length {} / matched length {} does not cover a {}x{} grid",
                self.card_layout_names.len(),
                self.card_is_matched.len(),
                self.rows,
                self.columns
            );
            return Err(GameError::CorruptSave);
        }

        for name in &self.card_layout_names {
            let positions: Vec<Position> = self
                .card_layout_names
                .iter()
                .enumerate()
                .filter(|(_, other)| other.as_str() == name.as_str())
                .map(|(pos, _)| pos)
                .collect();
            if positions.len() != 2 {
                log::warn!("Snapshot contains {} copies of {:?}", positions.len(), name);
                return Err(GameError::CorruptSave);
            }
            // matches resolve pairwise, so both copies carry the same flag
            if self.card_is_matched[positions[0]] != self.card_is_matched[positions[1]] {
                log::warn!("Snapshot has a half-matched pair for {:?}", name);
                return Err(GameError::CorruptSave);
            }
        }

        let matched_pairs = self.card_is_matched.iter().filter(|&&flag| flag).count() / 2;
        if self.matches as usize != matched_pairs {
            log::warn!(
                "Snapshot records {} matches but {} matched pairs",
                self.matches,
                matched_pairs
            );
            return Err(GameError::CorruptSave);
        }

        Ok(())
    }

    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Encode to the durable JSON form.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("snapshot serialization is infallible")
    }

    /// Decode and validate the durable JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json).map_err(|err| {
            log::warn!("Snapshot failed to decode: {err}");
            GameError::CorruptSave
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
