use std::time::{SystemTime, UNIX_EPOCH};

use parejita_core::{
    AudioPort, Catalog, FlipPort, GameError, GameStats, GridConfig, MatchEngine, Position,
    RandomDeckBuilder, SelectOutcome, TurnOutcome,
};

use crate::store::{SaveSlot, StoreError};

/// Ad-hoc seed entropy for casual shuffling; no cryptographic claims.
fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    nanos ^ u64::from(std::process::id()).rotate_left(32)
}

/// Command surface the menu drives: new game, continue, reset, and the
/// per-turn selection/resolution flow with autosave.
///
/// A snapshot is written after the initial deal and after every resolved
/// turn; the slot is deleted the moment the game completes. Returning to the
/// menu keeps the save file so Continue stays available.
pub struct Session {
    engine: MatchEngine,
    slot: SaveSlot,
}

impl Session {
    pub fn new(catalog: Catalog, slot: SaveSlot) -> Self {
        Self {
            engine: MatchEngine::new(catalog),
            slot,
        }
    }

    pub fn with_ports(
        catalog: Catalog,
        slot: SaveSlot,
        audio: Box<dyn AudioPort>,
        flips: Box<dyn FlipPort>,
    ) -> Self {
        Self {
            engine: MatchEngine::with_ports(catalog, audio, flips),
            slot,
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn stats(&self) -> GameStats {
        self.engine.stats()
    }

    pub fn has_save(&self) -> bool {
        self.slot.exists()
    }

    /// Deals a freshly seeded grid and persists the initial snapshot.
    pub fn new_game(&mut self, rows: u8, columns: u8) -> Result<(), StoreError> {
        let config = GridConfig::new(rows, columns);
        self.engine
            .distribute(config, RandomDeckBuilder::new(clock_seed()))?;
        self.persist()
    }

    /// Restores the persisted game if one exists and is usable.
    ///
    /// A corrupt or unreadable save is logged and treated as absent; the
    /// caller falls back to starting a new game.
    pub fn continue_game(&mut self) -> bool {
        match self.slot.load() {
            Ok(Some(snapshot)) => match self.engine.restore(&snapshot) {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("Saved game could not be restored: {err}");
                    false
                }
            },
            Ok(None) => false,
            Err(err) => {
                log::warn!("Saved game is unusable: {err}");
                false
            }
        }
    }

    pub fn select(&mut self, position: Position) -> Result<SelectOutcome, GameError> {
        self.engine.select_card(position)
    }

    /// Commits the open pair after the player-facing reveal delay and
    /// persists the result (or deletes the slot on completion).
    pub fn resolve(&mut self) -> Result<TurnOutcome, StoreError> {
        let outcome = self.engine.resolve_turn();
        match outcome {
            TurnOutcome::Finished => self.slot.delete()?,
            TurnOutcome::Matched | TurnOutcome::Mismatched => self.persist()?,
            TurnOutcome::NoChange => {}
        }
        Ok(outcome)
    }

    /// Back to the menu: clears the grid, keeps the save file.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(snapshot) = self.engine.snapshot() {
            self.slot.save(&snapshot)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::temp_slot;
    use parejita_core::{AssetRef, CardIdentity};

    fn catalog(identities: usize) -> Catalog {
        let cards = (0..identities)
            .map(|i| {
                let name = format!("card-{i}");
                let art = AssetRef::new(format!("cards/{name}.png"));
                CardIdentity::new(name, art)
            })
            .collect();
        Catalog::new(AssetRef::new("cards/back.png"), cards)
    }

    /// Positions of a not-yet-matched pair, scanning the dealt grid.
    fn unmatched_pair(session: &Session) -> (Position, Position) {
        let cards: Vec<_> = session.engine().cards().collect();
        for (first, card) in cards.iter().enumerate() {
            if card.is_matched() {
                continue;
            }
            for (second, other) in cards.iter().enumerate().skip(first + 1) {
                if !other.is_matched() && other.name() == card.name() {
                    return (first, second);
                }
            }
        }
        panic!("no unmatched pair left");
    }

    fn play_match(session: &mut Session) -> TurnOutcome {
        let (first, second) = unmatched_pair(session);
        assert!(session.select(first).unwrap().has_update());
        assert!(session.select(second).unwrap().has_update());
        session.resolve().unwrap()
    }

    #[test]
    fn new_game_persists_the_initial_deal() {
        let slot = temp_slot("deal");
        let mut session = Session::new(catalog(6), slot.clone());
        assert!(!session.has_save());

        session.new_game(2, 2).unwrap();
        assert!(session.has_save());
        assert_eq!(session.stats(), GameStats::default());

        session.reset();
        assert!(session.has_save(), "reset keeps the save for Continue");
        slot.delete().unwrap();
    }

    #[test]
    fn resolved_turns_autosave_and_completion_deletes() {
        let slot = temp_slot("autosave");
        let mut session = Session::new(catalog(6), slot.clone());
        session.new_game(2, 2).unwrap();

        assert_eq!(play_match(&mut session), TurnOutcome::Matched);
        assert!(session.has_save());
        let saved = slot.load().unwrap().unwrap();
        assert_eq!(saved.matches, 1);

        assert_eq!(play_match(&mut session), TurnOutcome::Finished);
        assert!(!session.has_save(), "completion deletes the slot");
    }

    #[test]
    fn continue_restores_progress_into_a_new_session() {
        let slot = temp_slot("continue");
        let mut session = Session::new(catalog(8), slot.clone());
        session.new_game(2, 3).unwrap();
        play_match(&mut session);

        let mut resumed = Session::new(catalog(8), slot.clone());
        assert!(resumed.continue_game());
        assert_eq!(resumed.stats().matches, 1);
        assert_eq!(resumed.stats().score, 10);
        assert_eq!(resumed.stats().combo_streak, 0);

        // identical layout, matched pair already revealed
        let dealt: Vec<_> = session.engine().cards().map(|c| c.name().to_string()).collect();
        let restored: Vec<_> = resumed.engine().cards().map(|c| c.name().to_string()).collect();
        assert_eq!(dealt, restored);

        slot.delete().unwrap();
    }

    #[test]
    fn continue_without_a_save_is_false() {
        let mut session = Session::new(catalog(4), temp_slot("nosave"));
        assert!(!session.continue_game());
    }

    #[test]
    fn corrupt_save_falls_back_to_no_resume() {
        let slot = temp_slot("badsave");
        std::fs::write(slot.path(), "not json at all").unwrap();

        let mut session = Session::new(catalog(4), slot.clone());
        assert!(!session.continue_game());

        slot.delete().unwrap();
    }

    #[test]
    fn new_game_with_a_starved_catalog_fails_cleanly() {
        let mut session = Session::new(catalog(2), temp_slot("starved"));
        assert!(session.new_game(4, 4).is_err());
        assert!(!session.has_save());
        assert_eq!(session.engine().cards().count(), 0);
    }
}
