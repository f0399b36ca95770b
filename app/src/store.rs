use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parejita_core::{GameError, GameSnapshot};
use thiserror::Error;

/// Name of the single save record per installation.
pub const SAVE_FILE_NAME: &str = "gamedata.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Durable store for exactly one game snapshot.
///
/// Absence of the record is a normal outcome, not an error; corrupt content
/// surfaces as [`GameError::CorruptSave`] through the codec's validation.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveSlot {
    path: PathBuf,
}

impl SaveSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot at the conventional file name inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SAVE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn save(&self, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        fs::write(&self.path, snapshot.to_json())?;
        log::debug!("Game data saved to {}", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<Option<GameSnapshot>, StoreError> {
        if !self.exists() {
            log::debug!("No save file at {}", self.path.display());
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let snapshot = GameSnapshot::from_json(&json)?;
        log::debug!("Game data loaded from {}", self.path.display());
        Ok(Some(snapshot))
    }

    pub fn delete(&self) -> Result<(), StoreError> {
        if self.exists() {
            fs::remove_file(&self.path)?;
            log::debug!("Save file deleted from {}", self.path.display());
        } else {
            log::warn!("Could not delete save file, not found at {}", self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Unique throwaway slot under the system temp directory.
    pub(crate) fn temp_slot(tag: &str) -> SaveSlot {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let name = format!("parejita-{tag}-{}-{nanos}.json", std::process::id());
        SaveSlot::new(std::env::temp_dir().join(name))
    }

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            score: 10,
            turns: 2,
            matches: 1,
            rows: 2,
            columns: 2,
            card_layout_names: ["sol", "luna", "sol", "luna"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            card_is_matched: vec![true, false, true, false],
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let slot = temp_slot("roundtrip");
        let original = snapshot();

        slot.save(&original).unwrap();
        assert!(slot.exists());
        let restored = slot.load().unwrap().unwrap();
        assert_eq!(original, restored);

        slot.delete().unwrap();
    }

    #[test]
    fn loading_an_absent_slot_is_not_an_error() {
        let slot = temp_slot("absent");
        assert!(!slot.exists());
        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn delete_makes_the_slot_absent() {
        let slot = temp_slot("delete");
        slot.save(&snapshot()).unwrap();
        slot.delete().unwrap();
        assert!(!slot.exists());

        // deleting again warns but stays ok
        slot.delete().unwrap();
    }

    #[test]
    fn corrupt_content_is_reported_as_unusable() {
        let slot = temp_slot("corrupt");
        fs::write(slot.path(), "{definitely not a snapshot").unwrap();

        match slot.load() {
            Err(StoreError::Game(GameError::CorruptSave)) => {}
            other => panic!("expected CorruptSave, got {other:?}"),
        }

        slot.delete().unwrap();
    }

    #[test]
    fn in_dir_appends_the_conventional_name() {
        let slot = SaveSlot::in_dir("/tmp/somewhere");
        assert!(slot.path().ends_with(SAVE_FILE_NAME));
    }
}
