use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Opaque reference to a piece of artwork (a sprite path, atlas key, ...).
///
/// The engine never interprets the contents; it only hands them to the flip
/// port at the transition midpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

/// Immutable card identity: a unique name plus its front artwork.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardIdentity {
    name: String,
    front: AssetRef,
}

impl CardIdentity {
    pub fn new(name: impl Into<String>, front: AssetRef) -> Self {
        Self {
            name: name.into(),
            front,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn front(&self) -> &AssetRef {
        &self.front
    }
}

/// Read-only collection of available card identities plus the shared back face.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    back: AssetRef,
    cards: Vec<CardIdentity>,
}

impl Catalog {
    /// Duplicate names are dropped (first entry wins): a repeated identity
    /// would break the exactly-two-copies deck invariant.
    pub fn new(back: AssetRef, cards: Vec<CardIdentity>) -> Self {
        let mut unique: Vec<CardIdentity> = Vec::with_capacity(cards.len());
        for card in cards {
            if unique.iter().any(|known| known.name() == card.name()) {
                log::warn!("Duplicate card identity {:?} dropped from catalog", card.name());
                continue;
            }
            unique.push(card);
        }
        Self {
            back,
            cards: unique,
        }
    }

    pub fn back(&self) -> &AssetRef {
        &self.back
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardIdentity> {
        self.cards.iter()
    }

    pub fn lookup(&self, name: &str) -> Option<&CardIdentity> {
        self.cards.iter().find(|card| card.name() == name)
    }

    /// Whether the catalog can supply `pair_count` distinct identities.
    pub fn can_supply(&self, pair_count: CardCount) -> bool {
        self.cards.len() >= pair_count as usize
    }
}
