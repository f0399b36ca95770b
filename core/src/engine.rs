use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    /// Grid dealt (or empty), no card selected yet.
    Ready,
    Active,
    Completed,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Global turn state. `Resolving` carries exactly the two open positions, so
/// the at-most-two-open invariant holds by construction.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurnPhase {
    Idle,
    OneOpen(Position),
    Resolving(Position, Position),
}

impl TurnPhase {
    pub const fn open_count(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::OneOpen(_) => 1,
            Self::Resolving(_, _) => 2,
        }
    }

    pub const fn is_resolving(self) -> bool {
        matches!(self, Self::Resolving(_, _))
    }
}

impl Default for TurnPhase {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub score: u32,
    pub turns: u32,
    pub matches: CardCount,
    /// Consecutive matches with no intervening mismatch.
    pub combo_streak: u16,
}

/// Outcome of a single card selection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    /// Matched, already face up, mid-resolution, or game over: state unchanged.
    Ignored,
    Opened,
    /// Second card opened; the turn is pending `resolve_turn`.
    PairOpened,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Outcome of resolving an open pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TurnOutcome {
    NoChange,
    Matched,
    Mismatched,
    /// Final pair matched; no further cards may be selected.
    Finished,
}

impl TurnOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Orchestrates turns over an arena of card slots indexed by stable position.
///
/// All state mutation happens on the caller's single logical thread; the
/// injected ports receive already-committed transitions and play cosmetic
/// effects downstream.
pub struct MatchEngine {
    catalog: Catalog,
    config: Option<GridConfig>,
    cards: Vec<CardSlot>,
    phase: TurnPhase,
    stats: GameStats,
    state: EngineState,
    audio: Box<dyn AudioPort>,
    flips: Box<dyn FlipPort>,
}

impl MatchEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_ports(catalog, Box::new(NullAudio), Box::new(NullFlips))
    }

    pub fn with_ports(catalog: Catalog, audio: Box<dyn AudioPort>, flips: Box<dyn FlipPort>) -> Self {
        Self {
            catalog,
            config: None,
            cards: Vec::new(),
            phase: TurnPhase::Idle,
            stats: GameStats::default(),
            state: EngineState::Ready,
            audio,
            flips,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn grid_config(&self) -> Option<GridConfig> {
        self.config
    }

    pub fn pair_count(&self) -> CardCount {
        self.config.map_or(0, |config| config.pair_count())
    }

    pub fn card_at(&self, position: Position) -> Option<&CardSlot> {
        self.cards.get(position)
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardSlot> {
        self.cards.iter()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Front artwork for the card at `position`. A name missing from the
    /// catalog yields `None` (blank art); the card keeps participating in
    /// match logic by name.
    pub fn front_art(&self, position: Position) -> Option<&AssetRef> {
        let card = self.cards.get(position)?;
        front_art(&self.catalog, card.name())
    }

    /// Clears the grid and stats, then deals a fresh shuffled grid.
    ///
    /// On error nothing changes: a failed deal never leaves a half-built
    /// grid, and an existing game survives untouched.
    pub fn distribute(&mut self, config: GridConfig, mut builder: impl DeckBuilder) -> Result<()> {
        config.validate()?;
        let deck = builder.build(config.pair_count(), &self.catalog)?;

        // also covers distribute arriving mid-resolution
        self.reset();
        self.config = Some(config);
        self.cards = deck.into_iter().map(CardSlot::new).collect();
        log::debug!(
            "Dealt {} cards as {}x{}",
            self.cards.len(),
            config.rows,
            config.columns
        );
        Ok(())
    }

    /// Clears the grid and stats without building a new deck.
    pub fn reset(&mut self) {
        self.config = None;
        self.cards.clear();
        self.phase = TurnPhase::Idle;
        self.stats = GameStats::default();
        self.state = EngineState::Ready;
    }

    /// Player selection. No-ops never mutate state or stats.
    pub fn select_card(&mut self, position: Position) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        if position >= self.cards.len() {
            return Err(GameError::InvalidPosition);
        }

        if self.state.is_finished() || self.phase.is_resolving() {
            log::trace!("Selection at {position} ignored, not accepting input");
            return Ok(Ignored);
        }

        if !self.cards[position].is_selectable() {
            log::trace!("Selection at {position} ignored, card not selectable");
            return Ok(Ignored);
        }

        self.cards[position].flip_up();
        self.audio.play(SfxEvent::Flip);
        let art = front_art(&self.catalog, self.cards[position].name());
        self.flips.begin_flip(position, Face::Up, art);

        if matches!(self.state, EngineState::Ready) {
            self.state = EngineState::Active;
        }

        Ok(match self.phase {
            TurnPhase::Idle => {
                self.phase = TurnPhase::OneOpen(position);
                Opened
            }
            TurnPhase::OneOpen(first) => {
                // entering Resolving and counting the turn commit together
                self.phase = TurnPhase::Resolving(first, position);
                self.stats.turns += 1;
                log::debug!("Turn {}: comparing {first} and {position}", self.stats.turns);
                PairOpened
            }
            // rejected by the guard above
            TurnPhase::Resolving(_, _) => Ignored,
        })
    }

    /// Commits the pending match or mismatch outcome and returns to `Idle`.
    ///
    /// The logical state change is authoritative immediately; flip-back
    /// animation is issued to the port and plays out independently.
    pub fn resolve_turn(&mut self) -> TurnOutcome {
        use TurnOutcome::*;

        let TurnPhase::Resolving(first, second) = self.phase else {
            return NoChange;
        };
        self.phase = TurnPhase::Idle;

        if self.cards[first].name() == self.cards[second].name() {
            self.cards[first].mark_matched();
            self.cards[second].mark_matched();
            self.stats.matches += 1;
            self.stats.combo_streak += 1;
            // the multiplier applies to this match's own award only
            self.stats.score += 10 * u32::from(self.stats.combo_streak);
            self.audio.play(SfxEvent::Match);
            log::debug!(
                "Match at ({first}, {second}), streak {}, score {}",
                self.stats.combo_streak,
                self.stats.score
            );

            if self.stats.matches >= self.pair_count() {
                self.state = EngineState::Completed;
                self.audio.play(SfxEvent::Finish);
                log::debug!(
                    "All {} pairs found in {} turns",
                    self.stats.matches,
                    self.stats.turns
                );
                Finished
            } else {
                Matched
            }
        } else {
            self.stats.combo_streak = 0;
            for position in [first, second] {
                self.cards[position].flip_down();
                self.audio.play(SfxEvent::Flip);
                self.flips.begin_flip(position, Face::Down, Some(self.catalog.back()));
            }
            log::debug!("Mismatch at ({first}, {second})");
            Mismatched
        }
    }

    /// Complete description of the current game, or `None` before any deal.
    ///
    /// A pending open selection is not part of the snapshot; restoring always
    /// yields an `Idle` grid.
    pub fn snapshot(&self) -> Option<GameSnapshot> {
        let config = self.config?;
        Some(GameSnapshot {
            score: self.stats.score,
            turns: self.stats.turns,
            matches: self.stats.matches,
            rows: config.rows,
            columns: config.columns,
            card_layout_names: self.cards.iter().map(|card| card.name().to_string()).collect(),
            card_is_matched: self.cards.iter().map(CardSlot::is_matched).collect(),
        })
    }

    /// Replays a snapshot into a consistent grid: matched cards face up,
    /// everything else face down, turn state `Idle`, combo streak cleared.
    pub fn restore(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        snapshot.validate()?;

        self.reset();
        let config = snapshot.grid_config();
        self.config = Some(config);
        self.cards = snapshot
            .card_layout_names
            .iter()
            .zip(&snapshot.card_is_matched)
            .map(|(name, &matched)| CardSlot::restored(name.clone(), matched))
            .collect();

        let mut unknown: Vec<&str> = Vec::new();
        for card in &self.cards {
            if self.catalog.lookup(card.name()).is_none() && !unknown.contains(&card.name()) {
                unknown.push(card.name());
            }
        }
        for name in unknown {
            log::warn!("Restored card {name:?} has no catalog entry, art will be blank");
        }

        self.stats = GameStats {
            score: snapshot.score,
            turns: snapshot.turns,
            matches: snapshot.matches,
            combo_streak: 0,
        };
        self.state = if snapshot.matches >= config.pair_count() {
            EngineState::Completed
        } else if snapshot.turns > 0 {
            EngineState::Active
        } else {
            EngineState::Ready
        };
        Ok(())
    }
}

impl core::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("config", &self.config)
            .field("cards", &self.cards)
            .field("phase", &self.phase)
            .field("stats", &self.stats)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn front_art<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a AssetRef> {
    let art = catalog.lookup(name).map(CardIdentity::front);
    if art.is_none() {
        log::warn!("No front artwork for card {name:?}");
    }
    art
}
