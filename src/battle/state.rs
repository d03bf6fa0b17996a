//! Battle state: the aggregate every transition produces.
//!
//! A `BattleState` is a plain value. Engine operations take a state by
//! reference and return a new one; the `im` collections inside make the
//! copy O(1). The logs are kept newest-first.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::BattleEvent;
use crate::core::{Side, SideMap};
use crate::deck::Deck;

/// Where a battle is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No winner yet; commands are accepted.
    Active,
    /// A winner is set; every command is a no-op.
    Concluded,
}

/// One side's share of the battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideState {
    /// Display name of the side (the circle name).
    pub name: String,
    /// Remaining combatants, active first.
    pub deck: Deck,
    /// Knockouts this side can still absorb.
    pub lives: u32,
}

impl SideState {
    pub fn new(name: impl Into<String>, deck: Deck, lives: u32) -> Self {
        Self {
            name: name.into(),
            deck,
            lives,
        }
    }
}

/// Complete state of one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    /// Per-side decks and lives.
    pub sides: SideMap<SideState>,

    /// Turn number (starts at 1, +1 per accepted command).
    pub turn: u32,

    /// Human-readable battle log, newest first.
    pub logs: Vector<String>,

    /// Winning side once the battle is over.
    pub winner: Option<Side>,
}

impl BattleState {
    /// Create a fresh state at turn 1 with an empty log.
    #[must_use]
    pub fn new(mine: SideState, opponent: SideState) -> Self {
        Self {
            sides: SideMap::from_pair(mine, opponent),
            turn: 1,
            logs: Vector::new(),
            winner: None,
        }
    }

    #[must_use]
    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side]
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        &mut self.sides[side]
    }

    #[must_use]
    pub fn my_deck(&self) -> &Deck {
        &self.sides[Side::Mine].deck
    }

    #[must_use]
    pub fn opponent_deck(&self) -> &Deck {
        &self.sides[Side::Opponent].deck
    }

    #[must_use]
    pub fn my_lives(&self) -> u32 {
        self.sides[Side::Mine].lives
    }

    #[must_use]
    pub fn opponent_lives(&self) -> u32 {
        self.sides[Side::Opponent].lives
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Concluded
        } else {
            Phase::Active
        }
    }

    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.phase() == Phase::Concluded
    }

    /// Most recent log line.
    #[must_use]
    pub fn latest_log(&self) -> Option<&str> {
        self.logs.front().map(String::as_str)
    }

    /// Prepend the rendered event to the log.
    pub fn record(&mut self, event: &BattleEvent) {
        self.logs.push_front(event.to_string());
    }
}
