//! Card pool adapter: where a side's roster comes from.
//!
//! The engine never looks cards up itself. Callers resolve a roster
//! through a `CardPool` (backed by whatever document store the app uses)
//! and hand the resulting `Vec<Combatant>` to the engine.
//!
//! `InMemoryCardPool` is the reference implementation, used by tests
//! and local play.

use log::warn;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::combatant::Combatant;
use super::stats::generate_stats;
use crate::core::{PoolError, RosterConfig};

/// A member card as stored by the app, without battle stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    pub grade: u32,
    pub circle_id: String,
}

impl CardRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        grade: u32,
        circle_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grade,
            circle_id: circle_id.into(),
        }
    }

    /// Build a full-health combatant with generated stats.
    #[must_use]
    pub fn to_combatant(&self) -> Combatant {
        let stats = generate_stats(&self.id, self.grade);
        Combatant::new(self.id.clone(), self.name.clone(), stats.max_hp, stats.attack)
            .with_grade(self.grade)
            .with_flavor(stats.flavor)
    }
}

/// Supplies rosters and display names for sides (circles).
pub trait CardPool {
    /// All fighters available to a side, in storage order.
    fn roster(&self, side_id: &str) -> Result<Vec<Combatant>, PoolError>;

    /// Display name of a side.
    fn side_name(&self, side_id: &str) -> Result<String, PoolError>;
}

/// Circle metadata and member cards held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCardPool {
    names: FxHashMap<String, String>,
    cards: FxHashMap<String, Vec<CardRecord>>,
    max_roster: usize,
}

impl InMemoryCardPool {
    /// Create an empty pool capping rosters at `config.max_roster` cards.
    #[must_use]
    pub fn new(config: &RosterConfig) -> Self {
        Self {
            names: FxHashMap::default(),
            cards: FxHashMap::default(),
            max_roster: config.max_roster,
        }
    }

    /// Register a circle.
    pub fn add_circle(&mut self, circle_id: impl Into<String>, name: impl Into<String>) {
        let circle_id = circle_id.into();
        self.cards.entry(circle_id.clone()).or_default();
        self.names.insert(circle_id, name.into());
    }

    /// Add a member card to its circle.
    pub fn add_card(&mut self, record: CardRecord) {
        self.cards.entry(record.circle_id.clone()).or_default().push(record);
    }
}

impl CardPool for InMemoryCardPool {
    fn roster(&self, side_id: &str) -> Result<Vec<Combatant>, PoolError> {
        let records = self
            .cards
            .get(side_id)
            .ok_or_else(|| PoolError::UnknownSide(side_id.to_string()))?;

        if records.is_empty() {
            return Err(PoolError::EmptyRoster(side_id.to_string()));
        }

        Ok(records
            .iter()
            .take(self.max_roster)
            .map(CardRecord::to_combatant)
            .collect())
    }

    fn side_name(&self, side_id: &str) -> Result<String, PoolError> {
        self.names
            .get(side_id)
            .cloned()
            .ok_or_else(|| PoolError::UnknownSide(side_id.to_string()))
    }
}

/// Generate a stand-in roster for a side whose cards could not be loaded.
///
/// Cards are named `Card {i}` with ids `{prefix}-card-{i}` and grade 1.
#[must_use]
pub fn mock_roster(prefix: &str, count: usize) -> Vec<Combatant> {
    (0..count)
        .map(|i| CardRecord::new(format!("{prefix}-card-{i}"), format!("Card {i}"), 1, prefix).to_combatant())
        .collect()
}

/// Fetch a roster, falling back to a mock roster when configured to.
pub fn fetch_roster<P>(pool: &P, side_id: &str, config: &RosterConfig) -> Result<Vec<Combatant>, PoolError>
where
    P: CardPool + ?Sized,
{
    match pool.roster(side_id) {
        Ok(roster) => Ok(roster),
        Err(err) if config.mock_fallback => {
            warn!("falling back to mock roster for circle {side_id}: {err}");
            Ok(mock_roster(side_id, config.mock_size))
        }
        Err(err) => Err(err),
    }
}

/// Fetch a side's display name, falling back to `Circle {id}`.
pub fn fetch_side_name<P>(pool: &P, side_id: &str) -> String
where
    P: CardPool + ?Sized,
{
    pool.side_name(side_id).unwrap_or_else(|err| {
        warn!("failed to get name of circle {side_id}: {err}");
        format!("Circle {side_id}")
    })
}
