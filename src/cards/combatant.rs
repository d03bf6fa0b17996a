//! Combatants - the battle-relevant view of a circle member's card.
//!
//! A `Combatant` carries both an immutable hit point ceiling (`max_hp`)
//! and the hit points it has left in the current battle (`current_hp`).
//! Damage only ever lowers `current_hp`, clamped at zero.

use serde::{Deserialize, Serialize};

use crate::core::PlaceholderConfig;

/// Identifier of a card, stable for the lifetime of a battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card taking part in a battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combatant {
    /// Card identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Hit point ceiling; never changes during a battle.
    pub max_hp: u32,

    /// Remaining hit points, `0..=max_hp`.
    pub current_hp: u32,

    /// Base damage stat.
    pub attack: u32,

    /// Academic grade of the member the card depicts (1-4, 0 if unknown).
    #[serde(default)]
    pub grade: u32,

    /// Flavor text.
    #[serde(default)]
    pub flavor: String,
}

impl Combatant {
    /// Create a combatant at full health.
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_hp: u32, attack: u32) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            max_hp,
            current_hp: max_hp,
            attack,
            grade: 0,
            flavor: String::new(),
        }
    }

    /// Create a placeholder combatant from the configured baseline stats.
    pub fn placeholder(id: impl Into<String>, stats: &PlaceholderConfig) -> Self {
        Self {
            grade: 1,
            flavor: stats.flavor.clone(),
            ..Self::new(id, stats.name.clone(), stats.max_hp, stats.attack)
        }
    }

    /// Set the grade.
    #[must_use]
    pub fn with_grade(mut self, grade: u32) -> Self {
        self.grade = grade;
        self
    }

    /// Set the flavor text.
    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    /// Is this a synthetic combatant padding a short roster?
    ///
    /// Placeholders are only recognizable by name.
    #[must_use]
    pub fn is_placeholder(&self, stats: &PlaceholderConfig) -> bool {
        self.name == stats.name
    }

    /// Has this combatant been knocked out?
    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.current_hp == 0
    }

    /// A copy of this combatant after taking `damage`, clamped at zero.
    #[must_use]
    pub fn damaged(&self, damage: u32) -> Self {
        Self {
            current_hp: self.current_hp.saturating_sub(damage),
            ..self.clone()
        }
    }
}
