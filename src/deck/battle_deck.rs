//! The ordered deck a side fights with.
//!
//! Position 0 is the active combatant; the rest is the bench in
//! promotion order. Backed by `im::Vector` so that cloning a deck (and
//! therefore a whole battle state) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Combatant;

/// An ordered battle deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Combatant>,
}

impl Deck {
    /// Create a deck from combatants in order.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Combatant>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Number of combatants left, active included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The combatant currently exposed to attack.
    #[must_use]
    pub fn active(&self) -> Option<&Combatant> {
        self.cards.front()
    }

    /// Bench combatants in promotion order.
    pub fn bench(&self) -> impl Iterator<Item = &Combatant> {
        self.cards.iter().skip(1)
    }

    /// Number of bench combatants.
    #[must_use]
    pub fn bench_len(&self) -> usize {
        self.cards.len().saturating_sub(1)
    }

    /// Combatant at a deck position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Combatant> {
        self.cards.get(position)
    }

    /// All combatants, active first.
    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.cards.iter()
    }

    /// Replace the active combatant. No-op on an empty deck.
    pub fn replace_active(&mut self, combatant: Combatant) {
        if !self.cards.is_empty() {
            self.cards.set(0, combatant);
        }
    }

    /// Remove the active combatant, promoting the first bench combatant.
    pub fn remove_active(&mut self) -> Option<Combatant> {
        self.cards.pop_front()
    }

    /// Swap the active combatant with bench slot `bench_index` (0-based).
    ///
    /// Returns `false` without touching the deck if the slot does not exist.
    pub fn swap_with_bench(&mut self, bench_index: usize) -> bool {
        let position = match bench_index.checked_add(1) {
            Some(position) if position < self.cards.len() => position,
            _ => return false,
        };
        self.cards.swap(0, position);
        true
    }
}

impl FromIterator<Combatant> for Deck {
    fn from_iter<I: IntoIterator<Item = Combatant>>(iter: I) -> Self {
        Self::new(iter)
    }
}
