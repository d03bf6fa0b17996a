//! Deck construction: shuffle a roster and pad it to deck size.

use log::debug;

use super::battle_deck::Deck;
use crate::cards::Combatant;
use crate::core::{shuffle, BattleConfig, PlaceholderConfig, RandomSource, Side};

/// Builds fixed-size battle decks from rosters.
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    size: usize,
    placeholder: PlaceholderConfig,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::from_config(&BattleConfig::default())
    }
}

impl DeckBuilder {
    #[must_use]
    pub fn from_config(config: &BattleConfig) -> Self {
        Self {
            size: config.deck_size,
            placeholder: config.placeholder.clone(),
        }
    }

    /// Build a deck of exactly `size` combatants.
    ///
    /// The roster is shuffled uniformly and the first `size` entries are
    /// kept. Short rosters are padded with placeholders after the real
    /// cards, so real cards always occupy the front of the deck.
    ///
    /// Placeholder ids are `recruit-{side}-{slot}`, unique within a battle.
    pub fn build<R>(&self, side: Side, mut roster: Vec<Combatant>, rng: &mut R) -> Deck
    where
        R: RandomSource + ?Sized,
    {
        shuffle(&mut roster, rng);
        roster.truncate(self.size);

        let real = roster.len();
        for slot in real..self.size {
            roster.push(Combatant::placeholder(format!("recruit-{side}-{slot}"), &self.placeholder));
        }

        debug!("built {side} deck: {} real, {} placeholder", real, self.size - real);
        Deck::new(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn roster(n: usize) -> Vec<Combatant> {
        (0..n)
            .map(|i| Combatant::new(format!("c{i}"), format!("Card {i}"), 300, 100))
            .collect()
    }

    #[test]
    fn test_large_roster_truncated() {
        let builder = DeckBuilder::default();
        let deck = builder.build(Side::Mine, roster(12), &mut GameRng::new(1));
        assert_eq!(deck.len(), 5);
        assert!(deck.iter().all(|c| !c.is_placeholder(&PlaceholderConfig::default())));
    }

    #[test]
    fn test_short_roster_padded() {
        let builder = DeckBuilder::default();
        let stats = PlaceholderConfig::default();
        let deck = builder.build(Side::Mine, roster(2), &mut GameRng::new(1));

        assert_eq!(deck.len(), 5);
        let flags: Vec<_> = deck.iter().map(|c| c.is_placeholder(&stats)).collect();
        assert_eq!(flags, vec![false, false, true, true, true]);
        assert_eq!(deck.get(4).unwrap().attack, 150);
        assert_eq!(deck.get(4).unwrap().current_hp, 600);
    }

    #[test]
    fn test_empty_roster_all_placeholders() {
        let deck = DeckBuilder::default().build(Side::Mine, Vec::new(), &mut GameRng::new(5));
        assert_eq!(deck.len(), 5);
        assert!(deck.iter().all(|c| c.name == crate::core::PLACEHOLDER_NAME));
    }

    #[test]
    fn test_same_seed_same_deck() {
        let builder = DeckBuilder::default();
        let a = builder.build(Side::Mine, roster(9), &mut GameRng::new(77));
        let b = builder.build(Side::Mine, roster(9), &mut GameRng::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_configured_size() {
        let config = BattleConfig::default().with_deck_size(3);
        let deck = DeckBuilder::from_config(&config).build(Side::Mine, roster(1), &mut GameRng::new(2));
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_placeholder_ids_unique_across_sides() {
        let builder = DeckBuilder::default();
        let mut rng = GameRng::new(3);
        let mine = builder.build(Side::Mine, roster(1), &mut rng);
        let theirs = builder.build(Side::Opponent, Vec::new(), &mut rng);

        let ids: std::collections::BTreeSet<_> = mine.iter().chain(theirs.iter()).map(|c| c.id.to_string()).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(mine.get(1).unwrap().id.as_str(), "recruit-mine-1");
        assert_eq!(theirs.get(0).unwrap().id.as_str(), "recruit-opponent-0");
    }
}
