//! Battle decks and deck construction.
//!
//! - `Deck`: ordered combatants, active first, bench after
//! - `DeckBuilder`: shuffles a roster and pads it with placeholders

pub mod battle_deck;
pub mod builder;

pub use battle_deck::Deck;
pub use builder::DeckBuilder;
