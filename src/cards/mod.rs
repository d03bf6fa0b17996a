//! Cards: combatants, generated stats, and the card pool adapter.
//!
//! ## Key Types
//!
//! - `Combatant`: a card as it fights (hit points, attack)
//! - `CardRecord`: a stored member card without battle stats
//! - `CardPool`: supplies a side's roster and display name
//!
//! Placeholder combatants are plain `Combatant`s named after
//! `PlaceholderConfig::name`; there is no separate type tag.

pub mod combatant;
pub mod stats;
pub mod pool;

pub use combatant::{CardId, Combatant};
pub use stats::{generate_stats, BattleStats, DEFAULT_FLAVOR};
pub use pool::{fetch_roster, fetch_side_name, mock_roster, CardPool, CardRecord, InMemoryCardPool};
