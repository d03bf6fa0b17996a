//! # circle-battle
//!
//! Turn-based battle resolution for circle card decks.
//!
//! Two circles each field a deck of five cards. The player attacks or
//! retreats; the opponent answers within the same turn. Knockouts cost a
//! life and promote the next bench card; the first side out of lives
//! loses.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: engine operations take a state by reference
//!    and return a new one. Persistent `im` collections keep that cheap.
//!
//! 2. **Total commands**: invalid commands never fail; they return the
//!    input state with an explicit `Rejection`.
//!
//! 3. **Injected randomness**: shuffles and damage rolls come from a
//!    `RandomSource`, so battles replay exactly from a seed.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, errors
//! - `cards`: combatants, generated stats, card pool adapter
//! - `deck`: battle decks and the deck builder
//! - `battle`: state, events, strike rules, engine
//! - `policy`: opponent AI
//! - `session`: command surface, history, snapshots
//!
//! ## Example
//!
//! ```
//! use circle_battle::{BattleConfig, BattleEngine, Combatant, GameRng};
//!
//! let engine = BattleEngine::new(BattleConfig::default());
//! let mut rng = GameRng::new(42);
//! let roster = |n: usize| -> Vec<Combatant> {
//!     (0..n).map(|i| Combatant::new(format!("c{i}"), format!("Card {i}"), 300, 100)).collect()
//! };
//!
//! let state = engine.initialize("Chess Club", roster(5), "Go Club", roster(3), &mut rng);
//! let next = engine.attack(&state, &mut rng);
//!
//! assert!(next.is_applied());
//! assert_eq!(next.state.turn, 2);
//! ```

pub mod core;
pub mod cards;
pub mod deck;
pub mod battle;
pub mod policy;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, ConfigError, GameRng, GameRngState, PoolError, RandomSource, SessionError, Side, SideMap,
};

pub use crate::cards::{CardId, CardPool, CardRecord, Combatant, InMemoryCardPool};

pub use crate::deck::{Deck, DeckBuilder};

pub use crate::battle::{
    BattleEngine, BattleEvent, BattleState, Combat, Outcome, Phase, Rejection, SideState, StrikeOutcome, Transition,
};

pub use crate::policy::{AlwaysAttack, OpponentPolicy};

pub use crate::session::{ActionRecord, BattleCommand, BattleSession, BattleSnapshot};
