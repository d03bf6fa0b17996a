//! Battle resolution: state, events, strike rules and the engine.
//!
//! ## Key Types
//!
//! - `BattleState`: decks, lives, turn, logs, winner
//! - `Combat`: strike resolution shared by both sides
//! - `BattleEngine`: `initialize` / `attack` / `retreat`
//! - `Transition`: new state plus applied/rejected outcome

pub mod state;
pub mod event;
pub mod combat;
pub mod engine;

pub use state::{BattleState, Phase, SideState};
pub use event::BattleEvent;
pub use combat::{damage_bounds, Combat, EventBuffer, StrikeOutcome};
pub use engine::{BattleEngine, Outcome, Rejection, Transition};
