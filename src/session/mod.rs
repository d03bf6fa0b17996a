//! Command surface for one battle.
//!
//! - `BattleCommand`: start / attack / retreat
//! - `BattleSession`: applies commands, keeps history, guards turn order
//! - `BattleSnapshot`: bincode-encoded state for the persistence layer

pub mod command;
pub mod battle_session;
pub mod snapshot;

pub use command::{ActionRecord, BattleCommand};
pub use battle_session::BattleSession;
pub use snapshot::BattleSnapshot;
