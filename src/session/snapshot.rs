//! Serializable battle snapshots.
//!
//! A snapshot holds everything needed to resume a battle elsewhere: the
//! state, the command history and the RNG position, so the resumed
//! battle rolls the same numbers the original would have.

use serde::{Deserialize, Serialize};

use super::command::ActionRecord;
use crate::battle::BattleState;
use crate::core::{GameRngState, SessionError};

/// A persisted battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub battle_id: String,
    pub state: BattleState,
    pub history: Vec<ActionRecord>,
    pub rng: GameRngState,
}

impl BattleSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
