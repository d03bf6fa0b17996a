//! Commands accepted from the UI/RPC layer and their history.

use serde::{Deserialize, Serialize};

use crate::battle::Rejection;
use crate::cards::Combatant;

/// A command driving one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleCommand {
    /// Start (or restart) the battle from two rosters.
    Start {
        my_side: String,
        my_roster: Vec<Combatant>,
        opponent_side: String,
        opponent_roster: Vec<Combatant>,
    },
    /// Attack with my active combatant.
    Attack,
    /// Swap my active combatant with a bench slot.
    Retreat { bench_index: usize },
}

impl BattleCommand {
    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            BattleCommand::Start { .. } => "start",
            BattleCommand::Attack => "attack",
            BattleCommand::Retreat { .. } => "retreat",
        }
    }
}

/// A command as it was processed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Turn at which the command was received.
    pub turn: u32,
    /// The command.
    pub command: BattleCommand,
    /// Why it was ignored, if it was.
    pub rejection: Option<Rejection>,
}

impl ActionRecord {
    #[must_use]
    pub fn applied(&self) -> bool {
        self.rejection.is_none()
    }
}
