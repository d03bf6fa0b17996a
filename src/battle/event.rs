//! Battle events and their log lines.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Something that happened during a transition.
///
/// Rendering an event with `Display` gives the line written to
/// `BattleState::logs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    BattleStarted { mine: String, opponent: String },
    Attacked { attacker: String, defender: String, damage: u32 },
    Fell { name: String },
    Promoted { side_name: String, name: String },
    Retreated { side_name: String, from: String, to: String },
    Victory { side: Side, side_name: String },
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleEvent::BattleStarted { mine, opponent } => {
                write!(f, "Battle Start! {mine} vs {opponent}")
            }
            BattleEvent::Attacked { attacker, defender, damage } => {
                write!(f, "{attacker} attacked {defender} for {damage} damage!")
            }
            BattleEvent::Fell { name } => write!(f, "{name} fell!"),
            BattleEvent::Promoted { side_name, name } => write!(f, "{side_name} sent out {name}!"),
            BattleEvent::Retreated { side_name, from, to } => {
                write!(f, "{side_name} swapped {from} for {to}!")
            }
            BattleEvent::Victory { side_name, .. } => write!(f, "{side_name} wins!"),
        }
    }
}
