//! Opponent policies: how the adversary answers a player command.
//!
//! The engine hands the policy the state right after the player's own
//! action and a `Combat` context. Policies resolve the counter through
//! `Combat::strike`, so every rule (damage roll, clamping, knockouts,
//! promotion, victory) applies to them unchanged.

use crate::battle::{BattleState, Combat};
use crate::core::Side;

/// Strategy for the opponent's counter-response.
pub trait OpponentPolicy: Send + Sync {
    /// Resolve the opponent's response within the current transition.
    fn resolve_counter(&self, state: BattleState, combat: &mut Combat<'_>) -> BattleState;
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn resolve_counter(&self, state: BattleState, combat: &mut Combat<'_>) -> BattleState {
        (**self).resolve_counter(state, combat)
    }
}

/// Always attack with the active combatant.
///
/// Never retreats and never passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysAttack;

impl OpponentPolicy for AlwaysAttack {
    fn resolve_counter(&self, mut state: BattleState, combat: &mut Combat<'_>) -> BattleState {
        combat.strike(&mut state, Side::Opponent);
        state
    }
}
