//! Strike resolution shared by player attacks and opponent counters.
//!
//! One strike: roll damage for the attacker's active combatant, apply it
//! to the defender's active combatant, and handle a knockout (life loss,
//! promotion, victory). Both sides go through the exact same rules.

use log::debug;
use smallvec::SmallVec;

use super::event::BattleEvent;
use super::state::BattleState;
use crate::core::{BattleConfig, RandomSource, Side};

/// Events buffered during one transition.
pub type EventBuffer = SmallVec<[BattleEvent; 8]>;

/// Result of a single strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrikeOutcome {
    /// The battle is over or a side has no active combatant.
    NoTarget,
    /// Damage dealt, defender still standing.
    Hit { damage: u32 },
    /// Defender knocked out; its side lost a life and promoted.
    KnockOut { damage: u32 },
    /// Defender knocked out and the attacker won the battle.
    Decisive { damage: u32 },
}

/// Inclusive range of damage a combatant with `attack` can deal.
#[must_use]
pub fn damage_bounds(attack: u32, config: &BattleConfig) -> (u32, u32) {
    (
        scale(attack, config.variance_low),
        scale(attack, config.variance_high),
    )
}

fn scale(attack: u32, multiplier: f64) -> u32 {
    (f64::from(attack) * multiplier).floor() as u32
}

/// Rules context for one transition: config, randomness, emitted events.
pub struct Combat<'a> {
    config: &'a BattleConfig,
    rng: &'a mut dyn RandomSource,
    events: EventBuffer,
}

impl<'a> Combat<'a> {
    pub fn new(config: &'a BattleConfig, rng: &'a mut dyn RandomSource) -> Self {
        Self {
            config,
            rng,
            events: EventBuffer::new(),
        }
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> EventBuffer {
        self.events
    }

    /// Log an event to the state and keep it for the transition result.
    pub fn record(&mut self, state: &mut BattleState, event: BattleEvent) {
        state.record(&event);
        self.events.push(event);
    }

    /// `floor(attack * v)` with `v` uniform in the configured variance range.
    ///
    /// The result never leaves `damage_bounds`. An inverted range yields
    /// the lower bound.
    pub fn roll_damage(&mut self, attack: u32) -> u32 {
        let v = self.rng.uniform(self.config.variance_low, self.config.variance_high);
        let (low, high) = damage_bounds(attack, self.config);
        scale(attack, v).min(high).max(low)
    }

    /// Resolve one strike by `attacker`'s active combatant.
    pub fn strike(&mut self, state: &mut BattleState, attacker: Side) -> StrikeOutcome {
        if state.is_concluded() {
            return StrikeOutcome::NoTarget;
        }
        let defender = attacker.opponent();

        let (striker, target) = match (
            state.side(attacker).deck.active(),
            state.side(defender).deck.active(),
        ) {
            (Some(striker), Some(target)) => (striker.clone(), target.clone()),
            _ => return StrikeOutcome::NoTarget,
        };

        let damage = self.roll_damage(striker.attack);
        let struck = target.damaged(damage);
        debug!(
            "turn {}: {} {} -> {} for {} ({} hp left)",
            state.turn, attacker, striker.name, struck.name, damage, struck.current_hp
        );
        self.record(
            state,
            BattleEvent::Attacked {
                attacker: striker.name.clone(),
                defender: struck.name.clone(),
                damage,
            },
        );

        let knocked_out = struck.is_knocked_out();
        state.side_mut(defender).deck.replace_active(struck);
        if !knocked_out {
            return StrikeOutcome::Hit { damage };
        }

        self.record(state, BattleEvent::Fell { name: target.name });
        let losing = state.side_mut(defender);
        losing.lives = losing.lives.saturating_sub(1);
        if losing.lives == 0 {
            self.declare_winner(state, attacker);
            return StrikeOutcome::Decisive { damage };
        }

        let losing = state.side_mut(defender);
        losing.deck.remove_active();
        let promoted = losing.deck.active().map(|next| next.name.clone());
        let side_name = losing.name.clone();
        match promoted {
            Some(name) => {
                self.record(state, BattleEvent::Promoted { side_name, name });
                StrikeOutcome::KnockOut { damage }
            }
            None => {
                self.declare_winner(state, attacker);
                StrikeOutcome::Decisive { damage }
            }
        }
    }

    fn declare_winner(&mut self, state: &mut BattleState, side: Side) {
        state.winner = Some(side);
        let side_name = state.side(side).name.clone();
        self.record(state, BattleEvent::Victory { side, side_name });
    }
}
