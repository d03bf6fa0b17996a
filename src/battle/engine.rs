//! The battle state machine.
//!
//! ## Transitions
//!
//! - `initialize`: build both decks and a fresh `BattleState`
//! - `attack`: my strike, then the opponent's counter, as one turn
//! - `retreat`: swap my active combatant with a bench slot, then the
//!   opponent's counter, as one turn
//!
//! Transitions never mutate their input and never fail. A command whose
//! preconditions do not hold returns the input state unchanged, with the
//! reason in `Outcome::Rejected`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::combat::{Combat, EventBuffer};
use super::event::BattleEvent;
use super::state::{BattleState, SideState};
use crate::cards::Combatant;
use crate::core::{BattleConfig, ConfigError, RandomSource, Side};
use crate::deck::DeckBuilder;
use crate::policy::{AlwaysAttack, OpponentPolicy};

/// Why a command was ignored.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("the battle is already concluded")]
    BattleConcluded,

    #[error("{0} side has no active combatant")]
    NoActiveCombatant(Side),

    #[error("bench slot {index} does not exist (bench holds {bench_len})")]
    InvalidBenchIndex { index: usize, bench_len: usize },
}

/// Whether a command changed the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

/// Result of an engine operation.
#[derive(Clone, Debug)]
pub struct Transition {
    /// The new state (equal to the input when rejected).
    pub state: BattleState,
    /// Applied or rejected, with the reason.
    pub outcome: Outcome,
    /// Events of this transition, oldest first. Empty when rejected.
    pub events: EventBuffer,
}

impl Transition {
    fn rejected(state: &BattleState, reason: Rejection) -> Self {
        warn!("turn {}: command rejected: {}", state.turn, reason);
        Self {
            state: state.clone(),
            outcome: Outcome::Rejected(reason),
            events: EventBuffer::new(),
        }
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.outcome == Outcome::Applied
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match &self.outcome {
            Outcome::Applied => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }

    #[must_use]
    pub fn into_state(self) -> BattleState {
        self.state
    }
}

/// Battle rules with a pluggable opponent.
#[derive(Clone, Debug)]
pub struct BattleEngine<P = AlwaysAttack> {
    config: BattleConfig,
    deck_builder: DeckBuilder,
    policy: P,
}

impl Default for BattleEngine<AlwaysAttack> {
    fn default() -> Self {
        Self::new(BattleConfig::default())
    }
}

impl BattleEngine<AlwaysAttack> {
    /// Engine with the default always-attack opponent.
    ///
    /// The config is taken as is. Use `try_new` for configs that come from
    /// outside the program.
    #[must_use]
    pub fn new(config: BattleConfig) -> Self {
        Self::with_policy(config, AlwaysAttack)
    }

    /// Engine with the default opponent, rejecting an invalid config.
    pub fn try_new(config: BattleConfig) -> Result<Self, ConfigError> {
        Self::try_with_policy(config, AlwaysAttack)
    }
}

impl<P: OpponentPolicy> BattleEngine<P> {
    /// Engine with a custom opponent policy.
    #[must_use]
    pub fn with_policy(config: BattleConfig, policy: P) -> Self {
        Self {
            deck_builder: DeckBuilder::from_config(&config),
            config,
            policy,
        }
    }

    /// Engine with a custom opponent policy, rejecting an invalid config.
    pub fn try_with_policy(config: BattleConfig, policy: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_policy(config, policy))
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Build both decks and start a battle at turn 1.
    pub fn initialize<R: RandomSource>(
        &self,
        my_name: impl Into<String>,
        my_roster: Vec<Combatant>,
        opponent_name: impl Into<String>,
        opponent_roster: Vec<Combatant>,
        rng: &mut R,
    ) -> BattleState {
        let lives = self.config.starting_lives;
        let my_deck = self.deck_builder.build(Side::Mine, my_roster, rng);
        let opponent_deck = self.deck_builder.build(Side::Opponent, opponent_roster, rng);
        let mine = SideState::new(my_name, my_deck, lives);
        let opponent = SideState::new(opponent_name, opponent_deck, lives);

        let mut state = BattleState::new(mine, opponent);
        let start = BattleEvent::BattleStarted {
            mine: state.side(Side::Mine).name.clone(),
            opponent: state.side(Side::Opponent).name.clone(),
        };
        state.record(&start);
        info!("{start}");
        state
    }

    /// Attack with my active combatant; the opponent counters in the same turn.
    pub fn attack<R: RandomSource>(&self, state: &BattleState, rng: &mut R) -> Transition {
        if state.is_concluded() {
            return Transition::rejected(state, Rejection::BattleConcluded);
        }
        for side in Side::ALL {
            if state.side(side).deck.active().is_none() {
                return Transition::rejected(state, Rejection::NoActiveCombatant(side));
            }
        }

        let mut next = state.clone();
        let mut combat = Combat::new(&self.config, rng);
        combat.strike(&mut next, Side::Mine);
        if !next.is_concluded() {
            next = self.policy.resolve_counter(next, &mut combat);
        }
        self.finish(next, combat)
    }

    /// Swap my active combatant with bench slot `bench_index`; the
    /// opponent counters against the newly active combatant.
    pub fn retreat<R: RandomSource>(&self, state: &BattleState, bench_index: usize, rng: &mut R) -> Transition {
        if state.is_concluded() {
            return Transition::rejected(state, Rejection::BattleConcluded);
        }

        let mut next = state.clone();
        let mine = next.side_mut(Side::Mine);
        let outgoing = mine.deck.active().map(|c| c.name.clone());
        if !mine.deck.swap_with_bench(bench_index) {
            let bench_len = mine.deck.bench_len();
            return Transition::rejected(state, Rejection::InvalidBenchIndex { index: bench_index, bench_len });
        }
        let incoming = mine.deck.active().map(|c| c.name.clone());
        let side_name = mine.name.clone();

        let mut combat = Combat::new(&self.config, rng);
        if let (Some(from), Some(to)) = (outgoing, incoming) {
            combat.record(&mut next, BattleEvent::Retreated { side_name, from, to });
        }
        next = self.policy.resolve_counter(next, &mut combat);
        self.finish(next, combat)
    }

    fn finish(&self, mut next: BattleState, combat: Combat<'_>) -> Transition {
        next.turn += 1;
        debug!("turn {} resolved, lives {}/{}", next.turn - 1, next.my_lives(), next.opponent_lives());
        if let Some(winner) = next.winner {
            info!("battle concluded on turn {}: {} wins", next.turn - 1, next.side(winner).name);
        }
        Transition {
            state: next,
            outcome: Outcome::Applied,
            events: combat.into_events(),
        }
    }
}
