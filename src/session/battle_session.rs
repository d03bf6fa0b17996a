//! One battle driven by commands.
//!
//! `BattleSession` is the command surface the UI/RPC layer talks to. It
//! owns the engine, the random source and the current state, and keeps a
//! history of every command it received. Persisting and broadcasting the
//! state after each command is left to the caller.

use log::{debug, warn};

use super::command::{ActionRecord, BattleCommand};
use super::snapshot::BattleSnapshot;
use crate::battle::{BattleEngine, BattleState};
use crate::cards::{fetch_roster, fetch_side_name, CardPool};
use crate::core::{GameRng, SessionError};
use crate::policy::{AlwaysAttack, OpponentPolicy};

/// A single battle and its command history.
pub struct BattleSession<P = AlwaysAttack> {
    battle_id: String,
    engine: BattleEngine<P>,
    rng: GameRng,
    state: Option<BattleState>,
    history: Vec<ActionRecord>,
}

impl<P: OpponentPolicy> BattleSession<P> {
    /// Create a session with no battle started yet.
    pub fn new(battle_id: impl Into<String>, engine: BattleEngine<P>, rng: GameRng) -> Self {
        Self {
            battle_id: battle_id.into(),
            engine,
            rng,
            state: None,
            history: Vec::new(),
        }
    }

    /// Resume a session from a snapshot.
    pub fn restore(engine: BattleEngine<P>, snapshot: BattleSnapshot) -> Self {
        Self {
            battle_id: snapshot.battle_id,
            engine,
            rng: GameRng::from_state(&snapshot.rng),
            state: Some(snapshot.state),
            history: snapshot.history,
        }
    }

    #[must_use]
    pub fn battle_id(&self) -> &str {
        &self.battle_id
    }

    /// Current state, if a battle has been started.
    #[must_use]
    pub fn state(&self) -> Option<&BattleState> {
        self.state.as_ref()
    }

    /// Every command received, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Current turn, 0 before the battle starts.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.state.as_ref().map_or(0, |s| s.turn)
    }

    /// Apply a command.
    ///
    /// Commands the engine rejects are recorded and leave the state as is;
    /// only `Attack`/`Retreat` before `Start` is an error.
    pub fn execute(&mut self, command: BattleCommand) -> Result<&BattleState, SessionError> {
        let turn = self.turn();
        debug!("battle {}: {} at turn {}", self.battle_id, command.kind(), turn);

        let (next, rejection) = if let BattleCommand::Start {
            my_side,
            my_roster,
            opponent_side,
            opponent_roster,
        } = &command
        {
            let state = self.engine.initialize(
                my_side.clone(),
                my_roster.clone(),
                opponent_side.clone(),
                opponent_roster.clone(),
                &mut self.rng,
            );
            self.history.clear();
            (state, None)
        } else {
            let Some(state) = self.state.as_ref() else {
                warn!("battle {}: {} before start", self.battle_id, command.kind());
                return Err(SessionError::NotStarted);
            };
            let transition = match &command {
                BattleCommand::Retreat { bench_index } => self.engine.retreat(state, *bench_index, &mut self.rng),
                _ => self.engine.attack(state, &mut self.rng),
            };
            let rejection = transition.rejection().cloned();
            (transition.into_state(), rejection)
        };

        self.history.push(ActionRecord {
            turn,
            command,
            rejection,
        });
        Ok(&*self.state.insert(next))
    }

    /// Apply a command only if the battle is still at `expected_turn`.
    ///
    /// Guards against two writers racing on the same battle: the loser
    /// gets `SessionError::StaleTurn` and nothing changes.
    pub fn execute_at(&mut self, expected_turn: u32, command: BattleCommand) -> Result<&BattleState, SessionError> {
        let actual = self.turn();
        if actual != expected_turn {
            warn!(
                "battle {}: stale {} (expected turn {}, at {})",
                self.battle_id,
                command.kind(),
                expected_turn,
                actual
            );
            return Err(SessionError::StaleTurn {
                expected: expected_turn,
                actual,
            });
        }
        self.execute(command)
    }

    /// Start a battle with rosters and names resolved from a card pool.
    pub fn start_from_pool<C>(
        &mut self,
        pool: &C,
        my_side: &str,
        opponent_side: &str,
    ) -> Result<&BattleState, SessionError>
    where
        C: CardPool + ?Sized,
    {
        let roster_config = &self.engine.config().roster;
        let my_roster = fetch_roster(pool, my_side, roster_config)?;
        let opponent_roster = fetch_roster(pool, opponent_side, roster_config)?;

        self.execute(BattleCommand::Start {
            my_side: fetch_side_name(pool, my_side),
            my_roster,
            opponent_side: fetch_side_name(pool, opponent_side),
            opponent_roster,
        })
    }

    /// Capture the battle for persistence.
    pub fn snapshot(&self) -> Result<BattleSnapshot, SessionError> {
        let state = self.state.clone().ok_or(SessionError::NotStarted)?;
        Ok(BattleSnapshot {
            battle_id: self.battle_id.clone(),
            state,
            history: self.history.clone(),
            rng: self.rng.state(),
        })
    }
}
