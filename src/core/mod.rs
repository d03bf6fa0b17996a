//! Core battle types: sides, randomness, configuration, errors.
//!
//! Everything here is independent of cards and rules; the other modules
//! build on these types.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{shuffle, GameRng, GameRngState, RandomSource};
pub use config::{BattleConfig, PlaceholderConfig, RosterConfig, PLACEHOLDER_FLAVOR, PLACEHOLDER_NAME};
pub use error::{ConfigError, PoolError, SessionError};
