//! Opponent AI.
//!
//! `OpponentPolicy` is the extension point for smarter adversaries
//! (difficulty tiers, scripted bosses). The engine only depends on the
//! trait; `AlwaysAttack` is the default.

pub mod opponent;

pub use opponent::{AlwaysAttack, OpponentPolicy};
