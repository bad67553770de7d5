//! The duel rules engine.
//!
//! `Match` validates and applies driver operations against a `MatchState`
//! and decides when the match is over.

pub mod engine;

pub use engine::{GameResult, Match};
