//! Core match types: players, RNG, rules configuration, errors, events and state.

pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;

pub use config::RulesConfig;
pub use error::{ConfigError, IllegalAction, SetupError};
pub use event::{GameEvent, Outcome, Resolution};
pub use player::{InvalidPlayer, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{CombatState, MatchState, PendingAttack, PlayerState};
