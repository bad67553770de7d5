//! # manaforge
//!
//! Rules engine for a two-player card duel with colored mana, creatures,
//! sorceries and enhancements.
//!
//! ## Design Principles
//!
//! 1. **Driver-Agnostic**: The engine never reads input or prints. A driver
//!    (CLI, UI, bot, test) calls `Match` operations and renders the events
//!    they return.
//!
//! 2. **All-or-Nothing Operations**: Every operation is validated before it
//!    touches the board. An `IllegalAction` leaves the match unchanged.
//!
//! 3. **Deterministic**: Library shuffles come from a seeded ChaCha RNG, so
//!    the same seed and the same operations replay the same match.
//!
//! ## Modules
//!
//! - `core`: players, RNG, rules configuration, errors, events and state
//! - `mana`: colors, costs and the resource pool
//! - `cards`: card definitions, instances and the catalog
//! - `zones`: library, hand, in-play and discard
//! - `effects`: sorcery and enhancement effects and their targets
//! - `combat`: attacker/blocker damage resolution
//! - `rules`: the `Match` engine and turn operations
//! - `games`: the classic card set, decks and a scripted driver

pub mod cards;
pub mod combat;
pub mod core;
pub mod effects;
pub mod games;
pub mod mana;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameEvent, GameRng, GameRngState, IllegalAction, MatchState, Outcome,
    PlayerId, PlayerMap, PlayerState, Resolution, RulesConfig, SetupError,
};

pub use crate::mana::{Color, CostSpec, PaymentError, ResourcePool};

pub use crate::cards::{
    Ability, CardCatalog, CardDefinition, CardEntity, CardId, CardKind, Category,
    CreatureState, CreatureStats, InstanceId,
};

pub use crate::zones::{Zone, ZoneSet};

pub use crate::effects::{Effect, EffectResolver, Side, StatChange, Target, TargetChoice, TargetDomain};

pub use crate::combat::{CombatReport, CombatResolver, CombatRule};

pub use crate::rules::{GameResult, Match};
