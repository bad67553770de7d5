//! Creature combat.

pub mod resolver;

pub use resolver::{CombatReport, CombatResolver, CombatRule};
