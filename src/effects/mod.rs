//! Sorcery and enhancement effects.
//!
//! - `Effect`: what a card does when it resolves
//! - `TargetDomain`: the legal targets for an effect on the current board
//! - `EffectResolver`: applies an effect, and undoes a reversible one when
//!   its enhancement leaves play

pub mod effect;
pub mod resolver;
pub mod targeting;

pub use effect::{Effect, Side, StatChange};
pub use resolver::{EffectContext, EffectReport, EffectResolver};
pub use targeting::{Target, TargetChoice, TargetDomain};
