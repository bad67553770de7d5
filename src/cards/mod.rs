//! Card definitions, runtime instances and the catalog.
//!
//! - `CardDefinition`: what is printed on a card
//! - `CardEntity`: one copy of a card in a match
//! - `CardCatalog`: the read-only set of definitions a match plays with

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId, CardKind, Category, CreatureStats};
pub use instance::{Ability, CardEntity, CreatureState, EnhancementState, EntityState, InstanceId};
pub use registry::CardCatalog;
