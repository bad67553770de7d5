//! Mana: colors, costs and the per-player pool.

pub mod color;
pub mod cost;
pub mod pool;

pub use color::Color;
pub use cost::{CostComponent, CostParseError, CostSpec, ManaKind};
pub use pool::{PaymentError, ResourcePool};
