//! Card zones: library, hand, in play and discard.

pub mod zone_set;

pub use zone_set::{Zone, ZoneSet};
