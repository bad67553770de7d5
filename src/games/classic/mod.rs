//! The classic duel: five basic lands, twelve creatures, six sorceries and
//! six enhancements, with two prebuilt 26-card decks.
//!
//! ```
//! use manaforge::games::classic::{AutoPilot, ClassicMatchBuilder};
//!
//! let mut game = ClassicMatchBuilder::new().build(42).unwrap();
//! assert_eq!(game.turn(), 1);
//!
//! AutoPilot.play_out(&mut game, 100).unwrap();
//! assert!(game.is_over());
//! ```

mod builder;
mod catalog;
mod driver;

pub use builder::ClassicMatchBuilder;
pub use catalog::{deck_one, deck_two, ids, standard_catalog, DECK_ONE, DECK_TWO};
pub use driver::AutoPilot;
