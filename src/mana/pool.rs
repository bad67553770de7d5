//! Per-player mana pool.
//!
//! Five colored counters, filled by tapping lands and emptied by paying
//! costs and at the end of the owner's turn.
//!
//! ## Paying generic mana
//!
//! Generic mana can be paid with any color. `can_afford` first sets aside
//! the colored requirements and then checks the generic amount against
//! what is left across all five counters, so any cost it accepts can be
//! paid in full. `pay` draws generic mana from the counters in
//! `Color::PAYMENT_ORDER` (white, red, green, blue, black).

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::cost::CostSpec;

/// Reason a cost could not be paid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("need {needed} {color} mana, have {available}")]
    Colored {
        color: Color,
        needed: u32,
        available: u32,
    },
    #[error("need {needed} generic mana, have {available} left after colored costs")]
    Generic { needed: u32, available: u32 },
}

/// Five colored mana counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourcePool {
    pub white: u32,
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub black: u32,
}

impl ResourcePool {
    /// An empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add one mana of `color`.
    pub fn add(&mut self, color: Color) {
        *self.counter_mut(color) += 1;
    }

    /// Current amount of one color.
    #[must_use]
    pub const fn get(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Blue => self.blue,
            Color::Black => self.black,
        }
    }

    fn counter_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::White => &mut self.white,
            Color::Red => &mut self.red,
            Color::Green => &mut self.green,
            Color::Blue => &mut self.blue,
            Color::Black => &mut self.black,
        }
    }

    /// Sum of all five counters; everything here can pay generic costs.
    #[must_use]
    pub fn total(&self) -> u32 {
        Color::PAYMENT_ORDER
            .iter()
            .fold(0u32, |sum, &c| sum.saturating_add(self.get(c)))
    }

    /// True if `cost` can be paid in full.
    #[must_use]
    pub fn can_afford(&self, cost: &CostSpec) -> bool {
        self.check(cost).is_ok()
    }

    /// Explain why `cost` can't be paid, or `Ok` if it can.
    pub fn check(&self, cost: &CostSpec) -> Result<(), PaymentError> {
        let mut colored_total = 0u32;
        for color in Color::PAYMENT_ORDER {
            let needed = cost.colored(color);
            let available = self.get(color);
            if needed > available {
                return Err(PaymentError::Colored {
                    color,
                    needed,
                    available,
                });
            }
            colored_total = colored_total.saturating_add(needed);
        }

        let needed = cost.generic();
        let available = self.total().saturating_sub(colored_total);
        if needed > available {
            return Err(PaymentError::Generic { needed, available });
        }
        Ok(())
    }

    /// Deduct `cost`. Leaves the pool untouched on error.
    pub fn pay(&mut self, cost: &CostSpec) -> Result<(), PaymentError> {
        self.check(cost)?;

        for color in Color::PAYMENT_ORDER {
            *self.counter_mut(color) -= cost.colored(color);
        }

        let mut generic = cost.generic();
        for color in Color::PAYMENT_ORDER {
            if generic == 0 {
                break;
            }
            let counter = self.counter_mut(color);
            let taken = generic.min(*counter);
            *counter -= taken;
            generic -= taken;
        }
        debug_assert_eq!(generic, 0, "check() guarantees generic mana is available");

        log::debug!("paid {cost}; pool now {self}");
        Ok(())
    }
}

impl std::fmt::Display for ResourcePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "W{} R{} G{} U{} B{}",
            self.white, self.red, self.green, self.blue, self.black
        )
    }
}
