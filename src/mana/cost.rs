//! Mana cost specifications.
//!
//! A `CostSpec` is an ordered list of `(kind, amount)` components where the
//! kind is either a specific color or generic. Generic components may be
//! paid with any color.
//!
//! Costs are usually written in shorthand: digits are generic mana and the
//! letters `W R G U B` are one colored mana each.
//!
//! ```
//! use manaforge::mana::{Color, CostSpec};
//!
//! let cost = CostSpec::parse("2GW").unwrap();
//! assert_eq!(cost.generic(), 2);
//! assert_eq!(cost.colored(Color::Green), 1);
//! assert_eq!(cost.total(), 4);
//! assert_eq!(cost.to_string(), "2GW");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;

/// What a cost component may be paid with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManaKind {
    /// Only mana of this color.
    Colored(Color),
    /// Any color.
    Generic,
}

/// One `(kind, amount)` entry of a cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostComponent {
    pub kind: ManaKind,
    pub amount: u32,
}

/// Error from `CostSpec::parse`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CostParseError {
    #[error("unknown mana symbol '{0}'")]
    UnknownSymbol(char),
    #[error("mana amount overflows")]
    Overflow,
}

/// Ordered mana cost.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostSpec {
    components: SmallVec<[CostComponent; 4]>,
}

impl CostSpec {
    /// The empty cost.
    #[must_use]
    pub fn free() -> Self {
        Self::default()
    }

    /// Parse shorthand like `"1W"`, `"BB"` or `"2GW"`.
    pub fn parse(text: &str) -> Result<Self, CostParseError> {
        let mut cost = Self::free();
        let mut pending_generic: Option<u32> = None;

        for symbol in text.chars() {
            if let Some(digit) = symbol.to_digit(10) {
                let current = pending_generic.unwrap_or(0);
                pending_generic = Some(
                    current
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(digit))
                        .ok_or(CostParseError::Overflow)?,
                );
                continue;
            }
            if let Some(generic) = pending_generic.take() {
                cost.try_push(ManaKind::Generic, generic)?;
            }
            let color = Color::from_symbol(symbol).ok_or(CostParseError::UnknownSymbol(symbol))?;
            cost.try_push(ManaKind::Colored(color), 1)?;
        }
        if let Some(generic) = pending_generic {
            cost.try_push(ManaKind::Generic, generic)?;
        }
        Ok(cost)
    }

    /// Append colored mana (builder pattern). The total is capped at
    /// `u32::MAX`; anything past it is dropped.
    #[must_use]
    pub fn with_colored(mut self, color: Color, amount: u32) -> Self {
        let room = u32::MAX - self.total();
        self.fold_in(ManaKind::Colored(color), amount.min(room));
        self
    }

    /// Append generic mana (builder pattern). Capped like `with_colored`.
    #[must_use]
    pub fn with_generic(mut self, amount: u32) -> Self {
        let room = u32::MAX - self.total();
        self.fold_in(ManaKind::Generic, amount.min(room));
        self
    }

    /// Append a component, rejecting it if the total would overflow.
    fn try_push(&mut self, kind: ManaKind, amount: u32) -> Result<(), CostParseError> {
        self.total()
            .checked_add(amount)
            .ok_or(CostParseError::Overflow)?;
        self.fold_in(kind, amount);
        Ok(())
    }

    /// Append a component, folding it into the previous one if the kind
    /// repeats. The caller keeps `total() + amount` within `u32`.
    fn fold_in(&mut self, kind: ManaKind, amount: u32) {
        if amount == 0 {
            return;
        }
        match self.components.last_mut() {
            Some(last) if last.kind == kind => last.amount = last.amount.saturating_add(amount),
            _ => self.components.push(CostComponent { kind, amount }),
        }
    }

    /// Components in written order.
    #[must_use]
    pub fn components(&self) -> &[CostComponent] {
        &self.components
    }

    /// Total colored mana of one color required.
    #[must_use]
    pub fn colored(&self, color: Color) -> u32 {
        self.components
            .iter()
            .filter(|c| c.kind == ManaKind::Colored(color))
            .fold(0u32, |sum, c| sum.saturating_add(c.amount))
    }

    /// Total generic mana required.
    #[must_use]
    pub fn generic(&self) -> u32 {
        self.components
            .iter()
            .filter(|c| c.kind == ManaKind::Generic)
            .fold(0u32, |sum, c| sum.saturating_add(c.amount))
    }

    /// Sum of every component.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.components
            .iter()
            .fold(0u32, |sum, c| sum.saturating_add(c.amount))
    }

    /// True for a cost of nothing.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.components.is_empty()
    }
}

impl std::fmt::Display for CostSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_free() {
            return f.write_str("0");
        }
        for component in &self.components {
            match component.kind {
                ManaKind::Generic => write!(f, "{}", component.amount)?,
                ManaKind::Colored(color) => {
                    for _ in 0..component.amount {
                        write!(f, "{}", color.symbol())?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for CostSpec {
    type Err = CostParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_folds_repeated_colors() {
        let cost = CostSpec::parse("2WW").unwrap();
        assert_eq!(
            cost.components(),
            &[
                CostComponent { kind: ManaKind::Generic, amount: 2 },
                CostComponent { kind: ManaKind::Colored(Color::White), amount: 2 },
            ]
        );
    }

    #[test]
    fn test_parse_multi_digit_generic() {
        let cost = CostSpec::parse("12B").unwrap();
        assert_eq!(cost.generic(), 12);
        assert_eq!(cost.colored(Color::Black), 1);
    }

    #[test]
    fn test_parse_mixed_colors() {
        let cost = CostSpec::parse("1RB").unwrap();
        assert_eq!(cost.generic(), 1);
        assert_eq!(cost.colored(Color::Red), 1);
        assert_eq!(cost.colored(Color::Black), 1);
        assert_eq!(cost.colored(Color::White), 0);
        assert_eq!(cost.total(), 3);
    }

    #[test]
    fn test_parse_empty_is_free() {
        let cost = CostSpec::parse("").unwrap();
        assert!(cost.is_free());
        assert_eq!(cost.to_string(), "0");
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        assert_eq!(CostSpec::parse("2X"), Err(CostParseError::UnknownSymbol('X')));
    }

    #[test]
    fn test_builder_matches_parse() {
        let built = CostSpec::free()
            .with_generic(3)
            .with_colored(Color::Black, 1);
        assert_eq!(built, "3B".parse::<CostSpec>().unwrap());
    }

    #[test]
    fn test_parse_rejects_total_overflow() {
        assert_eq!(CostSpec::parse("4294967295W"), Err(CostParseError::Overflow));
        assert_eq!(CostSpec::parse("4294967295W4294967295"), Err(CostParseError::Overflow));
        assert_eq!(CostSpec::parse("4294967296"), Err(CostParseError::Overflow));

        let max = CostSpec::parse("4294967295").unwrap();
        assert_eq!(max.total(), u32::MAX);
    }

    #[test]
    fn test_builder_caps_total() {
        let cost = CostSpec::free().with_generic(u32::MAX).with_generic(1);
        assert_eq!(cost.generic(), u32::MAX);
        assert_eq!(cost.total(), u32::MAX);

        let cost = cost.with_colored(Color::White, 3);
        assert_eq!(cost.colored(Color::White), 0);
        assert_eq!(cost.total(), u32::MAX);
    }

    #[test]
    fn test_zero_amounts_are_dropped() {
        let cost = CostSpec::free().with_generic(0).with_colored(Color::Red, 0);
        assert!(cost.is_free());
    }
}
