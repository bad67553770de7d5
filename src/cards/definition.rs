//! Card definitions - static card data.
//!
//! `CardDefinition` holds what is printed on a card: name, color, cost and
//! a category payload. Runtime state (damage, tapped, granted abilities)
//! lives on `CardEntity`.
//!
//! Sorceries and enhancements carry their `Effect` directly, so the rules
//! engine dispatches on data rather than on card names.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;
use crate::mana::{Color, CostSpec};

/// Unique identifier for a card definition.
///
/// This identifies the printed card (e.g., "Werewolf"), not a copy of it
/// in a library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The four card categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Land,
    Creature,
    Sorcery,
    Enhancement,
}

/// Printed creature stats and abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureStats {
    pub attack: i32,
    pub hp: i32,
    pub first_strike: bool,
    pub trample: bool,
}

impl CreatureStats {
    /// A vanilla creature.
    #[must_use]
    pub const fn new(attack: i32, hp: i32) -> Self {
        Self {
            attack,
            hp,
            first_strike: false,
            trample: false,
        }
    }

    #[must_use]
    pub const fn with_first_strike(mut self) -> Self {
        self.first_strike = true;
        self
    }

    #[must_use]
    pub const fn with_trample(mut self) -> Self {
        self.trample = true;
        self
    }
}

/// Category-specific payload of a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardKind {
    /// Taps for one mana of `produces`.
    Land { produces: Color },
    /// Stays in play and fights.
    Creature(CreatureStats),
    /// Resolves once, then goes to the discard pile.
    Sorcery(Effect),
    /// Resolves once and stays in play; destroying it reverses the effect.
    Enhancement(Effect),
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use manaforge::cards::{CardDefinition, CardId, Category, CreatureStats};
/// use manaforge::mana::{Color, CostSpec};
///
/// let knight = CardDefinition::creature(
///     CardId::new(7),
///     "WhiteKnight",
///     Color::White,
///     CostSpec::parse("WW").unwrap(),
///     CreatureStats::new(2, 2).with_first_strike(),
/// );
///
/// assert_eq!(knight.category(), Category::Creature);
/// assert_eq!(knight.cost.total(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name, unique within a catalog.
    pub name: String,

    /// Card color. `None` for colorless cards.
    pub color: Option<Color>,

    /// Mana cost.
    pub cost: CostSpec,

    /// Category payload.
    pub kind: CardKind,
}

impl CardDefinition {
    /// A land that produces `produces`. Lands cost nothing and share the
    /// color of their mana.
    #[must_use]
    pub fn land(id: CardId, name: impl Into<String>, produces: Color) -> Self {
        Self {
            id,
            name: name.into(),
            color: Some(produces),
            cost: CostSpec::free(),
            kind: CardKind::Land { produces },
        }
    }

    /// A creature.
    #[must_use]
    pub fn creature(
        id: CardId,
        name: impl Into<String>,
        color: Color,
        cost: CostSpec,
        stats: CreatureStats,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: Some(color),
            cost,
            kind: CardKind::Creature(stats),
        }
    }

    /// A sorcery.
    #[must_use]
    pub fn sorcery(
        id: CardId,
        name: impl Into<String>,
        color: Color,
        cost: CostSpec,
        effect: Effect,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: Some(color),
            cost,
            kind: CardKind::Sorcery(effect),
        }
    }

    /// An enhancement.
    #[must_use]
    pub fn enhancement(
        id: CardId,
        name: impl Into<String>,
        color: Color,
        cost: CostSpec,
        effect: Effect,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: Some(color),
            cost,
            kind: CardKind::Enhancement(effect),
        }
    }

    /// Override the color (builder pattern). `None` makes the card colorless.
    #[must_use]
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Override the cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: CostSpec) -> Self {
        self.cost = cost;
        self
    }

    /// Category of this card.
    #[must_use]
    pub fn category(&self) -> Category {
        match self.kind {
            CardKind::Land { .. } => Category::Land,
            CardKind::Creature(_) => Category::Creature,
            CardKind::Sorcery(_) => Category::Sorcery,
            CardKind::Enhancement(_) => Category::Enhancement,
        }
    }

    /// The effect of a sorcery or enhancement.
    #[must_use]
    pub fn effect(&self) -> Option<&Effect> {
        match &self.kind {
            CardKind::Sorcery(effect) | CardKind::Enhancement(effect) => Some(effect),
            _ => None,
        }
    }

    /// Printed stats of a creature.
    #[must_use]
    pub fn creature_stats(&self) -> Option<CreatureStats> {
        match self.kind {
            CardKind::Creature(stats) => Some(stats),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_land_is_free_and_colored() {
        let forest = CardDefinition::land(CardId::new(0), "Forest", Color::Green);
        assert_eq!(forest.category(), Category::Land);
        assert!(forest.cost.is_free());
        assert_eq!(forest.color, Some(Color::Green));
        assert!(forest.effect().is_none());
    }

    #[test]
    fn test_creature_stats_builder() {
        let stats = CreatureStats::new(4, 6).with_trample();
        assert!(stats.trample);
        assert!(!stats.first_strike);

        let wolf = CardDefinition::creature(
            CardId::new(1),
            "Werewolf",
            Color::Green,
            CostSpec::parse("2GW").unwrap(),
            stats,
        );
        assert_eq!(wolf.creature_stats(), Some(stats));
    }

    #[test]
    fn test_sorcery_carries_effect() {
        let terror = CardDefinition::sorcery(
            CardId::new(2),
            "Terror",
            Color::Black,
            CostSpec::parse("1B").unwrap(),
            Effect::Destroy { category: Category::Creature },
        );
        assert_eq!(terror.category(), Category::Sorcery);
        assert_eq!(
            terror.effect(),
            Some(&Effect::Destroy { category: Category::Creature })
        );
    }

    #[test]
    fn test_colorless_override() {
        let card = CardDefinition::land(CardId::new(3), "Wastes", Color::White).with_color(None);
        assert_eq!(card.color, None);
    }
}
