//! Effect definitions.
//!
//! Every sorcery and enhancement carries one `Effect`. Effects are plain
//! data; `EffectResolver` gives them meaning against the board.
//!
//! ## Sides
//!
//! Effects are written relative to the player who cast them: `Side::Own`
//! is the caster's board, `Side::Opponent` the other player's.
//!
//! ## Targeted and untargeted effects
//!
//! `Destroy`, `DamagePlayerOrCreature`, `Revive`, `GrantAbility` and
//! `RemoveAbility` need the caster to pick one target. The rest apply to
//! everything that matches.

use serde::{Deserialize, Serialize};

use crate::cards::{Ability, Category};
use crate::mana::Color;

/// Whose board an effect looks at, relative to the caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Own,
    Opponent,
}

/// Stat change applied to each matching creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatChange {
    /// +1/+1
    Boost,
    /// -1/-1
    Weaken,
    /// +2/+0
    AttackBoost,
}

/// A card effect.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Move one of the opponent's cards of `category` from play to discard.
    /// Destroying an enhancement reverses what it did.
    Destroy { category: Category },

    /// Apply `change` once to every creature of `color` on `side`.
    ColorStat {
        color: Color,
        side: Side,
        change: StatChange,
    },

    /// Deal `amount` to every creature on `side`.
    DamageAllCreatures { side: Side, amount: i32 },

    /// Deal `amount` to the opponent or to one of the opponent's creatures.
    DamagePlayerOrCreature { amount: i32 },

    /// Return one creature from the caster's discard pile to hand.
    Revive,

    /// Give one creature on `side` an ability.
    GrantAbility { ability: Ability, side: Side },

    /// Take an ability away from one creature on `side`.
    RemoveAbility { ability: Ability, side: Side },

    /// Take an ability away from every creature of `color` on `side`.
    RemoveAbilityFromColor {
        ability: Ability,
        color: Color,
        side: Side,
    },
}

impl Effect {
    /// True if casting needs a target choice.
    #[must_use]
    pub fn is_targeted(&self) -> bool {
        matches!(
            self,
            Effect::Destroy { .. }
                | Effect::DamagePlayerOrCreature { .. }
                | Effect::Revive
                | Effect::GrantAbility { .. }
                | Effect::RemoveAbility { .. }
        )
    }

    /// True if destroying an enhancement with this effect has something to undo.
    #[must_use]
    pub fn is_reversible(&self) -> bool {
        matches!(
            self,
            Effect::ColorStat { .. }
                | Effect::GrantAbility { .. }
                | Effect::RemoveAbility { .. }
                | Effect::RemoveAbilityFromColor { .. }
        )
    }
}

impl StatChange {
    /// (attack, hp) delta.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            StatChange::Boost => (1, 1),
            StatChange::Weaken => (-1, -1),
            StatChange::AttackBoost => (2, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targeted_classification() {
        assert!(Effect::Revive.is_targeted());
        assert!(Effect::DamagePlayerOrCreature { amount: 2 }.is_targeted());
        assert!(!Effect::DamageAllCreatures { side: Side::Opponent, amount: 1 }.is_targeted());
        assert!(!Effect::ColorStat {
            color: Color::White,
            side: Side::Own,
            change: StatChange::Boost,
        }
        .is_targeted());
    }

    #[test]
    fn test_reversible_classification() {
        assert!(Effect::GrantAbility { ability: Ability::Trample, side: Side::Own }.is_reversible());
        assert!(!Effect::Revive.is_reversible());
        assert!(!Effect::Destroy { category: Category::Land }.is_reversible());
    }

    #[test]
    fn test_stat_deltas() {
        assert_eq!(StatChange::Boost.delta(), (1, 1));
        assert_eq!(StatChange::Weaken.delta(), (-1, -1));
        assert_eq!(StatChange::AttackBoost.delta(), (2, 0));
    }

    #[test]
    fn test_effect_serde() {
        let effect = Effect::RemoveAbilityFromColor {
            ability: Ability::Trample,
            color: Color::Green,
            side: Side::Opponent,
        };
        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, back);
    }
}
