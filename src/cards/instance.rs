//! Card instances - runtime card state.
//!
//! A `CardEntity` is one physical copy of a card in a match. Its `state`
//! is a tagged union over the four categories, so creature-only data
//! (attack, hit points, abilities) exists only on creatures and land-only
//! data only on lands.
//!
//! ## Creature stats
//!
//! `CreatureState` keeps the printed values next to the live ones:
//!
//! - `attack` / `hp`: live values. `hp` drops below 1 when the creature has
//!   taken lethal damage; the zone set sweeps it into the discard pile.
//! - `hp_modifier`: net toughness change from enhancements still in play.
//!   `reset_to_base_hp` heals to `base_hp + hp_modifier`.
//! - `first_strike` / `trample`: live flags, restored to the printed flags
//!   by `reset_abilities_to_base`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{CardDefinition, CardId, CardKind, Category, CreatureStats};
use crate::core::PlayerId;
use crate::mana::{Color, ResourcePool};

/// Identifier of one card copy within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
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

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Combat ability that effects can grant or remove.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    FirstStrike,
    Trample,
}

/// Live state of a creature.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureState {
    pub attack: i32,
    pub hp: i32,
    pub base_attack: i32,
    pub base_hp: i32,
    pub hp_modifier: i32,
    pub tapped: bool,
    pub first_strike: bool,
    pub trample: bool,
    pub base_first_strike: bool,
    pub base_trample: bool,
}

impl CreatureState {
    /// Fresh state from printed stats.
    #[must_use]
    pub fn new(stats: CreatureStats) -> Self {
        Self {
            attack: stats.attack,
            hp: stats.hp,
            base_attack: stats.attack,
            base_hp: stats.hp,
            hp_modifier: 0,
            tapped: false,
            first_strike: stats.first_strike,
            trample: stats.trample,
            base_first_strike: stats.first_strike,
            base_trample: stats.trample,
        }
    }

    /// Attack power.
    #[must_use]
    pub const fn attack_power(&self) -> i32 {
        self.attack
    }

    /// Hit points remaining.
    #[must_use]
    pub const fn current_hp(&self) -> i32 {
        self.hp
    }

    /// Subtract `amount` from hit points. May go negative.
    pub fn apply_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    /// True once hit points are below 1.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.hp < 1
    }

    /// Heal to printed toughness plus active enhancement modifiers.
    pub fn reset_to_base_hp(&mut self) {
        self.hp = self.base_hp + self.hp_modifier;
    }

    /// Restore printed first strike and trample.
    pub fn reset_abilities_to_base(&mut self) {
        self.first_strike = self.base_first_strike;
        self.trample = self.base_trample;
    }

    /// Restore one printed ability.
    pub fn reset_ability(&mut self, ability: Ability) {
        match ability {
            Ability::FirstStrike => self.first_strike = self.base_first_strike,
            Ability::Trample => self.trample = self.base_trample,
        }
    }

    /// Back to exactly what is printed, untapped. Used when leaving play.
    pub fn reset_to_printed(&mut self) {
        self.attack = self.base_attack;
        self.hp_modifier = 0;
        self.hp = self.base_hp;
        self.tapped = false;
        self.reset_abilities_to_base();
    }

    /// +1/+1.
    pub fn boost(&mut self) {
        self.attack += 1;
        self.hp += 1;
        self.hp_modifier += 1;
    }

    /// -1/-1.
    pub fn weaken(&mut self) {
        self.attack -= 1;
        self.hp -= 1;
        self.hp_modifier -= 1;
    }

    /// +2/+0.
    pub fn boost_attack_only(&mut self) {
        self.attack += 2;
    }

    /// Undo `boost_attack_only`. Attack never drops below 0 this way, and a
    /// creature already at 0 or less keeps its attack.
    pub fn drain_attack_boost(&mut self) {
        if self.attack > 0 {
            self.attack = (self.attack - 2).max(0);
        }
    }

    /// Give the creature first strike.
    pub fn grant_first_strike(&mut self) {
        self.first_strike = true;
    }

    /// Give the creature trample.
    pub fn grant_trample(&mut self) {
        self.trample = true;
    }

    /// Take first strike away.
    pub fn remove_first_strike(&mut self) {
        self.first_strike = false;
    }

    /// Take trample away.
    pub fn remove_trample(&mut self) {
        self.trample = false;
    }

    /// Set an ability flag on or off.
    pub fn set_ability(&mut self, ability: Ability, active: bool) {
        match (ability, active) {
            (Ability::FirstStrike, true) => self.grant_first_strike(),
            (Ability::FirstStrike, false) => self.remove_first_strike(),
            (Ability::Trample, true) => self.grant_trample(),
            (Ability::Trample, false) => self.remove_trample(),
        }
    }

    /// Current value of an ability flag.
    #[must_use]
    pub const fn has(&self, ability: Ability) -> bool {
        match ability {
            Ability::FirstStrike => self.first_strike,
            Ability::Trample => self.trample,
        }
    }
}

/// Live state of an enhancement in play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnhancementState {
    /// Creatures this enhancement changed when it resolved.
    pub affected: SmallVec<[InstanceId; 4]>,
}

/// Category-specific runtime state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityState {
    Land { produces: Color, tapped: bool },
    Creature(CreatureState),
    Sorcery,
    Enhancement(EnhancementState),
}

/// One copy of a card in a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardEntity {
    /// Unique within the match.
    pub id: InstanceId,

    /// Printed card.
    pub card: CardId,

    /// The player whose zones hold this card. Never changes.
    pub owner: PlayerId,

    /// Copied from the definition.
    pub color: Option<Color>,

    pub state: EntityState,
}

impl CardEntity {
    /// Create a fresh copy of `definition`.
    #[must_use]
    pub fn new(id: InstanceId, definition: &CardDefinition, owner: PlayerId) -> Self {
        let state = match &definition.kind {
            CardKind::Land { produces } => EntityState::Land {
                produces: *produces,
                tapped: false,
            },
            CardKind::Creature(stats) => EntityState::Creature(CreatureState::new(*stats)),
            CardKind::Sorcery(_) => EntityState::Sorcery,
            CardKind::Enhancement(_) => EntityState::Enhancement(EnhancementState::default()),
        };
        Self {
            id,
            card: definition.id,
            owner,
            color: definition.color,
            state,
        }
    }

    /// Category of this card.
    #[must_use]
    pub fn category(&self) -> Category {
        match self.state {
            EntityState::Land { .. } => Category::Land,
            EntityState::Creature(_) => Category::Creature,
            EntityState::Sorcery => Category::Sorcery,
            EntityState::Enhancement(_) => Category::Enhancement,
        }
    }

    /// True if the cost of `definition` can be paid from `pool`.
    #[must_use]
    pub fn is_affordable(&self, definition: &CardDefinition, pool: &ResourcePool) -> bool {
        pool.can_afford(&definition.cost)
    }

    /// Tapped lands and creatures. Sorceries and enhancements never tap.
    #[must_use]
    pub fn is_tapped(&self) -> bool {
        match &self.state {
            EntityState::Land { tapped, .. } => *tapped,
            EntityState::Creature(creature) => creature.tapped,
            _ => false,
        }
    }

    /// Tap a land or creature. Returns false for other categories.
    ///
    /// Tapping a land adds its mana to `pool`. The land does not guard
    /// against tapping twice; callers check `is_tapped` first.
    pub fn tap(&mut self, pool: &mut ResourcePool) -> bool {
        match &mut self.state {
            EntityState::Land { produces, tapped } => {
                *tapped = true;
                pool.add(*produces);
                true
            }
            EntityState::Creature(creature) => {
                creature.tapped = true;
                true
            }
            _ => false,
        }
    }

    /// Untap a land or creature.
    pub fn untap(&mut self) {
        match &mut self.state {
            EntityState::Land { tapped, .. } => *tapped = false,
            EntityState::Creature(creature) => creature.tapped = false,
            _ => {}
        }
    }

    /// Creature state, if this is a creature.
    #[must_use]
    pub fn creature(&self) -> Option<&CreatureState> {
        match &self.state {
            EntityState::Creature(creature) => Some(creature),
            _ => None,
        }
    }

    /// Mutable creature state, if this is a creature.
    pub fn creature_mut(&mut self) -> Option<&mut CreatureState> {
        match &mut self.state {
            EntityState::Creature(creature) => Some(creature),
            _ => None,
        }
    }

    /// Enhancement state, if this is an enhancement.
    #[must_use]
    pub fn enhancement(&self) -> Option<&EnhancementState> {
        match &self.state {
            EntityState::Enhancement(enhancement) => Some(enhancement),
            _ => None,
        }
    }

    /// Mutable enhancement state, if this is an enhancement.
    pub fn enhancement_mut(&mut self) -> Option<&mut EnhancementState> {
        match &mut self.state {
            EntityState::Enhancement(enhancement) => Some(enhancement),
            _ => None,
        }
    }

    /// Drop everything gained in play: stats, abilities, tapped flags and
    /// enhancement bookkeeping.
    pub fn reset_on_leaving_play(&mut self) {
        match &mut self.state {
            EntityState::Land { tapped, .. } => *tapped = false,
            EntityState::Creature(creature) => creature.reset_to_printed(),
            EntityState::Enhancement(enhancement) => enhancement.affected.clear(),
            EntityState::Sorcery => {}
        }
    }
}
