//! Effect resolution.
//!
//! `EffectResolver::resolve` applies one `Effect` to the board given a
//! `Target` already chosen and validated by `TargetDomain`. It works on an
//! `EffectContext` that borrows both players' state for the length of the
//! call: `own` belongs to the caster, `opponent` to the other player.
//!
//! Creatures whose hit points fall below 1 are moved to their owner's
//! discard pile before `resolve` returns.
//!
//! ## Reversal
//!
//! An enhancement remembers the creatures it changed. When it is destroyed,
//! `reverse` undoes its effect once on each of those creatures still in play:
//!
//! | Effect | Reversal |
//! |--------|----------|
//! | +1/+1 | -1/-1 |
//! | -1/-1 | +1/+1 |
//! | +2/+0 | attack -2, not below 0 |
//! | ability granted or removed | ability back to printed |

use smallvec::SmallVec;

use super::effect::{Effect, Side, StatChange};
use super::targeting::Target;
use crate::cards::{Ability, CardCatalog, CardEntity, Category, InstanceId};
use crate::core::{GameEvent, PlayerState, Resolution};
use crate::mana::Color;
use crate::zones::Zone;

/// Both sides of the board, borrowed for one resolution.
pub struct EffectContext<'a> {
    /// Caster's state.
    pub own: &'a mut PlayerState,
    /// The other player's state.
    pub opponent: &'a mut PlayerState,
    pub catalog: &'a CardCatalog,
    pub events: &'a mut Vec<GameEvent>,
}

/// What an effect did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectReport {
    pub resolution: Resolution,
    /// Creatures the effect changed, for enhancements to remember.
    pub affected: SmallVec<[InstanceId; 4]>,
}

impl EffectReport {
    fn resolved(affected: SmallVec<[InstanceId; 4]>) -> Self {
        Self {
            resolution: Resolution::Resolved,
            affected,
        }
    }

    fn fizzled() -> Self {
        Self {
            resolution: Resolution::Fizzled,
            affected: SmallVec::new(),
        }
    }
}

/// Applies effects to the board.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply `effect` against `target`, then bury dead creatures on both sides.
    pub fn resolve(effect: &Effect, target: Target, ctx: &mut EffectContext<'_>) -> EffectReport {
        let report = match (effect, target) {
            (_, Target::NoLegalTarget) => EffectReport::fizzled(),
            (Effect::Destroy { .. }, Target::Card { id, .. }) => Self::destroy(id, ctx),
            (Effect::ColorStat { color, side, change }, _) => {
                Self::color_stat(*color, *side, *change, ctx)
            }
            (Effect::DamageAllCreatures { side, amount }, _) => {
                Self::damage_all(*side, *amount, ctx)
            }
            (Effect::DamagePlayerOrCreature { amount }, Target::Player) => {
                ctx.opponent.take_damage(*amount, ctx.events);
                EffectReport::resolved(SmallVec::new())
            }
            (Effect::DamagePlayerOrCreature { amount }, Target::Card { id, .. }) => {
                if ctx.opponent.damage_creature(id, *amount, ctx.events) {
                    EffectReport::resolved(SmallVec::new())
                } else {
                    EffectReport::fizzled()
                }
            }
            (Effect::Revive, Target::Card { id, .. }) => Self::revive(id, ctx),
            (Effect::GrantAbility { ability, side }, Target::Card { id, .. }) => {
                Self::set_ability(*side, id, *ability, true, ctx)
            }
            (Effect::RemoveAbility { ability, side }, Target::Card { id, .. }) => {
                Self::set_ability(*side, id, *ability, false, ctx)
            }
            (Effect::RemoveAbilityFromColor { ability, color, side }, _) => {
                Self::remove_from_color(*ability, *color, *side, ctx)
            }
            (effect, target) => {
                log::warn!("{effect:?} cannot resolve against {target:?}");
                EffectReport::fizzled()
            }
        };

        ctx.own.bury_dead(ctx.events);
        ctx.opponent.bury_dead(ctx.events);
        report
    }

    /// Undo `effect` once on every creature in `affected` still in play on
    /// either side. Does not bury; callers that reverse outside `resolve`
    /// must bury afterwards.
    pub fn reverse(effect: &Effect, affected: &[InstanceId], ctx: &mut EffectContext<'_>) {
        for &id in affected {
            let EffectContext {
                own,
                opponent,
                events,
                ..
            } = &mut *ctx;
            let player: &mut PlayerState = if own.zones.in_play(id).is_some() {
                &mut **own
            } else if opponent.zones.in_play(id).is_some() {
                &mut **opponent
            } else {
                continue;
            };
            let owner = player.id;
            let Some(creature) = player.zones.in_play_mut(id).and_then(CardEntity::creature_mut)
            else {
                continue;
            };

            match effect {
                Effect::ColorStat { change, .. } => {
                    match change {
                        StatChange::Boost => creature.weaken(),
                        StatChange::Weaken => creature.boost(),
                        StatChange::AttackBoost => creature.drain_attack_boost(),
                    }
                    events.push(GameEvent::StatsChanged {
                        owner,
                        card: id,
                        attack: creature.attack,
                        hp: creature.hp,
                    });
                }
                Effect::GrantAbility { ability, .. }
                | Effect::RemoveAbility { ability, .. }
                | Effect::RemoveAbilityFromColor { ability, .. } => {
                    creature.reset_ability(*ability);
                    events.push(GameEvent::AbilityChanged {
                        owner,
                        card: id,
                        ability: *ability,
                        active: creature.has(*ability),
                    });
                }
                _ => {}
            }
        }
    }

    /// The state on `side` together with the event log.
    fn split<'c>(
        ctx: &'c mut EffectContext<'_>,
        side: Side,
    ) -> (&'c mut PlayerState, &'c mut Vec<GameEvent>) {
        let EffectContext {
            own,
            opponent,
            events,
            ..
        } = ctx;
        let player: &'c mut PlayerState = match side {
            Side::Own => &mut **own,
            Side::Opponent => &mut **opponent,
        };
        (player, &mut **events)
    }

    fn destroy(id: InstanceId, ctx: &mut EffectContext<'_>) -> EffectReport {
        let Some(card) = ctx.opponent.zones.take_by_id(Zone::InPlay, id) else {
            return EffectReport::fizzled();
        };

        if card.category() == Category::Enhancement {
            let catalog = ctx.catalog;
            let affected = card
                .enhancement()
                .map(|enhancement| enhancement.affected.clone())
                .unwrap_or_default();
            let definition = catalog.definition(card.card);
            if let Some(effect) = definition.effect() {
                log::debug!("reversing {} on {} creatures", definition.name, affected.len());
                Self::reverse(effect, &affected, ctx);
            }
        }

        let owner = ctx.opponent.id;
        ctx.opponent.zones.put(Zone::Discard, card);
        ctx.events.push(GameEvent::CardMoved {
            owner,
            card: id,
            from: Zone::InPlay,
            to: Zone::Discard,
        });
        EffectReport::resolved(SmallVec::new())
    }

    fn color_stat(
        color: Color,
        side: Side,
        change: StatChange,
        ctx: &mut EffectContext<'_>,
    ) -> EffectReport {
        let (player, events) = Self::split(ctx, side);
        let owner = player.id;
        let mut affected = SmallVec::new();

        for card in player.zones.creatures_in_play_mut() {
            if card.color != Some(color) {
                continue;
            }
            let id = card.id;
            let Some(creature) = card.creature_mut() else {
                continue;
            };
            match change {
                StatChange::Boost => creature.boost(),
                StatChange::Weaken => creature.weaken(),
                StatChange::AttackBoost => creature.boost_attack_only(),
            }
            let (attack, hp) = change.delta();
            log::debug!("{id} {attack:+}/{hp:+}");
            affected.push(id);
            events.push(GameEvent::StatsChanged {
                owner,
                card: id,
                attack: creature.attack,
                hp: creature.hp,
            });
        }
        EffectReport::resolved(affected)
    }

    fn damage_all(side: Side, amount: i32, ctx: &mut EffectContext<'_>) -> EffectReport {
        let (player, events) = Self::split(ctx, side);
        let targets: SmallVec<[InstanceId; 8]> =
            player.zones.creatures_in_play().map(|card| card.id).collect();
        for id in targets {
            player.damage_creature(id, amount, events);
        }
        EffectReport::resolved(SmallVec::new())
    }

    fn revive(id: InstanceId, ctx: &mut EffectContext<'_>) -> EffectReport {
        let Some(card) = ctx.own.zones.take_by_id(Zone::Discard, id) else {
            return EffectReport::fizzled();
        };
        ctx.own.zones.put(Zone::Hand, card);
        ctx.events.push(GameEvent::CardMoved {
            owner: ctx.own.id,
            card: id,
            from: Zone::Discard,
            to: Zone::Hand,
        });
        EffectReport::resolved(SmallVec::new())
    }

    fn set_ability(
        side: Side,
        id: InstanceId,
        ability: Ability,
        active: bool,
        ctx: &mut EffectContext<'_>,
    ) -> EffectReport {
        let (player, events) = Self::split(ctx, side);
        let owner = player.id;
        let Some(creature) = player.zones.in_play_mut(id).and_then(CardEntity::creature_mut) else {
            return EffectReport::fizzled();
        };
        creature.set_ability(ability, active);
        events.push(GameEvent::AbilityChanged {
            owner,
            card: id,
            ability,
            active,
        });
        EffectReport::resolved(smallvec::smallvec![id])
    }

    fn remove_from_color(
        ability: Ability,
        color: Color,
        side: Side,
        ctx: &mut EffectContext<'_>,
    ) -> EffectReport {
        let (player, events) = Self::split(ctx, side);
        let owner = player.id;
        let mut affected = SmallVec::new();

        for card in player.zones.creatures_in_play_mut() {
            if card.color != Some(color) {
                continue;
            }
            let id = card.id;
            if let Some(creature) = card.creature_mut() {
                creature.set_ability(ability, false);
                affected.push(id);
                events.push(GameEvent::AbilityChanged {
                    owner,
                    card: id,
                    ability,
                    active: false,
                });
            }
        }
        EffectReport::resolved(affected)
    }
}
