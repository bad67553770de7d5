//! Effect targeting.
//!
//! A targeted effect is cast with a `TargetChoice`: either the opposing
//! player, or an index into the list of legal card targets. The list is
//! built by `TargetDomain::for_effect` from the current board, in zone
//! order, so drivers can show it to the player and pass back a position.
//!
//! `TargetDomain::select` turns a choice into a concrete `Target` without
//! touching the board. A targeted effect whose list is empty selects
//! `Target::NoLegalTarget` and fizzles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::{Effect, Side};
use crate::cards::{Category, InstanceId};
use crate::core::IllegalAction;
use crate::zones::{Zone, ZoneSet};

/// What the caster picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetChoice {
    /// Position in the legal-target list.
    Card(usize),
    /// The opposing player.
    Player,
}

/// A resolved target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The effect is untargeted.
    Untargeted,
    /// The opposing player.
    Player,
    /// A card on `side` in `zone`.
    Card {
        side: Side,
        zone: Zone,
        id: InstanceId,
    },
    /// Targeted effect with nothing to target; the effect fizzles.
    NoLegalTarget,
}

/// Legal targets of an effect on the current board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetDomain {
    /// No choice needed.
    Untargeted,
    /// One card from `candidates`, all on `side` in `zone`.
    Cards {
        side: Side,
        zone: Zone,
        candidates: SmallVec<[InstanceId; 8]>,
    },
    /// The opposing player or one opposing creature in play.
    PlayerOrCreature { candidates: SmallVec<[InstanceId; 8]> },
}

impl TargetDomain {
    /// Build the legal-target list for `effect` cast by the owner of `own`.
    #[must_use]
    pub fn for_effect(effect: &Effect, own: &ZoneSet, opponent: &ZoneSet) -> Self {
        let board = |side: Side| match side {
            Side::Own => own,
            Side::Opponent => opponent,
        };
        match effect {
            Effect::Destroy { category } => TargetDomain::Cards {
                side: Side::Opponent,
                zone: Zone::InPlay,
                candidates: opponent.ids_of_category(Zone::InPlay, *category),
            },
            Effect::DamagePlayerOrCreature { .. } => TargetDomain::PlayerOrCreature {
                candidates: opponent.ids_of_category(Zone::InPlay, Category::Creature),
            },
            Effect::Revive => TargetDomain::Cards {
                side: Side::Own,
                zone: Zone::Discard,
                candidates: own.ids_of_category(Zone::Discard, Category::Creature),
            },
            Effect::GrantAbility { side, .. } | Effect::RemoveAbility { side, .. } => {
                TargetDomain::Cards {
                    side: *side,
                    zone: Zone::InPlay,
                    candidates: board(*side).ids_of_category(Zone::InPlay, Category::Creature),
                }
            }
            Effect::ColorStat { .. }
            | Effect::DamageAllCreatures { .. }
            | Effect::RemoveAbilityFromColor { .. } => TargetDomain::Untargeted,
        }
    }

    /// Legal card targets, in the order `TargetChoice::Card` indexes them.
    #[must_use]
    pub fn candidates(&self) -> &[InstanceId] {
        match self {
            TargetDomain::Untargeted => &[],
            TargetDomain::Cards { candidates, .. }
            | TargetDomain::PlayerOrCreature { candidates } => candidates.as_slice(),
        }
    }

    /// Turn a choice into a target.
    pub fn select(&self, choice: Option<TargetChoice>) -> Result<Target, IllegalAction> {
        match self {
            TargetDomain::Untargeted => Ok(Target::Untargeted),
            TargetDomain::Cards {
                side,
                zone,
                candidates,
            } => {
                if candidates.is_empty() {
                    return Ok(Target::NoLegalTarget);
                }
                match choice {
                    None => Err(IllegalAction::MissingTarget),
                    Some(TargetChoice::Player) => Err(IllegalAction::PlayerNotTargetable),
                    Some(TargetChoice::Card(index)) => {
                        let id = pick(candidates, index)?;
                        Ok(Target::Card {
                            side: *side,
                            zone: *zone,
                            id,
                        })
                    }
                }
            }
            TargetDomain::PlayerOrCreature { candidates } => match choice {
                None => Err(IllegalAction::MissingTarget),
                Some(TargetChoice::Player) => Ok(Target::Player),
                Some(TargetChoice::Card(index)) => Ok(Target::Card {
                    side: Side::Opponent,
                    zone: Zone::InPlay,
                    id: pick(candidates, index)?,
                }),
            },
        }
    }
}

fn pick(candidates: &[InstanceId], index: usize) -> Result<InstanceId, IllegalAction> {
    candidates
        .get(index)
        .copied()
        .ok_or(IllegalAction::InvalidTarget(index, candidates.len()))
}
