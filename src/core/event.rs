//! Match events and operation outcomes.
//!
//! Every successful driver operation returns an `Outcome` listing the
//! `GameEvent`s it produced, in order. The match keeps the full list in its
//! history so a driver can render or replay what happened.

use serde::{Deserialize, Serialize};

use crate::cards::{Ability, CardId, InstanceId};
use crate::core::PlayerId;
use crate::mana::{Color, CostSpec};
use crate::rules::GameResult;
use crate::zones::Zone;

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card went from library to hand.
    CardDrawn { player: PlayerId, card: InstanceId },

    /// A card was drawn with a full hand and went straight to discard.
    DrawnToDiscard { player: PlayerId, card: InstanceId },

    /// A player had to draw from an empty library.
    LibraryEmpty { player: PlayerId },

    /// A land was tapped for mana.
    ManaAdded {
        player: PlayerId,
        land: InstanceId,
        color: Color,
    },

    /// A cost was paid from a pool.
    ManaPaid { player: PlayerId, cost: CostSpec },

    /// A card was cast or put into play from hand.
    CardPlayed {
        player: PlayerId,
        card: InstanceId,
        card_id: CardId,
    },

    /// A card changed zones within its owner's zone set.
    CardMoved {
        owner: PlayerId,
        card: InstanceId,
        from: Zone,
        to: Zone,
    },

    /// A creature took damage.
    CreatureDamaged {
        owner: PlayerId,
        card: InstanceId,
        amount: i32,
        hp: i32,
    },

    /// A player took damage.
    PlayerDamaged { player: PlayerId, amount: i32, hp: i32 },

    /// A creature's attack or hit points changed outside of damage.
    StatsChanged {
        owner: PlayerId,
        card: InstanceId,
        attack: i32,
        hp: i32,
    },

    /// A creature gained or lost an ability.
    AbilityChanged {
        owner: PlayerId,
        card: InstanceId,
        ability: Ability,
        active: bool,
    },

    /// A creature's hit points fell below 1 and it went to discard.
    CreatureDied { owner: PlayerId, card: InstanceId },

    /// A targeted effect found nothing to target.
    EffectFizzled { player: PlayerId, card: InstanceId },

    /// A creature was declared as an attacker.
    AttackerDeclared { player: PlayerId, card: InstanceId },

    /// The defender answered an attacker, with a blocker or without one.
    BlockAssigned {
        player: PlayerId,
        attacker: InstanceId,
        blocker: Option<InstanceId>,
    },

    /// The active player passed the turn.
    TurnEnded { player: PlayerId, turn: u32 },

    /// The match is decided.
    MatchEnded { result: GameResult },
}

/// Whether a cast card's effect did anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    Resolved,
    Fizzled,
}

/// Result of a successful driver operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Events produced by the operation, in order.
    pub events: Vec<GameEvent>,

    /// `Fizzled` if a cast card found no legal target.
    pub resolution: Resolution,

    /// Set when this operation ended the match.
    pub result: Option<GameResult>,
}

impl Outcome {
    /// An outcome that resolved normally.
    #[must_use]
    pub fn resolved(events: Vec<GameEvent>) -> Self {
        Self {
            events,
            resolution: Resolution::Resolved,
            result: None,
        }
    }

    /// True if a cast card fizzled.
    #[must_use]
    pub fn fizzled(&self) -> bool {
        self.resolution == Resolution::Fizzled
    }

    /// True if this operation ended the match.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Total damage dealt to `player` by this operation.
    #[must_use]
    pub fn damage_to_player(&self, player: PlayerId) -> i32 {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::PlayerDamaged { player: p, amount, .. } if *p == player => Some(*amount),
                _ => None,
            })
            .sum()
    }

    /// Creatures that died during this operation.
    pub fn deaths(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.events.iter().filter_map(|event| match event {
            GameEvent::CreatureDied { card, .. } => Some(*card),
            _ => None,
        })
    }
}
