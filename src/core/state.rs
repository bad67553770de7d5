//! Match state.
//!
//! `MatchState` is everything that changes during a duel: both players'
//! hit points, pools and zones, whose turn it is, the combat in progress
//! and the event history. The rules engine is the only writer; drivers
//! read it to render the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::RulesConfig;
use super::event::GameEvent;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{CardCatalog, CardEntity, CardId, InstanceId};
use crate::mana::ResourcePool;
use crate::rules::GameResult;
use crate::zones::{Zone, ZoneSet};

/// One player's side of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub hp: i32,
    pub pool: ResourcePool,
    pub zones: ZoneSet,
    pub lands_played: u32,
}

impl PlayerState {
    /// A player with empty zones.
    #[must_use]
    pub fn new(id: PlayerId, hp: i32) -> Self {
        Self {
            id,
            hp,
            pool: ResourcePool::new(),
            zones: ZoneSet::new(),
            lands_played: 0,
        }
    }

    /// Subtract `amount` from hit points and record it.
    pub fn take_damage(&mut self, amount: i32, events: &mut Vec<GameEvent>) {
        self.hp -= amount;
        log::debug!("{} takes {amount}, hp now {}", self.id, self.hp);
        events.push(GameEvent::PlayerDamaged {
            player: self.id,
            amount,
            hp: self.hp,
        });
    }

    /// Damage one creature in play and record it. Returns false if the
    /// creature is not in play.
    pub fn damage_creature(
        &mut self,
        card: InstanceId,
        amount: i32,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        let Some(creature) = self
            .zones
            .in_play_mut(card)
            .and_then(CardEntity::creature_mut)
        else {
            return false;
        };
        creature.apply_damage(amount);
        events.push(GameEvent::CreatureDamaged {
            owner: self.id,
            card,
            amount,
            hp: creature.current_hp(),
        });
        true
    }

    /// Move dead creatures to the discard pile and record each death.
    pub fn bury_dead(&mut self, events: &mut Vec<GameEvent>) {
        for card in self.zones.sweep_dead() {
            log::debug!("{card} owned by {} died", self.id);
            events.push(GameEvent::CreatureDied {
                owner: self.id,
                card,
            });
            events.push(GameEvent::CardMoved {
                owner: self.id,
                card,
                from: Zone::InPlay,
                to: Zone::Discard,
            });
        }
    }
}

/// One declared attacker awaiting or past its block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAttack {
    pub attacker: InstanceId,
    pub resolved: bool,
}

/// Combat in progress during the active player's turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    /// Attackers in declaration order.
    pub attacks: SmallVec<[PendingAttack; 8]>,
    /// Defending creatures that have already blocked.
    pub blockers: SmallVec<[InstanceId; 8]>,
}

impl CombatState {
    /// Attackers not yet answered by the defender.
    pub fn unresolved(&self) -> impl Iterator<Item = (usize, InstanceId)> + '_ {
        self.attacks
            .iter()
            .enumerate()
            .filter(|(_, attack)| !attack.resolved)
            .map(|(index, attack)| (index, attack.attacker))
    }
}

/// Mutable state of a duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub players: PlayerMap<PlayerState>,
    pub active: PlayerId,
    pub turn: u32,
    pub combat: Option<CombatState>,
    pub result: Option<GameResult>,
    pub history: im::Vector<GameEvent>,
    next_instance: u32,
}

impl MatchState {
    /// Both players at starting hit points with empty zones, player one to move.
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            players: PlayerMap::new(|id| PlayerState::new(id, config.starting_hp)),
            active: PlayerId::ONE,
            turn: 1,
            combat: None,
            result: None,
            history: im::Vector::new(),
            next_instance: 0,
        }
    }

    /// Allocate an instance ID unique within this match.
    pub fn allocate_instance(&mut self) -> InstanceId {
        let id = InstanceId::new(self.next_instance);
        self.next_instance += 1;
        id
    }

    /// Create a copy of `card` owned by `owner` and put it in `zone`.
    ///
    /// Panics if `card` is not in `catalog`.
    pub fn create_card(
        &mut self,
        catalog: &CardCatalog,
        owner: PlayerId,
        card: CardId,
        zone: Zone,
    ) -> InstanceId {
        let id = self.allocate_instance();
        let entity = CardEntity::new(id, catalog.definition(card), owner);
        self.players[owner].zones.put(zone, entity);
        id
    }

    /// A player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    /// A player's state, mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id]
    }

    /// The player whose turn it is not.
    #[must_use]
    pub fn defender(&self) -> PlayerId {
        self.active.opponent()
    }
}
