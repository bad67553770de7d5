//! The duel rules engine.
//!
//! `Match` owns the card catalog, the rules configuration, the match RNG and
//! the `MatchState`. A turn driver calls its operations in order; a typical
//! turn is:
//!
//! 1. `start_turn` (or `untap_all`, `reset_creature_stats_to_base`, `draw`)
//! 2. `tap_land_for_mana` / `play_card`, any number of times
//! 3. `declare_attackers`, then `assign_blockers` once per attacker by the
//!    defending player
//! 4. `tap_land_for_mana` / `play_card` again
//! 5. `end_turn`
//!
//! Every operation returns `Ok(Outcome)` with the events it produced, or
//! `Err(IllegalAction)` with the board untouched. Once a player is defeated
//! every operation returns `IllegalAction::MatchOver`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardCatalog, CardEntity, CardId, CardKind, EntityState, InstanceId};
use crate::combat::CombatResolver;
use crate::core::{
    CombatState, GameEvent, GameRng, GameRngState, IllegalAction, MatchState, Outcome,
    PendingAttack, PlayerId, PlayerState, Resolution, RulesConfig, SetupError,
};
use crate::effects::{
    Effect, EffectContext, EffectResolver, Target, TargetChoice, TargetDomain,
};
use crate::zones::{Zone, ZoneSet};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players fell at once.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{player} wins"),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

/// How a validated `play_card` will be carried out.
enum Play<'c> {
    Land,
    Creature,
    Spell {
        effect: &'c Effect,
        target: Target,
        stays_in_play: bool,
    },
}

fn log_rejection(err: &IllegalAction) {
    log::warn!("rejected: {err}");
}

/// A two-player duel.
#[derive(Clone, Debug)]
pub struct Match {
    catalog: CardCatalog,
    config: RulesConfig,
    rng: GameRng,
    state: MatchState,
}

impl Match {
    /// Set up a duel: build and shuffle both libraries, then deal opening hands.
    pub fn new(
        catalog: CardCatalog,
        deck_one: &[CardId],
        deck_two: &[CardId],
        config: RulesConfig,
        seed: u64,
    ) -> Result<Self, SetupError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let mut state = MatchState::new(&config);

        for (player, deck) in [(PlayerId::ONE, deck_one), (PlayerId::TWO, deck_two)] {
            if deck.len() < config.opening_hand {
                return Err(SetupError::DeckTooSmall {
                    player,
                    size: deck.len(),
                    needed: config.opening_hand,
                });
            }
            let mut library = Vec::with_capacity(deck.len());
            for &card in deck {
                let definition = catalog.get(card).ok_or(SetupError::UnknownCard(card))?;
                library.push(CardEntity::new(state.allocate_instance(), definition, player));
            }
            state.players[player].zones = ZoneSet::with_library(library, &mut rng);
        }

        let mut opening = Vec::new();
        for player in PlayerId::both() {
            let zones = &mut state.players[player].zones;
            for _ in 0..config.opening_hand {
                if let Some(card) = zones.draw() {
                    opening.push(GameEvent::CardDrawn { player, card: card.id });
                    zones.put(Zone::Hand, card);
                }
            }
        }
        state.history.extend(opening);

        log::info!(
            "match started (seed {seed}): {} vs {} cards",
            deck_one.len(),
            deck_two.len()
        );
        Ok(Self {
            catalog,
            config,
            rng,
            state,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        self.state.player(id)
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.state.active
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.result.is_some()
    }

    /// Every event since the match began.
    #[must_use]
    pub fn history(&self) -> &im::Vector<GameEvent> {
        &self.state.history
    }

    /// RNG position, for reproducing later shuffles.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Put a fresh copy of `card` into one of `owner`'s zones.
    ///
    /// For scripted positions (puzzles, tests). Panics if `card` is not in
    /// the catalog.
    pub fn create_card(&mut self, owner: PlayerId, card: CardId, zone: Zone) -> InstanceId {
        self.state.create_card(&self.catalog, owner, card, zone)
    }

    /// Direct access to the state, for scripted positions.
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// Shuffle a player's library with the match RNG.
    pub fn shuffle_library(&mut self, player: PlayerId) {
        self.state.players[player].zones.shuffle_library(&mut self.rng);
    }

    // =========================================================================
    // Driver operations
    // =========================================================================

    /// Untap, restore creature hit points, then draw.
    pub fn start_turn(&mut self, player: PlayerId) -> Result<Outcome, IllegalAction> {
        let mut events = self.untap_all(player)?.events;
        events.extend(self.reset_creature_stats_to_base(player)?.events);
        let mut outcome = self.draw(player)?;
        events.append(&mut outcome.events);
        outcome.events = events;
        Ok(outcome)
    }

    /// Draw the top card of the library.
    ///
    /// With a full hand the card goes to the discard pile. Drawing from an
    /// empty library loses the match.
    pub fn draw(&mut self, player: PlayerId) -> Result<Outcome, IllegalAction> {
        self.ensure_active(player).inspect_err(log_rejection)?;

        let mut events = Vec::new();
        let limit = self.config.hand_limit;
        let zones = &mut self.state.players[player].zones;
        match zones.draw() {
            Some(card) => {
                let id = card.id;
                if zones.len(Zone::Hand) >= limit {
                    zones.put(Zone::Discard, card);
                    events.push(GameEvent::DrawnToDiscard { player, card: id });
                } else {
                    zones.put(Zone::Hand, card);
                    events.push(GameEvent::CardDrawn { player, card: id });
                }
            }
            None => {
                events.push(GameEvent::LibraryEmpty { player });
                self.conclude(GameResult::Winner(player.opponent()), &mut events);
            }
        }
        Ok(self.finish(events, Resolution::Resolved))
    }

    /// Untap every land and creature the player has in play.
    pub fn untap_all(&mut self, player: PlayerId) -> Result<Outcome, IllegalAction> {
        self.ensure_active(player).inspect_err(log_rejection)?;
        self.state.players[player].zones.untap_all();
        Ok(self.finish(Vec::new(), Resolution::Resolved))
    }

    /// Heal every creature the player has in play to its base hit points.
    ///
    /// Abilities are restored too when the configuration asks for it.
    pub fn reset_creature_stats_to_base(&mut self, player: PlayerId) -> Result<Outcome, IllegalAction> {
        self.ensure_active(player).inspect_err(log_rejection)?;
        let events = self.restore_creatures(player);
        Ok(self.finish(events, Resolution::Resolved))
    }

    /// Tap the land at `index` in play for one mana.
    pub fn tap_land_for_mana(&mut self, player: PlayerId, index: usize) -> Result<Outcome, IllegalAction> {
        self.try_tap_land(player, index).inspect_err(log_rejection)
    }

    /// Play the card at `hand_index`.
    ///
    /// Lands go into play (one per turn). Creatures are paid for and go into
    /// play. Sorceries are paid for, resolve against `choice` and go to the
    /// discard pile. Enhancements resolve the same way and stay in play,
    /// unless they fizzle.
    ///
    /// Targets and mana are checked before anything moves, so an
    /// `IllegalAction` leaves the board as it was. A targeted card with no
    /// legal target still costs its mana and fizzles.
    pub fn play_card(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        choice: Option<TargetChoice>,
    ) -> Result<Outcome, IllegalAction> {
        self.try_play_card(player, hand_index, choice)
            .inspect_err(log_rejection)
    }

    /// Declare the creatures at `indices` in play as attackers and tap them.
    ///
    /// An empty list means no combat this turn.
    pub fn declare_attackers(&mut self, player: PlayerId, indices: &[usize]) -> Result<Outcome, IllegalAction> {
        self.try_declare_attackers(player, indices)
            .inspect_err(log_rejection)
    }

    /// Answer the attacker at `attacker_index` (declaration order) with the
    /// creature at `blocker_index` in play, or with no blocker. The fight is
    /// resolved immediately.
    pub fn assign_blockers(
        &mut self,
        defending_player: PlayerId,
        attacker_index: usize,
        blocker_index: Option<usize>,
    ) -> Result<Outcome, IllegalAction> {
        self.try_assign_blockers(defending_player, attacker_index, blocker_index)
            .inspect_err(log_rejection)
    }

    /// End the turn: unanswered attackers hit unblocked, the pool empties,
    /// the land count resets and the other player becomes active. If an
    /// unanswered attacker decides the match, the remaining ones never
    /// strike and the turn does not pass.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<Outcome, IllegalAction> {
        self.ensure_active(player).inspect_err(log_rejection)?;

        let mut events = Vec::new();
        if let Some(combat) = self.state.combat.take() {
            let unanswered: SmallVec<[InstanceId; 8]> = combat.unresolved().map(|(_, id)| id).collect();
            for attacker in unanswered {
                events.push(GameEvent::BlockAssigned {
                    player: player.opponent(),
                    attacker,
                    blocker: None,
                });
                self.fight(attacker, None, &mut events);
                if self.check_defeat(&mut events) {
                    return Ok(self.finish(events, Resolution::Resolved));
                }
            }
        }

        let own = &mut self.state.players[player];
        own.pool.reset();
        own.lands_played = 0;
        events.push(GameEvent::TurnEnded {
            player,
            turn: self.state.turn,
        });

        self.state.active = player.opponent();
        if self.state.active == PlayerId::ONE {
            self.state.turn += 1;
        }
        log::debug!("{player} ended turn; {} to act", self.state.active);
        Ok(self.finish(events, Resolution::Resolved))
    }

    // =========================================================================
    // Operation bodies
    // =========================================================================

    fn ensure_active(&self, player: PlayerId) -> Result<(), IllegalAction> {
        if self.is_over() {
            return Err(IllegalAction::MatchOver);
        }
        if player != self.state.active {
            return Err(IllegalAction::NotYourTurn(player));
        }
        Ok(())
    }

    fn try_tap_land(&mut self, player: PlayerId, index: usize) -> Result<Outcome, IllegalAction> {
        self.ensure_active(player)?;

        let own = &mut self.state.players[player];
        let len = own.zones.len(Zone::InPlay);
        let card = own
            .zones
            .get_mut(Zone::InPlay, index)
            .ok_or(IllegalAction::InPlayIndexOutOfRange { index, len })?;
        let EntityState::Land { produces, tapped } = card.state else {
            return Err(IllegalAction::NotALand(index));
        };
        if tapped {
            return Err(IllegalAction::AlreadyTapped(index));
        }

        card.tap(&mut own.pool);
        let events = vec![GameEvent::ManaAdded {
            player,
            land: card.id,
            color: produces,
        }];
        Ok(self.finish(events, Resolution::Resolved))
    }

    fn try_play_card(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        choice: Option<TargetChoice>,
    ) -> Result<Outcome, IllegalAction> {
        self.ensure_active(player)?;

        let catalog = &self.catalog;
        let config = &self.config;
        let (own, opponent) = self.state.players.split_mut(player);

        let hand_len = own.zones.len(Zone::Hand);
        let card = own
            .zones
            .get(Zone::Hand, hand_index)
            .ok_or(IllegalAction::HandIndexOutOfRange { index: hand_index, len: hand_len })?;
        let definition = catalog.definition(card.card);

        let play = match &definition.kind {
            CardKind::Land { .. } => {
                if own.lands_played >= config.lands_per_turn {
                    return Err(IllegalAction::LandAlreadyPlayed(config.lands_per_turn));
                }
                Play::Land
            }
            CardKind::Creature(_) => Play::Creature,
            CardKind::Sorcery(effect) | CardKind::Enhancement(effect) => {
                let domain = TargetDomain::for_effect(effect, &own.zones, &opponent.zones);
                let target = domain.select(choice)?;
                // The cast card leaves the hand before a revived card arrives.
                let hand_after_cast = hand_len - 1;
                if matches!(effect, Effect::Revive)
                    && matches!(target, Target::Card { .. })
                    && hand_after_cast >= config.hand_limit
                {
                    return Err(IllegalAction::HandFull(hand_after_cast));
                }
                Play::Spell {
                    effect,
                    target,
                    stays_in_play: matches!(definition.kind, CardKind::Enhancement(_)),
                }
            }
        };
        own.pool.check(&definition.cost)?;

        // Validated; from here on nothing can fail.
        let mut events = Vec::new();
        own.pool.pay(&definition.cost)?;
        if !definition.cost.is_free() {
            events.push(GameEvent::ManaPaid {
                player,
                cost: definition.cost.clone(),
            });
        }
        let mut card = own
            .zones
            .take(Zone::Hand, hand_index)
            .ok_or(IllegalAction::HandIndexOutOfRange { index: hand_index, len: hand_len })?;
        let id = card.id;
        log::debug!("{player} plays {} ({id})", definition.name);
        events.push(GameEvent::CardPlayed {
            player,
            card: id,
            card_id: definition.id,
        });

        let (destination, resolution) = match play {
            Play::Land => {
                own.lands_played += 1;
                (Zone::InPlay, Resolution::Resolved)
            }
            Play::Creature => (Zone::InPlay, Resolution::Resolved),
            Play::Spell {
                effect,
                target,
                stays_in_play,
            } => {
                let mut ctx = EffectContext {
                    own: &mut *own,
                    opponent: &mut *opponent,
                    catalog,
                    events: &mut events,
                };
                let report = EffectResolver::resolve(effect, target, &mut ctx);
                if report.resolution == Resolution::Fizzled {
                    log::debug!("{} fizzled", definition.name);
                    events.push(GameEvent::EffectFizzled { player, card: id });
                    (Zone::Discard, Resolution::Fizzled)
                } else if stays_in_play {
                    if let Some(enhancement) = card.enhancement_mut() {
                        enhancement.affected = report.affected;
                    }
                    (Zone::InPlay, Resolution::Resolved)
                } else {
                    (Zone::Discard, Resolution::Resolved)
                }
            }
        };

        own.zones.put(destination, card);
        events.push(GameEvent::CardMoved {
            owner: player,
            card: id,
            from: Zone::Hand,
            to: destination,
        });
        Ok(self.finish(events, resolution))
    }

    fn try_declare_attackers(&mut self, player: PlayerId, indices: &[usize]) -> Result<Outcome, IllegalAction> {
        self.ensure_active(player)?;
        if self.state.combat.is_some() {
            return Err(IllegalAction::AttackersAlreadyDeclared);
        }

        let own = &mut self.state.players[player];
        let len = own.zones.len(Zone::InPlay);
        let mut chosen: SmallVec<[usize; 8]> = SmallVec::new();
        for &index in indices {
            if chosen.contains(&index) {
                return Err(IllegalAction::DuplicateAttacker(index));
            }
            let creature = own
                .zones
                .get(Zone::InPlay, index)
                .ok_or(IllegalAction::InPlayIndexOutOfRange { index, len })?
                .creature()
                .ok_or(IllegalAction::NotACreature(index))?;
            if creature.tapped {
                return Err(IllegalAction::AlreadyTapped(index));
            }
            chosen.push(index);
        }

        let mut combat = CombatState::default();
        let mut events = Vec::new();
        for index in chosen {
            if let Some(card) = own.zones.get_mut(Zone::InPlay, index) {
                card.tap(&mut own.pool);
                combat.attacks.push(PendingAttack {
                    attacker: card.id,
                    resolved: false,
                });
                events.push(GameEvent::AttackerDeclared {
                    player,
                    card: card.id,
                });
            }
        }
        self.state.combat = Some(combat);
        Ok(self.finish(events, Resolution::Resolved))
    }

    fn try_assign_blockers(
        &mut self,
        defending_player: PlayerId,
        attacker_index: usize,
        blocker_index: Option<usize>,
    ) -> Result<Outcome, IllegalAction> {
        if self.is_over() {
            return Err(IllegalAction::MatchOver);
        }
        if defending_player != self.state.defender() {
            return Err(IllegalAction::NotDefending(defending_player));
        }
        let combat = self
            .state
            .combat
            .as_ref()
            .ok_or(IllegalAction::NoAttackersDeclared)?;
        let attacker = combat
            .attacks
            .get(attacker_index)
            .filter(|attack| !attack.resolved)
            .ok_or(IllegalAction::UnknownAttacker(attacker_index))?
            .attacker;

        let blocker = match blocker_index {
            None => None,
            Some(index) => {
                let zones = &self.state.players[defending_player].zones;
                let card = zones.get(Zone::InPlay, index).ok_or(IllegalAction::InPlayIndexOutOfRange {
                    index,
                    len: zones.len(Zone::InPlay),
                })?;
                let creature = card.creature().ok_or(IllegalAction::NotACreature(index))?;
                if creature.tapped {
                    return Err(IllegalAction::AlreadyTapped(index));
                }
                if combat.blockers.contains(&card.id) {
                    return Err(IllegalAction::BlockerAlreadyAssigned(index));
                }
                Some(card.id)
            }
        };

        if let Some(combat) = self.state.combat.as_mut() {
            combat.attacks[attacker_index].resolved = true;
            combat.blockers.extend(blocker);
        }
        let mut events = vec![GameEvent::BlockAssigned {
            player: defending_player,
            attacker,
            blocker,
        }];
        self.fight(attacker, blocker, &mut events);
        Ok(self.finish(events, Resolution::Resolved))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Resolve one attacker against an optional blocker, apply player damage
    /// and bury the dead.
    fn fight(&mut self, attacker: InstanceId, blocker: Option<InstanceId>, events: &mut Vec<GameEvent>) {
        let attacking = self.state.active;
        let (offense, defense) = self.state.players.split_mut(attacking);

        let Some(attacker_state) = offense
            .zones
            .in_play_mut(attacker)
            .and_then(CardEntity::creature_mut)
        else {
            log::debug!("{attacker} left play before its fight");
            return;
        };
        let blocker_state = match blocker {
            Some(id) => defense.zones.in_play_mut(id).and_then(CardEntity::creature_mut),
            None => None,
        };

        let report = CombatResolver::resolve(attacker_state, blocker_state);

        if let Some(blocker) = blocker {
            if let Some(creature) = defense.zones.in_play(blocker).and_then(CardEntity::creature) {
                events.push(GameEvent::CreatureDamaged {
                    owner: defense.id,
                    card: blocker,
                    amount: report.damage_to_defender,
                    hp: creature.current_hp(),
                });
            }
            if let Some(creature) = offense.zones.in_play(attacker).and_then(CardEntity::creature) {
                events.push(GameEvent::CreatureDamaged {
                    owner: offense.id,
                    card: attacker,
                    amount: report.damage_to_attacker,
                    hp: creature.current_hp(),
                });
            }
        }
        if report.damage_to_player > 0 {
            defense.take_damage(report.damage_to_player, events);
        }
        offense.bury_dead(events);
        defense.bury_dead(events);
    }

    /// Heal the player's creatures; restore abilities when configured.
    fn restore_creatures(&mut self, player: PlayerId) -> Vec<GameEvent> {
        let reset_abilities = self.config.reset_abilities_at_upkeep;
        let mut events = Vec::new();
        for card in self.state.players[player].zones.creatures_in_play_mut() {
            let id = card.id;
            let Some(creature) = card.creature_mut() else {
                continue;
            };
            let before = creature.clone();
            creature.reset_to_base_hp();
            if reset_abilities {
                creature.reset_abilities_to_base();
            }
            if creature.hp != before.hp {
                events.push(GameEvent::StatsChanged {
                    owner: player,
                    card: id,
                    attack: creature.attack,
                    hp: creature.hp,
                });
            }
        }
        events
    }

    /// Record the match result.
    fn conclude(&mut self, result: GameResult, events: &mut Vec<GameEvent>) {
        log::info!("match over after turn {}: {result}", self.state.turn);
        events.push(GameEvent::MatchEnded { result });
        self.state.result = Some(result);
    }

    /// Forget enhancement targets that have left play. A creature keeps its
    /// instance ID when revived, and must come back untouched.
    fn prune_enhancements(&mut self) {
        let in_play: SmallVec<[InstanceId; 16]> = self
            .state
            .players
            .iter()
            .flat_map(|(_, player)| player.zones.creatures_in_play().map(|card| card.id))
            .collect();
        for (_, player) in self.state.players.iter_mut() {
            for index in 0..player.zones.len(Zone::InPlay) {
                if let Some(enhancement) = player
                    .zones
                    .get_mut(Zone::InPlay, index)
                    .and_then(CardEntity::enhancement_mut)
                {
                    enhancement.affected.retain(|id| in_play.contains(id));
                }
            }
        }
    }

    /// End the match if either player is at or below the hit point floor.
    /// Returns true once the match is over.
    fn check_defeat(&mut self, events: &mut Vec<GameEvent>) -> bool {
        if self.state.result.is_some() {
            return true;
        }
        let defeated = |player: PlayerId| self.config.is_defeated(self.state.players[player].hp);
        let result = match (defeated(PlayerId::ONE), defeated(PlayerId::TWO)) {
            (true, true) => GameResult::Draw,
            (true, false) => GameResult::Winner(PlayerId::TWO),
            (false, true) => GameResult::Winner(PlayerId::ONE),
            (false, false) => return false,
        };
        self.conclude(result, events);
        true
    }

    /// Check for defeat, append to history and package the outcome.
    fn finish(&mut self, mut events: Vec<GameEvent>, resolution: Resolution) -> Outcome {
        self.prune_enhancements();
        self.check_defeat(&mut events);
        self.state.history.extend(events.iter().cloned());
        Outcome {
            events,
            resolution,
            result: self.state.result,
        }
    }
}
