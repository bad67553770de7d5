//! A simple scripted opponent.
//!
//! `AutoPilot` plays both sides of a match with a fixed greedy policy:
//! play a land, tap everything, cast whatever is affordable, attack with
//! every untapped creature and block only when the blocker survives. It is
//! deterministic, so a seeded match always plays out the same way.

use smallvec::SmallVec;

use crate::cards::{CardKind, Category, EntityState, InstanceId};
use crate::core::{IllegalAction, PlayerId};
use crate::effects::{Effect, TargetChoice, TargetDomain};
use crate::rules::{GameResult, Match};
use crate::zones::Zone;

/// Greedy scripted driver.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoPilot;

impl AutoPilot {
    /// Play turns until the match ends or `max_turns` have started.
    pub fn play_out(&self, game: &mut Match, max_turns: u32) -> Result<Option<GameResult>, IllegalAction> {
        while !game.is_over() && game.turn() <= max_turns {
            self.play_turn(game)?;
        }
        Ok(game.result())
    }

    /// Play one full turn for the active player, blocking for the defender.
    pub fn play_turn(&self, game: &mut Match) -> Result<(), IllegalAction> {
        let player = game.active_player();
        game.start_turn(player)?;
        if game.is_over() {
            return Ok(());
        }

        self.play_land(game, player)?;
        self.tap_lands(game, player)?;
        self.cast_spells(game, player)?;
        if game.is_over() {
            return Ok(());
        }

        self.attack(game, player)?;
        if game.is_over() {
            return Ok(());
        }
        game.end_turn(player)?;
        Ok(())
    }

    fn play_land(&self, game: &mut Match, player: PlayerId) -> Result<(), IllegalAction> {
        let land = game
            .player(player)
            .zones
            .cards(Zone::Hand)
            .iter()
            .position(|card| card.category() == Category::Land);
        if let Some(index) = land {
            game.play_card(player, index, None)?;
        }
        Ok(())
    }

    fn tap_lands(&self, game: &mut Match, player: PlayerId) -> Result<(), IllegalAction> {
        let untapped: SmallVec<[usize; 8]> = game
            .player(player)
            .zones
            .cards(Zone::InPlay)
            .iter()
            .enumerate()
            .filter(|(_, card)| matches!(card.state, EntityState::Land { tapped: false, .. }))
            .map(|(index, _)| index)
            .collect();
        for index in untapped {
            game.tap_land_for_mana(player, index)?;
        }
        Ok(())
    }

    /// Cast affordable cards from hand, first to last, until nothing more fits.
    fn cast_spells(&self, game: &mut Match, player: PlayerId) -> Result<(), IllegalAction> {
        'scan: while !game.is_over() {
            let own = game.player(player);
            let opponent = game.player(player.opponent());
            let mut plays = SmallVec::<[(usize, Option<TargetChoice>); 8]>::new();

            for (index, card) in own.zones.cards(Zone::Hand).iter().enumerate() {
                let definition = game.catalog().definition(card.card);
                if !own.pool.can_afford(&definition.cost) {
                    continue;
                }
                match &definition.kind {
                    CardKind::Land { .. } => {}
                    CardKind::Creature(_) => plays.push((index, None)),
                    CardKind::Sorcery(effect) | CardKind::Enhancement(effect) => {
                        let domain = TargetDomain::for_effect(effect, &own.zones, &opponent.zones);
                        let choice = match (effect, &domain) {
                            (Effect::DamagePlayerOrCreature { .. }, _) => Some(TargetChoice::Player),
                            (_, TargetDomain::Untargeted) => None,
                            (_, domain) if domain.candidates().is_empty() => continue,
                            _ => Some(TargetChoice::Card(0)),
                        };
                        plays.push((index, choice));
                    }
                }
            }

            for (index, choice) in plays {
                match game.play_card(player, index, choice) {
                    Ok(_) => continue 'scan,
                    Err(IllegalAction::MatchOver) => return Err(IllegalAction::MatchOver),
                    Err(_) => {}
                }
            }
            break;
        }
        Ok(())
    }

    fn attack(&self, game: &mut Match, player: PlayerId) -> Result<(), IllegalAction> {
        let attackers: SmallVec<[usize; 8]> = game
            .player(player)
            .zones
            .cards(Zone::InPlay)
            .iter()
            .enumerate()
            .filter(|(_, card)| card.creature().is_some_and(|creature| !creature.tapped))
            .map(|(index, _)| index)
            .collect();
        game.declare_attackers(player, &attackers)?;

        let defender = player.opponent();
        let declared: SmallVec<[InstanceId; 8]> = game
            .state()
            .combat
            .iter()
            .flat_map(|combat| combat.attacks.iter().map(|attack| attack.attacker))
            .collect();
        let mut used: SmallVec<[InstanceId; 8]> = SmallVec::new();

        for (attacker_index, attacker) in declared.into_iter().enumerate() {
            if game.is_over() {
                break;
            }
            let power = game
                .player(player)
                .zones
                .in_play(attacker)
                .and_then(|card| card.creature())
                .map_or(0, |creature| creature.attack_power());
            let blocker = game
                .player(defender)
                .zones
                .cards(Zone::InPlay)
                .iter()
                .enumerate()
                .find(|(_, card)| {
                    !used.contains(&card.id)
                        && card
                            .creature()
                            .is_some_and(|creature| !creature.tapped && creature.current_hp() > power)
                })
                .map(|(index, card)| (index, card.id));

            if let Some((_, id)) = blocker {
                used.push(id);
            }
            game.assign_blockers(defender, attacker_index, blocker.map(|(index, _)| index))?;
        }
        Ok(())
    }
}
