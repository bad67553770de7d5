//! Sorcery and enhancement integration tests.
//!
//! Each test scripts a board with the classic catalog, casts one card and
//! checks the board afterwards.

use manaforge::games::classic::{ids, standard_catalog};
use manaforge::{
    Ability, CardId, Color, CreatureState, GameEvent, IllegalAction, InstanceId, Match, PlayerId,
    Resolution, RulesConfig, TargetChoice, Zone,
};

const ONE: PlayerId = PlayerId::ONE;
const TWO: PlayerId = PlayerId::TWO;

fn duel() -> Match {
    let config = RulesConfig::default().with_opening_hand(0);
    Match::new(standard_catalog(), &[], &[], config, 42).unwrap()
}

fn give_mana(game: &mut Match, player: PlayerId, colors: &[Color]) {
    for &color in colors {
        game.state_mut().player_mut(player).pool.add(color);
    }
}

fn creature(game: &Match, player: PlayerId, id: InstanceId) -> CreatureState {
    game.player(player)
        .zones
        .in_play(id)
        .and_then(|card| card.creature())
        .cloned()
        .unwrap()
}

/// Put `card` in the active player's hand and return its hand index.
fn in_hand(game: &mut Match, player: PlayerId, card: CardId) -> usize {
    let id = game.create_card(player, card, Zone::Hand);
    game.player(player).zones.position(Zone::Hand, id).unwrap()
}

// =============================================================================
// Enhancements and reversal
// =============================================================================

#[test]
fn test_holy_war_boosts_white_and_disenchant_reverses() {
    let mut game = duel();
    let soldier = game.create_card(ONE, ids::SOLDIER, Zone::InPlay);
    let bear = game.create_card(ONE, ids::ANGRY_BEAR, Zone::InPlay);
    let holy_war = in_hand(&mut game, ONE, ids::HOLY_WAR);
    give_mana(&mut game, ONE, &[Color::White, Color::White]);

    let outcome = game.play_card(ONE, holy_war, None).unwrap();
    assert_eq!(outcome.resolution, Resolution::Resolved);
    assert_eq!((creature(&game, ONE, soldier).attack, creature(&game, ONE, soldier).hp), (2, 2));
    assert_eq!((creature(&game, ONE, bear).attack, creature(&game, ONE, bear).hp), (3, 2));
    assert_eq!(game.player(ONE).zones.len(Zone::InPlay), 3);

    game.end_turn(ONE).unwrap();
    let disenchant = in_hand(&mut game, TWO, ids::DISENCHANT);
    give_mana(&mut game, TWO, &[Color::White, Color::Black]);
    game.play_card(TWO, disenchant, Some(TargetChoice::Card(0))).unwrap();

    assert_eq!((creature(&game, ONE, soldier).attack, creature(&game, ONE, soldier).hp), (1, 1));
    assert_eq!(game.player(ONE).zones.len(Zone::Discard), 1);
    assert_eq!(game.player(TWO).zones.len(Zone::Discard), 1);
}

#[test]
fn test_holy_light_kills_one_hp_black_creatures() {
    let mut game = duel();
    let skeleton = game.create_card(TWO, ids::SKELETON, Zone::InPlay);
    let ghost = game.create_card(TWO, ids::GHOST, Zone::InPlay);
    let hobgoblin = game.create_card(TWO, ids::HOBGOBLIN, Zone::InPlay);
    let holy_light = in_hand(&mut game, ONE, ids::HOLY_LIGHT);
    give_mana(&mut game, ONE, &[Color::White, Color::Green]);

    let outcome = game.play_card(ONE, holy_light, None).unwrap();

    let mut dead: Vec<InstanceId> = outcome.deaths().collect();
    dead.sort();
    assert_eq!(dead, vec![skeleton, ghost]);
    assert_eq!(creature(&game, TWO, hobgoblin).hp, 3);
    assert_eq!(game.player(TWO).zones.len(Zone::Discard), 2);
}

#[test]
fn test_unholy_war_boosts_attack_only() {
    let mut game = duel();
    let skeleton = game.create_card(ONE, ids::SKELETON, Zone::InPlay);
    let unholy_war = in_hand(&mut game, ONE, ids::UNHOLY_WAR);
    give_mana(&mut game, ONE, &[Color::Black, Color::Black]);

    game.play_card(ONE, unholy_war, None).unwrap();
    assert_eq!((creature(&game, ONE, skeleton).attack, creature(&game, ONE, skeleton).hp), (3, 1));

    game.end_turn(ONE).unwrap();
    let disenchant = in_hand(&mut game, TWO, ids::DISENCHANT);
    give_mana(&mut game, TWO, &[Color::White, Color::White]);
    game.play_card(TWO, disenchant, Some(TargetChoice::Card(0))).unwrap();

    assert_eq!(creature(&game, ONE, skeleton).attack, 1);
}

#[test]
fn test_rage_grants_trample_until_removed() {
    let mut game = duel();
    let soldier = game.create_card(ONE, ids::SOLDIER, Zone::InPlay);
    let rage = in_hand(&mut game, ONE, ids::RAGE);
    give_mana(&mut game, ONE, &[Color::Green]);

    game.play_card(ONE, rage, Some(TargetChoice::Card(0))).unwrap();
    assert!(creature(&game, ONE, soldier).has(Ability::Trample));

    game.end_turn(ONE).unwrap();
    let disenchant = in_hand(&mut game, TWO, ids::DISENCHANT);
    give_mana(&mut game, TWO, &[Color::White, Color::White]);
    game.play_card(TWO, disenchant, Some(TargetChoice::Card(0))).unwrap();

    assert!(!creature(&game, ONE, soldier).has(Ability::Trample));
}

#[test]
fn test_slow_removes_first_strike() {
    let mut game = duel();
    let knight = game.create_card(TWO, ids::WHITE_KNIGHT, Zone::InPlay);
    let slow = in_hand(&mut game, ONE, ids::SLOW);
    give_mana(&mut game, ONE, &[Color::Black]);

    let outcome = game.play_card(ONE, slow, Some(TargetChoice::Card(0))).unwrap();

    assert!(!creature(&game, TWO, knight).has(Ability::FirstStrike));
    assert!(outcome.events.contains(&GameEvent::AbilityChanged {
        owner: TWO,
        card: knight,
        ability: Ability::FirstStrike,
        active: false,
    }));
}

#[test]
fn test_restrain_strips_trample_from_green() {
    let mut game = duel();
    let werewolf = game.create_card(TWO, ids::WEREWOLF, Zone::InPlay);
    let bear = game.create_card(TWO, ids::ANGRY_BEAR, Zone::InPlay);
    let restrain = in_hand(&mut game, ONE, ids::RESTRAIN);
    give_mana(&mut game, ONE, &[Color::Red, Color::Red, Color::Black]);

    game.play_card(ONE, restrain, None).unwrap();

    assert!(!creature(&game, TWO, werewolf).trample);
    assert!(!creature(&game, TWO, bear).trample);
}

#[test]
fn test_enhancement_without_target_fizzles_to_discard() {
    let mut game = duel();
    let rage = in_hand(&mut game, ONE, ids::RAGE);
    give_mana(&mut game, ONE, &[Color::Green]);

    let outcome = game.play_card(ONE, rage, None).unwrap();

    assert!(outcome.fizzled());
    assert_eq!(game.player(ONE).pool.total(), 0);
    assert_eq!(game.player(ONE).zones.len(Zone::Discard), 1);
    assert_eq!(game.player(ONE).zones.len(Zone::InPlay), 0);
}

// =============================================================================
// Sorceries
// =============================================================================

#[test]
fn test_reanimate_with_empty_discard_fizzles_and_spends_mana() {
    let mut game = duel();
    let reanimate = in_hand(&mut game, ONE, ids::REANIMATE);
    give_mana(&mut game, ONE, &[Color::Black]);

    let outcome = game.play_card(ONE, reanimate, None).unwrap();

    assert!(outcome.fizzled());
    assert!(outcome
        .events
        .iter()
        .any(|event| matches!(event, GameEvent::EffectFizzled { player, .. } if *player == ONE)));
    assert_eq!(game.player(ONE).pool.total(), 0);
    assert_eq!(game.player(ONE).zones.len(Zone::Hand), 0);
    assert_eq!(game.player(ONE).zones.len(Zone::Discard), 1);
}

#[test]
fn test_reanimate_returns_creature_to_hand() {
    let mut game = duel();
    let vampire = game.create_card(ONE, ids::VAMPIRE, Zone::Discard);
    let reanimate = in_hand(&mut game, ONE, ids::REANIMATE);
    give_mana(&mut game, ONE, &[Color::Black]);

    game.play_card(ONE, reanimate, Some(TargetChoice::Card(0))).unwrap();

    assert_eq!(game.player(ONE).zones.zone_of(vampire), Some(Zone::Hand));
    assert_eq!(game.player(ONE).zones.len(Zone::Discard), 1);
}

#[test]
fn test_reanimate_with_full_hand_is_rejected() {
    let mut game = duel();
    game.create_card(ONE, ids::GHOST, Zone::Discard);
    for _ in 0..7 {
        game.create_card(ONE, ids::SOLDIER, Zone::Hand);
    }
    let reanimate = in_hand(&mut game, ONE, ids::REANIMATE);
    give_mana(&mut game, ONE, &[Color::Black]);
    let before = game.state().clone();

    let err = game.play_card(ONE, reanimate, Some(TargetChoice::Card(0))).unwrap_err();

    assert_eq!(err, IllegalAction::HandFull(7));
    assert_eq!(game.state(), &before);
}

#[test]
fn test_terror_requires_a_target_choice() {
    let mut game = duel();
    game.create_card(TWO, ids::GUARD, Zone::InPlay);
    let terror = in_hand(&mut game, ONE, ids::TERROR);
    give_mana(&mut game, ONE, &[Color::Black, Color::Black]);
    let before = game.state().clone();

    assert_eq!(game.play_card(ONE, terror, None), Err(IllegalAction::MissingTarget));
    assert_eq!(
        game.play_card(ONE, terror, Some(TargetChoice::Card(3))),
        Err(IllegalAction::InvalidTarget(3, 1))
    );
    assert_eq!(
        game.play_card(ONE, terror, Some(TargetChoice::Player)),
        Err(IllegalAction::PlayerNotTargetable)
    );
    assert_eq!(game.state(), &before);
}

#[test]
fn test_terror_destroys_creature() {
    let mut game = duel();
    let guard = game.create_card(TWO, ids::GUARD, Zone::InPlay);
    let terror = in_hand(&mut game, ONE, ids::TERROR);
    give_mana(&mut game, ONE, &[Color::Black, Color::Red]);

    game.play_card(ONE, terror, Some(TargetChoice::Card(0))).unwrap();

    assert_eq!(game.player(TWO).zones.zone_of(guard), Some(Zone::Discard));
}

#[test]
fn test_flood_destroys_land() {
    let mut game = duel();
    let swamp = game.create_card(TWO, ids::SWAMP, Zone::InPlay);
    game.create_card(TWO, ids::SKELETON, Zone::InPlay);
    let flood = in_hand(&mut game, ONE, ids::FLOOD);
    give_mana(&mut game, ONE, &[Color::Green, Color::White, Color::Blue]);

    game.play_card(ONE, flood, Some(TargetChoice::Card(0))).unwrap();

    assert_eq!(game.player(TWO).zones.zone_of(swamp), Some(Zone::Discard));
    assert_eq!(game.player(TWO).zones.len(Zone::InPlay), 1);
}

#[test]
fn test_lightning_bolt_player_or_creature() {
    let mut game = duel();
    let ghost = game.create_card(TWO, ids::GHOST, Zone::InPlay);
    let first = in_hand(&mut game, ONE, ids::LIGHTNING_BOLT);
    give_mana(&mut game, ONE, &[Color::Green, Color::Green, Color::Green, Color::Green]);

    let outcome = game.play_card(ONE, first, Some(TargetChoice::Player)).unwrap();
    assert_eq!(outcome.damage_to_player(TWO), 2);
    assert_eq!(game.player(TWO).hp, 13);

    let second = in_hand(&mut game, ONE, ids::LIGHTNING_BOLT);
    let outcome = game.play_card(ONE, second, Some(TargetChoice::Card(0))).unwrap();
    assert_eq!(outcome.deaths().collect::<Vec<_>>(), vec![ghost]);
}

#[test]
fn test_plague_hits_only_opponent_creatures() {
    let mut game = duel();
    let soldier = game.create_card(ONE, ids::SOLDIER, Zone::InPlay);
    let skeleton = game.create_card(TWO, ids::SKELETON, Zone::InPlay);
    let guard = game.create_card(TWO, ids::GUARD, Zone::InPlay);
    let plague = in_hand(&mut game, ONE, ids::PLAGUE);
    give_mana(&mut game, ONE, &[Color::Black, Color::White, Color::White]);

    game.play_card(ONE, plague, None).unwrap();

    assert_eq!(creature(&game, ONE, soldier).hp, 1);
    assert_eq!(game.player(TWO).zones.zone_of(skeleton), Some(Zone::Discard));
    assert_eq!(creature(&game, TWO, guard).hp, 4);
}
