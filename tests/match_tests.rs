//! Match flow integration tests: setup, turns, mana, hand limit and
//! end-of-match handling.

use manaforge::games::classic::{ids, standard_catalog, ClassicMatchBuilder};
use manaforge::{
    Ability, CardId, Color, GameEvent, GameResult, IllegalAction, Match, PaymentError, PlayerId,
    RulesConfig, TargetChoice, Zone,
};

const ONE: PlayerId = PlayerId::ONE;
const TWO: PlayerId = PlayerId::TWO;

fn duel_with(config: RulesConfig) -> Match {
    Match::new(standard_catalog(), &[], &[], config.with_opening_hand(0), 42).unwrap()
}

fn duel() -> Match {
    duel_with(RulesConfig::default())
}

fn give_mana(game: &mut Match, player: PlayerId, colors: &[Color]) {
    for &color in colors {
        game.state_mut().player_mut(player).pool.add(color);
    }
}

fn in_hand(game: &mut Match, player: PlayerId, card: CardId) -> usize {
    let id = game.create_card(player, card, Zone::Hand);
    game.player(player).zones.position(Zone::Hand, id).unwrap()
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_classic_setup() {
    let game = ClassicMatchBuilder::new().build(42).unwrap();

    assert_eq!(game.active_player(), ONE);
    assert_eq!(game.turn(), 1);
    for player in PlayerId::both() {
        let state = game.player(player);
        assert_eq!(state.hp, 15);
        assert_eq!(state.zones.len(Zone::Hand), 5);
        assert_eq!(state.zones.len(Zone::Library), 21);
        assert_eq!(state.pool.total(), 0);
    }
}

#[test]
fn test_same_seed_same_shuffle() {
    let first = ClassicMatchBuilder::new().build(7).unwrap();
    let second = ClassicMatchBuilder::new().build(7).unwrap();
    let other = ClassicMatchBuilder::new().build(8).unwrap();

    let order = |game: &Match| -> Vec<CardId> {
        game.player(ONE)
            .zones
            .cards(Zone::Library)
            .iter()
            .chain(game.player(ONE).zones.cards(Zone::Hand))
            .map(|card| card.card)
            .collect()
    };
    assert_eq!(order(&first), order(&second));
    assert_eq!(first.state(), second.state());
    assert_ne!(order(&first), order(&other));
}

#[test]
fn test_config_from_json() {
    let config = RulesConfig::from_json(r#"{"starting_hp": 20, "opening_hand": 3}"#).unwrap();
    let game = ClassicMatchBuilder::new().with_config(config).build(1).unwrap();

    assert_eq!(game.player(TWO).hp, 20);
    assert_eq!(game.player(TWO).zones.len(Zone::Hand), 3);
}

// =============================================================================
// Drawing
// =============================================================================

#[test]
fn test_draw_with_full_hand_goes_to_discard() {
    let config = RulesConfig::default().with_opening_hand(0);
    let mut game = Match::new(standard_catalog(), &[ids::SOLDIER; 10], &[ids::GHOST; 10], config, 3).unwrap();
    for _ in 0..7 {
        game.create_card(ONE, ids::PLAINS, Zone::Hand);
    }

    let outcome = game.draw(ONE).unwrap();

    assert!(matches!(outcome.events[0], GameEvent::DrawnToDiscard { player, .. } if player == ONE));
    assert_eq!(game.player(ONE).zones.len(Zone::Hand), 7);
    assert_eq!(game.player(ONE).zones.len(Zone::Discard), 1);
    assert_eq!(game.player(ONE).zones.len(Zone::Library), 9);
}

#[test]
fn test_drawing_from_empty_library_loses() {
    let mut game = duel();

    let outcome = game.draw(ONE).unwrap();

    assert!(outcome.is_terminal());
    assert_eq!(game.result(), Some(GameResult::Winner(TWO)));
    assert_eq!(game.draw(ONE), Err(IllegalAction::MatchOver));
    assert_eq!(game.end_turn(ONE), Err(IllegalAction::MatchOver));
}

// =============================================================================
// Mana and lands
// =============================================================================

#[test]
fn test_colored_cost_needs_that_color() {
    let mut game = duel();
    let soldier = in_hand(&mut game, ONE, ids::SOLDIER);
    give_mana(&mut game, ONE, &[Color::Black, Color::Black]);
    let before = game.state().clone();

    let err = game.play_card(ONE, soldier, None).unwrap_err();

    assert_eq!(
        err,
        IllegalAction::InsufficientMana(PaymentError::Colored {
            color: Color::White,
            needed: 1,
            available: 0,
        })
    );
    assert_eq!(game.state(), &before);
}

#[test]
fn test_generic_cost_paid_from_any_color() {
    let mut game = duel();
    let pegasus = in_hand(&mut game, ONE, ids::ARMORED_PEGASUS);
    give_mana(&mut game, ONE, &[Color::White, Color::Black]);

    game.play_card(ONE, pegasus, None).unwrap();

    assert_eq!(game.player(ONE).pool.total(), 0);
    assert_eq!(game.player(ONE).zones.len(Zone::InPlay), 1);
}

#[test]
fn test_one_land_per_turn() {
    let mut game = duel();
    for _ in 0..3 {
        game.create_card(ONE, ids::PLAINS, Zone::Hand);
    }

    game.play_card(ONE, 0, None).unwrap();
    assert_eq!(game.play_card(ONE, 0, None), Err(IllegalAction::LandAlreadyPlayed(1)));

    game.end_turn(ONE).unwrap();
    game.end_turn(TWO).unwrap();
    game.play_card(ONE, 0, None).unwrap();
    assert_eq!(game.player(ONE).zones.len(Zone::InPlay), 2);
}

#[test]
fn test_lands_per_turn_is_configurable() {
    let mut game = duel_with(RulesConfig::default().with_lands_per_turn(2));
    for _ in 0..3 {
        game.create_card(ONE, ids::FOREST, Zone::Hand);
    }

    game.play_card(ONE, 0, None).unwrap();
    game.play_card(ONE, 0, None).unwrap();
    assert_eq!(game.play_card(ONE, 0, None), Err(IllegalAction::LandAlreadyPlayed(2)));
}

#[test]
fn test_tapped_lands_pay_for_creature() {
    let mut game = duel();
    game.create_card(ONE, ids::FOREST, Zone::InPlay);
    game.create_card(ONE, ids::PLAINS, Zone::InPlay);
    game.create_card(ONE, ids::SWAMP, Zone::InPlay);
    let bear = in_hand(&mut game, ONE, ids::ANGRY_BEAR);

    for index in 0..3 {
        game.tap_land_for_mana(ONE, index).unwrap();
    }
    assert_eq!(game.player(ONE).pool.total(), 3);
    game.play_card(ONE, bear, None).unwrap();

    assert_eq!(game.player(ONE).pool.total(), 0);
    assert_eq!(game.player(ONE).zones.len(Zone::InPlay), 4);
}

#[test]
fn test_unused_mana_empties_at_end_of_turn() {
    let mut game = duel();
    game.create_card(ONE, ids::MOUNTAIN, Zone::InPlay);
    game.tap_land_for_mana(ONE, 0).unwrap();

    game.end_turn(ONE).unwrap();
    assert_eq!(game.player(ONE).pool.total(), 0);

    game.end_turn(TWO).unwrap();
    game.untap_all(ONE).unwrap();
    game.tap_land_for_mana(ONE, 0).unwrap();
    assert_eq!(game.player(ONE).pool.red, 1);
}

// =============================================================================
// Turn flow
// =============================================================================

#[test]
fn test_only_active_player_acts() {
    let mut game = duel();
    game.create_card(TWO, ids::PLAINS, Zone::Hand);

    assert_eq!(game.play_card(TWO, 0, None), Err(IllegalAction::NotYourTurn(TWO)));
    assert_eq!(game.end_turn(TWO), Err(IllegalAction::NotYourTurn(TWO)));

    let outcome = game.end_turn(ONE).unwrap();
    assert_eq!(outcome.events, vec![GameEvent::TurnEnded { player: ONE, turn: 1 }]);
    assert_eq!(game.active_player(), TWO);
    game.play_card(TWO, 0, None).unwrap();
}

#[test]
fn test_upkeep_restores_hp_but_keeps_boosts() {
    let mut game = duel();
    let guard = game.create_card(ONE, ids::GUARD, Zone::InPlay);
    let holy_war = in_hand(&mut game, ONE, ids::HOLY_WAR);
    give_mana(&mut game, ONE, &[Color::White, Color::White]);
    game.play_card(ONE, holy_war, None).unwrap();
    game.end_turn(ONE).unwrap();

    let bolt = in_hand(&mut game, TWO, ids::LIGHTNING_BOLT);
    give_mana(&mut game, TWO, &[Color::Green, Color::Green]);
    game.play_card(TWO, bolt, Some(TargetChoice::Card(0))).unwrap();
    game.end_turn(TWO).unwrap();

    let hp = |game: &Match| game.player(ONE).zones.in_play(guard).unwrap().creature().unwrap().hp;
    assert_eq!(hp(&game), 4);
    game.reset_creature_stats_to_base(ONE).unwrap();
    assert_eq!(hp(&game), 6);
}

#[test]
fn test_ability_reset_at_upkeep_is_opt_in() {
    for (config, restored) in [
        (RulesConfig::default(), false),
        (RulesConfig::default().with_ability_reset_at_upkeep(), true),
    ] {
        let mut game = duel_with(config);
        let knight = game.create_card(TWO, ids::WHITE_KNIGHT, Zone::InPlay);
        let slow = in_hand(&mut game, ONE, ids::SLOW);
        give_mana(&mut game, ONE, &[Color::Black]);
        game.play_card(ONE, slow, Some(TargetChoice::Card(0))).unwrap();
        game.end_turn(ONE).unwrap();

        game.reset_creature_stats_to_base(TWO).unwrap();

        let creature = game.player(TWO).zones.in_play(knight).unwrap().creature().unwrap();
        assert_eq!(creature.has(Ability::FirstStrike), restored);
    }
}

// =============================================================================
// End of match
// =============================================================================

#[test]
fn test_both_defeated_is_a_draw() {
    let mut game = duel();
    game.state_mut().player_mut(ONE).hp = 0;
    game.state_mut().player_mut(TWO).hp = -2;

    let outcome = game.untap_all(ONE).unwrap();

    assert_eq!(outcome.result, Some(GameResult::Draw));
    assert!(outcome.events.contains(&GameEvent::MatchEnded { result: GameResult::Draw }));
}

#[test]
fn test_defeat_threshold_is_configurable() {
    let mut game = duel_with(RulesConfig::default().with_defeat_threshold(5));
    let bolt = in_hand(&mut game, ONE, ids::LIGHTNING_BOLT);
    game.state_mut().player_mut(TWO).hp = 7;
    give_mana(&mut game, ONE, &[Color::Green, Color::Green]);

    game.play_card(ONE, bolt, Some(TargetChoice::Player)).unwrap();

    assert_eq!(game.result(), Some(GameResult::Winner(ONE)));
}

#[test]
fn test_history_collects_every_outcome() {
    let mut game = duel();
    game.create_card(ONE, ids::PLAINS, Zone::Hand);

    let mut seen = 0;
    seen += game.play_card(ONE, 0, None).unwrap().events.len();
    seen += game.tap_land_for_mana(ONE, 0).unwrap().events.len();
    seen += game.end_turn(ONE).unwrap().events.len();

    assert_eq!(game.history().len(), seen);
    assert!(matches!(game.history().back(), Some(GameEvent::TurnEnded { .. })));
}

#[test]
fn test_match_state_serde_round_trip() {
    let game = ClassicMatchBuilder::new().build(9).unwrap();
    let json = serde_json::to_string(game.state()).unwrap();
    let back: manaforge::MatchState = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, game.state());
}
