//! Classic card list and decks.

use crate::cards::{Ability, CardCatalog, CardDefinition, CardId, Category, CreatureStats};
use crate::core::SetupError;
use crate::effects::{Effect, Side, StatChange};
use crate::mana::{Color, CostSpec};

/// Card IDs in the classic catalog.
pub mod ids {
    use crate::cards::CardId;

    pub const PLAINS: CardId = CardId::new(0);
    pub const ISLAND: CardId = CardId::new(1);
    pub const MOUNTAIN: CardId = CardId::new(2);
    pub const SWAMP: CardId = CardId::new(3);
    pub const FOREST: CardId = CardId::new(4);

    pub const SOLDIER: CardId = CardId::new(10);
    pub const ARMORED_PEGASUS: CardId = CardId::new(11);
    pub const WHITE_KNIGHT: CardId = CardId::new(12);
    pub const ANGRY_BEAR: CardId = CardId::new(13);
    pub const GUARD: CardId = CardId::new(14);
    pub const WEREWOLF: CardId = CardId::new(15);
    pub const SKELETON: CardId = CardId::new(16);
    pub const GHOST: CardId = CardId::new(17);
    pub const BLACK_KNIGHT: CardId = CardId::new(18);
    pub const ORC_MANIAC: CardId = CardId::new(19);
    pub const HOBGOBLIN: CardId = CardId::new(20);
    pub const VAMPIRE: CardId = CardId::new(21);

    pub const DISENCHANT: CardId = CardId::new(30);
    pub const LIGHTNING_BOLT: CardId = CardId::new(31);
    pub const FLOOD: CardId = CardId::new(32);
    pub const REANIMATE: CardId = CardId::new(33);
    pub const PLAGUE: CardId = CardId::new(34);
    pub const TERROR: CardId = CardId::new(35);

    pub const RAGE: CardId = CardId::new(40);
    pub const HOLY_WAR: CardId = CardId::new(41);
    pub const HOLY_LIGHT: CardId = CardId::new(42);
    pub const UNHOLY_WAR: CardId = CardId::new(43);
    pub const RESTRAIN: CardId = CardId::new(44);
    pub const SLOW: CardId = CardId::new(45);
}

/// Deck one: white and green.
pub const DECK_ONE: &[&str] = &[
    "Plains", "Plains", "Plains", "Plains", "Plains",
    "Forest", "Forest", "Forest",
    "Island",
    "Soldier", "Soldier", "Soldier",
    "ArmoredPegasus", "ArmoredPegasus",
    "WhiteKnight", "WhiteKnight",
    "AngryBear",
    "Guard",
    "Werewolf",
    "Disenchant",
    "LightningBolt",
    "Flood", "Flood",
    "Rage",
    "HolyWar",
    "HolyLight",
];

/// Deck two: black and red.
pub const DECK_TWO: &[&str] = &[
    "Swamp", "Swamp", "Swamp", "Swamp", "Swamp",
    "Mountain", "Mountain", "Mountain",
    "Island",
    "Skeleton", "Skeleton", "Skeleton",
    "Ghost", "Ghost",
    "BlackKnight", "BlackKnight",
    "OrcManiac",
    "Hobgoblin",
    "Vampire",
    "Reanimate",
    "Plague",
    "Terror", "Terror",
    "UnholyWar",
    "Restrain",
    "Slow",
];

/// `generic` plus one mana of each listed color.
fn cost(generic: u32, colored: &[Color]) -> CostSpec {
    colored
        .iter()
        .fold(CostSpec::free().with_generic(generic), |cost, &color| cost.with_colored(color, 1))
}

/// The full classic card list.
#[must_use]
pub fn standard_catalog() -> CardCatalog {
    use Color::{Black, Blue, Green, Red, White};

    let mut catalog = CardCatalog::new();

    for (id, name, color) in [
        (ids::PLAINS, "Plains", White),
        (ids::ISLAND, "Island", Blue),
        (ids::MOUNTAIN, "Mountain", Red),
        (ids::SWAMP, "Swamp", Black),
        (ids::FOREST, "Forest", Green),
    ] {
        catalog.register(CardDefinition::land(id, name, color));
    }

    let creatures = [
        (ids::SOLDIER, "Soldier", White, cost(0, &[White]), CreatureStats::new(1, 1)),
        (ids::ARMORED_PEGASUS, "ArmoredPegasus", White, cost(1, &[White]), CreatureStats::new(1, 2)),
        (ids::WHITE_KNIGHT, "WhiteKnight", White, cost(0, &[White, White]), CreatureStats::new(2, 2).with_first_strike()),
        (ids::ANGRY_BEAR, "AngryBear", Green, cost(2, &[Green]), CreatureStats::new(3, 2).with_trample()),
        (ids::GUARD, "Guard", White, cost(2, &[White, White]), CreatureStats::new(2, 5)),
        (ids::WEREWOLF, "Werewolf", Green, cost(2, &[Green, White]), CreatureStats::new(4, 6).with_trample()),
        (ids::SKELETON, "Skeleton", Black, cost(0, &[Black]), CreatureStats::new(1, 1)),
        (ids::GHOST, "Ghost", Black, cost(1, &[Black]), CreatureStats::new(2, 1)),
        (ids::BLACK_KNIGHT, "BlackKnight", Black, cost(0, &[Black, Black]), CreatureStats::new(2, 2).with_first_strike()),
        (ids::ORC_MANIAC, "OrcManiac", Red, cost(2, &[Red]), CreatureStats::new(4, 1)),
        (ids::HOBGOBLIN, "Hobgoblin", Red, cost(1, &[Red, Black]), CreatureStats::new(3, 3)),
        (ids::VAMPIRE, "Vampire", Black, cost(3, &[Black]), CreatureStats::new(6, 3)),
    ];
    for (id, name, color, cost, stats) in creatures {
        catalog.register(CardDefinition::creature(id, name, color, cost, stats));
    }

    let sorceries = [
        (ids::DISENCHANT, "Disenchant", White, cost(1, &[White]), Effect::Destroy { category: Category::Enhancement }),
        (ids::LIGHTNING_BOLT, "LightningBolt", Green, cost(1, &[Green]), Effect::DamagePlayerOrCreature { amount: 2 }),
        (ids::FLOOD, "Flood", Green, cost(1, &[Green, White]), Effect::Destroy { category: Category::Land }),
        (ids::REANIMATE, "Reanimate", Black, cost(0, &[Black]), Effect::Revive),
        (ids::PLAGUE, "Plague", Black, cost(2, &[Black]), Effect::DamageAllCreatures { side: Side::Opponent, amount: 1 }),
        (ids::TERROR, "Terror", Black, cost(1, &[Black]), Effect::Destroy { category: Category::Creature }),
    ];
    for (id, name, color, cost, effect) in sorceries {
        catalog.register(CardDefinition::sorcery(id, name, color, cost, effect));
    }

    let enhancements = [
        (ids::RAGE, "Rage", Green, cost(0, &[Green]), Effect::GrantAbility { ability: Ability::Trample, side: Side::Own }),
        (ids::HOLY_WAR, "HolyWar", White, cost(1, &[White]), Effect::ColorStat { color: White, side: Side::Own, change: StatChange::Boost }),
        (ids::HOLY_LIGHT, "HolyLight", White, cost(1, &[White]), Effect::ColorStat { color: Black, side: Side::Opponent, change: StatChange::Weaken }),
        (ids::UNHOLY_WAR, "UnholyWar", Black, cost(1, &[Black]), Effect::ColorStat { color: Black, side: Side::Own, change: StatChange::AttackBoost }),
        (ids::RESTRAIN, "Restrain", Red, cost(2, &[Red]), Effect::RemoveAbilityFromColor { ability: Ability::Trample, color: Green, side: Side::Opponent }),
        (ids::SLOW, "Slow", Black, cost(0, &[Black]), Effect::RemoveAbility { ability: Ability::FirstStrike, side: Side::Opponent }),
    ];
    for (id, name, color, cost, effect) in enhancements {
        catalog.register(CardDefinition::enhancement(id, name, color, cost, effect));
    }

    catalog
}

/// Deck one as card IDs.
pub fn deck_one(catalog: &CardCatalog) -> Result<Vec<CardId>, SetupError> {
    catalog.deck_from_names(DECK_ONE)
}

/// Deck two as card IDs.
pub fn deck_two(catalog: &CardCatalog) -> Result<Vec<CardId>, SetupError> {
    catalog.deck_from_names(DECK_TWO)
}
