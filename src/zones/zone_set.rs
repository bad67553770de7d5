//! Per-player card zones.
//!
//! A `ZoneSet` owns every card a player has, split across four zones:
//!
//! - **Library**: shuffled at creation, drawn from the tail.
//! - **Hand**: bounded by the rules' hand limit.
//! - **InPlay**: lands, creatures and enhancements on the battlefield, in
//!   the order they arrived.
//! - **Discard**: append-only.
//!
//! Cards are stored by value, so a card is in exactly one zone at a time
//! and moving it means removing it from one `Vec` and pushing it onto
//! another.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardEntity, Category, InstanceId};
use crate::core::GameRng;

/// A zone within a player's `ZoneSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Library,
    Hand,
    InPlay,
    Discard,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Library => "library",
            Zone::Hand => "hand",
            Zone::InPlay => "in play",
            Zone::Discard => "discard",
        };
        f.write_str(name)
    }
}

/// A player's four zones.
///
/// ## Usage
///
/// ```
/// use manaforge::cards::{CardDefinition, CardEntity, CardId, InstanceId};
/// use manaforge::core::PlayerId;
/// use manaforge::mana::Color;
/// use manaforge::zones::{Zone, ZoneSet};
///
/// let plains = CardDefinition::land(CardId::new(0), "Plains", Color::White);
/// let mut zones = ZoneSet::new();
/// zones.put(Zone::Library, CardEntity::new(InstanceId::new(1), &plains, PlayerId::ONE));
///
/// let drawn = zones.draw().unwrap();
/// zones.put(Zone::Hand, drawn);
/// assert_eq!(zones.len(Zone::Hand), 1);
/// assert!(zones.is_empty(Zone::Library));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSet {
    library: Vec<CardEntity>,
    hand: Vec<CardEntity>,
    in_play: Vec<CardEntity>,
    discard: Vec<CardEntity>,
}

impl ZoneSet {
    /// Four empty zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zones with `library` as the library, shuffled with `rng`.
    #[must_use]
    pub fn with_library(mut library: Vec<CardEntity>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut library);
        Self {
            library,
            ..Self::default()
        }
    }

    /// Cards in a zone.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &[CardEntity] {
        match zone {
            Zone::Library => &self.library,
            Zone::Hand => &self.hand,
            Zone::InPlay => &self.in_play,
            Zone::Discard => &self.discard,
        }
    }

    fn cards_mut(&mut self, zone: Zone) -> &mut Vec<CardEntity> {
        match zone {
            Zone::Library => &mut self.library,
            Zone::Hand => &mut self.hand,
            Zone::InPlay => &mut self.in_play,
            Zone::Discard => &mut self.discard,
        }
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.cards(zone).len()
    }

    /// Check if a zone is empty.
    #[must_use]
    pub fn is_empty(&self, zone: Zone) -> bool {
        self.cards(zone).is_empty()
    }

    /// Card at `index` in `zone`.
    #[must_use]
    pub fn get(&self, zone: Zone, index: usize) -> Option<&CardEntity> {
        self.cards(zone).get(index)
    }

    /// Mutable card at `index` in `zone`.
    pub fn get_mut(&mut self, zone: Zone, index: usize) -> Option<&mut CardEntity> {
        self.cards_mut(zone).get_mut(index)
    }

    /// Position of a card within `zone`.
    #[must_use]
    pub fn position(&self, zone: Zone, id: InstanceId) -> Option<usize> {
        self.cards(zone).iter().position(|c| c.id == id)
    }

    /// Zone currently holding a card.
    #[must_use]
    pub fn zone_of(&self, id: InstanceId) -> Option<Zone> {
        [Zone::Library, Zone::Hand, Zone::InPlay, Zone::Discard]
            .into_iter()
            .find(|&zone| self.position(zone, id).is_some())
    }

    /// Find a card in play by instance.
    #[must_use]
    pub fn in_play(&self, id: InstanceId) -> Option<&CardEntity> {
        self.in_play.iter().find(|c| c.id == id)
    }

    /// Find a card in play by instance, mutably.
    pub fn in_play_mut(&mut self, id: InstanceId) -> Option<&mut CardEntity> {
        self.in_play.iter_mut().find(|c| c.id == id)
    }

    /// Append a card to a zone.
    ///
    /// Cards arriving anywhere but in play lose what they gained in play.
    pub fn put(&mut self, zone: Zone, mut card: CardEntity) {
        if zone != Zone::InPlay {
            card.reset_on_leaving_play();
        }
        self.cards_mut(zone).push(card);
    }

    /// Remove and return the card at `index` in `zone`, preserving the order
    /// of the remaining cards.
    pub fn take(&mut self, zone: Zone, index: usize) -> Option<CardEntity> {
        let cards = self.cards_mut(zone);
        (index < cards.len()).then(|| cards.remove(index))
    }

    /// Remove a card by instance from `zone`.
    pub fn take_by_id(&mut self, zone: Zone, id: InstanceId) -> Option<CardEntity> {
        let index = self.position(zone, id)?;
        self.take(zone, index)
    }

    /// Move the card at `index` from one zone to another.
    ///
    /// Returns the moved card's instance, or `None` if `index` is out of range.
    pub fn move_card(&mut self, from: Zone, index: usize, to: Zone) -> Option<InstanceId> {
        let card = self.take(from, index)?;
        let id = card.id;
        log::debug!("{id} moved {from} -> {to}");
        self.put(to, card);
        Some(id)
    }

    /// Pop the top (tail) card of the library.
    pub fn draw(&mut self) -> Option<CardEntity> {
        self.library.pop()
    }

    /// Shuffle the library with the match RNG.
    pub fn shuffle_library(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.library);
    }

    /// Instances in `zone` of the given category, in zone order.
    #[must_use]
    pub fn ids_of_category(&self, zone: Zone, category: Category) -> SmallVec<[InstanceId; 8]> {
        self.cards(zone)
            .iter()
            .filter(|c| c.category() == category)
            .map(|c| c.id)
            .collect()
    }

    /// Creatures in play.
    pub fn creatures_in_play(&self) -> impl Iterator<Item = &CardEntity> {
        self.in_play.iter().filter(|c| c.creature().is_some())
    }

    /// Creatures in play, mutably.
    pub fn creatures_in_play_mut(&mut self) -> impl Iterator<Item = &mut CardEntity> {
        self.in_play.iter_mut().filter(|c| c.creature().is_some())
    }

    /// Untap every land and creature in play.
    pub fn untap_all(&mut self) {
        for card in &mut self.in_play {
            card.untap();
        }
    }

    /// Move every creature in play with hit points below 1 to the discard
    /// pile. Returns the moved cards' instances in the order they died.
    pub fn sweep_dead(&mut self) -> SmallVec<[InstanceId; 4]> {
        let mut dead = SmallVec::new();
        let mut index = 0;
        while index < self.in_play.len() {
            let is_dead = self.in_play[index]
                .creature()
                .is_some_and(|creature| creature.is_dead());
            if is_dead {
                let card = self.in_play.remove(index);
                dead.push(card.id);
                self.put(Zone::Discard, card);
            } else {
                index += 1;
            }
        }
        dead
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.library.len() + self.hand.len() + self.in_play.len() + self.discard.len()
    }
}
