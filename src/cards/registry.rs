//! Card catalog for definition lookup.
//!
//! The `CardCatalog` is filled once at startup and read-only afterwards.
//! It indexes definitions by `CardId` and by name.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::SetupError;
use crate::mana::ResourcePool;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use manaforge::cards::{CardCatalog, CardDefinition, CardId};
/// use manaforge::mana::Color;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::land(CardId::new(0), "Swamp", Color::Black));
///
/// assert_eq!(catalog.definition(CardId::new(0)).name, "Swamp");
/// assert_eq!(catalog.id_by_name("Swamp"), Some(CardId::new(0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    by_name: FxHashMap<String, CardId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if the ID or the name is already taken.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        if self.by_name.contains_key(&card.name) {
            panic!("Card named {:?} already registered", card.name);
        }
        self.by_name.insert(card.name.clone(), card.id);
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// Every `CardEntity` in a match was built from this catalog, so a miss
    /// here is a bug in the caller.
    #[must_use]
    pub fn definition(&self, id: CardId) -> &CardDefinition {
        self.cards
            .get(&id)
            .unwrap_or_else(|| panic!("{id} not found in catalog"))
    }

    /// Look up a card ID by name.
    #[must_use]
    pub fn id_by_name(&self, name: &str) -> Option<CardId> {
        self.by_name.get(name).copied()
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// True if `id` is known and `pool` covers its cost.
    #[must_use]
    pub fn is_affordable(&self, id: CardId, pool: &ResourcePool) -> bool {
        self.get(id).is_some_and(|card| pool.can_afford(&card.cost))
    }

    /// Resolve a deck list written as card names.
    pub fn deck_from_names<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<CardId>, SetupError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.id_by_name(name)
                    .ok_or_else(|| SetupError::UnknownCardName(name.to_string()))
            })
            .collect()
    }
}
