//! Classic match setup.

use crate::cards::CardId;
use crate::core::{RulesConfig, SetupError};
use crate::rules::Match;

use super::catalog::{deck_one, deck_two, standard_catalog};

/// Builder for a classic duel.
#[derive(Clone, Debug, Default)]
pub struct ClassicMatchBuilder {
    config: RulesConfig,
    decks: Option<(Vec<CardId>, Vec<CardId>)>,
}

impl ClassicMatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Play with custom decks instead of the two prebuilt ones.
    #[must_use]
    pub fn with_decks(mut self, one: Vec<CardId>, two: Vec<CardId>) -> Self {
        self.decks = Some((one, two));
        self
    }

    /// Build the match. Player one moves first.
    pub fn build(self, seed: u64) -> Result<Match, SetupError> {
        let catalog = standard_catalog();
        let (one, two) = match self.decks {
            Some(decks) => decks,
            None => (deck_one(&catalog)?, deck_two(&catalog)?),
        };
        Match::new(catalog, &one, &two, self.config, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::games::classic::ids;
    use crate::zones::Zone;

    #[test]
    fn test_build_default() {
        let game = ClassicMatchBuilder::new().build(3).unwrap();
        for player in PlayerId::both() {
            assert_eq!(game.player(player).zones.len(Zone::Hand), 5);
            assert_eq!(game.player(player).zones.len(Zone::Library), 21);
        }
    }

    #[test]
    fn test_build_with_custom_decks() {
        let game = ClassicMatchBuilder::new()
            .with_config(RulesConfig::default().with_opening_hand(2))
            .with_decks(vec![ids::SOLDIER; 4], vec![ids::GHOST; 4])
            .build(3)
            .unwrap();
        assert_eq!(game.player(PlayerId::TWO).zones.total_cards(), 4);
        assert_eq!(game.player(PlayerId::ONE).zones.len(Zone::Hand), 2);
    }

    #[test]
    fn test_build_rejects_bad_config() {
        let err = ClassicMatchBuilder::new()
            .with_config(RulesConfig::default().with_hand_limit(0))
            .build(3)
            .unwrap_err();
        assert!(matches!(err, SetupError::Config(_)));
    }
}
