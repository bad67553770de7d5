//! Error types.
//!
//! - `IllegalAction`: a driver asked for something the rules forbid. The
//!   board is untouched when one of these comes back.
//! - `ConfigError`: a rules configuration could not be parsed or is unplayable.
//! - `SetupError`: a match could not be created.
//!
//! Fizzles are not errors; they come back inside a successful `Outcome`.

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::mana::PaymentError;

/// A rejected driver operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalAction {
    #[error("the match is over")]
    MatchOver,

    #[error("{0} cannot act during the other player's turn")]
    NotYourTurn(PlayerId),

    #[error("{0} is not defending this combat")]
    NotDefending(PlayerId),

    #[error("no card at hand position {index} (hand holds {len})")]
    HandIndexOutOfRange { index: usize, len: usize },

    #[error("no card at in-play position {index} (in play: {len})")]
    InPlayIndexOutOfRange { index: usize, len: usize },

    #[error("card at position {0} is not a land")]
    NotALand(usize),

    #[error("card at position {0} is not a creature")]
    NotACreature(usize),

    #[error("card at position {0} is already tapped")]
    AlreadyTapped(usize),

    #[error("land limit reached ({0} per turn)")]
    LandAlreadyPlayed(u32),

    #[error(transparent)]
    InsufficientMana(#[from] PaymentError),

    #[error("this card needs a target")]
    MissingTarget,

    #[error("target choice {0} is not among the {1} legal targets")]
    InvalidTarget(usize, usize),

    #[error("a player cannot be targeted by this card")]
    PlayerNotTargetable,

    #[error("hand is full ({0} cards)")]
    HandFull(usize),

    #[error("attackers were already declared this turn")]
    AttackersAlreadyDeclared,

    #[error("creature at position {0} was declared twice")]
    DuplicateAttacker(usize),

    #[error("no attackers have been declared")]
    NoAttackersDeclared,

    #[error("attacker {0} is not awaiting a block")]
    UnknownAttacker(usize),

    #[error("creature at position {0} is already blocking")]
    BlockerAlreadyAssigned(usize),
}

/// Rules configuration failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid rules JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("hand limit must be at least 1")]
    ZeroHandLimit,

    #[error("opening hand of {opening} exceeds hand limit {limit}")]
    OpeningHandTooLarge { opening: usize, limit: usize },

    #[error("starting hp {hp} is already at or below the defeat threshold {threshold}")]
    StartsDefeated { hp: i32, threshold: i32 },
}

/// Match creation failure.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("deck lists {0}, which is not in the catalog")]
    UnknownCard(CardId),

    #[error("deck lists \"{0}\", which is not in the catalog")]
    UnknownCardName(String),

    #[error("{player}'s library holds {size} cards but the opening hand needs {needed}")]
    DeckTooSmall { player: PlayerId, size: usize, needed: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mana::Color;

    #[test]
    fn test_messages() {
        assert_eq!(
            IllegalAction::HandIndexOutOfRange { index: 9, len: 3 }.to_string(),
            "no card at hand position 9 (hand holds 3)"
        );
        assert_eq!(
            IllegalAction::NotYourTurn(PlayerId::TWO).to_string(),
            "Player 2 cannot act during the other player's turn"
        );
    }

    #[test]
    fn test_payment_error_converts() {
        let err: IllegalAction = PaymentError::Colored {
            color: Color::White,
            needed: 1,
            available: 0,
        }
        .into();
        assert!(matches!(err, IllegalAction::InsufficientMana(_)));
        assert_eq!(err.to_string(), "need 1 white mana, have 0");
    }

    #[test]
    fn test_config_error_wraps_into_setup() {
        let err: SetupError = ConfigError::ZeroHandLimit.into();
        assert_eq!(err.to_string(), "hand limit must be at least 1");
    }
}
