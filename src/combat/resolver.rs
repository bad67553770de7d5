//! Combat damage between one attacker and at most one blocker.
//!
//! ## Precedence
//!
//! The first matching rule decides how damage is sequenced:
//!
//! 1. Attacker has first strike, blocker does not: the attacker hits first
//!    and the blocker only hits back if it survived.
//! 2. Blocker has first strike, attacker does not: mirror of (1). This also
//!    applies when the attacker has trample.
//! 3. Both have first strike: simultaneous exchange.
//! 4. Attacker has trample: simultaneous exchange.
//! 5. Blocker has trample: simultaneous exchange; trample does nothing on defense.
//! 6. Otherwise: simultaneous exchange.
//!
//! Whatever the sequencing, an attacker with trample that deals more damage
//! than the blocker had hit points sends the excess to the defending player.
//! An unblocked attacker deals its full attack to the defending player.
//!
//! Negative attack deals no damage. Hit points are not floored, so a dead
//! creature may report negative hit points until it is buried.

use serde::{Deserialize, Serialize};

use crate::cards::CreatureState;

/// Which precedence rule governed a fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatRule {
    Unblocked,
    AttackerFirstStrike,
    DefenderFirstStrike,
    BothFirstStrike,
    AttackerTrample,
    DefenderTrample,
    Simultaneous,
}

impl CombatRule {
    /// Pick the rule for this pairing.
    #[must_use]
    pub fn classify(attacker: &CreatureState, defender: Option<&CreatureState>) -> Self {
        let Some(defender) = defender else {
            return CombatRule::Unblocked;
        };
        match (attacker.first_strike, defender.first_strike) {
            (true, false) => CombatRule::AttackerFirstStrike,
            (false, true) => CombatRule::DefenderFirstStrike,
            (true, true) => CombatRule::BothFirstStrike,
            (false, false) if attacker.trample => CombatRule::AttackerTrample,
            (false, false) if defender.trample => CombatRule::DefenderTrample,
            (false, false) => CombatRule::Simultaneous,
        }
    }
}

/// What happened in one fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    pub rule: CombatRule,
    /// Damage the attacker dealt to the blocker.
    pub damage_to_defender: i32,
    /// Damage the blocker dealt to the attacker.
    pub damage_to_attacker: i32,
    /// Damage for the defending player: unblocked attack or trample excess.
    pub damage_to_player: i32,
    pub attacker_dead: bool,
    pub defender_dead: bool,
}

/// Resolves attacker/blocker pairings.
pub struct CombatResolver;

impl CombatResolver {
    /// Fight `attacker` against `defender` (or nobody).
    ///
    /// Creature damage is applied in place. Damage to the defending player
    /// is returned in the report for the caller to apply.
    pub fn resolve(attacker: &mut CreatureState, defender: Option<&mut CreatureState>) -> CombatReport {
        let rule = CombatRule::classify(attacker, defender.as_deref());
        let power = attacker.attack_power().max(0);

        let Some(defender) = defender else {
            return CombatReport {
                rule,
                damage_to_defender: 0,
                damage_to_attacker: 0,
                damage_to_player: power,
                attacker_dead: false,
                defender_dead: false,
            };
        };

        let defender_hp = defender.current_hp();
        let counter = defender.attack_power().max(0);
        let mut dealt = 0;
        let mut taken = 0;

        match rule {
            CombatRule::AttackerFirstStrike => {
                defender.apply_damage(power);
                dealt = power;
                if !defender.is_dead() {
                    attacker.apply_damage(counter);
                    taken = counter;
                }
            }
            CombatRule::DefenderFirstStrike => {
                attacker.apply_damage(counter);
                taken = counter;
                if !attacker.is_dead() {
                    defender.apply_damage(power);
                    dealt = power;
                }
            }
            _ => {
                defender.apply_damage(power);
                attacker.apply_damage(counter);
                dealt = power;
                taken = counter;
            }
        }

        let excess = if attacker.trample { (dealt - defender_hp).max(0) } else { 0 };
        log::debug!("{rule:?}: dealt {dealt}, took {taken}, trample excess {excess}");

        CombatReport {
            rule,
            damage_to_defender: dealt,
            damage_to_attacker: taken,
            damage_to_player: excess,
            attacker_dead: attacker.is_dead(),
            defender_dead: defender.is_dead(),
        }
    }
}
