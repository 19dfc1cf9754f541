//! Damage outcomes, comeback scaling and damage events
//!
//! A strike that reaches a fighter ends in one of three outcomes:
//! - Applied: damage + full knockback
//! - Blocked: target was defending, weak knockback, no damage
//! - Immune: target already knocked back (no hit stacking) or dead

use bevy::prelude::*;

use crate::arena::FighterId;

/// Result of a strike reaching a fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Applied,
    Blocked,
    Immune,
}

impl HitOutcome {
    /// Only an applied hit counts as being damaged
    pub fn is_applied(self) -> bool {
        matches!(self, HitOutcome::Applied)
    }
}

/// Strength after taking damage: the lower the health, the harder the hits.
///
/// `max(base, base / health_ratio)`, never below `base`. A zero ratio (dead)
/// keeps `base`.
pub fn comeback_strength(base_strength: f32, health_ratio: f32) -> f32 {
    if health_ratio <= 0.0 {
        return base_strength;
    }
    (base_strength / health_ratio).max(base_strength)
}

/// Event: damage applied
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageDealt {
    pub attacker: FighterId,
    pub target: FighterId,
    pub damage: u32,
    pub target_died: bool,
}

/// Event: strike absorbed by guard
#[derive(Event, Debug, Clone, PartialEq)]
pub struct HitBlocked {
    pub attacker: FighterId,
    pub target: FighterId,
}

/// Event: fighter health reached 0
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FighterDied {
    pub fighter: FighterId,
    pub killer: Option<FighterId>,
}
