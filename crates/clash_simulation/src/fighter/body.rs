//! Shared fighter state and the parts of the state machine every brain uses

use bevy::prelude::*;

use crate::combat::HitOutcome;
use crate::components::{AttackState, Faction, Health, HitFeedback, Knockback, Motion};
use crate::config::FighterTuning;

/// Everything a fighter is, minus what drives it.
///
/// Brains get `&Body` / `&mut Body` at their customisation points.
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) position: Vec2,
    pub(crate) spawn: Vec2,
    pub(crate) motion: Motion,
    pub(crate) speed_multiplier: f32,
    pub(crate) faction: Faction,
    pub(crate) health: Health,
    pub(crate) strength: f32,
    pub(crate) attack: AttackState,
    pub(crate) knockback: Knockback,
    pub(crate) defending: bool,
    pub(crate) last_hit: Option<HitFeedback>,
    pub(crate) tuning: FighterTuning,
}

impl Body {
    pub fn new(spawn: Vec2, tuning: FighterTuning, faction: Faction) -> Self {
        let mut attack = AttackState::new(
            tuning.attack_duration,
            tuning.attack_cooldown,
            tuning.attack_distance(),
            tuning.attack_radius,
        );
        attack.point = spawn;

        Self {
            position: spawn,
            spawn,
            motion: Motion::default(),
            speed_multiplier: 1.0,
            faction,
            health: Health::new(tuning.max_health),
            strength: tuning.strength,
            attack,
            knockback: Knockback::default(),
            defending: false,
            last_hit: None,
            tuning,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    pub fn is_attacking(&self) -> bool {
        self.attack.is_attacking()
    }

    /// Cooldown elapsed and not holding guard
    pub fn can_attack(&self) -> bool {
        self.attack.cooldown_elapsed() && !self.defending
    }

    /// Damage dealt per landed strike (whole points)
    pub fn damage(&self) -> u32 {
        self.strength.max(0.0) as u32
    }

    pub(crate) fn set_strength(&mut self, strength: f32) {
        self.strength = strength;
    }

    /// Point the strike line at `target`; returns the unit direction used
    pub(crate) fn aim_at(&mut self, target: Vec2) -> Vec2 {
        let direction = (target - self.position).normalize_or_zero();
        self.attack.point = self.position + direction * self.attack.distance;
        direction
    }

    /// Blend motion (snap while knocked back) and move
    pub(crate) fn integrate(&mut self, delta: f32) {
        if self.knockback.is_active() {
            self.motion.snap();
        } else {
            self.motion.blend(self.tuning.motion_blend_rate, delta);
        }
        self.position += self.motion.current * delta * self.tuning.speed * self.speed_multiplier;
    }

    /// Base damage handling shared by every fighter.
    ///
    /// - knocked back (or dead) → ignored, no stacking
    /// - defending → short weak knockback, no damage
    /// - otherwise → full knockback away from the attacker, damage applied
    pub(crate) fn receive_hit(&mut self, attacker_position: Vec2, damage: u32) -> HitOutcome {
        if self.knockback.is_active() || !self.is_alive() {
            return HitOutcome::Immune;
        }

        let away = (self.position - attacker_position).normalize_or_zero();
        let tuning = &self.tuning;

        if self.defending {
            self.knockback.start(
                away,
                tuning.knockback_duration * tuning.blocked_duration_scale,
                tuning.knockback_force * tuning.blocked_force_scale,
            );
            self.last_hit = Some(HitFeedback::Blocked);
            return HitOutcome::Blocked;
        }

        self.knockback
            .start(away, tuning.knockback_duration, tuning.knockback_force);
        self.health.take_damage(damage);
        self.last_hit = Some(HitFeedback::Damaged(damage));
        HitOutcome::Applied
    }

    /// Back to spawn state: full health, base strength, no timers running
    pub(crate) fn reset(&mut self) {
        self.position = self.spawn;
        self.motion.clear();
        self.speed_multiplier = 1.0;
        self.health.restore();
        self.strength = self.tuning.strength;
        self.attack.reset(self.spawn);
        self.knockback = Knockback::default();
        self.defending = false;
        self.last_hit = None;
    }
}
