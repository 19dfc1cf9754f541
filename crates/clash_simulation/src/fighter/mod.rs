//! Fighters: shared body + state machine, driven by a [`Brain`]
//!
//! Per tick priority:
//! 1. dead → nothing changes
//! 2. knockback → slide along the knockback direction, no smoothing
//! 3. attacking → dash along the strike line, then hold still until it ends
//! 4. idle → maybe begin a swing, tick cooldown, raise/lower guard

use bevy::prelude::*;

mod body;
mod brain;

pub use body::Body;
pub use brain::Brain;

use crate::ai::EnemyBrain;
use crate::combat::collision::{circles_overlap, separation, strike_samples};
use crate::combat::HitOutcome;
use crate::components::{Faction, Hand, Health, HitFeedback, Tint};
use crate::config::FighterTuning;
use crate::player::PlayerBrain;

/// How a renderer should colour a fighter this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum VisualState {
    Normal,
    /// First half of a damaging knockback
    Flash,
    Dead,
}

/// Read-only snapshot for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct FighterView {
    pub position: Vec2,
    pub size: f32,
    pub tint: Tint,
    pub visual: VisualState,
    pub health_ratio: f32,
    pub alive: bool,
    pub attacking: bool,
    pub defending: bool,
    pub attack_point: Vec2,
    pub striking_hand: Hand,
    /// Damage number / "blocked" label, shown while knockback runs
    pub feedback: Option<HitFeedback>,
}

#[derive(Debug, Clone)]
pub struct Fighter {
    pub(crate) body: Body,
    pub(crate) brain: Brain,
}

impl Fighter {
    pub fn player(spawn: Vec2, tuning: FighterTuning) -> Self {
        let brain = PlayerBrain::new(tuning.strength);
        Self {
            body: Body::new(spawn, tuning, Faction::Player),
            brain: Brain::Player(brain),
        }
    }

    pub fn enemy(spawn: Vec2, tuning: FighterTuning, brain: EnemyBrain) -> Self {
        Self {
            body: Body::new(spawn, tuning, Faction::Enemies),
            brain: Brain::Enemy(brain),
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerBrain> {
        match &mut self.brain {
            Brain::Player(player) => Some(player),
            Brain::Enemy(_) => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&EnemyBrain> {
        match &self.brain {
            Brain::Enemy(enemy) => Some(enemy),
            Brain::Player(_) => None,
        }
    }

    pub fn as_enemy_mut(&mut self) -> Option<&mut EnemyBrain> {
        match &mut self.brain {
            Brain::Enemy(enemy) => Some(enemy),
            Brain::Player(_) => None,
        }
    }

    // ---- accessors ----

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    /// Teleport (no collision resolution)
    pub fn set_position(&mut self, position: Vec2) {
        self.body.position = position;
    }

    pub fn size(&self) -> f32 {
        self.body.tuning.size
    }

    pub fn tint(&self) -> Tint {
        self.body.tuning.tint
    }

    pub fn faction(&self) -> Faction {
        self.body.faction
    }

    pub fn health(&self) -> Health {
        self.body.health
    }

    pub fn health_ratio(&self) -> f32 {
        self.body.health.ratio()
    }

    pub fn strength(&self) -> f32 {
        self.body.strength
    }

    pub fn damage(&self) -> u32 {
        self.body.damage()
    }

    pub fn motion(&self) -> Vec2 {
        self.body.motion.current
    }

    pub fn target_motion(&self) -> Vec2 {
        self.body.motion.target
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.body.speed_multiplier
    }

    pub fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    pub fn is_attacking(&self) -> bool {
        self.body.is_attacking()
    }

    pub fn is_defending(&self) -> bool {
        self.body.defending
    }

    pub fn is_on_knockback(&self) -> bool {
        self.body.knockback.is_active()
    }

    pub fn can_attack(&self) -> bool {
        self.body.can_attack()
    }

    pub fn attack_point(&self) -> Vec2 {
        self.body.attack.point
    }

    pub fn attack_distance(&self) -> f32 {
        self.body.attack.distance
    }

    pub fn attack_radius(&self) -> f32 {
        self.body.attack.radius
    }

    pub fn attack_count(&self) -> u32 {
        self.body.attack.count
    }

    pub fn striking_hand(&self) -> Hand {
        self.body.attack.striking_hand()
    }

    /// Last hit result while its knockback is still running
    pub fn feedback(&self) -> Option<HitFeedback> {
        if self.is_alive() && self.is_on_knockback() {
            self.body.last_hit
        } else {
            None
        }
    }

    pub fn visual_state(&self) -> VisualState {
        if !self.is_alive() {
            return VisualState::Dead;
        }
        let half = self.body.tuning.knockback_duration * 0.5;
        match self.feedback() {
            Some(HitFeedback::Damaged(_)) if self.body.knockback.timer > half => VisualState::Flash,
            _ => VisualState::Normal,
        }
    }

    pub fn view(&self) -> FighterView {
        FighterView {
            position: self.position(),
            size: self.size(),
            tint: self.tint(),
            visual: self.visual_state(),
            health_ratio: self.health_ratio(),
            alive: self.is_alive(),
            attacking: self.is_attacking(),
            defending: self.is_defending(),
            attack_point: self.attack_point(),
            striking_hand: self.striking_hand(),
            feedback: self.feedback(),
        }
    }

    // ---- simulation ----

    /// Advance one frame. Negative `delta` is treated as 0.
    pub fn tick(&mut self, delta: f32) {
        if !self.body.is_alive() {
            return;
        }
        let delta = delta.max(0.0);
        let Self { body, brain } = self;

        brain.think(body, delta);
        let target = brain.target_position(body);
        let direction = body.aim_at(target);

        if body.knockback.is_active() {
            // Sliding: no attacking, no guard changes
            body.knockback.tick(delta);
            body.motion.set_target_vec(body.knockback.direction);
            body.speed_multiplier = body.knockback.force;
            body.attack.refresh_cooldown();
        } else if body.is_attacking() {
            body.attack.refresh_cooldown();
            body.attack.time_left -= delta;
            if body.is_attacking() {
                body.motion.set_target_vec(direction);
            } else {
                body.motion.set_target_vec(Vec2::ZERO);
            }
        } else {
            let swing_started = body.can_attack() && brain.attack_intent(body);
            if swing_started {
                body.attack.begin();
            }
            body.attack.tick_cooldown(delta);

            // A swing starting this tick drops the guard
            body.defending = !swing_started && brain.defend_intent();
            body.speed_multiplier = if body.defending {
                body.tuning.defend_speed_multiplier
            } else {
                1.0
            };
        }

        body.integrate(delta);
    }

    /// Strike reaching this fighter from `attacker` position
    pub fn receive_hit(&mut self, attacker: Vec2, damage: u32) -> HitOutcome {
        if !self.is_alive() {
            return HitOutcome::Immune;
        }
        let Self { body, brain } = self;
        brain.receive_hit(body, attacker, damage)
    }

    /// True only when damage was actually applied
    pub fn try_get_damaged_by(&mut self, attacker: &Fighter, damage: u32) -> bool {
        self.receive_hit(attacker.position(), damage).is_applied()
    }

    /// Push two overlapping live bodies apart, half the overlap each, and drop
    /// the part of each motion that drives into the other.
    pub fn check_bump(&mut self, other: &mut Fighter) {
        if !self.is_alive() || !other.is_alive() {
            return;
        }
        let Some(sep) = separation(self.position(), self.size(), other.position(), other.size())
        else {
            return;
        };

        let correction = sep.normal * sep.penetration * 0.5;
        self.body.position -= correction;
        other.body.position += correction;

        self.body.motion.cancel_inward(-sep.normal);
        other.body.motion.cancel_inward(sep.normal);
    }

    /// Sweep this fighter's strike line over `other`; the first overlapping
    /// sample lands and the sweep stops. `None` when nothing connected.
    pub fn check_hit(&self, other: &mut Fighter) -> Option<HitOutcome> {
        if !self.is_alive() || !other.is_alive() || !self.is_attacking() {
            return None;
        }
        // Enemies only strike the player
        if self.faction() == Faction::Enemies && other.faction() == Faction::Enemies {
            return None;
        }

        let radius = self.attack_radius();
        let mut samples = strike_samples(self.position(), self.attack_point(), radius);
        if samples.any(|sample| circles_overlap(sample, radius, other.position(), other.size())) {
            return Some(other.receive_hit(self.position(), self.damage()));
        }
        None
    }

    /// Restore spawn state in place
    pub fn reset(&mut self) {
        let Self { body, brain } = self;
        brain.reset(body);
    }

    /// Move the spawn point, then reset
    pub fn respawn_at(&mut self, spawn: Vec2) {
        self.body.spawn = spawn;
        self.reset();
    }
}
