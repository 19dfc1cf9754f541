//! Enemy brain: orbit-strafe around the player, rest after trading blows,
//! escalate to guard when hit too often.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::guard::GuardState;
use crate::combat::HitOutcome;
use crate::config::EnemyTuning;
use crate::fighter::Body;
use crate::logger::log;

/// Wrap an angle in degrees into [0, 360)
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[derive(Debug, Clone)]
pub struct EnemyBrain {
    /// Orbit angle around the target (degrees, [0, 360))
    pub orbit_angle: f32,
    /// Target position copied in by the manager once per frame
    pub target_snapshot: Vec2,
    pub guard: GuardState,
    /// Rest after being struck (seconds)
    pub damage_recovery_timer: f32,
    /// Rest after swinging (seconds)
    pub post_attack_timer: f32,
    /// Cleared by the arena when attacks are exclusive and someone else is swinging
    pub may_attack: bool,
    initial_orbit_angle: f32,
    tuning: EnemyTuning,
    rng: ChaCha8Rng,
}

impl EnemyBrain {
    pub fn new(orbit_angle: f32, tuning: EnemyTuning, mut rng: ChaCha8Rng) -> Self {
        let orbit_angle = wrap_degrees(orbit_angle);
        let hits_to_block = roll_hits_to_block(&mut rng, &tuning);

        Self {
            orbit_angle,
            target_snapshot: Vec2::ZERO,
            guard: GuardState::new(tuning.guard_duration, hits_to_block),
            damage_recovery_timer: 0.0,
            post_attack_timer: 0.0,
            may_attack: true,
            initial_orbit_angle: orbit_angle,
            tuning,
            rng,
        }
    }

    pub fn set_target_snapshot(&mut self, target: Vec2) {
        self.target_snapshot = target;
    }

    /// Either rest window still running
    pub fn is_recovering(&self) -> bool {
        self.damage_recovery_timer > 0.0 || self.post_attack_timer > 0.0
    }

    pub fn tuning(&self) -> &EnemyTuning {
        &self.tuning
    }

    /// Orbit-strafe decision for this tick
    pub(crate) fn think(&mut self, body: &mut Body, delta: f32) {
        if body.is_attacking() {
            let (min, max) = ordered(
                self.tuning.post_attack_rest_min,
                self.tuning.post_attack_rest_max,
            );
            self.post_attack_timer = self.rng.gen_range(min..=max) as f32;
        }

        self.guard.tick(delta, body.defending);

        if body.knockback.is_active() {
            self.damage_recovery_timer = self.tuning.damage_recovery;
            return;
        }

        let sign = self.guard.orbit_sign();
        self.orbit_angle = wrap_degrees(self.orbit_angle + delta * self.tuning.orbit_speed * sign);

        let reach = body.attack.distance;
        let radians = self.orbit_angle.to_radians();
        let desired = self.target_snapshot + Vec2::new(radians.cos(), radians.sin()) * reach * sign;
        let offset = desired - body.position;

        if !self.is_recovering() {
            if offset.length() > reach {
                body.motion.set_target_vec(offset);
            } else {
                body.motion.set_target_vec(-offset);
            }
            self.guard.has_blocked = false;
        } else {
            self.damage_recovery_timer -= delta;
            self.post_attack_timer -= delta;
            if offset.length() < reach * self.tuning.retreat_ratio {
                body.motion.set_target_vec(-offset);
            } else {
                body.motion.set_target_vec(Vec2::ZERO);
            }
        }
    }

    pub(crate) fn attack_intent(&self, body: &Body) -> bool {
        let reach = body.attack.distance + body.attack.radius;
        self.may_attack
            && !self.is_recovering()
            && body.position.distance(self.target_snapshot) <= reach
    }

    pub(crate) fn defend_intent(&self) -> bool {
        self.guard.is_raised()
    }

    /// Locked strike point mid-swing, otherwise the target snapshot
    pub(crate) fn target_position(&self, body: &Body) -> Vec2 {
        if body.is_attacking() {
            body.attack.point
        } else {
            self.target_snapshot
        }
    }

    pub(crate) fn receive_hit(&mut self, body: &mut Body, attacker: Vec2, damage: u32) -> HitOutcome {
        // One credited block per recovery cycle
        if self.guard.has_blocked {
            return HitOutcome::Immune;
        }

        let outcome = body.receive_hit(attacker, damage);
        match outcome {
            HitOutcome::Applied => {
                if self.guard.register_hit() {
                    log(&format!(
                        "Enemy guard raised after {} consecutive hits",
                        self.guard.consecutive_hits
                    ));
                }
            }
            HitOutcome::Blocked => {
                let threshold = roll_hits_to_block(&mut self.rng, &self.tuning);
                self.guard.credit_block(threshold);
                log(&format!(
                    "Enemy blocked: hits {} / {}",
                    self.guard.consecutive_hits, self.guard.hits_to_block
                ));
            }
            HitOutcome::Immune => {}
        }
        outcome
    }

    pub(crate) fn reset(&mut self, body: &mut Body) {
        body.reset();
        let hits_to_block = roll_hits_to_block(&mut self.rng, &self.tuning);
        self.guard.reset(hits_to_block);
        self.orbit_angle = self.initial_orbit_angle;
        self.damage_recovery_timer = 0.0;
        self.post_attack_timer = 0.0;
        self.may_attack = true;
    }
}

fn roll_hits_to_block(rng: &mut ChaCha8Rng, tuning: &EnemyTuning) -> u32 {
    let (min, max) = ordered(tuning.hits_to_block_min, tuning.hits_to_block_max);
    rng.gen_range(min..=max)
}

fn ordered(a: u32, b: u32) -> (u32, u32) {
    (a.min(b), a.max(b))
}
