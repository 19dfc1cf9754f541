//! Combat components: attack timing, knockback, hit feedback

use bevy::prelude::*;

/// Which fist lands the current strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum Hand {
    Left,
    Right,
}

/// Attack timing for one fighter
///
/// A swing lasts `duration` seconds; during it the cooldown is held at max,
/// so the next swing only starts `cooldown` seconds after the previous one ends.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct AttackState {
    /// Time left in the current swing (seconds, > 0 while attacking)
    pub time_left: f32,
    /// Time left until a new swing is allowed (seconds)
    pub cooldown_left: f32,
    /// Length of a swing (seconds)
    pub duration: f32,
    /// Rest between swings (seconds)
    pub cooldown: f32,
    /// Swings started so far; parity picks the hand
    pub count: u32,
    /// Tip of the strike line, recomputed every tick
    pub point: Vec2,
    /// Length of the strike line
    pub distance: f32,
    /// Radius of each sampled hit circle along the strike line
    pub radius: f32,
}

impl AttackState {
    /// Fresh attack state; starts on cooldown so nothing swings on the first frame
    pub fn new(duration: f32, cooldown: f32, distance: f32, radius: f32) -> Self {
        Self {
            time_left: 0.0,
            cooldown_left: cooldown,
            duration,
            cooldown,
            count: 0,
            point: Vec2::ZERO,
            distance,
            radius,
        }
    }

    pub fn is_attacking(&self) -> bool {
        self.time_left > 0.0
    }

    pub fn cooldown_elapsed(&self) -> bool {
        self.cooldown_left <= 0.0
    }

    pub fn begin(&mut self) {
        self.time_left = self.duration;
        self.count = self.count.wrapping_add(1);
    }

    pub fn refresh_cooldown(&mut self) {
        self.cooldown_left = self.cooldown;
    }

    pub fn tick_cooldown(&mut self, delta: f32) {
        if self.cooldown_left > 0.0 {
            self.cooldown_left -= delta;
        }
    }

    pub fn striking_hand(&self) -> Hand {
        if self.count % 2 == 0 {
            Hand::Right
        } else {
            Hand::Left
        }
    }

    pub fn reset(&mut self, origin: Vec2) {
        self.time_left = 0.0;
        self.cooldown_left = self.cooldown;
        self.count = 0;
        self.point = origin;
    }
}

/// Involuntary slide after being struck
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct Knockback {
    /// Unit direction away from the attacker
    pub direction: Vec2,
    /// Time left (seconds)
    pub timer: f32,
    /// Speed multiplier applied while sliding
    pub force: f32,
}

impl Knockback {
    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    pub fn start(&mut self, direction: Vec2, duration: f32, force: f32) {
        self.direction = direction;
        self.timer = duration;
        self.force = force;
    }

    pub fn tick(&mut self, delta: f32) {
        self.timer -= delta;
    }
}

/// What the last incoming strike did (shown while knockback runs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum HitFeedback {
    Damaged(u32),
    Blocked,
}
