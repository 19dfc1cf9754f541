//! Player-controlled brain
//!
//! The driver polls its input devices and hands a [`PlayerInput`] over every
//! frame; the brain only reads it back at the customisation points.

use bevy::prelude::*;

use crate::combat::{comeback_strength, HitOutcome};
use crate::fighter::Body;
use crate::logger::log;

/// Per-frame player intent
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct PlayerInput {
    /// Attack button held
    pub attack: bool,
    /// Guard button held
    pub defend: bool,
    /// World-space aim point (mouse)
    pub aim: Vec2,
    /// Movement axes, each clamped to [-1, 1]
    pub movement: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBrain {
    pub input: PlayerInput,
    base_strength: f32,
}

impl PlayerBrain {
    pub fn new(base_strength: f32) -> Self {
        Self {
            input: PlayerInput::default(),
            base_strength,
        }
    }

    pub fn base_strength(&self) -> f32 {
        self.base_strength
    }

    pub(crate) fn think(&mut self, body: &mut Body) {
        // Swings commit the body; movement input resumes afterwards
        if !body.is_attacking() {
            body.motion.set_target_vec(self.input.movement);
        }
    }

    pub(crate) fn attack_intent(&self) -> bool {
        self.input.attack
    }

    pub(crate) fn defend_intent(&self) -> bool {
        self.input.defend
    }

    pub(crate) fn target_position(&self, body: &Body) -> Vec2 {
        if body.is_attacking() {
            body.attack.point
        } else {
            self.input.aim
        }
    }

    /// Base damage handling, then comeback scaling on an unguarded hit
    pub(crate) fn receive_hit(&mut self, body: &mut Body, attacker: Vec2, damage: u32) -> HitOutcome {
        let outcome = body.receive_hit(attacker, damage);
        if outcome.is_applied() {
            let strength = comeback_strength(self.base_strength, body.health.ratio());
            if strength != body.strength {
                log(&format!("Player strength: {:.2}", strength));
            }
            body.set_strength(strength);
        }
        outcome
    }

    pub(crate) fn reset(&mut self, body: &mut Body) {
        body.reset();
        self.input = PlayerInput::default();
    }
}
