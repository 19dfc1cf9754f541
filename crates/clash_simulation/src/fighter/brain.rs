//! What drives a fighter: player input or enemy AI.
//!
//! The state machine in [`super::Fighter::tick`] is shared; a brain only
//! answers the questions it asks (intents, aim, damage handling).

use bevy::prelude::*;

use super::Body;
use crate::ai::EnemyBrain;
use crate::combat::HitOutcome;
use crate::player::PlayerBrain;

#[derive(Debug, Clone)]
pub enum Brain {
    Player(PlayerBrain),
    Enemy(EnemyBrain),
}

impl Brain {
    /// Per-tick decision made before the state machine runs
    pub(crate) fn think(&mut self, body: &mut Body, delta: f32) {
        match self {
            Brain::Player(player) => player.think(body),
            Brain::Enemy(enemy) => enemy.think(body, delta),
        }
    }

    pub(crate) fn attack_intent(&self, body: &Body) -> bool {
        match self {
            Brain::Player(player) => player.attack_intent(),
            Brain::Enemy(enemy) => enemy.attack_intent(body),
        }
    }

    pub(crate) fn defend_intent(&self) -> bool {
        match self {
            Brain::Player(player) => player.defend_intent(),
            Brain::Enemy(enemy) => enemy.defend_intent(),
        }
    }

    pub(crate) fn target_position(&self, body: &Body) -> Vec2 {
        match self {
            Brain::Player(player) => player.target_position(body),
            Brain::Enemy(enemy) => enemy.target_position(body),
        }
    }

    pub(crate) fn receive_hit(&mut self, body: &mut Body, attacker: Vec2, damage: u32) -> HitOutcome {
        match self {
            Brain::Player(player) => player.receive_hit(body, attacker, damage),
            Brain::Enemy(enemy) => enemy.receive_hit(body, attacker, damage),
        }
    }

    pub(crate) fn reset(&mut self, body: &mut Body) {
        match self {
            Brain::Player(player) => player.reset(body),
            Brain::Enemy(enemy) => enemy.reset(body),
        }
    }
}
