//! Enemy pool
//!
//! Fixed-size, owned by the arena. Enemies are never removed: dead ones
//! stay in their slot so `EnemyId`s remain stable for the whole session.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ai::{wrap_degrees, EnemyBrain};
use crate::config::ArenaConfig;
use crate::fighter::Fighter;

mod spawn;

pub use spawn::{random_offscreen_position, SpawnEdge};

/// Stable index into the enemy pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect, Serialize, Deserialize)]
pub struct EnemyId(pub usize);

#[derive(Debug, Clone)]
pub struct EnemyManager {
    enemies: Vec<Fighter>,
}

impl EnemyManager {
    /// Spawn `config.enemy_count` enemies off-screen. Each gets its own
    /// generator, seeded from `rng`, for its in-fight rolls.
    pub fn new(config: &ArenaConfig, rng: &mut ChaCha8Rng) -> Self {
        let enemies = (0..config.enemy_count)
            .map(|index| {
                let spawn = random_offscreen_position(rng, config.bounds(), config.spawn_margin);
                let orbit = wrap_degrees(index as f32 * config.orbit_phase_step);
                let brain_rng = ChaCha8Rng::seed_from_u64(rng.gen());
                let brain = EnemyBrain::new(orbit, config.enemy_ai.clone(), brain_rng);
                Fighter::enemy(spawn, config.enemy.clone(), brain)
            })
            .collect();

        Self { enemies }
    }

    /// Hand every enemy this frame's target position
    pub fn organize_enemies(&mut self, player_position: Vec2) {
        for brain in self.enemies.iter_mut().filter_map(Fighter::as_enemy_mut) {
            brain.set_target_snapshot(player_position);
        }
    }

    /// New off-screen spawn + full reset for every enemy
    pub fn respawn(&mut self, config: &ArenaConfig, rng: &mut impl Rng) {
        for enemy in &mut self.enemies {
            let spawn = random_offscreen_position(rng, config.bounds(), config.spawn_margin);
            enemy.respawn_at(spawn);
        }
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn get(&self, id: EnemyId) -> Option<&Fighter> {
        self.enemies.get(id.0)
    }

    pub fn get_mut(&mut self, id: EnemyId) -> Option<&mut Fighter> {
        self.enemies.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EnemyId, &Fighter)> {
        self.enemies
            .iter()
            .enumerate()
            .map(|(index, enemy)| (EnemyId(index), enemy))
    }

    pub fn alive_count(&self) -> usize {
        self.enemies.iter().filter(|enemy| enemy.is_alive()).count()
    }

    /// Any enemy other than `except` mid-swing
    pub fn any_attacking_except(&self, except: EnemyId) -> bool {
        self.iter()
            .any(|(id, enemy)| id != except && enemy.is_attacking())
    }

    pub(crate) fn fighters(&self) -> &[Fighter] {
        &self.enemies
    }

    pub(crate) fn fighters_mut(&mut self) -> &mut [Fighter] {
        &mut self.enemies
    }
}
