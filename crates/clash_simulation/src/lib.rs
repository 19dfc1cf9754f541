//! Classy Clash simulation core
//!
//! Real-time 2D melee: one player and a pool of enemies that move, strike,
//! guard and get knocked back every frame.
//!
//! - [`fighter`]: shared state machine + collisions, driven by a `Brain`
//! - [`player`] / [`ai`]: the two brains
//! - [`roster`]: enemy pool and off-screen spawning
//! - [`arena`]: per-frame driver (snapshot → ticks → pairwise pass)
//! - [`combat`]: damage rules and the Bevy plugin around the arena
//!
//! Rendering, input polling and windowing belong to the host.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod ai;
pub mod arena;
pub mod combat;
pub mod components;
pub mod config;
pub mod fighter;
pub mod logger;
pub mod player;
pub mod roster;

pub use arena::{Arena, CombatEvent, FighterId, FrameReport};
pub use combat::{CombatPlugin, DamageDealt, FighterDied, HitBlocked, HitOutcome, PlayerIntent};
pub use components::{AttackState, Faction, Hand, Health, HitFeedback, Knockback, Motion, Tint};
pub use config::{ArenaConfig, ConfigError, EnemyTuning, FighterTuning};
pub use fighter::{Fighter, FighterView, VisualState};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel};
pub use player::PlayerInput;
pub use roster::{EnemyId, EnemyManager};

/// Main simulation plugin
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz for the simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_plugins(CombatPlugin);
    }
}

/// Seeded RNG
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Minimal headless Bevy App with a default arena
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Arena::with_default_config(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0));

    app
}

/// Same as [`create_headless_app`] with a custom (validated) configuration
pub fn create_headless_app_with(config: ArenaConfig, seed: u64) -> Result<App, ConfigError> {
    let arena = Arena::new(config, seed)?;
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(arena)
        .insert_resource(Time::<Fixed>::from_hz(60.0));

    Ok(app)
}

/// Byte snapshot of every fighter, for determinism comparisons
pub fn arena_snapshot(arena: &Arena) -> Vec<u8> {
    let mut snapshot = Vec::new();
    snapshot.extend_from_slice(&arena.frame().to_le_bytes());

    for (id, fighter) in arena.fighters() {
        snapshot.extend_from_slice(format!("{:?}", id).as_bytes());
        for value in [
            fighter.position().x,
            fighter.position().y,
            fighter.motion().x,
            fighter.motion().y,
            fighter.strength(),
        ] {
            snapshot.extend_from_slice(&value.to_bits().to_le_bytes());
        }
        snapshot.extend_from_slice(&fighter.health().current.to_le_bytes());
        snapshot.extend_from_slice(&fighter.attack_count().to_le_bytes());
        snapshot.push(fighter.is_defending() as u8);
        if let Some(enemy) = fighter.as_enemy() {
            snapshot.extend_from_slice(&enemy.orbit_angle.to_bits().to_le_bytes());
            snapshot.extend_from_slice(&enemy.guard.consecutive_hits.to_le_bytes());
            snapshot.extend_from_slice(&enemy.guard.hits_to_block.to_le_bytes());
        }
    }

    snapshot
}
