//! Gameplay tuning and arena configuration
//!
//! All values have defaults matching the shipped game feel; a driver can
//! override any subset (serde `default` fills the rest) and must call
//! [`ArenaConfig::validate`] (done by `Arena::new`) before use.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::Tint;

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("arena bounds must be positive, got {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },

    #[error("{owner}.{field} must be positive, got {value}")]
    NonPositive {
        owner: &'static str,
        field: &'static str,
        value: f32,
    },

    #[error("{field} range is inverted: {min}..={max}")]
    InvertedRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
}

/// Per-fighter tuning (body, attack, knockback)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FighterTuning {
    /// Movement speed (px/s)
    pub speed: f32,
    /// Body radius (px)
    pub size: f32,
    pub tint: Tint,
    pub max_health: u32,
    /// Damage per landed strike
    pub strength: f32,
    /// Strike reach in half-body units (distance = range × size / 2)
    pub attack_range: f32,
    /// Radius of each sampled hit circle (px); also the sampling step
    pub attack_radius: f32,
    /// Swing length (seconds)
    pub attack_duration: f32,
    /// Rest after a swing (seconds)
    pub attack_cooldown: f32,
    pub knockback_duration: f32,
    /// Speed multiplier while knocked back
    pub knockback_force: f32,
    /// Knockback duration factor when the strike is blocked
    pub blocked_duration_scale: f32,
    /// Knockback force factor when the strike is blocked
    pub blocked_force_scale: f32,
    /// Speed multiplier while defending
    pub defend_speed_multiplier: f32,
    /// Motion smoothing rate (per second)
    pub motion_blend_rate: f32,
}

impl Default for FighterTuning {
    fn default() -> Self {
        Self::player()
    }
}

impl FighterTuning {
    pub fn player() -> Self {
        Self {
            speed: 150.0,
            size: 17.0,
            tint: Tint::DarkGreen,
            max_health: 100,
            strength: 8.0,
            attack_range: 10.0,
            attack_radius: 10.0,
            attack_duration: 0.15,
            attack_cooldown: 0.15,
            knockback_duration: 0.15,
            knockback_force: 2.25,
            blocked_duration_scale: 0.35,
            blocked_force_scale: 0.1,
            defend_speed_multiplier: 0.5,
            motion_blend_rate: 8.5,
        }
    }

    pub fn enemy() -> Self {
        Self {
            speed: 100.0,
            size: 15.0,
            tint: Tint::DarkBlue,
            strength: 5.0,
            ..Self::player()
        }
    }

    /// Length of the strike line (px)
    pub fn attack_distance(&self) -> f32 {
        self.attack_range * self.size * 0.5
    }

    fn validate(&self, owner: &'static str) -> Result<(), ConfigError> {
        let positive = [
            ("size", self.size),
            ("attack_range", self.attack_range),
            ("attack_radius", self.attack_radius),
            ("max_health", self.max_health as f32),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { owner, field, value });
            }
        }
        Ok(())
    }
}

/// Enemy AI tuning (orbit-strafe + stagger escalation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Orbit angular speed (degrees/s)
    pub orbit_speed: f32,
    /// Forced guard length once the hit threshold is exceeded (seconds)
    pub guard_duration: f32,
    pub hits_to_block_min: u32,
    pub hits_to_block_max: u32,
    /// Rest after being struck (seconds)
    pub damage_recovery: f32,
    /// Rest after attacking, rolled in whole seconds
    pub post_attack_rest_min: u32,
    pub post_attack_rest_max: u32,
    /// Retreat when closer than this fraction of the attack distance while resting
    pub retreat_ratio: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            orbit_speed: 90.0,
            guard_duration: 3.0,
            hits_to_block_min: 2,
            hits_to_block_max: 10,
            damage_recovery: 0.35,
            post_attack_rest_min: 1,
            post_attack_rest_max: 3,
            retreat_ratio: 0.75,
        }
    }
}

impl EnemyTuning {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.hits_to_block_min > self.hits_to_block_max {
            return Err(ConfigError::InvertedRange {
                field: "hits_to_block",
                min: self.hits_to_block_min,
                max: self.hits_to_block_max,
            });
        }
        if self.post_attack_rest_min > self.post_attack_rest_max {
            return Err(ConfigError::InvertedRange {
                field: "post_attack_rest",
                min: self.post_attack_rest_min,
                max: self.post_attack_rest_max,
            });
        }
        Ok(())
    }
}

/// Whole-arena configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Visible area width (px)
    pub width: f32,
    /// Visible area height (px)
    pub height: f32,
    pub enemy_count: usize,
    /// How far outside the visible area enemies spawn (px)
    pub spawn_margin: f32,
    /// Initial orbit angle step between consecutive enemies (degrees)
    pub orbit_phase_step: f32,
    /// Only one enemy may start a swing while another is mid-swing
    pub exclusive_enemy_attacks: bool,
    pub player: FighterTuning,
    pub enemy: FighterTuning,
    pub enemy_ai: EnemyTuning,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            enemy_count: 5,
            spawn_margin: 50.0,
            orbit_phase_step: 75.0,
            exclusive_enemy_attacks: false,
            player: FighterTuning::player(),
            enemy: FighterTuning::enemy(),
            enemy_ai: EnemyTuning::default(),
        }
    }
}

impl ArenaConfig {
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Player spawn point
    pub fn center(&self) -> Vec2 {
        self.bounds() * 0.5
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        if self.enemy_count == 0 {
            return Err(ConfigError::NonPositive {
                owner: "arena",
                field: "enemy_count",
                value: 0.0,
            });
        }
        if !(self.spawn_margin > 0.0) {
            return Err(ConfigError::NonPositive {
                owner: "arena",
                field: "spawn_margin",
                value: self.spawn_margin,
            });
        }
        self.player.validate("player")?;
        self.enemy.validate("enemy")?;
        self.enemy_ai.validate()
    }
}
