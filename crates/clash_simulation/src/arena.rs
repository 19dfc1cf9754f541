//! The arena: one player, the enemy pool and the per-frame driver
//!
//! Frame order:
//! 1. player input applied, enemy target snapshots refreshed
//! 2. tick player, then enemies in pool order
//! 3. every ordered pair: bump, then strike

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::HitOutcome;
use crate::config::{ArenaConfig, ConfigError};
use crate::fighter::{Fighter, FighterView};
use crate::logger::log_info;
use crate::player::PlayerInput;
use crate::roster::{EnemyId, EnemyManager};
use crate::DeterministicRng;

/// Any fighter in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum FighterId {
    Player,
    Enemy(EnemyId),
}

impl FighterId {
    /// Slot in the unified [player, enemies...] ordering
    fn slot(self) -> usize {
        match self {
            FighterId::Player => 0,
            FighterId::Enemy(EnemyId(index)) => index + 1,
        }
    }

    fn from_slot(slot: usize) -> Self {
        match slot {
            0 => FighterId::Player,
            n => FighterId::Enemy(EnemyId(n - 1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    Damaged {
        attacker: FighterId,
        target: FighterId,
        damage: u32,
    },
    Blocked {
        attacker: FighterId,
        target: FighterId,
    },
    Died {
        fighter: FighterId,
        killer: FighterId,
    },
}

/// What happened during one [`Arena::step`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub events: Vec<CombatEvent>,
}

impl FrameReport {
    pub fn deaths(&self) -> impl Iterator<Item = FighterId> + '_ {
        self.events.iter().filter_map(|event| match event {
            CombatEvent::Died { fighter, .. } => Some(*fighter),
            _ => None,
        })
    }

    pub fn total_damage(&self) -> u32 {
        self.events
            .iter()
            .map(|event| match event {
                CombatEvent::Damaged { damage, .. } => *damage,
                _ => 0,
            })
            .sum()
    }
}

#[derive(Resource, Debug)]
pub struct Arena {
    config: ArenaConfig,
    player: Fighter,
    enemies: EnemyManager,
    rng: DeterministicRng,
    frame: u64,
    elapsed: f32,
}

impl Arena {
    pub fn new(config: ArenaConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Default arena (1280×720, five enemies)
    pub fn with_default_config(seed: u64) -> Self {
        Self::build(ArenaConfig::default(), seed)
    }

    fn build(config: ArenaConfig, seed: u64) -> Self {
        let mut rng = DeterministicRng::new(seed);
        let player = Fighter::player(config.center(), config.player.clone());
        let enemies = EnemyManager::new(&config, &mut rng.rng);

        log_info(&format!(
            "Arena {}x{} created: {} enemies (seed: {})",
            config.width, config.height, config.enemy_count, seed
        ));

        Self {
            config,
            player,
            enemies,
            rng,
            frame: 0,
            elapsed: 0.0,
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated seconds since creation or the last reset
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn player(&self) -> &Fighter {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Fighter {
        &mut self.player
    }

    pub fn enemies(&self) -> &EnemyManager {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut EnemyManager {
        &mut self.enemies
    }

    pub fn fighter(&self, id: FighterId) -> Option<&Fighter> {
        match id {
            FighterId::Player => Some(&self.player),
            FighterId::Enemy(enemy) => self.enemies.get(enemy),
        }
    }

    /// Player first, then enemies in pool order
    pub fn fighters(&self) -> impl Iterator<Item = (FighterId, &Fighter)> {
        std::iter::once((FighterId::Player, &self.player)).chain(
            self.enemies
                .iter()
                .map(|(id, enemy)| (FighterId::Enemy(id), enemy)),
        )
    }

    /// Render snapshots; dead fighters first so the living draw on top
    pub fn views(&self) -> Vec<FighterView> {
        let (mut dead, alive): (Vec<_>, Vec<_>) = self
            .fighters()
            .map(|(_, fighter)| fighter.view())
            .partition(|view| !view.alive);
        dead.extend(alive);
        dead
    }

    /// Advance one frame
    pub fn step(&mut self, delta: f32, input: PlayerInput) -> FrameReport {
        let delta = delta.max(0.0);
        self.frame += 1;
        self.elapsed += delta;

        if let Some(player) = self.player.as_player_mut() {
            player.input = input;
        }
        self.enemies.organize_enemies(self.player.position());

        self.player.tick(delta);
        let exclusive = self.config.exclusive_enemy_attacks;
        for index in 0..self.enemies.len() {
            if exclusive {
                let others_attacking = self.enemies.any_attacking_except(EnemyId(index));
                if let Some(brain) = self.enemies.fighters_mut()[index].as_enemy_mut() {
                    brain.may_attack = !others_attacking;
                }
            }
            self.enemies.fighters_mut()[index].tick(delta);
        }

        let mut report = FrameReport {
            frame: self.frame,
            events: Vec::new(),
        };
        let count = self.enemies.len() + 1;
        for a in 0..count {
            for b in 0..count {
                if a == b {
                    continue;
                }
                self.resolve_pair(a, b, &mut report.events);
            }
        }
        report
    }

    fn resolve_pair(&mut self, a: usize, b: usize, events: &mut Vec<CombatEvent>) {
        let (first, second) = pair_mut(&mut self.player, self.enemies.fighters_mut(), a, b);
        first.check_bump(second);

        let was_alive = second.is_alive();
        let Some(outcome) = first.check_hit(second) else {
            return;
        };

        let attacker = FighterId::from_slot(a);
        let target = FighterId::from_slot(b);
        match outcome {
            HitOutcome::Applied => {
                events.push(CombatEvent::Damaged {
                    attacker,
                    target,
                    damage: first.damage(),
                });
                if was_alive && !second.is_alive() {
                    events.push(CombatEvent::Died {
                        fighter: target,
                        killer: attacker,
                    });
                }
            }
            HitOutcome::Blocked => events.push(CombatEvent::Blocked { attacker, target }),
            HitOutcome::Immune => {}
        }
    }

    /// Player back to the centre, enemies to fresh off-screen points
    pub fn reset(&mut self) {
        self.player.respawn_at(self.config.center());
        self.enemies.respawn(&self.config, &mut self.rng.rng);
        self.frame = 0;
        self.elapsed = 0.0;
        log_info("Arena reset");
    }

    pub fn is_player_alive(&self) -> bool {
        self.player.is_alive()
    }
}

/// Two distinct fighters from the [player, enemies...] ordering
fn pair_mut<'a>(
    player: &'a mut Fighter,
    enemies: &'a mut [Fighter],
    a: usize,
    b: usize,
) -> (&'a mut Fighter, &'a mut Fighter) {
    debug_assert_ne!(a, b);
    match (a, b) {
        (0, other) => (player, &mut enemies[other - 1]),
        (other, 0) => (&mut enemies[other - 1], player),
        (a, b) if a < b => {
            let (head, tail) = enemies.split_at_mut(b - 1);
            (&mut head[a - 1], &mut tail[0])
        }
        (a, b) => {
            let (head, tail) = enemies.split_at_mut(a - 1);
            (&mut tail[0], &mut head[b - 1])
        }
    }
}
