//! Combat rules and their Bevy wiring
//!
//! Pure rules live on [`crate::fighter::Fighter`] and in the submodules here.
//! The plugin only drives [`Arena::step`] once per fixed tick and turns its
//! [`crate::arena::FrameReport`] into events for whoever listens (renderer,
//! audio, UI).

use bevy::prelude::*;

use crate::arena::{Arena, CombatEvent};
use crate::logger::log_info;
use crate::player::PlayerInput;

pub mod collision;
pub mod damage;

pub use damage::{comeback_strength, DamageDealt, FighterDied, HitBlocked, HitOutcome};

/// Player input for the next fixed tick, written by the input layer
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PlayerIntent(pub PlayerInput);

/// Combat Plugin
///
/// Registers events and the FixedUpdate systems:
/// 1. step_arena — advance the arena, forward its report as events
/// 2. log_deaths — report deaths
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DamageDealt>()
            .add_event::<HitBlocked>()
            .add_event::<FighterDied>()
            .init_resource::<PlayerIntent>();

        app.add_systems(FixedUpdate, (step_arena, log_deaths).chain());
    }
}

/// Advance the arena by one fixed tick
pub fn step_arena(
    time: Res<Time<Fixed>>,
    intent: Res<PlayerIntent>,
    arena: Option<ResMut<Arena>>,
    mut damage_events: EventWriter<DamageDealt>,
    mut blocked_events: EventWriter<HitBlocked>,
    mut death_events: EventWriter<FighterDied>,
) {
    let Some(mut arena) = arena else {
        return;
    };

    let report = arena.step(time.delta_secs(), intent.0);

    for event in report.events {
        match event {
            CombatEvent::Damaged {
                attacker,
                target,
                damage,
            } => {
                let target_died = arena.fighter(target).is_some_and(|f| !f.is_alive());
                damage_events.write(DamageDealt {
                    attacker,
                    target,
                    damage,
                    target_died,
                });
            }
            CombatEvent::Blocked { attacker, target } => {
                blocked_events.write(HitBlocked { attacker, target });
            }
            CombatEvent::Died { fighter, killer } => {
                death_events.write(FighterDied {
                    fighter,
                    killer: Some(killer),
                });
            }
        }
    }
}

pub fn log_deaths(mut deaths: EventReader<FighterDied>) {
    for death in deaths.read() {
        match death.killer {
            Some(killer) => log_info(&format!("{:?} killed by {:?}", death.fighter, killer)),
            None => log_info(&format!("{:?} died", death.fighter)),
        }
    }
}

#[cfg(test)]
mod damage_tests;
