//! Combat integration test
//!
//! Full arenas stepped headless through the public API:
//! - hits, blocks and knockback immunity between player and enemies
//! - health / orbit invariants over long fights
//! - exclusive enemy attacks

use bevy::prelude::*;
use clash_simulation::*;

const DT: f32 = 1.0 / 60.0;

/// Arena with `enemies` enemies, the first one parked next to the player
fn close_quarters(enemies: usize, seed: u64) -> Arena {
    let config = ArenaConfig {
        enemy_count: enemies,
        ..ArenaConfig::default()
    };
    let mut arena = Arena::new(config, seed).unwrap();
    let centre = arena.player().position();
    arena
        .enemies_mut()
        .get_mut(EnemyId(0))
        .unwrap()
        .set_position(centre + Vec2::new(60.0, 0.0));
    arena
}

/// Player facing the parked enemy, optionally guarding
fn idle_input(arena: &Arena, defend: bool) -> PlayerInput {
    let aim = arena
        .enemies()
        .get(EnemyId(0))
        .map(Fighter::position)
        .unwrap_or_default();
    PlayerInput {
        defend,
        aim,
        ..default()
    }
}

#[test]
fn test_enemy_hit_costs_five_and_no_stacking() {
    let mut arena = close_quarters(1, 42);
    let mut first_hit = None;

    for frame in 0..600 {
        let input = idle_input(&arena, false);
        let report = arena.step(DT, input);

        let hits: Vec<u32> = report
            .events
            .iter()
            .filter_map(|event| match event {
                CombatEvent::Damaged {
                    target: FighterId::Player,
                    damage,
                    ..
                } => Some(*damage),
                _ => None,
            })
            .collect();

        assert!(hits.len() <= 1, "frame {frame}: stacked hits {hits:?}");
        if let Some(damage) = hits.first() {
            first_hit = Some(*damage);
            break;
        }
    }

    assert_eq!(first_hit, Some(5));
    assert_eq!(arena.player().health().current, 95);
    assert!(arena.player().is_on_knockback());

    // Still sliding: a direct strike is rejected
    let enemy = arena.enemies().get(EnemyId(0)).unwrap().clone();
    assert!(!arena.player_mut().try_get_damaged_by(&enemy, 5));
    assert_eq!(arena.player().health().current, 95);
}

#[test]
fn test_guarding_player_loses_no_health() {
    let mut arena = close_quarters(1, 7);
    let mut blocked = 0;

    for _ in 0..600 {
        let input = idle_input(&arena, true);
        let report = arena.step(DT, input);
        blocked += report
            .events
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    CombatEvent::Blocked {
                        target: FighterId::Player,
                        ..
                    }
                )
            })
            .count();
    }

    assert!(blocked > 0, "enemy never swung at the guarding player");
    assert_eq!(arena.player().health().current, 100);
    assert_eq!(arena.player().strength(), 8.0);
}

#[test]
fn test_health_never_increases_in_long_fight() {
    let mut arena = Arena::with_default_config(123);
    let mut previous: Vec<u32> = arena.fighters().map(|(_, f)| f.health().current).collect();

    for frame in 0..1800 {
        let input = chase_nearest(&arena);
        arena.step(DT, input);

        let current: Vec<u32> = arena.fighters().map(|(_, f)| f.health().current).collect();
        for (before, after) in previous.iter().zip(&current) {
            assert!(after <= before, "frame {frame}: health went up {before} → {after}");
        }
        previous = current;

        for (_, enemy) in arena.enemies().iter() {
            let angle = enemy.as_enemy().unwrap().orbit_angle;
            assert!((0.0..360.0).contains(&angle), "frame {frame}: orbit {angle}");
        }

        if !arena.is_player_alive() {
            break;
        }
    }
}

#[test]
fn test_player_damage_only_lands_on_enemies() {
    let mut arena = Arena::with_default_config(5);

    for _ in 0..1200 {
        let input = chase_nearest(&arena);
        let report = arena.step(DT, input);

        for event in &report.events {
            if let CombatEvent::Damaged { attacker, target, .. } = event {
                // Enemies never strike each other
                assert!(
                    *attacker == FighterId::Player || *target == FighterId::Player,
                    "{event:?}"
                );
                assert_ne!(attacker, target);
            }
        }
    }
}

#[test]
fn test_exclusive_attacks_one_swing_at_a_time() {
    let config = ArenaConfig {
        exclusive_enemy_attacks: true,
        ..ArenaConfig::default()
    };
    let mut arena = Arena::new(config, 99).unwrap();
    let centre = arena.player().position();
    for index in 0..5 {
        let angle = (index as f32 * 72.0).to_radians();
        arena
            .enemies_mut()
            .get_mut(EnemyId(index))
            .unwrap()
            .set_position(centre + Vec2::new(angle.cos(), angle.sin()) * 70.0);
    }

    let mut any_swing = false;
    for frame in 0..900 {
        arena.step(DT, PlayerInput::default());
        let swinging = arena
            .enemies()
            .iter()
            .filter(|(_, enemy)| enemy.is_attacking())
            .count();
        assert!(swinging <= 1, "frame {frame}: {swinging} enemies swinging");
        any_swing |= swinging == 1;
    }
    assert!(any_swing);
}

#[test]
fn test_reset_after_fight() {
    let mut arena = close_quarters(2, 3);
    for _ in 0..600 {
        let input = idle_input(&arena, false);
        arena.step(DT, input);
    }

    arena.reset();
    assert_eq!(arena.player().health().current, 100);
    assert_eq!(arena.player().strength(), 8.0);
    for (_, enemy) in arena.enemies().iter() {
        assert!(enemy.is_alive());
        assert_eq!(enemy.health().current, 100);
    }
}

/// Walk at the nearest live enemy and swing once in reach
fn chase_nearest(arena: &Arena) -> PlayerInput {
    let player = arena.player();
    let nearest = arena
        .enemies()
        .iter()
        .filter(|(_, enemy)| enemy.is_alive())
        .map(|(_, enemy)| enemy.position())
        .min_by(|a, b| {
            a.distance(player.position())
                .total_cmp(&b.distance(player.position()))
        });

    match nearest {
        Some(target) => {
            let offset = target - player.position();
            let in_reach = offset.length() <= player.attack_distance();
            PlayerInput {
                attack: in_reach,
                defend: false,
                aim: target,
                movement: if in_reach { Vec2::ZERO } else { offset },
            }
        }
        None => PlayerInput::default(),
    }
}
