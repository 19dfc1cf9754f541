//! Determinism tests
//!
//! Same seed + same inputs ⇒ byte-identical arena state

use bevy::prelude::*;
use clash_simulation::{arena_snapshot, Arena, PlayerInput};

const DT: f32 = 1.0 / 60.0;

/// Scripted input: circle the centre, swing every half second
fn scripted(frame: usize) -> PlayerInput {
    let t = frame as f32 * DT;
    PlayerInput {
        attack: frame % 30 < 10,
        defend: frame % 90 > 70,
        aim: Vec2::new(640.0 + 100.0 * t.cos(), 360.0 + 100.0 * t.sin()),
        movement: Vec2::new(t.sin(), -t.cos()),
    }
}

fn run_simulation(seed: u64, frames: usize) -> Vec<u8> {
    let mut arena = Arena::with_default_config(seed);
    for frame in 0..frames {
        arena.step(DT, scripted(frame));
    }
    arena_snapshot(&arena)
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const FRAMES: usize = 1000;

    let snapshot1 = run_simulation(SEED, FRAMES);
    let snapshot2 = run_simulation(SEED, FRAMES);

    assert_eq!(
        snapshot1, snapshot2,
        "Same seed ({}) produced different results",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const FRAMES: usize = 600;

    let snapshots: Vec<_> = (0..5).map(|_| run_simulation(SEED, FRAMES)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(snapshots[0], *snapshot, "Run {} differs from run 0", i);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let snapshot1 = run_simulation(1, 10);
    let snapshot2 = run_simulation(2, 10);

    assert_ne!(snapshot1, snapshot2, "Different seeds produced the same arena");
}

#[test]
fn test_reset_is_deterministic() {
    let mut a = Arena::with_default_config(8);
    let mut b = Arena::with_default_config(8);
    for frame in 0..300 {
        a.step(DT, scripted(frame));
        b.step(DT, scripted(frame));
    }

    a.reset();
    b.reset();
    assert_eq!(arena_snapshot(&a), arena_snapshot(&b));
}
