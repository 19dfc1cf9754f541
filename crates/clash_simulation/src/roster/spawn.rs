//! Off-screen spawn points

use bevy::prelude::*;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Left,
        SpawnEdge::Right,
        SpawnEdge::Top,
        SpawnEdge::Bottom,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Random point `margin` outside the `bounds` rectangle (origin top-left).
///
/// Uniform edge, then a uniform whole-pixel coordinate along it.
pub fn random_offscreen_position(rng: &mut impl Rng, bounds: Vec2, margin: f32) -> Vec2 {
    let edge = SpawnEdge::random(rng);
    let width = bounds.x.max(0.0) as u32;
    let height = bounds.y.max(0.0) as u32;

    match edge {
        SpawnEdge::Left => Vec2::new(-margin, rng.gen_range(0..=height) as f32),
        SpawnEdge::Right => Vec2::new(bounds.x + margin, rng.gen_range(0..=height) as f32),
        SpawnEdge::Top => Vec2::new(rng.gen_range(0..=width) as f32, -margin),
        SpawnEdge::Bottom => Vec2::new(rng.gen_range(0..=width) as f32, bounds.y + margin),
    }
}
