//! Circle geometry for body bumps and strike lines

use bevy::prelude::*;

/// Closed overlap test: touching circles count as overlapping
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) <= reach * reach
}

/// How two overlapping bodies must separate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// Unit vector from the first body towards the second
    pub normal: Vec2,
    /// Overlap depth along `normal`
    pub penetration: f32,
}

/// `None` when the circles do not overlap. Coincident centres separate along +X.
pub fn separation(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> Option<Separation> {
    if !circles_overlap(a, radius_a, b, radius_b) {
        return None;
    }

    let offset = b - a;
    let distance = offset.length();
    let normal = if distance > f32::EPSILON {
        offset / distance
    } else {
        Vec2::X
    };

    Some(Separation {
        normal,
        penetration: radius_a + radius_b - distance,
    })
}

/// Sample centres along a strike line, from the tip back to the striker.
///
/// Steps of `step` starting at `tip`, stopping before the full length is
/// covered. A zero-length line (aim on the striker) samples the striker's
/// centre once. Yields nothing for a non-positive step.
pub fn strike_samples(origin: Vec2, tip: Vec2, step: f32) -> impl Iterator<Item = Vec2> {
    let length = origin.distance(tip);
    let count = if !(step > 0.0) {
        0
    } else if length > 0.0 {
        (length / step).ceil() as usize
    } else {
        1
    };

    (0..count).map(move |i| {
        if length > 0.0 {
            tip.lerp(origin, i as f32 * step / length)
        } else {
            tip
        }
    })
}
