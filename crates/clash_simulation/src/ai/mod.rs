//! Enemy AI
//!
//! Orbit-strafe around the player snapshot, rest windows after trading
//! blows, and guard escalation after repeated hits.

mod enemy;
mod guard;

pub use enemy::{wrap_degrees, EnemyBrain};
pub use guard::GuardState;
