//! Fighter state components
//!
//! Plain data owned by each `Fighter` inside the `Arena` resource, not ECS
//! `Component`s.
//!
//! Organised by concern:
//! - actor: health, faction, tint
//! - movement: desired/applied motion
//! - combat: attack timing, knockback, hit feedback

pub mod actor;
pub mod combat;
pub mod movement;

// Re-exports
pub use actor::*;
pub use combat::*;
pub use movement::*;
