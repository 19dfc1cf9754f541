//! Base fighter components: Health, Faction, Tint

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Side a fighter belongs to.
///
/// Fighters of the same faction still bump into each other but never strike each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemies,
}

/// Fighter health
///
/// Invariant: 0 ≤ current ≤ max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100) // Default 100 HP
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// current / max, 0.0 for a zero-max pool
    pub fn ratio(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }
}

/// Body colour handed to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum Tint {
    DarkGreen,
    DarkBlue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage() {
        let mut health = Health::new(100);
        assert_eq!(health.current, 100);

        health.take_damage(30);
        assert_eq!(health.current, 70);
        assert!(health.is_alive());

        health.take_damage(100); // Saturating sub
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_health_ratio() {
        let mut health = Health::new(100);
        health.take_damage(25);
        assert_eq!(health.ratio(), 0.75);

        assert_eq!(Health::new(0).ratio(), 0.0);
    }

    #[test]
    fn test_health_restore() {
        let mut health = Health::new(40);
        health.take_damage(40);
        assert!(!health.is_alive());

        health.restore();
        assert_eq!(health.current, 40);
    }
}
