//! Stagger/guard escalation
//!
//! Every unguarded hit bumps a counter; once it exceeds a random threshold the
//! enemy raises its guard for a fixed time. Blocked strikes wind the counter
//! back down (halved per block) and drop the guard when it reaches zero.

use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct GuardState {
    /// Unguarded hits taken since the counter last reset
    pub consecutive_hits: u32,
    /// Counter value that must be exceeded to raise guard
    pub hits_to_block: u32,
    /// Remaining guard time (seconds)
    pub timer: f32,
    pub duration: f32,
    /// A block was already credited in this recovery cycle
    pub has_blocked: bool,
}

impl GuardState {
    pub fn new(duration: f32, hits_to_block: u32) -> Self {
        Self {
            consecutive_hits: 0,
            hits_to_block,
            timer: 0.0,
            duration,
            has_blocked: false,
        }
    }

    /// Guard requested (drives defend intent)
    pub fn is_raised(&self) -> bool {
        self.timer > 0.0
    }

    /// Orbit direction: +1 on even counter, -1 on odd
    pub fn orbit_sign(&self) -> f32 {
        if self.consecutive_hits % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Count an applied hit. Returns true when this hit raised the guard.
    pub fn register_hit(&mut self) -> bool {
        self.consecutive_hits = self.consecutive_hits.saturating_add(1);
        if self.consecutive_hits > self.hits_to_block {
            self.timer = self.duration;
            return true;
        }
        false
    }

    /// Credit a blocked strike with a freshly rolled threshold
    pub fn credit_block(&mut self, next_threshold: u32) {
        self.has_blocked = true;
        self.hits_to_block = next_threshold;
        self.consecutive_hits /= 2;
        if self.consecutive_hits == 0 {
            self.timer = 0.0;
        }
    }

    /// Count the guard down while it is actually held; expiry clears the counter
    pub fn tick(&mut self, delta: f32, defending: bool) {
        if !defending {
            return;
        }
        self.timer -= delta;
        if self.timer <= 0.0 {
            self.consecutive_hits = 0;
        }
    }

    pub fn reset(&mut self, hits_to_block: u32) {
        *self = Self::new(self.duration, hits_to_block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_raised_after_threshold_exceeded() {
        let mut guard = GuardState::new(3.0, 2);

        assert!(!guard.register_hit());
        assert!(!guard.register_hit());
        assert!(!guard.is_raised());

        assert!(guard.register_hit());
        assert_eq!(guard.timer, 3.0);
        assert!(guard.is_raised());
    }

    #[test]
    fn test_orbit_sign_follows_parity() {
        let mut guard = GuardState::new(3.0, 10);
        assert_eq!(guard.orbit_sign(), 1.0);
        guard.register_hit();
        assert_eq!(guard.orbit_sign(), -1.0);
        guard.register_hit();
        assert_eq!(guard.orbit_sign(), 1.0);
    }

    #[test]
    fn test_credit_block_halves_counter() {
        let mut guard = GuardState::new(3.0, 2);
        guard.consecutive_hits = 3;
        guard.timer = 2.0;

        guard.credit_block(7);
        assert!(guard.has_blocked);
        assert_eq!(guard.consecutive_hits, 1);
        assert_eq!(guard.hits_to_block, 7);
        assert!(guard.is_raised());

        guard.credit_block(4);
        assert_eq!(guard.consecutive_hits, 0);
        assert!(!guard.is_raised());
    }

    #[test]
    fn test_tick_only_while_defending() {
        let mut guard = GuardState::new(3.0, 2);
        guard.consecutive_hits = 5;
        guard.timer = 1.0;

        guard.tick(0.5, false);
        assert_eq!(guard.timer, 1.0);

        guard.tick(0.5, true);
        assert_eq!(guard.timer, 0.5);
        assert_eq!(guard.consecutive_hits, 5);

        guard.tick(0.5, true);
        assert!(!guard.is_raised());
        assert_eq!(guard.consecutive_hits, 0);
    }
}
