//! Movement components: desired vs. applied motion with exponential smoothing

use bevy::prelude::*;

/// Motion of a fighter.
///
/// - `target` is the desired direction, each axis clamped to [-1, 1]
/// - `current` is what actually moves the body; it chases `target`
///   unless snapped (knockback)
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct Motion {
    pub current: Vec2,
    pub target: Vec2,
}

impl Motion {
    /// Set desired motion, clamping each axis so speed stays the velocity scale
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
    }

    pub fn set_target_vec(&mut self, motion: Vec2) {
        self.set_target(motion.x, motion.y);
    }

    /// Exponential blend toward `target` at `rate` per second
    pub fn blend(&mut self, rate: f32, delta: f32) {
        let amount = (rate * delta).clamp(0.0, 1.0);
        self.current = self.current.lerp(self.target, amount);
    }

    /// Direct assignment, no smoothing
    pub fn snap(&mut self) {
        self.current = self.target;
    }

    /// Drop the part of both vectors that points against `outward`.
    ///
    /// Tangential and outward components survive, so bodies slide along each
    /// other instead of bouncing.
    pub fn cancel_inward(&mut self, outward: Vec2) {
        self.current = without_inward(self.current, outward);
        let target = without_inward(self.target, outward);
        self.set_target_vec(target);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn without_inward(motion: Vec2, outward: Vec2) -> Vec2 {
    let along = motion.dot(outward);
    if along < 0.0 {
        motion - outward * along
    } else {
        motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_is_clamped_per_axis() {
        let mut motion = Motion::default();
        motion.set_target(35.0, -0.5);
        assert_eq!(motion.target, Vec2::new(1.0, -0.5));

        motion.set_target_vec(Vec2::new(-4.0, -4.0));
        assert_eq!(motion.target, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_blend_moves_toward_target() {
        let mut motion = Motion::default();
        motion.set_target(1.0, 0.0);

        motion.blend(8.5, 0.1); // 85% of the way
        assert!((motion.current.x - 0.85).abs() < 1e-6);

        motion.blend(8.5, 10.0); // huge delta never overshoots
        assert_eq!(motion.current, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_cancel_inward_keeps_tangential() {
        let mut motion = Motion {
            current: Vec2::new(-1.0, 0.5),
            target: Vec2::new(-1.0, 1.0),
        };

        // Outward normal points +X, so the -X part is inward
        motion.cancel_inward(Vec2::X);
        assert_eq!(motion.current, Vec2::new(0.0, 0.5));
        assert_eq!(motion.target, Vec2::new(0.0, 1.0));

        // Outward motion is untouched
        let mut leaving = Motion {
            current: Vec2::new(1.0, 0.0),
            target: Vec2::new(1.0, 0.0),
        };
        leaving.cancel_inward(Vec2::X);
        assert_eq!(leaving.current, Vec2::new(1.0, 0.0));
    }
}
