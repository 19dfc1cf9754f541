//! Tests for damage handling.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use bevy::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::ai::EnemyBrain;
    use crate::combat::{comeback_strength, HitOutcome};
    use crate::components::HitFeedback;
    use crate::config::{EnemyTuning, FighterTuning};
    use crate::fighter::Fighter;

    fn enemy_at(position: Vec2) -> Fighter {
        let brain = EnemyBrain::new(0.0, EnemyTuning::default(), ChaCha8Rng::seed_from_u64(7));
        Fighter::enemy(position, FighterTuning::enemy(), brain)
    }

    #[test]
    fn test_player_hit_once_then_immune() {
        let mut player = Fighter::player(Vec2::ZERO, FighterTuning::player());
        let enemy = enemy_at(Vec2::new(20.0, 0.0));

        assert!(player.try_get_damaged_by(&enemy, enemy.damage()));
        assert_eq!(player.health().current, 95);
        assert!(player.is_on_knockback());

        // Still sliding → rejected, no stacking
        assert!(!player.try_get_damaged_by(&enemy, enemy.damage()));
        assert_eq!(player.health().current, 95);
    }

    #[test]
    fn test_knockback_points_away_from_attacker() {
        let mut player = Fighter::player(Vec2::ZERO, FighterTuning::player());

        assert_eq!(player.receive_hit(Vec2::new(10.0, 0.0), 5), HitOutcome::Applied);
        assert_eq!(player.body.knockback.direction, Vec2::new(-1.0, 0.0));
        assert_eq!(player.body.knockback.timer, 0.15);
        assert_eq!(player.body.knockback.force, 2.25);
        assert_eq!(player.body.last_hit, Some(HitFeedback::Damaged(5)));
    }

    #[test]
    fn test_defending_blocks_damage() {
        let mut player = Fighter::player(Vec2::ZERO, FighterTuning::player());
        player.body.defending = true;

        assert_eq!(player.receive_hit(Vec2::new(0.0, 10.0), 5), HitOutcome::Blocked);
        assert_eq!(player.health().current, 100);

        // Reduced knockback: 35% duration, 10% force
        assert_relative_eq!(player.body.knockback.timer, 0.15 * 0.35);
        assert_relative_eq!(player.body.knockback.force, 2.25 * 0.1);
        assert_eq!(player.body.knockback.direction, Vec2::new(0.0, -1.0));
        assert_eq!(player.body.last_hit, Some(HitFeedback::Blocked));
    }

    #[test]
    fn test_blocked_hit_is_not_damage() {
        let mut player = Fighter::player(Vec2::ZERO, FighterTuning::player());
        let enemy = enemy_at(Vec2::new(20.0, 0.0));
        player.body.defending = true;

        assert!(!player.try_get_damaged_by(&enemy, 5));
        assert_eq!(player.strength(), 8.0);
    }

    #[test]
    fn test_player_strength_scales_with_missing_health() {
        let mut player = Fighter::player(Vec2::ZERO, FighterTuning::player());

        player.receive_hit(Vec2::X, 50);
        assert_eq!(player.health().current, 50);
        assert_relative_eq!(player.strength(), 16.0);
        assert_eq!(player.damage(), 16);
    }

    #[test]
    fn test_comeback_strength_never_below_base() {
        assert_eq!(comeback_strength(8.0, 1.0), 8.0);
        assert_relative_eq!(comeback_strength(8.0, 0.95), 8.0 / 0.95);
        assert_eq!(comeback_strength(8.0, 0.25), 32.0);
        assert_eq!(comeback_strength(8.0, 0.0), 8.0);
        // Overheal ratio would lower strength, clamped instead
        assert_eq!(comeback_strength(8.0, 2.0), 8.0);
    }

    #[test]
    fn test_dead_fighter_ignores_hits() {
        let mut player = Fighter::player(Vec2::ZERO, FighterTuning::player());
        player.receive_hit(Vec2::X, 500);
        assert!(!player.is_alive());

        player.body.knockback.timer = 0.0;
        assert_eq!(player.receive_hit(Vec2::X, 5), HitOutcome::Immune);
        assert_eq!(player.health().current, 0);
    }
}
