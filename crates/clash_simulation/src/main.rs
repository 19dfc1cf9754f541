//! Headless Classy Clash run
//!
//! Scripts a simple player (walk towards the nearest enemy, swing when close,
//! guard while hurt) and prints a summary. Usage: `clash_simulation [seed] [seconds]`

use bevy::prelude::*;
use clash_simulation::{
    init_logger, log_error, log_info, set_log_level, Arena, ArenaConfig, LogLevel, PlayerInput,
};

const DT: f32 = 1.0 / 60.0;

fn main() {
    init_logger();
    set_log_level(LogLevel::Info);

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(42);
    let seconds: f32 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(20.0);

    let mut arena = match Arena::new(ArenaConfig::default(), seed) {
        Ok(arena) => arena,
        Err(err) => {
            log_error(&format!("Invalid arena config: {}", err));
            std::process::exit(1);
        }
    };

    let frames = (seconds.max(0.0) / DT) as u64;
    let mut damage_dealt = 0;
    let mut blocks = 0;

    for frame in 0..frames {
        let input = scripted_input(&arena);
        let report = arena.step(DT, input);

        damage_dealt += report.total_damage();
        blocks += report
            .events
            .iter()
            .filter(|event| matches!(event, clash_simulation::CombatEvent::Blocked { .. }))
            .count();

        if frame % 120 == 0 {
            let player = arena.player();
            log_info(&format!(
                "Frame {}: player hp {} at ({:.0}, {:.0}), {} enemies alive",
                frame,
                player.health().current,
                player.position().x,
                player.position().y,
                arena.enemies().alive_count()
            ));
        }

        if !arena.is_player_alive() || arena.enemies().alive_count() == 0 {
            break;
        }
    }

    log_info(&format!(
        "Simulation complete after {:.1}s: {} damage dealt, {} blocks, player {}",
        arena.elapsed(),
        damage_dealt,
        blocks,
        if arena.is_player_alive() { "alive" } else { "dead" }
    ));
}

fn scripted_input(arena: &Arena) -> PlayerInput {
    let player = arena.player();
    let nearest = arena
        .enemies()
        .iter()
        .filter(|(_, enemy)| enemy.is_alive())
        .map(|(_, enemy)| enemy.position())
        .min_by(|a, b| {
            a.distance_squared(player.position())
                .total_cmp(&b.distance_squared(player.position()))
        });

    let Some(target) = nearest else {
        return PlayerInput::default();
    };

    let offset = target - player.position();
    let in_reach = offset.length() <= player.attack_distance();
    let hurt = player.health_ratio() < 0.5 && player.is_on_knockback();

    PlayerInput {
        attack: in_reach && !hurt,
        defend: hurt,
        aim: target,
        movement: if in_reach { Vec2::ZERO } else { offset.normalize_or_zero() },
    }
}
