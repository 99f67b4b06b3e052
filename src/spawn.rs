/// Entity factories and the fire gate.
///
/// Randomness comes through the injected `rng` so callers control
/// determinism (tests use a seeded `StdRng`).

use std::time::Instant;

use rand::Rng;

use crate::assets::SpriteId;
use crate::audio::SoundCue;
use crate::consts::*;
use crate::entities::{Boss, Canvas, Enemy, Player, Projectile, SessionState, Update};

pub fn spawn_player() -> Player {
    Player {
        x: PLAYER_START_X,
        y: PLAYER_START_Y,
        width: PLAYER_SIZE,
        height: PLAYER_SIZE,
        speed: PLAYER_SPEED,
        health: PLAYER_HEALTH,
    }
}

pub fn enemy_speed(level: u32) -> f32 {
    ENEMY_BASE_SPEED + level as f32 * ENEMY_SPEED_PER_LEVEL
}

pub fn enemy_health(level: u32) -> u32 {
    ENEMY_BASE_HEALTH + level * ENEMY_HEALTH_PER_LEVEL
}

/// Uniform in `[0, max)`, or 0 when the range is empty.
pub(crate) fn random_below(rng: &mut impl Rng, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}

/// Uniform in `[-ENEMY_SPAWN_BAND, 0)`, just above the top edge.
pub(crate) fn random_spawn_height(rng: &mut impl Rng) -> f32 {
    rng.gen_range(-ENEMY_SPAWN_BAND..0.0)
}

/// Build the wave for `level`: `level * 5` enemies scattered above the top
/// edge, faster and tougher as the level rises.
pub fn spawn_wave(level: u32, canvas: &Canvas, rng: &mut impl Rng) -> Vec<Enemy> {
    let count = level as usize * ENEMIES_PER_LEVEL;
    let speed = enemy_speed(level);
    let health = enemy_health(level);

    (0..count)
        .map(|_| Enemy {
            x: random_below(rng, canvas.width - ENEMY_SIZE),
            y: random_spawn_height(rng),
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
            speed,
            health,
            sprite: SpriteId::Enemy,
        })
        .collect()
}

pub fn spawn_boss() -> Boss {
    Boss {
        x: BOSS_X,
        y: BOSS_Y,
        width: BOSS_SIZE,
        height: BOSS_SIZE,
        health: BOSS_HEALTH,
    }
}

/// A projectile leaving from the top of the player, roughly centred.
pub fn spawn_projectile(player: &Player) -> Projectile {
    Projectile {
        x: player.x + player.width / 2.0 - PROJECTILE_CENTER_OFFSET,
        y: player.y,
        width: PROJECTILE_WIDTH,
        height: PROJECTILE_HEIGHT,
        speed: PROJECTILE_SPEED,
    }
}

/// True when a shot at `now` is allowed by the cooldown.
pub fn can_fire(last_shot: Option<Instant>, now: Instant) -> bool {
    match last_shot {
        None => true,
        Some(last) => now.saturating_duration_since(last) > SHOT_COOLDOWN,
    }
}

/// Fire a projectile if the session is running and the cooldown has passed.
/// Otherwise the state comes back unchanged and silent.
pub fn player_shoot(state: &SessionState, now: Instant) -> Update {
    if !state.is_running() || !can_fire(state.last_shot, now) {
        return Update::quiet(state.clone());
    }

    let mut projectiles = state.projectiles.clone();
    projectiles.push(spawn_projectile(&state.player));
    log::debug!("shot fired ({} in flight)", projectiles.len());

    Update {
        state: SessionState {
            projectiles,
            last_shot: Some(now),
            ..state.clone()
        },
        cues: vec![SoundCue::Shot],
    }
}
