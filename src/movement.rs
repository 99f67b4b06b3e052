/// Per-frame position updates.

use rand::Rng;

use crate::entities::{Canvas, Enemy, Player, Projectile};
use crate::input::InputSnapshot;
use crate::spawn::{random_below, random_spawn_height};

/// Move the player by `speed` along every held direction, then clamp so the
/// whole sprite stays on the canvas.
///
/// Displacement is computed per axis from the snapshot, so holding opposite
/// directions cancels out regardless of key order.
pub fn move_player(player: &Player, input: &InputSnapshot, canvas: &Canvas) -> Player {
    let x = player.x + input.horizontal() * player.speed;
    let y = player.y + input.vertical() * player.speed;

    // max after min: a canvas smaller than the player pins it to 0
    Player {
        x: x.min(canvas.width - player.width).max(0.0),
        y: y.min(canvas.height - player.height).max(0.0),
        ..player.clone()
    }
}

/// Drop every enemy by its speed. Enemies that fall past the bottom edge are
/// recycled to a fresh spot above the top instead of being removed.
pub fn advance_enemies(enemies: &[Enemy], canvas: &Canvas, rng: &mut impl Rng) -> Vec<Enemy> {
    enemies
        .iter()
        .map(|e| {
            let y = e.y + e.speed;
            if y > canvas.height {
                let respawn = Enemy {
                    x: random_below(rng, canvas.width),
                    y: random_spawn_height(rng),
                    ..e.clone()
                };
                log::trace!("enemy recycled to ({:.0}, {:.0})", respawn.x, respawn.y);
                respawn
            } else {
                Enemy { y, ..e.clone() }
            }
        })
        .collect()
}

/// Move projectiles up; those leaving through the top are discarded.
pub fn advance_projectiles(projectiles: &[Projectile]) -> Vec<Projectile> {
    projectiles
        .iter()
        .filter_map(|p| {
            let y = p.y - p.speed;
            if y < 0.0 {
                None
            } else {
                Some(Projectile { y, ..p.clone() })
            }
        })
        .collect()
}
