/// Collision handling between projectiles, enemies, the boss and the player.
///
/// Every pass marks entities first and rebuilds the collections from the
/// survivors afterwards, so no entry is skipped or visited twice.

use crate::audio::SoundCue;
use crate::consts::*;
use crate::entities::{SessionState, Update};
use crate::geometry::collide;

/// Resolve one frame of combat on an already-moved state.
pub fn resolve(state: &SessionState) -> Update {
    let mut cues = Vec::new();
    let mut player = state.player.clone();
    let mut enemies = state.enemies.clone();
    let mut boss = state.boss.clone();

    // ── 1. Enemy contact ↔ player ────────────────────────────────────────────
    // Each overlapping enemy hurts once per frame; there is no grace period.
    let contacts = enemies.iter().filter(|e| collide(&player, *e)).count() as u32;
    player.health = player
        .health
        .saturating_sub(contacts * ENEMY_CONTACT_DAMAGE);

    // ── 2. Projectiles ↔ enemies ─────────────────────────────────────────────
    let mut dead = vec![false; enemies.len()];
    let mut spent = vec![false; state.projectiles.len()];
    let mut score_gain = 0;

    for (pi, projectile) in state.projectiles.iter().enumerate() {
        // A projectile is consumed by the first live enemy it touches
        let target = (0..enemies.len()).find(|&ei| !dead[ei] && collide(projectile, &enemies[ei]));
        let Some(ei) = target else { continue };

        spent[pi] = true;
        let enemy = &mut enemies[ei];
        enemy.health = enemy.health.saturating_sub(PROJECTILE_DAMAGE);
        if enemy.health == 0 {
            dead[ei] = true;
            score_gain += KILL_SCORE;
            cues.push(SoundCue::EnemyKilled);
            log::debug!("enemy killed at ({:.0}, {:.0})", enemy.x, enemy.y);
        }
    }

    // ── 3. Boss ──────────────────────────────────────────────────────────────
    if let Some(boss) = boss.as_mut() {
        for (pi, projectile) in state.projectiles.iter().enumerate() {
            if !spent[pi] && collide(projectile, &*boss) {
                spent[pi] = true;
                boss.health = boss.health.saturating_sub(PROJECTILE_DAMAGE);
            }
        }
        if collide(&player, &*boss) {
            player.health = player.health.saturating_sub(BOSS_CONTACT_DAMAGE);
        }
    }

    // ── 4. Compact ───────────────────────────────────────────────────────────
    let enemies = enemies
        .into_iter()
        .zip(dead)
        .filter(|(_, dead)| !dead)
        .map(|(e, _)| e)
        .collect();

    let projectiles = state
        .projectiles
        .iter()
        .zip(spent)
        .filter(|(_, spent)| !spent)
        .map(|(p, _)| p.clone())
        .collect();

    Update {
        state: SessionState {
            player,
            enemies,
            projectiles,
            boss,
            score: state.score + score_gain,
            ..state.clone()
        },
        cues,
    }
}
