/// Level advancement, boss entry and end-of-session detection.

use rand::Rng;

use crate::audio::SoundCue;
use crate::consts::MAX_LEVELS;
use crate::entities::{GameStatus, Outcome, SessionState, Update};
use crate::spawn::{spawn_boss, spawn_wave};

/// Evaluate the post-combat state once and apply at most one transition.
///
/// Priority: player death, boss death, cleared wave, level cap.
pub fn advance(state: &SessionState, rng: &mut impl Rng) -> Update {
    if !state.is_running() {
        return Update::quiet(state.clone());
    }

    if state.player.health == 0 {
        return end_session(state, Outcome::Defeated);
    }

    if state.boss.as_ref().is_some_and(|b| b.health == 0) {
        return end_session(state, Outcome::BossDefeated);
    }

    if !state.is_boss_level && state.enemies.is_empty() {
        let level = state.level + 1;
        if level > MAX_LEVELS {
            return Update::quiet(enter_boss_level(state, level));
        }
        let enemies = spawn_wave(level, &state.canvas, rng);
        log::info!("level {} ({} enemies)", level, enemies.len());
        return Update::quiet(SessionState {
            level,
            enemies,
            ..state.clone()
        });
    }

    if !state.is_boss_level && state.level > MAX_LEVELS {
        return Update::quiet(enter_boss_level(state, state.level));
    }

    Update::quiet(state.clone())
}

fn enter_boss_level(state: &SessionState, level: u32) -> SessionState {
    log::info!("level {}: boss level", level);
    SessionState {
        level,
        is_boss_level: true,
        boss: Some(spawn_boss()),
        enemies: Vec::new(),
        ..state.clone()
    }
}

fn end_session(state: &SessionState, outcome: Outcome) -> Update {
    log::info!(
        "game over: {:?} at level {} with score {}",
        outcome,
        state.level,
        state.score
    );
    Update {
        state: SessionState {
            status: GameStatus::GameOver(outcome),
            ..state.clone()
        },
        cues: vec![SoundCue::MusicStop],
    }
}
