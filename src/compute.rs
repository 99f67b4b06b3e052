/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `SessionState` (and, where needed, an RNG handle) and returns a brand-new
/// state. Side effects are limited to the injected RNG and the sound cues
/// handed back in `Update`.

use std::time::Instant;

use rand::Rng;

use crate::audio::SoundCue;
use crate::combat;
use crate::entities::{Canvas, GameStatus, SessionState, Update};
use crate::input::InputSnapshot;
use crate::movement::{advance_enemies, advance_projectiles, move_player};
use crate::progression;
use crate::spawn::{player_shoot, spawn_player, spawn_wave};

// ── Constructors ─────────────────────────────────────────────────────────────

/// A session that has not been started: no wave, nothing moves.
pub fn idle_state(canvas: Canvas) -> SessionState {
    SessionState {
        player: spawn_player(),
        enemies: Vec::new(),
        projectiles: Vec::new(),
        boss: None,
        score: 0,
        level: 1,
        is_boss_level: false,
        status: GameStatus::NotStarted,
        canvas,
        last_shot: None,
        frame: 0,
    }
}

/// Build a running session at level 1 with its first wave.
pub fn init_state(canvas: Canvas, rng: &mut impl Rng) -> SessionState {
    let idle = idle_state(canvas);
    SessionState {
        enemies: spawn_wave(idle.level, &canvas, rng),
        status: GameStatus::Running,
        ..idle
    }
}

/// Throw the old session away and start again on the same canvas.
pub fn restart(state: &SessionState, rng: &mut impl Rng) -> Update {
    log::info!(
        "session restarted (previous: level {}, score {})",
        state.level,
        state.score
    );
    Update {
        state: init_state(state.canvas, rng),
        cues: vec![SoundCue::MusicStart],
    }
}

/// Swap the canvas (fullscreen toggle or viewport resize). Entities keep
/// their positions; the next movement step clamps the player.
pub fn resize(state: &SessionState, canvas: Canvas) -> SessionState {
    SessionState {
        canvas,
        ..state.clone()
    }
}

// ── Per-frame tick (RNG is injected) ─────────────────────────────────────────

/// Advance the simulation by one frame. A session that is not running comes
/// back untouched.
pub fn tick(
    state: &SessionState,
    input: &InputSnapshot,
    now: Instant,
    rng: &mut impl Rng,
) -> Update {
    if !state.is_running() {
        return Update::quiet(state.clone());
    }
    let mut cues = Vec::new();

    // ── 1. Fire request ──────────────────────────────────────────────────────
    let state = if input.fire {
        let shot = player_shoot(state, now);
        cues.extend(shot.cues);
        shot.state
    } else {
        state.clone()
    };

    // ── 2. Movement ──────────────────────────────────────────────────────────
    let player = move_player(&state.player, input, &state.canvas);
    let enemies = advance_enemies(&state.enemies, &state.canvas, rng);

    // ── 3. Projectile physics ────────────────────────────────────────────────
    let projectiles = advance_projectiles(&state.projectiles);

    let moved = SessionState {
        player,
        enemies,
        projectiles,
        frame: state.frame + 1,
        ..state
    };

    // ── 4. Combat ────────────────────────────────────────────────────────────
    let fought = combat::resolve(&moved);
    cues.extend(fought.cues);

    // ── 5. Progression ───────────────────────────────────────────────────────
    let progressed = progression::advance(&fought.state, rng);
    cues.extend(progressed.cues);

    Update {
        state: progressed.state,
        cues,
    }
}
