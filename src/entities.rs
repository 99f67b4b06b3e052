/// Game entity types. Plain data plus a few status helpers.

use std::time::Instant;

use crate::assets::SpriteId;
use crate::audio::SoundCue;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::geometry::{Bounded, Rect};

// ── Canvas ────────────────────────────────────────────────────────────────────

/// Drawing area in pixels. Bounds clamping and spawn ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Player health ran out.
    Defeated,
    /// The boss's health ran out.
    BossDefeated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Running,
    GameOver(Outcome),
}

// ── Player & enemies ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per frame along each held direction.
    pub speed: f32,
    pub health: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per frame, downward.
    pub speed: f32,
    pub health: u32,
    pub sprite: SpriteId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub health: u32,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per frame, upward.
    pub speed: f32,
}

impl Bounded for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Bounded for Boss {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Bounded for Projectile {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Session aggregate ─────────────────────────────────────────────────────────

/// The entire session. Cloneable so the pure update functions can return a
/// new copy; a restart replaces it wholesale.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub player: Player,
    /// Current wave. Empty while a new wave is pending or the boss is up.
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    /// Present exactly while `is_boss_level` is set.
    pub boss: Option<Boss>,
    pub score: u32,
    pub level: u32,
    pub is_boss_level: bool,
    pub status: GameStatus,
    pub canvas: Canvas,
    /// Time of the last successful shot, for the fire cooldown.
    pub last_shot: Option<Instant>,
    pub frame: u64,
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }
}

/// A new state plus the sound cues produced while computing it.
#[derive(Clone, Debug)]
pub struct Update {
    pub state: SessionState,
    pub cues: Vec<SoundCue>,
}

impl Update {
    pub fn quiet(state: SessionState) -> Self {
        Self {
            state,
            cues: Vec::new(),
        }
    }
}
