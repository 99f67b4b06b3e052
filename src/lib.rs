//! Zombie Shooter - a single-screen arcade shooter.
//!
//! The library holds the whole simulation core; the binary is a terminal
//! frontend that supplies input, a drawing surface, audio and scheduling.
//!
//! - `entities`: pure data (player, wave, boss, projectiles, session)
//! - `compute`: session construction and the per-frame `tick`
//! - `driver`: frame driver that chains tick, audio and render
//! - `render`: draw-command generation behind the `Surface` seam

pub mod assets;
pub mod audio;
pub mod combat;
pub mod compute;
pub mod driver;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod movement;
pub mod progression;
pub mod render;
pub mod spawn;

/// Fixed game constants. There is no runtime configuration.
pub mod consts {
    use std::time::Duration;

    /// Default canvas size in pixels (portrait phone layout).
    pub const CANVAS_WIDTH: f32 = 360.0;
    pub const CANVAS_HEIGHT: f32 = 640.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 160.0;
    pub const PLAYER_START_Y: f32 = 580.0;
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_HEALTH: u32 = 100;

    /// Enemies share one size for the whole session
    pub const ENEMY_SIZE: f32 = 100.0;
    pub const ENEMIES_PER_LEVEL: usize = 5;
    pub const ENEMY_BASE_SPEED: f32 = 1.0;
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.2;
    pub const ENEMY_BASE_HEALTH: u32 = 20;
    pub const ENEMY_HEALTH_PER_LEVEL: u32 = 5;
    /// Enemies spawn (and respawn) this far above the top edge at most
    pub const ENEMY_SPAWN_BAND: f32 = 100.0;

    /// Boss
    pub const BOSS_X: f32 = 120.0;
    pub const BOSS_Y: f32 = 50.0;
    pub const BOSS_SIZE: f32 = 120.0;
    pub const BOSS_HEALTH: u32 = 200;

    /// Projectiles
    pub const PROJECTILE_WIDTH: f32 = 50.0;
    pub const PROJECTILE_HEIGHT: f32 = 30.0;
    pub const PROJECTILE_SPEED: f32 = 5.0;
    /// Horizontal nudge so the projectile sits over the player's centre
    pub const PROJECTILE_CENTER_OFFSET: f32 = 5.0;
    pub const SHOT_COOLDOWN: Duration = Duration::from_millis(300);

    /// Combat
    pub const ENEMY_CONTACT_DAMAGE: u32 = 10;
    pub const BOSS_CONTACT_DAMAGE: u32 = 20;
    pub const PROJECTILE_DAMAGE: u32 = 10;
    pub const KILL_SCORE: u32 = 10;

    /// Last regular level; clearing it starts the boss level
    pub const MAX_LEVELS: u32 = 10;

    /// Frame interval used by the terminal frontend (≈60 Hz)
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
}
