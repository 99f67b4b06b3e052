/// Render pass.
///
/// Translates state into an ordered list of draw commands plus HUD text.
/// Pixel output belongs to a `Surface` supplied by the environment.

use crate::assets::{Assets, SpriteId};
use crate::entities::SessionState;
use crate::geometry::{Bounded, Rect};

// ── Colour palette for fallback fills ────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Blue,
    Green,
    Red,
}

const C_PLAYER: Color = Color::Blue;
const C_ENEMY: Color = Color::Green;
const C_PROJECTILE: Color = Color::Red;
const C_BOSS: Color = Color::Red;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Draw a loaded sprite stretched over `rect`.
    Sprite { sprite: SpriteId, rect: Rect },
    /// Solid rectangle.
    Fill { color: Color, rect: Rect },
}

impl DrawCommand {
    pub fn rect(&self) -> Rect {
        match self {
            DrawCommand::Sprite { rect, .. } | DrawCommand::Fill { rect, .. } => *rect,
        }
    }
}

/// Everything one frame needs to show.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// In draw order: player, enemies, boss, projectiles.
    pub commands: Vec<DrawCommand>,
    pub score_text: String,
    pub level_text: String,
}

/// A drawing target provided by the environment.
pub trait Surface {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn draw(&mut self, command: &DrawCommand) -> Result<(), Self::Error>;

    /// HUD text on line `line` (0 is the top line).
    fn text(&mut self, line: u16, text: &str) -> Result<(), Self::Error>;

    /// Called once all of a frame has been drawn.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Sprite if its asset is loaded, otherwise a solid fallback fill.
fn sprite_or_fill(assets: &Assets, sprite: SpriteId, fallback: Color, rect: Rect) -> DrawCommand {
    if assets.is_loaded(sprite) {
        DrawCommand::Sprite { sprite, rect }
    } else {
        DrawCommand::Fill {
            color: fallback,
            rect,
        }
    }
}

pub fn build_frame(state: &SessionState, assets: &Assets) -> Frame {
    let mut commands = Vec::with_capacity(2 + state.enemies.len() + state.projectiles.len());

    commands.push(sprite_or_fill(
        assets,
        SpriteId::Player,
        C_PLAYER,
        state.player.bounds(),
    ));
    for enemy in &state.enemies {
        commands.push(sprite_or_fill(assets, enemy.sprite, C_ENEMY, enemy.bounds()));
    }
    if let Some(boss) = &state.boss {
        commands.push(DrawCommand::Fill {
            color: C_BOSS,
            rect: boss.bounds(),
        });
    }
    for projectile in &state.projectiles {
        commands.push(sprite_or_fill(
            assets,
            SpriteId::Projectile,
            C_PROJECTILE,
            projectile.bounds(),
        ));
    }

    Frame {
        commands,
        score_text: format!("Score: {}", state.score),
        level_text: format!("Level: {}", state.level),
    }
}

/// Render one complete frame onto `surface`.
pub fn render<S: Surface>(
    surface: &mut S,
    state: &SessionState,
    assets: &Assets,
) -> Result<(), S::Error> {
    let frame = build_frame(state, assets);

    surface.clear()?;
    for command in &frame.commands {
        surface.draw(command)?;
    }
    surface.text(0, &frame.score_text)?;
    surface.text(1, &frame.level_text)?;
    surface.present()
}
