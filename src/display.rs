/// Terminal rendering layer. All terminal I/O lives here.
///
/// The canvas is measured in pixels; the terminal in cells. `Layout` maps
/// one onto the other, assuming a cell is `CELL_WIDTH` × `CELL_HEIGHT`
/// pixels, and `TerminalSurface` draws the core's frames through it. No game
/// logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use zombie_shooter::assets::{AssetState, Assets, SpriteId};
use zombie_shooter::consts::{PROJECTILE_HEIGHT, PROJECTILE_WIDTH};
use zombie_shooter::entities::{Canvas, GameStatus, Outcome, SessionState};
use zombie_shooter::geometry::Rect;
use zombie_shooter::render::{self, DrawCommand, Surface};

/// Nominal pixel size of one terminal cell.
pub const CELL_WIDTH: f32 = 8.0;
pub const CELL_HEIGHT: f32 = 16.0;

/// Border columns/rows around the playfield plus the hint row.
const FRAME_COLS: u16 = 2;
const FRAME_ROWS: u16 = 3;

pub const MIN_COLS: u16 = 24;
pub const MIN_ROWS: u16 = 12;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY: Color = Color::Green;
const C_PROJECTILE: Color = Color::Yellow;

const CONTROLS_HINT: &str = "←↑↓→ / WASD : Move   F / SPACE : Shoot   TAB : Fullscreen   Q : Quit";

// ── Layout ────────────────────────────────────────────────────────────────────

/// Placement of the canvas inside the terminal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Terminal cell of the canvas's top-left corner.
    pub origin_col: u16,
    pub origin_row: u16,
    /// Playfield size in cells.
    pub cols: u16,
    pub rows: u16,
    /// Cells per canvas pixel.
    pub scale_x: f32,
    pub scale_y: f32,
    pub term_cols: u16,
    pub term_rows: u16,
}

impl Layout {
    /// Fit `canvas` into the terminal, preserving its aspect ratio.
    pub fn fit(canvas: &Canvas, term_cols: u16, term_rows: u16) -> Self {
        let avail_cols = term_cols.saturating_sub(FRAME_COLS).max(1);
        let avail_rows = term_rows.saturating_sub(FRAME_ROWS).max(1);

        let zoom = (avail_cols as f32 * CELL_WIDTH / canvas.width)
            .min(avail_rows as f32 * CELL_HEIGHT / canvas.height);
        let cols = ((canvas.width * zoom / CELL_WIDTH) as u16).clamp(1, avail_cols);
        let rows = ((canvas.height * zoom / CELL_HEIGHT) as u16).clamp(1, avail_rows);

        Layout {
            origin_col: (avail_cols - cols) / 2 + 1,
            origin_row: 1,
            cols,
            rows,
            scale_x: cols as f32 / canvas.width,
            scale_y: rows as f32 / canvas.height,
            term_cols,
            term_rows,
        }
    }

    /// The canvas a fullscreen session uses: the whole playable terminal.
    pub fn viewport_canvas(term_cols: u16, term_rows: u16) -> Canvas {
        Canvas::new(
            term_cols.saturating_sub(FRAME_COLS).max(1) as f32 * CELL_WIDTH,
            term_rows.saturating_sub(FRAME_ROWS).max(1) as f32 * CELL_HEIGHT,
        )
    }

    /// Sprites need at least two columns and one row at the smallest sprite
    /// size, otherwise they degrade to solid fills.
    pub fn sprites_legible(&self) -> bool {
        PROJECTILE_WIDTH * self.scale_x >= 2.0 && PROJECTILE_HEIGHT * self.scale_y >= 1.0
    }

    /// Canvas coordinates of the centre of a terminal cell, if it lies on the
    /// playfield.
    pub fn to_canvas(&self, col: u16, row: u16) -> Option<(f32, f32)> {
        let c = col.checked_sub(self.origin_col)?;
        let r = row.checked_sub(self.origin_row)?;
        if c >= self.cols || r >= self.rows {
            return None;
        }
        Some((
            (c as f32 + 0.5) / self.scale_x,
            (r as f32 + 0.5) / self.scale_y,
        ))
    }

    /// Playfield cells covered by `rect`, clipped: `(col0, row0, col1, row1)`
    /// with exclusive ends.
    fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = (rect.x * self.scale_x).floor().max(0.0);
        let c1 = (rect.right() * self.scale_x).ceil().min(self.cols as f32);
        let r0 = (rect.y * self.scale_y).floor().max(0.0);
        let r1 = (rect.bottom() * self.scale_y).ceil().min(self.rows as f32);
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((c0 as u16, r0 as u16, c1 as u16, r1 as u16))
    }
}

/// Resolve sprite handles for the current layout. Called whenever the layout
/// changes, never per frame.
pub fn resolve_assets(layout: &Layout, assets: &mut Assets) {
    let state = if layout.sprites_legible() {
        AssetState::Loaded
    } else {
        AssetState::Pending
    };
    for sprite in [SpriteId::Player, SpriteId::Enemy, SpriteId::Projectile] {
        assets.set(sprite, state);
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

pub struct TerminalSurface<'a, W: Write> {
    out: &'a mut W,
    layout: Layout,
}

impl<'a, W: Write> TerminalSurface<'a, W> {
    pub fn new(out: &'a mut W, layout: Layout) -> Self {
        Self { out, layout }
    }

    fn fill(&mut self, cells: (u16, u16, u16, u16), glyph: char, color: Color) -> std::io::Result<()> {
        let (c0, r0, c1, r1) = cells;
        let run: String = std::iter::repeat(glyph).take((c1 - c0) as usize).collect();
        self.out.queue(style::SetForegroundColor(color))?;
        for row in r0..r1 {
            self.out.queue(cursor::MoveTo(
                self.layout.origin_col + c0,
                self.layout.origin_row + row,
            ))?;
            self.out.queue(Print(&run))?;
        }
        Ok(())
    }

    fn draw_border(&mut self) -> std::io::Result<()> {
        let l = self.layout;
        let left = l.origin_col - 1;
        let right = l.origin_col + l.cols;
        let bottom = l.origin_row + l.rows;
        let bar = "─".repeat(l.cols as usize);

        self.out.queue(style::SetForegroundColor(C_BORDER))?;
        self.out.queue(cursor::MoveTo(left, 0))?;
        self.out.queue(Print(format!("┌{}┐", bar)))?;
        self.out.queue(cursor::MoveTo(left, bottom))?;
        self.out.queue(Print(format!("└{}┘", bar)))?;
        for row in l.origin_row..bottom {
            self.out.queue(cursor::MoveTo(left, row))?;
            self.out.queue(Print("│"))?;
            self.out.queue(cursor::MoveTo(right, row))?;
            self.out.queue(Print("│"))?;
        }
        Ok(())
    }
}

fn sprite_glyph(sprite: SpriteId) -> (char, Color) {
    match sprite {
        SpriteId::Player => ('▲', C_PLAYER),
        SpriteId::Enemy => ('Z', C_ENEMY),
        SpriteId::Projectile => ('║', C_PROJECTILE),
    }
}

fn fill_color(color: render::Color) -> Color {
    match color {
        render::Color::Blue => Color::Blue,
        render::Color::Green => Color::DarkGreen,
        render::Color::Red => Color::Red,
    }
}

impl<W: Write> Surface for TerminalSurface<'_, W> {
    type Error = std::io::Error;

    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.draw_border()
    }

    fn draw(&mut self, command: &DrawCommand) -> std::io::Result<()> {
        let Some(cells) = self.layout.cells(&command.rect()) else {
            return Ok(());
        };
        let (glyph, color) = match command {
            DrawCommand::Sprite { sprite, .. } => sprite_glyph(*sprite),
            DrawCommand::Fill { color, .. } => ('█', fill_color(*color)),
        };
        self.fill(cells, glyph, color)
    }

    fn text(&mut self, line: u16, text: &str) -> std::io::Result<()> {
        if line >= self.layout.rows {
            return Ok(());
        }
        let visible: String = text.chars().take(self.layout.cols as usize).collect();
        self.out.queue(cursor::MoveTo(
            self.layout.origin_col,
            self.layout.origin_row + line,
        ))?;
        self.out.queue(style::SetForegroundColor(C_HUD))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        let hint_row = self.layout.term_rows.saturating_sub(1);
        let hint: String = CONTROLS_HINT
            .chars()
            .take(self.layout.term_cols.saturating_sub(1) as usize)
            .collect();
        self.out.queue(cursor::MoveTo(0, hint_row))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print(hint))?;

        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, hint_row))?;
        self.out.flush()
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

/// Print `lines` centred around the middle of the terminal.
fn centred<W: Write>(
    out: &mut W,
    term_cols: u16,
    term_rows: u16,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = term_cols / 2;
    let start_row = (term_rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

pub fn draw_menu<W: Write>(out: &mut W, term_cols: u16, term_rows: u16) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    centred(
        out,
        term_cols,
        term_rows,
        &[
            ("☣  ZOMBIE  SHOOTER  ☣", Color::Green),
            ("", Color::White),
            ("Survive ten waves, then face the boss.", Color::White),
            ("", Color::White),
            ("[ENTER] Start", Color::Yellow),
            ("[Q]     Quit", Color::DarkGrey),
            ("", Color::White),
            ("←↑↓→ / WASD : Move   F / SPACE : Shoot", Color::DarkGrey),
            ("Click the playfield to move toward it and shoot", Color::DarkGrey),
        ],
    )?;
    out.queue(style::ResetColor)?;
    out.flush()
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

pub fn draw_game_over<W: Write>(
    out: &mut W,
    state: &SessionState,
    layout: &Layout,
) -> std::io::Result<()> {
    let (banner, color) = match state.status {
        GameStatus::GameOver(Outcome::BossDefeated) => ("║   BOSS DEFEATED    ║", Color::Yellow),
        _ => ("║    GAME  OVER      ║", Color::Red),
    };
    let score_line = format!("Your score: {}", state.score);
    let level_line = format!("Reached level {}", state.level);

    centred(
        out,
        layout.term_cols,
        layout.term_rows,
        &[
            ("╔════════════════════╗", color),
            (banner, color),
            ("╚════════════════════╝", color),
            (score_line.as_str(), Color::Yellow),
            (level_line.as_str(), Color::White),
            ("R - Retry   M - Menu   Q - Quit", Color::White),
        ],
    )?;
    out.queue(style::ResetColor)?;
    out.flush()
}
